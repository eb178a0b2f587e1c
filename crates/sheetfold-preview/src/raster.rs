//! Software rendering surface for the 3D preview using tiny-skia.
//!
//! Flat-shaded polygons drawn back to front (painter's algorithm) on a
//! transparent background, with the fold line drawn over them. Good enough
//! for two planar patches and a line.

use glam::Vec3;
use sheetfold_core::PreviewError;
use tiny_skia::{Color, FillRule, Paint, PathBuilder, Pixmap, Stroke, Transform};
use tracing::debug;

use crate::mesh::Rgb;
use crate::surface::{Frame, PreviewBackend, RenderSurface};

const FOLD_LINE_WIDTH: f32 = 2.0;

/// Backend handing out [`RasterSurface`]s.
#[derive(Debug, Default, Clone, Copy)]
pub struct RasterBackend;

impl PreviewBackend for RasterBackend {
    fn acquire(&mut self, width: u32, height: u32) -> Result<Box<dyn RenderSurface>, PreviewError> {
        Ok(Box::new(RasterSurface::new(width, height)?))
    }
}

/// An offscreen pixmap the preview renders into.
pub struct RasterSurface {
    pixmap: Option<Pixmap>,
    width: u32,
    height: u32,
}

enum DrawItem {
    Polygon { points: Vec<(f32, f32)>, color: Rgb },
    Line { start: (f32, f32), end: (f32, f32), color: Rgb },
}

impl RasterSurface {
    pub fn new(width: u32, height: u32) -> Result<Self, PreviewError> {
        let pixmap = Pixmap::new(width, height).ok_or_else(|| PreviewError::SurfaceUnavailable {
            width,
            height,
            reason: "cannot allocate pixmap".to_string(),
        })?;
        Ok(Self {
            pixmap: Some(pixmap),
            width,
            height,
        })
    }

    /// The pixmap, until the surface is released.
    pub fn pixmap(&self) -> Option<&Pixmap> {
        self.pixmap.as_ref()
    }

    fn draw(pixmap: &mut Pixmap, item: &DrawItem) {
        let mut paint = Paint::default();
        paint.anti_alias = true;

        match item {
            DrawItem::Polygon { points, color } => {
                let Some((first, rest)) = points.split_first() else {
                    return;
                };
                let mut pb = PathBuilder::new();
                pb.move_to(first.0, first.1);
                for p in rest {
                    pb.line_to(p.0, p.1);
                }
                pb.close();
                if let Some(path) = pb.finish() {
                    paint.set_color_rgba8(color.r, color.g, color.b, 255);
                    pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
                }
            }
            DrawItem::Line { start, end, color } => {
                let mut pb = PathBuilder::new();
                pb.move_to(start.0, start.1);
                pb.line_to(end.0, end.1);
                if let Some(path) = pb.finish() {
                    paint.set_color_rgba8(color.r, color.g, color.b, 255);
                    let stroke = Stroke {
                        width: FOLD_LINE_WIDTH,
                        ..Default::default()
                    };
                    pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
                }
            }
        }
    }
}

impl RenderSurface for RasterSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn render(&mut self, frame: &Frame<'_>) -> Result<(), PreviewError> {
        let (width, height) = (self.width, self.height);
        let pixmap = self.pixmap.as_mut().ok_or_else(|| PreviewError::SurfaceUnavailable {
            width,
            height,
            reason: "surface already released".to_string(),
        })?;
        pixmap.fill(Color::TRANSPARENT);

        let model = frame.model_matrix();
        let camera = frame.camera;
        let project = |p: Vec3| camera.project(model.transform_point3(p), width, height);

        // (view depth, polygon); view depth is negative in front of the camera.
        let mut polygons: Vec<(f32, DrawItem)> = Vec::new();

        for patch in &frame.mesh.patches {
            if patch.is_degenerate() {
                continue;
            }
            let projected: Option<Vec<(f32, f32, f32)>> =
                patch.vertices.iter().map(|&v| project(v)).collect();
            let Some(projected) = projected else {
                continue;
            };
            let depth = projected.iter().map(|p| p.2).sum::<f32>() / projected.len() as f32;
            let normal = model.transform_vector3(patch.normal());
            polygons.push((
                depth,
                DrawItem::Polygon {
                    points: projected.iter().map(|p| (p.0, p.1)).collect(),
                    color: frame.lighting.shade(patch.color, normal),
                },
            ));
        }

        // Farthest first.
        polygons.sort_by(|a, b| a.0.total_cmp(&b.0));
        for (_, item) in &polygons {
            Self::draw(pixmap, item);
        }

        // The fold line is a highlight and always goes on top.
        if let Some(line) = &frame.mesh.fold_line {
            if let (Some(a), Some(b)) = (project(line.start), project(line.end)) {
                let item = DrawItem::Line {
                    start: (a.0, a.1),
                    end: (b.0, b.1),
                    color: line.color,
                };
                Self::draw(pixmap, &item);
            }
        }
        Ok(())
    }

    fn release(&mut self) {
        if self.pixmap.take().is_some() {
            debug!("Released {}x{} raster surface", self.width, self.height);
        }
    }

    fn capture_png(&self) -> Result<Vec<u8>, PreviewError> {
        let pixmap = self
            .pixmap
            .as_ref()
            .ok_or_else(|| PreviewError::Capture("surface already released".to_string()))?;
        pixmap
            .encode_png()
            .map_err(|e| PreviewError::Capture(e.to_string()))
    }
}
