use glam::{Mat4, Vec3, Vec4Swizzles};
use sheetfold_core::constants::{PREVIEW_FAR, PREVIEW_NEAR};
use sheetfold_settings::PreviewSettings;

use crate::mesh::Rgb;

/// Fixed perspective camera looking down -Z at the origin, Y up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub fov: f32, // degrees
    pub aspect_ratio: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::from_settings(&PreviewSettings::default())
    }
}

impl Camera {
    pub fn from_settings(settings: &PreviewSettings) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, settings.camera_distance as f32),
            target: Vec3::ZERO,
            fov: settings.fov_degrees as f32,
            aspect_ratio: settings.aspect_ratio() as f32,
            near: PREVIEW_NEAR as f32,
            far: PREVIEW_FAR as f32,
        }
    }

    pub fn get_view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, Vec3::Y)
    }

    pub fn get_projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fov.to_radians(),
            self.aspect_ratio,
            self.near,
            self.far,
        )
    }

    pub fn view_projection(&self) -> Mat4 {
        self.get_projection_matrix() * self.get_view_matrix()
    }

    /// Projects a world point to pixel coordinates on a `width x height`
    /// surface. Returns `(x, y, view_depth)`, or `None` behind the camera.
    pub fn project(&self, point: Vec3, width: u32, height: u32) -> Option<(f32, f32, f32)> {
        let clip = self.view_projection() * point.extend(1.0);
        if clip.w <= f32::EPSILON {
            return None;
        }
        let ndc = clip.xyz() / clip.w;
        let x = (ndc.x + 1.0) * 0.5 * width as f32;
        let y = (1.0 - ndc.y) * 0.5 * height as f32;
        let depth = (self.get_view_matrix() * point.extend(1.0)).z;
        Some((x, y, depth))
    }
}

/// Ambient plus one directional light, white.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lighting {
    pub ambient: f32,
    pub directional: f32,
    /// Points from the scene toward the light
    pub light_direction: Vec3,
}

impl Default for Lighting {
    fn default() -> Self {
        Self {
            ambient: 0.7,
            directional: 0.5,
            light_direction: Vec3::Z,
        }
    }
}

impl Lighting {
    /// Flat-shades `base` for a face with `normal`. Faces are double-sided.
    pub fn shade(&self, base: Rgb, normal: Vec3) -> Rgb {
        let lambert = normal.normalize_or_zero().dot(self.light_direction).abs();
        base.scaled(self.ambient + self.directional * lambert)
    }
}
