use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand, ValueEnum};
use sheetfold_core::types::{shared, Shared};
use sheetfold_core::Error;
use sheetfold_designer::{DesignerState, ExportFormat, FoldEnd, FoldId, Point};
use sheetfold_preview::{FoldPreview, RasterBackend};
use sheetfold_settings::Config;
use tracing::info;

use crate::sink::DirectorySink;

const VERSION_LINE: &str = concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("BUILD_DATE"), ")");

#[derive(Debug, Parser)]
#[command(
    name = "sheetfold",
    about = "Sheet-metal layout editor: fold lines, 3D fold preview, SVG/PNG/DXF export",
    version = VERSION_LINE
)]
pub struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Build a design and export it.
    Export(ExportArgs),

    /// Render turntable frames of the 3D fold preview as PNGs.
    Preview(PreviewArgs),

    /// Show or create the config file.
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration as TOML.
    Show,
    /// Write the default configuration.
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// The sheet and its folds, as the input fields would hold them.
#[derive(Debug, Clone, Args)]
pub struct DesignArgs {
    /// Sheet width
    #[arg(long)]
    pub width: String,

    /// Sheet height
    #[arg(long)]
    pub height: String,

    /// Fold as POSITION:up|down; repeatable
    #[arg(long = "fold")]
    pub folds: Vec<FoldSpec>,

    /// Endpoint move as INDEX:start|end:X,Y; repeatable, applied after folds
    #[arg(long = "endpoint")]
    pub endpoints: Vec<EndpointSpec>,
}

#[derive(Debug, Clone, Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub design: DesignArgs,

    #[arg(long, value_enum, default_value_t = FormatArg::All)]
    pub format: FormatArg,

    /// Output directory (defaults to the configured one)
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Debug, Clone, Args)]
pub struct PreviewArgs {
    #[command(flatten)]
    pub design: DesignArgs,

    /// Number of frames to write
    #[arg(long, default_value_t = 1)]
    pub frames: u32,

    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Svg,
    Png,
    Dxf,
    All,
}

impl FormatArg {
    pub fn formats(self) -> Vec<ExportFormat> {
        match self {
            Self::Svg => vec![ExportFormat::Svg],
            Self::Png => vec![ExportFormat::Png],
            Self::Dxf => vec![ExportFormat::Dxf],
            Self::All => ExportFormat::ALL.to_vec(),
        }
    }
}

/// `POSITION:DIRECTION`, both kept as raw field text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoldSpec {
    pub position: String,
    pub direction: String,
}

impl FromStr for FoldSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (position, direction) = s
            .split_once(':')
            .ok_or_else(|| format!("expected POSITION:up|down, got '{}'", s))?;
        Ok(Self {
            position: position.to_string(),
            direction: direction.to_string(),
        })
    }
}

/// `INDEX:start|end:X,Y`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EndpointSpec {
    pub fold: FoldId,
    pub end: FoldEnd,
    pub point: Point,
}

impl FromStr for EndpointSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let usage = || format!("expected INDEX:start|end:X,Y, got '{}'", s);
        let mut parts = s.splitn(3, ':');
        let (Some(index), Some(end), Some(coords)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(usage());
        };

        let index = index.trim().parse::<usize>().map_err(|_| usage())?;
        let end = match end.trim().to_lowercase().as_str() {
            "start" | "1" => FoldEnd::Start,
            "end" | "2" => FoldEnd::End,
            _ => return Err(usage()),
        };
        let (x, y) = coords.split_once(',').ok_or_else(usage)?;
        let x = x.trim().parse::<f64>().map_err(|_| usage())?;
        let y = y.trim().parse::<f64>().map_err(|_| usage())?;

        Ok(Self {
            fold: FoldId::new(index),
            end,
            point: Point::new(x, y),
        })
    }
}

pub fn run_from_env() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run(cli)
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let config_path = match cli.config {
        Some(path) => path,
        None => Config::default_path()?,
    };

    match cli.command {
        Commands::Export(args) => run_export(&config_path, args),
        Commands::Preview(args) => run_preview(&config_path, args),
        Commands::Config(ConfigCommand::Show) => {
            let config = Config::load_or_default(&config_path)?;
            print!("{}", toml::to_string_pretty(&config)?);
            Ok(())
        }
        Commands::Config(ConfigCommand::Init { force }) => {
            if config_path.exists() && !force {
                bail!(
                    "{} already exists (use --force to overwrite)",
                    config_path.display()
                );
            }
            Config::default().save_to_file(&config_path)?;
            info!("Wrote default config to {}", config_path.display());
            Ok(())
        }
    }
}

fn run_export(config_path: &Path, args: ExportArgs) -> anyhow::Result<()> {
    let config = Config::load_or_default(config_path)?;
    let out = args
        .out
        .clone()
        .unwrap_or_else(|| config.export.output_dir.clone());

    let mut session = DesignerState::new(config);
    apply_design(&mut session, &args.design)?;

    let mut sink = DirectorySink::new(out);
    for format in args.format.formats() {
        session
            .export_to(format, &mut sink)
            .with_context(|| format!("{} export failed", format))?;
    }
    for path in sink.written() {
        println!("{}", path.display());
    }
    Ok(())
}

fn run_preview(config_path: &Path, args: PreviewArgs) -> anyhow::Result<()> {
    let config = Config::load_or_default(config_path)?;
    let out = args
        .out
        .clone()
        .unwrap_or_else(|| config.export.output_dir.clone());

    let mut settings = config.preview.clone();
    settings.enabled = true;
    let preview = shared(FoldPreview::new(RasterBackend, settings));

    let mut session = DesignerState::new(config);
    session.add_listener(Box::new(preview.clone()));
    apply_design(&mut session, &args.design)?;

    let mut sink = DirectorySink::new(out);
    write_frames(&preview, args.frames, &mut sink)?;
    Ok(())
}

/// Captures `frames` turntable frames, advancing the loop between them.
fn write_frames(
    preview: &Shared<FoldPreview<RasterBackend>>,
    frames: u32,
    sink: &mut DirectorySink,
) -> sheetfold_core::Result<()> {
    if !preview.borrow().is_active() {
        return Err(Error::other("3D preview unavailable"));
    }
    for frame in 0..frames {
        if frame > 0 {
            preview.borrow_mut().tick();
        }
        let png = preview.borrow().capture_png()?;
        let path = sink.write_file(&format!("preview-{:03}.png", frame), &png)?;
        println!("{}", path.display());
    }
    Ok(())
}

/// Replays the design onto a fresh session the way the form would.
fn apply_design(session: &mut DesignerState, design: &DesignArgs) -> anyhow::Result<()> {
    session.set_sheet_from_input(&design.width, &design.height)?;
    for fold in &design.folds {
        session
            .add_fold_from_input(&fold.position, &fold.direction)
            .with_context(|| format!("fold {}:{}", fold.position, fold.direction))?;
    }
    for edit in &design.endpoints {
        session.set_fold_endpoint(edit.fold, edit.end, edit.point)?;
    }
    Ok(())
}
