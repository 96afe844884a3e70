use std::path::PathBuf;

use clap::Parser;
use rose_explorer::core::data::surface::SurfaceSize;
use rose_explorer::core::render::style::PatternColourMode;
use rose_explorer::{SnapshotOptions, render_snapshot};
use tracing_subscriber::EnvFilter;

/// Renders one frame of the times-table rose to a PPM file. The interactive
/// viewer lives in the `gui` binary (feature "gui").
#[derive(Parser, Debug)]
#[command(author, version, about = "Times-table rose snapshot renderer", long_about = None)]
struct Cli {
    /// Times factor to render.
    #[arg(long, default_value_t = 51.0)]
    factor: f64,

    /// Number of points on the circle.
    #[arg(long, default_value_t = 200)]
    points: u32,

    #[arg(long, default_value_t = 800)]
    width: u32,

    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Colouring strategy.
    #[arg(long, value_enum, default_value = "pattern")]
    mode: ColourModeArg,

    /// Render on the light palette instead of the dark one.
    #[arg(long)]
    light: bool,

    /// Also draw the circle outline.
    #[arg(long)]
    circle: bool,

    /// Also draw the point markers.
    #[arg(long)]
    markers: bool,

    /// Output path.
    #[arg(long, default_value = "output/rose.ppm")]
    out: PathBuf,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum ColourModeArg {
    None,
    Line,
    Pattern,
}

impl From<ColourModeArg> for PatternColourMode {
    fn from(arg: ColourModeArg) -> Self {
        match arg {
            ColourModeArg::None => PatternColourMode::None,
            ColourModeArg::Line => PatternColourMode::Line,
            ColourModeArg::Pattern => PatternColourMode::Pattern,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let cli = Cli::parse();

    let options = SnapshotOptions {
        canvas: SurfaceSize::new(cli.width, cli.height),
        times_factor: cli.factor,
        points_count: cli.points,
        colour_mode: cli.mode.into(),
        dark_mode: !cli.light,
        draw_circle: cli.circle,
        draw_points: cli.markers,
    };

    render_snapshot(options, &cli.out)
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init();
}
