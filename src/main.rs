use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use enhancer_core::{AdjustmentParams, Filter, Session};

/// Adjust and filter a single image, then save the result.
///
/// Adjustments are applied first (always from the loaded image), then the
/// filters in the order given, then `--undo` steps are taken back.
#[derive(Debug, Parser)]
#[command(name = "enhancer", version)]
struct Args {
    /// Image to load (JPEG, PNG or BMP).
    input: PathBuf,

    /// Where to write the result. PNG or JPEG by extension; `.png` if none.
    output: PathBuf,

    #[arg(long, default_value_t = 1.0)]
    brightness: f32,

    #[arg(long, default_value_t = 1.0)]
    contrast: f32,

    #[arg(long, default_value_t = 1.0)]
    sharpness: f32,

    #[arg(long, default_value_t = 1.0)]
    color: f32,

    /// Filter to apply; repeat for more (grayscale, sepia, blur, edge,
    /// cartoon, sketch).
    #[arg(short, long = "filter", value_parser = parse_filter)]
    filters: Vec<Filter>,

    /// Number of steps to undo before saving.
    #[arg(long, default_value_t = 0)]
    undo: usize,
}

impl Args {
    fn params(&self) -> AdjustmentParams {
        AdjustmentParams {
            brightness: self.brightness,
            contrast: self.contrast,
            sharpness: self.sharpness,
            color: self.color,
        }
    }
}

fn parse_filter(name: &str) -> Result<Filter, String> {
    name.parse().map_err(|e: enhancer_core::EnhancerError| e.to_string())
}

fn run(args: &Args) -> Result<PathBuf> {
    let mut session = Session::new();
    session
        .load_image(&args.input)
        .with_context(|| format!("upload failed: {}", args.input.display()))?;

    let params = args.params();
    if !params.is_identity() {
        session.apply_adjustments(&params);
    }
    for &filter in &args.filters {
        session.apply_filter(filter);
    }
    for _ in 0..args.undo {
        if !session.undo() {
            break;
        }
    }

    match session
        .save(&args.output)
        .with_context(|| format!("save failed: {}", args.output.display()))?
    {
        Some(path) => Ok(path),
        None => bail!("no image loaded"),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let written = run(&args)?;
    info!(path = %written.display(), "done");
    Ok(())
}
