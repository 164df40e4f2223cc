//! # Halftonist CLI
//!
//! Command-line interface for turning images into vector halftones.
//!
//! ## Usage
//!
//! ```bash
//! # List available patterns
//! halftonist patterns
//!
//! # Monochrome dots, files written to ./out
//! halftonist render photo.jpg
//!
//! # CMYK spirals with plotter output
//! halftonist render photo.jpg --mode cmyk --pattern spiral --hpgl --out prints/
//!
//! # Start from a JSON config and override one value
//! halftonist render photo.jpg --config job.json --spacing 8
//! ```

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use halftonist::{
    ColorMode, HalftoneError, JobConfig, PatternType, input, job,
    patterns::PATTERNS,
    primitive::RenderStyle,
};

/// Halftonist - vector halftones for plotters and screen printing
#[derive(Parser, Debug)]
#[command(name = "halftonist")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render an image as halftone channels
    Render {
        /// Input image (PNG, JPEG, ...; HEIC with the `heif` feature)
        input: PathBuf,

        /// Output directory
        #[arg(long, default_value = "out")]
        out: PathBuf,

        /// JSON job config; flags below override its values
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Pattern name (see `halftonist patterns`)
        #[arg(long)]
        pattern: Option<String>,

        /// Colour mode: monochrome, duotone, tritone, cmyk
        #[arg(long)]
        mode: Option<String>,

        /// Largest mark size in pixels (2-20)
        #[arg(long)]
        dot_size: Option<f64>,

        /// Grid spacing in pixels (5-30)
        #[arg(long)]
        spacing: Option<f64>,

        /// Contrast percent (50-200)
        #[arg(long)]
        contrast: Option<f64>,

        /// Jitter percent for random patterns (0-100)
        #[arg(long)]
        randomness: Option<f64>,

        /// fill or stroke
        #[arg(long)]
        style: Option<String>,

        /// Outline width in pixels (0.5-5)
        #[arg(long)]
        stroke_width: Option<f64>,

        /// Mark angle for line, crosshatch and wave (0-180)
        #[arg(long)]
        line_angle: Option<f64>,

        /// Random seed
        #[arg(long)]
        seed: Option<u32>,

        /// Downscale so the longest edge is at most this many pixels
        #[arg(long, value_name = "PX")]
        max_size: Option<u32>,

        /// Also write HPGL plotter files
        #[arg(long)]
        hpgl: bool,

        /// Skip the composited preview.png
        #[arg(long)]
        no_preview: bool,
    },

    /// List available patterns
    Patterns,
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "halftonist=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), HalftoneError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Patterns => {
            println!("Available patterns:");
            for name in PATTERNS {
                println!("  {}", name);
            }
            Ok(())
        }
        Commands::Render {
            input,
            out,
            config,
            pattern,
            mode,
            dot_size,
            spacing,
            contrast,
            randomness,
            style,
            stroke_width,
            line_angle,
            seed,
            max_size,
            hpgl,
            no_preview,
        } => {
            let mut cfg = match config {
                Some(path) => JobConfig::from_json_file(path)?,
                None => JobConfig::default(),
            };

            if let Some(name) = pattern {
                cfg.pattern = PatternType::from_name(&name);
            }
            if let Some(name) = mode {
                cfg.color_mode = ColorMode::from_name(&name)
                    .ok_or_else(|| HalftoneError::Config(format!("Unknown colour mode '{}'", name)))?;
            }
            if let Some(name) = style {
                cfg.render_style = RenderStyle::from_name(&name)
                    .ok_or_else(|| HalftoneError::Config(format!("Unknown render style '{}'", name)))?;
            }
            cfg.dot_size = dot_size.unwrap_or(cfg.dot_size);
            cfg.spacing = spacing.unwrap_or(cfg.spacing);
            cfg.contrast = contrast.unwrap_or(cfg.contrast);
            cfg.randomness = randomness.unwrap_or(cfg.randomness);
            cfg.stroke_width = stroke_width.unwrap_or(cfg.stroke_width);
            cfg.line_angle = line_angle.unwrap_or(cfg.line_angle);
            cfg.seed = seed.unwrap_or(cfg.seed);

            let image = input::load_image(&input, max_size)?;
            let output = job::process_image(&image, &cfg)?;

            std::fs::create_dir_all(&out)?;
            for channel in &output.channels {
                let name = channel.channel.name();
                std::fs::write(out.join(format!("{}.svg", name)), &channel.svg)?;
                save_png(&channel.surface.to_image()?, &out.join(format!("{}.png", name)))?;
                if hpgl {
                    std::fs::write(out.join(format!("{}.hpgl", name)), channel.hpgl())?;
                }
                println!(
                    "{}: {} primitives",
                    name,
                    channel.primitives.len()
                );
            }
            if !no_preview {
                save_png(&output.composite()?, &out.join("preview.png"))?;
            }

            println!("Wrote {} channel(s) to {}", output.channels.len(), out.display());
            Ok(())
        }
    }
}

fn save_png(image: &image::RgbaImage, path: &Path) -> Result<(), HalftoneError> {
    image
        .save(path)
        .map_err(|e| HalftoneError::Image(format!("Failed to write {}: {}", path.display(), e)))
}
