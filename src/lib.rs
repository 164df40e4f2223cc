//! # Halftonist - Vector Halftone Library
//!
//! Halftonist turns raster images into halftone reproductions for pen
//! plotters and screen printing. It provides:
//!
//! - **Colour separation**: monochrome, duotone, tritone and CMYK channels
//! - **Patterns**: thirteen screens, from classic dots to gradient flow fields
//! - **Synchronised output**: the same primitives drive a raster preview, an
//!   SVG document and an HPGL plotter program
//! - **Deterministic randomness**: a seeded generator, so identical jobs give
//!   identical files
//!
//! ## Quick Start
//!
//! ```no_run
//! use halftonist::{config::JobConfig, input, job};
//!
//! let image = input::load_image("photo.jpg", Some(800))?;
//! let config = JobConfig::from_json_str(r#"{"pattern": "spiral", "color_mode": "cmyk"}"#)?;
//!
//! let output = job::process_image(&image, &config)?;
//! for channel in &output.channels {
//!     std::fs::write(format!("{}.svg", channel.channel), &channel.svg)?;
//! }
//! let preview = output.composite()?;
//! assert_eq!(preview.width() as usize, output.width);
//!
//! # Ok::<(), halftonist::HalftoneError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`color`] | Colour separation and channel definitions |
//! | [`random`] | Seeded and entropy random sources |
//! | [`gradient`] | Sobel gradient field for flow-field strokes |
//! | [`grid`] | Rotated lattice sampling shared by grid patterns |
//! | [`patterns`] | Per-pattern shape generators and the dispatcher |
//! | [`primitive`] | Shape descriptors consumed by every renderer |
//! | [`render`] | Raster, SVG, HPGL and compositing |
//! | [`config`] | JSON job configuration |
//! | [`job`] | Parallel per-channel pipeline |
//! | [`input`] | Image decoding and resizing |
//! | [`error`] | Error types |

pub mod color;
pub mod config;
pub mod error;
pub mod geometry;
pub mod gradient;
pub mod grid;
pub mod input;
pub mod job;
pub mod patterns;
pub mod primitive;
pub mod random;
pub mod render;

// Re-exports for convenience
pub use color::{Channel, ColorMode, IntensityMap};
pub use config::JobConfig;
pub use error::HalftoneError;
pub use patterns::{PatternConfig, PatternType};
pub use primitive::Primitive;
