//! # Job Pipeline
//!
//! One "process" run: validate the config, separate the image into channels,
//! then render every channel. Channels share nothing mutable, so they render
//! in parallel on the rayon pool; results come back in the colour mode's
//! channel order, which is also the compositing order.
//!
//! Every channel gets a fresh random source seeded from the job config, so
//! repeating a job reproduces its output byte for byte (unless stipple is
//! configured to use entropy).

use image::RgbaImage;
use rayon::prelude::*;

use crate::color::{self, Channel};
use crate::config::JobConfig;
use crate::error::Result;
use crate::patterns::PatternType;
use crate::random::{RandomSource, SeededRandom};
use crate::render::composite::{self, BlendMode};
use crate::render::{self, ChannelOutput};

/// All channel outputs of one job.
#[derive(Debug, Clone)]
pub struct JobOutput {
    pub width: usize,
    pub height: usize,
    pub channels: Vec<ChannelOutput>,
}

impl JobOutput {
    pub fn get(&self, channel: Channel) -> Option<&ChannelOutput> {
        self.channels.iter().find(|c| c.channel == channel)
    }

    /// Multiply-blend every channel raster, in channel order.
    pub fn composite(&self) -> Result<RgbaImage> {
        let layers = self
            .channels
            .iter()
            .map(|c| c.surface.to_image())
            .collect::<Result<Vec<_>>>()?;
        Ok(composite::composite(
            self.width as u32,
            self.height as u32,
            &layers,
            BlendMode::Multiply,
        ))
    }
}

fn random_source(cfg: &JobConfig) -> Box<dyn RandomSource> {
    match cfg.pattern {
        PatternType::Stipple => cfg.stipple_source.build(cfg.seed),
        _ => Box::new(SeededRandom::new(cfg.seed)),
    }
}

/// Run a full job over an RGBA buffer.
pub fn process(pixels: &[u8], width: usize, height: usize, cfg: &JobConfig) -> Result<JobOutput> {
    cfg.validate()?;
    let channels = color::separate(pixels, width, height, cfg.contrast as f32, cfg.color_mode)?;

    tracing::info!(
        width,
        height,
        mode = ?cfg.color_mode,
        pattern = %cfg.pattern,
        channels = channels.len(),
        "Processing image"
    );

    let outputs = channels
        .channels()
        .par_iter()
        .map(|(channel, map)| {
            let pattern_cfg = cfg.pattern_config(*channel)?;
            let mut rng = random_source(cfg);
            render::render_channel(*channel, map, &pattern_cfg, rng.as_mut())
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(JobOutput {
        width,
        height,
        channels: outputs,
    })
}

/// Run a job over a decoded image.
pub fn process_image(image: &RgbaImage, cfg: &JobConfig) -> Result<JobOutput> {
    process(
        image.as_raw(),
        image.width() as usize,
        image.height() as usize,
        cfg,
    )
}
