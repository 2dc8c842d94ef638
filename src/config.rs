//! Session configuration.
//!
//! Every field has a default, so the config file is optional. The defaults reproduce the
//! classic zoom into the seahorse valley.
//!
//! # Config file location
//!
//! 1. the path given on the command line
//! 2. `$MANDELBROT_CONFIG`
//! 3. `mandelbrot.toml` in the working directory

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use serde::{Deserialize, Serialize};

use crate::{
    compute::{self, Engine},
    error::{Error, Result},
    frame::{self, FrameProducer},
    pixel::Complex,
    screen,
    view::{ViewState, MIN_DEPTH},
};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields, default)]
pub struct Config {
    /// `[real, imaginary]` of the first frame's center.
    pub center: [f64; 2],
    pub width: u32,
    pub height: u32,
    /// Distance between adjacent pixels in the first frame.
    pub step: f64,
    /// Iteration budget of the first frame.
    pub depth: u32,
    /// Lower bound for the iteration budget after rescaling.
    pub depth_floor: u32,
    /// Worker threads in the compute pool.
    pub workers: usize,
    /// Step multiplier applied after each frame.
    pub zoom_factor: f64,
    /// Time between the start of consecutive frames.
    pub frame_interval_ms: u64,
    /// Stop after this many frames. Runs until interrupted when absent.
    pub frames: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            center: [-0.77568377, 0.13646737],
            width: 100,
            height: 100,
            step: 0.05,
            depth: MIN_DEPTH,
            depth_floor: MIN_DEPTH,
            workers: compute::DEFAULT_WORKERS,
            zoom_factor: frame::DEFAULT_ZOOM_FACTOR,
            frame_interval_ms: 100,
            frames: None,
        }
    }
}

impl Config {
    /// Load configuration from a specific path.
    ///
    /// Returns the default configuration if the file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::info!(
                "No config file found at {}, using defaults",
                path.display()
            );
            return Ok(Self::default());
        }

        log::info!("Loading config from {}", path.display());
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&contents)?;
        Ok(config)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn config_path() -> PathBuf {
        if let Ok(path) = std::env::var("MANDELBROT_CONFIG") {
            return PathBuf::from(path);
        }
        PathBuf::from("mandelbrot.toml")
    }

    pub fn center(&self) -> Complex {
        Complex::new(self.center[0], self.center[1])
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }

    pub fn validate(&self) -> Result<()> {
        screen::Size::new(self.width, self.height)?;
        if !self.center().is_finite() {
            return Err(Error::InvalidCenter);
        }
        if !(self.step.is_finite() && self.step > 0.0) {
            return Err(Error::InvalidStep(self.step));
        }
        if self.depth_floor < MIN_DEPTH {
            return Err(Error::InvalidDepthFloor(self.depth_floor));
        }
        if self.depth < self.depth_floor {
            return Err(Error::InvalidDepth {
                depth: self.depth,
                floor: self.depth_floor,
            });
        }
        if self.workers == 0 {
            return Err(Error::InvalidWorkers(self.workers));
        }
        if !(self.zoom_factor > 0.0 && self.zoom_factor < 1.0) {
            return Err(Error::InvalidZoomFactor(self.zoom_factor));
        }
        Ok(())
    }

    /// Build the session: view, worker pool and frame producer.
    pub fn build(&self) -> Result<FrameProducer> {
        self.validate()?;
        let size = screen::Size::new(self.width, self.height)?;
        let view = ViewState::new(
            self.center(),
            self.step,
            self.depth,
            self.depth_floor,
            size,
        )?;
        let engine = Engine::new(self.workers)?;
        FrameProducer::new(view, engine, self.zoom_factor)
    }
}
