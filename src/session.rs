//! Driving a producer at a fixed cadence.

use std::time::{Duration, Instant};

use log::{debug, info};

use crate::{buffer::PixelBuffer, error::Result, frame::FrameProducer};

/// Receives finished frames, e.g. to blit them to a window.
pub trait FrameSink {
    fn present(&mut self, frame: &PixelBuffer);
}

/// Sink for headless runs: logs a summary of every frame.
#[derive(Default)]
pub struct LogSink {
    presented: u64,
}

impl LogSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn presented(&self) -> u64 {
        self.presented
    }
}

impl FrameSink for LogSink {
    fn present(&mut self, frame: &PixelBuffer) {
        self.presented += 1;
        let size = frame.size();
        info!(
            "presented frame {} ({}x{}, {} bytes, {} bounded pixels)",
            self.presented,
            size.width,
            size.height,
            frame.len(),
            frame.bounded_count()
        );
    }
}

impl<F: FnMut(&PixelBuffer)> FrameSink for F {
    fn present(&mut self, frame: &PixelBuffer) {
        self(frame)
    }
}

/// Render frames and hand them to `sink`, starting a new frame every `interval`.
///
/// Runs until `frames` frames have been presented, or forever when `frames` is `None`.
/// Stops at the first error; a frame that failed is never presented.
pub fn run<S: FrameSink>(
    producer: &mut FrameProducer,
    sink: &mut S,
    interval: Duration,
    frames: Option<u64>,
) -> Result<()> {
    let mut presented = 0;
    while frames.map_or(true, |limit| presented < limit) {
        let started = Instant::now();

        let frame = producer.next_frame()?;
        sink.present(&frame);
        presented += 1;

        let elapsed = started.elapsed();
        debug!("frame took {:?}", elapsed);
        if let Some(remaining) = interval.checked_sub(elapsed) {
            std::thread::sleep(remaining);
        }
    }
    Ok(())
}
