use log::{info, trace};

use crate::{
    buffer::PixelBuffer,
    compute::Engine,
    error::{Error, Result},
    pixel::Complex,
    view::ViewState,
};

/// Zoom factor applied after every frame by default.
pub const DEFAULT_ZOOM_FACTOR: f64 = 0.7;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameState {
    Idle,
    /// Taking a snapshot of the view.
    Sampling,
    /// The engine is evaluating the snapshot.
    Computing,
    /// The last frame has been handed to the caller. Resting state between frames; the next
    /// call starts again at `Sampling`.
    Ready,
}

/// Produces one frame per call and then advances the view: zoom by `zoom_factor`, then
/// rescale the iteration depth for the new step.
pub struct FrameProducer {
    view: ViewState,
    engine: Engine,
    zoom_factor: f64,
    state: FrameState,
    frames: u64,
}

impl FrameProducer {
    pub fn new(view: ViewState, engine: Engine, zoom_factor: f64) -> Result<Self> {
        if !(zoom_factor > 0.0 && zoom_factor < 1.0) {
            return Err(Error::InvalidZoomFactor(zoom_factor));
        }
        Ok(Self {
            view,
            engine,
            zoom_factor,
            state: FrameState::Idle,
            frames: 0,
        })
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn state(&self) -> FrameState {
        self.state
    }

    pub fn zoom_factor(&self) -> f64 {
        self.zoom_factor
    }

    /// Number of frames produced so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Shift the view for the next frame.
    pub fn move_center(&mut self, offset: Complex) {
        self.view.move_center(offset);
    }

    /// Render the current view, then advance it for the next call.
    ///
    /// If the view cannot be advanced (the step would underflow to zero) the rendered frame is
    /// discarded, the view is left as it was and the producer returns to [`FrameState::Idle`].
    pub fn next_frame(&mut self) -> Result<PixelBuffer> {
        self.transition(FrameState::Sampling);
        let grid = self.view.grid();
        let depth = self.view.depth();

        self.transition(FrameState::Computing);
        let buffer = self.engine.render(&grid, depth);
        debug_assert_eq!(buffer.len(), grid.size.byte_len());

        let mut next = self.view.clone();
        if let Err(err) = next.zoom(self.zoom_factor) {
            self.transition(FrameState::Idle);
            return Err(err);
        }
        next.rescale_depth();
        self.view = next;

        self.transition(FrameState::Ready);
        self.frames += 1;
        info!(
            "frame {}: center = {:?}, step = {}, depth = {}",
            self.frames, grid.center, grid.step, depth
        );

        Ok(buffer)
    }

    fn transition(&mut self, next: FrameState) {
        trace!("{:?} -> {:?}", self.state, next);
        self.state = next;
    }
}
