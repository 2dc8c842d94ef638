use log::debug;

use crate::{
    error::{Error, Result},
    grid::Grid,
    pixel::Complex,
    screen,
};

/// Lowest iteration budget ever used for a frame.
pub const MIN_DEPTH: u32 = 20;

/// Where the session is looking: center, zoom level and iteration budget.
///
/// Only the frame producer mutates this, between frames; renderers see a [`Grid`] snapshot.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
    center: Complex,
    step: f64,
    depth: u32,
    depth_floor: u32,
    size: screen::Size,
}

impl ViewState {
    pub fn new(
        center: Complex,
        step: f64,
        depth: u32,
        depth_floor: u32,
        size: screen::Size,
    ) -> Result<Self> {
        if !center.is_finite() {
            return Err(Error::InvalidCenter);
        }
        if !(step.is_finite() && step > 0.0) {
            return Err(Error::InvalidStep(step));
        }
        if depth_floor < MIN_DEPTH {
            return Err(Error::InvalidDepthFloor(depth_floor));
        }
        if depth < depth_floor {
            return Err(Error::InvalidDepth {
                depth,
                floor: depth_floor,
            });
        }
        Ok(Self {
            center,
            step,
            depth,
            depth_floor,
            size,
        })
    }

    pub fn center(&self) -> Complex {
        self.center
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn size(&self) -> screen::Size {
        self.size
    }

    pub fn grid(&self) -> Grid {
        Grid::new(self.center, self.step, self.size)
    }

    pub fn move_center(&mut self, offset: Complex) {
        self.center = self.center + offset;
        debug!("moved center to {:?}", self.center);
    }

    /// Multiply the step by `factor`, which must lie strictly between 0 and 1.
    ///
    /// Any other factor is rejected and the view is left unchanged.
    pub fn zoom(&mut self, factor: f64) -> Result<()> {
        if !(factor > 0.0 && factor < 1.0) {
            return Err(Error::InvalidZoomFactor(factor));
        }
        let step = self.step * factor;
        // Underflow to zero would break the `step > 0` invariant.
        if step <= 0.0 {
            return Err(Error::InvalidStep(step));
        }
        self.step = step;
        debug!("zoomed to step {}", self.step);
        Ok(())
    }

    /// `depth = max(floor, floor(4 * log2(1 / step)))`
    pub fn rescale_depth(&mut self) {
        self.depth = depth_for_step(self.step, self.depth_floor);
    }
}

fn depth_for_step(step: f64, floor: u32) -> u32 {
    // Not `log2(1 / step)`: the reciprocal of a subnormal step is infinite.
    let depth = (-4.0 * step.log2()).floor();
    // `as` saturates, and negative depths (step > 1) end up below the floor.
    (depth.max(0.0) as u32).max(floor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_view(step: f64) -> ViewState {
        ViewState::new(
            Complex::new(-0.77568377, 0.13646737),
            step,
            MIN_DEPTH,
            MIN_DEPTH,
            screen::Size::new(4, 4).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn rejects_invalid_construction() {
        let size = screen::Size::new(4, 4).unwrap();
        assert!(matches!(
            ViewState::new(Complex::ZERO, 0.0, 20, 20, size),
            Err(Error::InvalidStep(_))
        ));
        assert!(matches!(
            ViewState::new(Complex::ZERO, f64::NAN, 20, 20, size),
            Err(Error::InvalidStep(_))
        ));
        assert!(matches!(
            ViewState::new(Complex::new(f64::INFINITY, 0.0), 0.1, 20, 20, size),
            Err(Error::InvalidCenter)
        ));
        assert!(matches!(
            ViewState::new(Complex::ZERO, 0.1, 19, 20, size),
            Err(Error::InvalidDepth {
                depth: 19,
                floor: 20
            })
        ));
        assert!(matches!(
            ViewState::new(Complex::ZERO, 0.1, 20, 10, size),
            Err(Error::InvalidDepthFloor(10))
        ));
    }

    #[test]
    fn move_round_trip() {
        let mut view = make_view(0.05);
        let original = view.center();
        view.move_center(Complex::new(1.0, 0.0));
        assert!((view.center().real - (original.real + 1.0)).abs() < 1e-12);
        view.move_center(Complex::new(-1.0, 0.0));
        assert!((view.center().real - original.real).abs() < 1e-12);
        assert_eq!(view.center().imaginary, original.imaginary);
    }

    #[test]
    fn zoom_compounds() {
        let mut view = make_view(1.0);
        for _ in 0..10 {
            view.zoom(0.7).unwrap();
        }
        assert!((view.step() - 0.7f64.powi(10)).abs() < 1e-12);
        assert!((view.step() - 0.02825).abs() < 1e-5);
    }

    #[test]
    fn zoom_rejects_factors_outside_unit_interval() {
        let mut view = make_view(0.5);
        for factor in [0.0, 1.0, 1.5, -0.5, f64::NAN, f64::INFINITY] {
            assert!(matches!(view.zoom(factor), Err(Error::InvalidZoomFactor(_))));
        }
        assert_eq!(view.step(), 0.5);
    }

    #[test]
    fn depth_has_a_floor() {
        let mut view = make_view(0.05);
        view.rescale_depth();
        assert_eq!(view.depth(), 20);

        let mut view = make_view(4.0);
        view.rescale_depth();
        assert_eq!(view.depth(), 20);

        let mut view = make_view(1e-3);
        view.rescale_depth();
        // 4 * log2(1000) = 39.86
        assert_eq!(view.depth(), 39);
    }

    #[test]
    fn depth_stays_finite_for_subnormal_steps() {
        // log2(1e-310) = -1029.8...
        assert_eq!(depth_for_step(1e-310, MIN_DEPTH), 4119);
        assert_eq!(depth_for_step(f64::MIN_POSITIVE, MIN_DEPTH), 4088);
        assert_eq!(depth_for_step(5e-324, MIN_DEPTH), 4296);
    }

    #[test]
    fn zoom_rejects_underflow_to_zero() {
        let mut view = make_view(5e-324);
        assert!(matches!(view.zoom(0.3), Err(Error::InvalidStep(_))));
        assert_eq!(view.step(), 5e-324);
    }

    #[test]
    fn depth_grows_as_step_shrinks() {
        let mut view = make_view(0.05);
        view.rescale_depth();
        let mut previous = view.depth();
        for _ in 0..60 {
            view.zoom(0.7).unwrap();
            view.rescale_depth();
            assert!(view.depth() >= previous);
            assert!(view.depth() >= MIN_DEPTH);
            previous = view.depth();
        }
        assert!(previous > MIN_DEPTH);
    }

    #[test]
    fn custom_floor() {
        let mut view = ViewState::new(
            Complex::ZERO,
            0.05,
            50,
            50,
            screen::Size::new(2, 2).unwrap(),
        )
        .unwrap();
        view.rescale_depth();
        assert_eq!(view.depth(), 50);
    }
}
