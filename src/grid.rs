//! Mapping from the pixel grid to points of the complex plane.

use crate::{pixel::Complex, screen};

/// A snapshot of the sampling grid for one frame.
///
/// Pixel `(x, y)` samples `center + ((x - width / 2) * step, (y - height / 2) * step)`, with
/// integer halving. The center is always sampled by pixel `(width / 2, height / 2)`, so the
/// grid is only symmetric around it for odd dimensions; even dimensions reach one step further
/// towards the top-left. Keep it that way: changing the rounding shifts every frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Grid {
    pub center: Complex,
    pub step: f64,
    pub size: screen::Size,
}

impl Grid {
    pub fn new(center: Complex, step: f64, size: screen::Size) -> Self {
        Self { center, step, size }
    }

    pub fn len(&self) -> usize {
        self.size.pixel_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Coordinate sampled by pixel `(x, y)`.
    pub fn at(&self, x: u32, y: u32) -> Complex {
        let column = i64::from(x) - i64::from(self.size.width / 2);
        let row = i64::from(y) - i64::from(self.size.height / 2);
        Complex::new(
            self.center.real + column as f64 * self.step,
            self.center.imaginary + row as f64 * self.step,
        )
    }

    /// Coordinate sampled by the pixel at row-major position `index`.
    pub fn coordinate(&self, index: usize) -> Complex {
        debug_assert!(index < self.len());
        let width = self.size.width as usize;
        self.at((index % width) as u32, (index / width) as u32)
    }

    /// All coordinates in row-major order: left to right, then top to bottom.
    pub fn coordinates(&self) -> Coordinates {
        Coordinates {
            grid: *self,
            index: 0,
        }
    }
}

impl IntoIterator for Grid {
    type Item = Complex;
    type IntoIter = Coordinates;

    fn into_iter(self) -> Coordinates {
        self.coordinates()
    }
}

/// Lazy row-major iterator over a [`Grid`].
#[derive(Clone, Debug)]
pub struct Coordinates {
    grid: Grid,
    index: usize,
}

impl Iterator for Coordinates {
    type Item = Complex;

    fn next(&mut self) -> Option<Complex> {
        if self.index >= self.grid.len() {
            return None;
        }
        let coordinate = self.grid.coordinate(self.index);
        self.index += 1;
        Some(coordinate)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.grid.len() - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Coordinates {}
