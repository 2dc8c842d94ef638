//! Colouring algorithms.

use crate::{escape::EscapeResult, pixel::Pixel};

/// Saturation used for every escaped point.
pub const SATURATION: f64 = 0.8;

/// Value (brightness) used for every escaped point.
pub const VALUE: f64 = 0.8;

/// Convert an HSV colour (each component in `[0, 1]`) to RGB components in `[0, 1]`.
///
/// Hue wraps around, so `h = 1.0` is the same colour as `h = 0.0`.
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (v, v, v);
    }
    let sector = (h * 6.0).floor();
    let f = h * 6.0 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    match (sector as i64).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

/// Scale a `[0, 1]` channel to a byte, truncating toward zero.
fn channel(c: f64) -> u8 {
    (c * 255.0) as u8
}

/// Escape-time colouring ([Wikipedia](https://en.wikipedia.org/wiki/Plotting_algorithms_for_the_Mandelbrot_set#Escape_time_algorithm)).
///
/// Points in the set are black. Escaped points get a hue proportional to
/// `iteration / depth`, so the gradient stays stable as the depth grows with zoom.
pub fn map(result: EscapeResult) -> Pixel {
    match result {
        EscapeResult::Bounded => Pixel::BLACK,
        EscapeResult::Escaped { iteration, depth } => {
            let hue = f64::from(iteration) / f64::from(depth);
            let (r, g, b) = hsv_to_rgb(hue, SATURATION, VALUE);
            Pixel::new(channel(r), channel(g), channel(b))
        }
    }
}
