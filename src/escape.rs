//! Escape-time evaluation.

use crate::pixel::Complex;

/// Squared escape radius. Orbits reaching `|z| >= 2` are known to diverge.
const ESCAPE_RADIUS_SQR: f64 = 4.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EscapeResult {
    /// The orbit left the escape radius on `iteration` (`iteration < depth`).
    Escaped { iteration: u32, depth: u32 },
    /// The orbit stayed inside the escape radius for the whole depth budget.
    Bounded,
}

/// Iterate `z <- z^2 + c` from `z = 0` for at most `depth` steps.
///
/// Returns as soon as the orbit escapes; most points outside the set do so within a few
/// iterations.
pub fn evaluate(c: Complex, depth: u32) -> EscapeResult {
    let mut z = Complex::ZERO;
    for iteration in 0..depth {
        z = z * z + c;
        if z.norm_sqr() >= ESCAPE_RADIUS_SQR {
            return EscapeResult::Escaped { iteration, depth };
        }
    }
    EscapeResult::Bounded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_outside_radius_escape_immediately() {
        let points = [
            Complex::new(3.0, 0.0),
            Complex::new(0.0, -2.5),
            Complex::new(1.5, 1.5),
            Complex::new(-100.0, 42.0),
        ];
        for depth in [1, 20, 500] {
            for c in points {
                assert_eq!(
                    evaluate(c, depth),
                    EscapeResult::Escaped {
                        iteration: 0,
                        depth
                    },
                    "{:?} at depth {}",
                    c,
                    depth
                );
            }
        }
    }

    #[test]
    fn escape_radius_is_inclusive() {
        assert_eq!(
            evaluate(Complex::new(2.0, 0.0), 20),
            EscapeResult::Escaped {
                iteration: 0,
                depth: 20
            }
        );
    }

    #[test]
    fn origin_is_bounded() {
        for depth in [0, 1, 20, 1000] {
            assert_eq!(evaluate(Complex::ZERO, depth), EscapeResult::Bounded);
        }
    }

    #[test]
    fn period_two_cycle_is_bounded() {
        assert_eq!(evaluate(Complex::new(-1.0, 0.0), 200), EscapeResult::Bounded);
    }

    #[test]
    fn counts_iterations_before_escape() {
        // 0.5, 0.75, 1.0625, 1.6289..., 3.153...
        let c = Complex::new(0.5, 0.0);
        assert_eq!(
            evaluate(c, 20),
            EscapeResult::Escaped {
                iteration: 4,
                depth: 20
            }
        );
        // Budget too small to see the escape.
        assert_eq!(evaluate(c, 4), EscapeResult::Bounded);
    }

    #[test]
    fn iteration_is_below_depth() {
        for step in 0..200 {
            let c = Complex::new(-2.0 + step as f64 * 0.0125, 0.3);
            for depth in [1, 7, 50] {
                if let EscapeResult::Escaped { iteration, depth: d } = evaluate(c, depth) {
                    assert_eq!(d, depth);
                    assert!(iteration < depth);
                }
            }
        }
    }
}
