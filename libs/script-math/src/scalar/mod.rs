//! Angle conversions and clamped linear interpolation.
//!
//! None of these validate their inputs: non-numeric script arguments are
//! coerced to NaN before they get here and NaN propagates.

use std::f64::consts::{PI, TAU};

/// Converts degrees to radians.
///
/// # Examples
/// ```
/// use script_math::scalar::deg_to_rad;
/// assert!((deg_to_rad(180.0) - std::f64::consts::PI).abs() < 1e-12);
/// ```
pub fn deg_to_rad(degrees: f64) -> f64 {
    degrees * (PI / 180.0)
}

/// Converts radians to degrees.
pub fn rad_to_deg(radians: f64) -> f64 {
    radians * (180.0 / PI)
}

/// Converts a revolution count to radians.
///
/// # Examples
/// ```
/// use script_math::scalar::rev_to_rad;
/// assert_eq!(rev_to_rad(0.5), std::f64::consts::PI);
/// ```
pub fn rev_to_rad(revolutions: f64) -> f64 {
    revolutions * TAU
}

/// Converts radians to a revolution count.
pub fn rad_to_rev(radians: f64) -> f64 {
    radians / TAU
}

/// Linearly interpolates between `(x1, y1)` and `(x2, y2)` at `x`.
///
/// Outside the X span the result is clamped to the nearer endpoint's Y.
/// The control points may be given in either order. Coincident X values
/// with `x` on them divide by zero and yield NaN.
///
/// # Examples
/// ```
/// use script_math::scalar::interp;
/// assert_eq!(interp(0.0, 10.0, 10.0, 20.0, 5.0), 15.0);
/// assert_eq!(interp(0.0, 10.0, 10.0, 20.0, -5.0), 10.0);
/// assert_eq!(interp(10.0, 20.0, 0.0, 10.0, 15.0), 20.0);
/// ```
pub fn interp(x1: f64, y1: f64, x2: f64, y2: f64, x: f64) -> f64 {
    if x1 > x2 {
        return interp(x2, y2, x1, y1, x);
    }
    if x < x1 {
        y1
    } else if x > x2 {
        y2
    } else {
        y1 + (x - x1) / (x2 - x1) * (y2 - y1)
    }
}
