//! # Quaternion
//!
//! Rotation quaternions over `glam::DQuat`.
//!
//! Only canonical types are accepted here: the axis and the rotated
//! vector must be [`Vec3`] values, never vector-like records. Quaternions
//! are unit-norm by construction and are not re-normalized on use.
//!
//! ## Example
//!
//! ```rust
//! use script_math::quat::{quat_apply, quat_axis_angle};
//! use script_math::Vec3;
//!
//! let q = quat_axis_angle(Vec3::Z, std::f64::consts::FRAC_PI_2).unwrap();
//! let v = quat_apply(q, Vec3::X);
//! assert!((v - Vec3::Y).length() < 1e-12);
//! ```

use crate::error::MathResult;
use crate::validate::check_finite;
use crate::vec3::{vec3_normalized, Vec3};

pub use glam::DQuat as Quat;

/// The zero-angle rotation `(0, 0, 0, 1)`.
pub fn quat_ident() -> Quat {
    Quat::IDENTITY
}

/// Right-handed rotation of `angle` radians about `axis`.
///
/// The axis does not need to be unit length. A zero axis produces a NaN
/// quaternion, like [`vec3_normalized`].
///
/// ## Errors
///
/// `InvalidArgument` labelled `angle` when the angle is not finite.
pub fn quat_axis_angle(axis: Vec3, angle: f64) -> MathResult<Quat> {
    let angle = check_finite(angle, "angle")?;
    Ok(Quat::from_axis_angle(vec3_normalized(axis), angle))
}

/// Rotates `v` by `q`, returning the rotated copy.
pub fn quat_apply(q: Quat, v: Vec3) -> Vec3 {
    q * v
}
