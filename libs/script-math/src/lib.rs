//! # Script Math
//!
//! Immutable 3D vector and rotation-quaternion functions for scripts running
//! in a sandboxed host.
//!
//! ## Architecture
//!
//! ```text
//! Script call (name, [Value]) → builtins → validate → vec3 / quat / scalar → Value
//! ```
//!
//! - **Typed API** (`vec3`, `quat`, `scalar`): plain Rust functions over
//!   `glam::DVec3` / `glam::DQuat`. Vector parameters accept anything that
//!   implements [`Vec3Like`]; quaternion parameters accept only [`Quat`].
//! - **Script API** (`builtins`): the same functions addressed by name over
//!   dynamic [`Value`]s, with the argument checks of the `validate` module.
//!
//! Every function returns a new value and never modifies its inputs.
//!
//! ## Example
//!
//! ```rust
//! use script_math::{quat_apply, quat_axis_angle, vec3, vec3_equal};
//!
//! let q = quat_axis_angle(vec3(0.0, 1.0, 0.0).unwrap(), std::f64::consts::PI).unwrap();
//! let v = vec3(1.0, 0.0, 0.0).unwrap();
//! let rotated = quat_apply(q, v);
//! assert!(vec3_equal(rotated, [-1.0, 0.0, 0.0], None));
//! assert_eq!(v.x, 1.0);
//! ```

pub mod builtins;
pub mod error;
pub mod quat;
pub mod scalar;
pub mod validate;
pub mod value;
pub mod vec3;

// Re-export public API
pub use builtins::{catalog, signature, Builtins, FunctionSignature};
pub use error::{MathError, MathResult};
pub use quat::{quat_apply, quat_axis_angle, quat_ident, Quat};
pub use scalar::{deg_to_rad, interp, rad_to_deg, rad_to_rev, rev_to_rad};
pub use value::Value;
pub use vec3::{
    vec3, vec3_add, vec3_add_x, vec3_add_y, vec3_add_z, vec3_dot, vec3_equal, vec3_from,
    vec3_length, vec3_length_sq, vec3_neg, vec3_normalized, vec3_one, vec3_rescaled,
    vec3_scale, vec3_scale_add, vec3_sub, vec3_to_string, vec3_with_x, vec3_with_y,
    vec3_with_z, vec3_x, vec3_y, vec3_z, vec3_zero, Vec3, Vec3Like, Vec3Record,
};

// =============================================================================
// TESTS
// =============================================================================
