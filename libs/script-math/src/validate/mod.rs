//! # Argument Validation
//!
//! Guards that enforce the argument contracts of every script math
//! function. Each guard returns the converted value on success so callers
//! never inspect the raw `Value` twice.
//!
//! ## Contracts
//!
//! - `assert_number`: a finite number
//! - `assert_vector3`: the canonical vector type only
//! - `assert_vector3_duck`: anything exposing numeric `x`, `y`, `z`
//! - `assert_quaternion`: the canonical quaternion type only
//!
//! ## Example
//!
//! ```rust
//! use script_math::validate::assert_vector3_duck;
//! use script_math::{Value, Vec3};
//!
//! let record = Value::object([("x", 1.0), ("y", 2.0), ("z", 3.0)]);
//! assert_eq!(assert_vector3_duck(&record, "v").unwrap(), Vec3::new(1.0, 2.0, 3.0));
//! assert!(assert_vector3_duck(&Value::Null, "v").is_err());
//! ```

use crate::error::{MathError, MathResult};
use crate::quat::Quat;
use crate::value::{format_number, Value};
use crate::vec3::Vec3;

/// Requires a finite number.
///
/// ## Parameters
///
/// - `value`: Script argument
/// - `label`: Parameter name carried into the error
pub fn assert_number(value: &Value, label: &str) -> MathResult<f64> {
    match value {
        Value::Number(n) => check_finite(*n, label),
        other => Err(reject(
            label,
            format!("expected a number, got {}", other.type_name()),
        )),
    }
}

/// Requires an already-typed number to be finite.
///
/// ## Example
///
/// ```rust
/// use script_math::validate::check_finite;
///
/// assert_eq!(check_finite(2.0, "s").unwrap(), 2.0);
/// assert!(check_finite(f64::NAN, "s").is_err());
/// ```
pub fn check_finite(n: f64, label: &str) -> MathResult<f64> {
    if n.is_finite() {
        Ok(n)
    } else {
        Err(reject(
            label,
            format!("expected a finite number, got {}", format_number(n)),
        ))
    }
}

/// Requires the canonical vector type. Records are rejected.
pub fn assert_vector3(value: &Value, label: &str) -> MathResult<Vec3> {
    match value {
        Value::Vector3(v) => Ok(*v),
        other => Err(reject(
            label,
            format!("expected a Vector3, got {}", other.type_name()),
        )),
    }
}

/// Requires any value exposing numeric `x`, `y`, `z` fields.
///
/// This is a kind check: NaN components pass.
pub fn assert_vector3_duck(value: &Value, label: &str) -> MathResult<Vec3> {
    if let Value::Vector3(v) = value {
        return Ok(*v);
    }
    match (value.field("x"), value.field("y"), value.field("z")) {
        (Value::Number(x), Value::Number(y), Value::Number(z)) => Ok(Vec3::new(x, y, z)),
        _ => Err(reject(
            label,
            format!(
                "expected a value with numeric x, y, z fields, got {}",
                value.type_name()
            ),
        )),
    }
}

/// Requires the canonical quaternion type.
pub fn assert_quaternion(value: &Value, label: &str) -> MathResult<Quat> {
    match value {
        Value::Quaternion(q) => Ok(*q),
        other => Err(reject(
            label,
            format!("expected a Quaternion, got {}", other.type_name()),
        )),
    }
}

fn reject(label: &str, message: String) -> MathError {
    tracing::debug!(label, %message, "rejected script argument");
    MathError::invalid_argument(label, message)
}
