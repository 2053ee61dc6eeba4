//! # Script Builtins
//!
//! Dispatch table binding script function names to the typed vector,
//! quaternion and scalar functions.
//!
//! ## Call Semantics
//!
//! - Missing positional arguments read as `Undefined`; extra ones are ignored
//! - Vector arguments are duck-typed unless the function needs a canonical
//!   `Vector3` (`quatAxisAngle` axis, `quatApply` vector)
//! - Scalar utilities coerce their inputs and never fail
//!
//! ## Example
//!
//! ```rust
//! use script_math::{Builtins, Value, Vec3};
//!
//! let builtins = Builtins::new();
//! let a = Value::object([("x", 1.0), ("y", 2.0), ("z", 3.0)]);
//! let one = Value::Number(1.0);
//! let b = builtins.call("vec3", &[one.clone(), one.clone(), one]).unwrap();
//! let sum = builtins.call("vec3add", &[a, b]).unwrap();
//! assert_eq!(sum, Value::Vector3(Vec3::new(2.0, 3.0, 4.0)));
//! ```

mod catalog;

pub use catalog::{catalog, signature, FunctionSignature, Param, ValueKind};

use config::constants::MathConfig;

use crate::error::{MathError, MathResult};
use crate::quat::{quat_apply, quat_axis_angle, quat_ident};
use crate::scalar::{deg_to_rad, interp, rad_to_deg, rad_to_rev, rev_to_rad};
use crate::validate::{assert_number, assert_quaternion, assert_vector3, assert_vector3_duck};
use crate::value::Value;
use crate::vec3::*;

static UNDEFINED: Value = Value::Undefined;

/// The script-facing function table.
#[derive(Debug, Clone, Copy, Default)]
pub struct Builtins {
    config: MathConfig,
}

impl Builtins {
    /// Creates a table using the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table with a custom configuration.
    pub fn with_config(config: MathConfig) -> Self {
        Self { config }
    }

    /// The configuration this table consults.
    pub fn config(&self) -> &MathConfig {
        &self.config
    }

    /// Calls a script function by name.
    ///
    /// ## Errors
    ///
    /// - `InvalidArgument` when an argument violates its contract
    /// - `UnknownFunction` when `name` is not in the table
    pub fn call(&self, name: &str, args: &[Value]) -> MathResult<Value> {
        tracing::trace!(name, argc = args.len(), "script math call");
        let arg = |index: usize| args.get(index).unwrap_or(&UNDEFINED);
        let duck = |index: usize, label: &str| assert_vector3_duck(arg(index), label);
        let num = |index: usize, label: &str| assert_number(arg(index), label);
        let loose = |index: usize| arg(index).coerce_number();

        let value = match name {
            // Construction
            "vec3" => Value::Vector3(construct(args)?),
            "vec3from" => Value::Vector3(vec3_from(duck(0, "source")?)?),
            "vec3zero" => Value::Vector3(vec3_zero()),
            "vec3one" => Value::Vector3(vec3_one()),
            "vec3x" => Value::Vector3(vec3_x(optional_number(arg(0), "scale")?)?),
            "vec3y" => Value::Vector3(vec3_y(optional_number(arg(0), "scale")?)?),
            "vec3z" => Value::Vector3(vec3_z(optional_number(arg(0), "scale")?)?),

            // Arithmetic
            "vec3add" => Value::Vector3(vec3_add(duck(0, "a")?, duck(1, "b")?)),
            "vec3sub" => Value::Vector3(vec3_sub(duck(0, "a")?, duck(1, "b")?)),
            "vec3addx" => Value::Vector3(vec3_add_x(duck(0, "v")?, num(1, "s")?)),
            "vec3addy" => Value::Vector3(vec3_add_y(duck(0, "v")?, num(1, "s")?)),
            "vec3addz" => Value::Vector3(vec3_add_z(duck(0, "v")?, num(1, "s")?)),
            "vec3withx" => Value::Vector3(vec3_with_x(duck(0, "v")?, num(1, "x")?)),
            "vec3withy" => Value::Vector3(vec3_with_y(duck(0, "v")?, num(1, "y")?)),
            "vec3withz" => Value::Vector3(vec3_with_z(duck(0, "v")?, num(1, "z")?)),
            "vec3scale" => Value::Vector3(vec3_scale(duck(0, "v")?, num(1, "s")?)),
            "vec3scaleadd" => Value::Vector3(vec3_scale_add(
                duck(0, "v1")?,
                num(1, "s")?,
                duck(2, "v2")?,
            )),
            "vec3neg" => Value::Vector3(vec3_neg(duck(0, "v")?)),

            // Geometry
            "vec3lengthsq" => Value::Number(vec3_length_sq(duck(0, "v")?)),
            "vec3length" => Value::Number(vec3_length(duck(0, "v")?)),
            "vec3normalized" => Value::Vector3(vec3_normalized(duck(0, "v")?)),
            "vec3rescaled" => Value::Vector3(vec3_rescaled(duck(0, "v")?, num(1, "length")?)),
            "vec3dot" => Value::Number(vec3_dot(duck(0, "a")?, duck(1, "b")?)),

            // Comparison & formatting
            "vec3equal" => {
                let a = duck(0, "a")?;
                let b = duck(1, "b")?;
                let epsilon = optional_number(arg(2), "epsilon")?.unwrap_or(self.config.epsilon);
                Value::Boolean(vec3_equal(a, b, Some(epsilon)))
            }
            "vec3tostring" => Value::String(self.render_vector(arg(0), arg(1))?),

            // Quaternions
            "quatIdent" => Value::Quaternion(quat_ident()),
            "quatAxisAngle" => Value::Quaternion(quat_axis_angle(
                assert_vector3(arg(0), "axis")?,
                num(1, "angle")?,
            )?),
            "quatApply" => Value::Vector3(quat_apply(
                assert_quaternion(arg(0), "q")?,
                assert_vector3(arg(1), "v")?,
            )),

            // Scalars
            "degToRad" => Value::Number(deg_to_rad(loose(0))),
            "radToDeg" => Value::Number(rad_to_deg(loose(0))),
            "revToRad" => Value::Number(rev_to_rad(loose(0))),
            "radToRev" => Value::Number(rad_to_rev(loose(0))),
            "interp" => Value::Number(interp(loose(0), loose(1), loose(2), loose(3), loose(4))),

            _ => {
                tracing::debug!(name, "unknown script math function");
                return Err(MathError::UnknownFunction(name.to_string()));
            }
        };
        Ok(value)
    }

    /// `vec3tostring`: null and undefined render as sentinels without
    /// validation, everything else must be vector-like.
    fn render_vector(&self, v: &Value, digits: &Value) -> MathResult<String> {
        match v {
            Value::Null => Ok("(null)".to_string()),
            Value::Undefined => Ok("(undefined)".to_string()),
            other => {
                let vector = assert_vector3_duck(other, "v")?;
                let digits = self.fixed_digits(digits)?;
                Ok(vec3_to_string(vector, digits))
            }
        }
    }

    fn fixed_digits(&self, digits: &Value) -> MathResult<Option<usize>> {
        let Some(n) = optional_number(digits, "digits")? else {
            return Ok(None);
        };
        let max = self.config.max_fixed_digits;
        if n < 0.0 || n.fract() != 0.0 || n > max as f64 {
            return Err(MathError::invalid_argument(
                "digits",
                format!("expected an integer between 0 and {}", max),
            ));
        }
        Ok(Some(n as usize))
    }
}

/// `vec3`: a single object argument (with the second and third absent)
/// selects the record form, anything else the three-number form.
fn construct(args: &[Value]) -> MathResult<Vec3> {
    let arg = |index: usize| args.get(index).unwrap_or(&UNDEFINED);
    let source = arg(0);
    if source.is_object() && arg(1).is_undefined() && arg(2).is_undefined() {
        let record = Vec3Record {
            x: assert_number(&source.field("x"), "x")?,
            y: assert_number(&source.field("y"), "y")?,
            z: assert_number(&source.field("z"), "z")?,
        };
        return vec3_from(record);
    }
    vec3(
        assert_number(arg(0), "x")?,
        assert_number(arg(1), "y")?,
        assert_number(arg(2), "z")?,
    )
}

/// `Undefined` means the caller omitted the argument.
fn optional_number(value: &Value, label: &str) -> MathResult<Option<f64>> {
    if value.is_undefined() {
        Ok(None)
    } else {
        assert_number(value, label).map(Some)
    }
}
