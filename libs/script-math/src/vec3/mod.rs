//! # Vector3
//!
//! Immutable 3D vector functions over `glam::DVec3`.
//!
//! Every operation accepts any [`Vec3Like`] value (the canonical type,
//! arrays, tuples, `{x, y, z}` records) and returns a fresh canonical
//! [`Vec3`]. Inputs are never modified.
//!
//! ## Scalar Arguments
//!
//! Only the constructors check their numbers. The scalar parameters of the
//! arithmetic and geometry functions are not checked here; NaN or infinite
//! scalars propagate into the result. The script dispatch table rejects them
//! before calling in.
//!
//! ## Example
//!
//! ```rust
//! use script_math::vec3::{vec3, vec3_add, vec3_length, Vec3Record};
//!
//! let a = vec3(1.0, 2.0, 2.0).unwrap();
//! let b = Vec3Record { x: 1.0, y: 0.0, z: 0.0 };
//! let sum = vec3_add(a, b);
//! assert_eq!(sum.x, 2.0);
//! assert_eq!(vec3_length(a), 3.0);
//! ```

use config::constants::DEFAULT_VECTOR_EPSILON;

use crate::error::MathResult;
use crate::validate::check_finite;
use crate::value::{format_fixed, format_number};

pub use glam::DVec3 as Vec3;

// =============================================================================
// VECTOR-LIKE INPUTS
// =============================================================================

/// Anything that exposes `x`, `y` and `z` components.
pub trait Vec3Like {
    /// X component.
    fn x(&self) -> f64;
    /// Y component.
    fn y(&self) -> f64;
    /// Z component.
    fn z(&self) -> f64;

    /// Copies the components into the canonical type.
    fn to_vec3(&self) -> Vec3 {
        Vec3::new(self.x(), self.y(), self.z())
    }
}

/// A plain `{x, y, z}` data record.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3Record {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
    /// Z component.
    pub z: f64,
}

impl Vec3Like for Vec3Record {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }

    fn z(&self) -> f64 {
        self.z
    }
}

impl Vec3Like for Vec3 {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }

    fn z(&self) -> f64 {
        self.z
    }

    fn to_vec3(&self) -> Vec3 {
        *self
    }
}

impl Vec3Like for glam::Vec3 {
    fn x(&self) -> f64 {
        f64::from(self.x)
    }

    fn y(&self) -> f64 {
        f64::from(self.y)
    }

    fn z(&self) -> f64 {
        f64::from(self.z)
    }
}

impl Vec3Like for [f64; 3] {
    fn x(&self) -> f64 {
        self[0]
    }

    fn y(&self) -> f64 {
        self[1]
    }

    fn z(&self) -> f64 {
        self[2]
    }
}

impl Vec3Like for (f64, f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }

    fn y(&self) -> f64 {
        self.1
    }

    fn z(&self) -> f64 {
        self.2
    }
}

impl<T: Vec3Like + ?Sized> Vec3Like for &T {
    fn x(&self) -> f64 {
        (**self).x()
    }

    fn y(&self) -> f64 {
        (**self).y()
    }

    fn z(&self) -> f64 {
        (**self).z()
    }
}

// =============================================================================
// CONSTRUCTION
// =============================================================================

/// Builds a vector from three finite components.
///
/// ## Errors
///
/// `InvalidArgument` labelled `x`, `y` or `z` for a NaN or infinite component.
pub fn vec3(x: f64, y: f64, z: f64) -> MathResult<Vec3> {
    Ok(Vec3::new(
        check_finite(x, "x")?,
        check_finite(y, "y")?,
        check_finite(z, "z")?,
    ))
}

/// Builds a vector by copying the components of any vector-like source.
///
/// ## Example
///
/// ```rust
/// use script_math::vec3::{vec3, vec3_from};
///
/// assert_eq!(vec3_from([1.0, 2.0, 3.0]).unwrap(), vec3(1.0, 2.0, 3.0).unwrap());
/// ```
pub fn vec3_from(source: impl Vec3Like) -> MathResult<Vec3> {
    vec3(source.x(), source.y(), source.z())
}

/// The zero vector.
pub fn vec3_zero() -> Vec3 {
    Vec3::ZERO
}

/// The all-ones vector.
pub fn vec3_one() -> Vec3 {
    Vec3::ONE
}

/// A vector along X with length `scale` (default 1).
pub fn vec3_x(scale: Option<f64>) -> MathResult<Vec3> {
    Ok(Vec3::X * axis_scale(scale)?)
}

/// A vector along Y with length `scale` (default 1).
pub fn vec3_y(scale: Option<f64>) -> MathResult<Vec3> {
    Ok(Vec3::Y * axis_scale(scale)?)
}

/// A vector along Z with length `scale` (default 1).
pub fn vec3_z(scale: Option<f64>) -> MathResult<Vec3> {
    Ok(Vec3::Z * axis_scale(scale)?)
}

fn axis_scale(scale: Option<f64>) -> MathResult<f64> {
    check_finite(scale.unwrap_or(1.0), "scale")
}

// =============================================================================
// ARITHMETIC
// =============================================================================

/// Component-wise sum.
pub fn vec3_add(a: impl Vec3Like, b: impl Vec3Like) -> Vec3 {
    a.to_vec3() + b.to_vec3()
}

/// Component-wise difference `a - b`.
pub fn vec3_sub(a: impl Vec3Like, b: impl Vec3Like) -> Vec3 {
    a.to_vec3() - b.to_vec3()
}

/// Adds `s` to the X component only.
///
/// `s` is not checked for finiteness here; see the module docs.
pub fn vec3_add_x(v: impl Vec3Like, s: f64) -> Vec3 {
    Vec3::new(v.x() + s, v.y(), v.z())
}

/// Adds `s` to the Y component only.
///
/// `s` is not checked for finiteness here; see the module docs.
pub fn vec3_add_y(v: impl Vec3Like, s: f64) -> Vec3 {
    Vec3::new(v.x(), v.y() + s, v.z())
}

/// Adds `s` to the Z component only.
///
/// `s` is not checked for finiteness here; see the module docs.
pub fn vec3_add_z(v: impl Vec3Like, s: f64) -> Vec3 {
    Vec3::new(v.x(), v.y(), v.z() + s)
}

/// Copy of `v` with X replaced.
///
/// `x` is not checked for finiteness here; see the module docs.
pub fn vec3_with_x(v: impl Vec3Like, x: f64) -> Vec3 {
    v.to_vec3().with_x(x)
}

/// Copy of `v` with Y replaced.
///
/// `y` is not checked for finiteness here; see the module docs.
pub fn vec3_with_y(v: impl Vec3Like, y: f64) -> Vec3 {
    v.to_vec3().with_y(y)
}

/// Copy of `v` with Z replaced.
///
/// `z` is not checked for finiteness here; see the module docs.
pub fn vec3_with_z(v: impl Vec3Like, z: f64) -> Vec3 {
    v.to_vec3().with_z(z)
}

/// Uniform scale.
///
/// `s` is not checked for finiteness here; see the module docs.
pub fn vec3_scale(v: impl Vec3Like, s: f64) -> Vec3 {
    v.to_vec3() * s
}

/// Fused scale-add: `v1 + s * v2`.
///
/// `s` is not checked for finiteness here; see the module docs.
///
/// ## Example
///
/// ```rust
/// use script_math::vec3::{vec3_scale_add, Vec3};
///
/// let p = vec3_scale_add(Vec3::new(1.0, 1.0, 1.0), 2.0, Vec3::X);
/// assert_eq!(p, Vec3::new(3.0, 1.0, 1.0));
/// ```
pub fn vec3_scale_add(v1: impl Vec3Like, s: f64, v2: impl Vec3Like) -> Vec3 {
    v1.to_vec3() + v2.to_vec3() * s
}

/// Component-wise negation.
pub fn vec3_neg(v: impl Vec3Like) -> Vec3 {
    -v.to_vec3()
}

// =============================================================================
// GEOMETRY
// =============================================================================

/// Sum of squared components. Cheaper than [`vec3_length`] and safe for
/// comparing magnitudes.
pub fn vec3_length_sq(v: impl Vec3Like) -> f64 {
    v.to_vec3().length_squared()
}

/// Euclidean length.
pub fn vec3_length(v: impl Vec3Like) -> f64 {
    v.to_vec3().length()
}

/// Unit vector in the direction of `v`.
///
/// A zero or near-zero input yields NaN/infinite components; check the
/// magnitude first when zero vectors are possible.
pub fn vec3_normalized(v: impl Vec3Like) -> Vec3 {
    let v = v.to_vec3();
    v * (1.0 / v.length())
}

/// `v` rescaled to the given length. Same zero-length hazard as
/// [`vec3_normalized`].
///
/// `length` is not checked for finiteness here; see the module docs.
pub fn vec3_rescaled(v: impl Vec3Like, length: f64) -> Vec3 {
    vec3_normalized(v) * length
}

/// Scalar (inner) product.
pub fn vec3_dot(a: impl Vec3Like, b: impl Vec3Like) -> f64 {
    a.to_vec3().dot(b.to_vec3())
}

// =============================================================================
// COMPARISON & FORMATTING
// =============================================================================

/// Approximate equality: every component differs by at most `epsilon`
/// (default [`DEFAULT_VECTOR_EPSILON`]).
///
/// ## Example
///
/// ```rust
/// use script_math::vec3::{vec3_equal, Vec3};
///
/// let a = Vec3::new(1.0, 1.0, 1.0);
/// let b = Vec3::new(1.0005, 1.0, 1.0);
/// assert!(vec3_equal(a, b, Some(0.001)));
/// assert!(!vec3_equal(a, b, Some(0.0001)));
/// ```
pub fn vec3_equal(a: impl Vec3Like, b: impl Vec3Like, epsilon: Option<f64>) -> bool {
    a.to_vec3()
        .abs_diff_eq(b.to_vec3(), epsilon.unwrap_or(DEFAULT_VECTOR_EPSILON))
}

/// Renders `v` as `"(x, y, z)"`, optionally with a fixed number of decimals.
///
/// ## Example
///
/// ```rust
/// use script_math::vec3::{vec3_to_string, Vec3};
///
/// let v = Vec3::new(1.0, 2.5, -3.0);
/// assert_eq!(vec3_to_string(v, None), "(1, 2.5, -3)");
/// assert_eq!(vec3_to_string(v, Some(2)), "(1.00, 2.50, -3.00)");
/// ```
pub fn vec3_to_string(v: impl Vec3Like, digits: Option<usize>) -> String {
    let render = |n: f64| match digits {
        Some(d) => format_fixed(n, d),
        None => format_number(n),
    };
    format!("({}, {}, {})", render(v.x()), render(v.y()), render(v.z()))
}

#[cfg(test)]
mod tests;
