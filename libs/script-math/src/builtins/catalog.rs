//! # Function Catalog
//!
//! Static description of every script function: parameter names, kinds,
//! optionality and a one-line summary. Editor tooling reads this for
//! autocompletion and signature help.

use std::fmt;

/// Kind of value a parameter accepts or a function returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// A finite number.
    Number,
    /// The canonical vector type only.
    Vector3,
    /// Anything with numeric `x`, `y`, `z` fields.
    Vector3Like,
    /// Either a finite number or a vector-like record.
    NumberOrVector3Like,
    /// The canonical quaternion type only.
    Quaternion,
    /// `true` / `false`.
    Boolean,
    /// A string.
    String,
    /// Any value, including null and undefined.
    Any,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Number => "number",
            ValueKind::Vector3 => "Vector3",
            ValueKind::Vector3Like => "Vector3Like",
            ValueKind::NumberOrVector3Like => "number | Vector3Like",
            ValueKind::Quaternion => "Quaternion",
            ValueKind::Boolean => "boolean",
            ValueKind::String => "string",
            ValueKind::Any => "any",
        };
        write!(f, "{}", name)
    }
}

/// One parameter of a script function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Param {
    /// Parameter name, also the label carried by validation errors.
    pub name: &'static str,
    /// Accepted kind.
    pub kind: ValueKind,
    /// Whether the argument may be omitted.
    pub optional: bool,
}

/// Signature and summary of one script function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FunctionSignature {
    /// Script-visible name.
    pub name: &'static str,
    /// Positional parameters.
    pub params: &'static [Param],
    /// Kind of the returned value.
    pub returns: ValueKind,
    /// One-line summary.
    pub doc: &'static str,
}

impl FunctionSignature {
    /// Number of arguments that must be supplied.
    pub fn required_arity(&self) -> usize {
        self.params.iter().filter(|p| !p.optional).count()
    }
}

impl fmt::Display for FunctionSignature {
    /// Renders as `name(a: Vector3Like, digits?: number) -> string`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            let marker = if param.optional { "?" } else { "" };
            write!(f, "{}{}: {}", param.name, marker, param.kind)?;
        }
        write!(f, ") -> {}", self.returns)
    }
}

const fn req(name: &'static str, kind: ValueKind) -> Param {
    Param {
        name,
        kind,
        optional: false,
    }
}

const fn opt(name: &'static str, kind: ValueKind) -> Param {
    Param {
        name,
        kind,
        optional: true,
    }
}

macro_rules! sig {
    ($name:expr, $params:expr, $returns:expr, $doc:expr $(,)?) => {
        FunctionSignature {
            name: $name,
            params: $params,
            returns: $returns,
            doc: $doc,
        }
    };
}

use ValueKind::{Any, Boolean, Number, NumberOrVector3Like, Quaternion, Vector3, Vector3Like};

const VEC_A_B: &[Param] = &[req("a", Vector3Like), req("b", Vector3Like)];
const VEC_S: &[Param] = &[req("v", Vector3Like), req("s", Number)];
const VEC: &[Param] = &[req("v", Vector3Like)];
const SCALE: &[Param] = &[opt("scale", Number)];

static CATALOG: &[FunctionSignature] = &[
    // Construction
    sig!(
        "vec3",
        &[
            req("x", NumberOrVector3Like),
            opt("y", Number),
            opt("z", Number)
        ],
        Vector3,
        "Vector from three numbers, or from a single {x, y, z} object."
    ),
    sig!(
        "vec3from",
        &[req("source", Vector3Like)],
        Vector3,
        "Vector copied from any value with numeric x, y, z fields."
    ),
    sig!("vec3zero", &[], Vector3, "The zero vector."),
    sig!("vec3one", &[], Vector3, "The vector (1, 1, 1)."),
    sig!("vec3x", SCALE, Vector3, "Vector along X, length scale (default 1)."),
    sig!("vec3y", SCALE, Vector3, "Vector along Y, length scale (default 1)."),
    sig!("vec3z", SCALE, Vector3, "Vector along Z, length scale (default 1)."),
    // Arithmetic
    sig!("vec3add", VEC_A_B, Vector3, "Component-wise a + b."),
    sig!("vec3sub", VEC_A_B, Vector3, "Component-wise a - b."),
    sig!("vec3addx", VEC_S, Vector3, "Adds s to the X component."),
    sig!("vec3addy", VEC_S, Vector3, "Adds s to the Y component."),
    sig!("vec3addz", VEC_S, Vector3, "Adds s to the Z component."),
    sig!(
        "vec3withx",
        &[req("v", Vector3Like), req("x", Number)],
        Vector3,
        "Copy of v with X replaced."
    ),
    sig!(
        "vec3withy",
        &[req("v", Vector3Like), req("y", Number)],
        Vector3,
        "Copy of v with Y replaced."
    ),
    sig!(
        "vec3withz",
        &[req("v", Vector3Like), req("z", Number)],
        Vector3,
        "Copy of v with Z replaced."
    ),
    sig!("vec3scale", VEC_S, Vector3, "v scaled by s."),
    sig!(
        "vec3scaleadd",
        &[req("v1", Vector3Like), req("s", Number), req("v2", Vector3Like)],
        Vector3,
        "v1 + s * v2."
    ),
    sig!("vec3neg", VEC, Vector3, "Component-wise negation."),
    // Geometry
    sig!(
        "vec3lengthsq",
        VEC,
        Number,
        "Squared length; cheap magnitude comparison."
    ),
    sig!("vec3length", VEC, Number, "Euclidean length."),
    sig!(
        "vec3normalized",
        VEC,
        Vector3,
        "Unit vector along v. NaN for zero-length input."
    ),
    sig!(
        "vec3rescaled",
        &[req("v", Vector3Like), req("length", Number)],
        Vector3,
        "v rescaled to the given length. NaN for zero-length input."
    ),
    sig!("vec3dot", VEC_A_B, Number, "Dot product."),
    // Comparison & formatting
    sig!(
        "vec3equal",
        &[
            req("a", Vector3Like),
            req("b", Vector3Like),
            opt("epsilon", Number)
        ],
        Boolean,
        "True when every component differs by at most epsilon."
    ),
    sig!(
        "vec3tostring",
        &[req("v", Any), opt("digits", Number)],
        ValueKind::String,
        "\"(x, y, z)\", optionally with fixed decimals; \"(null)\"/\"(undefined)\" for those."
    ),
    // Quaternions
    sig!("quatIdent", &[], Quaternion, "The identity rotation."),
    sig!(
        "quatAxisAngle",
        &[req("axis", Vector3), req("angle", Number)],
        Quaternion,
        "Right-handed rotation of angle radians about axis."
    ),
    sig!(
        "quatApply",
        &[req("q", Quaternion), req("v", Vector3)],
        Vector3,
        "v rotated by q; v itself is unchanged."
    ),
    // Scalars
    sig!("degToRad", &[req("degrees", Number)], Number, "Degrees to radians."),
    sig!("radToDeg", &[req("radians", Number)], Number, "Radians to degrees."),
    sig!(
        "revToRad",
        &[req("revolutions", Number)],
        Number,
        "Revolutions to radians."
    ),
    sig!("radToRev", &[req("radians", Number)], Number, "Radians to revolutions."),
    sig!(
        "interp",
        &[
            req("x1", Number),
            req("y1", Number),
            req("x2", Number),
            req("y2", Number),
            req("x", Number)
        ],
        Number,
        "Linear interpolation at x, clamped to the endpoints."
    ),
];

/// Every function the dispatch table provides.
///
/// ## Example
///
/// ```rust
/// use script_math::builtins::catalog;
///
/// let names: Vec<_> = catalog().iter().map(|s| s.name).collect();
/// assert!(names.contains(&"quatApply"));
/// ```
pub fn catalog() -> &'static [FunctionSignature] {
    CATALOG
}

/// Looks up one function by its script name.
///
/// ## Example
///
/// ```rust
/// use script_math::builtins::signature;
///
/// let sig = signature("vec3equal").unwrap();
/// assert_eq!(
///     sig.to_string(),
///     "vec3equal(a: Vector3Like, b: Vector3Like, epsilon?: number) -> boolean"
/// );
/// ```
pub fn signature(name: &str) -> Option<&'static FunctionSignature> {
    CATALOG.iter().find(|s| s.name == name)
}
