//! # Script Values
//!
//! Dynamic values exchanged with the script host. Scripts are dynamically
//! typed, so every argument arrives as a `Value` and the validation layer
//! decides whether it satisfies a parameter's contract.

use std::collections::BTreeMap;
use std::fmt;

use crate::quat::Quat;
use crate::vec3::Vec3;

/// Represents a dynamic script value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A missing argument or unset field.
    Undefined,
    /// An explicit null.
    Null,
    /// A boolean.
    Boolean(bool),
    /// A number. May be NaN or infinite.
    Number(f64),
    /// A string.
    String(String),
    /// A plain data record with named fields.
    Object(BTreeMap<String, Value>),
    /// The canonical vector type.
    Vector3(Vec3),
    /// The canonical rotation type.
    Quaternion(Quat),
}

impl Value {
    /// Builds an object record from `(field, value)` pairs.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use script_math::Value;
    ///
    /// let record = Value::object([("x", 1.0), ("y", 2.0), ("z", 3.0)]);
    /// assert_eq!(record.field("y"), Value::Number(2.0));
    /// ```
    pub fn object<K, V, I>(fields: I) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        Value::Object(
            fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Name of the value's kind as scripts see it, used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "null",
            Value::Boolean(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Object(_) => "object",
            Value::Vector3(_) => "Vector3",
            Value::Quaternion(_) => "Quaternion",
        }
    }

    /// Returns true for `Undefined`.
    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    /// Returns true for values that carry named fields (records, vectors,
    /// quaternions). `Null` is not an object.
    pub fn is_object(&self) -> bool {
        matches!(
            self,
            Value::Object(_) | Value::Vector3(_) | Value::Quaternion(_)
        )
    }

    /// Reads a named field, yielding `Undefined` when it does not exist.
    ///
    /// Vectors expose `x`, `y`, `z`; quaternions additionally expose `w`.
    pub fn field(&self, name: &str) -> Value {
        match (self, name) {
            (Value::Object(fields), _) => fields.get(name).cloned().unwrap_or(Value::Undefined),
            (Value::Vector3(v), "x") => Value::Number(v.x),
            (Value::Vector3(v), "y") => Value::Number(v.y),
            (Value::Vector3(v), "z") => Value::Number(v.z),
            (Value::Quaternion(q), "x") => Value::Number(q.x),
            (Value::Quaternion(q), "y") => Value::Number(q.y),
            (Value::Quaternion(q), "z") => Value::Number(q.z),
            (Value::Quaternion(q), "w") => Value::Number(q.w),
            _ => Value::Undefined,
        }
    }

    /// Converts the value the way script arithmetic operators do.
    ///
    /// - Number -> n
    /// - Boolean -> 1.0 / 0.0
    /// - Null -> 0.0
    /// - String -> numeric literal after trimming (see [`parse_script_number`])
    /// - Undefined, objects -> NaN
    pub fn coerce_number(&self) -> f64 {
        match self {
            Value::Number(n) => *n,
            Value::Boolean(b) => f64::from(u8::from(*b)),
            Value::Null => 0.0,
            Value::String(s) => parse_script_number(s),
            _ => f64::NAN,
        }
    }
}

/// Parses script source text as a number.
///
/// Accepts decimal literals (optional sign, fraction and exponent), the
/// unsigned `0x` / `0o` / `0b` integer prefixes and the signed spelling
/// `Infinity`. Blank text is `0`; anything else is NaN.
///
/// ## Example
///
/// ```rust
/// use script_math::value::parse_script_number;
///
/// assert_eq!(parse_script_number(" -1.5e2 "), -150.0);
/// assert_eq!(parse_script_number("0x10"), 16.0);
/// assert_eq!(parse_script_number("-Infinity"), f64::NEG_INFINITY);
/// assert!(parse_script_number("inf").is_nan());
/// ```
pub fn parse_script_number(text: &str) -> f64 {
    let text = text.trim();
    match text {
        "" => return 0.0,
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    let radix = match text.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return parse_radix_integer(&text[2..], radix);
    }

    let is_decimal_literal = text
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'));
    if is_decimal_literal {
        text.parse().unwrap_or(f64::NAN)
    } else {
        f64::NAN
    }
}

fn parse_radix_integer(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    let mut value = 0.0;
    for c in digits.chars() {
        match c.to_digit(radix) {
            Some(d) => value = value * f64::from(radix) + f64::from(d),
            None => return f64::NAN,
        }
    }
    value
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<Vec3> for Value {
    fn from(v: Vec3) -> Self {
        Value::Vector3(v)
    }
}

impl From<Quat> for Value {
    fn from(q: Quat) -> Self {
        Value::Quaternion(q)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", format_number(*n)),
            Value::String(s) => write!(f, "\"{}\"", s),
            Value::Object(fields) => {
                write!(f, "{{")?;
                for (i, (name, value)) in fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", name, value)?;
                }
                write!(f, "}}")
            }
            Value::Vector3(v) => write!(
                f,
                "({}, {}, {})",
                format_number(v.x),
                format_number(v.y),
                format_number(v.z)
            ),
            Value::Quaternion(q) => write!(
                f,
                "quat({}, {}, {}, {})",
                format_number(q.x),
                format_number(q.y),
                format_number(q.z),
                format_number(q.w)
            ),
        }
    }
}

// =============================================================================
// NUMBER FORMATTING
// =============================================================================

/// Renders a number the way scripts print it.
///
/// Shortest round-trip digits, switching to exponent form (`1e+21`,
/// `1.5e-7`) for magnitudes of at least 1e21 or below 1e-6. Negative zero
/// prints as `0`; non-finite values print as `NaN`, `Infinity` and
/// `-Infinity`.
///
/// ## Example
///
/// ```rust
/// use script_math::value::format_number;
///
/// assert_eq!(format_number(1.0), "1");
/// assert_eq!(format_number(-2.5), "-2.5");
/// assert_eq!(format_number(-0.0), "0");
/// assert_eq!(format_number(1e300), "1e+300");
/// assert_eq!(format_number(f64::INFINITY), "Infinity");
/// ```
pub fn format_number(n: f64) -> String {
    if let Some(text) = non_finite(n) {
        return text.to_string();
    }
    let n = n + 0.0;
    let magnitude = n.abs();
    if magnitude != 0.0 && !(1e-6..1e21).contains(&magnitude) {
        let text = format!("{:e}", n);
        match text.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => text,
        }
    } else {
        format!("{}", n)
    }
}

/// Renders a number with exactly `digits` decimals.
///
/// Rounds the exact binary value, taking ties away from zero, so `0.125`
/// at two digits is `0.13` while `1.005` (stored just below) is `1.00`.
/// Magnitudes of at least 1e21 fall back to [`format_number`].
///
/// ## Example
///
/// ```rust
/// use script_math::value::format_fixed;
///
/// assert_eq!(format_fixed(1.0, 2), "1.00");
/// assert_eq!(format_fixed(2.0 / 3.0, 3), "0.667");
/// assert_eq!(format_fixed(2.5, 0), "3");
/// assert_eq!(format_fixed(-0.0, 1), "0.0");
/// ```
pub fn format_fixed(n: f64, digits: usize) -> String {
    if non_finite(n).is_some() || n.abs() >= 1e21 {
        return format_number(n);
    }

    // Every finite f64 has at most 1074 fractional decimal digits.
    let exact = format!("{:.1100}", n.abs());
    let (whole, fraction) = exact.split_once('.').unwrap_or((exact.as_str(), ""));
    let fraction = fraction.as_bytes();

    let mut kept: Vec<u8> = whole.bytes().collect();
    kept.extend((0..digits).map(|i| fraction.get(i).copied().unwrap_or(b'0')));

    if fraction.get(digits).is_some_and(|&d| d >= b'5') {
        let mut carry = true;
        for d in kept.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            kept.insert(0, b'1');
        }
    }

    let split = kept.len() - digits;
    let mut out = String::with_capacity(kept.len() + 2);
    if n < 0.0 {
        out.push('-');
    }
    out.extend(kept[..split].iter().map(|&d| char::from(d)));
    if digits > 0 {
        out.push('.');
        out.extend(kept[split..].iter().map(|&d| char::from(d)));
    }
    out
}

fn non_finite(n: f64) -> Option<&'static str> {
    if n.is_nan() {
        Some("NaN")
    } else if n == f64::INFINITY {
        Some("Infinity")
    } else if n == f64::NEG_INFINITY {
        Some("-Infinity")
    } else {
        None
    }
}

// =============================================================================
// TESTS
// =============================================================================
