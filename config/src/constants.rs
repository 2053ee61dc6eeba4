//! # Configuration Constants
//!
//! Centralized constants for the script math library. Floating-point
//! tolerances and number formatting limits are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Formatting**: Bounds for fixed-digit number rendering
//! - **Snapshot**: `MathConfig`, the validated bundle handed to the dispatch table

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Default tolerance for component-wise vector equality.
///
/// Two vectors compare equal when every component differs by at most this
/// amount. Scripts can pass their own epsilon to override it per call.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_VECTOR_EPSILON;
///
/// fn components_match(a: f64, b: f64) -> bool {
///     (a - b).abs() <= DEFAULT_VECTOR_EPSILON
/// }
///
/// assert!(components_match(1.0, 1.0 + 1e-7));
/// assert!(!components_match(1.0, 1.001));
/// ```
pub const DEFAULT_VECTOR_EPSILON: f64 = 1e-6;

// =============================================================================
// FORMATTING CONSTANTS
// =============================================================================

/// Largest digit count accepted for fixed-decimal component rendering.
///
/// Matches the range script hosts accept for fixed-point number formatting.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_FIXED_DIGITS;
///
/// let requested = 250;
/// assert!(requested > MAX_FIXED_DIGITS);
/// ```
pub const MAX_FIXED_DIGITS: usize = 100;

// =============================================================================
// CONFIGURATION SNAPSHOT
// =============================================================================

/// Immutable snapshot of the settings the script dispatch table consults.
///
/// # Examples
/// ```
/// use config::constants::MathConfig;
/// let config = MathConfig::default();
/// assert!(config.epsilon > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MathConfig {
    /// Tolerance used by vector equality when the caller omits one.
    pub epsilon: f64,
    /// Upper bound for the fixed-digit argument of vector formatting.
    pub max_fixed_digits: usize,
}

impl MathConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// tolerance and digit limit.
    ///
    /// # Examples
    /// ```
    /// use config::constants::MathConfig;
    /// let cfg = MathConfig::new(1.0e-3, 8).expect("valid config");
    /// assert_eq!(cfg.max_fixed_digits, 8);
    /// ```
    pub fn new(epsilon: f64, max_fixed_digits: usize) -> Result<Self, ConfigError> {
        if !epsilon.is_finite() || epsilon <= 0.0 {
            return Err(ConfigError::InvalidEpsilon(epsilon));
        }
        if max_fixed_digits > MAX_FIXED_DIGITS {
            return Err(ConfigError::InvalidDigitLimit(max_fixed_digits));
        }
        Ok(Self {
            epsilon,
            max_fixed_digits,
        })
    }
}

impl Default for MathConfig {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_VECTOR_EPSILON,
            max_fixed_digits: MAX_FIXED_DIGITS,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when the epsilon is zero, negative or not finite.
    InvalidEpsilon(f64),
    /// Raised when the digit limit exceeds what number formatting supports.
    InvalidDigitLimit(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidEpsilon(value) => {
                write!(f, "epsilon must be positive and finite: {value}")
            }
            ConfigError::InvalidDigitLimit(value) => {
                write!(f, "max_fixed_digits must be <= {MAX_FIXED_DIGITS}: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
