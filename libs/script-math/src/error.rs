//! # Script Math Errors
//!
//! Error types for script math calls.
//!
//! ## Error Policy
//!
//! - Argument contract violations abort the call with `InvalidArgument`
//! - Numeric hazards (zero-length normalization, degenerate interpolation)
//!   are not errors and yield NaN/infinite results instead
//! - The argument label travels with the error for diagnostics

use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur when calling a script math function.
///
/// ## Example
///
/// ```rust
/// use script_math::{Builtins, MathError, Value};
///
/// let builtins = Builtins::new();
/// match builtins.call("vec3length", &[Value::Number(1.0)]) {
///     Err(MathError::InvalidArgument { label, .. }) => assert_eq!(label, "v"),
///     other => panic!("expected InvalidArgument, got {:?}", other),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MathError {
    /// An argument failed its shape or type contract.
    #[error("Invalid argument '{label}': {message}")]
    InvalidArgument {
        /// Name of the offending parameter.
        label: String,
        /// What the parameter was expected to be.
        message: String,
    },

    /// The dispatch table has no function with this name.
    #[error("Unknown function: {0}")]
    UnknownFunction(String),
}

impl MathError {
    /// Builds an `InvalidArgument` error for the given parameter label.
    pub fn invalid_argument(label: &str, message: impl Into<String>) -> Self {
        MathError::InvalidArgument {
            label: label.to_string(),
            message: message.into(),
        }
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for script math operations.
pub type MathResult<T> = Result<T, MathError>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MathError::invalid_argument("axis", "expected Vector3");
        let text = err.to_string();
        assert!(text.contains("Invalid argument"));
        assert!(text.contains("axis"));
        assert!(text.contains("expected Vector3"));

        let err = MathError::UnknownFunction("vec4add".to_string());
        assert!(err.to_string().contains("vec4add"));
    }

    /// Errors cross thread boundaries when scripts run on worker threads.
    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MathError>();
    }
}
