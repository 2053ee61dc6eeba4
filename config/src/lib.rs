//! # Config Crate
//!
//! Centralized configuration constants for the script math library.
//! Tolerances and formatting limits are defined here so the vector layer
//! and the script dispatch table agree on the same defaults.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{MathConfig, DEFAULT_VECTOR_EPSILON};
//!
//! // Component-wise vector comparison tolerance
//! let diff: f64 = 0.0000005;
//! assert!(diff <= DEFAULT_VECTOR_EPSILON);
//!
//! // Snapshot handed to the script dispatch table
//! let cfg = MathConfig::default();
//! assert_eq!(cfg.epsilon, DEFAULT_VECTOR_EPSILON);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Script Compatible**: Limits match what script number formatting accepts

pub mod constants;
