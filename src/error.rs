//! Simulation-specific error types.
//!
//! The tick itself never fails: numeric edge cases (zero distances, exhausted
//! fragment area) are handled in place.  Errors only exist at the edges of the
//! crate, where configuration is read from disk and score records are built
//! for the external score board.
//!
//! ## Usage
//!
//! ```rust
//! use shatter::error::{validate_positive, SimResult};
//!
//! fn check(width: f32) -> SimResult<()> {
//!     validate_positive("field_width", width)?;
//!     Ok(())
//! }
//! # assert!(check(800.0).is_ok());
//! ```

use std::fmt;

/// Top-level error enum for the shatter simulation.
#[derive(Debug)]
pub enum SimError {
    /// The configuration file exists but could not be read.
    ConfigRead {
        path: String,
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML or has mistyped keys.
    ConfigParse {
        path: String,
        message: String,
    },

    /// A tuning value is outside the range the simulation can handle.
    UnsafeConstant {
        /// Name of the config key (for logging).
        name: &'static str,
        /// The value that was rejected.
        value: f64,
        /// Human-readable description of the safe range.
        safe_range: &'static str,
    },

    /// A score-board entry was built with a blank player name.
    EmptyScoreName,
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::ConfigRead { path, source } => {
                write!(f, "failed to read config '{}': {}", path, source)
            }
            SimError::ConfigParse { path, message } => {
                write!(f, "failed to parse config '{}': {}", path, message)
            }
            SimError::UnsafeConstant {
                name,
                value,
                safe_range,
            } => write!(
                f,
                "constant '{}' = {} is outside safe range {}",
                name, value, safe_range
            ),
            SimError::EmptyScoreName => write!(f, "score entry name must not be empty"),
        }
    }
}

impl std::error::Error for SimError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimError::ConfigRead { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience alias: a `Result` using `SimError` as the error type.
pub type SimResult<T> = Result<T, SimError>;

// ── Validation helpers ────────────────────────────────────────────────────────

/// Returns an error unless `value` is finite and strictly positive.
pub fn validate_positive(name: &'static str, value: f32) -> SimResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SimError::UnsafeConstant {
            name,
            value: value as f64,
            safe_range: "(0.0, ∞)",
        })
    }
}

/// Returns an error unless `value` lies in the closed interval `[min, max]`.
pub fn validate_range(
    name: &'static str,
    value: f64,
    min: f64,
    max: f64,
    safe_range: &'static str,
) -> SimResult<()> {
    if value.is_finite() && value >= min && value <= max {
        Ok(())
    } else {
        Err(SimError::UnsafeConstant {
            name,
            value,
            safe_range,
        })
    }
}

/// Returns an error unless `low <= high`; used for every `min_*`/`max_*` pair.
pub fn validate_ordered(name: &'static str, low: f32, high: f32) -> SimResult<()> {
    if low <= high {
        Ok(())
    } else {
        Err(SimError::UnsafeConstant {
            name,
            value: low as f64,
            safe_range: "≤ its paired maximum",
        })
    }
}
