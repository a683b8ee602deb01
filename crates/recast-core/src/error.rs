//! Error types for recast.
//!
//! The formatting core is a pure function over an in-memory tree, so very
//! little of it can fail at runtime. The fallible surface is limited to
//! configuration: compiling import-layout glob patterns (style bundles
//! deserialize through serde, whose errors the caller handles directly).
//! Everything else falls into one of two buckets:
//!
//! - **Invariant violations** (a required ancestor missing from the cursor,
//!   an impossible concrete kind after a hook replacement) are programming
//!   errors. They panic with a descriptive message and are never caught or
//!   retried.
//! - **Conservative skips** (trivia that cannot be split per the comment
//!   grammar) are not errors at all; the offending region is carried through
//!   unmodified.

use thiserror::Error;

/// Unified error type for the configuration surface.
#[derive(Debug, Error)]
pub enum RecastError {
    /// An import-layout block pattern failed to compile as a glob.
    #[error("invalid import layout pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

impl RecastError {
    pub fn invalid_pattern(pattern: impl Into<String>, reason: impl ToString) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RecastError::invalid_pattern("java.[", "unclosed character class");
        assert_eq!(
            err.to_string(),
            "invalid import layout pattern 'java.[': unclosed character class"
        );
    }
}
