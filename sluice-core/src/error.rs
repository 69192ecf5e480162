// Copyright 2025 Sluice Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for the sluice batching crates.
//!
//! The taxonomy is deliberately small: constraint construction can fail, and
//! a batching pass can be aborted by a wrong-kinded record. Oversized records
//! are not errors — they are discarded and counted, and processing continues.
//!
//! # Examples
//!
//! ```
//! use sluice_core::{BatchConstraints, SluiceError};
//!
//! let err = BatchConstraints::new(0, 5_000_000, 500).unwrap_err();
//! assert!(matches!(err, SluiceError::InvalidConstraint { .. }));
//! ```

/// Root error type for all batching operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SluiceError {
    /// A batch constraint was constructed with a non-positive limit.
    ///
    /// Fatal to construction; no partial constraint set is produced.
    #[error("invalid constraint: {field} must be positive (got {value})")]
    InvalidConstraint {
        /// Name of the offending constraint field
        field: &'static str,
        /// The rejected value
        value: u64,
    },

    /// A candidate record was not of the expected textual kind.
    ///
    /// This aborts the in-progress batching pass immediately. Counters retain
    /// whatever was accumulated before the offending record.
    #[error("type mismatch at input position {position}: expected text record, found {found}")]
    TypeMismatch {
        /// Zero-based position of the offending record in the input sequence
        position: usize,
        /// Kind of the offending record
        found: &'static str,
    },
}

impl SluiceError {
    /// Create an `InvalidConstraint` error for the given field.
    pub const fn invalid_constraint(field: &'static str, value: u64) -> Self {
        Self::InvalidConstraint { field, value }
    }

    /// Create a `TypeMismatch` error for the record at `position`.
    pub const fn type_mismatch(position: usize, found: &'static str) -> Self {
        Self::TypeMismatch { position, found }
    }

    /// Returns `true` if this error aborts a batching pass.
    #[must_use]
    pub const fn is_type_mismatch(&self) -> bool {
        matches!(self, Self::TypeMismatch { .. })
    }
}

/// Specialized `Result` type for sluice operations.
pub type Result<T> = std::result::Result<T, SluiceError>;
