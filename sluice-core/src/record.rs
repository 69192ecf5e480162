// Copyright 2025 Sluice Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Candidate records supplied to the batch assembler.
//!
//! A record is an opaque unit of data whose only semantically relevant
//! property is its encoded byte length. Only textual records are valid batch
//! input; [`RecordValue::Binary`] models undecoded upstream data and is
//! rejected with a hard [`TypeMismatch`](crate::SluiceError::TypeMismatch)
//! rather than a soft discard.

use tracing::warn;

use crate::constraints::BatchConstraints;
use crate::error::{Result, SluiceError};

/// A candidate record, as handed to the assembler by an upstream source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordValue {
    /// A decoded text record, measured by its UTF-8 byte length.
    Text(String),
    /// Undecoded bytes from an upstream source. Never valid batch input.
    Binary(Vec<u8>),
}

impl RecordValue {
    /// Encoded byte length of the record.
    pub fn encoded_len(&self) -> usize {
        match self {
            Self::Text(text) => text.len(),
            Self::Binary(bytes) => bytes.len(),
        }
    }

    /// Short name of the record kind, for diagnostics.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Binary(_) => "binary",
        }
    }

    /// Returns `true` if this is the expected textual kind.
    pub const fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }
}

impl From<String> for RecordValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for RecordValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<Vec<u8>> for RecordValue {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Binary(bytes)
    }
}

/// Check whether a record may enter a batch under the given constraints.
///
/// Pure predicate: the only side effect is a `warn!` diagnostic when an
/// oversized record is rejected. `position` is the zero-based index of the
/// record in the input sequence, carried into diagnostics and errors.
///
/// Type checking is a precondition, not a soft validation outcome: a
/// non-text record fails with [`SluiceError::TypeMismatch`] instead of
/// returning `Ok(false)`. An oversized text record returns `Ok(false)` and is
/// expected to be discarded and counted by the caller.
///
/// # Errors
///
/// Returns [`SluiceError::TypeMismatch`] if `record` is not textual.
///
/// # Examples
///
/// ```
/// use sluice_core::{is_valid_record, BatchConstraints, RecordValue};
///
/// let constraints = BatchConstraints::new(5, 100, 10)?;
/// assert!(is_valid_record(&RecordValue::from("abc"), 0, &constraints)?);
/// assert!(!is_valid_record(&RecordValue::from("abcdef"), 1, &constraints)?);
/// assert!(is_valid_record(&RecordValue::Binary(vec![1, 2]), 2, &constraints).is_err());
/// # Ok::<(), sluice_core::SluiceError>(())
/// ```
pub fn is_valid_record(
    record: &RecordValue,
    position: usize,
    constraints: &BatchConstraints,
) -> Result<bool> {
    if !record.is_text() {
        return Err(SluiceError::type_mismatch(position, record.kind()));
    }

    let size = record.encoded_len();
    let valid = size <= constraints.max_record_size_bytes();
    if !valid {
        warn!(
            position,
            size,
            limit = constraints.max_record_size_bytes(),
            "record discarded: size exceeds limit"
        );
    }

    Ok(valid)
}
