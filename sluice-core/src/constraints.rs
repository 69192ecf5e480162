// Copyright 2025 Sluice Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Size and count constraints for batch assembly.
//!
//! A [`BatchConstraints`] value is validated once at construction and
//! read-only thereafter. It is `Copy` and safe to share across threads.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SluiceError};

/// Default maximum size of a single record (1 MB).
pub const DEFAULT_MAX_RECORD_SIZE_BYTES: usize = 1_000_000;
/// Default maximum cumulative size of a batch (5 MB).
pub const DEFAULT_MAX_BATCH_SIZE_BYTES: usize = 5_000_000;
/// Default maximum number of records per batch.
pub const DEFAULT_MAX_RECORDS_PER_BATCH: usize = 500;

/// The immutable triple of limits governing batch assembly.
///
/// All three limits are strictly positive. Limits are inclusive upper bounds:
/// a batch whose byte sum or record count exactly equals a limit is valid.
///
/// Only positivity is validated. In particular `max_record_size_bytes` may
/// exceed `max_batch_size_bytes`; a single valid record then still opens a
/// batch of its own, matching the permissive reference behavior.
///
/// # Examples
///
/// ```
/// use sluice_core::BatchConstraints;
///
/// let constraints = BatchConstraints::new(10, 20, 2)?;
/// assert_eq!(constraints.max_records_per_batch(), 2);
///
/// // Two constructions from the same limits are interchangeable.
/// assert_eq!(constraints, BatchConstraints::new(10, 20, 2)?);
/// # Ok::<(), sluice_core::SluiceError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawConstraints")]
pub struct BatchConstraints {
    max_record_size_bytes: usize,
    max_batch_size_bytes: usize,
    max_records_per_batch: usize,
}

impl BatchConstraints {
    /// Create a validated constraint set.
    ///
    /// # Errors
    ///
    /// Returns [`SluiceError::InvalidConstraint`] naming the first offending
    /// field when any limit is zero.
    pub fn new(
        max_record_size_bytes: usize,
        max_batch_size_bytes: usize,
        max_records_per_batch: usize,
    ) -> Result<Self> {
        if max_record_size_bytes == 0 {
            return Err(SluiceError::invalid_constraint("max_record_size_bytes", 0));
        }
        if max_batch_size_bytes == 0 {
            return Err(SluiceError::invalid_constraint("max_batch_size_bytes", 0));
        }
        if max_records_per_batch == 0 {
            return Err(SluiceError::invalid_constraint("max_records_per_batch", 0));
        }

        Ok(Self {
            max_record_size_bytes,
            max_batch_size_bytes,
            max_records_per_batch,
        })
    }

    /// Maximum encoded size of a single record, in bytes.
    pub const fn max_record_size_bytes(&self) -> usize {
        self.max_record_size_bytes
    }

    /// Maximum cumulative encoded size of a batch, in bytes.
    pub const fn max_batch_size_bytes(&self) -> usize {
        self.max_batch_size_bytes
    }

    /// Maximum number of records in a batch.
    pub const fn max_records_per_batch(&self) -> usize {
        self.max_records_per_batch
    }
}

impl Default for BatchConstraints {
    fn default() -> Self {
        Self {
            max_record_size_bytes: DEFAULT_MAX_RECORD_SIZE_BYTES,
            max_batch_size_bytes: DEFAULT_MAX_BATCH_SIZE_BYTES,
            max_records_per_batch: DEFAULT_MAX_RECORDS_PER_BATCH,
        }
    }
}

// Deserialization goes through the raw form so that deserialized constraints
// are validated exactly like constructed ones.
#[derive(Deserialize)]
struct RawConstraints {
    #[serde(default = "default_max_record_size_bytes")]
    max_record_size_bytes: usize,
    #[serde(default = "default_max_batch_size_bytes")]
    max_batch_size_bytes: usize,
    #[serde(default = "default_max_records_per_batch")]
    max_records_per_batch: usize,
}

fn default_max_record_size_bytes() -> usize {
    DEFAULT_MAX_RECORD_SIZE_BYTES
}

fn default_max_batch_size_bytes() -> usize {
    DEFAULT_MAX_BATCH_SIZE_BYTES
}

fn default_max_records_per_batch() -> usize {
    DEFAULT_MAX_RECORDS_PER_BATCH
}

impl TryFrom<RawConstraints> for BatchConstraints {
    type Error = SluiceError;

    fn try_from(raw: RawConstraints) -> Result<Self> {
        Self::new(
            raw.max_record_size_bytes,
            raw.max_batch_size_bytes,
            raw.max_records_per_batch,
        )
    }
}
