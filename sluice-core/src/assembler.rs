// Copyright 2025 Sluice Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Synchronous, lazy batch assembly.
//!
//! [`BatchAssembler`] wraps a [`Packer`] and exposes the pull-based
//! [`Batches`] iterator: batch N+1 is not constructed until the consumer asks
//! for it, so batch consumption (say, network transmission) can interleave
//! with production without buffering the whole output.
//!
//! # Examples
//!
//! ```
//! use sluice_core::{BatchAssembler, BatchConstraints, RecordValue};
//!
//! let constraints = BatchConstraints::new(10, 20, 2)?;
//! let mut assembler = BatchAssembler::new(constraints);
//!
//! let records = ["aaaaa", "bbbbb", "ccccc"].map(RecordValue::from);
//! let batches: Vec<_> = assembler
//!     .create_batches(records)
//!     .collect::<sluice_core::Result<_>>()?;
//!
//! assert_eq!(batches.len(), 2);
//! assert_eq!(batches[0].records(), ["aaaaa", "bbbbb"]);
//! assert_eq!(batches[1].records(), ["ccccc"]);
//! assert_eq!(assembler.metrics().batches_created, 2);
//! # Ok::<(), sluice_core::SluiceError>(())
//! ```

use crate::batch::Batch;
use crate::constraints::BatchConstraints;
use crate::error::Result;
use crate::metrics::MetricsSnapshot;
use crate::packer::Packer;
use crate::record::RecordValue;

/// Packs ordered record sequences into batches, accumulating run counters.
///
/// One assembler owns one set of counters. Constructing a new assembler is
/// the only way to reset them.
#[derive(Debug)]
pub struct BatchAssembler {
    packer: Packer,
}

impl BatchAssembler {
    /// Create an assembler governed by `constraints`.
    pub fn new(constraints: BatchConstraints) -> Self {
        Self {
            packer: Packer::new(constraints),
        }
    }

    /// Create an assembler with the default constraint set.
    pub fn with_defaults() -> Self {
        Self::new(BatchConstraints::default())
    }

    /// Lazily pack `records` into batches, in input order.
    ///
    /// The returned iterator yields `Ok(batch)` for each completed batch and
    /// at most one `Err` — a [`TypeMismatch`](crate::SluiceError::TypeMismatch)
    /// that aborts the pass — after which it is fused. Dropping the iterator
    /// early leaves the assembler's counters reflecting the work done so far.
    pub fn create_batches<I>(&mut self, records: I) -> Batches<'_, I::IntoIter>
    where
        I: IntoIterator<Item = RecordValue>,
    {
        Batches {
            packer: &mut self.packer,
            source: records.into_iter(),
            done: false,
        }
    }

    /// The constraint set shared across this assembler's lifetime.
    pub const fn constraints(&self) -> &BatchConstraints {
        self.packer.constraints()
    }

    /// Snapshot of the run counters, reflecting work done so far.
    pub fn metrics(&self) -> MetricsSnapshot {
        self.packer.metrics()
    }
}

/// Lazy iterator over the batches of one assembly pass.
///
/// Created by [`BatchAssembler::create_batches`]. Fused after the end of
/// input or after yielding an error.
#[derive(Debug)]
pub struct Batches<'a, I> {
    packer: &'a mut Packer,
    source: I,
    done: bool,
}

impl<I> Iterator for Batches<'_, I>
where
    I: Iterator<Item = RecordValue>,
{
    type Item = Result<Batch>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            match self.source.next() {
                Some(record) => match self.packer.push(record) {
                    Ok(Some(batch)) => return Some(Ok(batch)),
                    Ok(None) => {}
                    Err(e) => {
                        self.done = true;
                        return Some(Err(e));
                    }
                },
                None => {
                    self.done = true;
                    return self.packer.finish().map(Ok);
                }
            }
        }
    }
}

/// Pack `records` into a fully materialized list of batches.
///
/// Convenience wrapper over a one-shot [`BatchAssembler`]; use the assembler
/// directly when you need the lazy iterator or the run counters.
///
/// # Errors
///
/// Returns the first hard validation error, discarding any batches already
/// assembled.
pub fn pack_records<I>(records: I, constraints: BatchConstraints) -> Result<Vec<Batch>>
where
    I: IntoIterator<Item = RecordValue>,
{
    let mut assembler = BatchAssembler::new(constraints);
    assembler.create_batches(records).collect()
}
