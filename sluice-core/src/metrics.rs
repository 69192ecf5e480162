// Copyright 2025 Sluice Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Processing metrics for one assembly pass.
//!
//! [`BatchMetrics`] is the mutable accumulator owned by a single assembler
//! (or batching stream); [`MetricsSnapshot`] is the read-only copy handed to
//! callers. All counters are monotonically non-decreasing; a fresh
//! accumulator comes from constructing a fresh assembler.

use serde::Serialize;

/// Mutable tally of processing outcomes for one assembly pass.
#[derive(Debug, Default, Clone)]
pub struct BatchMetrics {
    records_processed: u64,
    records_discarded: u64,
    batches_created: u64,
    total_bytes_processed: u64,
}

impl BatchMetrics {
    /// Create a zeroed accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_accepted(&mut self, size: usize) {
        self.records_processed += 1;
        self.total_bytes_processed += size as u64;
    }

    pub(crate) fn record_discarded(&mut self) {
        self.records_discarded += 1;
    }

    pub(crate) fn batch_sealed(&mut self) {
        self.batches_created += 1;
    }

    /// A read-only copy of the current counter values.
    ///
    /// The snapshot is a copy, not a live view: it is safe to retain across
    /// further assembly work.
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            records_processed: self.records_processed,
            records_discarded: self.records_discarded,
            batches_created: self.batches_created,
            total_bytes_processed: self.total_bytes_processed,
        }
    }
}

/// Read-only counter values at a point in time.
///
/// Serializes as a mapping with four named numeric fields, for export to
/// monitoring collaborators.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    /// Valid records accepted into some batch
    pub records_processed: u64,
    /// Records rejected by size validation
    pub records_discarded: u64,
    /// Batches yielded so far
    pub batches_created: u64,
    /// Sum of encoded sizes of accepted records
    pub total_bytes_processed: u64,
}
