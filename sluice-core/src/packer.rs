// Copyright 2025 Sluice Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The single-pass greedy packing state machine.
//!
//! [`Packer`] is the engine shared by the synchronous
//! [`Batches`](crate::assembler::Batches) iterator and the async
//! `BatchStream` adapter: records go in one at a time via [`Packer::push`],
//! sealed batches come out whenever the next record does not fit, and
//! [`Packer::finish`] flushes the trailing partial batch.
//!
//! Limits are inclusive upper bounds. A record that makes a batch hit a limit
//! exactly is accepted into that batch; only a record that would push a
//! non-empty batch *past* a limit seals it and opens the next one.

use std::mem::take;

use tracing::info;

use crate::batch::Batch;
use crate::constraints::BatchConstraints;
use crate::error::Result;
use crate::metrics::{BatchMetrics, MetricsSnapshot};
use crate::record::{is_valid_record, RecordValue};

/// Greedy single-pass batch packing state.
///
/// Owns the run counters for the pass. Single-writer: drive it from one
/// thread at a time.
#[derive(Debug)]
pub struct Packer {
    constraints: BatchConstraints,
    metrics: BatchMetrics,
    buffer: Vec<String>,
    buffer_bytes: usize,
    position: usize,
}

impl Packer {
    /// Create a packer with zeroed counters and an empty buffer.
    pub fn new(constraints: BatchConstraints) -> Self {
        Self {
            constraints,
            metrics: BatchMetrics::new(),
            buffer: Vec::new(),
            buffer_bytes: 0,
            position: 0,
        }
    }

    /// Feed one candidate record, in input order.
    ///
    /// Returns `Ok(Some(batch))` when accepting the record sealed the batch
    /// in progress; the record itself has then already started the next one.
    /// Returns `Ok(None)` when the record was appended to the open batch or
    /// discarded as oversized.
    ///
    /// # Errors
    ///
    /// Returns [`TypeMismatch`](crate::SluiceError::TypeMismatch) for a
    /// non-text record. Counters retain the progress made before it; the
    /// caller is expected to stop feeding records afterwards.
    pub fn push(&mut self, record: RecordValue) -> Result<Option<Batch>> {
        let position = self.position;
        self.position += 1;

        if !is_valid_record(&record, position, &self.constraints)? {
            self.metrics.record_discarded();
            return Ok(None);
        }

        let text = match record {
            RecordValue::Text(text) => text,
            RecordValue::Binary(_) => unreachable!("non-text records fail validation"),
        };
        let size = text.len();

        let would_exceed_bytes = self.buffer_bytes + size > self.constraints.max_batch_size_bytes();
        let would_exceed_count =
            self.buffer.len() + 1 > self.constraints.max_records_per_batch();

        let sealed = if !self.buffer.is_empty() && (would_exceed_bytes || would_exceed_count) {
            Some(self.seal())
        } else {
            None
        };

        self.buffer.push(text);
        self.buffer_bytes += size;
        self.metrics.record_accepted(size);

        Ok(sealed)
    }

    /// Seal and return the trailing batch, if any records remain buffered.
    ///
    /// Call once after the input is exhausted. Never returns an empty batch.
    pub fn finish(&mut self) -> Option<Batch> {
        if self.buffer.is_empty() {
            None
        } else {
            Some(self.seal())
        }
    }

    /// The constraint set governing this pass.
    pub const fn constraints(&self) -> &BatchConstraints {
        &self.constraints
    }

    /// Snapshot of the run counters, reflecting work done so far.
    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    fn seal(&mut self) -> Batch {
        let records = take(&mut self.buffer);
        let byte_size = take(&mut self.buffer_bytes);
        self.metrics.batch_sealed();
        info!(
            records = records.len(),
            bytes = byte_size,
            "batch completed"
        );
        Batch::new(records, byte_size)
    }
}
