// Copyright 2025 Sluice Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Core types and the greedy packing engine for record batching.
//!
//! This crate packs an ordered sequence of opaque text records into an
//! ordered sequence of batches satisfying three limits at once: a per-record
//! maximum byte size, a per-batch maximum cumulative byte size, and a
//! per-batch maximum record count. It prepares payloads for downstream
//! transport layers (streaming ingestion APIs) that reject violating
//! payloads.
//!
//! # Architecture
//!
//! - **[`BatchConstraints`]**: the immutable, validated limit triple
//! - **[`RecordValue`]**: a candidate record, textual or undecoded binary
//! - **[`Packer`]**: the single-pass greedy state machine
//! - **[`BatchAssembler`]** / **[`Batches`]**: the lazy pull-based front-end
//! - **[`BatchMetrics`]** / **[`MetricsSnapshot`]**: run counters for one pass
//!
//! The packing is greedy and order-preserving: each record either extends the
//! open batch or, when it would push a limit past its inclusive bound, seals
//! that batch and starts the next one. Closed batches are never revisited and
//! records are never reordered.
//!
//! # Error semantics
//!
//! Oversized text records are a soft condition: discarded, counted in
//! [`MetricsSnapshot::records_discarded`] and logged at `warn` level via
//! [`tracing`] (install no subscriber for a no-op sink). A non-text record is
//! a hard [`SluiceError::TypeMismatch`] that aborts the pass, with counters
//! retaining the progress made before it.
//!
//! # Examples
//!
//! ```
//! use sluice_core::{pack_records, BatchConstraints, RecordValue};
//!
//! let constraints = BatchConstraints::new(10, 15, 500)?;
//! let records = ["aaaaa", "bbbbb", "ccccc"].map(RecordValue::from);
//!
//! // 3 x 5 bytes == 15 <= the byte limit: a single batch of three.
//! let batches = pack_records(records, constraints)?;
//! assert_eq!(batches.len(), 1);
//! assert_eq!(batches[0].byte_size(), 15);
//! # Ok::<(), sluice_core::SluiceError>(())
//! ```

pub mod assembler;
pub mod batch;
pub mod constraints;
pub mod error;
pub mod metrics;
pub mod packer;
pub mod record;

pub use assembler::{pack_records, BatchAssembler, Batches};
pub use batch::Batch;
pub use constraints::{
    BatchConstraints, DEFAULT_MAX_BATCH_SIZE_BYTES, DEFAULT_MAX_RECORDS_PER_BATCH,
    DEFAULT_MAX_RECORD_SIZE_BYTES,
};
pub use error::{Result, SluiceError};
pub use metrics::{BatchMetrics, MetricsSnapshot};
pub use packer::Packer;
pub use record::{is_valid_record, RecordValue};
