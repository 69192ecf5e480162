// Copyright 2025 Sluice Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Async stream adapter for sluice record batching.
//!
//! This crate lifts the synchronous packing engine of [`sluice_core`] onto
//! [`futures::Stream`] sources, in the extension-trait-per-operator style:
//!
//! - **[`BatchRecordsExt::batch_records`]**: pack a record stream into a lazy
//!   stream of batches
//! - **[`IntoRecordStream::into_record_values`]**: adapt streams of
//!   string-like values into record streams
//! - **[`MetricsHandle`]**: snapshot the run counters of a pass while it runs
//!
//! Batching semantics are exactly those of
//! [`BatchAssembler`](sluice_core::BatchAssembler): greedy, order-preserving,
//! inclusive limits, soft discard of oversized records, hard abort on a
//! non-text record.
//!
//! # Examples
//!
//! ```
//! use futures::{stream, StreamExt};
//! use sluice_core::{BatchConstraints, RecordValue};
//! use sluice_stream::prelude::*;
//!
//! # #[tokio::main]
//! # async fn main() -> anyhow::Result<()> {
//! let records = ["aaaaa", "bbbbb", "ccccc"].map(RecordValue::from);
//! let mut batches = stream::iter(records).batch_records(BatchConstraints::new(10, 15, 500)?);
//! let metrics = batches.metrics();
//!
//! let batch = batches.next().await.unwrap()?;
//! assert_eq!(batch.len(), 3);
//! assert!(batches.next().await.is_none());
//! assert_eq!(metrics.snapshot().total_bytes_processed, 15);
//! # Ok(())
//! # }
//! ```

pub mod batch_records;
pub mod prelude;
pub mod record_stream;

pub use batch_records::{BatchRecordsExt, BatchStream, MetricsHandle};
pub use record_stream::IntoRecordStream;
