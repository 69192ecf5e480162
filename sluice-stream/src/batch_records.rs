// Copyright 2025 Sluice Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Batch-records operator for async record sources.
//!
//! This module provides the [`batch_records`](BatchRecordsExt::batch_records)
//! operator that packs a stream of candidate records into batches honoring
//! the full constraint set (per-record size, per-batch size, per-batch
//! count). It drives the same [`Packer`] state machine as the synchronous
//! assembler, so batching semantics and counter accounting are identical.
//!
//! # Overview
//!
//! Batches are produced lazily: one upstream record is pulled per step until
//! a batch seals or the source pends. On source completion any partial batch
//! is flushed. A hard validation error ([`TypeMismatch`]) is yielded once,
//! after which the stream is terminated.
//!
//! # Basic Usage
//!
//! ```
//! use futures::StreamExt;
//! use sluice_core::{BatchConstraints, RecordValue};
//! use sluice_stream::prelude::*;
//!
//! # #[tokio::main]
//! # async fn main() -> anyhow::Result<()> {
//! let (tx, rx) = async_channel::unbounded();
//! let mut batches = rx.batch_records(BatchConstraints::new(10, 20, 2)?);
//!
//! tx.try_send(RecordValue::from("aaaaa"))?;
//! tx.try_send(RecordValue::from("bbbbb"))?;
//! tx.try_send(RecordValue::from("ccccc"))?;
//! drop(tx); // flushes the partial batch
//!
//! let first = batches.next().await.unwrap()?;
//! assert_eq!(first.records(), ["aaaaa", "bbbbb"]); // count limit reached
//!
//! let second = batches.next().await.unwrap()?;
//! assert_eq!(second.records(), ["ccccc"]);
//! # Ok(())
//! # }
//! ```
//!
//! [`TypeMismatch`]: sluice_core::SluiceError::TypeMismatch

use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use futures::stream::FusedStream;
use futures::Stream;
use parking_lot::Mutex;
use pin_project::pin_project;
use sluice_core::{Batch, BatchConstraints, MetricsSnapshot, Packer, RecordValue, Result};

/// Extension trait providing the [`batch_records`](Self::batch_records)
/// operator.
///
/// Implemented for all streams of [`RecordValue`].
pub trait BatchRecordsExt: Stream<Item = RecordValue> + Sized {
    /// Packs the records of this stream into batches under `constraints`.
    ///
    /// The returned stream yields `Ok(batch)` for each completed batch, in
    /// input order, and at most one `Err` after which it is fused. Counters
    /// for the pass are reachable through [`BatchStream::metrics`] while the
    /// stream runs.
    fn batch_records(self, constraints: BatchConstraints) -> BatchStream<Self> {
        BatchStream {
            source: self,
            packer: Arc::new(Mutex::new(Packer::new(constraints))),
            done: false,
        }
    }
}

impl<S> BatchRecordsExt for S where S: Stream<Item = RecordValue> + Sized {}

/// Stream of batches assembled from an upstream record source.
///
/// Created by [`BatchRecordsExt::batch_records`].
#[pin_project]
#[derive(Debug)]
pub struct BatchStream<S> {
    #[pin]
    source: S,
    // Shared with MetricsHandle so counters stay readable mid-pass.
    packer: Arc<Mutex<Packer>>,
    done: bool,
}

impl<S> BatchStream<S> {
    /// A handle onto this pass's run counters.
    ///
    /// Snapshots taken from the handle reflect the work done so far, also
    /// after the stream is dropped or was abandoned mid-pass.
    pub fn metrics(&self) -> MetricsHandle {
        MetricsHandle {
            packer: Arc::clone(&self.packer),
        }
    }
}

impl<S> Stream for BatchStream<S>
where
    S: Stream<Item = RecordValue>,
{
    type Item = Result<Batch>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        if *this.done {
            return Poll::Ready(None);
        }

        loop {
            match this.source.as_mut().poll_next(cx) {
                Poll::Ready(Some(record)) => match this.packer.lock().push(record) {
                    Ok(Some(batch)) => return Poll::Ready(Some(Ok(batch))),
                    Ok(None) => {}
                    Err(e) => {
                        *this.done = true;
                        return Poll::Ready(Some(Err(e)));
                    }
                },
                Poll::Ready(None) => {
                    *this.done = true;
                    return Poll::Ready(this.packer.lock().finish().map(Ok));
                }
                Poll::Pending => return Poll::Pending,
            }
        }
    }
}

impl<S> FusedStream for BatchStream<S>
where
    S: Stream<Item = RecordValue>,
{
    fn is_terminated(&self) -> bool {
        self.done
    }
}

/// Shared read access to the counters of one batching pass.
///
/// Cheap to clone; every [`snapshot`](Self::snapshot) is an independent copy
/// of the counters at that moment, not a live view.
#[derive(Debug, Clone)]
pub struct MetricsHandle {
    packer: Arc<Mutex<Packer>>,
}

impl MetricsHandle {
    /// Snapshot of the run counters, reflecting work done so far.
    pub fn snapshot(&self) -> MetricsSnapshot {
        self.packer.lock().metrics()
    }
}
