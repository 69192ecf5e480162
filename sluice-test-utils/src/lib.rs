// Copyright 2025 Sluice Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Shared test fixtures for the sluice crates.

use std::time::Duration;

use async_channel::{Receiver, Sender};
use futures::stream::StreamExt;
use futures::Stream;
use sluice_core::{Batch, RecordValue, Result};
use tokio::time::sleep;

/// A text record of exactly `len` bytes (`"x"` repeated).
pub fn text_record(len: usize) -> RecordValue {
    RecordValue::Text("x".repeat(len))
}

/// A binary record of `len` bytes.
pub fn binary_record(len: usize) -> RecordValue {
    RecordValue::Binary(vec![0u8; len])
}

/// Concatenate the records of all batches, preserving order.
pub fn flatten(batches: &[Batch]) -> Vec<String> {
    batches
        .iter()
        .flat_map(|batch| batch.records().iter().cloned())
        .collect()
}

/// An unbounded record channel; the receiver is a `Stream` of [`RecordValue`].
pub fn record_channel() -> (Sender<RecordValue>, Receiver<RecordValue>) {
    async_channel::unbounded()
}

/// Await the next batch, panicking after `timeout_ms` of silence or on
/// stream end.
pub async fn next_batch<S>(stream: &mut S, timeout_ms: u64) -> Result<Batch>
where
    S: Stream<Item = Result<Batch>> + Unpin,
{
    tokio::select! {
        item = stream.next() => item.expect("expected next batch, stream ended"),
        () = sleep(Duration::from_millis(timeout_ms)) => {
            panic!("no batch emitted within {timeout_ms}ms")
        }
    }
}

/// Assert that the stream emits nothing within `timeout_ms`.
pub async fn assert_no_batch_emitted<S>(stream: &mut S, timeout_ms: u64)
where
    S: Stream<Item = Result<Batch>> + Unpin,
{
    tokio::select! {
        item = stream.next() => {
            panic!("unexpected emission, expected no output: {item:?}");
        }
        () = sleep(Duration::from_millis(timeout_ms)) => {}
    }
}
