// Copyright 2025 Sluice Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Value-path tests for the `batch_records` operator.

use futures::{stream, StreamExt};
use sluice_core::{BatchConstraints, RecordValue};
use sluice_stream::prelude::*;
use sluice_test_utils::{
    assert_no_batch_emitted, flatten, next_batch, record_channel, text_record,
};

#[tokio::test]
async fn test_batch_is_sealed_only_when_a_record_does_not_fit() -> anyhow::Result<()> {
    // Arrange
    let (tx, rx) = record_channel();
    let mut batches = rx.batch_records(BatchConstraints::new(10, 20, 2)?);

    // Act & Assert: two records fill the batch but do not seal it yet.
    tx.send(RecordValue::from("aaaaa")).await?;
    tx.send(RecordValue::from("bbbbb")).await?;
    assert_no_batch_emitted(&mut batches, 50).await;

    // The third record overflows the count limit and seals the batch.
    tx.send(RecordValue::from("ccccc")).await?;
    let first = next_batch(&mut batches, 100).await?;
    assert_eq!(first.records(), ["aaaaa", "bbbbb"]);

    // Closing the source flushes the partial batch.
    drop(tx);
    let second = next_batch(&mut batches, 100).await?;
    assert_eq!(second.records(), ["ccccc"]);
    assert!(batches.next().await.is_none());
    Ok(())
}

#[tokio::test]
async fn test_byte_limit_seals_batches() -> anyhow::Result<()> {
    let (tx, rx) = record_channel();
    let mut batches = rx.batch_records(BatchConstraints::new(10, 10, 500)?);

    tx.send(text_record(5)).await?;
    tx.send(text_record(5)).await?;
    tx.send(text_record(5)).await?;
    drop(tx);

    let first = next_batch(&mut batches, 100).await?;
    assert_eq!(first.byte_size(), 10);
    let second = next_batch(&mut batches, 100).await?;
    assert_eq!(second.byte_size(), 5);
    Ok(())
}

#[tokio::test]
async fn test_empty_source_yields_no_batches() -> anyhow::Result<()> {
    let (tx, rx) = record_channel();
    let mut batches = rx.batch_records(BatchConstraints::default());
    let metrics = batches.metrics();

    drop(tx);

    assert!(batches.next().await.is_none());
    assert_eq!(metrics.snapshot(), Default::default());
    Ok(())
}

#[tokio::test]
async fn test_oversized_records_are_discarded_mid_stream() -> anyhow::Result<()> {
    // Arrange
    let (tx, rx) = record_channel();
    let mut batches = rx.batch_records(BatchConstraints::new(5, 100, 500)?);
    let metrics = batches.metrics();

    // Act: an oversized record between two valid ones.
    tx.send(RecordValue::from("aa")).await?;
    tx.send(text_record(6)).await?;
    tx.send(RecordValue::from("bb")).await?;
    drop(tx);

    // Assert
    let batch = next_batch(&mut batches, 100).await?;
    assert_eq!(batch.records(), ["aa", "bb"]);
    assert!(batches.next().await.is_none());

    let snapshot = metrics.snapshot();
    assert_eq!(snapshot.records_discarded, 1);
    assert_eq!(snapshot.records_processed, 2);
    Ok(())
}

#[tokio::test]
async fn test_metrics_reflect_partial_progress_mid_pass() -> anyhow::Result<()> {
    // Arrange: enough records for two batches, consume only the first.
    let records: Vec<RecordValue> = (0..5).map(|_| text_record(4)).collect();
    let mut batches =
        stream::iter(records).batch_records(BatchConstraints::new(10, 1000, 2)?);
    let metrics = batches.metrics();

    // Act
    let first = next_batch(&mut batches, 100).await?;
    drop(batches);

    // Assert: counters are in a well-defined state for the abandoned pass.
    assert_eq!(first.len(), 2);
    let snapshot = metrics.snapshot();
    assert_eq!(snapshot.batches_created, 1);
    assert_eq!(snapshot.records_processed, 3);
    assert_eq!(snapshot.total_bytes_processed, 12);
    Ok(())
}

#[tokio::test]
async fn test_order_is_preserved_across_batches() -> anyhow::Result<()> {
    let records: Vec<RecordValue> = (0..10).map(|i| RecordValue::from(i.to_string())).collect();
    let expected: Vec<String> = (0..10).map(|i| i.to_string()).collect();

    let batches: Vec<_> = stream::iter(records)
        .batch_records(BatchConstraints::new(10, 1000, 3)?)
        .collect::<Vec<_>>()
        .await
        .into_iter()
        .collect::<sluice_core::Result<_>>()?;

    assert_eq!(flatten(&batches), expected);
    assert!(batches.iter().all(|batch| !batch.is_empty()));
    Ok(())
}

#[tokio::test]
async fn test_string_streams_adapt_into_record_streams() -> anyhow::Result<()> {
    let lines = stream::iter(vec!["a".to_string(), "b".to_string(), "c".to_string()]);

    let mut batches = lines
        .into_record_values()
        .batch_records(BatchConstraints::new(10, 1000, 2)?);

    let first = next_batch(&mut batches, 100).await?;
    assert_eq!(first.records(), ["a", "b"]);
    let second = next_batch(&mut batches, 100).await?;
    assert_eq!(second.records(), ["c"]);
    Ok(())
}
