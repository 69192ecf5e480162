// Copyright 2025 Sluice Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Demonstration of batch assembly over a record stream.
//!
//! Builds a workload of medium-sized records plus a few pathological ones
//! (oversized, empty, multibyte), batches them under the default constraints
//! and prints a per-batch summary and the final metrics.
//!
//! Pass a path to a JSON constraints file to override the defaults:
//!
//! ```text
//! cargo run --example ingest_demo -- constraints.json
//! ```

use futures::{stream, StreamExt};
use sluice_core::{BatchConstraints, RecordValue};
use sluice_stream::prelude::*;
use tracing_subscriber::EnvFilter;

fn demo_records() -> Vec<RecordValue> {
    // Regular records (~100 KB each), enough to force several batches.
    let medium = "x".repeat(100_000);
    let mut records: Vec<RecordValue> = (0..750)
        .map(|i| RecordValue::Text(format!("{medium}-{i}")))
        .collect();

    // Pathological records: one oversized (discarded), one empty (valid),
    // one multibyte (measured by UTF-8 byte length).
    records.push(RecordValue::Text("x".repeat(2_000_000)));
    records.push(RecordValue::from(""));
    records.push(RecordValue::Text("🌟".repeat(1000)));
    records
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let constraints = match std::env::args().nth(1) {
        Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        None => BatchConstraints::default(),
    };

    let records = demo_records();
    println!("created {} test records", records.len());

    let mut batches = stream::iter(records).batch_records(constraints);
    let metrics = batches.metrics();

    let mut index = 0usize;
    while let Some(batch) = batches.next().await {
        let batch = batch?;
        index += 1;
        println!(
            "batch {index}: {} records, {} bytes",
            batch.len(),
            batch.byte_size()
        );
    }

    println!("final metrics:");
    println!("{}", serde_json::to_string_pretty(&metrics.snapshot())?);
    Ok(())
}
