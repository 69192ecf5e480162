// Copyright 2025 Sluice Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Conversion of plain value streams into record streams.

use futures::stream::Map;
use futures::{Stream, StreamExt};
use sluice_core::RecordValue;

/// Converts a stream of string-like values into a stream of [`RecordValue`].
///
/// Lets channel receivers and plain `String` sources plug straight into
/// [`batch_records`](crate::BatchRecordsExt::batch_records):
///
/// ```
/// use futures::{stream, StreamExt};
/// use sluice_core::BatchConstraints;
/// use sluice_stream::prelude::*;
///
/// # #[tokio::main]
/// # async fn main() -> anyhow::Result<()> {
/// let lines = stream::iter(vec!["a".to_string(), "b".to_string()]);
/// let mut batches = lines
///     .into_record_values()
///     .batch_records(BatchConstraints::default());
///
/// let batch = batches.next().await.unwrap()?;
/// assert_eq!(batch.records(), ["a", "b"]);
/// # Ok(())
/// # }
/// ```
pub trait IntoRecordStream: Stream + Sized
where
    Self::Item: Into<RecordValue>,
{
    /// Map every item into a [`RecordValue`].
    fn into_record_values(self) -> Map<Self, fn(Self::Item) -> RecordValue> {
        self.map(Into::into as fn(Self::Item) -> RecordValue)
    }
}

impl<S> IntoRecordStream for S
where
    S: Stream + Sized,
    S::Item: Into<RecordValue>,
{
}
