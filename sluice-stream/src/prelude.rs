// Copyright 2025 Sluice Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Prelude module re-exporting the commonly used traits and types.
//!
//! ```ignore
//! use sluice_stream::prelude::*;
//!
//! let batches = records.into_record_values().batch_records(constraints);
//! ```

pub use crate::batch_records::{BatchRecordsExt, BatchStream, MetricsHandle};
pub use crate::record_stream::IntoRecordStream;
pub use sluice_core::{Batch, BatchConstraints, MetricsSnapshot, RecordValue, SluiceError};
