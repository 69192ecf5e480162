// Copyright 2025 Sluice Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! A finalized, ordered group of records.

/// An ordered, non-empty group of text records within the batch limits.
///
/// Batches are created incrementally by the packer and immutable once
/// yielded. Records pass through unchanged and in input order; the cumulative
/// byte size is tracked alongside so consumers do not re-measure.
///
/// The assembler never yields an empty batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch {
    records: Vec<String>,
    byte_size: usize,
}

impl Batch {
    // Callers must pass a non-empty record list with its exact byte sum.
    pub(crate) fn new(records: Vec<String>, byte_size: usize) -> Self {
        debug_assert!(!records.is_empty(), "batches are non-empty by construction");
        Self { records, byte_size }
    }

    /// Number of records in the batch.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always `false`: the assembler never yields an empty batch.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Cumulative encoded size of the records, in bytes.
    pub const fn byte_size(&self) -> usize {
        self.byte_size
    }

    /// The records, in input order.
    pub fn records(&self) -> &[String] {
        &self.records
    }

    /// Consume the batch, returning its records.
    pub fn into_records(self) -> Vec<String> {
        self.records
    }
}

impl IntoIterator for Batch {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a Batch {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
