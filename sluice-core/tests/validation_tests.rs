// Copyright 2025 Sluice Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Record validation tests: soft size rejection vs. hard type errors.

use sluice_core::{is_valid_record, BatchConstraints, RecordValue, SluiceError};

#[test]
fn test_small_text_record_is_valid() -> anyhow::Result<()> {
    let constraints = BatchConstraints::new(5, 100, 10)?;
    assert!(is_valid_record(
        &RecordValue::from("abc"),
        0,
        &constraints
    )?);
    Ok(())
}

#[test]
fn test_record_exactly_at_limit_is_valid() -> anyhow::Result<()> {
    // Limits are inclusive upper bounds.
    let constraints = BatchConstraints::new(5, 100, 10)?;
    assert!(is_valid_record(
        &RecordValue::from("abcde"),
        0,
        &constraints
    )?);
    Ok(())
}

#[test]
fn test_oversized_record_is_soft_rejected() -> anyhow::Result<()> {
    let constraints = BatchConstraints::new(5, 100, 10)?;
    assert!(!is_valid_record(
        &RecordValue::from("abcdef"),
        0,
        &constraints
    )?);
    Ok(())
}

#[test]
fn test_empty_record_is_valid() -> anyhow::Result<()> {
    let constraints = BatchConstraints::new(5, 100, 10)?;
    assert!(is_valid_record(&RecordValue::from(""), 0, &constraints)?);
    Ok(())
}

#[test]
fn test_size_is_utf8_byte_length() -> anyhow::Result<()> {
    // "🌟" is one char but four UTF-8 bytes.
    let constraints = BatchConstraints::new(5, 100, 10)?;
    assert_eq!(RecordValue::from("🌟").encoded_len(), 4);
    assert!(is_valid_record(&RecordValue::from("🌟"), 0, &constraints)?);
    assert!(!is_valid_record(&RecordValue::from("🌟🌟"), 0, &constraints)?);
    Ok(())
}

#[test]
fn test_binary_record_is_a_hard_error() -> anyhow::Result<()> {
    let constraints = BatchConstraints::new(5, 100, 10)?;

    let err = is_valid_record(&RecordValue::Binary(vec![1, 2, 3]), 4, &constraints).unwrap_err();

    assert_eq!(
        err,
        SluiceError::TypeMismatch {
            position: 4,
            found: "binary"
        }
    );
    assert!(err.is_type_mismatch());
    Ok(())
}

#[test]
fn test_record_value_kinds_and_conversions() {
    assert!(RecordValue::from("abc").is_text());
    assert!(!RecordValue::from(vec![1u8, 2]).is_text());
    assert_eq!(RecordValue::from(String::from("ab")).kind(), "text");
    assert_eq!(RecordValue::from(vec![0u8; 3]).kind(), "binary");
    assert_eq!(RecordValue::from(vec![0u8; 3]).encoded_len(), 3);
}
