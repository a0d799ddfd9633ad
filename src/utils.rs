// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Utility Functions** - *Kernel Processing Helpers*
//!
//! Helpers supporting kernel implementations: null detection and buffer capacity checks.

use minarrow::Bitmask;

use crate::errors::{KernelError, log_length_mismatch};

/// Determines whether nulls are present given an optional null count and mask reference.
/// Avoids computing mask cardinality to preserve performance guarantees.
#[inline(always)]
pub fn has_nulls(null_count: Option<usize>, mask: Option<&Bitmask>) -> bool {
    match null_count {
        Some(n) => n > 0,
        None => mask.is_some(),
    }
}

/// Checks that an output buffer matches the input length.
#[inline(always)]
pub fn confirm_equal_len(label: &str, out_len: usize, in_len: usize) -> Result<(), KernelError> {
    if out_len != in_len {
        return Err(KernelError::LengthMismatch(log_length_mismatch(
            label.to_string(),
            out_len,
            in_len,
        )));
    }
    Ok(())
}

/// Checks the mask covers the input.
/// Used so we can avoid bounds checks in the hot loop
#[inline(always)]
pub fn confirm_mask_capacity(cmp_len: usize, mask: Option<&Bitmask>) -> Result<(), KernelError> {
    if let Some(m) = mask {
        if m.len() < cmp_len {
            return Err(KernelError::LengthMismatch(log_length_mismatch(
                "mask (Bitmask)".to_string(),
                m.len(),
                cmp_len,
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_count_takes_precedence() {
        let m = Bitmask::new_set_all(4, true);
        assert!(!has_nulls(Some(0), Some(&m)));
        assert!(has_nulls(None, Some(&m)));
        assert!(!has_nulls(None, None));
        assert!(has_nulls(Some(2), Some(&m)));
    }

    #[test]
    fn short_mask_rejected() {
        let m = Bitmask::new_set_all(2, true);
        assert!(confirm_mask_capacity(3, Some(&m)).is_err());
        assert!(confirm_mask_capacity(2, Some(&m)).is_ok());
        assert!(confirm_mask_capacity(10, None).is_ok());
    }

    #[test]
    fn output_len_checked() {
        assert!(confirm_equal_len("out", 3, 3).is_ok());
        let err = confirm_equal_len("out", 2, 3).unwrap_err();
        assert!(matches!(err, KernelError::LengthMismatch(_)));
    }
}
