#[cfg(test)]
#[path = "../../tests/unit/validation/permutation_test.rs"]
mod permutation_test;

use crate::utils::{CheckError, CheckResult};

/// Checks that the sequence is a permutation of `0..size`: it has `size` elements,
/// all of them in range and none repeats.
pub fn validate_permutation(sequence: &[usize], size: usize) -> CheckResult<()> {
    validate_permutation_of(sequence, size, "vertex")
}

/// Same as [`validate_permutation`], but uses `element` to name sequence items in errors.
pub(crate) fn validate_permutation_of(sequence: &[usize], size: usize, element: &str) -> CheckResult<()> {
    if sequence.len() != size {
        return Err(CheckError::validation(format!(
            "expected a permutation of {size} {element} ids, got {} items",
            sequence.len()
        )));
    }

    let mut seen = vec![false; size];

    for (position, &value) in sequence.iter().enumerate() {
        let is_seen = seen.get_mut(value).ok_or_else(|| {
            CheckError::validation(format!(
                "{element} {value} at position {position} is out of range [0, {size})"
            ))
        })?;

        if *is_seen {
            return Err(CheckError::validation(format!(
                "{element} {value} is visited more than once, repeated at position {position}"
            )));
        }

        *is_seen = true;
    }

    Ok(())
}
