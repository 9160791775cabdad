//! Input checks shared by the ballot entry points.

use soroban_sdk::{Bytes, Vec};

use crate::constants::{MAX_NAME_LEN, MAX_PROPOSALS};
use crate::errors::BallotError;

/// Validate the proposal list handed to `initialize`.
///
/// # Returns
/// `Err(NoProposals)` for an empty list, `Err(TooManyProposals)` above
/// `MAX_PROPOSALS`, `Err(NameTooLong)` if any name exceeds `MAX_NAME_LEN` bytes.
pub fn validate_proposal_names(names: &Vec<Bytes>) -> Result<(), BallotError> {
    if names.is_empty() {
        return Err(BallotError::NoProposals);
    }
    if names.len() > MAX_PROPOSALS {
        return Err(BallotError::TooManyProposals);
    }
    for name in names.iter() {
        if name.len() > MAX_NAME_LEN {
            return Err(BallotError::NameTooLong);
        }
    }
    Ok(())
}

/// Validate that `index` addresses one of `count` proposals.
pub fn validate_proposal_index(index: u32, count: u32) -> Result<(), BallotError> {
    if index >= count {
        return Err(BallotError::IndexOutOfRange);
    }
    Ok(())
}

/// Add two weights, failing with `Overflow` instead of wrapping.
pub fn safe_add(a: u64, b: u64) -> Result<u64, BallotError> {
    a.checked_add(b).ok_or(BallotError::Overflow)
}
