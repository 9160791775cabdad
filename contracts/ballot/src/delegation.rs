use soroban_sdk::{Address, Env};

use crate::constants::MAX_DELEGATION_HOPS;
use crate::errors::BallotError;
use crate::storage;
use crate::types::Voter;

/// Follow `to`'s delegation links until reaching a voter that has not delegated.
///
/// Returns the final address with its record. The walk is iterative and reads
/// at most `MAX_DELEGATION_HOPS` links past `to`. Reaching `caller` anywhere
/// on the chain is a cycle, since `caller` is about to delegate into it.
pub fn resolve(env: &Env, caller: &Address, to: &Address) -> Result<(Address, Voter), BallotError> {
    let mut current = to.clone();
    let mut voter = storage::get_voter(env, &current);
    let mut hops: u32 = 0;

    while let Some(next) = voter.delegate() {
        if next == *caller {
            return Err(BallotError::DelegationCycle);
        }
        hops += 1;
        if hops > MAX_DELEGATION_HOPS {
            return Err(BallotError::DelegationChainTooLong);
        }
        voter = storage::get_voter(env, &next);
        current = next;
    }

    Ok((current, voter))
}
