use soroban_sdk::{Env, Vec};

use crate::errors::BallotError;
use crate::storage;

/// Index of the strictly greatest count, scanning in order.
///
/// The first index to reach the running maximum keeps it, so ties and an
/// all-zero tally resolve to the lowest index.
pub fn winning_index<I>(vote_counts: I) -> u32
where
    I: IntoIterator<Item = u64>,
{
    let mut winning: u32 = 0;
    let mut winning_count: u64 = 0;
    for (index, count) in (0u32..).zip(vote_counts) {
        if count > winning_count {
            winning_count = count;
            winning = index;
        }
    }
    winning
}

/// Vote counts of every proposal, in index order.
pub fn vote_counts(env: &Env) -> Result<Vec<u64>, BallotError> {
    let count = storage::get_proposal_count(env)?;
    let mut counts = Vec::new(env);
    for index in 0..count {
        counts.push_back(storage::read_proposal(env, index)?.vote_count);
    }
    Ok(counts)
}

pub fn winning_proposal(env: &Env) -> Result<u32, BallotError> {
    Ok(winning_index(vote_counts(env)?))
}
