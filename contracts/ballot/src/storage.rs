use soroban_sdk::{Address, Env};

use crate::constants::{BALLOT_TTL_LEDGERS, BALLOT_TTL_THRESHOLD};
use crate::errors::BallotError;
use crate::types::{DataKey, Proposal, Voter};
use crate::validation::validate_proposal_index;

// ── Instance ─────────────────────────────────────────────────────────────────

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(BALLOT_TTL_THRESHOLD, BALLOT_TTL_LEDGERS);
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Chairperson)
}

pub fn set_chairperson(env: &Env, chairperson: &Address) {
    env.storage()
        .instance()
        .set(&DataKey::Chairperson, chairperson);
}

pub fn get_chairperson(env: &Env) -> Result<Address, BallotError> {
    env.storage()
        .instance()
        .get(&DataKey::Chairperson)
        .ok_or(BallotError::NotInitialized)
}

pub fn set_proposal_count(env: &Env, count: u32) {
    env.storage()
        .instance()
        .set(&DataKey::ProposalCount, &count);
}

pub fn get_proposal_count(env: &Env) -> Result<u32, BallotError> {
    env.storage()
        .instance()
        .get(&DataKey::ProposalCount)
        .ok_or(BallotError::NotInitialized)
}

// ── Proposals ────────────────────────────────────────────────────────────────

pub fn save_proposal(env: &Env, index: u32, proposal: &Proposal) {
    let key = DataKey::Proposal(index);
    env.storage().persistent().set(&key, proposal);
    env.storage()
        .persistent()
        .extend_ttl(&key, BALLOT_TTL_THRESHOLD, BALLOT_TTL_LEDGERS);
}

/// Proposal at `index`, or `IndexOutOfRange` when the ballot has no such proposal.
pub fn get_proposal(env: &Env, index: u32) -> Result<Proposal, BallotError> {
    validate_proposal_index(index, get_proposal_count(env)?)?;
    read_proposal(env, index)
}

/// Proposal at `index` without re-reading the proposal count.
/// For scans already bounded by `get_proposal_count`.
pub fn read_proposal(env: &Env, index: u32) -> Result<Proposal, BallotError> {
    env.storage()
        .persistent()
        .get(&DataKey::Proposal(index))
        .ok_or(BallotError::IndexOutOfRange)
}

// ── Voters ───────────────────────────────────────────────────────────────────

pub fn save_voter(env: &Env, address: &Address, voter: &Voter) {
    let key = DataKey::Voter(address.clone());
    env.storage().persistent().set(&key, voter);
    env.storage()
        .persistent()
        .extend_ttl(&key, BALLOT_TTL_THRESHOLD, BALLOT_TTL_LEDGERS);
}

/// Voter record for `address`.
///
/// Addresses without a stored record read as `Voter::unregistered()`
/// (weight 0, pending) instead of failing; records are never removed.
pub fn get_voter(env: &Env, address: &Address) -> Voter {
    env.storage()
        .persistent()
        .get(&DataKey::Voter(address.clone()))
        .unwrap_or_else(Voter::unregistered)
}
