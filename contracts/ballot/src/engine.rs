use soroban_sdk::{contract, contractimpl, Address, Bytes, Env, Vec};

use crate::{
    delegation,
    errors::BallotError,
    events::{Delegated, Initialized, RightGranted, Voted},
    storage, tally,
    types::{Proposal, VoteState, Voter},
    validation::{safe_add, validate_proposal_names},
};

#[contract]
pub struct BallotEngine;

fn require_initialized(env: &Env) -> Result<(), BallotError> {
    if !storage::is_initialized(env) {
        return Err(BallotError::NotInitialized);
    }
    Ok(())
}

fn require_chairperson(env: &Env, caller: &Address) -> Result<Address, BallotError> {
    let chairperson = storage::get_chairperson(env)?;
    if *caller != chairperson {
        return Err(BallotError::Unauthorized);
    }
    Ok(chairperson)
}

#[contractimpl]
impl BallotEngine {
    // ── Initialization ───────────────────────────────────────────────────────

    /// Create the ballot with `chairperson` as its deployer.
    /// Can only be called once.
    ///
    /// # Arguments
    /// * `chairperson`    – Address allowed to grant voting rights; starts with weight 1
    /// * `proposal_names` – Ordered, non-empty list of names of at most 32 bytes each
    pub fn initialize(
        env: Env,
        chairperson: Address,
        proposal_names: Vec<Bytes>,
    ) -> Result<(), BallotError> {
        if storage::is_initialized(&env) {
            return Err(BallotError::AlreadyInitialized);
        }
        chairperson.require_auth();
        validate_proposal_names(&proposal_names)?;

        storage::set_chairperson(&env, &chairperson);
        storage::save_voter(&env, &chairperson, &Voter::enfranchised());

        let mut index: u32 = 0;
        for name in proposal_names.iter() {
            storage::save_proposal(&env, index, &Proposal { name, vote_count: 0 });
            index += 1;
        }
        storage::set_proposal_count(&env, index);
        storage::bump_instance(&env);

        Initialized {
            chairperson,
            proposal_count: index,
        }
        .publish(&env);
        Ok(())
    }

    // ── Voting rights ────────────────────────────────────────────────────────

    /// Give `voter` the right to vote. Only the chairperson may call this.
    pub fn give_right_to_vote(
        env: Env,
        caller: Address,
        voter: Address,
    ) -> Result<(), BallotError> {
        caller.require_auth();
        let chairperson = require_chairperson(&env, &caller)?;

        let record = storage::get_voter(&env, &voter);
        if record.has_voted() {
            return Err(BallotError::AlreadyVoted);
        }
        if record.weight != 0 {
            return Err(BallotError::AlreadyEnfranchised);
        }

        let record = Voter::enfranchised();
        storage::save_voter(&env, &voter, &record);
        storage::bump_instance(&env);

        RightGranted {
            voter,
            chairperson,
            weight: record.weight,
        }
        .publish(&env);
        Ok(())
    }

    // ── Delegation ───────────────────────────────────────────────────────────

    /// Delegate the caller's vote to `to`.
    ///
    /// The weight lands on the end of `to`'s delegation chain: on that
    /// voter's proposal if it already voted, on its weight otherwise.
    ///
    /// At most `MAX_DELEGATION_HOPS` links past `to` are followed. A longer
    /// chain is rejected with `DelegationChainTooLong` even when it has no
    /// cycle; delegate closer to the end of the chain instead.
    pub fn delegate(env: Env, caller: Address, to: Address) -> Result<(), BallotError> {
        caller.require_auth();
        require_initialized(&env)?;

        let mut sender = storage::get_voter(&env, &caller);
        if sender.weight == 0 {
            return Err(BallotError::Unauthorized);
        }
        if sender.has_voted() {
            return Err(BallotError::AlreadyVoted);
        }
        if to == caller {
            return Err(BallotError::SelfDelegation);
        }

        let (resolved, mut delegate) = delegation::resolve(&env, &caller, &to)?;

        match delegate.vote() {
            Some(index) => {
                let mut proposal = storage::get_proposal(&env, index)?;
                proposal.vote_count = safe_add(proposal.vote_count, sender.weight)?;
                storage::save_proposal(&env, index, &proposal);
            }
            None => {
                delegate.weight = safe_add(delegate.weight, sender.weight)?;
                storage::save_voter(&env, &resolved, &delegate);
            }
        }

        sender.state = VoteState::Delegated(to.clone());
        storage::save_voter(&env, &caller, &sender);
        storage::bump_instance(&env);

        Delegated {
            caller,
            to,
            resolved,
            weight: sender.weight,
        }
        .publish(&env);
        Ok(())
    }

    // ── Voting ───────────────────────────────────────────────────────────────

    /// Cast the caller's accumulated weight for the proposal at `proposal`.
    pub fn vote(env: Env, caller: Address, proposal: u32) -> Result<(), BallotError> {
        caller.require_auth();
        require_initialized(&env)?;

        let mut sender = storage::get_voter(&env, &caller);
        if sender.weight == 0 {
            return Err(BallotError::Unauthorized);
        }
        if sender.has_voted() {
            return Err(BallotError::AlreadyVoted);
        }
        let mut chosen = storage::get_proposal(&env, proposal)?;
        chosen.vote_count = safe_add(chosen.vote_count, sender.weight)?;

        sender.state = VoteState::Voted(proposal);
        storage::save_voter(&env, &caller, &sender);
        storage::save_proposal(&env, proposal, &chosen);
        storage::bump_instance(&env);

        Voted {
            caller,
            proposal,
            weight: sender.weight,
        }
        .publish(&env);
        Ok(())
    }

    // ── Results ──────────────────────────────────────────────────────────────

    /// Index of the proposal with the most votes; ties go to the lowest index.
    pub fn winning_proposal(env: Env) -> Result<u32, BallotError> {
        tally::winning_proposal(&env)
    }

    /// Name of the winning proposal.
    pub fn winner_name(env: Env) -> Result<Bytes, BallotError> {
        let winner = tally::winning_proposal(&env)?;
        Ok(storage::get_proposal(&env, winner)?.name)
    }

    // ── Query Functions ──────────────────────────────────────────────────────

    pub fn chairperson(env: Env) -> Result<Address, BallotError> {
        storage::get_chairperson(&env)
    }

    pub fn proposal_count(env: Env) -> Result<u32, BallotError> {
        storage::get_proposal_count(&env)
    }

    pub fn get_proposal(env: Env, index: u32) -> Result<Proposal, BallotError> {
        storage::get_proposal(&env, index)
    }

    /// All proposals in index order.
    pub fn proposals(env: Env) -> Result<Vec<Proposal>, BallotError> {
        let count = storage::get_proposal_count(&env)?;
        let mut proposals = Vec::new(&env);
        for index in 0..count {
            proposals.push_back(storage::read_proposal(&env, index)?);
        }
        Ok(proposals)
    }

    pub fn vote_counts(env: Env) -> Result<Vec<u64>, BallotError> {
        tally::vote_counts(&env)
    }

    /// Voter record for `voter`. Unknown addresses read as weight 0, pending.
    pub fn get_voter(env: Env, voter: Address) -> Result<Voter, BallotError> {
        require_initialized(&env)?;
        Ok(storage::get_voter(&env, &voter))
    }
}
