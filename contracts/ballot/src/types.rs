use soroban_sdk::{contracttype, Address, Bytes};

use crate::constants::INITIAL_WEIGHT;

/// A named option on the ballot. Its position in the proposal list is its id.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    /// Opaque name, at most `MAX_NAME_LEN` bytes
    pub name: Bytes,
    /// Accumulated weight of every vote resolved to this proposal
    pub vote_count: u64,
}

/// One-shot voting latch of a voter.
///
/// A voter leaves `Pending` exactly once, through `vote` or `delegate`,
/// and never returns to it.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum VoteState {
    Pending,
    /// Voted directly for the proposal at this index
    Voted(u32),
    /// Delegated to this address
    Delegated(Address),
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Voter {
    /// 0 means no right to vote. Grows when others delegate to this voter
    /// before it has voted.
    pub weight: u64,
    pub state: VoteState,
}

impl Voter {
    /// Record of an address the ballot has never seen.
    pub fn unregistered() -> Self {
        Voter {
            weight: 0,
            state: VoteState::Pending,
        }
    }

    pub fn enfranchised() -> Self {
        Voter {
            weight: INITIAL_WEIGHT,
            state: VoteState::Pending,
        }
    }

    pub fn has_voted(&self) -> bool {
        !matches!(self.state, VoteState::Pending)
    }

    pub fn delegate(&self) -> Option<Address> {
        match &self.state {
            VoteState::Delegated(to) => Some(to.clone()),
            _ => None,
        }
    }

    pub fn vote(&self) -> Option<u32> {
        match self.state {
            VoteState::Voted(proposal) => Some(proposal),
            _ => None,
        }
    }
}

/// Storage keys
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Instance storage: the chairperson address
    Chairperson,
    /// Instance storage: number of proposals
    ProposalCount,
    /// Persistent storage: proposal by index
    Proposal(u32),
    /// Persistent storage: voter record by address
    Voter(Address),
}
