use soroban_sdk::contracterror;

/// Reasons a ballot call is rejected.
///
/// Any `Err` aborts the invocation and the host discards its storage writes,
/// so a rejected call never leaves partial state behind.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub enum BallotError {
    /// Ballot has not been initialized
    NotInitialized = 1,

    /// `initialize` was already called
    AlreadyInitialized = 2,

    /// Caller is not the chairperson, or holds no voting weight
    Unauthorized = 3,

    /// Voter already voted or delegated
    AlreadyVoted = 4,

    /// Voter already has voting rights
    AlreadyEnfranchised = 5,

    /// Voter tried to delegate to themselves
    SelfDelegation = 6,

    /// Delegation chain leads back to the caller
    DelegationCycle = 7,

    /// Delegation chain exceeds `MAX_DELEGATION_HOPS`
    DelegationChainTooLong = 8,

    /// Proposal index does not exist
    IndexOutOfRange = 9,

    /// Ballot created without proposals
    NoProposals = 10,

    /// Ballot created with more than `MAX_PROPOSALS` proposals
    TooManyProposals = 11,

    /// Proposal name longer than `MAX_NAME_LEN` bytes
    NameTooLong = 12,

    /// Weight or vote count arithmetic overflowed
    Overflow = 13,
}
