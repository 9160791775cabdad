use soroban_sdk::{contractevent, Address};

// Every successful state change is published for off-chain indexers.

/// Ballot created. Topics: `("init", chairperson)`, data: proposal count.
#[contractevent(topics = ["init"], data_format = "single-value")]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Initialized {
    #[topic]
    pub chairperson: Address,
    pub proposal_count: u32,
}

/// Voting right granted. Topics: `("enfranch", voter)`, data: `[chairperson, weight]`.
#[contractevent(topics = ["enfranch"], data_format = "vec")]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RightGranted {
    #[topic]
    pub voter: Address,
    pub chairperson: Address,
    pub weight: u64,
}

/// Topics: `("delegate", caller)`, data: `[to, resolved, weight]`.
#[contractevent(topics = ["delegate"], data_format = "vec")]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Delegated {
    #[topic]
    pub caller: Address,
    pub to: Address,
    /// End of `to`'s chain, where the weight actually landed
    pub resolved: Address,
    pub weight: u64,
}

/// Topics: `("vote", caller)`, data: `[proposal, weight]`.
#[contractevent(topics = ["vote"], data_format = "vec")]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Voted {
    #[topic]
    pub caller: Address,
    pub proposal: u32,
    pub weight: u64,
}
