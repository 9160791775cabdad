//! Limits and storage lifetimes for the ballot contract.

// ── Ballot limits ────────────────────────────────────────────────────────────

/// Maximum length of a proposal name in bytes
pub const MAX_NAME_LEN: u32 = 32;

/// Maximum number of proposals a ballot may carry.
/// Bounds the cost of `winning_proposal`, which reads every proposal.
pub const MAX_PROPOSALS: u32 = 256;

/// Maximum number of links followed when resolving a delegation chain
pub const MAX_DELEGATION_HOPS: u32 = 64;

/// Weight granted by the chairperson, and the chairperson's own starting weight
pub const INITIAL_WEIGHT: u64 = 1;

// ── Ledger TTL constants ─────────────────────────────────────────────────────
// At ~5s per ledger: 1 day ≈ 17,280 ledgers.

pub const DAY_IN_LEDGERS: u32 = 17_280;

/// TTL that ballot entries are extended to when touched
pub const BALLOT_TTL_LEDGERS: u32 = 30 * DAY_IN_LEDGERS;

/// Remaining TTL below which an entry gets extended
pub const BALLOT_TTL_THRESHOLD: u32 = BALLOT_TTL_LEDGERS - DAY_IN_LEDGERS;
