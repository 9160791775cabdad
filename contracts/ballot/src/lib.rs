#![no_std]
//! # Ballot
//!
//! Weighted-delegation voting contract. A chairperson enfranchises voters;
//! each voter either votes for one of a fixed list of proposals or delegates
//! its weight to another voter. Delegated weight follows the delegate's own
//! chain and lands on whoever finally votes.
//!
//! ## Modules
//!
//! - `engine` - Contract entry points
//! - `delegation` - Delegation chain resolution
//! - `tally` - Winning proposal computation
//! - `storage` - Typed contract storage access
//! - `types` - Proposal and voter records
//! - `errors` - Contract error codes
//! - `events` - Published contract events
//! - `constants` - Limits and TTLs
//! - `validation` - Input validation helpers

mod constants;
mod delegation;
mod engine;
mod errors;
mod events;
mod storage;
mod tally;
mod types;
mod validation;

pub use constants::{MAX_DELEGATION_HOPS, MAX_NAME_LEN, MAX_PROPOSALS};
pub use engine::{BallotEngine, BallotEngineClient};
pub use errors::BallotError;
pub use types::{Proposal, VoteState, Voter};
