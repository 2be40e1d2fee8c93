//! Deterministic decision engine for same-day-expiry credit spreads.
//!
//! Given a chain snapshot and spot price it proposes one candidate
//! spread; given an open position and live readings it decides whether
//! to exit. Everything here is synchronous and side-effect free —
//! fetching data, authenticating with the broker, and deciding *when*
//! to run all live outside this crate (see the traits in `odte-core`).
//!
//! The selection scan and the exit rules are first-match-wins by
//! design — there is no re-ranking for a better credit or a closer
//! delta.

pub mod error;
pub mod expected_move;
pub mod greeks;
pub mod position;
pub mod risk;
pub mod selector;
pub mod types;

pub use error::EngineError;
pub use position::Position;
pub use risk::{should_exit, ExitSignal};
pub use selector::pick_credit_spread;
pub use types::Candidate;
