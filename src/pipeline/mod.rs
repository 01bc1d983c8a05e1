//! Turn pipeline — wire-format normalization and per-request orchestration.

pub mod adapter;
pub mod orchestrator;
pub mod types;

pub use orchestrator::Orchestrator;
pub use types::{TurnOutcome, TurnRequest, WireFormat};
