//! Honeytrap — conversational scam honeypot.
//!
//! Scores inbound messages for scam likelihood, mines payment handles,
//! bank details, phishing links and phone numbers out of the conversation,
//! keeps the scammer talking with a confused-victim persona, and escalates
//! confirmed sessions to an external reporting endpoint.

pub mod config;
pub mod detection;
pub mod error;
pub mod persona;
pub mod pipeline;
pub mod report;
pub mod server;
pub mod session;
