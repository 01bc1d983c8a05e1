//! Per-conversation session state and its process-wide store.

pub mod model;
pub mod store;

pub use model::Session;
pub use store::SessionStore;
