//! Observable state containers.
//!
//! Stores own their state and publish every mutation synchronously over a
//! `tokio::sync::watch` channel, so subscribers recompute derived view
//! state before the next read observes it.

pub mod cart;
pub mod session;

pub use cart::CartStore;
pub use session::SessionStore;
