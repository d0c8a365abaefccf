//! Domain models for the storefront state layer.

pub mod order;
pub mod user;

pub use order::{LineItem, Order};
pub use user::User;
