//! Layout chrome projections.
//!
//! Pure functions from store state to view-ready structures, plus the
//! header's logout flow - the one stateful interaction in the layer.

pub mod header;
pub mod sidebar;

pub use header::{CartSection, Header, HeaderContent, HeaderView, LogoutError, UserSection};
pub use sidebar::{SidebarLink, sidebar_links};
