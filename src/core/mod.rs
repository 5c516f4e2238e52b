//! Core status types.
//!
//! This module contains the pure part of the workflow:
//! - State inspection via the `State` trait
//! - The `WishListItemStatus` enumeration
//!
//! Nothing in this module mutates anything.

mod state;
mod status;

pub use state::State;
pub use status::WishListItemStatus;
