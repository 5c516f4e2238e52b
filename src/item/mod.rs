//! The wish list item and its approval workflow.
//!
//! - `transition`: the static table of legal transitions and their authority
//! - `wish_list_item`: the entity that applies the table
//! - `error`: failures returned by the four operations
//!
//! Every operation checks, in order: the current status, the acting user's
//! authority, then operation-specific preconditions. Nothing is mutated
//! until all checks pass.

pub mod error;
pub mod transition;
mod wish_list_item;

pub use error::WishListError;
pub use transition::{Authority, Operation, Target, Transition};
pub use wish_list_item::WishListItem;
