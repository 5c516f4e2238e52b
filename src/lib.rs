//! Wishlist: a guarded approval workflow for wish list items
//!
//! A wish list item moves through
//! `Requested → (RequestedToDirector) → Accepted/Rejected → InRealization → Realized`.
//! Each step is performed "by" a user whose relationship to the item's owner
//! decides whether the step is allowed.
//!
//! # Core Concepts
//!
//! - **Status**: `WishListItemStatus`, inspected through the `State` trait
//! - **User**: a trait answering leader / director / supervisor questions
//! - **Policy**: the cost threshold above which a director must also accept
//! - **Item**: `WishListItem`, the only mutable entity
//!
//! # Example
//!
//! ```rust
//! use wishlist::org::OrgUser;
//! use wishlist::{Cost, WishListError, WishListItem, WishListItemStatus};
//!
//! let owner = OrgUser::new();
//! let leader = OrgUser::new().leading(&owner);
//! let director = OrgUser::new().directing(&owner);
//!
//! let mut item = WishListItem::new(
//!     WishListItemStatus::Requested,
//!     owner,
//!     "7500".parse::<Cost>().unwrap(),
//! );
//!
//! // Expensive items need a director after the leader.
//! assert_eq!(item.accept_by(&leader), Ok(WishListItemStatus::RequestedToDirector));
//! assert!(matches!(
//!     item.accept_by(&leader),
//!     Err(WishListError::PermissionDenied { .. })
//! ));
//! assert_eq!(item.accept_by(&director), Ok(WishListItemStatus::Accepted));
//! ```

pub mod core;
pub mod cost;
pub mod item;
pub mod org;
pub mod policy;
pub mod user;

// Re-export commonly used types
pub use crate::core::{State, WishListItemStatus};
pub use cost::{Cost, CostParseError};
pub use item::{Operation, WishListError, WishListItem};
pub use policy::{ApprovalPolicy, PolicyError};
pub use user::User;
