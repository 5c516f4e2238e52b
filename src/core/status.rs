//! Status of a wish list item.

use super::state::State;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Every status a wish list item can be in.
///
/// `Rejected` and `Realized` are terminal.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum WishListItemStatus {
    Requested,
    /// Accepted by a leader but over the cost threshold; waits for a director.
    RequestedToDirector,
    Accepted,
    Rejected,
    InRealization,
    Realized,
}

impl WishListItemStatus {
    /// All statuses, in workflow order.
    pub const ALL: [WishListItemStatus; 6] = [
        Self::Requested,
        Self::RequestedToDirector,
        Self::Accepted,
        Self::Rejected,
        Self::InRealization,
        Self::Realized,
    ];

    /// Whether the item is still waiting for an approval decision.
    pub fn is_pending_decision(&self) -> bool {
        matches!(self, Self::Requested | Self::RequestedToDirector)
    }
}

impl State for WishListItemStatus {
    fn name(&self) -> &'static str {
        match self {
            Self::Requested => "Requested",
            Self::RequestedToDirector => "RequestedToDirector",
            Self::Accepted => "Accepted",
            Self::Rejected => "Rejected",
            Self::InRealization => "InRealization",
            Self::Realized => "Realized",
        }
    }

    fn is_final(&self) -> bool {
        matches!(self, Self::Rejected | Self::Realized)
    }
}

impl fmt::Display for WishListItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
