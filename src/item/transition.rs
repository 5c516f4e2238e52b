//! Transition table of the wish list workflow.

use crate::core::WishListItemStatus;
use crate::user::User;
use serde::{Deserialize, Serialize};
use std::fmt;

use WishListItemStatus::*;

/// Operations a user can perform on a wish list item.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Operation {
    Accept,
    Reject,
    StartRealization,
    FinishRealization,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Self::Accept,
        Self::Reject,
        Self::StartRealization,
        Self::FinishRealization,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Accept => "Accept",
            Self::Reject => "Reject",
            Self::StartRealization => "StartRealization",
            Self::FinishRealization => "FinishRealization",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Role the acting user must hold for a transition.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Authority {
    /// Leader of the item's owner.
    Leader,
    /// Director of the item's owner.
    Director,
    /// Any supervisor, regardless of ownership.
    Supervisor,
}

impl Authority {
    /// Check whether `user` holds this authority over an item owned by `owner` (pure).
    pub fn permits<U: User>(&self, user: &U, owner: &U) -> bool {
        match self {
            Self::Leader => user.is_leader_of(owner),
            Self::Director => user.is_director_of(owner),
            Self::Supervisor => user.is_supervisor(),
        }
    }
}

/// Where a transition lands.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Target {
    Fixed(WishListItemStatus),
    /// Depends on whether the item cost reaches the director threshold.
    CostGated {
        below: WishListItemStatus,
        at_or_above: WishListItemStatus,
    },
}

/// One row of the workflow: `operation` from `from`, performed with
/// `authority`, moves the item to `to`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Transition {
    pub from: WishListItemStatus,
    pub operation: Operation,
    pub authority: Authority,
    pub to: Target,
    /// Item costs must be invoiced, checked after the authority.
    pub requires_invoice: bool,
}

const fn row(
    from: WishListItemStatus,
    operation: Operation,
    authority: Authority,
    to: Target,
) -> Transition {
    Transition {
        from,
        operation,
        authority,
        to,
        requires_invoice: false,
    }
}

/// Every legal transition. Pairs missing here are invalid for their status.
pub static TRANSITIONS: [Transition; 6] = [
    row(
        Requested,
        Operation::Accept,
        Authority::Leader,
        Target::CostGated {
            below: Accepted,
            at_or_above: RequestedToDirector,
        },
    ),
    row(
        RequestedToDirector,
        Operation::Accept,
        Authority::Director,
        Target::Fixed(Accepted),
    ),
    row(
        Requested,
        Operation::Reject,
        Authority::Leader,
        Target::Fixed(Rejected),
    ),
    row(
        RequestedToDirector,
        Operation::Reject,
        Authority::Director,
        Target::Fixed(Rejected),
    ),
    row(
        Accepted,
        Operation::StartRealization,
        Authority::Supervisor,
        Target::Fixed(InRealization),
    ),
    Transition {
        from: InRealization,
        operation: Operation::FinishRealization,
        authority: Authority::Supervisor,
        to: Target::Fixed(Realized),
        requires_invoice: true,
    },
];

/// Find the transition for `operation` out of `from`, if it is legal.
pub fn find(from: WishListItemStatus, operation: Operation) -> Option<&'static Transition> {
    TRANSITIONS
        .iter()
        .find(|t| t.from == from && t.operation == operation)
}

/// Statuses from which `operation` may be attempted.
pub fn sources(operation: Operation) -> impl Iterator<Item = WishListItemStatus> {
    TRANSITIONS
        .iter()
        .filter(move |t| t.operation == operation)
        .map(|t| t.from)
}
