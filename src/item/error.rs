//! Errors returned by wish list item operations.

use crate::core::WishListItemStatus;
use crate::item::transition::Operation;
use thiserror::Error;

/// Errors that can occur when transitioning a wish list item.
///
/// A failed operation never changes the item's status.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum WishListError {
    #[error("Cannot accept wish list item with status {status}")]
    InvalidStatusForAccept { status: WishListItemStatus },

    #[error("Cannot reject wish list item with status {status}")]
    InvalidStatusForReject { status: WishListItemStatus },

    #[error("Cannot start realization of wish list item with status {status}")]
    InvalidStatusForStartRealization { status: WishListItemStatus },

    #[error("Cannot finish realization of wish list item with status {status}")]
    InvalidStatusForFinishRealization { status: WishListItemStatus },

    #[error("User does not have permission to perform {operation} on this wish list item")]
    PermissionDenied { operation: Operation },

    #[error("Cannot finish realization of wish list item whose costs are not invoiced")]
    CostsNotInvoiced,
}

impl WishListError {
    /// Build the status error matching `operation`.
    pub fn invalid_status(operation: Operation, status: WishListItemStatus) -> Self {
        match operation {
            Operation::Accept => Self::InvalidStatusForAccept { status },
            Operation::Reject => Self::InvalidStatusForReject { status },
            Operation::StartRealization => Self::InvalidStatusForStartRealization { status },
            Operation::FinishRealization => Self::InvalidStatusForFinishRealization { status },
        }
    }

    /// The operation that failed.
    pub fn operation(&self) -> Operation {
        match self {
            Self::InvalidStatusForAccept { .. } => Operation::Accept,
            Self::InvalidStatusForReject { .. } => Operation::Reject,
            Self::InvalidStatusForStartRealization { .. } => Operation::StartRealization,
            Self::InvalidStatusForFinishRealization { .. } => Operation::FinishRealization,
            Self::PermissionDenied { operation } => *operation,
            Self::CostsNotInvoiced => Operation::FinishRealization,
        }
    }

    /// The status that rejected the operation, for status errors.
    pub fn status(&self) -> Option<WishListItemStatus> {
        match self {
            Self::InvalidStatusForAccept { status }
            | Self::InvalidStatusForReject { status }
            | Self::InvalidStatusForStartRealization { status }
            | Self::InvalidStatusForFinishRealization { status } => Some(*status),
            Self::PermissionDenied { .. } | Self::CostsNotInvoiced => None,
        }
    }
}
