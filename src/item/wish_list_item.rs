//! The wish list item entity.

use crate::core::{State, WishListItemStatus};
use crate::cost::Cost;
use crate::item::error::WishListError;
use crate::item::transition::{self, Operation, Target};
use crate::policy::ApprovalPolicy;
use crate::user::User;
use tracing::debug;

/// A wish list item moving through the approval workflow.
///
/// The status only changes through the four `*_by` operations. Each of
/// them validates status, then the acting user's authority, then any
/// extra precondition, and mutates only when everything passed.
///
/// # Example
///
/// ```rust
/// use wishlist::org::OrgUser;
/// use wishlist::{Cost, WishListItem, WishListItemStatus};
///
/// let owner = OrgUser::new();
/// let leader = OrgUser::new().leading(&owner);
/// let supervisor = OrgUser::new().supervisor();
///
/// let mut item = WishListItem::new(
///     WishListItemStatus::Requested,
///     owner,
///     Cost::from_major_units(100),
/// );
///
/// item.accept_by(&leader).unwrap();
/// item.start_realization_by(&supervisor).unwrap();
/// item.finish_realization_by(&supervisor).unwrap();
///
/// assert_eq!(item.status(), WishListItemStatus::Realized);
/// ```
#[derive(Clone, Debug)]
pub struct WishListItem<U: User> {
    status: WishListItemStatus,
    owner: U,
    item_cost: Cost,
    are_costs_invoiced: bool,
    policy: ApprovalPolicy,
}

impl<U: User> WishListItem<U> {
    /// Create an item whose costs are invoiced.
    ///
    /// Any status is accepted as the initial one.
    pub fn new(status: WishListItemStatus, owner: U, item_cost: Cost) -> Self {
        Self::with_invoicing(status, owner, item_cost, true)
    }

    pub fn with_invoicing(
        status: WishListItemStatus,
        owner: U,
        item_cost: Cost,
        are_costs_invoiced: bool,
    ) -> Self {
        Self {
            status,
            owner,
            item_cost,
            are_costs_invoiced,
            policy: ApprovalPolicy::default(),
        }
    }

    /// Replace the approval policy.
    pub fn with_policy(mut self, policy: ApprovalPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn status(&self) -> WishListItemStatus {
        self.status
    }

    pub fn owner(&self) -> &U {
        &self.owner
    }

    pub fn item_cost(&self) -> Cost {
        self.item_cost
    }

    pub fn are_costs_invoiced(&self) -> bool {
        self.are_costs_invoiced
    }

    pub fn policy(&self) -> &ApprovalPolicy {
        &self.policy
    }

    /// Whether the item reached a terminal status.
    pub fn is_finished(&self) -> bool {
        self.status.is_final()
    }

    /// Accept the item on behalf of `user`.
    ///
    /// A leader's acceptance of an item at or above the director threshold
    /// escalates it to `RequestedToDirector` instead of accepting it.
    pub fn accept_by(&mut self, user: &U) -> Result<WishListItemStatus, WishListError> {
        self.perform(Operation::Accept, user)
    }

    /// Reject the item on behalf of `user`.
    pub fn reject_by(&mut self, user: &U) -> Result<WishListItemStatus, WishListError> {
        self.perform(Operation::Reject, user)
    }

    pub fn start_realization_by(
        &mut self,
        user: &U,
    ) -> Result<WishListItemStatus, WishListError> {
        self.perform(Operation::StartRealization, user)
    }

    /// Finish realization. Costs must be invoiced.
    pub fn finish_realization_by(
        &mut self,
        user: &U,
    ) -> Result<WishListItemStatus, WishListError> {
        self.perform(Operation::FinishRealization, user)
    }

    /// Run `operation` on behalf of `user`, returning the new status.
    pub fn perform(
        &mut self,
        operation: Operation,
        user: &U,
    ) -> Result<WishListItemStatus, WishListError> {
        let next = self.evaluate(operation, user)?;
        let from = std::mem::replace(&mut self.status, next);

        debug!(
            operation = operation.name(),
            from = from.name(),
            to = next.name(),
            "wish list item transitioned"
        );

        if next == WishListItemStatus::RequestedToDirector {
            debug!(
                cost = %self.item_cost,
                threshold = %self.policy.director_threshold,
                "wish list item escalated to director"
            );
        }

        Ok(next)
    }

    /// Operations whose status precondition holds right now.
    ///
    /// Authority and invoicing are not evaluated.
    pub fn allowed_operations(&self) -> Vec<Operation> {
        Operation::ALL
            .into_iter()
            .filter(|op| transition::find(self.status, *op).is_some())
            .collect()
    }

    // Pure: decides the target status without touching `self.status`.
    fn evaluate(
        &self,
        operation: Operation,
        user: &U,
    ) -> Result<WishListItemStatus, WishListError> {
        let transition = transition::find(self.status, operation)
            .ok_or_else(|| WishListError::invalid_status(operation, self.status))?;

        if !transition.authority.permits(user, &self.owner) {
            return Err(WishListError::PermissionDenied { operation });
        }

        if transition.requires_invoice && !self.are_costs_invoiced {
            return Err(WishListError::CostsNotInvoiced);
        }

        let next = match transition.to {
            Target::Fixed(status) => status,
            Target::CostGated { below, at_or_above } => {
                if self.policy.requires_director(self.item_cost) {
                    at_or_above
                } else {
                    below
                }
            }
        };

        Ok(next)
    }
}
