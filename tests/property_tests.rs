//! Property-based tests for the wish list workflow.
//!
//! These tests use proptest to verify the transition rules hold across
//! arbitrary statuses, costs and role combinations.

use proptest::prelude::*;
use wishlist::{Cost, Operation, State, User, WishListError, WishListItem, WishListItemStatus};

/// Roles held uniformly over every owner.
#[derive(Clone, Copy, Debug)]
struct Roles {
    leader: bool,
    director: bool,
    supervisor: bool,
}

impl User for Roles {
    fn is_leader_of(&self, _owner: &Self) -> bool {
        self.leader
    }

    fn is_director_of(&self, _owner: &Self) -> bool {
        self.director
    }

    fn is_supervisor(&self) -> bool {
        self.supervisor
    }
}

const NOBODY: Roles = Roles {
    leader: false,
    director: false,
    supervisor: false,
};

prop_compose! {
    fn arbitrary_status()(index in 0..WishListItemStatus::ALL.len()) -> WishListItemStatus {
        WishListItemStatus::ALL[index]
    }
}

prop_compose! {
    fn arbitrary_operation()(index in 0..Operation::ALL.len()) -> Operation {
        Operation::ALL[index]
    }
}

prop_compose! {
    fn arbitrary_roles()(
        leader in any::<bool>(),
        director in any::<bool>(),
        supervisor in any::<bool>()
    ) -> Roles {
        Roles { leader, director, supervisor }
    }
}

prop_compose! {
    fn arbitrary_cost()(minor in -1_000_000i64..2_000_000) -> Cost {
        Cost::from_minor_units(minor)
    }
}

prop_compose! {
    fn any_cost()(minor in any::<i64>()) -> Cost {
        Cost::from_minor_units(minor)
    }
}

proptest! {
    #[test]
    fn decisions_fail_outside_request_statuses(
        status in arbitrary_status(),
        roles in arbitrary_roles(),
        cost in arbitrary_cost()
    ) {
        prop_assume!(!status.is_pending_decision());

        let mut item = WishListItem::new(status, NOBODY, cost);
        prop_assert_eq!(
            item.accept_by(&roles),
            Err(WishListError::InvalidStatusForAccept { status })
        );
        prop_assert_eq!(
            item.reject_by(&roles),
            Err(WishListError::InvalidStatusForReject { status })
        );
        prop_assert_eq!(item.status(), status);
    }

    #[test]
    fn failed_operations_leave_status_unchanged(
        status in arbitrary_status(),
        operation in arbitrary_operation(),
        roles in arbitrary_roles(),
        cost in arbitrary_cost(),
        invoiced in any::<bool>()
    ) {
        let mut item = WishListItem::with_invoicing(status, NOBODY, cost, invoiced);

        if item.perform(operation, &roles).is_err() {
            prop_assert_eq!(item.status(), status);
        }
    }

    #[test]
    fn terminal_statuses_reject_every_operation(
        status in arbitrary_status(),
        operation in arbitrary_operation(),
        roles in arbitrary_roles()
    ) {
        prop_assume!(status.is_final());

        let mut item = WishListItem::new(status, NOBODY, Cost::ZERO);
        prop_assert_eq!(
            item.perform(operation, &roles),
            Err(WishListError::invalid_status(operation, status))
        );
    }

    #[test]
    fn leader_acceptance_escalates_exactly_at_threshold(cost in arbitrary_cost()) {
        let leader = Roles { leader: true, ..NOBODY };
        let mut item = WishListItem::new(WishListItemStatus::Requested, NOBODY, cost);

        let expected = if cost >= Cost::from_major_units(5000) {
            WishListItemStatus::RequestedToDirector
        } else {
            WishListItemStatus::Accepted
        };
        prop_assert_eq!(item.accept_by(&leader), Ok(expected));
    }

    #[test]
    fn users_without_roles_never_transition(
        status in arbitrary_status(),
        operation in arbitrary_operation(),
        cost in arbitrary_cost()
    ) {
        let mut item = WishListItem::new(status, NOBODY, cost);
        prop_assert!(item.perform(operation, &NOBODY).is_err());
    }

    #[test]
    fn allowed_operations_predict_status_errors(
        status in arbitrary_status(),
        operation in arbitrary_operation(),
        roles in arbitrary_roles()
    ) {
        let mut item = WishListItem::new(status, NOBODY, Cost::ZERO);
        let allowed = item.allowed_operations().contains(&operation);

        let result = item.perform(operation, &roles);
        let status_error = matches!(&result, Err(e) if e.status().is_some());
        prop_assert_eq!(allowed, !status_error);
    }

    #[test]
    fn cost_display_parses_back(cost in any_cost()) {
        let parsed: Cost = cost.to_string().parse().unwrap();
        prop_assert_eq!(parsed, cost);
    }
}
