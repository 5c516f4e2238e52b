//! The acting-user capability surface.

use std::sync::Arc;

/// Role queries the workflow asks about the acting user.
///
/// The item never inspects users beyond these three questions, so any
/// org-chart representation can sit behind this trait.
pub trait User {
    /// Whether this user leads `owner` (first approval tier).
    fn is_leader_of(&self, owner: &Self) -> bool;

    /// Whether this user directs `owner` (escalated approval tier).
    fn is_director_of(&self, owner: &Self) -> bool;

    /// Whether this user may start and finish realization.
    fn is_supervisor(&self) -> bool;
}

impl<U: User> User for &U {
    fn is_leader_of(&self, owner: &Self) -> bool {
        (**self).is_leader_of(&**owner)
    }

    fn is_director_of(&self, owner: &Self) -> bool {
        (**self).is_director_of(&**owner)
    }

    fn is_supervisor(&self) -> bool {
        (**self).is_supervisor()
    }
}

impl<U: User> User for Arc<U> {
    fn is_leader_of(&self, owner: &Self) -> bool {
        (**self).is_leader_of(&**owner)
    }

    fn is_director_of(&self, owner: &Self) -> bool {
        (**self).is_director_of(&**owner)
    }

    fn is_supervisor(&self) -> bool {
        (**self).is_supervisor()
    }
}
