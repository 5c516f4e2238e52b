//! In-memory org chart member.

use crate::user::User;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

/// A user whose relationships are stored as sets of user ids.
///
/// # Example
///
/// ```rust
/// use wishlist::org::OrgUser;
/// use wishlist::User;
///
/// let employee = OrgUser::new();
/// let leader = OrgUser::new().leading(&employee);
///
/// assert!(leader.is_leader_of(&employee));
/// assert!(!employee.is_leader_of(&leader));
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OrgUser {
    id: Uuid,
    supervisor: bool,
    leads: HashSet<Uuid>,
    directs: HashSet<Uuid>,
}

impl OrgUser {
    /// Create a user with a fresh random id and no relationships.
    pub fn new() -> Self {
        Self::with_id(Uuid::new_v4())
    }

    /// Create a user with a known id.
    pub fn with_id(id: Uuid) -> Self {
        Self {
            id,
            supervisor: false,
            leads: HashSet::new(),
            directs: HashSet::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Grant the supervisor role.
    pub fn supervisor(mut self) -> Self {
        self.supervisor = true;
        self
    }

    /// Make this user the leader of `other`.
    pub fn leading(mut self, other: &OrgUser) -> Self {
        self.leads.insert(other.id);
        self
    }

    /// Make this user the director of `other`.
    pub fn directing(mut self, other: &OrgUser) -> Self {
        self.directs.insert(other.id);
        self
    }
}

impl Default for OrgUser {
    fn default() -> Self {
        Self::new()
    }
}

impl User for OrgUser {
    fn is_leader_of(&self, owner: &Self) -> bool {
        self.leads.contains(&owner.id)
    }

    fn is_director_of(&self, owner: &Self) -> bool {
        self.directs.contains(&owner.id)
    }

    fn is_supervisor(&self) -> bool {
        self.supervisor
    }
}
