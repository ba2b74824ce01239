//! Role-to-username roster consumed by assignment validation.
//!
//! The roster is static configuration in the deployed portal; the engines
//! only ever read it. Task assignment checks the target username against
//! the member set, and presentation layers use the representative and admin
//! sets for their own access decisions.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Portal role a username belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Assigns tasks, verifies submissions, and answers doubts.
    Representative,
    /// Receives tasks, submits work, and raises doubts.
    Member,
    /// Reads aggregate analytics.
    Admin,
}

/// Static mapping from role to the usernames holding it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    roles: BTreeMap<Role, BTreeSet<String>>,
}

impl Roster {
    /// Creates an empty roster.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            roles: BTreeMap::new(),
        }
    }

    /// Adds a username under the given role, returning the roster for
    /// chained construction.
    #[must_use]
    pub fn with_user(mut self, role: Role, username: impl Into<String>) -> Self {
        self.roles.entry(role).or_default().insert(username.into());
        self
    }

    /// Returns the usernames registered under the given role, in
    /// deterministic lexicographic order.
    pub fn usernames(&self, role: Role) -> impl Iterator<Item = &str> {
        self.roles
            .get(&role)
            .into_iter()
            .flat_map(|names| names.iter().map(String::as_str))
    }

    /// Returns whether the username is a registered member.
    #[must_use]
    pub fn is_member(&self, username: &str) -> bool {
        self.has_role(Role::Member, username)
    }

    /// Returns whether the username holds the given role.
    #[must_use]
    pub fn has_role(&self, role: Role, username: &str) -> bool {
        self.roles
            .get(&role)
            .is_some_and(|names| names.contains(username))
    }
}
