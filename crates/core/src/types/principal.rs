//! The authenticated actor attempting to view a gated route.

use serde::{Deserialize, Serialize};

use super::id::PrincipalId;
use super::status::Role;

/// Session-stored identity written by the identity collaborator.
///
/// The dashboard never issues or mutates principals; it only evaluates
/// their roles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// Identifier assigned by the identity provider.
    pub id: PrincipalId,
    /// Display name.
    pub name: String,
    /// Zero or more roles.
    #[serde(default)]
    pub roles: Vec<Role>,
}

impl Principal {
    /// Create a principal with the given roles.
    #[must_use]
    pub fn new(id: impl Into<PrincipalId>, name: impl Into<String>, roles: Vec<Role>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            roles,
        }
    }

    /// Whether the principal holds `role`.
    #[must_use]
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    /// Whether the principal holds at least one of `required`.
    ///
    /// An empty `required` set is never satisfied.
    #[must_use]
    pub fn has_any_role(&self, required: &[Role]) -> bool {
        required.iter().any(|role| self.has_role(*role))
    }
}
