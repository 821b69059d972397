//! Role-based access decision for gated views.
//!
//! [`evaluate`] is a pure function: it performs no I/O and is called once per
//! request. The axum extractors in [`super::auth`] feed it the session
//! principal.

use backoffice_core::{Principal, Role};

/// Result of evaluating a role requirement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardOutcome {
    /// The principal holds at least one required role.
    Allowed,
    /// Access denied; send the client to the login entry point.
    Redirected(LoginRedirect),
}

impl GuardOutcome {
    /// Whether access was granted.
    #[must_use]
    pub const fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed)
    }
}

/// Redirect to the authentication entry point, remembering where the client
/// was headed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginRedirect {
    /// Authentication entry point.
    pub login_path: String,
    /// Originally requested path and query.
    pub return_to: String,
}

impl LoginRedirect {
    /// Redirect target: `{login_path}?next={return_to}` with `return_to`
    /// percent-encoded.
    #[must_use]
    pub fn location(&self) -> String {
        format!(
            "{}?next={}",
            self.login_path,
            urlencoding::encode(&self.return_to)
        )
    }
}

/// Decide whether `principal` may view `requested`.
///
/// Allowed iff the principal holds at least one role in `required`. A missing
/// principal, disjoint roles, or an empty requirement all redirect.
#[must_use]
pub fn evaluate(
    principal: Option<&Principal>,
    required: &[Role],
    requested: &str,
    login_path: &str,
) -> GuardOutcome {
    match principal {
        Some(principal) if principal.has_any_role(required) => GuardOutcome::Allowed,
        _ => GuardOutcome::Redirected(LoginRedirect {
            login_path: login_path.to_string(),
            return_to: requested.to_string(),
        }),
    }
}
