//! Role-gated extractors for route handlers.
//!
//! The identity collaborator writes the [`Principal`] into the session; these
//! extractors only read it and run the guard.

use std::marker::PhantomData;

use axum::{
    extract::{FromRef, FromRequestParts, OriginalUri},
    http::request::Parts,
    response::{IntoResponse, Redirect, Response},
};
use backoffice_core::{Principal, Role};
use tower_sessions::Session;

use super::guard::{GuardOutcome, LoginRedirect, evaluate};
use crate::error::set_sentry_user;
use crate::models::session_keys;
use crate::state::AppState;

/// A set of roles, any one of which grants access.
pub trait RoleRequirement: Send + Sync + 'static {
    /// Roles accepted by this requirement.
    const ROLES: &'static [Role];
}

/// Anyone with a dashboard role; used for read views.
#[derive(Debug, Clone, Copy)]
pub struct Staff;

impl RoleRequirement for Staff {
    const ROLES: &'static [Role] = &[Role::SuperAdmin, Role::Admin, Role::Viewer];
}

/// Roles allowed to change backend data.
#[derive(Debug, Clone, Copy)]
pub struct Editors;

impl RoleRequirement for Editors {
    const ROLES: &'static [Role] = &[Role::SuperAdmin, Role::Admin];
}

/// Extractor that admits only principals satisfying `R`.
///
/// Rejects with a `303 See Other` to the login path, carrying the requested
/// location, so the handler never runs for a denied request.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(auth: RequireRole<Editors>) -> impl IntoResponse {
///     format!("Hello, {}!", auth.principal().name)
/// }
/// ```
pub struct RequireRole<R> {
    principal: Principal,
    _requirement: PhantomData<fn() -> R>,
}

impl<R> RequireRole<R> {
    /// The admitted principal.
    #[must_use]
    pub const fn principal(&self) -> &Principal {
        &self.principal
    }
}

/// Rejection returned when the guard redirects.
#[derive(Debug)]
pub struct LoginRequired(pub LoginRedirect);

impl IntoResponse for LoginRequired {
    fn into_response(self) -> Response {
        Redirect::to(&self.0.location()).into_response()
    }
}

impl<S, R> FromRequestParts<S> for RequireRole<R>
where
    S: Send + Sync,
    AppState: FromRef<S>,
    R: RoleRequirement,
{
    type Rejection = LoginRequired;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let state = AppState::from_ref(state);
        let principal = session_principal(parts).await;
        let requested = requested_location(parts);
        let login_path = &state.config().login_path;

        match (
            evaluate(principal.as_ref(), R::ROLES, &requested, login_path),
            principal,
        ) {
            (GuardOutcome::Allowed, Some(principal)) => {
                set_sentry_user(&principal);
                Ok(Self {
                    principal,
                    _requirement: PhantomData,
                })
            }
            (GuardOutcome::Redirected(redirect), _) => {
                tracing::debug!(
                    requested = %redirect.return_to,
                    "Guard redirected request to login"
                );
                Err(LoginRequired(redirect))
            }
            // evaluate never admits a missing principal
            (GuardOutcome::Allowed, None) => Err(LoginRequired(LoginRedirect {
                login_path: login_path.clone(),
                return_to: requested,
            })),
        }
    }
}

/// Read the principal from the session, if any.
async fn session_principal(parts: &Parts) -> Option<Principal> {
    let session = parts.extensions.get::<Session>()?;
    match session.get::<Principal>(session_keys::PRINCIPAL).await {
        Ok(principal) => principal,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to read principal from session");
            None
        }
    }
}

/// Path and query the client asked for, before any router nesting.
fn requested_location(parts: &Parts) -> String {
    let uri = parts
        .extensions
        .get::<OriginalUri>()
        .map_or(&parts.uri, |original| &original.0);

    uri.path_and_query()
        .map_or_else(|| uri.path().to_string(), ToString::to_string)
}

/// Store the principal in the session.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_principal(
    session: &Session,
    principal: &Principal,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::PRINCIPAL, principal).await
}

/// Remove the principal from the session.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn clear_principal(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session.remove::<Principal>(session_keys::PRINCIPAL).await?;
    Ok(())
}
