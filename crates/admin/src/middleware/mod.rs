//! HTTP middleware for the dashboard.
//!
//! # Layers (outermost first)
//!
//! 1. Sentry layers (hub per request, HTTP transaction)
//! 2. `TraceLayer` (request tracing)
//! 3. Session layer (tower-sessions, in-memory store)
//!
//! Role checks run as extractors ([`RequireRole`]) on each handler.

pub mod auth;
pub mod guard;
pub mod session;

pub use auth::{Editors, LoginRequired, RequireRole, RoleRequirement, Staff};
pub use guard::{GuardOutcome, LoginRedirect, evaluate};
pub use session::create_session_layer;
