//! Session-stored authentication state.

/// Session keys for authentication data.
pub mod keys {
    /// Key under which the identity collaborator stores the
    /// [`Principal`](backoffice_core::Principal).
    pub const PRINCIPAL: &str = "principal";
}
