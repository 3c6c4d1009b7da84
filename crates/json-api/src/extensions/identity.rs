//! Caller identity helpers.
//!
//! Identity and role arrive as plain gateway headers and are trusted
//! verbatim; verification is the gateway's responsibility.

use salvo::prelude::{Request, StatusError};

pub(crate) const USER_ID_HEADER: &str = "x-user-id";
pub(crate) const USER_ROLE_HEADER: &str = "x-user-role";

const ADMIN_ROLE: &str = "ADMIN";

pub(crate) trait IdentityExt {
    /// The caller's opaque identity, or 401 when the header is absent.
    fn user_id_or_401(&self) -> Result<String, StatusError>;

    fn is_admin(&self) -> bool;

    /// Ownership scope for mutation endpoints: administrators get `None`
    /// (bypassing the seller-match check), everyone else their own id.
    fn ownership_scope(&self) -> Result<Option<String>, StatusError>;
}

impl IdentityExt for Request {
    fn user_id_or_401(&self) -> Result<String, StatusError> {
        self.header::<String>(USER_ID_HEADER)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .ok_or_else(|| StatusError::unauthorized().brief("Missing X-User-Id header"))
    }

    fn is_admin(&self) -> bool {
        self.header::<String>(USER_ROLE_HEADER)
            .is_some_and(|role| role == ADMIN_ROLE)
    }

    fn ownership_scope(&self) -> Result<Option<String>, StatusError> {
        let user_id = self.user_id_or_401()?;

        Ok(if self.is_admin() { None } else { Some(user_id) })
    }
}
