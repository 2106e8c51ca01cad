//! Owner-scoped authorization.

use super::AuthError;
use crate::types::UserId;

/// Allow the action only when `actor` owns the resource.
///
/// There is no superuser bypass.
pub fn check_ownership(actor: UserId, owner: UserId) -> Result<(), AuthError> {
    if actor == owner {
        Ok(())
    } else {
        Err(AuthError::Forbidden)
    }
}
