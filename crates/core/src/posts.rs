//! Rules for short text posts.

use crate::error::CoreError;

/// Maximum post length, counted in characters.
pub const MAX_POST_LENGTH: usize = 140;

/// Check that a post body fits within [`MAX_POST_LENGTH`].
pub fn validate_body(body: &str) -> Result<(), CoreError> {
    if body.chars().count() > MAX_POST_LENGTH {
        return Err(CoreError::Validation("Post is too long".into()));
    }
    Ok(())
}
