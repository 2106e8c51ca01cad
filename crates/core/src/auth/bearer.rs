//! Parsing of `Authorization: Bearer <token>` header values.

use super::AuthError;

/// The case-sensitive scheme name.
pub const BEARER_SCHEME: &str = "Bearer";

/// Extract the raw token from an Authorization header value.
///
/// `header` is `None` when the request carried no Authorization header. The
/// value must start with exactly `Bearer`, followed by at least one
/// whitespace character, followed by a non-empty token. Surrounding
/// whitespace is stripped. A bare token without the scheme is rejected.
pub fn parse_bearer(header: Option<&str>) -> Result<&str, AuthError> {
    let value = header.ok_or(AuthError::MalformedInput("missing Authorization header"))?;

    let rest = value
        .trim_start()
        .strip_prefix(BEARER_SCHEME)
        .ok_or(AuthError::MalformedInput("expected Bearer scheme"))?;

    if !rest.starts_with(char::is_whitespace) {
        return Err(AuthError::MalformedInput("expected Bearer scheme"));
    }

    let token = rest.trim();
    if token.is_empty() {
        return Err(AuthError::MalformedInput("empty bearer token"));
    }
    Ok(token)
}
