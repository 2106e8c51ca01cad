//! Stateless HS256 access tokens.
//!
//! An access token is a signed assertion of identity with a fixed issuer and
//! a hard expiry. Validation never consults storage: the signature and the
//! local clock decide everything. No grace window is applied to `exp`.

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use super::AuthError;
use crate::types::UserId;

/// Value of the `iss` claim on every token this service issues.
pub const ISSUER: &str = "chirpy";

/// JWT claims embedded in every access token.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Claims {
    /// Subject -- the user's UUID in hyphenated string form.
    pub sub: String,
    /// Always [`ISSUER`].
    pub iss: String,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
}

/// Issue an HS256 access token for `user_id`, valid for `ttl` from now.
///
/// The token carries no random component: identical inputs issued within the
/// same second produce identical tokens. A negative `ttl` yields a token that
/// is already expired. A `ttl` that pushes `exp` past the representable
/// calendar is a [`AuthError::Signing`] error.
pub fn issue_access_token(user_id: UserId, secret: &str, ttl: Duration) -> Result<String, AuthError> {
    let now = Utc::now();
    let expires_at = now
        .checked_add_signed(ttl)
        .ok_or_else(|| AuthError::Signing(format!("token lifetime {ttl} is out of range")))?;
    let claims = Claims {
        sub: user_id.to_string(),
        iss: ISSUER.to_string(),
        iat: now.timestamp(),
        exp: expires_at.timestamp(),
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AuthError::Signing(e.to_string()))
}

/// Verify signature, issuer, and expiry, returning the decoded [`Claims`].
pub fn decode_access_token(token: &str, secret: &str) -> Result<Claims, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;
    validation.set_issuer(&[ISSUER]);
    validation.set_required_spec_claims(&["exp", "sub", "iss"]);

    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => AuthError::TokenExpired,
        ErrorKind::InvalidSignature => AuthError::InvalidToken("signature mismatch".into()),
        other => AuthError::InvalidToken(format!("{other:?}")),
    })?;

    // jsonwebtoken accepts `exp == now`; the token is dead from that instant.
    if Utc::now().timestamp() >= data.claims.exp {
        return Err(AuthError::TokenExpired);
    }

    Ok(data.claims)
}

/// Validate an access token and return the identity it asserts.
pub fn validate_access_token(token: &str, secret: &str) -> Result<UserId, AuthError> {
    let claims = decode_access_token(token, secret)?;
    UserId::parse_str(&claims.sub)
        .map_err(|_| AuthError::InvalidToken("subject is not a user id".into()))
}
