//! Error taxonomy for the authentication core.
//!
//! Several variants collapse into one "unauthorized" outcome at the HTTP
//! boundary. The distinct kinds exist so that audit logs can tell an expired
//! session from a forged token; they must never drive differential responses.

/// Failure reported by a persistence collaborator.
///
/// Opaque on purpose: the core only needs to know that the store could not
/// answer, not why.
#[derive(Debug, thiserror::Error)]
#[error("store unavailable: {source}")]
pub struct StoreError {
    #[source]
    source: Box<dyn std::error::Error + Send + Sync>,
}

impl StoreError {
    pub fn new(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self {
            source: source.into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The Authorization header is absent or not of the form `Bearer <token>`.
    #[error("malformed input: {0}")]
    MalformedInput(&'static str),

    /// Unknown email or wrong password. Deliberately a single variant.
    #[error("invalid credentials")]
    InvalidCredential,

    /// Bad signature, bad structure, or an unparseable subject.
    #[error("invalid token: {0}")]
    InvalidToken(String),

    #[error("token expired")]
    TokenExpired,

    #[error("token revoked")]
    TokenRevoked,

    /// Authenticated, but not the owner of the resource.
    #[error("forbidden")]
    Forbidden,

    /// Revocation targeted a refresh token the store does not know.
    #[error("refresh token not found")]
    RefreshTokenNotFound,

    #[error(transparent)]
    StoreUnavailable(#[from] StoreError),

    #[error("password hashing failed: {0}")]
    Hashing(String),

    #[error("token signing failed: {0}")]
    Signing(String),
}

impl AuthError {
    /// True for every kind that must surface as a uniform "unauthorized".
    pub fn is_unauthenticated(&self) -> bool {
        matches!(
            self,
            AuthError::InvalidCredential
                | AuthError::InvalidToken(_)
                | AuthError::TokenExpired
                | AuthError::TokenRevoked
        )
    }

    /// Stable label for structured audit logging.
    pub fn audit_kind(&self) -> &'static str {
        match self {
            AuthError::MalformedInput(_) => "malformed_input",
            AuthError::InvalidCredential => "invalid_credential",
            AuthError::InvalidToken(_) => "invalid_token",
            AuthError::TokenExpired => "token_expired",
            AuthError::TokenRevoked => "token_revoked",
            AuthError::Forbidden => "forbidden",
            AuthError::RefreshTokenNotFound => "refresh_token_not_found",
            AuthError::StoreUnavailable(_) => "store_unavailable",
            AuthError::Hashing(_) => "hashing",
            AuthError::Signing(_) => "signing",
        }
    }
}
