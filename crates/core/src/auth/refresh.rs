//! Opaque refresh tokens and the record the store keeps for each one.
//!
//! A refresh token is 32 bytes from the thread-local CSPRNG, hex-encoded to a
//! 64-character string. It has no internal structure: it is a capability
//! matched by exact string comparison against the store.

use rand::Rng;

use crate::types::{Timestamp, UserId};

/// Number of random bytes behind each refresh token.
pub const REFRESH_TOKEN_BYTES: usize = 32;

/// Length of the hex-encoded token string.
pub const REFRESH_TOKEN_LEN: usize = REFRESH_TOKEN_BYTES * 2;

/// Generate a fresh 256-bit refresh token, hex-encoded.
pub fn generate_refresh_token() -> String {
    let mut bytes = [0u8; REFRESH_TOKEN_BYTES];
    rand::rng().fill(&mut bytes);
    hex::encode(bytes)
}

/// A stored refresh-token record.
///
/// Created at login and mutated at most once afterwards, by revocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshToken {
    pub token: String,
    pub user_id: UserId,
    pub expires_at: Timestamp,
    pub revoked_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

impl RefreshToken {
    /// Whether the record has been explicitly revoked. Permanent.
    pub fn is_revoked(&self) -> bool {
        self.revoked_at.is_some()
    }

    /// Whether the record's natural lifetime has ended at `now`.
    pub fn is_expired_at(&self, now: Timestamp) -> bool {
        now >= self.expires_at
    }
}

/// Input for creating a refresh-token record.
#[derive(Debug, Clone)]
pub struct NewRefreshToken {
    pub token: String,
    pub user_id: UserId,
    pub expires_at: Timestamp,
}
