//! In-memory implementations of the store contracts for driving
//! `SessionManager` without a database.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chirpy_core::auth::password::hash_password;
use chirpy_core::auth::refresh::{NewRefreshToken, RefreshToken};
use chirpy_core::auth::store::{Credential, CredentialStore, RefreshTokenStore};
use chirpy_core::auth::{AuthConfig, SessionManager, StoreError};
use chirpy_core::types::UserId;
use chrono::Utc;

pub const TEST_SECRET: &str = "test-secret-that-is-long-enough-for-hmac";

#[derive(Default)]
struct Inner {
    credentials: HashMap<String, Credential>,
    refresh_tokens: HashMap<String, RefreshToken>,
    offline: bool,
}

/// Shared in-memory store. Clones see the same data.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryStore {
    /// Register an account and return its id.
    pub fn add_user(&self, email: &str, password: &str) -> UserId {
        let user_id = UserId::new_v4();
        let credential = Credential {
            user_id,
            email: email.to_string(),
            password_hash: hash_password(password).expect("hashing should succeed"),
        };
        self.inner
            .lock()
            .unwrap()
            .credentials
            .insert(email.to_string(), credential);
        user_id
    }

    /// Insert a refresh-token record directly, bypassing login.
    pub fn insert_refresh_token(&self, record: RefreshToken) {
        self.inner
            .lock()
            .unwrap()
            .refresh_tokens
            .insert(record.token.clone(), record);
    }

    pub fn refresh_token(&self, token: &str) -> Option<RefreshToken> {
        self.inner.lock().unwrap().refresh_tokens.get(token).cloned()
    }

    pub fn refresh_token_count(&self) -> usize {
        self.inner.lock().unwrap().refresh_tokens.len()
    }

    /// Make every subsequent call fail as if the database were down.
    pub fn go_offline(&self) {
        self.inner.lock().unwrap().offline = true;
    }

    fn check_online(inner: &Inner) -> Result<(), StoreError> {
        if inner.offline {
            Err(StoreError::new("connection refused"))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl CredentialStore for MemoryStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<Credential>, StoreError> {
        let inner = self.inner.lock().unwrap();
        Self::check_online(&inner)?;
        Ok(inner.credentials.get(email).cloned())
    }
}

#[async_trait]
impl RefreshTokenStore for MemoryStore {
    async fn create(&self, input: &NewRefreshToken) -> Result<RefreshToken, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        Self::check_online(&inner)?;
        let record = RefreshToken {
            token: input.token.clone(),
            user_id: input.user_id,
            expires_at: input.expires_at,
            revoked_at: None,
            created_at: Utc::now(),
        };
        inner
            .refresh_tokens
            .insert(record.token.clone(), record.clone());
        Ok(record)
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<RefreshToken>, StoreError> {
        let inner = self.inner.lock().unwrap();
        Self::check_online(&inner)?;
        Ok(inner.refresh_tokens.get(token).cloned())
    }

    async fn revoke(&self, token: &str) -> Result<bool, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        Self::check_online(&inner)?;
        match inner.refresh_tokens.get_mut(token) {
            Some(record) => {
                record.revoked_at.get_or_insert_with(Utc::now);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

pub type TestSessions = SessionManager<MemoryStore, MemoryStore>;

/// Build a session manager over a fresh store with default lifetimes.
pub fn session_manager() -> (TestSessions, MemoryStore) {
    let store = MemoryStore::default();
    let manager = SessionManager::new(store.clone(), store.clone(), AuthConfig::new(TEST_SECRET));
    (manager, store)
}
