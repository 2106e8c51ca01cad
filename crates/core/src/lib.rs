//! Domain core for the chirpy posting backend.
//!
//! Holds everything that must stay correct regardless of transport or
//! storage: the authentication and session-lifecycle subsystem in [`auth`],
//! post-body rules in [`posts`], and the shared error and id types.

pub mod auth;
pub mod error;
pub mod posts;
pub mod types;
