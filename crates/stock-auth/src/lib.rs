//! # stock-auth
//!
//! Session handling for the Stockpile console.
//!
//! Provides the login/logout lifecycle over the backend's token endpoint,
//! unverified JWT claims decoding (the backend owns signature verification;
//! the console only needs expiry and identity hints), OS keychain token
//! storage with a file fallback, and the pure route guard consulted before
//! every command.

pub mod claims;
pub mod error;
pub mod guard;
pub mod session;
pub mod token_store;

pub use claims::TokenClaims;
pub use error::AuthError;
pub use guard::{AccessPolicy, GuardDecision, guard};
pub use session::{Session, SessionState};
pub use token_store::{StoredToken, TokenSource, TokenStore};
