//! # stock-client
//!
//! Typed HTTP client for the Stockpile backend.
//!
//! One method per endpoint, all returning domain types from `stock-core`.
//! Failures map onto [`ApiError`]; nothing is retried — a failed call
//! surfaces once and the caller decides what to do.

mod alerts;
mod auth;
mod client;
mod error;
mod items;
mod reports;
mod users;

pub use client::ApiClient;
pub use error::ApiError;
