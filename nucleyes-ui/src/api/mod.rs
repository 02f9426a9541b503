//! API Client
//!
//! HTTP calls to the identity API.

pub mod client;

pub use client::{fetch_current_user, logout};
