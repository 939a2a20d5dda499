//! # Event Hub Core Library
//!
//! This crate contains the domain layer of Campus Event Hub: typed row
//! models for the managed backend's tables, role-based permission helpers,
//! session identity, progress derivation, and the route guard.
//!
//! Everything here is pure and synchronous. Data access lives in the
//! `eventhub-client` crate.
//!
//! ## Module Organization
//!
//! - `models`: Row models for the `events`, `tasks`, and `profiles` tables
//! - `identity`: Immutable session identity and the resolver's tri-state
//! - `progress`: Completion percentage and derived event status
//! - `routing`: Pure role-gated route authorization
//! - `error`: Store error taxonomy shared with the client crate

pub mod error;
pub mod identity;
pub mod models;
pub mod progress;
pub mod routing;

/// Current version of the Event Hub core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
