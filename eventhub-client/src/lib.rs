//! # Event Hub Client Library
//!
//! Async data-access layer of Campus Event Hub. This crate talks to the
//! external managed backend (auth provider plus relational store with
//! row-level security) and exposes the page-level coordinators the UI
//! drives.
//!
//! All persistence and authorization enforcement is the backend's job; this
//! crate issues the calls, decodes the rows into the typed models from
//! `eventhub-core`, and keeps local view state consistent.
//!
//! ## Module Organization
//!
//! - `config`: Environment-based configuration
//! - `auth`: Auth provider trait with REST and mock implementations
//! - `session`: One-shot session resolver producing a `SessionState`
//! - `store`: `EventStore` trait with REST and mock implementations
//! - `views`: Page coordinators (dashboard, create, details, admin)

pub mod auth;
pub mod config;
pub mod session;
pub mod store;
pub mod views;

/// Current version of the Event Hub client library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
