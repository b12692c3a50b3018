//! Anvaya Core - Shared types library for the Anvaya CRM client.
//!
//! This crate provides the common vocabulary used across the client
//! components:
//! - `client` - HTTP client for the Anvaya REST backend
//! - `cli` - Command-line front end
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients. Records arrive here already fetched; everything in this crate is
//! deterministic arithmetic and lookups over them.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, status/source/priority enums with fallback, tag references
//! - [`models`] - Wire-format records consumed from the backend
//! - [`reporting`] - The shared reporting aggregator used by every screen

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod models;
pub mod reporting;
pub mod types;

pub use models::*;
pub use types::*;
