//! Oja Common - Shared moderation types for the Oja marketplace
//!
//! This crate provides the value objects exchanged between the chat
//! moderation engine and its callers:
//! - Violation categories and records
//! - Risk levels
//! - Error handling
//!
//! Everything here is immutable plain data; the types serialize to the JSON
//! shape the marketplace clients consume.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod violation;

pub use error::*;
pub use violation::*;
