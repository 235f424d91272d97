//! Crewlist Core - Shared types library.
//!
//! This crate provides common types used across all Crewlist components:
//! - `web` - User directory web application
//! - `cli` - Command-line tools for managing the local user set
//!
//! # Architecture
//!
//! The core crate contains only types and pure validation - no I/O, no HTTP
//! clients, no file access. This keeps it lightweight and allows it to be
//! used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, emails, and roles
//! - [`form`] - Add-user form input and field-level validation

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod form;
pub mod types;

pub use form::*;
pub use types::*;
