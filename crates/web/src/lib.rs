//! Crewlist web library.
//!
//! This crate provides the directory application as a library, allowing it
//! to be tested and reused by the management CLI.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod directory;
pub mod error;
pub mod filters;
pub mod models;
pub mod remote;
pub mod resolver;
pub mod routes;
pub mod state;
pub mod store;
