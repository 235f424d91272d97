//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Directory page (unified list + ?q= search)
//! GET  /health                 - Liveness check
//! GET  /health/ready           - Readiness check (probes the remote API)
//!
//! # Local users
//! GET  /add-user               - Add-user form + locally-added list
//! POST /add-user               - Create a local user (validated)
//! POST /add-user/{id}/remove   - Remove a local user
//!
//! # Profiles
//! GET  /users/{id}             - Profile by identifier (local first)
//! ```

pub mod add_user;
pub mod home;
pub mod users;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the local-user management routes router.
pub fn add_user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(add_user::page).post(add_user::create))
        .route("/{id}/remove", post(add_user::remove))
}

/// Create all routes for the application.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Directory page
        .route("/", get(home::home))
        // Local user management
        .nest("/add-user", add_user_routes())
        // Profile pages
        .route("/users/{id}", get(users::show))
}
