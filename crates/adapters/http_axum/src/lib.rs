//! # blogs-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a small **JSON API** over blog posts (`/blogs`, `/blogs/{id}`)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results into HTTP responses: JSON bodies on success,
//!   plain-text bodies with 400/404/500 on failure
//!
//! ## Dependency rule
//! Depends on `blogs-app` (for port traits and services) and `blogs-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
