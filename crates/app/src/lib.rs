//! # blogs-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** the storage adapter implements:
//!   - `BlogPostRepository` — list all posts, find one by id
//! - Define the **driving port** as a use-case struct:
//!   - `BlogService` — list posts, get a post (absence becomes `NotFound`)
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `blogs-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
