//! # blogs-domain
//!
//! Pure domain model for the blogs API.
//!
//! ## Responsibilities
//! - Foundational types: the typed [`BlogPostId`](id::BlogPostId) and error conventions
//! - Define the **blog post** record served by the API
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod blog_post;
pub mod error;
pub mod id;
