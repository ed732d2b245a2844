//! # blogs-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port trait defined in `blogs-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `blogs-app` (for port traits) and `blogs-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod blog_post_repo;
mod error;
mod pool;

pub use blog_post_repo::SqliteBlogPostRepository;
pub use error::StorageError;
pub use pool::{Config, Database};
