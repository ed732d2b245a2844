//! `SQLite` implementation of [`BlogPostRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use blogs_app::ports::BlogPostRepository;
use blogs_domain::blog_post::{BlogPost, NewBlogPost};
use blogs_domain::error::BlogError;
use blogs_domain::id::BlogPostId;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`BlogPost`].
struct Wrapper(BlogPost);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<BlogPost> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let title: String = row.try_get("title")?;
        let content: String = row.try_get("content")?;

        let id = u64::try_from(id).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

        Ok(Self(BlogPost {
            id: BlogPostId::new(id),
            title,
            content,
        }))
    }
}

const INSERT: &str = "INSERT INTO blog_posts (title, content) VALUES (?, ?)";
const SELECT_BY_ID: &str = "SELECT id, title, content FROM blog_posts WHERE id = ?";
const SELECT_ALL: &str = "SELECT id, title, content FROM blog_posts ORDER BY id DESC";

/// `SQLite`-backed blog post repository.
///
/// Ids are `AUTOINCREMENT`, so ordering by id descending lists the most
/// recently inserted post first.
#[derive(Clone)]
pub struct SqliteBlogPostRepository {
    pool: SqlitePool,
}

impl SqliteBlogPostRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Store a new post and return it with the id assigned by `SQLite`.
    ///
    /// Not part of the read-only port; used to seed data.
    ///
    /// # Errors
    ///
    /// Returns [`BlogError::Storage`] if the insert fails.
    pub async fn insert(&self, post: NewBlogPost) -> Result<BlogPost, BlogError> {
        let result = sqlx::query(INSERT)
            .bind(&post.title)
            .bind(&post.content)
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        let rowid = result.last_insert_rowid();
        let id = u64::try_from(rowid).map_err(|_| StorageError::RowIdOutOfRange(rowid))?;

        Ok(post.with_id(BlogPostId::new(id)))
    }
}

impl BlogPostRepository for SqliteBlogPostRepository {
    fn get_all(&self) -> impl Future<Output = Result<Vec<BlogPost>, BlogError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn get_by_id(
        &self,
        id: BlogPostId,
    ) -> impl Future<Output = Result<Option<BlogPost>, BlogError>> + Send {
        let pool = self.pool.clone();
        async move {
            // SQLite integers are signed; anything above i64::MAX cannot be stored.
            let Ok(raw) = i64::try_from(id.get()) else {
                return Ok(None);
            };

            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(raw)
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }
}
