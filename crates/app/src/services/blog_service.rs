//! Blog service — read use-cases for blog posts.

use blogs_domain::blog_post::BlogPost;
use blogs_domain::error::{BlogError, NotFoundError};
use blogs_domain::id::BlogPostId;

use crate::ports::BlogPostRepository;

/// Application service for reading blog posts.
pub struct BlogService<R> {
    repo: R,
}

impl<R: BlogPostRepository> BlogService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List all blog posts, most recently created first.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_posts(&self) -> Result<Vec<BlogPost>, BlogError> {
        self.repo.get_all().await
    }

    /// Look up a blog post by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`BlogError::NotFound`] when no post with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_post(&self, id: BlogPostId) -> Result<BlogPost, BlogError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Blog",
                id: id.to_string(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blogs_domain::blog_post::NewBlogPost;
    use std::collections::BTreeMap;
    use std::future::Future;
    use std::sync::Mutex;

    #[derive(Default)]
    struct InMemoryBlogPostRepo {
        store: Mutex<BTreeMap<BlogPostId, BlogPost>>,
    }

    impl InMemoryBlogPostRepo {
        fn insert(&self, post: NewBlogPost) -> BlogPost {
            let mut store = self.store.lock().unwrap();
            let next = store.keys().next_back().map_or(1, |id| id.get() + 1);
            let post = post.with_id(BlogPostId::new(next));
            store.insert(post.id, post.clone());
            post
        }
    }

    impl BlogPostRepository for InMemoryBlogPostRepo {
        fn get_all(&self) -> impl Future<Output = Result<Vec<BlogPost>, BlogError>> + Send {
            let store = self.store.lock().unwrap();
            let result: Vec<BlogPost> = store.values().rev().cloned().collect();
            async { Ok(result) }
        }

        fn get_by_id(
            &self,
            id: BlogPostId,
        ) -> impl Future<Output = Result<Option<BlogPost>, BlogError>> + Send {
            let store = self.store.lock().unwrap();
            let result = store.get(&id).cloned();
            async { Ok(result) }
        }
    }

    struct FailingRepo;

    impl BlogPostRepository for FailingRepo {
        async fn get_all(&self) -> Result<Vec<BlogPost>, BlogError> {
            Err(BlogError::Storage(Box::new(std::io::Error::other(
                "connection reset",
            ))))
        }

        async fn get_by_id(&self, _id: BlogPostId) -> Result<Option<BlogPost>, BlogError> {
            Err(BlogError::Storage(Box::new(std::io::Error::other(
                "connection reset",
            ))))
        }
    }

    fn make_service() -> BlogService<InMemoryBlogPostRepo> {
        BlogService::new(InMemoryBlogPostRepo::default())
    }

    #[tokio::test]
    async fn should_return_empty_list_when_store_is_empty() {
        let svc = make_service();
        let all = svc.list_posts().await.unwrap();
        assert!(all.is_empty());
    }

    #[tokio::test]
    async fn should_list_most_recent_post_first() {
        let svc = make_service();
        svc.repo
            .insert(NewBlogPost::new("First Blog", "Content of the first blog"));
        svc.repo
            .insert(NewBlogPost::new("Second Blog", "Content of the second blog"));

        let all = svc.list_posts().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].title, "Second Blog");
        assert_eq!(all[1].title, "First Blog");
    }

    #[tokio::test]
    async fn should_get_post_when_it_exists() {
        let svc = make_service();
        let created = svc
            .repo
            .insert(NewBlogPost::new("Test Blog", "This is a test blog content"));

        let fetched = svc.get_post(created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn should_return_not_found_when_post_missing() {
        let svc = make_service();
        let result = svc.get_post(BlogPostId::new(999_999)).await;
        assert!(matches!(
            result,
            Err(BlogError::NotFound(NotFoundError { entity: "Blog", ref id })) if id == "999999"
        ));
    }

    #[tokio::test]
    async fn should_return_not_found_when_id_is_zero() {
        let svc = make_service();
        svc.repo.insert(NewBlogPost::new("t", "c"));
        let result = svc.get_post(BlogPostId::new(0)).await;
        assert!(matches!(result, Err(BlogError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_propagate_storage_error_when_listing() {
        let svc = BlogService::new(FailingRepo);
        let result = svc.list_posts().await;
        assert!(matches!(result, Err(BlogError::Storage(_))));
    }

    #[tokio::test]
    async fn should_propagate_storage_error_when_getting() {
        let svc = BlogService::new(FailingRepo);
        let result = svc.get_post(BlogPostId::new(1)).await;
        assert!(matches!(result, Err(BlogError::Storage(_))));
    }
}
