use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{BlogPost, Category, User};
use crate::error::RepoError;

/// Generic repository trait for the read/create operations every store
/// supports. Nothing in this system updates or deletes entities.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Fetch all entities.
    async fn find_all(&self) -> Result<Vec<T>, RepoError>;

    /// Insert a new entity.
    async fn insert(&self, entity: T) -> Result<T, RepoError>;
}

/// User repository with domain-specific lookups.
#[async_trait]
pub trait UserRepository: BaseRepository<User, Uuid> {
    /// Find a user by their email address.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError>;
}

/// Category repository.
#[async_trait]
pub trait CategoryRepository: BaseRepository<Category, Uuid> {
    /// Resolve the subset of `ids` that exist. Unknown ids are dropped,
    /// not reported.
    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Category>, RepoError>;
}

/// Post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<BlogPost, Uuid> {
    /// Insert a post together with one link row per category id, all inside
    /// a single transaction. A failed link insert rolls back the post.
    async fn create_with_categories(
        &self,
        post: BlogPost,
        category_ids: Vec<Uuid>,
    ) -> Result<BlogPost, RepoError>;
}
