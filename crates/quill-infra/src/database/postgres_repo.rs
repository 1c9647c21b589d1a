//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, QueryFilter, Set, TransactionError,
    TransactionTrait,
};
use uuid::Uuid;

use quill_core::domain::{BlogPost, Category, User};
use quill_core::error::RepoError;
use quill_core::ports::{CategoryRepository, PostRepository, UserRepository};

use super::entity::category::{self, Entity as CategoryEntity};
use super::entity::post;
use super::entity::post_category;
use super::entity::user::{self, Entity as UserEntity};
use super::postgres_base::PostgresBaseRepository;

/// PostgreSQL user repository.
pub type PostgresUserRepository = PostgresBaseRepository<UserEntity>;

/// PostgreSQL category repository.
pub type PostgresCategoryRepository = PostgresBaseRepository<CategoryEntity>;

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<post::Entity>;

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        // Mask email for logging to avoid PII in logs
        let masked = if let Some(at_pos) = email.find('@') {
            let (local, domain) = email.split_at(at_pos);
            let masked_local = if local.len() > 1 {
                format!("{}***", &local[..1])
            } else {
                "***".to_string()
            };
            format!("{}{}", masked_local, domain)
        } else {
            "***".to_string()
        };
        tracing::debug!(user_email = %masked, "Finding user by email");

        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.map(Into::into))
    }
}

#[async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Category>, RepoError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let result = CategoryEntity::find()
            .filter(category::Column::Id.is_in(ids.iter().copied()))
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn create_with_categories(
        &self,
        blog_post: BlogPost,
        category_ids: Vec<Uuid>,
    ) -> Result<BlogPost, RepoError> {
        tracing::debug!(
            post_id = %blog_post.id,
            categories = category_ids.len(),
            "Creating post with category links"
        );

        // The post row and every link row commit together or not at all.
        let model = self
            .db
            .transaction::<_, post::Model, DbErr>(|txn| {
                Box::pin(async move {
                    let model = post::ActiveModel::from(blog_post).insert(txn).await?;

                    for category_id in category_ids {
                        post_category::ActiveModel {
                            post_id: Set(model.id),
                            category_id: Set(category_id),
                        }
                        .insert(txn)
                        .await?;
                    }

                    Ok(model)
                })
            })
            .await
            .map_err(|e| match e {
                TransactionError::Connection(err) => RepoError::Connection(err.to_string()),
                TransactionError::Transaction(err) => RepoError::Query(err.to_string()),
            })?;

        Ok(model.into())
    }
}
