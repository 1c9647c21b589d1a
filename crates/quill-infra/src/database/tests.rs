#[cfg(test)]
mod tests {
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, ModelTrait};
    use uuid::Uuid;

    use quill_core::domain::{BlogPost, Category, User};
    use quill_core::error::RepoError;
    use quill_core::ports::{BaseRepository, CategoryRepository, PostRepository, UserRepository};

    use crate::database::entity::{category, post, post_category, user};
    use crate::database::postgres_repo::{
        PostgresCategoryRepository, PostgresPostRepository, PostgresUserRepository,
    };

    fn post_model(id: Uuid, user_id: Uuid) -> post::Model {
        let now = chrono::Utc::now();
        post::Model {
            id,
            user_id,
            title: "Test Post".to_owned(),
            content: "Content".to_owned(),
            published: now.into(),
            updated: now.into(),
        }
    }

    fn user_model(id: Uuid) -> user::Model {
        user::Model {
            id,
            display_name: "long_enough".to_owned(),
            email: "a@b.co".to_owned(),
            password_hash: "$argon2id$stub".to_owned(),
            image: None,
        }
    }

    #[tokio::test]
    async fn test_find_post_by_id() {
        let post_id = Uuid::new_v4();
        let user_id = Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![post_model(post_id, user_id)]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let result: Option<BlogPost> = repo.find_by_id(post_id).await.unwrap();

        assert!(result.is_some());
        let found = result.unwrap();
        assert_eq!(found.title, "Test Post");
        assert_eq!(found.id, post_id);
    }

    #[tokio::test]
    async fn test_find_user_by_email() {
        let user_id = Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![user_model(user_id)]])
            .into_connection();

        let repo = PostgresUserRepository::new(db);

        let found = repo.find_by_email("a@b.co").await.unwrap().unwrap();
        assert_eq!(found.id, user_id);
        assert_eq!(found.display_name, "long_enough");
    }

    #[tokio::test]
    async fn test_insert_user_round_trips_the_model() {
        let user_id = Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![user_model(user_id)]])
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let repo = PostgresUserRepository::new(db);

        let user = User {
            id: user_id,
            display_name: "long_enough".to_owned(),
            email: "a@b.co".to_owned(),
            password_hash: "$argon2id$stub".to_owned(),
            image: None,
        };

        let saved = repo.insert(user).await.unwrap();
        assert_eq!(saved.id, user_id);
        assert_eq!(saved.email, "a@b.co");
    }

    #[tokio::test]
    async fn test_find_categories_by_ids_resolves_existing_subset() {
        let known = Category::new("rust".to_owned());
        let unknown = Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![category::Model {
                id: known.id,
                name: known.name.clone(),
            }]])
            .into_connection();

        let repo = PostgresCategoryRepository::new(db);

        let resolved = repo.find_by_ids(&[known.id, unknown]).await.unwrap();
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].id, known.id);
    }

    #[tokio::test]
    async fn test_find_categories_by_empty_ids_skips_the_query() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let repo = PostgresCategoryRepository::new(db);

        let resolved = repo.find_by_ids(&[]).await.unwrap();
        assert!(resolved.is_empty());
    }

    #[tokio::test]
    async fn test_create_post_with_categories_commits_all_links() {
        let user_id = Uuid::new_v4();
        let category_a = Uuid::new_v4();
        let category_b = Uuid::new_v4();
        let blog_post = BlogPost::new(user_id, "Test Post".to_owned(), "Content".to_owned());
        let post_id = blog_post.id;

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![post_model(post_id, user_id)]])
            .append_query_results(vec![
                vec![post_category::Model {
                    post_id,
                    category_id: category_a,
                }],
                vec![post_category::Model {
                    post_id,
                    category_id: category_b,
                }],
            ])
            .append_exec_results(vec![
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                },
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                },
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                },
            ])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let created = repo
            .create_with_categories(blog_post, vec![category_a, category_b])
            .await
            .unwrap();

        assert_eq!(created.id, post_id);
        assert_eq!(created.user_id, user_id);
    }

    #[tokio::test]
    async fn test_create_post_link_failure_surfaces_as_query_error() {
        let user_id = Uuid::new_v4();
        let blog_post = BlogPost::new(user_id, "Test Post".to_owned(), "Content".to_owned());
        let post_id = blog_post.id;

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![post_model(post_id, user_id)]])
            .append_query_errors(vec![sea_orm::DbErr::Query(
                sea_orm::RuntimeErr::Internal("link insert failed".to_owned()),
            )])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let result = repo
            .create_with_categories(blog_post, vec![Uuid::new_v4()])
            .await;

        assert!(matches!(result.unwrap_err(), RepoError::Query(_)));
    }

    #[tokio::test]
    async fn test_post_reaches_categories_through_link_table() {
        let post_id = Uuid::new_v4();
        let user_id = Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                category::Model {
                    id: Uuid::new_v4(),
                    name: "rust".to_owned(),
                },
                category::Model {
                    id: Uuid::new_v4(),
                    name: "web".to_owned(),
                },
            ]])
            .into_connection();

        let categories = post_model(post_id, user_id)
            .find_related(category::Entity)
            .all(&db)
            .await
            .unwrap();

        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].name, "rust");
    }
}
