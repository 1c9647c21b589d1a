//! Blog post creation.

use actix_web::{HttpResponse, web};

use quill_core::domain::BlogPost;
use quill_core::validation;
use quill_shared::dto::{CreatePostRequest, PostResponse};

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn to_response(post: &BlogPost) -> PostResponse {
    PostResponse {
        id: post.id,
        user_id: post.user_id,
        title: post.title.clone(),
        content: post.content.clone(),
        published: post.published,
        updated: post.updated,
    }
}

/// POST /post
///
/// Unknown category ids are dropped; the post is rejected only when none of
/// the supplied ids exist. The post row and its link rows are written in one
/// transaction, so the 201 response implies every link persisted.
pub async fn create_post(
    identity: Identity,
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    validation::validate_post_fields(&req.title, &req.content)?;

    let categories = state.categories.find_by_ids(&req.category_ids).await?;
    if categories.is_empty() {
        return Err(AppError::BadRequest("\"categoryIds\" not found".to_string()));
    }

    let post = BlogPost::new(identity.user.id, req.title, req.content);
    let category_ids = categories.iter().map(|c| c.id).collect();

    let created = state.posts.create_with_categories(post, category_ids).await?;

    Ok(HttpResponse::Created().json(to_response(&created)))
}
