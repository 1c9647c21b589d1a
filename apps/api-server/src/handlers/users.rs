//! User listing and lookup handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use quill_core::domain::User;
use quill_shared::dto::UserResponse;

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// The password hash stays out of every response by construction.
fn to_response(user: &User) -> UserResponse {
    UserResponse {
        id: user.id,
        display_name: user.display_name.clone(),
        email: user.email.clone(),
        image: user.image.clone(),
    }
}

/// GET /user
pub async fn list_users(_identity: Identity, state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let users = state.users.find_all().await?;

    let body: Vec<UserResponse> = users.iter().map(to_response).collect();

    Ok(HttpResponse::Ok().json(body))
}

/// GET /user/{id}
pub async fn get_user(
    _identity: Identity,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let user = state
        .users
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("User does not exist".to_string()))?;

    Ok(HttpResponse::Ok().json(to_response(&user)))
}
