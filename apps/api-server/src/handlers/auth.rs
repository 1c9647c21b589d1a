//! Registration and login handlers.

use actix_web::{HttpResponse, web};
use std::sync::Arc;

use quill_core::domain::User;
use quill_core::ports::{AuthError, PasswordService, TokenService};
use quill_core::validation;
use quill_shared::dto::{LoginRequest, RegisterUserRequest, TokenResponse};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /login
pub async fn login(
    state: web::Data<AppState>,
    token_service: web::Data<Arc<dyn TokenService>>,
    password_service: web::Data<Arc<dyn PasswordService>>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    validation::require_credentials(&req.email, &req.password)?;

    // A wrong email and a wrong password are indistinguishable to the caller
    let user = state
        .users
        .find_by_email(&req.email)
        .await?
        .ok_or(AuthError::InvalidCredentials)?;

    let valid = password_service.verify(&req.password, &user.password_hash)?;

    if !valid {
        return Err(AuthError::InvalidCredentials.into());
    }

    let token = token_service
        .generate_token(user.id, &user.email)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(HttpResponse::Ok().json(TokenResponse { token }))
}

/// POST /user
pub async fn register(
    state: web::Data<AppState>,
    token_service: web::Data<Arc<dyn TokenService>>,
    password_service: web::Data<Arc<dyn PasswordService>>,
    body: web::Json<RegisterUserRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    validation::validate_new_user(&req.display_name, &req.email, &req.password)?;

    // Check if the email is already taken
    if state.users.find_by_email(&req.email).await?.is_some() {
        return Err(AppError::Conflict("User already registered".to_string()));
    }

    let password_hash = password_service.hash(&req.password)?;

    let user = User::new(req.display_name, req.email, password_hash, req.image);
    let saved_user = state.users.insert(user).await?;

    let token = token_service
        .generate_token(saved_user.id, &saved_user.email)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(HttpResponse::Created().json(TokenResponse { token }))
}
