//! Authentication extractor.
//!
//! Tokens are verified cryptographically, then the identity is re-resolved
//! from the user store by the claim's subject id. Claim fields are never
//! trusted directly for authorization decisions; a token whose subject no
//! longer resolves to a stored user is invalid.

use std::sync::Arc;

use actix_web::{FromRequest, HttpRequest, dev::Payload, http::header, web};
use futures::future::LocalBoxFuture;

use quill_core::domain::User;
use quill_core::ports::{AuthError, TokenService};
use quill_shared::ErrorResponse;

use crate::state::AppState;

/// Authenticated caller identity.
///
/// Use this in handlers to require authentication:
/// ```ignore
/// async fn protected_route(identity: Identity) -> impl Responder {
///     format!("Hello, {}!", identity.user.display_name)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Identity {
    pub user: User,
}

/// Error type for authentication failures.
#[derive(Debug)]
pub enum AuthenticationError {
    Auth(AuthError),
    Store(String),
}

impl std::fmt::Display for AuthenticationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthenticationError::Auth(err) => write!(f, "{}", err),
            AuthenticationError::Store(msg) => write!(f, "identity lookup failed: {}", msg),
        }
    }
}

impl actix_web::ResponseError for AuthenticationError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        match self {
            AuthenticationError::Auth(AuthError::TokenExpired)
            | AuthenticationError::Auth(AuthError::InvalidToken(_))
            | AuthenticationError::Auth(AuthError::MissingAuth)
            | AuthenticationError::Auth(AuthError::InvalidCredentials) => {
                actix_web::http::StatusCode::UNAUTHORIZED
            }
            _ => actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> actix_web::HttpResponse {
        let error = match self {
            AuthenticationError::Auth(AuthError::TokenExpired) => {
                ErrorResponse::new(401, "Token Expired")
                    .with_detail("Your authentication token has expired. Please login again.")
            }
            AuthenticationError::Auth(AuthError::InvalidToken(msg)) => {
                ErrorResponse::new(401, "Invalid Token").with_detail(msg.clone())
            }
            AuthenticationError::Auth(AuthError::MissingAuth) => {
                ErrorResponse::new(401, "Authentication Required")
                    .with_detail("Please provide a token in the Authorization header.")
            }
            AuthenticationError::Auth(AuthError::InvalidCredentials) => {
                ErrorResponse::unauthorized()
            }
            _ => ErrorResponse::internal_error(),
        };

        actix_web::HttpResponse::build(self.status_code()).json(error)
    }
}

impl FromRequest for Identity {
    type Error = AuthenticationError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            // Get the token service and state from app data
            let token_service = req
                .app_data::<web::Data<Arc<dyn TokenService>>>()
                .ok_or_else(|| {
                    tracing::error!("TokenService not found in app data");
                    AuthenticationError::Store("Server configuration error".to_string())
                })?;
            let state = req.app_data::<web::Data<AppState>>().ok_or_else(|| {
                tracing::error!("AppState not found in app data");
                AuthenticationError::Store("Server configuration error".to_string())
            })?;

            let auth_header = req
                .headers()
                .get(header::AUTHORIZATION)
                .ok_or(AuthenticationError::Auth(AuthError::MissingAuth))?;

            let raw = auth_header.to_str().map_err(|_| {
                AuthenticationError::Auth(AuthError::InvalidToken(
                    "Invalid authorization header".to_string(),
                ))
            })?;

            // The literal header value is the token; a "Bearer " prefix is
            // tolerated and stripped.
            let token = raw.strip_prefix("Bearer ").unwrap_or(raw);

            let claims = token_service
                .validate_token(token)
                .map_err(AuthenticationError::Auth)?;

            let user = state
                .users
                .find_by_id(claims.user_id)
                .await
                .map_err(|e| AuthenticationError::Store(e.to_string()))?
                .ok_or_else(|| {
                    AuthenticationError::Auth(AuthError::InvalidToken(
                        "Unknown token subject".to_string(),
                    ))
                })?;

            Ok(Identity { user })
        })
    }
}
