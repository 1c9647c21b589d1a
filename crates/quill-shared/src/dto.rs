//! Data Transfer Objects - request/response types for the API.
//!
//! Wire names are camelCase, matching the public API surface.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request to login.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Request to register a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserRequest {
    pub display_name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub image: Option<String>,
}

/// Request to create a category.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryRequest {
    #[serde(default)]
    pub name: String,
}

/// Request to create a blog post.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub category_ids: Vec<Uuid>,
}

/// Response carrying a freshly issued bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// A user's public information. The password hash never leaves the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub display_name: String,
    pub email: String,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponse {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub content: String,
    pub published: DateTime<Utc>,
    pub updated: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requests_use_camel_case_wire_names() {
        let req: CreatePostRequest = serde_json::from_str(
            r#"{"title":"t","content":"c","categoryIds":["a1a2a3a4-b1b2-c1c2-d1d2-e1e2e3e4e5e6"]}"#,
        )
        .unwrap();
        assert_eq!(req.category_ids.len(), 1);

        let req: RegisterUserRequest = serde_json::from_str(
            r#"{"displayName":"long_enough","email":"a@b.co","password":"secret1"}"#,
        )
        .unwrap();
        assert_eq!(req.display_name, "long_enough");
        assert!(req.image.is_none());
    }

    #[test]
    fn user_response_has_no_password_field() {
        let body = serde_json::to_string(&UserResponse {
            id: Uuid::new_v4(),
            display_name: "long_enough".to_string(),
            email: "a@b.co".to_string(),
            image: None,
        })
        .unwrap();
        assert!(!body.contains("password"));
        assert!(body.contains("displayName"));
    }
}
