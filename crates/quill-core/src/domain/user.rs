use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User entity - a registered author.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub display_name: String,
    pub email: String,
    pub password_hash: String,
    pub image: Option<String>,
}

impl User {
    /// Create a new user with a generated ID.
    pub fn new(
        display_name: String,
        email: String,
        password_hash: String,
        image: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            display_name,
            email,
            password_hash,
            image,
        }
    }
}
