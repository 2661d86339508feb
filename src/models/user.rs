use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::dto::UserResponse;

/// User model (in-memory entity)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
    pub date_of_birth: Option<NaiveDate>,
}

impl User {
    /// Create a new, not yet stored user. The repository assigns `id` and `created_at`.
    pub fn new(
        username: String,
        email: String,
        first_name: Option<String>,
        last_name: Option<String>,
        date_of_birth: Option<NaiveDate>,
    ) -> Self {
        Self {
            id: 0,
            username,
            email,
            first_name,
            last_name,
            created_at: Utc::now(),
            is_active: true,
            date_of_birth,
        }
    }

    /// Overwrite the mutable fields with those of `changes`. `id` and `created_at` are kept.
    pub fn apply_changes(&mut self, changes: &User) {
        self.username = changes.username.clone();
        self.email = changes.email.clone();
        self.first_name = changes.first_name.clone();
        self.last_name = changes.last_name.clone();
        self.is_active = changes.is_active;
        self.date_of_birth = changes.date_of_birth;
    }

    /// Convert to response
    pub fn to_response(&self) -> UserResponse {
        UserResponse {
            id: self.id,
            username: self.username.clone(),
            email: self.email.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            created_at: self.created_at,
            is_active: self.is_active,
            date_of_birth: self.date_of_birth,
        }
    }
}
