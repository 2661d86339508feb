use std::sync::Arc;

use crate::dto::{CreateUserRequest, UpdateUserRequest, UserResponse};
use crate::interceptors::AppError;
use crate::models::User;
use crate::repositories::UserRepository;
use crate::utils::parse_date_of_birth;

#[derive(Clone)]
pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// List all users
    pub async fn list_users(&self) -> Vec<UserResponse> {
        self.repository
            .get_all_users()
            .await
            .iter()
            .map(User::to_response)
            .collect()
    }

    /// Get user by ID
    pub async fn get_user(&self, id: i32) -> Option<UserResponse> {
        self.repository
            .get_user_by_id(id)
            .await
            .map(|user| user.to_response())
    }

    /// Create a new user
    pub async fn create_user(&self, request: CreateUserRequest) -> UserResponse {
        if request.is_email_verified {
            tracing::debug!("Ignoring isEmailVerified for new user {}", request.username);
        }

        let user = User::new(
            request.username,
            request.email,
            request.first_name,
            request.last_name,
            request.date_of_birth,
        );

        let created_user = self.repository.create_user(user).await;
        tracing::info!("Created user {} ({})", created_user.id, created_user.username);

        created_user.to_response()
    }

    /// Update user. The date of birth is checked before the repository is touched.
    pub async fn update_user(
        &self,
        id: i32,
        request: UpdateUserRequest,
    ) -> Result<Option<UserResponse>, AppError> {
        let date_of_birth = parse_date_of_birth(request.date_of_birth.as_deref())?;

        let Some(mut existing_user) = self.repository.get_user_by_id(id).await else {
            return Ok(None);
        };

        existing_user.username = request.username;
        existing_user.email = request.email;
        existing_user.first_name = request.first_name;
        existing_user.last_name = request.last_name;
        existing_user.is_active = request.is_active;
        if date_of_birth.is_some() {
            existing_user.date_of_birth = date_of_birth;
        }

        let updated_user = self.repository.update_user(id, existing_user).await;
        if updated_user.is_some() {
            tracing::info!("Updated user {}", id);
        }

        Ok(updated_user.map(|user| user.to_response()))
    }

    /// Delete user
    pub async fn delete_user(&self, id: i32) -> bool {
        let deleted = self.repository.delete_user(id).await;
        if deleted {
            tracing::info!("Deleted user {}", id);
        }
        deleted
    }
}
