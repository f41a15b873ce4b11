//! User operations

use serde_json::json;
use uuid::Uuid;

use super::{not_found, Facade};
use crate::{
    error::{AppError, AppResult},
    models::{
        user::{CreateUser, UpdateUser},
        Entity, User,
    },
};

impl Facade {
    /// Register a user. Emails are unique across users.
    pub async fn create_user(&self, data: CreateUser) -> AppResult<User> {
        if self.get_user_by_email(&data.email).await.is_some() {
            return Err(AppError::Duplicate("Email already registered".to_string()));
        }

        let user = User::new(data)?;
        self.repository.users.add(user.clone()).await;
        tracing::info!(user_id = %user.id(), "User created");
        Ok(user)
    }

    pub async fn get_user(&self, id: Uuid) -> Option<User> {
        self.repository.users.get(id).await
    }

    pub async fn get_user_by_email(&self, email: &str) -> Option<User> {
        self.repository.users.get_by_attribute("email", &json!(email)).await
    }

    pub async fn get_all_users(&self) -> Vec<User> {
        self.repository.users.get_all().await
    }

    pub async fn update_user(&self, id: Uuid, data: UpdateUser) -> AppResult<User> {
        if !self.repository.users.contains(id).await {
            return Err(not_found("User", id));
        }

        if let Some(ref email) = data.email {
            if let Some(owner) = self.get_user_by_email(email).await {
                if owner.id() != id {
                    return Err(AppError::Duplicate("Email already registered".to_string()));
                }
            }
        }

        let user = self
            .repository
            .users
            .update(id, |user| user.update(data))
            .await?
            .ok_or_else(|| not_found("User", id))?;
        tracing::debug!(user_id = %id, "User updated");
        Ok(user)
    }
}
