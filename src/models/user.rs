//! User model and related types

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::{require_text, touch, Entity};
use crate::error::{AppError, AppResult};

const NAME_MAX_LEN: u64 = 50;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid email pattern")
});

/// Registered user
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct User {
    id: Uuid,
    first_name: String,
    last_name: String,
    email: String,
    is_admin: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Owner summary embedded in place responses
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserShort {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Create user request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub is_admin: bool,
}

/// Update user request; absent fields stay unchanged
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateUser {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub is_admin: Option<bool>,
}

pub fn validate_first_name(value: &str) -> AppResult<()> {
    require_text(value, "First name", Some(NAME_MAX_LEN))
}

pub fn validate_last_name(value: &str) -> AppResult<()> {
    require_text(value, "Last name", Some(NAME_MAX_LEN))
}

pub fn validate_email(value: &str) -> AppResult<()> {
    require_text(value, "Email", None)?;
    if !EMAIL_RE.is_match(value) {
        return Err(AppError::Validation("Invalid email format".to_string()));
    }
    Ok(())
}

impl User {
    pub fn new(data: CreateUser) -> AppResult<Self> {
        validate_first_name(&data.first_name)?;
        validate_last_name(&data.last_name)?;
        validate_email(&data.email)?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            first_name: data.first_name,
            last_name: data.last_name,
            email: data.email,
            is_admin: data.is_admin,
            created_at: now,
            updated_at: now,
        })
    }

    /// Apply a partial update. Every supplied field is checked before any is written.
    pub fn update(&mut self, data: UpdateUser) -> AppResult<()> {
        if let Some(ref first_name) = data.first_name {
            validate_first_name(first_name)?;
        }
        if let Some(ref last_name) = data.last_name {
            validate_last_name(last_name)?;
        }
        if let Some(ref email) = data.email {
            validate_email(email)?;
        }

        if let Some(first_name) = data.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = data.last_name {
            self.last_name = last_name;
        }
        if let Some(email) = data.email {
            self.email = email;
        }
        if let Some(is_admin) = data.is_admin {
            self.is_admin = is_admin;
        }
        touch(&mut self.updated_at);
        Ok(())
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn is_admin(&self) -> bool {
        self.is_admin
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

impl Entity for User {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl From<&User> for UserShort {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
        }
    }
}
