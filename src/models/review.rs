//! Review model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Number;
use utoipa::ToSchema;
use uuid::Uuid;

use super::{require_text, touch, Entity};
use crate::error::{AppError, AppResult};

/// Review left by a user on a place
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Review {
    id: Uuid,
    text: String,
    /// Rating from 1 to 5
    rating: u8,
    place_id: Uuid,
    user_id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Review summary for place listings
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ReviewShort {
    pub id: Uuid,
    pub text: String,
    pub rating: u8,
}

/// Create review request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateReview {
    pub text: String,
    /// Kept as a raw JSON number so that `4.5` is reported as a rating error
    #[schema(value_type = i32)]
    pub rating: Number,
    pub user_id: Uuid,
    pub place_id: Uuid,
}

/// Update review request. The author and the place cannot change.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateReview {
    pub text: Option<String>,
    #[schema(value_type = Option<i32>)]
    pub rating: Option<Number>,
}

pub fn validate_text(value: &str) -> AppResult<()> {
    require_text(value, "Review text", None)
}

pub fn validate_rating(value: &Number) -> AppResult<u8> {
    if !value.is_i64() && !value.is_u64() {
        return Err(AppError::Validation("Rating must be an integer".to_string()));
    }
    match value.as_i64() {
        Some(rating @ 1..=5) => Ok(rating as u8),
        _ => Err(AppError::Validation("Rating must be between 1 and 5".to_string())),
    }
}

impl Review {
    /// Build a review. User and place ids are checked against the stores by the caller.
    pub fn new(data: CreateReview) -> AppResult<Self> {
        validate_text(&data.text)?;
        let rating = validate_rating(&data.rating)?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            text: data.text,
            rating,
            place_id: data.place_id,
            user_id: data.user_id,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn update(&mut self, data: UpdateReview) -> AppResult<()> {
        if let Some(ref text) = data.text {
            validate_text(text)?;
        }
        let rating = data.rating.as_ref().map(validate_rating).transpose()?;

        if let Some(text) = data.text {
            self.text = text;
        }
        if let Some(rating) = rating {
            self.rating = rating;
        }
        touch(&mut self.updated_at);
        Ok(())
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn rating(&self) -> u8 {
        self.rating
    }

    pub fn place_id(&self) -> Uuid {
        self.place_id
    }

    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

impl Entity for Review {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl From<&Review> for ReviewShort {
    fn from(review: &Review) -> Self {
        Self {
            id: review.id,
            text: review.text.clone(),
            rating: review.rating,
        }
    }
}
