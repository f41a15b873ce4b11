//! Place (rental listing) model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::{
    amenity::AmenityShort, require_text, review::ReviewShort, touch, user::UserShort, Entity,
};
use crate::error::{AppError, AppResult};

const TITLE_MAX_LEN: u64 = 100;

/// Rental listing owned by a user
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Place {
    id: Uuid,
    title: String,
    description: String,
    /// Price per night
    price: f64,
    latitude: f64,
    longitude: f64,
    owner_id: Uuid,
    /// Amenity ids, in the order they were attached
    amenities: Vec<Uuid>,
    /// Review ids, in creation order
    reviews: Vec<Uuid>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Place as listed in collections
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PlaceShort {
    pub id: Uuid,
    pub title: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Place with its owner, amenities and reviews resolved
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PlaceDetails {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub owner_id: Uuid,
    pub owner: UserShort,
    pub amenities: Vec<AmenityShort>,
    pub reviews: Vec<ReviewShort>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create place request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreatePlace {
    pub title: String,
    pub description: Option<String>,
    /// Price per night
    pub price: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub owner_id: Uuid,
    /// Amenity ids
    #[serde(default)]
    pub amenities: Vec<Uuid>,
}

/// Update place request; absent fields stay unchanged
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdatePlace {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub owner_id: Option<Uuid>,
    /// Replaces the whole amenity list
    pub amenities: Option<Vec<Uuid>>,
}

pub fn validate_title(value: &str) -> AppResult<()> {
    require_text(value, "Title", Some(TITLE_MAX_LEN))
}

pub fn validate_price(value: f64) -> AppResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(AppError::Validation("Price must be a positive value".to_string()));
    }
    Ok(())
}

pub fn validate_latitude(value: f64) -> AppResult<()> {
    if !(-90.0..=90.0).contains(&value) {
        return Err(AppError::Validation(
            "Latitude must be between -90.0 and 90.0".to_string(),
        ));
    }
    Ok(())
}

pub fn validate_longitude(value: f64) -> AppResult<()> {
    if !(-180.0..=180.0).contains(&value) {
        return Err(AppError::Validation(
            "Longitude must be between -180.0 and 180.0".to_string(),
        ));
    }
    Ok(())
}

fn dedup_ids(ids: Vec<Uuid>) -> Vec<Uuid> {
    let mut unique = Vec::with_capacity(ids.len());
    for id in ids {
        if !unique.contains(&id) {
            unique.push(id);
        }
    }
    unique
}

impl Place {
    /// Build a place. Owner and amenity ids are checked against the stores by the caller.
    pub fn new(data: CreatePlace) -> AppResult<Self> {
        validate_title(&data.title)?;
        validate_price(data.price)?;
        validate_latitude(data.latitude)?;
        validate_longitude(data.longitude)?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            title: data.title,
            description: data.description.unwrap_or_default(),
            price: data.price,
            latitude: data.latitude,
            longitude: data.longitude,
            owner_id: data.owner_id,
            amenities: dedup_ids(data.amenities),
            reviews: Vec::new(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Apply a partial update. Every supplied field is checked before any is written.
    pub fn update(&mut self, data: UpdatePlace) -> AppResult<()> {
        if let Some(ref title) = data.title {
            validate_title(title)?;
        }
        if let Some(price) = data.price {
            validate_price(price)?;
        }
        if let Some(latitude) = data.latitude {
            validate_latitude(latitude)?;
        }
        if let Some(longitude) = data.longitude {
            validate_longitude(longitude)?;
        }

        if let Some(title) = data.title {
            self.title = title;
        }
        if let Some(description) = data.description {
            self.description = description;
        }
        if let Some(price) = data.price {
            self.price = price;
        }
        if let Some(latitude) = data.latitude {
            self.latitude = latitude;
        }
        if let Some(longitude) = data.longitude {
            self.longitude = longitude;
        }
        if let Some(owner_id) = data.owner_id {
            self.owner_id = owner_id;
        }
        if let Some(amenities) = data.amenities {
            self.amenities = dedup_ids(amenities);
        }
        touch(&mut self.updated_at);
        Ok(())
    }

    pub fn add_review(&mut self, review_id: Uuid) {
        if !self.reviews.contains(&review_id) {
            self.reviews.push(review_id);
        }
    }

    /// Returns false when the review was not listed.
    pub fn remove_review(&mut self, review_id: Uuid) -> bool {
        let before = self.reviews.len();
        self.reviews.retain(|id| *id != review_id);
        self.reviews.len() != before
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn owner_id(&self) -> Uuid {
        self.owner_id
    }

    pub fn amenities(&self) -> &[Uuid] {
        &self.amenities
    }

    pub fn reviews(&self) -> &[Uuid] {
        &self.reviews
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

impl Entity for Place {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl From<&Place> for PlaceShort {
    fn from(place: &Place) -> Self {
        Self {
            id: place.id,
            title: place.title.clone(),
            latitude: place.latitude,
            longitude: place.longitude,
        }
    }
}

impl PlaceDetails {
    pub fn new(
        place: &Place,
        owner: UserShort,
        amenities: Vec<AmenityShort>,
        reviews: Vec<ReviewShort>,
    ) -> Self {
        Self {
            id: place.id,
            title: place.title.clone(),
            description: place.description.clone(),
            price: place.price,
            latitude: place.latitude,
            longitude: place.longitude,
            owner_id: place.owner_id,
            owner,
            amenities,
            reviews,
            created_at: place.created_at,
            updated_at: place.updated_at,
        }
    }
}
