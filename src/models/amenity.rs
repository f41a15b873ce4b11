//! Amenity model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::{require_text, touch, Entity};
use crate::error::AppResult;

const NAME_MAX_LEN: u64 = 50;

/// Amenity that can be attached to places (Wi-Fi, parking, ...)
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Amenity {
    id: Uuid,
    name: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Amenity summary embedded in place responses
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AmenityShort {
    pub id: Uuid,
    pub name: String,
}

/// Create amenity request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateAmenity {
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateAmenity {
    pub name: Option<String>,
}

pub fn validate_name(value: &str) -> AppResult<()> {
    require_text(value, "Amenity name", Some(NAME_MAX_LEN))
}

impl Amenity {
    pub fn new(data: CreateAmenity) -> AppResult<Self> {
        validate_name(&data.name)?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            name: data.name,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn update(&mut self, data: UpdateAmenity) -> AppResult<()> {
        if let Some(name) = data.name {
            validate_name(&name)?;
            self.name = name;
        }
        touch(&mut self.updated_at);
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

impl Entity for Amenity {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl From<&Amenity> for AmenityShort {
    fn from(amenity: &Amenity) -> Self {
        Self {
            id: amenity.id,
            name: amenity.name.clone(),
        }
    }
}
