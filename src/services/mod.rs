//! Business logic: the facade between the HTTP layer and the stores
//!
//! Every create/update runs its cross-entity checks (owner exists, amenities
//! exist, review author and place exist) before anything is written.

pub mod amenities;
pub mod places;
pub mod reviews;
pub mod users;

use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{error::AppError, repository::Repository};

/// Number of stored entities per type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct StoreCounts {
    pub users: usize,
    pub places: usize,
    pub amenities: usize,
    pub reviews: usize,
}

/// Single entry point for all entity operations
#[derive(Clone, Default)]
pub struct Facade {
    repository: Repository,
}

impl Facade {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn counts(&self) -> StoreCounts {
        StoreCounts {
            users: self.repository.users.len().await,
            places: self.repository.places.len().await,
            amenities: self.repository.amenities.len().await,
            reviews: self.repository.reviews.len().await,
        }
    }
}

fn not_found(kind: &str, id: Uuid) -> AppError {
    AppError::NotFound(format!("{} {} not found", kind, id))
}
