//! Amenity operations

use uuid::Uuid;

use super::{not_found, Facade};
use crate::{
    error::{AppError, AppResult},
    models::{
        amenity::{CreateAmenity, UpdateAmenity},
        Amenity, Entity,
    },
};

impl Facade {
    pub async fn create_amenity(&self, data: CreateAmenity) -> AppResult<Amenity> {
        let amenity = Amenity::new(data)?;
        self.repository.amenities.add(amenity.clone()).await;
        tracing::info!(amenity_id = %amenity.id(), "Amenity created");
        Ok(amenity)
    }

    pub async fn get_amenity(&self, id: Uuid) -> Option<Amenity> {
        self.repository.amenities.get(id).await
    }

    pub async fn get_all_amenities(&self) -> Vec<Amenity> {
        self.repository.amenities.get_all().await
    }

    pub async fn update_amenity(&self, id: Uuid, data: UpdateAmenity) -> AppResult<Amenity> {
        let amenity = self
            .repository
            .amenities
            .update(id, |amenity| amenity.update(data))
            .await?
            .ok_or_else(|| not_found("Amenity", id))?;
        tracing::debug!(amenity_id = %id, "Amenity updated");
        Ok(amenity)
    }

    /// Fail on the first id with no stored amenity
    pub(crate) async fn ensure_amenities_exist(&self, ids: &[Uuid]) -> AppResult<()> {
        for id in ids {
            if !self.repository.amenities.contains(*id).await {
                tracing::warn!(amenity_id = %id, "Rejected unknown amenity reference");
                return Err(AppError::InvalidReference(format!("Amenity {} not found", id)));
            }
        }
        Ok(())
    }
}
