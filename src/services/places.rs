//! Place operations and place response shaping

use uuid::Uuid;

use super::{not_found, Facade};
use crate::{
    error::{AppError, AppResult},
    models::{
        amenity::AmenityShort,
        place::{CreatePlace, UpdatePlace},
        Entity, Place, PlaceDetails, Review, ReviewShort, UserShort,
    },
};

impl Facade {
    /// Create a place once its owner and every listed amenity are known
    pub async fn create_place(&self, data: CreatePlace) -> AppResult<Place> {
        self.ensure_owner_exists(data.owner_id).await?;
        self.ensure_amenities_exist(&data.amenities).await?;

        let place = Place::new(data)?;
        self.repository.places.add(place.clone()).await;
        tracing::info!(place_id = %place.id(), owner_id = %place.owner_id(), "Place created");
        Ok(place)
    }

    pub async fn get_place(&self, id: Uuid) -> Option<Place> {
        self.repository.places.get(id).await
    }

    pub async fn get_all_places(&self) -> Vec<Place> {
        self.repository.places.get_all().await
    }

    pub async fn get_place_details(&self, id: Uuid) -> AppResult<PlaceDetails> {
        let place = self.get_place(id).await.ok_or_else(|| not_found("Place", id))?;
        self.describe_place(&place).await
    }

    /// Resolve owner, amenities and reviews of a place. Dangling amenity or
    /// review ids are skipped.
    pub async fn describe_place(&self, place: &Place) -> AppResult<PlaceDetails> {
        let owner = self
            .repository
            .users
            .get(place.owner_id())
            .await
            .ok_or_else(|| {
                AppError::Internal(format!(
                    "Owner {} of place {} is missing",
                    place.owner_id(),
                    place.id()
                ))
            })?;

        let mut amenities = Vec::with_capacity(place.amenities().len());
        for id in place.amenities() {
            if let Some(amenity) = self.repository.amenities.get(*id).await {
                amenities.push(AmenityShort::from(&amenity));
            }
        }

        let mut reviews = Vec::with_capacity(place.reviews().len());
        for id in place.reviews() {
            if let Some(review) = self.repository.reviews.get(*id).await {
                reviews.push(ReviewShort::from(&review));
            }
        }

        Ok(PlaceDetails::new(place, UserShort::from(&owner), amenities, reviews))
    }

    pub async fn update_place(&self, id: Uuid, data: UpdatePlace) -> AppResult<Place> {
        if !self.repository.places.contains(id).await {
            return Err(not_found("Place", id));
        }
        if let Some(owner_id) = data.owner_id {
            self.ensure_owner_exists(owner_id).await?;
        }
        if let Some(ref amenities) = data.amenities {
            self.ensure_amenities_exist(amenities).await?;
        }

        let place = self
            .repository
            .places
            .update(id, |place| place.update(data))
            .await?
            .ok_or_else(|| not_found("Place", id))?;
        tracing::debug!(place_id = %id, "Place updated");
        Ok(place)
    }

    /// Reviews written for a place, oldest first
    pub async fn get_reviews_by_place(&self, place_id: Uuid) -> AppResult<Vec<Review>> {
        if !self.repository.places.contains(place_id).await {
            return Err(not_found("Place", place_id));
        }
        Ok(self
            .repository
            .reviews
            .filter(|review| review.place_id() == place_id)
            .await)
    }

    async fn ensure_owner_exists(&self, owner_id: Uuid) -> AppResult<()> {
        if !self.repository.users.contains(owner_id).await {
            tracing::warn!(owner_id = %owner_id, "Rejected unknown owner reference");
            return Err(AppError::InvalidReference(format!("Owner {} not found", owner_id)));
        }
        Ok(())
    }
}
