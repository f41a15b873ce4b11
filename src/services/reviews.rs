//! Review operations

use uuid::Uuid;

use super::{not_found, Facade};
use crate::{
    error::{AppError, AppResult},
    models::{
        review::{CreateReview, UpdateReview},
        Entity, Review,
    },
};

impl Facade {
    /// Create a review and list it on its place
    pub async fn create_review(&self, data: CreateReview) -> AppResult<Review> {
        if !self.repository.users.contains(data.user_id).await {
            tracing::warn!(user_id = %data.user_id, "Rejected unknown review author");
            return Err(AppError::InvalidReference(format!("User {} not found", data.user_id)));
        }
        if !self.repository.places.contains(data.place_id).await {
            tracing::warn!(place_id = %data.place_id, "Rejected unknown reviewed place");
            return Err(AppError::InvalidReference(format!("Place {} not found", data.place_id)));
        }

        let review = Review::new(data)?;
        self.repository.reviews.add(review.clone()).await;

        let review_id = review.id();
        self.repository
            .places
            .update(review.place_id(), |place| {
                place.add_review(review_id);
                Ok(())
            })
            .await?;

        tracing::info!(review_id = %review_id, place_id = %review.place_id(), "Review created");
        Ok(review)
    }

    pub async fn get_review(&self, id: Uuid) -> Option<Review> {
        self.repository.reviews.get(id).await
    }

    pub async fn get_all_reviews(&self) -> Vec<Review> {
        self.repository.reviews.get_all().await
    }

    pub async fn update_review(&self, id: Uuid, data: UpdateReview) -> AppResult<Review> {
        let review = self
            .repository
            .reviews
            .update(id, |review| review.update(data))
            .await?
            .ok_or_else(|| not_found("Review", id))?;
        tracing::debug!(review_id = %id, "Review updated");
        Ok(review)
    }

    /// Delete a review and unlist it from its place, if the place still exists
    pub async fn delete_review(&self, id: Uuid) -> AppResult<Review> {
        let review = self
            .repository
            .reviews
            .delete(id)
            .await
            .ok_or_else(|| not_found("Review", id))?;

        let unlisted = self
            .repository
            .places
            .update(review.place_id(), |place| {
                place.remove_review(id);
                Ok(())
            })
            .await?;
        if unlisted.is_none() {
            tracing::debug!(review_id = %id, place_id = %review.place_id(), "Reviewed place already gone");
        }

        tracing::info!(review_id = %id, "Review deleted");
        Ok(review)
    }
}
