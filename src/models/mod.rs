//! Data models for HBnB

pub mod amenity;
pub mod place;
pub mod review;
pub mod user;

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;
use validator::ValidateLength;

use crate::error::{AppError, AppResult};

// Re-export commonly used types
pub use amenity::Amenity;
pub use place::{Place, PlaceDetails, PlaceShort};
pub use review::{Review, ReviewShort};
pub use user::{User, UserShort};

/// Anything stored in a repository: identified by a generated id
pub trait Entity: Clone + Send + Sync + 'static {
    fn id(&self) -> Uuid;
}

/// Advance an `updated_at` stamp; the new value is always strictly later.
pub(crate) fn touch(updated_at: &mut DateTime<Utc>) {
    let now = Utc::now();
    *updated_at = if now > *updated_at {
        now
    } else {
        *updated_at + Duration::microseconds(1)
    };
}

/// Non-empty text of at most `max` characters. Whitespace counts as content.
pub(crate) fn require_text(value: &str, label: &str, max: Option<u64>) -> AppResult<()> {
    if !value.validate_length(Some(1), None, None) {
        return Err(AppError::Validation(format!("{} is required", label)));
    }
    if !value.validate_length(None, max, None) {
        return Err(AppError::Validation(format!(
            "{} must not exceed {} characters",
            label,
            max.unwrap_or_default()
        )));
    }
    Ok(())
}
