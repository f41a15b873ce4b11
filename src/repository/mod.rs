//! Repository layer: in-memory storage for every entity type

pub mod memory;

pub use memory::InMemoryRepository;

use crate::models::{Amenity, Place, Review, User};

/// Main repository struct holding one store per entity type
#[derive(Clone, Default)]
pub struct Repository {
    pub users: InMemoryRepository<User>,
    pub places: InMemoryRepository<Place>,
    pub amenities: InMemoryRepository<Amenity>,
    pub reviews: InMemoryRepository<Review>,
}

impl Repository {
    /// Create a repository with empty stores
    pub fn new() -> Self {
        Self::default()
    }
}
