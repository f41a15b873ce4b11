//! Generic in-memory store keyed by entity id

use std::sync::Arc;

use indexmap::IndexMap;
use serde::Serialize;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{error::AppResult, models::Entity};

/// Insertion-ordered store for one entity type.
///
/// Cloning is cheap and every clone shares the same underlying map.
#[derive(Clone)]
pub struct InMemoryRepository<T: Entity> {
    storage: Arc<RwLock<IndexMap<Uuid, T>>>,
}

impl<T: Entity> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            storage: Arc::new(RwLock::new(IndexMap::new())),
        }
    }

    /// Store an entity under its id. An entity with the same id is replaced in place.
    pub async fn add(&self, entity: T) {
        self.storage.write().await.insert(entity.id(), entity);
    }

    pub async fn get(&self, id: Uuid) -> Option<T> {
        self.storage.read().await.get(&id).cloned()
    }

    pub async fn contains(&self, id: Uuid) -> bool {
        self.storage.read().await.contains_key(&id)
    }

    /// Snapshot of all entities in insertion order
    pub async fn get_all(&self) -> Vec<T> {
        self.storage.read().await.values().cloned().collect()
    }

    /// First entity matching the predicate
    pub async fn find<F>(&self, predicate: F) -> Option<T>
    where
        F: Fn(&T) -> bool,
    {
        self.storage.read().await.values().find(|e| predicate(e)).cloned()
    }

    /// All entities matching the predicate, in insertion order
    pub async fn filter<F>(&self, predicate: F) -> Vec<T>
    where
        F: Fn(&T) -> bool,
    {
        self.storage
            .read()
            .await
            .values()
            .filter(|e| predicate(e))
            .cloned()
            .collect()
    }

    /// Apply `mutation` to the stored entity.
    ///
    /// Returns `Ok(None)` when no entity has this id. When the mutation fails its
    /// error is returned and the stored entity is left as the mutation left it, so
    /// mutations must validate before writing.
    pub async fn update<F>(&self, id: Uuid, mutation: F) -> AppResult<Option<T>>
    where
        F: FnOnce(&mut T) -> AppResult<()>,
    {
        let mut storage = self.storage.write().await;
        let Some(entity) = storage.get_mut(&id) else {
            return Ok(None);
        };
        mutation(entity)?;
        Ok(Some(entity.clone()))
    }

    /// Remove an entity, keeping the relative order of the others
    pub async fn delete(&self, id: Uuid) -> Option<T> {
        self.storage.write().await.shift_remove(&id)
    }

    pub async fn len(&self) -> usize {
        self.storage.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.storage.read().await.is_empty()
    }
}

impl<T: Entity + Serialize> InMemoryRepository<T> {
    /// First entity whose serialized attribute `name` equals `value`
    pub async fn get_by_attribute(&self, name: &str, value: &serde_json::Value) -> Option<T> {
        self.find(|entity| {
            serde_json::to_value(entity)
                .ok()
                .and_then(|json| json.get(name).cloned())
                .is_some_and(|attribute| &attribute == value)
        })
        .await
    }
}
