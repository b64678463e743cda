//! Registry table implementation.
//!
//! Provides the keyed storage shared by the concrete, abstract, and
//! in-development tables of [`DatasetRegistry`](super::DatasetRegistry).

use dashmap::DashMap;
use std::sync::Arc;

use dsreg_protocols::{BuilderClass, RegistryError, RegistryTable};

/// Trait for items that can be stored in a registry table.
///
/// Each registerable item must provide its normalized name.
pub trait Registerable: Send + Sync {
    /// Returns the key this item is stored under.
    fn registry_id(&self) -> &str;
}

impl Registerable for BuilderClass {
    fn registry_id(&self) -> &str {
        self.name()
    }
}

/// One registry table, mapping normalized names to items.
///
/// - Concurrent reads through DashMap
/// - Insert with duplicate checking, reported against this table
/// - Replace and remove for overwrite mode
///
/// # Type Parameters
///
/// * `T` - The stored item type, [`BuilderClass`] for dataset builders
pub struct ClassTable<T: ?Sized + Registerable = BuilderClass> {
    kind: RegistryTable,
    items: DashMap<String, Arc<T>>,
}

impl<T: ?Sized + Registerable> ClassTable<T> {
    /// Create a new empty table.
    pub fn new(kind: RegistryTable) -> Self {
        Self {
            kind,
            items: DashMap::new(),
        }
    }

    /// Which of the three tables this is.
    pub fn kind(&self) -> RegistryTable {
        self.kind
    }

    /// Insert an item.
    ///
    /// Returns an error naming this table if the key is already taken.
    pub fn insert(&self, item: Arc<T>) -> Result<(), RegistryError> {
        let id = item.registry_id().to_string();

        if self.items.contains_key(&id) {
            return Err(RegistryError::DuplicateRegistration {
                name: id,
                table: self.kind,
            });
        }

        self.items.insert(id, item);
        Ok(())
    }

    /// Insert an item, replacing any previous occupant of its key.
    pub fn replace(&self, item: Arc<T>) -> Option<Arc<T>> {
        let id = item.registry_id().to_string();
        self.items.insert(id, item)
    }

    /// Remove an item by key.
    pub fn remove(&self, id: &str) -> Option<Arc<T>> {
        self.items.remove(id).map(|(_, item)| item)
    }

    /// Get an item by key.
    pub fn get(&self, id: &str) -> Option<Arc<T>> {
        self.items.get(id).map(|item| item.clone())
    }

    /// Check if an item with the given key is stored.
    pub fn contains(&self, id: &str) -> bool {
        self.items.contains_key(id)
    }

    /// All stored keys, sorted.
    pub fn list_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.items.iter().map(|item| item.key().clone()).collect();
        ids.sort();
        ids
    }

    /// Get the number of stored items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Snapshot of all items, sorted by key.
    pub fn snapshot(&self) -> Vec<Arc<T>> {
        let mut items: Vec<(String, Arc<T>)> = self
            .items
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect();
        items.sort_by(|a, b| a.0.cmp(&b.0));
        items.into_iter().map(|(_, item)| item).collect()
    }
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
