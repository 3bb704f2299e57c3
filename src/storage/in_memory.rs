//! In-memory extension store for development, tests and the standalone binary

use crate::core::compare::{Comparator, Predicate};
use crate::core::error::{EquipmentsResult, ExtensionError, StorageError};
use crate::core::extension::Extension;
use crate::core::query::ListResult;
use crate::core::store::ExtensionStore;
use async_trait::async_trait;
use indexmap::IndexMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

const BACKEND: &str = "in-memory";

/// In-memory store for one extension kind
///
/// Records keep their insertion order, which is the order listings use when
/// no comparator is given. Uses RwLock for thread-safe access; the lock is
/// never held across an await point.
pub struct InMemoryExtensionStore<E: Extension> {
    records: Arc<RwLock<IndexMap<String, E>>>,
}

impl<E: Extension> Clone for InMemoryExtensionStore<E> {
    fn clone(&self) -> Self {
        Self {
            records: self.records.clone(),
        }
    }
}

impl<E: Extension> InMemoryExtensionStore<E> {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(IndexMap::new())),
        }
    }

    /// Number of records currently held, soft-deleted ones included
    pub fn len(&self) -> usize {
        self.records.read().map(|records| records.len()).unwrap_or(0)
    }

    /// Whether the store holds no record
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn matching(
        &self,
        predicate: Option<Predicate<E>>,
        comparator: Option<Comparator<E>>,
    ) -> EquipmentsResult<Vec<E>> {
        let records = self.records.read().map_err(lock_error)?;

        let mut matching: Vec<E> = records
            .values()
            .filter(|record| predicate.as_ref().is_none_or(|p| p(*record)))
            .cloned()
            .collect();
        drop(records);

        if let Some(comparator) = comparator {
            matching.sort_by(|a, b| comparator(a, b));
        }
        Ok(matching)
    }
}

impl<E: Extension> Default for InMemoryExtensionStore<E> {
    fn default() -> Self {
        Self::new()
    }
}

fn lock_error<T>(e: std::sync::PoisonError<T>) -> StorageError {
    StorageError::QueryError {
        backend: BACKEND.to_string(),
        message: format!("Failed to acquire lock: {}", e),
    }
}

#[async_trait]
impl<E: Extension> ExtensionStore<E> for InMemoryExtensionStore<E> {
    async fn create(&self, mut extension: E) -> EquipmentsResult<E> {
        let kind = E::gvk().kind;
        if extension.name().is_empty() {
            extension.metadata_mut().name = format!("{}-{}", E::gvk().singular, Uuid::new_v4());
        }
        let metadata = extension.metadata_mut();
        metadata.version = Some(metadata.version.unwrap_or(0) + 1);

        let mut records = self.records.write().map_err(lock_error)?;
        if records.contains_key(extension.name()) {
            return Err(ExtensionError::AlreadyExists {
                kind: kind.to_string(),
                name: extension.name().to_string(),
            }
            .into());
        }
        records.insert(extension.name().to_string(), extension.clone());

        tracing::debug!(kind, name = extension.name(), "created extension");
        Ok(extension)
    }

    async fn fetch(&self, name: &str) -> EquipmentsResult<Option<E>> {
        let records = self.records.read().map_err(lock_error)?;
        Ok(records.get(name).cloned())
    }

    async fn delete(&self, extension: &E) -> EquipmentsResult<E> {
        let kind = E::gvk().kind;
        let mut records = self.records.write().map_err(lock_error)?;
        let removed = records
            .shift_remove(extension.name())
            .ok_or_else(|| ExtensionError::not_found(kind, extension.name()))?;

        tracing::debug!(kind, name = removed.name(), "deleted extension");
        Ok(removed)
    }

    async fn list(
        &self,
        predicate: Option<Predicate<E>>,
        comparator: Option<Comparator<E>>,
    ) -> EquipmentsResult<Vec<E>> {
        self.matching(predicate, comparator)
    }

    async fn list_page(
        &self,
        predicate: Option<Predicate<E>>,
        comparator: Option<Comparator<E>>,
        page: usize,
        size: usize,
    ) -> EquipmentsResult<ListResult<E>> {
        let matching = self.matching(predicate, comparator)?;
        Ok(ListResult::paginate(matching, page, size))
    }
}
