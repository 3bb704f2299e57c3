//! Extension store trait
//!
//! The plugin never talks to a concrete backend. Every component goes
//! through this narrow interface, one instance per extension kind.

use crate::core::compare::{Comparator, Predicate};
use crate::core::error::{EquipmentsResult, ExtensionError};
use crate::core::extension::Extension;
use crate::core::query::ListResult;
use async_trait::async_trait;

/// Store for one extension kind
///
/// Implementations own filtering, ordering and pagination so a listing is a
/// single call. Soft-deleted records are returned like any other record;
/// callers decide whether to skip them.
#[async_trait]
pub trait ExtensionStore<E: Extension>: Send + Sync {
    /// Persist a new record
    ///
    /// A record without a name gets a generated one. Fails with
    /// `AlreadyExists` when the name is taken.
    async fn create(&self, extension: E) -> EquipmentsResult<E>;

    /// Fetch a record by name
    async fn fetch(&self, name: &str) -> EquipmentsResult<Option<E>>;

    /// Delete a record, returning it as it was before removal
    async fn delete(&self, extension: &E) -> EquipmentsResult<E>;

    /// Every record matching `predicate`, ordered by `comparator`
    ///
    /// Without a comparator the store's own order is kept.
    async fn list(
        &self,
        predicate: Option<Predicate<E>>,
        comparator: Option<Comparator<E>>,
    ) -> EquipmentsResult<Vec<E>>;

    /// One page of the records matching `predicate`, ordered by `comparator`
    async fn list_page(
        &self,
        predicate: Option<Predicate<E>>,
        comparator: Option<Comparator<E>>,
        page: usize,
        size: usize,
    ) -> EquipmentsResult<ListResult<E>>;

    /// Fetch a record by name, failing with `NotFound` when it is missing
    async fn get(&self, name: &str) -> EquipmentsResult<E> {
        self.fetch(name)
            .await?
            .ok_or_else(|| ExtensionError::not_found(E::gvk().kind, name).into())
    }
}
