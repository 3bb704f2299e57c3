//! Core module containing the extension abstraction and the listing engine

pub mod compare;
pub mod error;
pub mod extension;
pub mod listing;
pub mod query;
pub mod selector;
pub mod store;

pub use compare::{Comparator, Predicate};
pub use error::{EquipmentsError, EquipmentsResult};
pub use extension::{Extension, GroupVersionKind, Metadata};
pub use listing::{PageRequest, list_page};
pub use query::{ListQuery, ListResult};
pub use selector::Selector;
pub use store::ExtensionStore;
