//! Storage implementations for the extension store

pub mod in_memory;

pub use in_memory::InMemoryExtensionStore;
