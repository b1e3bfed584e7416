//! External service interactions
//!
//! - Persisted list store (key-value text storage)
//! - CSV export to the file system

pub mod export;
pub mod store;

pub use export::export_csv;
pub use store::{FileStore, KeyValueStore};
#[cfg(test)]
pub use store::MemoryStore;
