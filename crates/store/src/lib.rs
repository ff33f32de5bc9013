//! In-memory, tenant-scoped item store.
//!
//! [`ItemStore`] owns every item for the lifetime of the process and serves
//! tenant-scoped CRUD with cursor pagination. It is synchronous; callers that
//! share it across tasks wrap it in a lock.

pub mod item_store;
pub mod models;
pub mod seed;

pub use item_store::ItemStore;
