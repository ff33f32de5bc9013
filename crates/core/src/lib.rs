//! Domain building blocks for the todo item service.
//!
//! Pure types and rules shared by the store and the HTTP layer. Nothing in
//! this crate performs I/O.

pub mod error;
pub mod field_update;
pub mod pagination;
pub mod types;
pub mod validation;
