//! Query parameter types for API handlers.

use serde::Deserialize;

/// Cursor pagination parameters (`?cursor=&size=`).
///
/// Kept as raw strings so that malformed numbers produce the envelope error
/// from [`todo_core::pagination::PageRequest::parse`] instead of an extractor
/// rejection.
#[derive(Debug, Default, Deserialize)]
pub struct CursorParams {
    pub cursor: Option<String>,
    pub size: Option<String>,
}
