//! Cursor pagination request parsing.
//!
//! Query strings arrive as raw text (`?cursor=12&size=5`); this module turns
//! them into a typed [`PageRequest`]. Only a malformed `size` is an error.

use crate::error::CoreError;
use crate::types::ItemId;

/// Page size used when the caller does not ask for one.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// A request for one page of a tenant's items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Resume listing immediately after this id. `None` starts from the beginning.
    pub cursor: Option<ItemId>,
    /// Maximum number of items to return. Zero yields an empty page.
    pub size: usize,
}

impl PageRequest {
    /// Parse raw query values.
    ///
    /// An absent or empty value falls back to "no cursor" / `default_size`.
    /// A cursor that is not a number is treated like one that matches no
    /// item, so the listing starts from the beginning. `size` must be a
    /// non-negative integer and has no upper bound.
    pub fn parse(
        cursor: Option<&str>,
        size: Option<&str>,
        default_size: usize,
    ) -> Result<Self, CoreError> {
        let cursor = cursor
            .map(str::trim)
            .and_then(|raw| raw.parse::<ItemId>().ok());

        let size = match size.map(str::trim).filter(|s| !s.is_empty()) {
            None => default_size,
            Some(raw) => raw.parse::<usize>().map_err(|_| {
                CoreError::Validation("Invalid size. Must be a non-negative integer.".to_string())
            })?,
        };

        Ok(Self { cursor, size })
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            cursor: None,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}
