//! Cursor pagination result types.

use serde::Serialize;
use todo_core::types::ItemId;

use crate::models::item::Item;

/// Pagination metadata returned next to a page of items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// Id of the last item in the page, or `None` when the page is empty.
    pub next_cursor: Option<ItemId>,
    pub has_next: bool,
}

/// One page of a tenant's items, serialized as `{ items, page }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemPage {
    pub items: Vec<Item>,
    pub page: PageInfo,
}

impl ItemPage {
    pub fn ids(&self) -> Vec<ItemId> {
        self.items.iter().map(|item| item.id).collect()
    }
}
