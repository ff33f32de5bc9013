//! The item store: all items of all tenants in one vector.

use todo_core::pagination::PageRequest;
use todo_core::types::ItemId;

use crate::models::item::{Item, ItemPatch, NewItem};
use crate::models::page::{ItemPage, PageInfo};
use crate::seed;

/// Holds every item in memory and serves tenant-scoped CRUD.
///
/// Ids come from one counter shared by all tenants. The counter only moves
/// forward, so an id is never handed out twice, even after a delete. Once
/// `ItemId::MAX` has been issued the store accepts no further items.
///
/// Lookups are linear scans filtered by `(tenant_id, id)`; an id owned by
/// another tenant is indistinguishable from a missing one.
#[derive(Debug)]
pub struct ItemStore {
    items: Vec<Item>,
    /// `None` once the id space is used up.
    next_id: Option<ItemId>,
}

impl ItemStore {
    /// An empty store whose first item gets id 1.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: Some(1),
        }
    }

    /// A store pre-populated with `items`. New ids start above the largest
    /// existing id.
    pub fn with_items(items: Vec<Item>) -> Self {
        let next_id = match items.iter().map(|item| item.id).max() {
            Some(max) => max.checked_add(1),
            None => Some(1),
        };
        Self { items, next_id }
    }

    /// A store holding the demo items under `tenant_id`.
    pub fn seeded(tenant_id: &str) -> Self {
        Self::with_items(seed::demo_items(tenant_id))
    }

    /// Number of items across all tenants.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// List one page of `tenant_id`'s items in ascending id order.
    ///
    /// The page starts right after `cursor`. A cursor that is not one of the
    /// tenant's ids restarts from the first item rather than failing.
    /// `has_next` is `start + page_size < total`, so a page that exactly
    /// exhausts the remaining items reports `false`.
    pub fn list(&self, tenant_id: &str, cursor: Option<ItemId>, page_size: usize) -> ItemPage {
        let mut owned: Vec<&Item> = self
            .items
            .iter()
            .filter(|item| item.tenant_id == tenant_id)
            .collect();
        owned.sort_by_key(|item| item.id);

        let start = cursor
            .and_then(|cursor| owned.iter().position(|item| item.id == cursor))
            .map_or(0, |pos| pos + 1);

        let items: Vec<Item> = owned
            .iter()
            .skip(start)
            .take(page_size)
            .map(|item| (*item).clone())
            .collect();

        let page = PageInfo {
            next_cursor: items.last().map(|item| item.id),
            has_next: start.saturating_add(page_size) < owned.len(),
        };

        ItemPage { items, page }
    }

    /// [`list`](Self::list) driven by a parsed [`PageRequest`].
    pub fn list_page(&self, tenant_id: &str, request: PageRequest) -> ItemPage {
        self.list(tenant_id, request.cursor, request.size)
    }

    /// Find an item by id within `tenant_id`.
    pub fn get_by_id(&self, tenant_id: &str, id: ItemId) -> Option<&Item> {
        self.items
            .iter()
            .find(|item| item.tenant_id == tenant_id && item.id == id)
    }

    /// Append a new item under `tenant_id` with the next id.
    ///
    /// Returns `None` if no unused id is left.
    pub fn create(&mut self, tenant_id: &str, input: NewItem) -> Option<Item> {
        let Some(id) = self.next_id else {
            tracing::warn!(tenant_id, "Item id space exhausted");
            return None;
        };
        self.next_id = id.checked_add(1);

        let item = Item {
            id,
            tenant_id: tenant_id.to_string(),
            name: input.name.into_inner(),
            memo: input.memo,
            image_url: input.image_url,
            is_completed: input.is_completed,
        };
        self.items.push(item.clone());

        tracing::debug!(tenant_id, item_id = id, "Item stored");
        Some(item)
    }

    /// Merge `patch` onto the item and return the result.
    ///
    /// Returns `None` if no item with `id` exists within `tenant_id`.
    pub fn update(&mut self, tenant_id: &str, id: ItemId, patch: ItemPatch) -> Option<Item> {
        let slot = self
            .items
            .iter_mut()
            .find(|item| item.tenant_id == tenant_id && item.id == id)?;

        let updated = patch.merge_onto(slot);
        *slot = updated.clone();
        Some(updated)
    }

    /// Remove the item. Returns whether anything was removed.
    pub fn delete(&mut self, tenant_id: &str, id: ItemId) -> bool {
        let before = self.items.len();
        self.items
            .retain(|item| !(item.tenant_id == tenant_id && item.id == id));
        let removed = self.items.len() < before;

        if removed {
            tracing::debug!(tenant_id, item_id = id, "Item removed");
        }
        removed
    }
}

impl Default for ItemStore {
    fn default() -> Self {
        Self::new()
    }
}
