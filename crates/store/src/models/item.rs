//! Item entity model and DTOs.

use serde::{Deserialize, Serialize};
use todo_core::error::CoreError;
use todo_core::field_update::FieldUpdate;
use todo_core::types::{ItemId, TenantId};
use todo_core::validation::{ItemName, INVALID_NAME_MESSAGE};
use validator::Validate;

/// A todo item as held by the store and returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub tenant_id: TenantId,
    pub name: String,
    pub memo: Option<String>,
    pub image_url: Option<String>,
    pub is_completed: bool,
}

/// Request body for creating an item.
///
/// `memo`/`image_url` default to null and `is_completed` to false when omitted.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateItem {
    #[validate(
        required(message = "Invalid or missing name. Name must be a non-empty string."),
        length(min = 1, message = "Invalid or missing name. Name must be a non-empty string.")
    )]
    pub name: Option<String>,
    pub memo: Option<String>,
    pub image_url: Option<String>,
    pub is_completed: Option<bool>,
}

/// Request body for partially updating an item. All fields are optional.
///
/// `id` and `tenantId` are not part of the schema; if a client sends them
/// they are ignored. `name` may be omitted but never null or empty.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItem {
    #[serde(default)]
    pub name: FieldUpdate<String>,
    #[serde(default)]
    pub memo: FieldUpdate<String>,
    #[serde(default)]
    pub image_url: FieldUpdate<String>,
    pub is_completed: Option<bool>,
}

/// Validated input for [`crate::ItemStore::create`].
#[derive(Debug, Clone)]
pub struct NewItem {
    pub name: ItemName,
    pub memo: Option<String>,
    pub image_url: Option<String>,
    pub is_completed: bool,
}

impl NewItem {
    /// An item with only a name; everything else takes its default.
    pub fn named(name: ItemName) -> Self {
        Self {
            name,
            memo: None,
            image_url: None,
            is_completed: false,
        }
    }
}

impl TryFrom<CreateItem> for NewItem {
    type Error = CoreError;

    fn try_from(input: CreateItem) -> Result<Self, Self::Error> {
        input.validate()?;
        Ok(Self {
            name: ItemName::new(input.name.unwrap_or_default())?,
            memo: input.memo,
            image_url: input.image_url,
            is_completed: input.is_completed.unwrap_or(false),
        })
    }
}

/// Validated partial update for [`crate::ItemStore::update`].
///
/// Carries no `id` or `tenant_id`: both are fixed at creation.
#[derive(Debug, Clone, Default)]
pub struct ItemPatch {
    pub name: Option<ItemName>,
    pub memo: FieldUpdate<String>,
    pub image_url: FieldUpdate<String>,
    pub is_completed: Option<bool>,
}

impl ItemPatch {
    /// Produce the merged item. `current` is left untouched.
    pub fn merge_onto(self, current: &Item) -> Item {
        Item {
            id: current.id,
            tenant_id: current.tenant_id.clone(),
            name: self
                .name
                .map(ItemName::into_inner)
                .unwrap_or_else(|| current.name.clone()),
            memo: self.memo.apply(current.memo.clone()),
            image_url: self.image_url.apply(current.image_url.clone()),
            is_completed: self.is_completed.unwrap_or(current.is_completed),
        }
    }
}

impl TryFrom<UpdateItem> for ItemPatch {
    type Error = CoreError;

    fn try_from(input: UpdateItem) -> Result<Self, Self::Error> {
        let name = match input.name {
            FieldUpdate::Unchanged => None,
            FieldUpdate::Set(name) if !name.is_empty() => Some(ItemName::new(name)?),
            FieldUpdate::Set(_) | FieldUpdate::Cleared => {
                return Err(CoreError::Validation(INVALID_NAME_MESSAGE.to_string()))
            }
        };
        Ok(Self {
            name,
            memo: input.memo,
            image_url: input.image_url,
            is_completed: input.is_completed,
        })
    }
}
