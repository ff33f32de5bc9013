//! Handlers for the tenant-scoped `/{tenant_id}/items` resource.
//!
//! Each handler validates its input first, then holds the store lock for a
//! single store call.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use todo_core::error::CoreError;
use todo_core::pagination::PageRequest;
use todo_core::types::ItemId;
use todo_store::models::item::{CreateItem, Item, ItemPatch, NewItem, UpdateItem};
use todo_store::models::page::ItemPage;

use crate::error::{map_json_rejection, AppError, AppResult};
use crate::query::CursorParams;
use crate::response::ApiResponse;
use crate::state::AppState;

const CREATE_FAILED: &str = "Failed to create item";
const UPDATE_FAILED: &str = "Failed to update item";

/// Path parameters for collection routes.
#[derive(Debug, Deserialize)]
pub struct TenantPath {
    pub tenant_id: String,
}

/// Path parameters for single-item routes. `item_id` is parsed by
/// [`parse_item_id`] so a non-numeric id yields the envelope error.
#[derive(Debug, Deserialize)]
pub struct ItemPath {
    pub tenant_id: String,
    pub item_id: String,
}

/// Parse the `item_id` path segment.
pub fn parse_item_id(raw: &str) -> AppResult<ItemId> {
    raw.trim()
        .parse::<ItemId>()
        .map_err(|_| AppError::BadRequest("Invalid itemId. Must be a number.".to_string()))
}

fn item_not_found(id: ItemId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Item", id })
}

/// GET /api/{tenant_id}/items?cursor=&size=
pub async fn list(
    State(state): State<AppState>,
    Path(TenantPath { tenant_id }): Path<TenantPath>,
    Query(params): Query<CursorParams>,
) -> AppResult<Json<ApiResponse<ItemPage>>> {
    let request = PageRequest::parse(
        params.cursor.as_deref(),
        params.size.as_deref(),
        state.config.default_page_size,
    )?;
    tracing::debug!(
        tenant_id = %tenant_id,
        cursor = ?request.cursor,
        size = request.size,
        "Listing items",
    );

    let page = state.store.read().await.list_page(&tenant_id, request);
    Ok(Json(ApiResponse::data(page)))
}

/// POST /api/{tenant_id}/items
pub async fn create(
    State(state): State<AppState>,
    Path(TenantPath { tenant_id }): Path<TenantPath>,
    body: Result<Json<CreateItem>, JsonRejection>,
) -> AppResult<(StatusCode, Json<ApiResponse<Item>>)> {
    let Json(input) = body.map_err(|r| map_json_rejection(r, CREATE_FAILED))?;
    let new_item = NewItem::try_from(input)?;

    let item = state
        .store
        .write()
        .await
        .create(&tenant_id, new_item)
        .ok_or_else(|| AppError::OperationFailed {
            message: CREATE_FAILED,
            detail: "item id space exhausted".to_string(),
        })?;

    tracing::info!(tenant_id = %tenant_id, item_id = item.id, "Item created");
    Ok((StatusCode::CREATED, Json(ApiResponse::data(item))))
}

/// GET /api/{tenant_id}/items/{item_id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(path): Path<ItemPath>,
) -> AppResult<Json<ApiResponse<Item>>> {
    let id = parse_item_id(&path.item_id)?;

    let item = state
        .store
        .read()
        .await
        .get_by_id(&path.tenant_id, id)
        .cloned()
        .ok_or_else(|| item_not_found(id))?;

    Ok(Json(ApiResponse::data(item)))
}

/// PUT|PATCH /api/{tenant_id}/items/{item_id}
///
/// Only fields present in the body are applied. `memo` and `imageUrl`
/// accept `null` to clear the stored value.
pub async fn update(
    State(state): State<AppState>,
    Path(path): Path<ItemPath>,
    body: Result<Json<UpdateItem>, JsonRejection>,
) -> AppResult<Json<ApiResponse<Item>>> {
    let id = parse_item_id(&path.item_id)?;
    let Json(input) = body.map_err(|r| map_json_rejection(r, UPDATE_FAILED))?;
    let patch = ItemPatch::try_from(input)?;

    let item = state
        .store
        .write()
        .await
        .update(&path.tenant_id, id, patch)
        .ok_or_else(|| item_not_found(id))?;

    tracing::info!(tenant_id = %path.tenant_id, item_id = id, "Item updated");
    Ok(Json(ApiResponse::data(item)))
}

/// DELETE /api/{tenant_id}/items/{item_id}
pub async fn delete(
    State(state): State<AppState>,
    Path(path): Path<ItemPath>,
) -> AppResult<Json<ApiResponse<()>>> {
    let id = parse_item_id(&path.item_id)?;

    let deleted = state.store.write().await.delete(&path.tenant_id, id);
    if !deleted {
        return Err(item_not_found(id));
    }

    tracing::info!(tenant_id = %path.tenant_id, item_id = id, "Item deleted");
    Ok(Json(ApiResponse::message(format!(
        "Item {id} deleted successfully"
    ))))
}
