//! Route definitions for the tenant-scoped item resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::items;
use crate::state::AppState;

/// Item routes, relative to the `/api` mount point.
///
/// ```text
/// GET    /{tenant_id}/items                 -> list
/// POST   /{tenant_id}/items                 -> create
/// GET    /{tenant_id}/items/{item_id}       -> get_by_id
/// PUT    /{tenant_id}/items/{item_id}       -> update
/// PATCH  /{tenant_id}/items/{item_id}       -> update
/// DELETE /{tenant_id}/items/{item_id}       -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{tenant_id}/items", get(items::list).post(items::create))
        .route(
            "/{tenant_id}/items/{item_id}",
            get(items::get_by_id)
                .put(items::update)
                .patch(items::update)
                .delete(items::delete),
        )
}
