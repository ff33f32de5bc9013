pub mod health;
pub mod items;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /{tenant_id}/items                     list, create
/// /{tenant_id}/items/{item_id}           get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(items::router())
}
