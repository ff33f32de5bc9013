//! HTTP-level integration tests for the tenant-scoped item endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::{Method, StatusCode};
use common::{body_json, delete, get, patch_json, post_json, put_json, send};
use serde_json::json;
use todo_api::state::AppState;
use todo_store::models::item::Item;
use todo_store::ItemStore;

const ITEMS: &str = "/api/defaultTenant/items";

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_list_returns_envelope_with_page_info() {
    let app = common::build_seeded_app();
    let response = get(app, ITEMS).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert!(json.get("message").is_none());

    let items = json["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0]["name"], "Learn Next.js");
    assert_eq!(items[1]["isCompleted"], true);
    assert_eq!(items[2]["imageUrl"], serde_json::Value::Null);
    assert_eq!(json["data"]["page"]["nextCursor"], 3);
    assert_eq!(json["data"]["page"]["hasNext"], false);
}

#[tokio::test]
async fn test_list_pages_with_cursor_and_size() {
    let state = common::test_state();
    for name in ["one", "two", "three"] {
        post_json(
            common::build_test_app(state.clone()),
            "/api/t1/items",
            json!({ "name": name }),
        )
        .await;
    }

    let first = body_json(get(common::build_test_app(state.clone()), "/api/t1/items?size=2").await).await;
    let ids: Vec<i64> = first["data"]["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(first["data"]["page"]["nextCursor"], 2);
    assert_eq!(first["data"]["page"]["hasNext"], true);

    let second =
        body_json(get(common::build_test_app(state), "/api/t1/items?cursor=2&size=2").await).await;
    let items = second["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], 3);
    assert_eq!(second["data"]["page"]["nextCursor"], 3);
    assert_eq!(second["data"]["page"]["hasNext"], false);
}

#[tokio::test]
async fn test_list_empty_tenant_has_null_cursor() {
    let app = common::build_seeded_app();
    let json = body_json(get(app, "/api/nobody/items").await).await;

    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["items"].as_array().unwrap().len(), 0);
    assert_eq!(json["data"]["page"]["nextCursor"], serde_json::Value::Null);
    assert_eq!(json["data"]["page"]["hasNext"], false);
}

#[tokio::test]
async fn test_list_unknown_cursor_starts_from_beginning() {
    let app = common::build_seeded_app();
    let json = body_json(get(app, &format!("{ITEMS}?cursor=999&size=1")).await).await;

    assert_eq!(json["data"]["items"][0]["id"], 1);
    assert_eq!(json["data"]["page"]["hasNext"], true);
}

#[tokio::test]
async fn test_list_non_numeric_cursor_starts_from_beginning() {
    let app = common::build_seeded_app();
    let response = get(app, &format!("{ITEMS}?cursor=abc&size=2")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let ids: Vec<i64> = json["data"]["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(json["data"]["page"]["hasNext"], true);
}

#[tokio::test]
async fn test_list_zero_size_returns_empty_page() {
    let app = common::build_seeded_app();
    let response = get(app, &format!("{ITEMS}?size=0")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["items"].as_array().unwrap().len(), 0);
    assert_eq!(json["data"]["page"]["nextCursor"], serde_json::Value::Null);
    assert_eq!(json["data"]["page"]["hasNext"], true);
}

#[tokio::test]
async fn test_list_rejects_malformed_size() {
    let app = common::build_seeded_app();
    let response = get(app, &format!("{ITEMS}?size=zero")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert!(json["message"].as_str().unwrap().contains("size"));
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_create_item_returns_201_with_defaults() {
    let app = common::build_seeded_app();
    let response = post_json(app, ITEMS, json!({ "name": "Buy milk" })).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    let item = &json["data"];
    assert_eq!(item["id"], 4);
    assert_eq!(item["tenantId"], "defaultTenant");
    assert_eq!(item["name"], "Buy milk");
    assert_eq!(item["memo"], serde_json::Value::Null);
    assert_eq!(item["imageUrl"], serde_json::Value::Null);
    assert_eq!(item["isCompleted"], false);
}

#[tokio::test]
async fn test_create_item_accepts_optional_fields() {
    let app = common::build_test_app(common::test_state());
    let response = post_json(
        app,
        "/api/t1/items",
        json!({ "name": "Walk dog", "memo": "park", "imageUrl": "dog.png", "isCompleted": true }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let item = body_json(response).await["data"].clone();
    assert_eq!(item["memo"], "park");
    assert_eq!(item["imageUrl"], "dog.png");
    assert_eq!(item["isCompleted"], true);
}

#[tokio::test]
async fn test_create_item_without_name_returns_400() {
    let app = common::build_seeded_app();
    let response = post_json(app, ITEMS, json!({ "memo": "no title" })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(
        json["message"],
        "Invalid or missing name. Name must be a non-empty string."
    );
}

#[tokio::test]
async fn test_create_item_with_empty_name_returns_400() {
    let app = common::build_seeded_app();
    let response = post_json(app, ITEMS, json!({ "name": "" })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_item_with_numeric_name_returns_400() {
    let app = common::build_seeded_app();
    let response = post_json(app, ITEMS, json!({ "name": 12 })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["success"], false);
}

#[tokio::test]
async fn test_create_item_with_malformed_json_returns_500() {
    let app = common::build_seeded_app();
    let response = send(app, Method::POST, ITEMS, Some("{\"name\": ".to_string())).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Failed to create item");
}

#[tokio::test]
async fn test_create_item_when_ids_are_exhausted_returns_500() {
    let last = Item {
        id: i64::MAX,
        tenant_id: "defaultTenant".to_string(),
        name: "last".to_string(),
        memo: None,
        image_url: None,
        is_completed: false,
    };
    let state = AppState::new(ItemStore::with_items(vec![last]), common::test_config());

    let response = post_json(
        common::build_test_app(state),
        ITEMS,
        json!({ "name": "one too many" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Failed to create item");
}

#[tokio::test]
async fn test_ids_are_unique_across_tenants() {
    let state = common::test_state();
    let a = body_json(
        post_json(common::build_test_app(state.clone()), "/api/a/items", json!({"name": "x"})).await,
    )
    .await;
    let b = body_json(
        post_json(common::build_test_app(state), "/api/b/items", json!({"name": "x"})).await,
    )
    .await;
    assert_ne!(a["data"]["id"], b["data"]["id"]);
}

// ---------------------------------------------------------------------------
// Get
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_get_item_by_id() {
    let app = common::build_seeded_app();
    let response = get(app, &format!("{ITEMS}/2")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["name"], "Build a todo app");
    assert_eq!(json["data"]["memo"], "Apply what I learned");
}

#[tokio::test]
async fn test_get_nonexistent_item_returns_404() {
    let app = common::build_seeded_app();
    let response = get(app, &format!("{ITEMS}/999")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Item not found");
}

#[tokio::test]
async fn test_get_item_of_other_tenant_returns_404() {
    let app = common::build_seeded_app();
    let response = get(app, "/api/intruder/items/1").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert!(json.get("data").is_none());
}

#[tokio::test]
async fn test_get_non_numeric_id_returns_400() {
    let app = common::build_seeded_app();
    let response = get(app, &format!("{ITEMS}/abc")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Invalid itemId. Must be a number.");
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_update_completion_keeps_other_fields() {
    let app = common::build_seeded_app();
    let response = put_json(app, &format!("{ITEMS}/1"), json!({ "isCompleted": true })).await;
    assert_eq!(response.status(), StatusCode::OK);

    let item = body_json(response).await["data"].clone();
    assert_eq!(item["isCompleted"], true);
    assert_eq!(item["name"], "Learn Next.js");
    assert_eq!(item["memo"], "Finish the official tutorial");
}

#[tokio::test]
async fn test_update_null_clears_and_omission_preserves() {
    let state = common::test_state();
    post_json(
        common::build_test_app(state.clone()),
        "/api/t1/items",
        json!({ "name": "pic", "memo": "x", "imageUrl": "a.png" }),
    )
    .await;

    let response = patch_json(
        common::build_test_app(state.clone()),
        "/api/t1/items/1",
        json!({ "name": "y", "imageUrl": null }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let item = body_json(get(common::build_test_app(state), "/api/t1/items/1").await).await["data"]
        .clone();
    assert_eq!(item["name"], "y");
    assert_eq!(item["memo"], "x");
    assert_eq!(item["imageUrl"], serde_json::Value::Null);
}

#[tokio::test]
async fn test_update_ignores_id_and_tenant_in_body() {
    let app = common::build_seeded_app();
    let response = put_json(
        app,
        &format!("{ITEMS}/3"),
        json!({ "id": 77, "tenantId": "elsewhere", "name": "renamed" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let item = body_json(response).await["data"].clone();
    assert_eq!(item["id"], 3);
    assert_eq!(item["tenantId"], "defaultTenant");
    assert_eq!(item["name"], "renamed");
}

#[tokio::test]
async fn test_update_with_invalid_fields_returns_400() {
    for body in [
        json!({ "name": "" }),
        json!({ "name": null }),
        json!({ "name": 5 }),
        json!({ "memo": 1 }),
        json!({ "imageUrl": ["a"] }),
        json!({ "isCompleted": "yes" }),
    ] {
        let app = common::build_seeded_app();
        let response = put_json(app, &format!("{ITEMS}/1"), body.clone()).await;
        assert_eq!(
            response.status(),
            StatusCode::BAD_REQUEST,
            "body {body} should be rejected"
        );
        assert_eq!(body_json(response).await["success"], false);
    }
}

#[tokio::test]
async fn test_update_nonexistent_item_returns_404() {
    let app = common::build_seeded_app();
    let response = put_json(app, &format!("{ITEMS}/404"), json!({ "name": "ghost" })).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_item_of_other_tenant_returns_404() {
    let state = common::seeded_state();
    let response = put_json(
        common::build_test_app(state.clone()),
        "/api/intruder/items/1",
        json!({ "name": "hijacked" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let item = body_json(get(common::build_test_app(state), &format!("{ITEMS}/1")).await).await;
    assert_eq!(item["data"]["name"], "Learn Next.js");
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_delete_item_then_get_returns_404() {
    let state = common::seeded_state();
    let response = delete(common::build_test_app(state.clone()), &format!("{ITEMS}/2")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Item 2 deleted successfully");
    assert!(json.get("data").is_none());

    let response = get(common::build_test_app(state), &format!("{ITEMS}/2")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_nonexistent_item_returns_404() {
    let state = common::seeded_state();
    let response = delete(common::build_test_app(state.clone()), &format!("{ITEMS}/42")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(get(common::build_test_app(state), "/health").await).await;
    assert_eq!(json["item_count"], 3);
}

#[tokio::test]
async fn test_deleted_id_is_not_reused() {
    let state = common::seeded_state();
    delete(common::build_test_app(state.clone()), &format!("{ITEMS}/3")).await;

    let json = body_json(
        post_json(common::build_test_app(state), ITEMS, json!({ "name": "next" })).await,
    )
    .await;
    assert_eq!(json["data"]["id"], 4);
}
