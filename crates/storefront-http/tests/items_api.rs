//! End-to-end tests for the catalog client against a local items server.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use storefront_core::{ApiError, CatalogApi, Item, ItemDraft, ItemId};
use storefront_http::{ClientConfig, DefaultCatalogClient};

// ============================================================================
// Test server
// ============================================================================

#[derive(Clone, Default)]
struct Db {
    items: Arc<Mutex<Vec<Item>>>,
}

async fn list(State(db): State<Db>) -> Json<Vec<Item>> {
    Json(db.items.lock().unwrap().clone())
}

async fn create(State(db): State<Db>, Json(draft): Json<ItemDraft>) -> (StatusCode, Json<Item>) {
    let mut items = db.items.lock().unwrap();
    let id = items.iter().map(|i| i.id).max().unwrap_or(0) + 1;
    let item = draft.into_item(id);
    items.push(item.clone());
    (StatusCode::CREATED, Json(item))
}

async fn show(State(db): State<Db>, Path(id): Path<ItemId>) -> Result<Json<Item>, StatusCode> {
    db.items
        .lock()
        .unwrap()
        .iter()
        .find(|i| i.id == id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn remove(State(db): State<Db>, Path(id): Path<ItemId>) -> StatusCode {
    let mut items = db.items.lock().unwrap();
    let before = items.len();
    items.retain(|i| i.id != id);
    if items.len() == before {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::NO_CONTENT
    }
}

async fn broken() -> StatusCode {
    StatusCode::INTERNAL_SERVER_ERROR
}

async fn garbage() -> &'static str {
    "<html>not json</html>"
}

async fn slow() -> Json<Vec<Item>> {
    tokio::time::sleep(Duration::from_secs(5)).await;
    Json(Vec::new())
}

async fn spawn_server(seed: Vec<Item>) -> SocketAddr {
    let db = Db {
        items: Arc::new(Mutex::new(seed)),
    };
    let app = Router::new()
        .route("/items/", get(list).post(create))
        .route("/items/:id", get(show).delete(remove))
        .route("/broken/items/", get(broken).post(broken))
        .route("/garbage/items/", get(garbage))
        .route("/slow/items/", get(slow))
        .with_state(db);

    let listener = tokio::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn client(base: String) -> DefaultCatalogClient {
    DefaultCatalogClient::new(&ClientConfig::new().with_base_url(base)).unwrap()
}

fn seed() -> Vec<Item> {
    vec![
        Item::new(1, "Queen Bed", "300", "img/bed.jpg"),
        Item::new(2, "Floor Lamp", "80", "img/lamp.jpg"),
    ]
}

// ============================================================================
// Tests
// ============================================================================

#[tokio::test]
async fn list_returns_items_in_server_order() {
    let addr = spawn_server(seed()).await;
    let client = client(format!("http://{addr}"));

    let items = client.list_items().await.unwrap();

    assert_eq!(items, seed());
}

#[tokio::test]
async fn create_then_get_then_delete() {
    let addr = spawn_server(seed()).await;
    let client = client(format!("http://{addr}"));

    let created = client
        .create_item(&ItemDraft::new("Wall Mirror", "95", "img/mirror.jpg"))
        .await
        .unwrap();
    assert_eq!(created.id, 3);
    assert_eq!(created.name, "Wall Mirror");

    let fetched = client.get_item(3).await.unwrap();
    assert_eq!(fetched, created);

    client.delete_item(3).await.unwrap();
    let err = client.get_item(3).await.unwrap_err();
    assert_eq!(err, ApiError::NotFound { id: 3 });
}

#[tokio::test]
async fn delete_missing_item_is_not_found() {
    let addr = spawn_server(seed()).await;
    let client = client(format!("http://{addr}"));

    let err = client.delete_item(42).await.unwrap_err();

    assert_eq!(err.to_string(), "Item not found");
    assert_eq!(client.list_items().await.unwrap().len(), 2);
}

#[tokio::test]
async fn server_error_reports_status_code() {
    let addr = spawn_server(seed()).await;
    let client = client(format!("http://{addr}/broken"));

    let err = client.list_items().await.unwrap_err();
    assert_eq!(err, ApiError::Status { status: 500 });

    let err = client
        .create_item(&ItemDraft::new("Lamp", "80", "img/lamp.jpg"))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Request failed with status code 500");
}

#[tokio::test]
async fn non_json_body_is_invalid_response() {
    let addr = spawn_server(seed()).await;
    let client = client(format!("http://{addr}/garbage"));

    let err = client.list_items().await.unwrap_err();

    assert!(matches!(err, ApiError::InvalidResponse { .. }));
}

#[tokio::test]
async fn slow_server_times_out() {
    let addr = spawn_server(seed()).await;
    let config = ClientConfig::new()
        .with_base_url(format!("http://{addr}/slow"))
        .with_timeout(Duration::from_millis(100));
    let client = DefaultCatalogClient::new(&config).unwrap();

    let err = client.list_items().await.unwrap_err();

    assert_eq!(err, ApiError::Timeout { timeout_ms: 100 });
    assert_eq!(err.to_string(), "timeout of 100ms exceeded");
}

#[tokio::test]
async fn unreachable_server_is_network_error() {
    let listener = tokio::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client(format!("http://{addr}")).list_items().await.unwrap_err();

    assert_eq!(err.to_string(), "Network Error");
}
