//! In-process stand-in for the marketplace REST API, for tests.

use std::{collections::HashMap, time::Duration};

use axum::{Json, Router, extract::Query, http::StatusCode, routing::get};
use serde_json::{Value, json};

use crate::marketplace_utils::marketplace_client::{MarketplaceClient, MarketplaceConfig};

/// Search text that makes `/datasets` answer 503.
pub const FAILING_SEARCH: &str = "fail";

async fn datasets(Query(params): Query<HashMap<String, String>>) -> Result<Json<Value>, StatusCode> {
    if params.get("q").map(String::as_str) == Some(FAILING_SEARCH) {
        return Err(StatusCode::SERVICE_UNAVAILABLE);
    }
    // the received query goes back in the item so callers can see what was sent
    Ok(Json(json!({
        "items": [{
            "id": "a",
            "title": params.get("q").cloned().unwrap_or_default(),
            "categoryId": params.get("categoryId").cloned(),
            "isPaid": params.get("isPaid").cloned(),
        }],
        "total": 21,
        "pageSize": params.get("pageSize").and_then(|p| p.parse::<u32>().ok()).unwrap_or(0),
    })))
}

async fn categories() -> Json<Value> {
    Json(json!({"items": [{"id": "energy", "name": "Energy"}, {"id": 7, "name": "Finance"}]}))
}

fn client_for(base_url: String) -> MarketplaceClient {
    MarketplaceClient::new(MarketplaceConfig { base_url, token: None, timeout: Duration::from_secs(5) })
        .unwrap()
}

/// Serve the fake on an ephemeral port and return a client pointed at it.
pub async fn spawn() -> MarketplaceClient {
    let app = Router::new()
        .route("/api/datasets", get(datasets))
        .route("/api/categories", get(categories));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    client_for(format!("http://{addr}/api"))
}

/// A client whose base URL has nothing listening behind it.
pub async fn unreachable() -> MarketplaceClient {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    client_for(format!("http://{addr}/api"))
}
