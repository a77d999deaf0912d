use axum::{Json, extract::State, http::StatusCode, response::{IntoResponse, Response}};
use serde_json::json;

use crate::api::fetch_category_list;
use crate::marketplace_utils::marketplace_client::{MarketplaceClient, get_marketplace_client};

async fn _health(client: Option<MarketplaceClient>) -> anyhow::Result<()> {
    let client = match client {
        Some(client) => client,
        None => get_marketplace_client()?,
    };
    fetch_category_list(&client, 1).await?;
    Ok(())
}

fn into_http_response(result: anyhow::Result<()>) -> Response {
    match result {
        Ok(()) => (StatusCode::OK, Json(json!({"status": "ok"}))).into_response(),
        Err(e) => {
            tracing::warn!("health: marketplace API unavailable: {:#}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({"status": "unavailable", "error": format!("{:#}", e)})),
            )
                .into_response()
        }
    }
}

/// `GET /_health`: reports whether the marketplace API answers.
pub async fn health() -> Response {
    into_http_response(_health(None).await)
}

/// Same as [`health`] with the marketplace client taken from router state.
pub async fn health_with_client(State(client): State<MarketplaceClient>) -> Response {
    into_http_response(_health(Some(client)).await)
}


#[cfg(test)]
mod tests {
    use axum::{Router, body::{Body, to_bytes}, http::Request, routing::get};
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::marketplace_utils::fake_marketplace;

    async fn check(client: MarketplaceClient) -> (StatusCode, Value) {
        let app = Router::new().route("/_health", get(health_with_client)).with_state(client);
        let response = app
            .oneshot(Request::builder().uri("/_health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn healthy_when_categories_answer() {
        let (status, body) = check(fake_marketplace::spawn().await).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn unavailable_when_marketplace_is_down() {
        let (status, body) = check(fake_marketplace::unreachable().await).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["status"], "unavailable");
        assert!(body["error"].as_str().unwrap().starts_with("listing categories"), "{body}");
    }
}
