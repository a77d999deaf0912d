use axum::{Json, body::Body, extract::{Query, State}, http::StatusCode, response::{IntoResponse, Response}};
use common::remote_query::RemoteQuery;
use tracing::info;

use crate::api::fetch_dataset_list;
use crate::marketplace_utils::marketplace_client::{MarketplaceClient, get_marketplace_client};

async fn _datasets_json(client: Option<MarketplaceClient>, query: RemoteQuery) -> anyhow::Result<impl IntoResponse> {
    info!("Dataset list over JSON: {}", query.request_key());
    let client = match client {
        Some(client) => client,
        None => get_marketplace_client()?,
    };
    let response = fetch_dataset_list(&client, query).await?;
    Ok(Json(response))
}

fn into_http_response(result: anyhow::Result<impl IntoResponse>) -> Response {
    match result {
        Ok(response) => response.into_response(),
        Err(e) => {
            tracing::error!("datasets_json: request failed: {:#}", e);
            (StatusCode::BAD_GATEWAY, Body::from(format!("{:#}", e))).into_response()
        }
    }
}

/// `GET /_api/datasets?<RemoteQuery>`: the dataset list for clients outside the web app.
pub async fn datasets_json(Query(query): Query<RemoteQuery>) -> Response {
    into_http_response(_datasets_json(None, query).await)
}

/// Same as [`datasets_json`] with the marketplace client taken from router state.
pub async fn datasets_json_with_client(
    State(client): State<MarketplaceClient>,
    Query(query): Query<RemoteQuery>,
) -> Response {
    into_http_response(_datasets_json(Some(client), query).await)
}
