//! Dataset list endpoint.

use anyhow::Context;
use common::{dataset::RawDataset, discovery_result::DatasetListResponse, remote_query::RemoteQuery};
use serde::Deserialize;

use crate::marketplace_utils::marketplace_client::{MarketplaceClient, get_marketplace_client};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DatasetListWire {
    #[serde(default)]
    items: Vec<RawDataset>,
    #[serde(default)]
    total: Option<u64>,
    #[serde(default)]
    page_size: Option<u32>,
}

pub async fn list_datasets(query: RemoteQuery) -> anyhow::Result<DatasetListResponse> {
    let client = get_marketplace_client()?;
    fetch_dataset_list(&client, query).await
}

pub async fn fetch_dataset_list(client: &MarketplaceClient, query: RemoteQuery) -> anyhow::Result<DatasetListResponse> {
    let request_key = query.request_key();
    let t0 = std::time::Instant::now();
    let wire = client
        .get_json::<DatasetListWire>("datasets", &query.query_pairs())
        .await
        .with_context(|| format!("listing datasets for {request_key}"))?;
    let dt_ms = t0.elapsed().as_millis() as u64;
    tracing::info!(%request_key, items = wire.items.len(), total = ?wire.total, dt_ms, "dataset list fetched");
    Ok(into_response(query, wire))
}

/// Attach the answered query and fill in what the upstream left out.
fn into_response(query: RemoteQuery, wire: DatasetListWire) -> DatasetListResponse {
    let page_size = wire.page_size.filter(|p| *p > 0).unwrap_or(query.page_size);
    let total = wire.total.unwrap_or(wire.items.len() as u64);
    DatasetListResponse {
        query,
        items: wire.items,
        total,
        page_size,
    }
}
