//! Categories endpoint.

use anyhow::Context;
use common::category::CategoryListResponse;

use crate::marketplace_utils::marketplace_client::{MarketplaceClient, get_marketplace_client};

pub async fn list_categories(page_size: u32) -> anyhow::Result<CategoryListResponse> {
    let client = get_marketplace_client()?;
    fetch_category_list(&client, page_size).await
}

pub async fn fetch_category_list(client: &MarketplaceClient, page_size: u32) -> anyhow::Result<CategoryListResponse> {
    let response = client
        .get_json::<CategoryListResponse>("categories", &[("pageSize", page_size.to_string())])
        .await
        .context("listing categories")?;
    tracing::info!(count = response.items.len(), "categories fetched");
    Ok(response)
}
