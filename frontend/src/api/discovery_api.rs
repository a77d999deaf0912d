//! Client API calls for discovery endpoints.

use common::{category::CategoryListResponse, discovery_result::DatasetListResponse, remote_query::RemoteQuery};
use dioxus::prelude::*;


#[server]
pub async fn list_datasets(query: RemoteQuery) -> Result<DatasetListResponse, ServerFnError> {
    let x = backend::api::list_datasets(query).await;
    x.map_err(|e| ServerFnError::ServerError { message: format!("{e:#}"), code: 500, details: None })
}

#[server]
pub async fn list_categories(page_size: u32) -> Result<CategoryListResponse, ServerFnError> {
    let x = backend::api::list_categories(page_size).await;
    x.map_err(|e| ServerFnError::ServerError { message: format!("{e:#}"), code: 500, details: None })
}
