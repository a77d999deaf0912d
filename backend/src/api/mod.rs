//! Marketplace API calls used by the discovery page.

mod list_datasets;
pub use list_datasets::{fetch_dataset_list, list_datasets};

mod list_categories;
pub use list_categories::{fetch_category_list, list_categories};
