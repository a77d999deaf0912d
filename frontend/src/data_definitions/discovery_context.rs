//! Context shared by the discovery page components.

use common::{
    category::CategoryLookup,
    discovery_result::DiscoveryView,
    filter_state::{FilterPatch, FilterStore, License},
};
use dioxus::prelude::*;

/// Read access to the filter store plus the callbacks that mutate it.
///
/// Components never write the store directly; every change goes through these
/// callbacks so the page reset is applied in the same update.
#[derive(Clone, Copy)]
pub struct DiscoveryContext {
    pub filters: ReadSignal<FilterStore>,
    pub categories: ReadSignal<CategoryLookup>,
    pub view: ReadSignal<DiscoveryView>,
    pub update_filter: Callback<FilterPatch>,
    pub toggle_license: Callback<License>,
    pub go_to_page: Callback<u32>,
    pub clear_filters: Callback<()>,
}
