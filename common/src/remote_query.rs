//! Projection of the filter state into the dataset list request.

use serde::{Deserialize, Serialize};

use crate::category::CategoryId;
use crate::filter_state::{Currency, FilterState, PricingType, SortOption};

/// Backend request parameters derived from a [`FilterState`].
///
/// Omitted fields are `None` and are left out of the serialized form, so the
/// backend can tell "no filter" from "filter on the empty string". Licenses
/// have no server-side equivalent and are never part of this type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_paid: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_price: Option<String>,
    pub currency: Currency,
    pub sort: String,
    pub page: u32,
    pub page_size: u32,
}

/// Backend sort token for a sort option.
pub fn sort_token(sort: SortOption) -> &'static str {
    match sort {
        SortOption::Relevance => "relevance",
        SortOption::Newest => "createdAt:desc",
        SortOption::Oldest => "createdAt:asc",
        SortOption::PriceLow => "price:asc",
        SortOption::PriceHigh => "price:desc",
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() { None } else { Some(value.to_string()) }
}

/// Derive the request for the current filter state.
pub fn project(state: &FilterState) -> RemoteQuery {
    RemoteQuery {
        q: non_empty(&state.search),
        category_id: state.category.clone(),
        is_paid: match state.pricing_type {
            PricingType::All => None,
            PricingType::Free => Some(false),
            PricingType::Paid => Some(true),
        },
        min_price: non_empty(&state.price_range.min),
        max_price: non_empty(&state.price_range.max),
        currency: state.currency,
        sort: sort_token(state.sort_order).to_string(),
        page: state.page,
        page_size: state.page_size,
    }
}

impl RemoteQuery {
    /// Query string pairs in a fixed order, omitted fields skipped.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(q) = &self.q {
            pairs.push(("q", q.clone()));
        }
        if let Some(category_id) = &self.category_id {
            pairs.push(("categoryId", category_id.to_string()));
        }
        if let Some(is_paid) = self.is_paid {
            pairs.push(("isPaid", is_paid.to_string()));
        }
        if let Some(min_price) = &self.min_price {
            pairs.push(("minPrice", min_price.clone()));
        }
        if let Some(max_price) = &self.max_price {
            pairs.push(("maxPrice", max_price.clone()));
        }
        pairs.push(("currency", self.currency.as_str().to_string()));
        pairs.push(("sort", self.sort.clone()));
        pairs.push(("page", self.page.to_string()));
        pairs.push(("pageSize", self.page_size.to_string()));
        pairs
    }

    /// Stable identity of this request, used to match responses to queries in logs.
    pub fn request_key(&self) -> String {
        self.query_pairs()
            .into_iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&")
    }
}


#[cfg(test)]
mod tests {
    use std::collections::{BTreeSet, HashSet};

    use super::*;
    use crate::filter_state::{FilterPatch, FilterStore, License, PriceRange};

    #[test]
    fn sort_mapping_is_total_and_unique() {
        let tokens = SortOption::ALL.iter().map(|s| sort_token(*s)).collect::<HashSet<_>>();
        assert_eq!(tokens.len(), SortOption::ALL.len());
        assert!(tokens.iter().all(|t| !t.is_empty()));
        assert_eq!(sort_token(SortOption::PriceHigh), "price:desc");
        assert_eq!(sort_token(SortOption::Newest), "createdAt:desc");
    }

    #[test]
    fn pricing_type_projects_to_is_paid() {
        let mut state = FilterState::default();
        let json = serde_json::to_value(project(&state)).unwrap();
        assert!(json.get("isPaid").is_none());

        state.pricing_type = PricingType::Free;
        assert_eq!(project(&state).is_paid, Some(false));

        state.pricing_type = PricingType::Paid;
        assert_eq!(project(&state).is_paid, Some(true));
    }

    #[test]
    fn empty_values_are_omitted_not_empty_strings() {
        let query = project(&FilterState::default());
        assert_eq!(query.q, None);
        assert_eq!(query.category_id, None);
        assert_eq!(query.min_price, None);
        assert_eq!(query.max_price, None);
        let json = serde_json::to_value(&query).unwrap();
        let keys = json.as_object().unwrap().keys().cloned().collect::<BTreeSet<_>>();
        assert_eq!(keys, BTreeSet::from(["currency", "sort", "page", "pageSize"].map(String::from)));
        assert_eq!(json["currency"], "USD");
    }

    #[test]
    fn licenses_are_never_projected() {
        let mut store = FilterStore::new();
        store.toggle_license(License::Commercial);
        let with_license = project(store.state());
        assert_eq!(with_license, project(&FilterState::default()));
        assert!(!with_license.request_key().contains("icense"));
    }

    #[test]
    fn price_bounds_pass_through() {
        let mut store = FilterStore::new();
        store.update_filter(FilterPatch::default().pricing_type(PricingType::Paid).price_range(PriceRange::new("10", "")));
        let query = project(store.state());
        assert_eq!(query.min_price.as_deref(), Some("10"));
        assert_eq!(query.max_price, None);
    }

    #[test]
    fn query_pairs_and_key() {
        let mut store = FilterStore::new();
        store.update_filter(FilterPatch::default().search("grid").category(Some("energy".into())));
        let query = project(store.state());
        assert_eq!(
            query.request_key(),
            "q=grid&categoryId=energy&currency=USD&sort=relevance&page=1&pageSize=12"
        );
    }

    #[test]
    fn deserializes_with_missing_optionals() {
        let query: RemoteQuery =
            serde_json::from_str(r#"{"currency": "EUR", "sort": "price:asc", "page": 2, "pageSize": 12}"#).unwrap();
        assert_eq!(query.currency, Currency::Eur);
        assert_eq!(query.q, None);
        assert_eq!(query.page, 2);
    }
}
