//! Filter state store for dataset discovery.
//!
//! [`FilterStore`] owns the canonical [`FilterState`] and is the only way to
//! change it. Every mutation goes through [`FilterStore::update_filter`], which
//! also applies the page reset: when `search`, `category`, `pricing_type`,
//! `price_range`, `licenses` or `sort_order` change, `page` goes back to 1 in
//! the same update. Changing only `page`, `page_size` or `currency` never
//! resets the page.

use std::collections::BTreeSet;
use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::category::CategoryId;
use crate::discovery_const::DEFAULT_PAGE_SIZE;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} option: {value:?}")]
pub struct FilterParseError {
    pub kind: &'static str,
    pub value: String,
}

impl FilterParseError {
    fn new(kind: &'static str, value: &str) -> Self {
        Self { kind, value: value.to_string() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PricingType {
    #[default]
    All,
    Free,
    Paid,
}

impl PricingType {
    pub const ALL: [PricingType; 3] = [PricingType::All, PricingType::Free, PricingType::Paid];

    pub fn as_str(&self) -> &'static str {
        match self {
            PricingType::All => "all",
            PricingType::Free => "free",
            PricingType::Paid => "paid",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PricingType::All => "All",
            PricingType::Free => "Free",
            PricingType::Paid => "Paid",
        }
    }
}

impl FromStr for PricingType {
    type Err = FilterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PricingType::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| FilterParseError::new("pricing", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Usd,
    Eur,
    Gbp,
}

impl Currency {
    pub const ALL: [Currency; 3] = [Currency::Usd, Currency::Eur, Currency::Gbp];

    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
        }
    }
}

impl Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Currency {
    type Err = FilterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Currency::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| FilterParseError::new("currency", s))
    }
}

/// License kinds the discovery page can filter on. Applied client-side only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum License {
    #[serde(rename = "Open Data")]
    OpenData,
    #[serde(rename = "Commercial")]
    Commercial,
}

impl License {
    pub const ALL: [License; 2] = [License::OpenData, License::Commercial];

    pub fn label(&self) -> &'static str {
        match self {
            License::OpenData => "Open Data",
            License::Commercial => "Commercial",
        }
    }
}

impl Display for License {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for License {
    type Err = FilterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        License::ALL
            .into_iter()
            .find(|l| l.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| FilterParseError::new("license", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    #[default]
    Relevance,
    Newest,
    Oldest,
    PriceLow,
    PriceHigh,
}

impl SortOption {
    pub const ALL: [SortOption; 5] = [
        SortOption::Relevance,
        SortOption::Newest,
        SortOption::Oldest,
        SortOption::PriceLow,
        SortOption::PriceHigh,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::Relevance => "relevance",
            SortOption::Newest => "newest",
            SortOption::Oldest => "oldest",
            SortOption::PriceLow => "price-low",
            SortOption::PriceHigh => "price-high",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOption::Relevance => "Most relevant",
            SortOption::Newest => "Newest first",
            SortOption::Oldest => "Oldest first",
            SortOption::PriceLow => "Price: low to high",
            SortOption::PriceHigh => "Price: high to low",
        }
    }
}

impl FromStr for SortOption {
    type Err = FilterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortOption::ALL
            .into_iter()
            .find(|o| o.as_str() == s)
            .ok_or_else(|| FilterParseError::new("sort", s))
    }
}

/// Free-form price bounds. Empty string means unset; values are not validated here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PriceRange {
    pub min: String,
    pub max: String,
}

impl PriceRange {
    pub fn new(min: impl Into<String>, max: impl Into<String>) -> Self {
        Self { min: min.into(), max: max.into() }
    }

    pub fn is_empty(&self) -> bool {
        self.min.is_empty() && self.max.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub search: String,
    pub category: Option<CategoryId>,
    pub pricing_type: PricingType,
    pub price_range: PriceRange,
    pub currency: Currency,
    pub licenses: BTreeSet<License>,
    pub sort_order: SortOption,
    pub page: u32,
    pub page_size: u32,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: None,
            pricing_type: PricingType::All,
            price_range: PriceRange::default(),
            currency: Currency::Usd,
            licenses: BTreeSet::new(),
            sort_order: SortOption::Relevance,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl FilterState {
    /// True when a "clear filters" affordance makes sense. Search text and
    /// sort order are not counted as filters.
    pub fn has_active_filters(&self) -> bool {
        self.category.is_some()
            || self.pricing_type != PricingType::All
            || !self.price_range.min.is_empty()
            || !self.price_range.max.is_empty()
            || !self.licenses.is_empty()
    }

    fn differs_in_page_reset_fields(&self, other: &FilterState) -> bool {
        self.search != other.search
            || self.category != other.category
            || self.pricing_type != other.pricing_type
            || self.price_range != other.price_range
            || self.licenses != other.licenses
            || self.sort_order != other.sort_order
    }
}

/// Partial update for [`FilterStore::update_filter`]. Fields left as `None`
/// keep their current value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterPatch {
    pub search: Option<String>,
    pub category: Option<Option<CategoryId>>,
    pub pricing_type: Option<PricingType>,
    pub price_range: Option<PriceRange>,
    pub currency: Option<Currency>,
    pub licenses: Option<BTreeSet<License>>,
    pub sort_order: Option<SortOption>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl FilterPatch {
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn category(mut self, category: Option<CategoryId>) -> Self {
        self.category = Some(category);
        self
    }

    pub fn pricing_type(mut self, pricing_type: PricingType) -> Self {
        self.pricing_type = Some(pricing_type);
        self
    }

    pub fn price_range(mut self, price_range: PriceRange) -> Self {
        self.price_range = Some(price_range);
        self
    }

    pub fn min_price(self, min: impl Into<String>, current: &FilterState) -> Self {
        let max = current.price_range.max.clone();
        self.price_range(PriceRange::new(min, max))
    }

    pub fn max_price(self, max: impl Into<String>, current: &FilterState) -> Self {
        let min = current.price_range.min.clone();
        self.price_range(PriceRange::new(min, max))
    }

    pub fn currency(mut self, currency: Currency) -> Self {
        self.currency = Some(currency);
        self
    }

    pub fn licenses(mut self, licenses: BTreeSet<License>) -> Self {
        self.licenses = Some(licenses);
        self
    }

    pub fn sort_order(mut self, sort_order: SortOption) -> Self {
        self.sort_order = Some(sort_order);
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    fn merge_into(self, state: &mut FilterState) {
        if let Some(search) = self.search {
            state.search = search;
        }
        if let Some(category) = self.category {
            state.category = category;
        }
        if let Some(pricing_type) = self.pricing_type {
            state.pricing_type = pricing_type;
        }
        if let Some(price_range) = self.price_range {
            state.price_range = price_range;
        }
        if let Some(currency) = self.currency {
            state.currency = currency;
        }
        if let Some(licenses) = self.licenses {
            state.licenses = licenses;
        }
        if let Some(sort_order) = self.sort_order {
            state.sort_order = sort_order;
        }
        if let Some(page) = self.page {
            state.page = page.max(1);
        }
        if let Some(page_size) = self.page_size {
            state.page_size = page_size.max(1);
        }
    }
}

/// Sole owner and mutator of the discovery [`FilterState`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterStore {
    state: FilterState,
}

impl FilterStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn has_active_filters(&self) -> bool {
        self.state.has_active_filters()
    }

    /// Shallow-merge `patch` into the state.
    ///
    /// If a page-reset field differs afterwards, `page` is 1 when this returns,
    /// even if the patch also named a page.
    pub fn update_filter(&mut self, patch: FilterPatch) {
        let mut next = self.state.clone();
        patch.merge_into(&mut next);
        if next.differs_in_page_reset_fields(&self.state) && next.page != 1 {
            tracing::debug!(previous_page = next.page, "filter change, resetting page to 1");
            next.page = 1;
        }
        self.state = next;
    }

    pub fn toggle_license(&mut self, license: License) {
        let mut licenses = self.state.licenses.clone();
        if !licenses.remove(&license) {
            licenses.insert(license);
        }
        self.update_filter(FilterPatch::default().licenses(licenses));
    }

    /// Textual variant of [`Self::toggle_license`]; unknown labels leave the state untouched.
    pub fn toggle_license_label(&mut self, label: &str) -> Result<(), FilterParseError> {
        let license = label.parse::<License>()?;
        self.toggle_license(license);
        Ok(())
    }

    /// Move to `page`, clamped into `[1, total_pages]`. Never triggers the page reset.
    pub fn go_to_page(&mut self, page: u32, total_pages: u32) {
        let page = page.clamp(1, total_pages.max(1));
        self.update_filter(FilterPatch::default().page(page));
    }

    /// Restore every field to its default, search and sort included.
    pub fn clear_filters(&mut self) {
        self.state = FilterState::default();
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn store_on_page(page: u32) -> FilterStore {
        let mut store = FilterStore::new();
        store.update_filter(FilterPatch::default().page(page));
        assert_eq!(store.state().page, page);
        store
    }

    #[test]
    fn category_change_resets_page() {
        let mut store = store_on_page(5);
        store.update_filter(FilterPatch::default().category(Some("finance".into())));
        assert_eq!(store.state().page, 1);
        assert_eq!(store.state().category, Some(CategoryId::from("finance")));
    }

    #[test]
    fn page_change_keeps_other_fields() {
        let mut store = FilterStore::new();
        store.update_filter(FilterPatch::default().search("x"));
        store.update_filter(FilterPatch::default().page(3));
        assert_eq!(store.state().page, 3);
        assert_eq!(store.state().search, "x");
    }

    #[test]
    fn currency_and_page_size_do_not_reset_page() {
        let mut store = store_on_page(4);
        store.update_filter(FilterPatch::default().currency(Currency::Gbp));
        assert_eq!(store.state().page, 4);
        store.update_filter(FilterPatch::default().page_size(24));
        assert_eq!(store.state().page, 4);
        assert_eq!(store.state().page_size, 24);
    }

    #[test]
    fn setting_same_value_does_not_reset_page() {
        let mut store = FilterStore::new();
        store.update_filter(FilterPatch::default().search("grid"));
        store.update_filter(FilterPatch::default().page(3));
        store.update_filter(FilterPatch::default().search("grid"));
        assert_eq!(store.state().page, 3);
    }

    #[test]
    fn reset_wins_over_page_in_same_patch() {
        let mut store = store_on_page(2);
        store.update_filter(FilterPatch::default().sort_order(SortOption::Newest).page(4));
        assert_eq!(store.state().page, 1);
    }

    #[test]
    fn zero_page_and_page_size_are_clamped() {
        let mut store = FilterStore::new();
        store.update_filter(FilterPatch::default().page(0).page_size(0));
        assert_eq!(store.state().page, 1);
        assert_eq!(store.state().page_size, 1);
    }

    #[test]
    fn toggle_license_adds_then_removes() {
        let mut store = store_on_page(3);
        store.toggle_license(License::OpenData);
        assert!(store.state().licenses.contains(&License::OpenData));
        assert_eq!(store.state().page, 1);
        store.toggle_license(License::OpenData);
        assert!(store.state().licenses.is_empty());
    }

    #[test]
    fn toggle_unknown_license_label_is_noop() {
        let mut store = store_on_page(3);
        let before = store.clone();
        assert!(store.toggle_license_label("Public Domain").is_err());
        assert_eq!(store, before);
        store.toggle_license_label("commercial").unwrap();
        assert!(store.state().licenses.contains(&License::Commercial));
    }

    #[test]
    fn go_to_page_clamps() {
        let mut store = FilterStore::new();
        store.go_to_page(9, 5);
        assert_eq!(store.state().page, 5);
        store.go_to_page(0, 5);
        assert_eq!(store.state().page, 1);
        store.go_to_page(3, 0);
        assert_eq!(store.state().page, 1);
    }

    #[test]
    fn price_bound_helpers_keep_the_other_bound() {
        let mut store = FilterStore::new();
        let patch = FilterPatch::default().min_price("10", store.state());
        store.update_filter(patch);
        let patch = FilterPatch::default().max_price("50", store.state());
        store.update_filter(patch);
        assert_eq!(store.state().price_range, PriceRange::new("10", "50"));
    }

    #[test]
    fn has_active_filters_ignores_search_and_sort() {
        let mut store = FilterStore::new();
        assert!(!store.has_active_filters());
        store.update_filter(FilterPatch::default().search("grid").sort_order(SortOption::PriceHigh));
        assert!(!store.has_active_filters());
        store.update_filter(FilterPatch::default().pricing_type(PricingType::Paid));
        assert!(store.has_active_filters());
    }

    #[test]
    fn has_active_filters_counts_each_dimension() {
        let cases = [
            FilterPatch::default().category(Some("energy".into())),
            FilterPatch::default().pricing_type(PricingType::Free),
            FilterPatch::default().price_range(PriceRange::new("1", "")),
            FilterPatch::default().price_range(PriceRange::new("", "9")),
            FilterPatch::default().licenses(BTreeSet::from([License::Commercial])),
        ];
        for patch in cases {
            let mut store = FilterStore::new();
            store.update_filter(patch.clone());
            assert!(store.has_active_filters(), "{patch:?}");
        }
    }

    #[test]
    fn parse_options() {
        assert_eq!("price-high".parse::<SortOption>(), Ok(SortOption::PriceHigh));
        assert_eq!("paid".parse::<PricingType>(), Ok(PricingType::Paid));
        assert_eq!("eur".parse::<Currency>(), Ok(Currency::Eur));
        assert_eq!("Open Data".parse::<License>(), Ok(License::OpenData));
        let err = "cheapest".parse::<SortOption>().unwrap_err();
        assert_eq!(err.to_string(), "unknown sort option: \"cheapest\"");
    }

    #[test]
    fn serde_names_match_the_wire_labels() {
        assert_eq!(serde_json::to_string(&License::OpenData).unwrap(), "\"Open Data\"");
        assert_eq!(serde_json::to_string(&Currency::Gbp).unwrap(), "\"GBP\"");
        assert_eq!(serde_json::to_string(&SortOption::PriceLow).unwrap(), "\"price-low\"");
    }
}
