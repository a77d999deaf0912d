//! Raw dataset items from the list endpoint and their UI projection.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::category::{CategoryId, CategoryLookup};
use crate::discovery_const::UNKNOWN_LABEL;
use crate::filter_state::{Currency, License};

/// One item of the dataset list response, kept as loose JSON.
///
/// The backend representation changes independently of the discovery page, so
/// nothing is assumed about which keys are present or what type they carry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct RawDataset(pub Value);

impl RawDataset {
    fn at(&self, path: &[&str]) -> Option<&Value> {
        let mut value = &self.0;
        for key in path {
            value = value.get(key)?;
        }
        Some(value)
    }

    fn text(&self, paths: &[&[&str]]) -> Option<String> {
        paths.iter().find_map(|path| match self.at(path)? {
            Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
    }

    fn number(&self, paths: &[&[&str]]) -> Option<f64> {
        paths.iter().find_map(|path| match self.at(path)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        })
        .filter(|n| n.is_finite())
    }

    fn flag(&self, paths: &[&[&str]]) -> Option<bool> {
        paths.iter().find_map(|path| match self.at(path)? {
            Value::Bool(b) => Some(*b),
            Value::String(s) => s.trim().parse::<bool>().ok(),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Pricing {
    Free,
    Paid { amount: Option<f64>, currency: String },
}

impl Display for Pricing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Pricing::Free => write!(f, "Free"),
            Pricing::Paid { amount: Some(amount), currency } => write!(f, "{currency} {amount:.2}"),
            Pricing::Paid { amount: None, .. } => write!(f, "Paid"),
        }
    }
}

/// Quality sub-scores on a 0..=100 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct QualityScores {
    pub completeness: u8,
    pub accuracy: u8,
    pub timeliness: u8,
    pub consistency: u8,
}

impl QualityScores {
    pub fn overall(&self) -> u8 {
        let sum = self.completeness as u32 + self.accuracy as u32 + self.timeliness as u32 + self.consistency as u32;
        (sum / 4) as u8
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Verification {
    pub provider_verified: bool,
    pub dataset_verified: bool,
}

/// Presentation shape of a dataset, independent of the backend representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub id: String,
    pub title: String,
    pub description: String,
    pub provider: String,
    pub category_id: Option<CategoryId>,
    pub category: String,
    pub license: String,
    pub pricing: Pricing,
    pub coverage: String,
    pub update_frequency: String,
    pub quality: QualityScores,
    pub verification: Verification,
    pub rating: f64,
    pub review_count: u64,
}

fn score(value: Option<f64>) -> u8 {
    value.unwrap_or(0.0).clamp(0.0, 100.0).round() as u8
}

impl Dataset {
    /// Build the projection from a raw item. Missing or mistyped fields take
    /// defaults; this never fails.
    ///
    /// The category label comes from the item itself when it carries a name,
    /// otherwise from `categories` by id, otherwise "Unknown".
    pub fn from_raw(raw: &RawDataset, categories: &CategoryLookup, currency: Currency) -> Self {
        let category_id = raw
            .text(&[&["categoryId"], &["category", "id"]])
            .map(CategoryId::from);
        let category = raw
            .text(&[&["category", "name"], &["categoryName"], &["category"]])
            .or_else(|| category_id.as_ref().and_then(|id| categories.name(id)).map(str::to_string))
            .unwrap_or_else(|| UNKNOWN_LABEL.to_string());

        let price = raw.number(&[&["price"], &["pricing", "amount"]]);
        let is_paid = raw
            .flag(&[&["isPaid"], &["pricing", "isPaid"]])
            .unwrap_or(price.is_some_and(|p| p > 0.0));
        let pricing = if is_paid {
            Pricing::Paid {
                amount: price,
                currency: raw
                    .text(&[&["currency"], &["pricing", "currency"]])
                    .unwrap_or_else(|| currency.as_str().to_string()),
            }
        } else {
            Pricing::Free
        };

        Dataset {
            id: raw.text(&[&["id"]]).unwrap_or_default(),
            title: raw.text(&[&["title"], &["name"]]).unwrap_or_else(|| "Untitled dataset".to_string()),
            description: raw.text(&[&["description"]]).unwrap_or_default(),
            provider: raw
                .text(&[&["supplier", "name"], &["supplierName"], &["provider"]])
                .unwrap_or_else(|| UNKNOWN_LABEL.to_string()),
            category_id,
            category,
            license: raw.text(&[&["license"], &["licenseType"]]).unwrap_or_else(|| UNKNOWN_LABEL.to_string()),
            pricing,
            coverage: raw
                .text(&[&["coverage"], &["geographicCoverage"]])
                .unwrap_or_else(|| UNKNOWN_LABEL.to_string()),
            update_frequency: raw.text(&[&["updateFrequency"]]).unwrap_or_else(|| UNKNOWN_LABEL.to_string()),
            quality: QualityScores {
                completeness: score(raw.number(&[&["quality", "completeness"], &["completeness"]])),
                accuracy: score(raw.number(&[&["quality", "accuracy"], &["accuracy"]])),
                timeliness: score(raw.number(&[&["quality", "timeliness"], &["timeliness"]])),
                consistency: score(raw.number(&[&["quality", "consistency"], &["consistency"]])),
            },
            verification: Verification {
                provider_verified: raw.flag(&[&["supplier", "verified"], &["supplierVerified"]]).unwrap_or(false),
                dataset_verified: raw.flag(&[&["verified"], &["isVerified"]]).unwrap_or(false),
            },
            rating: raw.number(&[&["rating"]]).unwrap_or(0.0).clamp(0.0, 5.0),
            review_count: raw
                .number(&[&["reviewCount"], &["reviewsCount"]])
                .map(|n| n.max(0.0) as u64)
                .unwrap_or(0),
        }
    }

    /// License kind used by the license filter; `None` for labels outside the known set.
    pub fn license_kind(&self) -> Option<License> {
        self.license.parse().ok()
    }
}
