//! Category identifiers and the id -> display name lookup table.

use std::collections::BTreeMap;
use std::fmt::Display;

use serde::{Deserialize, Deserializer, Serialize};

/// Identifier of a marketplace category. Filter state only ever stores ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CategoryId(pub String);

impl CategoryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CategoryId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for CategoryId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// the categories endpoint is not consistent about numeric vs textual ids
impl<'de> Deserialize<'de> for CategoryId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Text(String),
            Int(i64),
        }
        Ok(match Repr::deserialize(deserializer)? {
            Repr::Text(s) => CategoryId(s),
            Repr::Int(i) => CategoryId(i.to_string()),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryItem {
    pub id: CategoryId,
    #[serde(default)]
    pub name: String,
}

/// Response of the categories endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CategoryListResponse {
    pub items: Vec<CategoryItem>,
}

/// Read-only `CategoryId -> name` table, rebuilt from each categories response.
///
/// Ids that are not in the table (deleted categories, a response that has not
/// arrived yet) resolve to `None` instead of failing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CategoryLookup {
    names: BTreeMap<CategoryId, String>,
}

impl CategoryLookup {
    pub fn from_response(response: &CategoryListResponse) -> Self {
        let names = response
            .items
            .iter()
            .map(|item| (item.id.clone(), item.name.clone()))
            .collect();
        Self { names }
    }

    pub fn name(&self, id: &CategoryId) -> Option<&str> {
        self.names.get(id).map(|name| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CategoryId, &str)> {
        self.names.iter().map(|(id, name)| (id, name.as_str()))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn response() -> CategoryListResponse {
        serde_json::from_str(r#"{"items": [{"id": "energy", "name": "Energy"}, {"id": 7, "name": "Finance"}]}"#).unwrap()
    }

    #[test]
    fn lookup_resolves_known_ids() {
        let lookup = CategoryLookup::from_response(&response());
        assert_eq!(lookup.len(), 2);
        assert_eq!(lookup.name(&CategoryId::from("energy")), Some("Energy"));
        assert_eq!(lookup.name(&CategoryId::from("7")), Some("Finance"));
    }

    #[test]
    fn stale_id_resolves_to_none() {
        let lookup = CategoryLookup::from_response(&response());
        assert_eq!(lookup.name(&CategoryId::from("deleted-category")), None);
        assert_eq!(CategoryLookup::default().name(&CategoryId::from("energy")), None);
    }

    #[test]
    fn missing_items_key_is_an_empty_table() {
        let response: CategoryListResponse = serde_json::from_str("{}").unwrap();
        assert!(CategoryLookup::from_response(&response).is_empty());
    }
}
