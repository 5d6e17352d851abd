//! Domain identifiers and their static item lists.

use std::{fmt, sync::OnceLock};

use serde::{Deserialize, Serialize};
use thiserror::Error;

include!(concat!(env!("OUT_DIR"), "/item_catalog_generated.rs"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// Fixed item categories, each with its own button and item list.
pub enum Domain {
    /// The `users` domain.
    Users,
    /// The `products` domain.
    Products,
}

impl Domain {
    /// Every domain, in the order their buttons are mounted.
    pub const ALL: [Domain; 2] = [Domain::Users, Domain::Products];

    /// Returns the stable string id used in `catalog.toml` and DOM data attributes.
    pub fn id(self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::Products => "products",
        }
    }

    /// Parses a domain from its string id.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownDomain`] when `raw` names no domain.
    pub fn from_id(raw: &str) -> Result<Self, CatalogError> {
        Self::ALL
            .into_iter()
            .find(|domain| domain.id() == raw)
            .ok_or_else(|| CatalogError::UnknownDomain(raw.to_string()))
    }

    /// Returns the button label configured for this domain.
    pub fn label(self) -> &'static str {
        &catalog_entry(self).label
    }

    /// Returns the configured item list for this domain.
    pub fn items(self) -> &'static ItemList {
        &catalog_entry(self).items
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Errors raised by catalog lookups.
pub enum CatalogError {
    /// No domain uses the given id.
    #[error("unknown catalog domain `{0}`")]
    UnknownDomain(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
/// Ordered, immutable sequence of item strings.
pub struct ItemList(Vec<String>);

impl ItemList {
    /// Builds a list from items in render order.
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(items.into_iter().map(Into::into).collect())
    }

    /// Iterates items in render order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when the list has no items.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, Deserialize)]
struct CatalogEntry {
    id: Domain,
    label: String,
    items: ItemList,
}

fn catalog_entries() -> &'static [CatalogEntry] {
    static CATALOG: OnceLock<Vec<CatalogEntry>> = OnceLock::new();
    CATALOG.get_or_init(|| {
        serde_json::from_str(ITEM_CATALOG_JSON).expect("generated item catalog should parse")
    })
}

fn catalog_entry(domain: Domain) -> &'static CatalogEntry {
    // build.rs rejects catalogs missing a domain.
    catalog_entries()
        .iter()
        .find(|entry| entry.id == domain)
        .expect("generated item catalog covers every domain")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn generated_catalog_covers_each_domain_once() {
        let entries = catalog_entries();
        assert_eq!(entries.len(), Domain::ALL.len());
        for domain in Domain::ALL {
            assert_eq!(entries.iter().filter(|e| e.id == domain).count(), 1);
        }
    }

    #[test]
    fn default_catalog_labels_and_items() {
        assert_eq!(Domain::Users.label(), "User");
        assert_eq!(Domain::Products.label(), "Product");
        assert_eq!(Domain::Users.items(), &ItemList::new(["alice", "bob"]));
        assert_eq!(Domain::Products.items(), &ItemList::new(["pen", "notebook"]));
    }

    #[test]
    fn domain_ids_round_trip_and_reject_unknown() {
        for domain in Domain::ALL {
            assert_eq!(Domain::from_id(domain.id()), Ok(domain));
            assert_eq!(domain.to_string(), domain.id());
        }
        assert_eq!(
            Domain::from_id("orders"),
            Err(CatalogError::UnknownDomain("orders".to_string()))
        );
    }

    #[test]
    fn item_list_preserves_order_and_allows_empty_items() {
        let list = ItemList::new(["b", "", "a"]);
        assert_eq!(list.len(), 3);
        assert!(!list.is_empty());
        assert_eq!(list.iter().collect::<Vec<_>>(), vec!["b", "", "a"]);
        assert!(ItemList::default().is_empty());
    }
}
