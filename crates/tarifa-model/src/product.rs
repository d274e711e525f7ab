//! Canonical product record and the order-preserving category set.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Normalized product record ready for upsert into the catalog store.
///
/// The engine assigns no identity beyond `code`; deduplication and
/// upsert-by-code belong to the catalog repository. `raw_source` carries a
/// serialized copy of the source row so strict callers can re-inspect the
/// cells a value was coerced from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedProduct {
    pub code: String,
    pub name: String,
    /// Extended description, empty when the source has none.
    #[serde(default)]
    pub description: String,
    /// Non-negative; 0 when the source column is missing or unreadable.
    pub purchase_price: f64,
    /// Strictly positive; rows that cannot produce one never become products.
    pub sale_price: f64,
    pub vat_rate: f64,
    pub surcharge_rate: Option<f64>,
    pub stock_on_hand: i64,
    pub min_stock: Option<i64>,
    pub store_stock: Option<i64>,
    pub units_sold: i64,
    /// May be empty when neither a brand column nor the name-token
    /// heuristic produced one.
    #[serde(default)]
    pub brand: String,
    /// Category active when this row was read; may be empty.
    #[serde(default)]
    pub category: String,
    pub subcategory: Option<String>,
    pub barcode: Option<String>,
    pub discount: Option<f64>,
    pub margin: Option<f64>,
    /// Recomputed as `sale_price - purchase_price`; never taken from a
    /// source column.
    pub unit_profit: Option<f64>,
    /// Recomputed as `unit_profit * stock_on_hand`.
    pub total_profit: Option<f64>,
    pub weight: Option<f64>,
    pub dimensions: Option<String>,
    pub color: Option<String>,
    pub warranty: Option<String>,
    /// ISO-8601; `date_added_defaulted` marks values substituted with the
    /// import instant because the source cell was unparseable.
    pub date_added: Option<String>,
    #[serde(default)]
    pub date_added_defaulted: bool,
    pub image_url: Option<String>,
    pub energy_rating: Option<String>,
    /// Loose annotation columns absorbed from the source row, `" | "`-joined.
    #[serde(default)]
    pub notes: String,
    pub vendor_name: String,
    pub raw_source: String,
}

/// Order-preserving set of category names seen while scanning a table.
///
/// A name enters the set at most once, at the position of its first
/// appearance; empty names are ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetectedCategorySet {
    seen: BTreeSet<String>,
    ordered: Vec<String>,
}

impl DetectedCategorySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when the name was newly inserted.
    pub fn push(&mut self, name: &str) -> bool {
        let trimmed = name.trim();
        if trimmed.is_empty() || self.seen.contains(trimmed) {
            return false;
        }
        self.seen.insert(trimmed.to_string());
        self.ordered.push(trimmed.to_string());
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.seen.contains(name.trim())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ordered.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.ordered
    }
}
