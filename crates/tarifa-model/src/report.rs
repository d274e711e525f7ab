//! Per-table normalization outcome.
//!
//! Data-quality problems never surface as errors: a table either produces
//! a populated report or an empty one carrying a rejection diagnostic.
//! Per-row skips are counted so callers can distinguish "explicit
//! rejection" (bad column mapping) from "valid but empty" (all rows
//! filtered).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::product::NormalizedProduct;
use crate::role::ColumnRole;

/// Counters for the non-fatal per-row skip taxonomy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkipCounts {
    /// Rows classified as category boundaries.
    pub category_rows: usize,
    /// Rows without a usable code or name (separators, footers, totals).
    pub missing_identity: usize,
    /// Rows whose sale price cleaned to zero or below.
    pub non_positive_price: usize,
    /// Rows with no populated cell at all.
    pub blank: usize,
}

impl SkipCounts {
    pub fn total(&self) -> usize {
        self.category_rows + self.missing_identity + self.non_positive_price + self.blank
    }
}

/// Diagnostic for a table rejected as a whole.
///
/// Always recoverable: the caller can supply explicit column overrides for
/// the missing roles and retry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRejection {
    /// Mandatory roles that stayed unresolved (`Code`, `Name`, or both).
    pub missing_roles: Vec<ColumnRole>,
    /// Header labels observed in the first row, for the diagnostic.
    pub observed_headers: Vec<String>,
}

impl TableRejection {
    pub fn new(missing_roles: Vec<ColumnRole>, observed_headers: Vec<String>) -> Self {
        Self {
            missing_roles,
            observed_headers,
        }
    }

    /// Rejection for an input with no rows at all.
    pub fn empty_input() -> Self {
        Self::new(vec![ColumnRole::Code, ColumnRole::Name], Vec::new())
    }
}

impl fmt::Display for TableRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let roles: Vec<&str> = self.missing_roles.iter().map(|role| role.token()).collect();
        write!(
            f,
            "unresolved mandatory columns [{}] among headers [{}]",
            roles.join(", "),
            self.observed_headers.join(", ")
        )
    }
}

/// Result of normalizing one input table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizeReport {
    pub products: Vec<NormalizedProduct>,
    /// Category names in first-seen order; contains every non-empty
    /// category attached to any product.
    pub categories: Vec<String>,
    pub skipped: SkipCounts,
    pub rejection: Option<TableRejection>,
}

impl NormalizeReport {
    /// Empty report carrying a table-level rejection diagnostic.
    pub fn rejected(rejection: TableRejection) -> Self {
        Self {
            products: Vec::new(),
            categories: Vec::new(),
            skipped: SkipCounts::default(),
            rejection: Some(rejection),
        }
    }

    pub fn is_rejected(&self) -> bool {
        self.rejection.is_some()
    }
}
