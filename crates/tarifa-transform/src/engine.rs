//! Table-level normalization loop.
//!
//! One invocation owns its whole state: the resolved role map, the
//! current-category accumulator and the output collectors. The only data
//! shared between invocations is the immutable configuration, so callers
//! may normalize independent tables concurrently without synchronization.

use tarifa_map::{RoleSynonyms, resolve_columns};
use tarifa_model::{
    ColumnRoleMap, DetectedCategorySet, NormalizeReport, RawRow, SkipCounts, TableRejection,
};

use crate::category::{CategoryRules, detect_category_row};
use crate::product::{RowSkip, TransformConfig, to_product};

/// Full engine parameterization. [`Default`] is domain-free; the curated
/// Spanish retail tables live in `tarifa-vendors`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EngineConfig {
    pub synonyms: RoleSynonyms,
    pub category_rules: CategoryRules,
    pub transform: TransformConfig,
}

/// Normalizes one table: the first row is the header, the rest are body
/// rows scanned in order.
///
/// Category-boundary rows update the current category and the detected
/// set; every other row either becomes a product or lands in the skip
/// ledger. An unresolvable header (no code or name column) rejects the
/// table as a whole: empty output plus a diagnostic, never an error.
pub fn normalize_table(
    rows: &[RawRow],
    vendor_name: &str,
    default_category: &str,
    overrides: &ColumnRoleMap,
    config: &EngineConfig,
) -> NormalizeReport {
    let span = tracing::debug_span!("normalize_table", vendor = vendor_name, rows = rows.len());
    let _guard = span.enter();

    let Some((header, body)) = rows.split_first() else {
        tracing::warn!("empty input table");
        return NormalizeReport::rejected(TableRejection::empty_input());
    };

    let roles = match resolve_columns(header, &config.synonyms, overrides) {
        Ok(roles) => roles,
        Err(rejection) => return NormalizeReport::rejected(rejection),
    };

    let mut products = Vec::new();
    let mut categories = DetectedCategorySet::new();
    let mut skipped = SkipCounts::default();
    let mut current_category = default_category.trim().to_string();

    for row in body {
        if let Some(name) = detect_category_row(row, &roles, &config.category_rules) {
            tracing::debug!(category = %name, "category boundary");
            categories.push(&name);
            current_category = name;
            skipped.category_rows += 1;
            continue;
        }
        match to_product(row, &roles, &current_category, vendor_name, &config.transform) {
            Ok(product) => {
                // Default categories from vendor adapters enter the set
                // here, on first use.
                categories.push(&product.category);
                products.push(product);
            }
            Err(RowSkip::Blank) => skipped.blank += 1,
            Err(RowSkip::MissingIdentity) => skipped.missing_identity += 1,
            Err(RowSkip::NonPositivePrice) => skipped.non_positive_price += 1,
        }
    }

    tracing::info!(
        products = products.len(),
        categories = categories.len(),
        skipped = skipped.total(),
        "table normalized"
    );

    NormalizeReport {
        products,
        categories: categories.into_vec(),
        skipped,
        rejection: None,
    }
}
