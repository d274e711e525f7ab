//! Header resolution: explicit overrides, value heuristics, key heuristics,
//! repair rules.

use tarifa_model::{ColumnRole, ColumnRoleMap, RawRow, TableRejection};

use crate::synonyms::RoleSynonyms;

/// Resolves the role-to-column mapping for one table.
///
/// Per role, in priority order:
/// 1. an explicit override (vendor adapter or caller) is used verbatim;
/// 2. header **values** are scanned: the first synonym (in list order)
///    contained in some uppercased column label wins, columns in source
///    order;
/// 3. header **keys** are scanned the same way, against the role token and
///    its synonyms; this recovers synthetic positional keys whose meaning
///    only a side-channel header dictionary knows;
/// 4. repair rules: `SalePrice` falls back to the `FinalSalePrice` column.
///    A table with only a purchase price keeps `SalePrice` unresolved; the
///    row transformer applies its per-row price fallback instead.
///
/// A table whose `Code` or `Name` cannot be resolved is rejected as a
/// whole, a data-quality outcome, not a panic.
pub fn resolve_columns(
    header: &RawRow,
    synonyms: &RoleSynonyms,
    overrides: &ColumnRoleMap,
) -> Result<ColumnRoleMap, TableRejection> {
    let mut resolved = ColumnRoleMap::new();

    for role in ColumnRole::ALL {
        if let Some(key) = overrides.get(role) {
            resolved.insert(role, key);
            tracing::debug!(role = %role, column = key, source = "override", "column role resolved");
            continue;
        }
        if let Some(key) = match_header_values(header, synonyms.synonyms(role)) {
            tracing::debug!(role = %role, column = %key, source = "header-value", "column role resolved");
            resolved.insert(role, key);
            continue;
        }
        if let Some(key) = match_header_keys(header, role, synonyms.synonyms(role)) {
            tracing::debug!(role = %role, column = %key, source = "header-key", "column role resolved");
            resolved.insert(role, key);
        }
    }

    if resolved.alias(ColumnRole::SalePrice, ColumnRole::FinalSalePrice) {
        tracing::debug!("sale price aliased to final sale price column");
    }

    let mut missing = Vec::new();
    for role in [ColumnRole::Code, ColumnRole::Name] {
        if !resolved.contains(role) {
            missing.push(role);
        }
    }
    if !missing.is_empty() {
        let observed: Vec<String> = header
            .iter()
            .map(|(_, value)| value.as_display_text())
            .collect();
        let rejection = TableRejection::new(missing, observed);
        tracing::warn!(%rejection, "table rejected: mandatory columns unresolved");
        return Err(rejection);
    }

    Ok(resolved)
}

/// First column whose uppercased label contains a synonym; synonym list
/// order outranks column order.
fn match_header_values(header: &RawRow, synonyms: &[String]) -> Option<String> {
    for synonym in synonyms {
        for (key, value) in header.iter() {
            let label = value.as_display_text().to_uppercase();
            if !label.is_empty() && label.contains(synonym.as_str()) {
                return Some(key.to_string());
            }
        }
    }
    None
}

/// First column whose uppercased key contains the role token or a synonym.
fn match_header_keys(header: &RawRow, role: ColumnRole, synonyms: &[String]) -> Option<String> {
    for (key, _) in header.iter() {
        let upper = key.trim().to_uppercase();
        if upper.is_empty() {
            continue;
        }
        if upper.contains(role.token()) {
            return Some(key.to_string());
        }
        if synonyms.iter().any(|synonym| upper.contains(synonym.as_str())) {
            return Some(key.to_string());
        }
    }
    None
}
