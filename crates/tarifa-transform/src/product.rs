//! Row-to-product transformation.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use tarifa_model::{ColumnRole, ColumnRoleMap, NormalizedProduct, RawRow, RawValue};

use crate::normalization::{clean_date, clean_number, clean_price, clean_text};

/// Injectable knobs for the transformer. Curated retail values live in
/// `tarifa-vendors`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformConfig {
    /// Uppercase tokens that disqualify the first name token as a brand
    /// (`PACK`, `SET`, ...).
    pub brand_stoplist: Vec<String>,
    /// VAT rate applied when no column resolves.
    pub default_vat_rate: f64,
    /// Substrings of header keys that mark a free-text annotation column.
    pub notes_markers: Vec<String>,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            brand_stoplist: Vec::new(),
            default_vat_rate: 21.0,
            notes_markers: vec!["NOTA".to_string(), "OBS".to_string()],
        }
    }
}

impl TransformConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_brand_stoplist<I, S>(mut self, stoplist: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.brand_stoplist
            .extend(stoplist.into_iter().map(|s| s.as_ref().trim().to_uppercase()));
        self
    }
}

/// Non-fatal reasons a body row does not become a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowSkip {
    /// No populated cell at all.
    Blank,
    /// Code or name missing: separator, footer or totals row.
    MissingIdentity,
    /// Sale price cleaned to zero or below; such a row must never reach
    /// the catalog.
    NonPositivePrice,
}

/// Turns one raw row into a normalized product.
///
/// The sale price tries the mapped sale-price cell first and falls back to
/// the purchase-price cell when the primary is absent; a result of zero or
/// below rejects the row outright. Unmapped fields take their documented
/// defaults, and the profit figures are always recomputed; source profit
/// columns are never trusted.
pub fn to_product(
    row: &RawRow,
    roles: &ColumnRoleMap,
    current_category: &str,
    vendor_name: &str,
    config: &TransformConfig,
) -> Result<NormalizedProduct, RowSkip> {
    if row.populated().next().is_none() {
        return Err(RowSkip::Blank);
    }

    let code = role_text(row, roles, ColumnRole::Code);
    let name = role_text(row, roles, ColumnRole::Name);
    if code.is_empty() || name.is_empty() {
        return Err(RowSkip::MissingIdentity);
    }

    let sale_cell = role_value(row, roles, ColumnRole::SalePrice)
        .filter(|value| !value.is_empty())
        .or_else(|| role_value(row, roles, ColumnRole::PurchasePrice));
    let sale_price = sale_cell.map(clean_price).unwrap_or(0.0);
    if sale_price <= 0.0 {
        return Err(RowSkip::NonPositivePrice);
    }

    let purchase_price = role_value(row, roles, ColumnRole::PurchasePrice)
        .map(clean_price)
        .unwrap_or(0.0)
        .max(0.0);

    let vat_rate = populated_value(row, roles, ColumnRole::VatRate)
        .map(clean_number)
        .unwrap_or(config.default_vat_rate);

    let stock_on_hand = count_field(row, roles, ColumnRole::UnitsOnHand).unwrap_or(0);
    let units_sold = count_field(row, roles, ColumnRole::UnitsSold).unwrap_or(0);

    let brand = {
        let mapped = role_text(row, roles, ColumnRole::Brand);
        if mapped.is_empty() {
            brand_from_name(&name, &config.brand_stoplist)
        } else {
            mapped
        }
    };

    let (date_added, date_added_defaulted) = match populated_value(row, roles, ColumnRole::DateAdded)
    {
        Some(value) => {
            let cleaned = clean_date(value);
            (Some(cleaned.iso), cleaned.defaulted)
        }
        None => (None, false),
    };

    // Always recomputed; source profit columns are ignored.
    let (unit_profit, total_profit) = if purchase_price > 0.0 {
        let unit = sale_price - purchase_price;
        (Some(unit), Some(unit * stock_on_hand as f64))
    } else {
        (None, None)
    };

    Ok(NormalizedProduct {
        description: role_text(row, roles, ColumnRole::LongDescription),
        purchase_price,
        sale_price,
        vat_rate,
        surcharge_rate: numeric_field(row, roles, ColumnRole::SurchargeRate),
        stock_on_hand,
        min_stock: count_field(row, roles, ColumnRole::MinStock),
        store_stock: count_field(row, roles, ColumnRole::StoreStock),
        units_sold,
        brand,
        category: current_category.trim().to_string(),
        subcategory: text_field(row, roles, ColumnRole::Subcategory),
        barcode: text_field(row, roles, ColumnRole::Barcode),
        discount: numeric_field(row, roles, ColumnRole::Discount),
        margin: numeric_field(row, roles, ColumnRole::Margin),
        unit_profit,
        total_profit,
        weight: numeric_field(row, roles, ColumnRole::Weight),
        dimensions: text_field(row, roles, ColumnRole::Dimensions),
        color: text_field(row, roles, ColumnRole::Color),
        warranty: text_field(row, roles, ColumnRole::Warranty),
        date_added,
        date_added_defaulted,
        image_url: text_field(row, roles, ColumnRole::ImageUrl),
        energy_rating: text_field(row, roles, ColumnRole::EnergyRating),
        notes: aggregate_notes(row, roles, config),
        vendor_name: vendor_name.to_string(),
        raw_source: row.snapshot_json(),
        code,
        name,
    })
}

fn role_value<'a>(row: &'a RawRow, roles: &ColumnRoleMap, role: ColumnRole) -> Option<&'a RawValue> {
    roles.get(role).and_then(|key| row.get(key))
}

fn populated_value<'a>(
    row: &'a RawRow,
    roles: &ColumnRoleMap,
    role: ColumnRole,
) -> Option<&'a RawValue> {
    role_value(row, roles, role).filter(|value| !value.is_empty())
}

fn role_text(row: &RawRow, roles: &ColumnRoleMap, role: ColumnRole) -> String {
    role_value(row, roles, role).map(clean_text).unwrap_or_default()
}

fn text_field(row: &RawRow, roles: &ColumnRoleMap, role: ColumnRole) -> Option<String> {
    populated_value(row, roles, role).map(clean_text)
}

fn numeric_field(row: &RawRow, roles: &ColumnRoleMap, role: ColumnRole) -> Option<f64> {
    populated_value(row, roles, role).map(clean_number)
}

/// Integer quantity field, clamped to zero.
fn count_field(row: &RawRow, roles: &ColumnRoleMap, role: ColumnRole) -> Option<i64> {
    populated_value(row, roles, role).map(|value| clean_number(value).round().max(0.0) as i64)
}

/// Best-effort brand extraction from the product name: the first token, if
/// it is 2-15 characters, contains no lowercase letters, has at least one
/// letter and is not a packaging word.
fn brand_from_name(name: &str, stoplist: &[String]) -> String {
    let Some(token) = name.split_whitespace().next() else {
        return String::new();
    };
    let len = token.chars().count();
    if !(2..=15).contains(&len) {
        return String::new();
    }
    if token.chars().any(char::is_lowercase) || !token.chars().any(char::is_alphabetic) {
        return String::new();
    }
    if stoplist.iter().any(|stop| stop == token) {
        return String::new();
    }
    token.to_string()
}

/// Absorbs loose annotation columns: the mapped notes cell first, then
/// unmapped columns whose key carries a notes marker, then any other
/// unmapped text cell longer than 2 characters. Each source cell is used
/// once; parts join with `" | "`.
fn aggregate_notes(row: &RawRow, roles: &ColumnRoleMap, config: &TransformConfig) -> String {
    let mut parts: Vec<String> = Vec::new();
    let mut used: BTreeSet<String> = BTreeSet::new();

    if let Some(key) = roles.get(ColumnRole::Notes) {
        used.insert(key.to_string());
        if let Some(value) = row.get(key) {
            let text = clean_text(value);
            if !text.is_empty() {
                parts.push(text);
            }
        }
    }

    for (key, value) in row.iter() {
        if roles.is_mapped_column(key) || used.contains(key) {
            continue;
        }
        let upper = key.trim().to_uppercase();
        if config.notes_markers.iter().any(|marker| upper.contains(marker.as_str())) {
            let text = clean_text(value);
            if !text.is_empty() {
                used.insert(key.to_string());
                parts.push(text);
            }
        }
    }

    for (key, value) in row.iter() {
        if roles.is_mapped_column(key) || used.contains(key) {
            continue;
        }
        if let RawValue::Text(_) = value {
            let text = clean_text(value);
            if text.chars().count() > 2 {
                used.insert(key.to_string());
                parts.push(text);
            }
        }
    }

    parts.join(" | ")
}
