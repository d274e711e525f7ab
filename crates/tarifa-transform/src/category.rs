//! Category-boundary detection.
//!
//! Flat vendor spreadsheets announce sections with rows that name a
//! category or brand instead of describing a product. The detector
//! classifies one row at a time; the caller owns the current-category
//! accumulator and threads it through the table scan.

use serde::{Deserialize, Serialize};

use tarifa_model::{ColumnRole, ColumnRoleMap, RawRow};

/// Minimum length for a cell to count as a section name. Shorter strings
/// are usually stray flags or column noise.
const MIN_NAME_LEN: usize = 3;

/// Injectable configuration for the keyword rule.
///
/// The curated Spanish appliance vocabulary lives in `tarifa-vendors`;
/// the detector itself carries no domain data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRules {
    /// Substring-matched section keywords (uppercase).
    pub keywords: Vec<String>,
    /// Brand names some vendors use as pseudo-categories; matched by
    /// exact (uppercased) equality.
    pub brand_categories: Vec<String>,
    /// Source position of the column checked by the keyword rule.
    /// Vendor exports with a fixed positional layout conventionally put
    /// section names in the second column.
    pub secondary_column: usize,
}

impl Default for CategoryRules {
    fn default() -> Self {
        Self {
            keywords: Vec::new(),
            brand_categories: Vec::new(),
            secondary_column: 1,
        }
    }
}

impl CategoryRules {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.keywords
            .extend(keywords.into_iter().map(|k| k.as_ref().trim().to_uppercase()));
        self
    }

    pub fn with_brand_categories<I, S>(mut self, brands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.brand_categories
            .extend(brands.into_iter().map(|b| b.as_ref().trim().to_uppercase()));
        self
    }

    pub fn with_secondary_column(mut self, index: usize) -> Self {
        self.secondary_column = index;
        self
    }
}

/// Classifies one row; `Some(name)` means the row is a category boundary
/// and must not be considered a product candidate.
///
/// First match wins:
/// - **simple-row rule**: exactly one populated cell whose text is longer
///   than 2 characters names the section;
/// - **keyword rule**: the secondary column holds text longer than
///   2 characters, the row has neither code nor name populated, and the
///   text contains a section keyword or equals a brand pseudo-category.
pub fn detect_category_row(
    row: &RawRow,
    roles: &ColumnRoleMap,
    rules: &CategoryRules,
) -> Option<String> {
    if let Some(name) = lone_cell_name(row) {
        return Some(name);
    }
    keyword_name(row, roles, rules)
}

fn lone_cell_name(row: &RawRow) -> Option<String> {
    let mut populated = row.populated();
    let (_, value) = populated.next()?;
    if populated.next().is_some() {
        return None;
    }
    let text = value.as_display_text();
    if text.chars().count() >= MIN_NAME_LEN {
        Some(text)
    } else {
        None
    }
}

fn keyword_name(row: &RawRow, roles: &ColumnRoleMap, rules: &CategoryRules) -> Option<String> {
    let (_, value) = row.cell_at(rules.secondary_column)?;
    let text = value.as_display_text();
    if text.chars().count() < MIN_NAME_LEN {
        return None;
    }
    if role_populated(row, roles, ColumnRole::Code) || role_populated(row, roles, ColumnRole::Name)
    {
        return None;
    }
    let upper = text.to_uppercase();
    let keyword_hit = rules.keywords.iter().any(|keyword| upper.contains(keyword.as_str()));
    let brand_hit = rules.brand_categories.iter().any(|brand| upper == *brand);
    if keyword_hit || brand_hit { Some(text) } else { None }
}

fn role_populated(row: &RawRow, roles: &ColumnRoleMap, role: ColumnRole) -> bool {
    roles
        .get(role)
        .and_then(|key| row.get(key))
        .is_some_and(|value| !value.is_empty())
}
