//! Semantic column roles and the per-table role-to-column mapping.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Semantic meaning a physical column can fill in a vendor price list.
///
/// A role is resolved to at most one column key per table. `Code` and
/// `Name` are mandatory: a table where neither heuristics nor overrides
/// can resolve them is rejected as a whole.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum ColumnRole {
    Code,
    Name,
    LongDescription,
    UnitsOnHand,
    MinStock,
    PurchasePrice,
    SalePrice,
    FinalSalePrice,
    UnitsSold,
    StoreStock,
    Notes,
    Brand,
    Category,
    Subcategory,
    Barcode,
    Discount,
    Margin,
    UnitProfit,
    TotalProfit,
    VatRate,
    SurchargeRate,
    Weight,
    Dimensions,
    Color,
    Warranty,
    DateAdded,
    ImageUrl,
    EnergyRating,
}

impl ColumnRole {
    pub const ALL: [ColumnRole; 28] = [
        ColumnRole::Code,
        ColumnRole::Name,
        ColumnRole::LongDescription,
        ColumnRole::UnitsOnHand,
        ColumnRole::MinStock,
        ColumnRole::PurchasePrice,
        ColumnRole::SalePrice,
        ColumnRole::FinalSalePrice,
        ColumnRole::UnitsSold,
        ColumnRole::StoreStock,
        ColumnRole::Notes,
        ColumnRole::Brand,
        ColumnRole::Category,
        ColumnRole::Subcategory,
        ColumnRole::Barcode,
        ColumnRole::Discount,
        ColumnRole::Margin,
        ColumnRole::UnitProfit,
        ColumnRole::TotalProfit,
        ColumnRole::VatRate,
        ColumnRole::SurchargeRate,
        ColumnRole::Weight,
        ColumnRole::Dimensions,
        ColumnRole::Color,
        ColumnRole::Warranty,
        ColumnRole::DateAdded,
        ColumnRole::ImageUrl,
        ColumnRole::EnergyRating,
    ];

    /// Canonical uppercase token, used when matching synthetic header keys.
    pub fn token(self) -> &'static str {
        match self {
            ColumnRole::Code => "CODE",
            ColumnRole::Name => "NAME",
            ColumnRole::LongDescription => "LONGDESCRIPTION",
            ColumnRole::UnitsOnHand => "UNITSONHAND",
            ColumnRole::MinStock => "MINSTOCK",
            ColumnRole::PurchasePrice => "PURCHASEPRICE",
            ColumnRole::SalePrice => "SALEPRICE",
            ColumnRole::FinalSalePrice => "FINALSALEPRICE",
            ColumnRole::UnitsSold => "UNITSSOLD",
            ColumnRole::StoreStock => "STORESTOCK",
            ColumnRole::Notes => "NOTES",
            ColumnRole::Brand => "BRAND",
            ColumnRole::Category => "CATEGORY",
            ColumnRole::Subcategory => "SUBCATEGORY",
            ColumnRole::Barcode => "BARCODE",
            ColumnRole::Discount => "DISCOUNT",
            ColumnRole::Margin => "MARGIN",
            ColumnRole::UnitProfit => "UNITPROFIT",
            ColumnRole::TotalProfit => "TOTALPROFIT",
            ColumnRole::VatRate => "VATRATE",
            ColumnRole::SurchargeRate => "SURCHARGERATE",
            ColumnRole::Weight => "WEIGHT",
            ColumnRole::Dimensions => "DIMENSIONS",
            ColumnRole::Color => "COLOR",
            ColumnRole::Warranty => "WARRANTY",
            ColumnRole::DateAdded => "DATEADDED",
            ColumnRole::ImageUrl => "IMAGEURL",
            ColumnRole::EnergyRating => "ENERGYRATING",
        }
    }
}

impl fmt::Display for ColumnRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for ColumnRole {
    type Err = ModelError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let token = raw.trim().to_uppercase();
        ColumnRole::ALL
            .into_iter()
            .find(|role| role.token() == token)
            .ok_or_else(|| ModelError::UnknownRole(raw.to_string()))
    }
}

/// Mapping from semantic role to physical column key.
///
/// Built once per input table (explicit overrides, then header heuristics,
/// then repair rules) and read-only while rows are processed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnRoleMap {
    entries: BTreeMap<ColumnRole, String>,
}

impl ColumnRoleMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, role: ColumnRole, key: impl Into<String>) {
        self.entries.insert(role, key.into());
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, role: ColumnRole, key: impl Into<String>) -> Self {
        self.insert(role, key);
        self
    }

    pub fn get(&self, role: ColumnRole) -> Option<&str> {
        self.entries.get(&role).map(String::as_str)
    }

    pub fn contains(&self, role: ColumnRole) -> bool {
        self.entries.contains_key(&role)
    }

    /// Copies the column of `source` onto `target` when `target` is still
    /// unresolved. Used by repair rules such as `SalePrice := FinalSalePrice`.
    pub fn alias(&mut self, target: ColumnRole, source: ColumnRole) -> bool {
        if self.contains(target) {
            return false;
        }
        match self.entries.get(&source).cloned() {
            Some(key) => {
                self.entries.insert(target, key);
                true
            }
            None => false,
        }
    }

    /// True when `key` is the resolved column of any role.
    pub fn is_mapped_column(&self, key: &str) -> bool {
        self.entries.values().any(|mapped| mapped == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ColumnRole, &str)> {
        self.entries
            .iter()
            .map(|(role, key)| (*role, key.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
