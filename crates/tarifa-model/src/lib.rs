#![deny(unsafe_code)]

//! Data model for supplier price-list normalization.
//!
//! - **row**: raw cells and order-preserving rows as delivered by a table reader
//! - **role**: semantic column roles and the role-to-column mapping
//! - **product**: the canonical product record and the detected-category set
//! - **report**: per-table normalization outcome, skip ledger and rejection diagnostic
//! - **error**: model-level error taxonomy

pub mod error;
pub mod product;
pub mod report;
pub mod role;
pub mod row;

pub use error::{ModelError, Result};
pub use product::{DetectedCategorySet, NormalizedProduct};
pub use report::{NormalizeReport, SkipCounts, TableRejection};
pub use role::{ColumnRole, ColumnRoleMap};
pub use row::{RawRow, RawValue};
