#![deny(unsafe_code)]

//! Tabular normalization engine for vendor price lists.
//!
//! - **normalization**: total cleaning functions for prices, numbers,
//!   booleans, text and dates
//! - **category**: category-boundary detection inside flat spreadsheet rows
//! - **product**: row-to-product transformation with per-row skip reasons
//! - **engine**: the table-level loop threading the current category and
//!   the skip ledger

pub mod category;
pub mod engine;
pub mod normalization;
pub mod product;

pub use category::{CategoryRules, detect_category_row};
pub use engine::{EngineConfig, normalize_table};
pub use normalization::{
    CleanedDate, clean_boolean, clean_date, clean_number, clean_price, clean_text,
};
pub use product::{RowSkip, TransformConfig, to_product};
