//! Cleaning functions for raw cell values.
//!
//! All functions here are pure and total: unparseable input degrades to a
//! documented default (0, `false`, empty string, or the current instant
//! with a `defaulted` flag) instead of failing. Callers that need strict
//! validation re-inspect the product's raw-source snapshot.

pub mod boolean;
pub mod datetime;
pub mod numeric;
pub mod text;

pub use boolean::clean_boolean;
pub use datetime::{CleanedDate, clean_date};
pub use numeric::{clean_number, clean_price};
pub use text::clean_text;
