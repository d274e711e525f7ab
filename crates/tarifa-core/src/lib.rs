#![deny(unsafe_code)]

//! Import orchestration for supplier price lists.
//!
//! The engine itself never touches files or the catalog store; this crate
//! holds the contracts those collaborators implement and the pipeline that
//! wires them together: registry lookup, manifest verification, the
//! normalization engine, then upsert-by-code through the repository.

pub mod pipeline;

pub use pipeline::{
    CatalogProduct, CatalogRepository, ImportPipeline, ImportSummary, TableSource,
    normalize_price_list,
};
