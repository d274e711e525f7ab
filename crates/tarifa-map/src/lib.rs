#![deny(unsafe_code)]

//! Column Role Mapper: resolves which physical column of a vendor price
//! list fills each semantic role.
//!
//! Resolution runs once per table, in strict priority order per role:
//! explicit overrides, then header-value synonym matching, then header-key
//! matching, then repair rules. The synonym tables are injected
//! configuration, so the resolver is testable without the curated retail
//! vocabulary (which lives in `tarifa-vendors`).

pub mod resolver;
pub mod synonyms;

pub use resolver::resolve_columns;
pub use synonyms::RoleSynonyms;
