#![deny(unsafe_code)]

//! Curated vendor knowledge for the Spanish appliance-retail vertical.
//!
//! - **defaults**: role synonyms, category keywords, brand
//!   pseudo-categories and the brand stoplist, bundled into an
//!   [`EngineConfig`](tarifa_transform::EngineConfig)
//! - **registry**: vendor-name synonym table and the adapter registry with
//!   its pass-through fallback
//! - **manifest**: declarative, versioned column manifests with header
//!   fingerprints that fail loudly when a vendor reshuffles columns

pub mod defaults;
pub mod error;
pub mod manifest;
pub mod registry;

pub use defaults::spanish_retail_config;
pub use error::VendorError;
pub use manifest::{HeaderFingerprint, VendorManifest};
pub use registry::{VendorAdapter, VendorRegistry};
