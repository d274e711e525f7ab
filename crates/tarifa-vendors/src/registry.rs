//! Vendor adapter registry.
//!
//! Vendor identifiers arrive in many spellings (typos included); a synonym
//! table folds them onto one canonical name before adapter lookup. Vendors
//! without a registered adapter get a pass-through configuration that
//! forces the fully heuristic column-resolution path.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use tarifa_model::{ColumnRole, ColumnRoleMap, RawRow};

use crate::error::VendorError;
use crate::manifest::HeaderFingerprint;

/// One vendor's parameterization of the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct VendorAdapter {
    pub canonical_name: String,
    /// Fixed role-to-column mapping; empty for heuristic vendors.
    pub overrides: ColumnRoleMap,
    /// Category attached to rows seen before any boundary row; may be empty.
    pub default_category: String,
    /// Pinned header layout; `None` skips verification.
    pub fingerprint: Option<HeaderFingerprint>,
    /// Manifest revision, for diagnostics.
    pub version: u32,
}

impl VendorAdapter {
    /// Adapter for vendors nobody has described yet: no overrides, no
    /// default category, heuristics only.
    pub fn pass_through(canonical_name: impl Into<String>) -> Self {
        Self {
            canonical_name: canonical_name.into(),
            overrides: ColumnRoleMap::new(),
            default_category: String::new(),
            fingerprint: None,
            version: 0,
        }
    }

    /// Checks an observed header row against the pinned layout, failing
    /// loudly on mismatch. Adapters without a fingerprint accept anything.
    pub fn verify_header(&self, header: &RawRow) -> Result<(), VendorError> {
        match &self.fingerprint {
            Some(fingerprint) if !fingerprint.matches(header) => {
                tracing::warn!(
                    vendor = %self.canonical_name,
                    version = self.version,
                    "header fingerprint mismatch"
                );
                Err(VendorError::FingerprintMismatch {
                    vendor: self.canonical_name.clone(),
                    version: self.version,
                })
            }
            _ => Ok(()),
        }
    }
}

/// Registry of vendor spellings and adapters.
#[derive(Debug, Clone, Default)]
pub struct VendorRegistry {
    synonyms: BTreeMap<String, String>,
    adapters: BTreeMap<String, VendorAdapter>,
}

impl VendorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps an alternative spelling onto a canonical vendor name.
    pub fn with_synonym(mut self, spelling: &str, canonical: &str) -> Self {
        self.synonyms.insert(
            spelling.trim().to_uppercase(),
            canonical.trim().to_uppercase(),
        );
        self
    }

    pub fn with_adapter(mut self, adapter: VendorAdapter) -> Self {
        self.adapters.insert(adapter.canonical_name.clone(), adapter);
        self
    }

    /// Canonical name for any vendor identifier: trim, uppercase, then the
    /// synonym table.
    pub fn canonical_name(&self, vendor_id: &str) -> String {
        let normalized = vendor_id.trim().to_uppercase();
        self.synonyms
            .get(&normalized)
            .cloned()
            .unwrap_or(normalized)
    }

    /// Adapter for a vendor identifier, falling back to pass-through.
    pub fn adapter(&self, vendor_id: &str) -> VendorAdapter {
        let canonical = self.canonical_name(vendor_id);
        match self.adapters.get(&canonical) {
            Some(adapter) => adapter.clone(),
            None => VendorAdapter::pass_through(canonical),
        }
    }

    /// Registry with the curated synonym table and the adapters described
    /// so far.
    pub fn spanish_retail() -> Self {
        Self::new()
            .with_synonym("OBREGOZO", "ORBEGOZO")
            .with_synonym("ORBEGOSO", "ORBEGOZO")
            .with_synonym("EAS", "EAS-JOHNSON")
            .with_synonym("JOHNSON", "EAS-JOHNSON")
            .with_synonym("EAS JOHNSON", "EAS-JOHNSON")
            .with_adapter(orbegozo_adapter())
    }

    /// Process-wide read-only registry, built once on first use.
    pub fn global() -> &'static VendorRegistry {
        static GLOBAL: OnceLock<VendorRegistry> = OnceLock::new();
        GLOBAL.get_or_init(VendorRegistry::spanish_retail)
    }
}

/// ORBEGOZO ships headerless sheets with a fixed column order; the reader
/// assigns positional keys.
fn orbegozo_adapter() -> VendorAdapter {
    VendorAdapter {
        canonical_name: "ORBEGOZO".to_string(),
        overrides: ColumnRoleMap::new()
            .with(ColumnRole::Code, "col_0")
            .with(ColumnRole::Name, "col_1")
            .with(ColumnRole::PurchasePrice, "col_2")
            .with(ColumnRole::SalePrice, "col_3")
            .with(ColumnRole::UnitsOnHand, "col_4"),
        default_category: "PAE".to_string(),
        fingerprint: None,
        version: 1,
    }
}
