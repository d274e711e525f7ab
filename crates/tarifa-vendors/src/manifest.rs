//! Declarative, versioned vendor column manifests.
//!
//! Several vendors ship spreadsheets with unnamed columns, so their
//! adapters map roles to synthetic positional keys. That mapping breaks
//! silently the day the vendor reorders columns. A manifest therefore pins
//! the expected header labels as a fingerprint; verification fails loudly
//! on mismatch instead of mis-mapping.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use sha2::Digest;

use tarifa_model::{ColumnRole, ColumnRoleMap, RawRow};

use crate::error::VendorError;
use crate::registry::VendorAdapter;

/// sha256 fingerprint over a table's normalized header labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HeaderFingerprint(String);

impl HeaderFingerprint {
    /// Fingerprint of an ordered list of header labels. Labels are trimmed
    /// and uppercased, so cosmetic spacing differences do not trip the
    /// check.
    pub fn of_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut hasher = sha2::Sha256::new();
        for label in labels {
            hasher.update(label.as_ref().trim().to_uppercase().as_bytes());
            hasher.update([0x1f]);
        }
        Self(hex::encode(hasher.finalize()))
    }

    /// Fingerprint of an observed header row.
    pub fn of_header(header: &RawRow) -> Self {
        Self::of_labels(header.iter().map(|(_, value)| value.as_display_text()))
    }

    pub fn matches(&self, header: &RawRow) -> bool {
        *self == Self::of_header(header)
    }

    pub fn as_hex(&self) -> &str {
        &self.0
    }
}

/// One vendor's declarative column layout, as stored on disk (TOML).
///
/// ```toml
/// vendor = "ORBEGOZO"
/// version = 2
/// default_category = "PAE"
/// expected_headers = ["", "ARTICULO", "", "NETO", "PVP"]
///
/// [columns]
/// code = "col_0"
/// name = "col_1"
/// purchasePrice = "col_3"
/// salePrice = "col_4"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorManifest {
    pub vendor: String,
    pub version: u32,
    #[serde(default)]
    pub default_category: String,
    /// Header labels the layout was authored against; empty to skip the
    /// fingerprint check (heuristic-era adapters).
    #[serde(default)]
    pub expected_headers: Vec<String>,
    /// Role token (camelCase, as serialized by [`ColumnRole`]) to column key.
    pub columns: BTreeMap<String, String>,
}

impl VendorManifest {
    pub fn parse(text: &str) -> Result<Self, VendorError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, VendorError> {
        let text = std::fs::read_to_string(path).map_err(|source| VendorError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    /// Compiles the manifest into a registry adapter, rejecting unknown
    /// role tokens up front.
    pub fn into_adapter(self) -> Result<VendorAdapter, VendorError> {
        let mut overrides = ColumnRoleMap::new();
        for (token, key) in &self.columns {
            let role: ColumnRole = token.parse().map_err(|_| VendorError::UnknownRole {
                vendor: self.vendor.clone(),
                role: token.clone(),
            })?;
            overrides.insert(role, key.clone());
        }
        let fingerprint = if self.expected_headers.is_empty() {
            None
        } else {
            Some(HeaderFingerprint::of_labels(&self.expected_headers))
        };
        Ok(VendorAdapter {
            canonical_name: self.vendor.trim().to_uppercase(),
            overrides,
            default_category: self.default_category,
            fingerprint,
            version: self.version,
        })
    }
}
