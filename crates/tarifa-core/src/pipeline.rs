//! Collaborator contracts and the import pipeline.

use std::path::Path;

use serde::{Deserialize, Serialize};

use tarifa_model::{ColumnRoleMap, NormalizeReport, NormalizedProduct, RawRow, SkipCounts,
    TableRejection};
use tarifa_transform::{EngineConfig, normalize_table};
use tarifa_vendors::{VendorError, VendorRegistry};

/// Decodes one source file into raw rows.
///
/// Implementations must preserve column order and must not drop empty
/// trailing columns: positional synthetic keys depend on stable ordering.
/// Decoding failures are the implementation's own errors; malformed files
/// never reach the engine.
pub trait TableSource {
    fn read(&self, path: &Path) -> anyhow::Result<Vec<RawRow>>;
}

/// A product as stored by the catalog, with its store identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogProduct {
    pub id: String,
    pub product: NormalizedProduct,
}

/// Persistence contract. Deduplication key is the product code; category
/// and provider relationship wiring happens behind this trait.
pub trait CatalogRepository {
    fn find_by_code(&self, code: &str) -> anyhow::Result<Option<CatalogProduct>>;
    fn create(&mut self, product: &NormalizedProduct) -> anyhow::Result<CatalogProduct>;
    fn update(&mut self, id: &str, product: &NormalizedProduct) -> anyhow::Result<CatalogProduct>;
    fn resolve_or_create_category(&mut self, name: &str) -> anyhow::Result<String>;
}

/// Runs the engine for one table under a vendor's configuration.
///
/// The registry picks the adapter (canonical name, overrides, default
/// category); a pinned header fingerprint is verified first and a mismatch
/// fails loudly rather than silently mis-mapping. Caller-supplied
/// overrides win over the adapter's own.
pub fn normalize_price_list(
    rows: &[RawRow],
    vendor_id: &str,
    overrides: &ColumnRoleMap,
    registry: &VendorRegistry,
    config: &EngineConfig,
) -> Result<NormalizeReport, VendorError> {
    let adapter = registry.adapter(vendor_id);
    if let Some(header) = rows.first() {
        adapter.verify_header(header)?;
    }

    let mut merged = adapter.overrides.clone();
    for (role, key) in overrides.iter() {
        merged.insert(role, key);
    }

    Ok(normalize_table(
        rows,
        &adapter.canonical_name,
        &adapter.default_category,
        &merged,
        config,
    ))
}

/// Outcome of one import run.
///
/// The audit trail is an explicit return value: callers that want to know
/// what a session created read it here instead of a process-global ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportSummary {
    pub vendor: String,
    pub created: usize,
    pub updated: usize,
    /// Category names resolved (and created on demand) this run, in
    /// first-seen order.
    pub categories: Vec<String>,
    pub skipped: SkipCounts,
    pub rejection: Option<TableRejection>,
}

impl ImportSummary {
    pub fn upserted(&self) -> usize {
        self.created + self.updated
    }
}

/// Orchestrates engine output into the catalog repository.
pub struct ImportPipeline<'a, R: CatalogRepository> {
    repository: &'a mut R,
    registry: &'a VendorRegistry,
    config: &'a EngineConfig,
}

impl<'a, R: CatalogRepository> ImportPipeline<'a, R> {
    pub fn new(
        repository: &'a mut R,
        registry: &'a VendorRegistry,
        config: &'a EngineConfig,
    ) -> Self {
        Self {
            repository,
            registry,
            config,
        }
    }

    /// Reads one source file through a table reader and imports it.
    pub fn run_file(
        &mut self,
        source: &dyn TableSource,
        path: &Path,
        vendor_id: &str,
        overrides: &ColumnRoleMap,
    ) -> anyhow::Result<ImportSummary> {
        let rows = source.read(path)?;
        self.run(&rows, vendor_id, overrides)
    }

    /// Normalizes one table and upserts every surviving product by code.
    pub fn run(
        &mut self,
        rows: &[RawRow],
        vendor_id: &str,
        overrides: &ColumnRoleMap,
    ) -> anyhow::Result<ImportSummary> {
        let report = normalize_price_list(rows, vendor_id, overrides, self.registry, self.config)?;
        let vendor = self.registry.canonical_name(vendor_id);

        for name in &report.categories {
            self.repository.resolve_or_create_category(name)?;
        }

        let mut created = 0usize;
        let mut updated = 0usize;
        for product in &report.products {
            match self.repository.find_by_code(&product.code)? {
                Some(existing) => {
                    self.repository.update(&existing.id, product)?;
                    updated += 1;
                }
                None => {
                    self.repository.create(product)?;
                    created += 1;
                }
            }
        }

        tracing::info!(
            vendor = %vendor,
            created,
            updated,
            skipped = report.skipped.total(),
            "import finished"
        );

        Ok(ImportSummary {
            vendor,
            created,
            updated,
            categories: report.categories,
            skipped: report.skipped,
            rejection: report.rejection,
        })
    }
}
