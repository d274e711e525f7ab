use std::collections::BTreeMap;

use tarifa_core::{CatalogProduct, CatalogRepository, ImportPipeline, normalize_price_list};
use tarifa_model::{ColumnRoleMap, NormalizedProduct, RawRow};
use tarifa_vendors::{VendorRegistry, spanish_retail_config};

/// In-memory stand-in for the catalog store.
#[derive(Default)]
struct FakeRepository {
    products: BTreeMap<String, CatalogProduct>,
    categories: BTreeMap<String, String>,
    next_id: usize,
}

impl FakeRepository {
    fn next_id(&mut self) -> String {
        self.next_id += 1;
        format!("id-{}", self.next_id)
    }
}

impl CatalogRepository for FakeRepository {
    fn find_by_code(&self, code: &str) -> anyhow::Result<Option<CatalogProduct>> {
        Ok(self.products.get(code).cloned())
    }

    fn create(&mut self, product: &NormalizedProduct) -> anyhow::Result<CatalogProduct> {
        let stored = CatalogProduct {
            id: self.next_id(),
            product: product.clone(),
        };
        self.products.insert(product.code.clone(), stored.clone());
        Ok(stored)
    }

    fn update(&mut self, id: &str, product: &NormalizedProduct) -> anyhow::Result<CatalogProduct> {
        let stored = CatalogProduct {
            id: id.to_string(),
            product: product.clone(),
        };
        self.products.insert(product.code.clone(), stored.clone());
        Ok(stored)
    }

    fn resolve_or_create_category(&mut self, name: &str) -> anyhow::Result<String> {
        if let Some(id) = self.categories.get(name) {
            return Ok(id.clone());
        }
        let id = format!("cat-{}", self.categories.len() + 1);
        self.categories.insert(name.to_string(), id.clone());
        Ok(id)
    }
}

fn price_list() -> Vec<RawRow> {
    vec![
        RawRow::new()
            .with("REFERENCIA", "REFERENCIA")
            .with("DESCRIPCION", "DESCRIPCION")
            .with("COSTE", "COSTE")
            .with("PVP", "PVP")
            .with("STOCK", "STOCK"),
        RawRow::new().with("REFERENCIA", "FRIGORIFICOS"),
        RawRow::new()
            .with("REFERENCIA", "A1")
            .with("DESCRIPCION", "Frigo X")
            .with("COSTE", "100")
            .with("PVP", "150")
            .with("STOCK", "3"),
        RawRow::new()
            .with("REFERENCIA", "A2")
            .with("DESCRIPCION", "Frigo Y")
            .with("COSTE", "90")
            .with("PVP", "0")
            .with("STOCK", "2"),
    ]
}

#[test]
fn first_import_creates_then_updates() {
    let mut repository = FakeRepository::default();
    let registry = VendorRegistry::spanish_retail();
    let config = spanish_retail_config();
    let mut pipeline = ImportPipeline::new(&mut repository, &registry, &config);

    let summary = pipeline
        .run(&price_list(), "acme", &ColumnRoleMap::new())
        .unwrap();
    assert_eq!(summary.vendor, "ACME");
    assert_eq!(summary.created, 1);
    assert_eq!(summary.updated, 0);
    assert_eq!(summary.categories, vec!["FRIGORIFICOS".to_string()]);
    assert_eq!(summary.skipped.non_positive_price, 1);
    assert_eq!(summary.skipped.category_rows, 1);

    let summary = pipeline
        .run(&price_list(), "acme", &ColumnRoleMap::new())
        .unwrap();
    assert_eq!(summary.created, 0);
    assert_eq!(summary.updated, 1);

    assert_eq!(repository.products.len(), 1);
    assert_eq!(repository.categories.len(), 1);
    let stored = &repository.products["A1"];
    assert_eq!(stored.product.sale_price, 150.0);
    assert_eq!(stored.product.vendor_name, "ACME");
}

#[test]
fn file_imports_go_through_the_table_source() {
    use std::path::Path;
    use tarifa_core::TableSource;

    /// Reader double: hands back a canned table for any path.
    struct CannedSource(Vec<RawRow>);

    impl TableSource for CannedSource {
        fn read(&self, _path: &Path) -> anyhow::Result<Vec<RawRow>> {
            Ok(self.0.clone())
        }
    }

    let mut repository = FakeRepository::default();
    let registry = VendorRegistry::spanish_retail();
    let config = spanish_retail_config();
    let mut pipeline = ImportPipeline::new(&mut repository, &registry, &config);

    let source = CannedSource(price_list());
    let summary = pipeline
        .run_file(&source, Path::new("inbox/acme.csv"), "acme", &ColumnRoleMap::new())
        .unwrap();
    assert_eq!(summary.created, 1);
}

#[test]
fn rejected_tables_import_nothing_but_report_why() {
    let mut repository = FakeRepository::default();
    let registry = VendorRegistry::spanish_retail();
    let config = spanish_retail_config();
    let mut pipeline = ImportPipeline::new(&mut repository, &registry, &config);

    let rows = vec![
        RawRow::new().with("X", "IMPORTE").with("Y", "CANTIDAD"),
        RawRow::new().with("X", "100").with("Y", "3"),
    ];
    let summary = pipeline.run(&rows, "acme", &ColumnRoleMap::new()).unwrap();
    assert_eq!(summary.upserted(), 0);
    assert!(summary.rejection.is_some());
    assert!(repository.products.is_empty());
}

#[test]
fn fingerprint_mismatches_abort_before_the_repository() {
    use tarifa_vendors::VendorManifest;

    let manifest = VendorManifest::parse(
        r#"
vendor = "FAGOR"
version = 3
expected_headers = ["REF", "ARTICULO", "PVP"]

[columns]
code = "col_0"
name = "col_1"
salePrice = "col_2"
"#,
    )
    .unwrap();
    let registry = VendorRegistry::new().with_adapter(manifest.into_adapter().unwrap());
    let config = spanish_retail_config();

    let rows = vec![
        RawRow::new()
            .with("col_0", "ARTICULO")
            .with("col_1", "REF")
            .with("col_2", "PVP"),
    ];
    let result = normalize_price_list(&rows, "FAGOR", &ColumnRoleMap::new(), &registry, &config);
    assert!(result.is_err());
}

#[test]
fn caller_overrides_beat_adapter_overrides() {
    let registry = VendorRegistry::spanish_retail();
    let config = spanish_retail_config();

    // ORBEGOZO's adapter maps salePrice to col_3; this export moved it.
    let rows = vec![
        RawRow::new()
            .with("col_0", "")
            .with("col_1", "")
            .with("col_2", "")
            .with("col_3", "")
            .with("col_4", "")
            .with("col_5", ""),
        RawRow::new()
            .with("col_0", "O-100")
            .with("col_1", "Batidora BT-2")
            .with("col_2", "12,50")
            .with("col_3", "")
            .with("col_4", "10")
            .with("col_5", "19,95"),
    ];
    let overrides = ColumnRoleMap::new().with(tarifa_model::ColumnRole::SalePrice, "col_5");
    let report =
        normalize_price_list(&rows, "ORBEGOZO", &overrides, &registry, &config).unwrap();
    assert_eq!(report.products.len(), 1);
    assert_eq!(report.products[0].sale_price, 19.95);
    assert_eq!(report.products[0].category, "PAE");
}
