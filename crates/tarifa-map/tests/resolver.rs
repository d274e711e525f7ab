use tarifa_map::{RoleSynonyms, resolve_columns};
use tarifa_model::{ColumnRole, ColumnRoleMap, RawRow, RawValue};

fn synonyms() -> RoleSynonyms {
    RoleSynonyms::new()
        .with(ColumnRole::Code, ["REFERENCIA", "COD"])
        .with(ColumnRole::Name, ["DESCRIPCION", "NOMBRE"])
        .with(ColumnRole::PurchasePrice, ["COSTE"])
        .with(ColumnRole::SalePrice, ["PVP"])
        .with(ColumnRole::FinalSalePrice, ["PVP FINAL", "PRECIO FINAL"])
}

#[test]
fn explicit_overrides_win_over_heuristics() {
    // The header says PVP, but the caller knows better for this vendor.
    let header = RawRow::new()
        .with("c0", "REFERENCIA")
        .with("c1", "DESCRIPCION")
        .with("c2", "PVP")
        .with("c3", "TARIFA NETA");
    let overrides = ColumnRoleMap::new().with(ColumnRole::SalePrice, "c3");
    let roles = resolve_columns(&header, &synonyms(), &overrides).unwrap();
    assert_eq!(roles.get(ColumnRole::SalePrice), Some("c3"));
    assert_eq!(roles.get(ColumnRole::Code), Some("c0"));
}

#[test]
fn overrides_are_used_verbatim_without_validation() {
    // Overrides may point at columns the header does not even show.
    let header = RawRow::new().with("c0", "REFERENCIA").with("c1", "DESCRIPCION");
    let overrides = ColumnRoleMap::new().with(ColumnRole::Barcode, "col_9");
    let roles = resolve_columns(&header, &synonyms(), &overrides).unwrap();
    assert_eq!(roles.get(ColumnRole::Barcode), Some("col_9"));
}

#[test]
fn header_keys_back_up_empty_labels() {
    // Synthetic export with meaningful keys but blank first-row labels.
    let header = RawRow::new()
        .with("referencia", RawValue::Empty)
        .with("nombre_articulo", RawValue::Empty)
        .with("pvp_tarifa", RawValue::Empty);
    let roles = resolve_columns(&header, &synonyms(), &ColumnRoleMap::new()).unwrap();
    assert_eq!(roles.get(ColumnRole::Code), Some("referencia"));
    assert_eq!(roles.get(ColumnRole::Name), Some("nombre_articulo"));
    assert_eq!(roles.get(ColumnRole::SalePrice), Some("pvp_tarifa"));
}

#[test]
fn sale_price_repairs_from_final_sale_price() {
    let table = RoleSynonyms::new()
        .with(ColumnRole::Code, ["REFERENCIA"])
        .with(ColumnRole::Name, ["DESCRIPCION"])
        .with(ColumnRole::FinalSalePrice, ["PRECIO FINAL"]);
    let header = RawRow::new()
        .with("A", "REFERENCIA")
        .with("B", "DESCRIPCION")
        .with("C", "PRECIO FINAL");
    let roles = resolve_columns(&header, &table, &ColumnRoleMap::new()).unwrap();
    assert_eq!(roles.get(ColumnRole::FinalSalePrice), Some("C"));
    assert_eq!(roles.get(ColumnRole::SalePrice), Some("C"));
}

#[test]
fn purchase_only_tables_leave_sale_price_unresolved() {
    // The row transformer applies the per-row price fallback; the mapper
    // must not alias the purchase column at table level.
    let header = RawRow::new()
        .with("A", "REFERENCIA")
        .with("B", "DESCRIPCION")
        .with("C", "COSTE");
    let roles = resolve_columns(&header, &synonyms(), &ColumnRoleMap::new()).unwrap();
    assert_eq!(roles.get(ColumnRole::PurchasePrice), Some("C"));
    assert_eq!(roles.get(ColumnRole::SalePrice), None);
}

#[test]
fn missing_name_alone_is_enough_to_reject() {
    let header = RawRow::new().with("A", "REFERENCIA").with("B", "PVP");
    let rejection = resolve_columns(&header, &synonyms(), &ColumnRoleMap::new()).unwrap_err();
    assert_eq!(rejection.missing_roles, vec![ColumnRole::Name]);
}
