//! Curated Spanish appliance-retail vocabulary.
//!
//! Synonym lists are ordered most-specific-first: the resolver tries
//! synonyms in list order, so `PVP` must win before a generic `PRECIO`
//! column gets a chance.

use tarifa_map::RoleSynonyms;
use tarifa_model::ColumnRole;
use tarifa_transform::{CategoryRules, EngineConfig, TransformConfig};

/// Section keywords seen in vendor price lists.
pub const CATEGORY_KEYWORDS: [&str; 12] = [
    "LAVADORA",
    "SECADORA",
    "FRIGORÍFICO",
    "FRIGORIFICO",
    "CONGELADOR",
    "HORNO",
    "MICROONDAS",
    "CAMPANA",
    "VITROCERÁMICA",
    "VITROCERAMICA",
    "LAVAVAJILLAS",
    "ENCIMERA",
];

/// Brands some vendors use as section headers.
pub const BRAND_CATEGORIES: [&str; 6] = [
    "CORBERÓ", "CORBERO", "CANDY", "BEKO", "BALAY", "BOSCH",
];

/// Leading name tokens that are packaging words, never brands.
pub const BRAND_STOPLIST: [&str; 6] = ["PACK", "SET", "KIT", "UNIDAD", "CAJA", "ROLLO"];

/// Role synonym table for Spanish supplier exports.
pub fn role_synonyms() -> RoleSynonyms {
    RoleSynonyms::new()
        .with(
            ColumnRole::Code,
            ["REFERENCIA", "CÓDIGO", "CODIGO", "COD.", "REF.", "REF", "SKU"],
        )
        .with(
            ColumnRole::Name,
            [
                "DESCRIPCIÓN",
                "DESCRIPCION",
                "NOMBRE",
                "PRODUCTO",
                "ARTICULO",
                "ARTÍCULO",
                "DENOMINACIÓN",
                "DENOMINACION",
                "DESC",
            ],
        )
        .with(
            ColumnRole::LongDescription,
            ["DESCRIPCION LARGA", "DETALLE", "CARACTERÍSTICAS", "CARACTERISTICAS"],
        )
        .with(
            ColumnRole::UnitsOnHand,
            ["EXISTENCIAS", "STOCK", "UNIDADES", "UDS", "DISPONIBLE", "CANTIDAD"],
        )
        .with(ColumnRole::MinStock, ["STOCK MÍNIMO", "STOCK MINIMO", "MÍNIMO", "MINIMO"])
        .with(
            ColumnRole::PurchasePrice,
            ["PRECIO COMPRA", "P.COMPRA", "COSTE", "COSTO", "NETO", "COMPRA"],
        )
        .with(
            ColumnRole::SalePrice,
            ["P.V.P", "PVP", "PRECIO VENTA", "P.VENTA", "VENTA", "PRECIO"],
        )
        .with(
            ColumnRole::FinalSalePrice,
            ["PVP FINAL", "PRECIO FINAL", "PVP CON IVA", "FINAL"],
        )
        .with(
            ColumnRole::UnitsSold,
            ["UDS VENDIDAS", "VENDIDAS", "VENDIDOS", "VENTAS"],
        )
        .with(
            ColumnRole::StoreStock,
            ["STOCK TIENDA", "TIENDA", "ALMACÉN", "ALMACEN"],
        )
        .with(
            ColumnRole::Notes,
            ["OBSERVACIONES", "NOTAS", "NOTA", "COMENTARIOS", "OBS"],
        )
        .with(ColumnRole::Brand, ["MARCA", "FABRICANTE"])
        .with(
            ColumnRole::Category,
            ["CATEGORÍA", "CATEGORIA", "FAMILIA", "SECCIÓN", "SECCION", "GRUPO"],
        )
        .with(
            ColumnRole::Subcategory,
            ["SUBCATEGORÍA", "SUBCATEGORIA", "SUBFAMILIA"],
        )
        .with(
            ColumnRole::Barcode,
            ["CÓDIGO DE BARRAS", "CODIGO BARRAS", "EAN13", "EAN", "BARRAS"],
        )
        .with(ColumnRole::Discount, ["DESCUENTO", "DTO", "REBAJA"])
        .with(ColumnRole::Margin, ["MARGEN"])
        .with(ColumnRole::UnitProfit, ["BENEFICIO UNITARIO", "BENEFICIO UNIDAD", "GANANCIA"])
        .with(ColumnRole::TotalProfit, ["BENEFICIO TOTAL", "BENEFICIO"])
        .with(ColumnRole::VatRate, ["TIPO IVA", "I.V.A", "IVA"])
        .with(ColumnRole::SurchargeRate, ["RECARGO", "R.E."])
        .with(ColumnRole::Weight, ["PESO", "KILOS", "KG"])
        .with(ColumnRole::Dimensions, ["MEDIDAS", "DIMENSIONES", "TAMAÑO"])
        .with(ColumnRole::Color, ["COLOR"])
        .with(ColumnRole::Warranty, ["GARANTÍA", "GARANTIA"])
        .with(ColumnRole::DateAdded, ["FECHA ALTA", "FECHA"])
        .with(ColumnRole::ImageUrl, ["IMAGEN", "FOTO", "URL"])
        .with(
            ColumnRole::EnergyRating,
            [
                "CLASE ENERGÉTICA",
                "CLASE ENERGETICA",
                "ETIQUETA ENERGÉTICA",
                "ETIQUETA ENERGETICA",
                "EFICIENCIA",
            ],
        )
}

/// Category-boundary rules for the appliance vertical.
pub fn category_rules() -> CategoryRules {
    CategoryRules::new()
        .with_keywords(CATEGORY_KEYWORDS)
        .with_brand_categories(BRAND_CATEGORIES)
}

/// Transformer knobs for the appliance vertical.
pub fn transform_config() -> TransformConfig {
    TransformConfig::new().with_brand_stoplist(BRAND_STOPLIST)
}

/// The full curated engine configuration.
pub fn spanish_retail_config() -> EngineConfig {
    EngineConfig {
        synonyms: role_synonyms(),
        category_rules: category_rules(),
        transform: transform_config(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn specific_synonyms_come_first() {
        let synonyms = role_synonyms();
        let sale = synonyms.synonyms(ColumnRole::SalePrice);
        let precio = sale.iter().position(|s| s == "PRECIO").unwrap();
        let pvp = sale.iter().position(|s| s == "PVP").unwrap();
        assert!(pvp < precio);
    }

    #[test]
    fn every_role_with_synonyms_has_uppercase_entries() {
        let synonyms = role_synonyms();
        for role in ColumnRole::ALL {
            for synonym in synonyms.synonyms(role) {
                assert_eq!(synonym, &synonym.to_uppercase(), "role {role}");
            }
        }
    }
}
