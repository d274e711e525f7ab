//! Text cleaning.

use tarifa_model::RawValue;

/// Cleans a cell to trimmed text; missing cells clean to the empty string
/// and numbers render without a trailing fractional zero run.
pub fn clean_text(raw: &RawValue) -> String {
    raw.as_display_text()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_stringifies() {
        assert_eq!(clean_text(&RawValue::from("  Frigo X ")), "Frigo X");
        assert_eq!(clean_text(&RawValue::from(21.0)), "21");
        assert_eq!(clean_text(&RawValue::Empty), "");
    }
}
