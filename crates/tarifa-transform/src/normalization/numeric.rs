//! Price and number cleaning.
//!
//! Vendor files mix European decimal commas, thousands dots and currency
//! noise (`"1.234,56 €"`). Cleaning keeps digit/separator characters only,
//! treats the comma as the decimal separator, and when several dots remain
//! keeps the last one as the decimal point while the earlier ones join the
//! integer part.

use tarifa_model::RawValue;

/// Cleans a price cell to a number.
///
/// Already-numeric cells pass through unchanged; empty or unparseable text
/// cleans to `0.0`. `"1.234,56"` cleans to `1234.56`.
pub fn clean_price(raw: &RawValue) -> f64 {
    match raw {
        RawValue::Number(value) => *value,
        RawValue::Empty => 0.0,
        RawValue::Text(text) => parse_decimal(text, false),
    }
}

/// Cleans a general numeric cell, additionally keeping a sign.
pub fn clean_number(raw: &RawValue) -> f64 {
    match raw {
        RawValue::Number(value) => *value,
        RawValue::Empty => 0.0,
        RawValue::Text(text) => parse_decimal(text, true),
    }
}

fn parse_decimal(text: &str, keep_sign: bool) -> f64 {
    let mut filtered = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '0'..='9' | '.' => filtered.push(ch),
            ',' => filtered.push('.'),
            '-' if keep_sign => filtered.push('-'),
            _ => {}
        }
    }
    collapse_thousands(&filtered).parse::<f64>().unwrap_or(0.0)
}

/// Keeps only the last `.` as the decimal point; earlier ones are
/// thousands separators and join the integer part.
fn collapse_thousands(filtered: &str) -> String {
    if filtered.matches('.').count() <= 1 {
        return filtered.to_string();
    }
    let Some((head, tail)) = filtered.rsplit_once('.') else {
        return filtered.to_string();
    };
    let mut joined: String = head.chars().filter(|ch| *ch != '.').collect();
    joined.push('.');
    joined.push_str(tail);
    joined
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_comma_with_thousands_dot() {
        assert_eq!(clean_price(&RawValue::from("1.234,56")), 1234.56);
        assert_eq!(clean_price(&RawValue::from("12,5")), 12.5);
    }

    #[test]
    fn currency_noise_is_stripped() {
        assert_eq!(clean_price(&RawValue::from("1.234,56 €")), 1234.56);
        assert_eq!(clean_price(&RawValue::from("PVP: 99,90")), 99.9);
    }

    #[test]
    fn multiple_dots_collapse_into_integer_part() {
        assert_eq!(clean_price(&RawValue::from("1.234.567,89")), 1234567.89);
        assert_eq!(clean_price(&RawValue::from("1.2.3")), 12.3);
    }

    #[test]
    fn unparseable_and_empty_default_to_zero() {
        assert_eq!(clean_price(&RawValue::from("")), 0.0);
        assert_eq!(clean_price(&RawValue::from("consultar")), 0.0);
        assert_eq!(clean_price(&RawValue::Empty), 0.0);
    }

    #[test]
    fn numeric_cells_pass_through() {
        assert_eq!(clean_price(&RawValue::from(150.0)), 150.0);
        // Already-numeric input is returned unchanged, sign included.
        assert_eq!(clean_price(&RawValue::from(-3.5)), -3.5);
    }

    #[test]
    fn clean_number_keeps_sign() {
        assert_eq!(clean_number(&RawValue::from("-12,5")), -12.5);
        assert_eq!(clean_price(&RawValue::from("-12,5")), 12.5);
    }
}
