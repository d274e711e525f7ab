//! Boolean cleaning.

use tarifa_model::RawValue;

const TRUE_TOKENS: [&str; 6] = ["TRUE", "SI", "SÍ", "1", "YES", "Y"];

/// Cleans a cell to a boolean: the usual affirmative tokens
/// (case-insensitive) and non-zero numbers are true, everything else is
/// false.
pub fn clean_boolean(raw: &RawValue) -> bool {
    match raw {
        RawValue::Number(value) => *value != 0.0,
        RawValue::Empty => false,
        RawValue::Text(text) => {
            let token = text.trim().to_uppercase();
            if TRUE_TOKENS.contains(&token.as_str()) {
                return true;
            }
            token.parse::<f64>().map(|value| value != 0.0).unwrap_or(false)
        }
    }
}
