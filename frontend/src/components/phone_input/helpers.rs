//! Normalization of the typed national number.

/// Minimum national digits before a value is considered complete. Shortest
/// assigned national significant numbers are four digits long.
pub const MIN_NATIONAL_DIGITS: usize = 4;

/// Builds the normalized international value from a dial code and the raw
/// tel-field input. Non-digits are stripped, leading zeros are kept. Returns
/// the empty string while the entry is incomplete, never a partial value.
pub fn normalize(dial: &str, national: &str) -> String {
    let digits: String = national.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() < MIN_NATIONAL_DIGITS {
        return String::new();
    }
    format!("+{}{}", dial, digits)
}
