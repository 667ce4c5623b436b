/// Maximum number of digits kept in a remote identifier.
pub const MAX_ID_DIGITS: usize = 12;

/// Number of digits per displayed group.
pub const ID_GROUP_LEN: usize = 4;

/// Returns the decimal digits of `raw`, truncated to [`MAX_ID_DIGITS`].
pub fn id_digits(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_digit)
        .take(MAX_ID_DIGITS)
        .collect()
}

/// Formats an identifier as `0000 0000 0000`.
///
/// Non-digits are dropped, extra digits past [`MAX_ID_DIGITS`] are cut off
/// and the rest is grouped by four. Total over any input and idempotent.
pub fn format_id(raw: &str) -> String {
    let digits = id_digits(raw);
    let mut formatted = String::with_capacity(digits.len() + digits.len() / ID_GROUP_LEN);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && index % ID_GROUP_LEN == 0 {
            formatted.push(' ');
        }
        formatted.push(ch);
    }
    formatted
}

/// Removes the last digit of `raw` and formats the remainder.
pub fn backspace(raw: &str) -> String {
    let mut digits = id_digits(raw);
    digits.pop();
    format_id(&digits)
}
