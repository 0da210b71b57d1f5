//! Phone number normalization

/// Country calling code assumed for ten-digit numbers
pub const DEFAULT_COUNTRY_CODE: char = '1';

/// Normalize a free-form phone number to `+<country><number>`
///
/// Every non-digit is dropped. Ten digits get the default country code,
/// eleven digits must already start with it. Anything else is rejected.
pub fn normalize_phone(raw: &str) -> Option<String> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();

    match digits.len() {
        10 => Some(format!("+{}{}", DEFAULT_COUNTRY_CODE, digits)),
        11 if digits.starts_with(DEFAULT_COUNTRY_CODE) => Some(format!("+{}", digits)),
        _ => None,
    }
}

/// Hide all but the last four digits, for logs
pub fn mask_phone(phone: &str) -> String {
    let visible = 4;
    let count = phone.chars().count();
    if count <= visible {
        return "*".repeat(count);
    }

    phone
        .chars()
        .enumerate()
        .map(|(i, c)| {
            if i >= count - visible || c == '+' {
                c
            } else {
                '*'
            }
        })
        .collect()
}
