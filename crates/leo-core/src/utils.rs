//! Utility functions for the Leo admin client

/// Validate an identity-provider account id
///
/// Backend auth ids are opaque but bounded: non-empty, at most 128 chars,
/// alphanumeric plus `_` and `-`.
#[must_use]
pub fn validate_auth_id(auth_id: &str) -> bool {
    !auth_id.is_empty()
        && auth_id.len() <= 128
        && auth_id
            .chars()
            .all(|c| c.is_alphanumeric() || c == '_' || c == '-')
}

/// Truncate a label for table display, appending an ellipsis when cut
#[must_use]
pub fn truncate_label(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{cut}…")
}

/// Format a monetary amount for display
#[must_use]
pub fn format_amount(amount: f64) -> String {
    format!("${amount:.2}")
}

/// Mask a bank account number down to its last four digits
#[must_use]
pub fn mask_account_number(account_number: &str) -> String {
    let digits = account_number.chars().count();
    if digits <= 4 {
        return "****".to_string();
    }
    let tail: String = account_number
        .chars()
        .skip(digits.saturating_sub(4))
        .collect();
    format!("****{tail}")
}
