/// Currency suffix for prices (Kazakhstani tenge).
const CURRENCY_SUFFIX: &str = "₸";

/// Format a price with space-separated thousands, e.g. `4 000 000 ₸`.
/// Fractions are rounded away; listing prices are whole tenge.
pub fn format_price(price: f64) -> String {
    let rounded = price.round() as i64;
    let digits = rounded.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }

    let sign = if rounded < 0 { "-" } else { "" };
    format!("{}{} {}", sign, grouped, CURRENCY_SUFFIX)
}

/// Format a number without a trailing `.0` for whole values.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Truncate a string to a maximum number of characters, adding ellipsis if needed.
/// Counts chars rather than bytes so Cyrillic titles are cut cleanly.
pub fn truncate_string(s: &str, max_len: usize) -> String {
    let len = s.chars().count();
    if len <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    }
}

/// Pad (or truncate) to exactly `width` characters for column alignment.
pub fn pad_to_width(s: &str, width: usize) -> String {
    let cut = truncate_string(s, width);
    let pad = width - cut.chars().count();
    format!("{}{}", cut, " ".repeat(pad))
}
