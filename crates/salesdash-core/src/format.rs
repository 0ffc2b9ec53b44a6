//! Display formatting for dashboard values

/// Format an integer with comma thousands separators (1234567 -> "1,234,567")
pub fn format_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Whole currency amount with separators ("$1,234")
pub fn format_currency(value: i64) -> String {
    if value < 0 {
        format!("-${}", format_thousands(value).trim_start_matches('-'))
    } else {
        format!("${}", format_thousands(value))
    }
}

/// Price with cents ("$12.50")
pub fn format_price(value: f64) -> String {
    format!("${:.2}", value)
}
