/// Text shown instead of a price.
pub const PRICE_ON_REQUEST: &str = "Pris på förfrågan";

/// Format a price the way the site shows it: whole kronor, non-breaking
/// space as thousands separator, `kr` suffix (`"12 500 kr"`).
///
/// A missing or zero price reads as [`PRICE_ON_REQUEST`].
pub fn format_price(price: Option<f64>) -> String {
    let amount = match price {
        Some(p) if p.is_finite() && p > 0.0 => p.round() as u64,
        _ => return PRICE_ON_REQUEST.to_string(),
    };

    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 * 2);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('\u{a0}');
        }
        grouped.push(c);
    }
    format!("{grouped}\u{a0}kr")
}
