/// Format a price for display: grouping separators, at most three fraction
/// digits, trailing zeros dropped (`15000` → `$15,000`, `99.5` → `$99.5`).
///
/// Non-finite values display as zero.
pub fn format_currency(value: f64, symbol: &str) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let fixed = format!("{:.3}", value.abs());
    let (integral, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut out = String::with_capacity(symbol.len() + fixed.len() + fixed.len() / 3 + 1);
    out.push_str(symbol);
    if value < 0.0 && (integral != "0" || !fraction.is_empty()) {
        out.push('-');
    }
    out.push_str(&group_thousands(integral));
    if !fraction.is_empty() {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
