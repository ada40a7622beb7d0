//! Currency display. Display only: totals are never rounded before this point.

use crate::config::DisplayConfig;

/// Format an amount as `$1,234.50` (symbol from config, two decimals,
/// thousands separators). Non-finite amounts format as zero.
pub fn format_price(value: f64, display: &DisplayConfig) -> String {
    let amount = if value.is_finite() { value } else { 0.0 };
    let cents = (amount.abs() * 100.0).round() as u64;
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };

    let prefix = if display.currency_symbol.is_empty() {
        format!("{} ", display.currency_code)
    } else {
        display.currency_symbol.clone()
    };

    format!(
        "{sign}{prefix}{}.{:02}",
        group_thousands(cents / 100),
        cents % 100
    )
}

fn group_thousands(whole: u64) -> String {
    let digits = whole.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
