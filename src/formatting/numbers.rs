//! Display formatting for currency amounts and percentages.
//!
//! Metrics are computed unrounded; rounding happens only here.

/// Group the integer part with thousands separators.
///
/// ```rust
/// use airdrop_manager::formatting::format_number;
///
/// assert_eq!(format_number(1234567.0, 0), "1,234,567");
/// assert_eq!(format_number(-1234.5, 2), "-1,234.50");
/// ```
pub fn format_number(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (integer, fraction) = match formatted.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 && formatted.chars().any(|c| c != '0' && c != '.') {
        "-"
    } else {
        ""
    };
    match fraction {
        Some(fraction) => format!("{}{}.{}", sign, grouped, fraction),
        None => format!("{}{}", sign, grouped),
    }
}

/// `$3.50B`, `$2.50M`, or `$700,000` below a million.
pub fn format_currency(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let magnitude = value.abs();
    let millions = magnitude / 1_000_000.0;
    // Promote before printing so 999.999M shows as $1.00B, not $1000.00M.
    if magnitude >= 1_000_000_000.0 || rounds_to_thousand(millions) {
        format!("{}${:.2}B", sign, magnitude / 1_000_000_000.0)
    } else if magnitude >= 1_000_000.0 {
        format!("{}${:.2}M", sign, millions)
    } else {
        let whole = format_number(magnitude, 0);
        if whole == "0" {
            "$0".to_string()
        } else {
            format!("{}${}", sign, whole)
        }
    }
}

fn rounds_to_thousand(scaled: f64) -> bool {
    (scaled * 100.0).round() >= 100_000.0
}

/// Currency with an explicit `+` on gains.
pub fn format_signed_currency(value: f64) -> String {
    if value >= 0.0 {
        format!("+{}", format_currency(value))
    } else {
        format_currency(value)
    }
}

/// Whole-percent ROI with an explicit `+` on gains.
pub fn format_roi(roi: f64) -> String {
    let sign = if roi >= 0.0 { "+" } else { "" };
    format!("{}{}%", sign, format_number(roi, 0))
}

/// Four-decimal dollar amount used for per-point prices.
pub fn format_per_point(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}${:.4}", sign, value.abs())
}
