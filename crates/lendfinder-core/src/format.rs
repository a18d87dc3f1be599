//! en-US display formatting for calculator output.

/// Formats an amount as US dollars with two decimals and thousands
/// separators, e.g. `1234.5` → `"$1,234.50"`, `-20.0` → `"-$20.00"`.
#[must_use]
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return "$0.00".to_string();
    }
    let cents = (amount.abs() * 100.0).round();
    let whole = (cents / 100.0).trunc();
    let frac = cents - whole * 100.0;
    let sign = if amount < 0.0 && cents > 0.0 { "-" } else { "" };
    format!("{sign}${}.{frac:02.0}", group_thousands(&format!("{whole:.0}")))
}

/// Formats a number with thousands separators and at most three fraction
/// digits, trailing zeros dropped: `360.0` → `"360"`, `1234.5` → `"1,234.5"`.
#[must_use]
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    let rendered = format!("{:.3}", value.abs());
    let (int_part, frac_part) = rendered.split_once('.').unwrap_or((rendered.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');
    let sign = if value < 0.0 && (int_part != "0" || !frac_part.is_empty()) {
        "-"
    } else {
        ""
    };
    let grouped = group_thousands(int_part);
    if frac_part.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{frac_part}")
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
