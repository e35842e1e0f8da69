//! Display formatting for numbers, currency, percentages and addresses.
//!
//! Output follows the `en-US` conventions the dashboard renders with:
//! `,` thousands separator, `.` decimal point.

/// Characters kept from each end by `shorten_address_default`
pub const DEFAULT_START_CHARS: usize = 6;
pub const DEFAULT_END_CHARS: usize = 4;

const ELLIPSIS: &str = "...";

// ============================================
// NUMBERS
// ============================================

fn non_finite(n: f64) -> Option<String> {
    if n.is_nan() {
        Some("NaN".to_string())
    } else if n.is_infinite() {
        Some(if n > 0.0 { "∞" } else { "-∞" }.to_string())
    } else {
        None
    }
}

/// Insert `,` every three digits from the right
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Render `|n|` with `precision` fractional digits, grouped, with the
/// sign and `prefix` in front. `trim` drops trailing fractional zeros.
fn render(n: f64, precision: usize, trim: bool, prefix: &str) -> String {
    let fixed = format!("{:.*}", precision, n.abs());
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let fraction = if trim { fraction.trim_end_matches('0') } else { fraction };

    let is_zero = integer.bytes().all(|b| b == b'0') && fraction.bytes().all(|b| b == b'0');
    let sign = if n < 0.0 && !is_zero { "-" } else { "" };

    if fraction.is_empty() {
        format!("{}{}{}", sign, prefix, group_thousands(integer))
    } else {
        format!("{}{}{}.{}", sign, prefix, group_thousands(integer), fraction)
    }
}

/// `1000000.0` -> `"1,000,000"`, `1234.5` -> `"1,234.5"`.
///
/// At most three fractional digits are kept.
pub fn format_number(n: f64) -> String {
    non_finite(n).unwrap_or_else(|| render(n, 3, true, ""))
}

/// `1000.0` -> `"$1,000.00"`
pub fn format_currency(n: f64) -> String {
    format_currency_with(n, "$")
}

/// Currency rendering with a caller-chosen symbol
pub fn format_currency_with(n: f64, symbol: &str) -> String {
    non_finite(n).unwrap_or_else(|| render(n, 2, false, symbol))
}

/// `0.1234` -> `"12.34%"`
pub fn format_percent(fraction: f64) -> String {
    match non_finite(fraction) {
        Some(s) => format!("{}%", s),
        None => format!("{:.2}%", fraction * 100.0),
    }
}

// ============================================
// ADDRESSES & LONG STRINGS
// ============================================

/// Keep `start_chars` and `end_chars` around `separator`.
///
/// Strings shorter than `start_chars + end_chars` come back unchanged.
/// Counts characters, so multi-byte text is never split mid code point.
pub fn truncate_middle(s: &str, start_chars: usize, end_chars: usize, separator: &str) -> String {
    let len = s.chars().count();
    if len < start_chars.saturating_add(end_chars) {
        return s.to_string();
    }

    let head: String = s.chars().take(start_chars).collect();
    let tail: String = s.chars().skip(len - end_chars).collect();
    format!("{}{}{}", head, separator, tail)
}

/// `0x1234...abcd` style address abbreviation
pub fn shorten_address(address: &str, start_chars: usize, end_chars: usize) -> String {
    truncate_middle(address, start_chars, end_chars, ELLIPSIS)
}

pub fn shorten_address_default(address: &str) -> String {
    shorten_address(address, DEFAULT_START_CHARS, DEFAULT_END_CHARS)
}

// ============================================
// TESTS
// ============================================
