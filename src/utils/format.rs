/// Format a display balance the way the wallet UI does: en-US digit grouping,
/// at least 2 and at most 4 fraction digits.
pub fn format_balance(amount: f64) -> String {
    let fixed = format!("{:.4}", round_half_away(amount.abs(), 4));
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));

    let mut frac = frac_part.trim_end_matches('0').to_string();
    while frac.len() < 2 {
        frac.push('0');
    }

    let sign = if amount < 0.0 && fixed.chars().any(|c| c != '0' && c != '.') {
        "-"
    } else {
        ""
    };

    format!("{}{}.{}", sign, group_thousands(int_part), frac)
}

/// Format a USD amount with two fixed decimals
pub fn format_usd(value: f64) -> String {
    format!("${:.2}", round_half_away(value, 2))
}

/// Round to `digits` decimals with ties away from zero; `{:.N}` alone rounds ties to even
fn round_half_away(value: f64, digits: i32) -> f64 {
    let scale = 10f64.powi(digits);
    (value * scale).round() / scale
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

/// Shorten an address for display (`AbCd...WxYz`)
pub fn short_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 11 {
        return address.to_string();
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}
