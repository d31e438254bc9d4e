//! Display and input formatting helpers

/// Format an amount as US dollars with two decimals and thousands
/// separators.
///
/// ```
/// use salonlite_common::format::format_currency;
///
/// assert_eq!(format_currency(1234.5), "$1,234.50");
/// assert_eq!(format_currency(-3.0), "-$3.00");
/// ```
pub fn format_currency(amount: f64) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}${grouped}.{cents}")
}

/// Progressively format digits as `(XXX) XXX-XXXX`.
///
/// Non-digits are dropped and anything past ten digits is ignored, so the
/// function can be applied on every keystroke.
pub fn format_phone(input: &str) -> String {
    let digits: String = input.chars().filter(char::is_ascii_digit).take(10).collect();
    match digits.len() {
        0..=3 => digits,
        4..=6 => format!("({}) {}", &digits[..3], &digits[3..]),
        _ => format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..]),
    }
}

/// Keep digits and the first decimal point.
pub fn sanitize_price(input: &str) -> String {
    let mut seen_dot = false;
    input
        .chars()
        .filter(|ch| match ch {
            '0'..='9' => true,
            '.' if !seen_dot => {
                seen_dot = true;
                true
            }
            _ => false,
        })
        .collect()
}

/// Keep digits only.
pub fn sanitize_digits(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}
