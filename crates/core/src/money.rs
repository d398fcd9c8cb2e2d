//! Money formatting

/// Format a dollar amount as `1,234.56 $`.
///
/// The value is rounded to cents straight from its binary form (ties go to
/// even) and thousands are grouped with commas.
pub fn format_money(amount: f64) -> String {
    if !amount.is_finite() {
        return format!("{amount} $");
    }

    let fixed = format!("{amount:.2}");
    let (sign, digits) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (whole, cents) = digits.split_once('.').unwrap_or((digits, "00"));

    format!("{sign}{}.{cents} $", group_thousands(whole))
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
