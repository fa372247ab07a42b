//! Text formatting helpers shared by the chart builders and the table page.
//!
//! Amounts are rendered with two decimals and a comma thousands separator,
//! e.g. `-1,234.50`. Enum-style names such as `SHORT_TERM_ASSET` are shown
//! title-cased as `Short Term Asset`.

/// Title-case an underscore separated identifier.
pub fn title_case(value: &str) -> String {
    value
        .split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format an amount with two decimals and thousands separators.
pub fn format_amount(amount: f64) -> String {
    let cents = (amount * 100.0).round() as i64;
    let is_negative = cents < 0;
    let abs_cents = cents.abs();
    let whole = format_with_thousands(abs_cents / 100, ',');
    let fractional = abs_cents % 100;

    if is_negative {
        format!("-{}.{:02}", whole, fractional)
    } else {
        format!("{}.{:02}", whole, fractional)
    }
}

/// Format a number with thousands separators.
fn format_with_thousands(n: i64, sep: char) -> String {
    if n == 0 {
        return "0".to_string();
    }

    let s = n.to_string();
    let chars: Vec<char> = s.chars().rev().collect();
    let mut result = Vec::new();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(sep);
        }
        result.push(*c);
    }

    result.iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case_multi_word() {
        assert_eq!(title_case("SHORT_TERM_ASSET"), "Short Term Asset");
    }

    #[test]
    fn test_title_case_single_word() {
        assert_eq!(title_case("cash"), "Cash");
    }

    #[test]
    fn test_title_case_empty() {
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_format_amount_thousands() {
        assert_eq!(format_amount(1234567.891), "1,234,567.89");
    }

    #[test]
    fn test_format_amount_negative() {
        assert_eq!(format_amount(-1234.5), "-1,234.50");
    }

    #[test]
    fn test_format_amount_zero() {
        assert_eq!(format_amount(0.0), "0.00");
    }

    #[test]
    fn test_format_amount_small_negative() {
        assert_eq!(format_amount(-0.25), "-0.25");
    }
}
