use rust_decimal::Decimal;
use thiserror::Error;

/// Error returned when a count field holds something other than a whole number.
#[derive(Debug, Error)]
#[error("invalid number '{input}': {source}")]
pub struct ParseCountError {
    input: String,
    #[source]
    source: std::num::ParseIntError,
}

/// Normalizes input for number parsing: trims whitespace and removes commas (thousands separator).
fn normalize_number_input(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Parses a license or storage count.
///
/// Empty or whitespace-only input is `Ok(None)` so the form can report it
/// as missing. Negative values are passed through for validation to reject.
pub fn parse_count(s: &str) -> Result<Option<i64>, ParseCountError> {
    let normalized = normalize_number_input(s);
    if normalized.is_empty() {
        return Ok(None);
    }
    normalized.parse().map(Some).map_err(|e| {
        tracing::warn!(input = %s, "invalid count: {}", e);
        ParseCountError {
            input: s.to_string(),
            source: e,
        }
    })
}

/// Formats a price as dollars, e.g. `$1,036.80`. Whole amounts drop the cents.
pub fn format_price(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    let text = if rounded.fract().is_zero() {
        rounded.trunc().to_string()
    } else {
        format!("{:.2}", rounded)
    };
    format!("${}", group_thousands(&text))
}

/// Inserts comma separators into the integer part of a plain decimal string.
fn group_thousands(text: &str) -> String {
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn parse_count_accepts_comma_thousands_separator() {
        assert_eq!(parse_count("1,500").unwrap(), Some(1500));
    }

    #[test]
    fn parse_count_trims_whitespace() {
        assert_eq!(parse_count("  12  ").unwrap(), Some(12));
    }

    #[test]
    fn parse_count_empty_is_none() {
        assert_eq!(parse_count("").unwrap(), None);
        assert_eq!(parse_count("   ").unwrap(), None);
    }

    #[test]
    fn parse_count_keeps_negative_values() {
        assert_eq!(parse_count("-2").unwrap(), Some(-2));
    }

    #[test]
    fn parse_count_rejects_fractions_and_text() {
        assert!(parse_count("1.5").is_err());
        assert!(parse_count("ten").is_err());
    }

    #[test]
    fn format_price_drops_cents_on_whole_amounts() {
        assert_eq!(format_price(dec!(83)), "$83");
        assert_eq!(format_price(dec!(0)), "$0");
    }

    #[test]
    fn format_price_keeps_two_decimals() {
        assert_eq!(format_price(dec!(86.4)), "$86.40");
        assert_eq!(format_price(dec!(1036.80)), "$1,036.80");
    }

    #[test]
    fn format_price_groups_thousands() {
        assert_eq!(format_price(dec!(1234567)), "$1,234,567");
    }
}
