//! Numeric and unit normalization for capacity tokens.

use regex::Captures;

/// Parses an OCR number token, accepting either `,` or `.` as the decimal
/// separator. Returns `None` for anything that is not a finite number.
pub fn parse_decimal(raw: &str) -> Option<f64> {
    raw.trim()
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Converts `value` expressed in `unit` to gigabytes.
///
/// Units are case-folded; French (`Go`, `Mo`, `To`) and binary (`GiB`,
/// `MiB`, `TiB`) spellings are accepted. Unrecognized units pass through
/// unchanged.
pub fn to_gigabytes(value: f64, unit: &str) -> f64 {
    match unit.trim().to_lowercase().as_str() {
        "tb" | "to" | "tib" => value * 1024.0,
        "mb" | "mo" | "mib" => value / 1024.0,
        _ => value,
    }
}

/// A capacity as displayed plus its gigabyte value.
#[derive(Debug, Clone, PartialEq)]
pub struct Quantity {
    pub display: String,
    /// `0.0` when the number token could not be parsed.
    pub gigabytes: f64,
}

impl Quantity {
    /// Builds a quantity from a match whose group 1 is the number and group 2
    /// the unit.
    pub fn from_captures(caps: &Captures<'_>) -> Option<Self> {
        let number = caps.get(1)?.as_str();
        let unit = caps.get(2)?.as_str();
        let gigabytes = parse_decimal(number)
            .map(|value| to_gigabytes(value, unit))
            .unwrap_or_default();
        Some(Self {
            display: format!("{number} {unit}"),
            gigabytes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    #[test]
    fn test_comma_and_dot_decimals_agree() {
        assert_eq!(parse_decimal("16,5"), Some(16.5));
        assert_eq!(parse_decimal("16.5"), Some(16.5));
        assert_eq!(
            to_gigabytes(parse_decimal("16,5").unwrap(), "Go"),
            to_gigabytes(parse_decimal("16.5").unwrap(), "GB")
        );
    }

    #[test]
    fn test_parse_failure_is_none() {
        assert_eq!(parse_decimal(""), None);
        assert_eq!(parse_decimal("sixteen"), None);
        assert_eq!(parse_decimal("1,2,3"), None);
    }

    #[test]
    fn test_unit_conversion() {
        assert_eq!(to_gigabytes(2048.0, "Mo"), 2.0);
        assert_eq!(to_gigabytes(2048.0, "MB"), 2.0);
        assert_eq!(to_gigabytes(1.0, "To"), 1024.0);
        assert_eq!(to_gigabytes(1.0, "tib"), 1024.0);
        assert_eq!(to_gigabytes(16.0, "GiB"), 16.0);
        assert_eq!(to_gigabytes(16.0, "parsecs"), 16.0);
    }

    #[test]
    fn test_quantity_from_captures() {
        let re = Regex::new(r"(\d+[.,]?\d*)\s*(GB|Go|MB|Mo)").unwrap();
        let caps = re.captures("Dedicated: 2048 Mo").unwrap();
        let quantity = Quantity::from_captures(&caps).unwrap();
        assert_eq!(quantity.display, "2048 Mo");
        assert_eq!(quantity.gigabytes, 2.0);
    }
}
