//! Formatting helpers shared across the workspace

use chrono::{DateTime, Datelike, Utc};
use rust_decimal::Decimal;

/// Group the integer digits of a numeric string with thousands separators
pub fn group_thousands(digits: &str) -> String {
    let mut result = String::new();
    let mut count = 0;
    for c in digits.chars().rev() {
        if count == 3 {
            result.push(',');
            count = 0;
        }
        result.push(c);
        count += 1;
    }
    result.chars().rev().collect()
}

/// Format a number with thousands separators, preserving sign and decimals
pub fn format_number(n: &Decimal) -> String {
    let s = format!("{:.2}", n.abs());
    let (int_part, frac_part) = match s.split_once('.') {
        Some((i, f)) => (i.to_string(), f.to_string()),
        None => (s, "00".to_string()),
    };
    let sign = if n.is_sign_negative() && !n.is_zero() { "-" } else { "" };
    format!("{}{}.{}", sign, group_thousands(&int_part), frac_part)
}

/// Format an amount as Cuban pesos, symbol before the number
///
/// The upstream screens render amounts with the `es-CU` currency formatter;
/// the exact string is presentational, so a stable "$1,234.56 CUP" shape is
/// used on this side.
pub fn format_cup(amount: &Decimal) -> String {
    format!("${} CUP", format_number(amount))
}

/// Format a timestamp the way the `es-CU` short date renders it (dd/mm/yyyy)
pub fn format_date(date: &DateTime<Utc>) -> String {
    format!("{:02}/{:02}/{}", date.day(), date.month(), date.year())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("1234567"), "1,234,567");
        assert_eq!(group_thousands("100"), "100");
        assert_eq!(group_thousands("1000"), "1,000");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(&Decimal::new(123456, 2)), "1,234.56");
        assert_eq!(format_number(&Decimal::from(20)), "20.00");
        assert_eq!(format_number(&Decimal::new(-5000, 2)), "-50.00");
    }

    #[test]
    fn test_format_cup() {
        assert_eq!(format_cup(&Decimal::from(1500)), "$1,500.00 CUP");
    }

    #[test]
    fn test_format_date() {
        let date = Utc.with_ymd_and_hms(2024, 3, 7, 15, 30, 0).unwrap();
        assert_eq!(format_date(&date), "07/03/2024");
    }
}
