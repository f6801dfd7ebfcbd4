//! Value formatting
//!
//! Pure conversions from raw backend and form values to display text. These
//! never fail: anything unexpected falls back to a fixed placeholder or is
//! echoed back unchanged.

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime};

/// Capitalised Spanish month abbreviations
const MONTHS_ES: [&str; 12] = [
    "Ene", "Feb", "Mar", "Abr", "May", "Jun", "Jul", "Ago", "Sep", "Oct", "Nov", "Dic",
];

/// Date-time layouts accepted besides RFC 3339 and plain dates
const DATETIME_FORMATS: [&str; 7] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
];

/// Format a backend date as "DD Mmm" (e.g. "03 Ene")
///
/// Empty input renders as "-"; anything unparsable is returned unchanged.
pub fn format_date(raw: &str) -> String {
    if raw.is_empty() {
        return "-".to_string();
    }

    match parse_date(raw) {
        Some(date) => format!("{:02} {}", date.day(), MONTHS_ES[date.month0() as usize]),
        None => raw.to_string(),
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();

    // Instants with an offset are shown in local time
    if let Ok(instant) = DateTime::parse_from_rfc3339(s) {
        return Some(instant.with_timezone(&Local).date_naive());
    }

    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Some(dt.date());
        }
    }

    ["%Y-%m-%d", "%Y/%m/%d"]
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(s, format).ok())
}

/// Format a transaction amount with two decimals
///
/// Missing or non-finite values render as "0.00".
pub fn format_amount(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() && v != 0.0 => format!("{:.2}", v),
        _ => "0.00".to_string(),
    }
}

/// Format a budget metric the way the es-ES locale does
///
/// Up to three fraction digits, `,` as decimal separator, `.` grouping once
/// the integer part reaches five digits. Zero, missing and non-finite values
/// render as "0".
pub fn format_metric(value: Option<f64>) -> String {
    let v = match value {
        Some(v) if v.is_finite() && v != 0.0 => v,
        _ => return "0".to_string(),
    };

    let rounded = format!("{:.3}", v.abs());
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::new();
    if v < 0.0 && (int_part != "0" || !frac_part.is_empty()) {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if !frac_part.is_empty() {
        out.push(',');
        out.push_str(frac_part);
    }
    out
}

fn group_thousands(digits: &str) -> String {
    if digits.len() < 5 {
        return digits.to_string();
    }

    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

/// Format the budget percentage as printed next to the progress bar
///
/// The value is not clamped: 130 prints as "130".
pub fn format_percentage(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => {
            if v.fract() == 0.0 {
                format!("{:.0}", v)
            } else {
                format!("{}", v)
            }
        }
        _ => "0".to_string(),
    }
}

/// Fraction of the progress bar to fill, clamped to `0.0..=1.0`
pub fn progress_ratio(percentage: Option<f64>) -> f64 {
    match percentage {
        Some(p) if p.is_finite() => (p.min(100.0) / 100.0).clamp(0.0, 1.0),
        _ => 0.0,
    }
}

/// Parse the amount typed in the form the way `parseFloat` does
///
/// Leading whitespace is skipped and the longest numeric prefix is used, so
/// "12,50" reads as 12 and "abc" reads as NaN. No further validation happens.
pub fn parse_amount(input: &str) -> f64 {
    let s = input.trim_start();
    let (sign, rest) = match s.as_bytes().first() {
        Some(b'-') => (-1.0, &s[1..]),
        Some(b'+') => (1.0, &s[1..]),
        _ => (1.0, s),
    };

    if rest.starts_with("Infinity") {
        return sign * f64::INFINITY;
    }

    let bytes = rest.as_bytes();
    let len = bytes.len();
    let mut end = 0;
    let mut digits = 0;

    while end < len && bytes[end].is_ascii_digit() {
        end += 1;
        digits += 1;
    }

    if end < len && bytes[end] == b'.' {
        let mut frac_end = end + 1;
        while frac_end < len && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        let frac_digits = frac_end - end - 1;
        if digits + frac_digits > 0 {
            digits += frac_digits;
            end = frac_end;
        }
    }

    if digits == 0 {
        return f64::NAN;
    }

    if end < len && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < len && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < len && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    rest[..end]
        .parse::<f64>()
        .map(|v| sign * v)
        .unwrap_or(f64::NAN)
}

/// Truncate a string to a maximum number of characters
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len == 0 {
        String::new()
    } else {
        let kept: String = s.chars().take(max_len - 1).collect();
        format!("{}…", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_plain() {
        assert_eq!(format_date("2024-01-03"), "03 Ene");
        assert_eq!(format_date("2024-08-21"), "21 Ago");
        assert_eq!(format_date("2023-12-31"), "31 Dic");
    }

    #[test]
    fn test_format_date_with_time() {
        assert_eq!(format_date("2024-03-15T12:00:00"), "15 Mar");
        assert_eq!(format_date("2024-03-15T12:00:00.250"), "15 Mar");
        assert_eq!(format_date("2024-05-02 09:30:00"), "02 May");
    }

    #[test]
    fn test_format_date_slashes() {
        assert_eq!(format_date("2024/01/03"), "03 Ene");
        assert_eq!(format_date("2024/11/20 18:45"), "20 Nov");
        assert_eq!(format_date("2024/02/30"), "2024/02/30");
    }

    #[test]
    fn test_format_date_unparsable_is_echoed() {
        assert_eq!(format_date("ayer"), "ayer");
        assert_eq!(format_date("2024-13-40"), "2024-13-40");
    }

    #[test]
    fn test_format_date_empty() {
        assert_eq!(format_date(""), "-");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(Some(12.5)), "12.50");
        assert_eq!(format_amount(Some(3.0)), "3.00");
        assert_eq!(format_amount(None), "0.00");
        assert_eq!(format_amount(Some(f64::NAN)), "0.00");
        assert_eq!(format_amount(Some(f64::INFINITY)), "0.00");
    }

    #[test]
    fn test_format_metric() {
        assert_eq!(format_metric(Some(1200.0)), "1200");
        assert_eq!(format_metric(Some(950.5)), "950,5");
        assert_eq!(format_metric(Some(12345.678)), "12.345,678");
        assert_eq!(format_metric(Some(1234567.0)), "1.234.567");
        assert_eq!(format_metric(Some(0.1234)), "0,123");
        assert_eq!(format_metric(Some(-249.5)), "-249,5");
        assert_eq!(format_metric(Some(0.0)), "0");
        assert_eq!(format_metric(None), "0");
        assert_eq!(format_metric(Some(f64::NAN)), "0");
    }

    #[test]
    fn test_format_percentage_is_not_clamped() {
        assert_eq!(format_percentage(Some(45.0)), "45");
        assert_eq!(format_percentage(Some(79.2)), "79.2");
        assert_eq!(format_percentage(Some(130.0)), "130");
        assert_eq!(format_percentage(None), "0");
    }

    #[test]
    fn test_progress_ratio_is_clamped() {
        assert_eq!(progress_ratio(Some(50.0)), 0.5);
        assert_eq!(progress_ratio(Some(100.0)), 1.0);
        assert_eq!(progress_ratio(Some(150.0)), 1.0);
        assert_eq!(progress_ratio(Some(1000.0)), 1.0);
        assert_eq!(progress_ratio(Some(-5.0)), 0.0);
        assert_eq!(progress_ratio(None), 0.0);
    }

    #[test]
    fn test_parse_amount_numbers() {
        assert_eq!(parse_amount("12.50"), 12.5);
        assert_eq!(parse_amount("  7"), 7.0);
        assert_eq!(parse_amount(".5"), 0.5);
        assert_eq!(parse_amount("5."), 5.0);
        assert_eq!(parse_amount("-3.25"), -3.25);
        assert_eq!(parse_amount("1e3"), 1000.0);
    }

    #[test]
    fn test_parse_amount_prefix() {
        assert_eq!(parse_amount("12,50"), 12.0);
        assert_eq!(parse_amount("40€"), 40.0);
        assert_eq!(parse_amount("2e"), 2.0);
    }

    #[test]
    fn test_parse_amount_non_numeric_is_nan() {
        assert!(parse_amount("abc").is_nan());
        assert!(parse_amount(".").is_nan());
        assert!(parse_amount("-").is_nan());
        assert!(parse_amount("").is_nan());
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Mercadona", 20), "Mercadona");
        assert_eq!(truncate("Mercadona", 5), "Merc…");
        assert_eq!(truncate("Peluquería", 8), "Peluque…");
    }
}
