//! Formatting helpers shared by report renderers.

use crate::dates::DateKey;
use crate::stats::round_half_up;

/// Format an amount as whole pounds with thousands separators (e.g., "£12,345").
pub fn format_gbp(amount: f64) -> String {
    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{}£{}", sign, group_thousands(rounded.abs() as u64))
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Short day label (e.g., "Dec 1").
pub fn format_day(date: DateKey) -> String {
    date.date().format("%b %-d").to_string()
}

/// Rounded percentage with an explicit sign when positive (e.g., "+12%").
///
/// Halves round up, so "-2.5" shows as "-2%" and "-0.5" as "0%".
pub fn format_pct(pct: f64) -> String {
    let rounded = round_half_up(pct);
    if rounded > 0.0 {
        format!("+{:.0}%", rounded)
    } else if rounded == 0.0 {
        "0%".to_string()
    } else {
        format!("{:.0}%", rounded)
    }
}

/// Format an optional value, or an em dash if missing.
pub fn format_opt<T>(value: Option<T>, f: impl Fn(T) -> String) -> String {
    match value {
        Some(v) => f(v),
        None => "—".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_gbp() {
        assert_eq!(format_gbp(0.0), "£0");
        assert_eq!(format_gbp(999.4), "£999");
        assert_eq!(format_gbp(1234.5), "£1,235");
        assert_eq!(format_gbp(1_234_567.0), "£1,234,567");
        assert_eq!(format_gbp(-2500.0), "-£2,500");
    }

    #[test]
    fn test_format_day() {
        assert_eq!(format_day(DateKey::from_ymd(2025, 12, 1).unwrap()), "Dec 1");
        assert_eq!(format_day(DateKey::from_ymd(2026, 1, 15).unwrap()), "Jan 15");
    }

    #[test]
    fn test_format_pct() {
        assert_eq!(format_pct(12.4), "+12%");
        assert_eq!(format_pct(-3.6), "-4%");
        assert_eq!(format_pct(0.2), "0%");
        assert_eq!(format_pct(-0.2), "0%");
        assert_eq!(format_pct(2.5), "+3%");
        assert_eq!(format_pct(-2.5), "-2%");
        assert_eq!(format_pct(-0.5), "0%");
    }

    #[test]
    fn test_format_opt() {
        assert_eq!(format_opt(Some(2.5), |v| format!("{:.1}", v)), "2.5");
        assert_eq!(format_opt(None::<f64>, |v| format!("{:.1}", v)), "—");
    }
}
