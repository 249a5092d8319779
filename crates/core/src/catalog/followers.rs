//! Follower-count parsing and display formatting.
//!
//! The source data stores follower counts either as plain numbers or as
//! compact strings ("125K", "1.2M"). Parsing happens once at catalog
//! ingestion; the comparison path only ever sees the resulting number.
//! Formatting is the separate display-side inverse used by the card
//! renderer.

/// Parse a compact follower string into an absolute count.
///
/// Everything except digits and the first decimal point is stripped to
/// get a magnitude; a multiplier of 1 000 000 applies when the string
/// contains "m", 1 000 when it contains "k" (case-insensitive), else 1.
/// Strings with no parseable digits yield 0.
pub fn parse_follower_count(raw: &str) -> u64 {
    let lower = raw.to_lowercase();

    let mut magnitude = String::new();
    let mut seen_dot = false;
    for c in lower.chars() {
        if c.is_ascii_digit() {
            magnitude.push(c);
        } else if c == '.' && !seen_dot {
            magnitude.push(c);
            seen_dot = true;
        }
    }

    let magnitude: f64 = magnitude.parse().unwrap_or(0.0);

    let multiplier = if lower.contains('m') {
        1_000_000.0
    } else if lower.contains('k') {
        1_000.0
    } else {
        1.0
    };

    (magnitude * multiplier).round() as u64
}

/// Format a follower count in the compact form shown on cards.
///
/// 1 200 000 → "1.2M", 125 000 → "125K", 9 999 → "9999". One decimal at
/// most, trailing ".0" dropped. The "K" form starts at 10 000, so
/// untiered counts always render as plain digits.
pub fn format_follower_count(count: u64) -> String {
    if count >= 1_000_000 {
        format!("{}M", trim_decimal(count as f64 / 1_000_000.0))
    } else if count >= 10_000 {
        format!("{}K", trim_decimal(count as f64 / 1_000.0))
    } else {
        count.to_string()
    }
}

fn trim_decimal(value: f64) -> String {
    let s = format!("{:.1}", value);
    match s.strip_suffix(".0") {
        Some(trimmed) => trimmed.to_string(),
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_compact_thousands() {
        assert_eq!(parse_follower_count("125K"), 125_000);
        assert_eq!(parse_follower_count("125k"), 125_000);
        assert_eq!(parse_follower_count("9.5k"), 9_500);
    }

    #[test]
    fn test_parse_compact_millions() {
        assert_eq!(parse_follower_count("1.2M"), 1_200_000);
        assert_eq!(parse_follower_count("2m"), 2_000_000);
    }

    #[test]
    fn test_parse_plain_number_string() {
        assert_eq!(parse_follower_count("85000"), 85_000);
        // Separators are stripped, not interpreted
        assert_eq!(parse_follower_count("85 000"), 85_000);
    }

    #[test]
    fn test_parse_malformed_yields_zero() {
        assert_eq!(parse_follower_count(""), 0);
        assert_eq!(parse_follower_count("muitos"), 0);
        assert_eq!(parse_follower_count("K"), 0);
        assert_eq!(parse_follower_count("."), 0);
    }

    #[test]
    fn test_parse_keeps_first_decimal_point_only() {
        // "1.2.5M" strips to "1.25" and scales
        assert_eq!(parse_follower_count("1.2.5M"), 1_250_000);
    }

    #[test]
    fn test_format_compact() {
        assert_eq!(format_follower_count(1_200_000), "1.2M");
        assert_eq!(format_follower_count(1_000_000), "1M");
        assert_eq!(format_follower_count(125_000), "125K");
        assert_eq!(format_follower_count(10_000), "10K");
        assert_eq!(format_follower_count(999), "999");
        assert_eq!(format_follower_count(0), "0");
    }

    #[test]
    fn test_format_below_micro_threshold_stays_plain() {
        // Counts with no tier must not render in the "K" form, even
        // where rounding would have pushed them to "10K"
        assert_eq!(format_follower_count(9_999), "9999");
        assert_eq!(format_follower_count(9_950), "9950");
        assert_eq!(format_follower_count(9_500), "9500");
    }

    #[test]
    fn test_parse_format_round_trip_on_clean_values() {
        for count in [12_000, 250_000, 1_500_000] {
            assert_eq!(parse_follower_count(&format_follower_count(count)), count);
        }
    }
}
