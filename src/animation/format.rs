use num_format::{Locale, ToFormattedString};

use crate::animation::counter::exact_whole;

/// Groups the digits of `n` in threes with commas, the way `toLocaleString` does for en-US.
pub fn group_thousands(n: u64) -> String {
    n.to_formatted_string(&Locale::en)
}

/// Grouped number followed by a literal suffix, e.g. `12,000+`.
pub fn with_suffix(n: u64, suffix: &str) -> String {
    format!("{}{}", group_thousands(n), suffix)
}

/// Text for a number shown without animating. Whole numbers are grouped,
/// anything else is printed as given.
pub fn static_text(value: f64, suffix: &str) -> String {
    match exact_whole(value) {
        Some(n) => with_suffix(n, suffix),
        None => format!("{}{}", value, suffix),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_numbers_are_not_grouped() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(7), "7");
        assert_eq!(group_thousands(999), "999");
    }

    #[test]
    fn groups_every_three_digits() {
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(12000), "12,000");
        assert_eq!(group_thousands(123456), "123,456");
        assert_eq!(group_thousands(1234567), "1,234,567");
        assert_eq!(group_thousands(u64::MAX), "18,446,744,073,709,551,615");
    }

    #[test]
    fn suffix_is_appended_verbatim() {
        assert_eq!(with_suffix(12000, "+"), "12,000+");
        assert_eq!(with_suffix(98, "%"), "98%");
        assert_eq!(with_suffix(24, "/7"), "24/7");
        assert_eq!(with_suffix(5, ""), "5");
    }

    #[test]
    fn static_text_groups_whole_numbers() {
        assert_eq!(static_text(12000.0, "+"), "12,000+");
        assert_eq!(static_text(98.0, "%"), "98%");
        assert_eq!(static_text(12.5, "K"), "12.5K");
        assert_eq!(static_text(-3.0, ""), "-3");
    }
}
