//! Display formatting for the calculator and stat counters.
//!
//! The only non-trivial piece is [`reformat_with_cursor`]: the income field
//! is regrouped with thousands separators on every keystroke, and the cursor
//! must stay at the same logical digit position rather than the same raw
//! character index.

/// Keep only ASCII digits, dropping separators and anything else.
pub fn strip_separators(text: &str) -> String {
    text.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Insert `,` thousands separators into a plain digit string.
pub fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Number of digits in `text` strictly before the character index `cursor`.
fn digit_index(text: &str, cursor: usize) -> usize {
    text.chars()
        .take(cursor)
        .filter(|c| c.is_ascii_digit())
        .count()
}

/// Character index in `grouped` sitting just after its `n`-th digit.
fn cursor_for_digit_index(grouped: &str, n: usize) -> usize {
    if n == 0 {
        return 0;
    }
    let mut seen = 0;
    for (i, c) in grouped.chars().enumerate() {
        if c.is_ascii_digit() {
            seen += 1;
            if seen == n {
                return i + 1;
            }
        }
    }
    grouped.chars().count()
}

/// Regroup a digit string with separators while preserving the cursor's
/// logical digit position.
///
/// `cursor` is a character index into `text`. The returned cursor is a
/// character index into the regrouped string, placed after the same number
/// of digits the original cursor was after.
pub fn reformat_with_cursor(text: &str, cursor: usize) -> (String, usize) {
    let digits = strip_separators(text);
    let logical = digit_index(text, cursor);
    let grouped = group_digits(&digits);
    let new_cursor = cursor_for_digit_index(&grouped, logical);
    (grouped, new_cursor)
}

/// Dollar amount rounded to whole dollars with grouping, e.g. `$1,000`.
pub fn format_money(amount: f64) -> String {
    format!("${}", group_digits(&(amount.round() as u64).to_string()))
}

/// Lives-per-year estimate with tiered precision: one decimal from 1.0 up,
/// two decimals below.
pub fn format_lives_per_year(lives: f64) -> String {
    if lives >= 1.0 {
        format!("~{:.1} lives/year", lives)
    } else {
        format!("~{:.2} lives/year", lives)
    }
}

/// Whole nets funded, grouped, e.g. `1,234 nets`.
pub fn format_nets(nets: u64) -> String {
    format!("{} nets", group_digits(&nets.to_string()))
}

/// Ten-year estimate as a rounded whole number of lives; fractional
/// estimates collapse to the literal `~1 life` placeholder.
pub fn format_ten_year(lives: f64) -> String {
    if lives >= 1.0 {
        format!("{} lives", lives.round() as u64)
    } else {
        "~1 life".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits(""), "");
        assert_eq!(group_digits("5"), "5");
        assert_eq!(group_digits("500"), "500");
        assert_eq!(group_digits("1234"), "1,234");
        assert_eq!(group_digits("85000"), "85,000");
        assert_eq!(group_digits("1234567"), "1,234,567");
    }

    #[test]
    fn test_strip_separators() {
        assert_eq!(strip_separators("1,234,567"), "1234567");
        assert_eq!(strip_separators("12ab,3"), "123");
        assert_eq!(strip_separators(""), "");
    }

    #[test]
    fn test_reformat_cursor_at_end() {
        // Typing the fifth digit at the end of "1,234"
        let (text, cursor) = reformat_with_cursor("12345", 5);
        assert_eq!(text, "12,345");
        assert_eq!(cursor, 6);
    }

    #[test]
    fn test_reformat_cursor_mid_string() {
        // Cursor after "12" in "1234": two digits before it, so it lands
        // after the second digit of "1,234" (past the inserted separator).
        let (text, cursor) = reformat_with_cursor("1234", 2);
        assert_eq!(text, "1,234");
        assert_eq!(cursor, 3);
    }

    #[test]
    fn test_reformat_cursor_start() {
        let (text, cursor) = reformat_with_cursor("1234", 0);
        assert_eq!(text, "1,234");
        assert_eq!(cursor, 0);
    }

    #[test]
    fn test_reformat_preserves_logical_position_after_removal() {
        // "1,234" with the separator removed by an edit: cursor that sat
        // after three digits keeps sitting after three digits.
        let (text, cursor) = reformat_with_cursor("1,234", 4);
        assert_eq!(text, "1,234");
        assert_eq!(cursor, 4);

        let (text, cursor) = reformat_with_cursor("234", 1);
        assert_eq!(text, "234");
        assert_eq!(cursor, 1);
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1000.0), "$1,000");
        assert_eq!(format_money(849.6), "$850");
        assert_eq!(format_money(0.0), "$0");
    }

    #[test]
    fn test_format_lives_tiers() {
        assert_eq!(format_lives_per_year(4.0), "~4.0 lives/year");
        assert_eq!(format_lives_per_year(1.25), "~1.2 lives/year");
        assert_eq!(format_lives_per_year(0.4), "~0.40 lives/year");
        assert_eq!(format_lives_per_year(0.0), "~0.00 lives/year");
    }

    #[test]
    fn test_format_ten_year() {
        assert_eq!(format_ten_year(40.0), "40 lives");
        assert_eq!(format_ten_year(3.4), "3 lives");
        assert_eq!(format_ten_year(0.6), "~1 life");
        assert_eq!(format_ten_year(0.0), "~1 life");
    }

    #[test]
    fn test_format_nets() {
        assert_eq!(format_nets(333), "333 nets");
        assert_eq!(format_nets(2833), "2,833 nets");
    }
}
