//! Total parser for human-formatted view counters.
//!
//! Feed widgets render view counts for people, not machines: `"12.3K"`,
//! `"1 234"`, `"1,2 млн"`, or a bare `"Like"` on posts that expose reactions
//! instead of views. This module turns any such string into a `u64` with
//! manual character scanning — no regex, matching the dependency-light
//! approach of the rest of the parsing code.

/// Markers meaning the counter is a reaction widget, not a view count.
const LIKE_MARKERS: &[&str] = &["нравится", "like"];
/// Thousand-scale suffixes, checked before million because `"k"` never
/// appears inside the million markers.
const THOUSAND_MARKERS: &[&str] = &["тыс", "k"];
/// Million-scale suffixes.
const MILLION_MARKERS: &[&str] = &["млн", "m"];

/// Parses a human-formatted view counter into a count.
///
/// Total over all inputs: anything unparseable yields `0`, never an error.
/// Rules, in precedence order over the lowercased, whitespace-stripped text:
///
/// 1. a like marker (`"нравится"`, `"like"`) → `0`;
/// 2. a thousand marker (`"тыс"`, `"k"`) → first decimal numeral × 1000;
/// 3. a million marker (`"млн"`, `"m"`) → first decimal numeral × 1 000 000;
/// 4. otherwise the ASCII digits of the text, separators ignored;
/// 5. no numeral anywhere → `0`.
///
/// A comma in a scaled numeral is a decimal point (`"1,2 млн"` → 1 200 000);
/// scaled values are truncated toward zero.
#[must_use]
pub fn parse_count(text: &str) -> u64 {
    // No-break spaces count as whitespace, so "1 234" and "1\u{a0}234"
    // compact identically.
    let compact: String = text
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    if compact.is_empty() {
        return 0;
    }
    if LIKE_MARKERS.iter().any(|m| compact.contains(m)) {
        return 0;
    }
    if THOUSAND_MARKERS.iter().any(|m| compact.contains(m)) {
        return scaled_count(&compact, 1_000.0);
    }
    if MILLION_MARKERS.iter().any(|m| compact.contains(m)) {
        return scaled_count(&compact, 1_000_000.0);
    }
    digit_run(&compact)
}

/// Extracts the first decimal numeral and applies a scale factor,
/// truncating to an integer. Returns `0` when no numeral is present.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn scaled_count(compact: &str, factor: f64) -> u64 {
    let Some(numeral) = first_numeral(compact) else {
        return 0;
    };
    match numeral.replace(',', ".").parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => (value * factor).trunc() as u64,
        _ => 0,
    }
}

/// Returns the first run of `[0-9.,]` characters, trimmed of leading and
/// trailing punctuation so `"1,2млн"` yields `"1,2"` and `"тыс"` yields
/// nothing.
fn first_numeral(compact: &str) -> Option<&str> {
    let start = compact.find(|c: char| c.is_ascii_digit())?;
    let rest = &compact[start..];
    let end = rest
        .find(|c: char| !c.is_ascii_digit() && c != '.' && c != ',')
        .unwrap_or(rest.len());
    Some(rest[..end].trim_end_matches(['.', ',']))
}

/// Collects every ASCII digit in the text and parses the result, so
/// thousand separators of any flavor are ignored. `0` when no digits or on
/// overflow.
fn digit_run(compact: &str) -> u64 {
    let digits: String = compact.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return 0;
    }
    digits.parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    // -----------------------------------------------------------------------
    // scale markers
    // -----------------------------------------------------------------------

    #[test]
    fn russian_thousand_suffix() {
        assert_eq!(parse_count("12.3тыс"), 12_300);
    }

    #[test]
    fn latin_thousand_suffix() {
        assert_eq!(parse_count("12.3K"), 12_300);
    }

    #[test]
    fn russian_million_with_comma_decimal() {
        assert_eq!(parse_count("1,5 млн"), 1_500_000);
    }

    #[test]
    fn latin_million_suffix() {
        assert_eq!(parse_count("1.2M"), 1_200_000);
    }

    #[test]
    fn comma_decimal_with_thousand_suffix() {
        assert_eq!(parse_count("1,2 тыс"), 1_200);
    }

    #[test]
    fn scaled_value_truncates_toward_zero() {
        // 4.5678 * 1000 = 4567.8 → 4567
        assert_eq!(parse_count("4.5678k"), 4_567);
    }

    #[test]
    fn scale_marker_without_numeral_is_zero() {
        assert_eq!(parse_count("тыс"), 0);
        assert_eq!(parse_count("k"), 0);
    }

    // -----------------------------------------------------------------------
    // like markers
    // -----------------------------------------------------------------------

    #[test]
    fn russian_like_marker_is_zero() {
        assert_eq!(parse_count("нравится"), 0);
    }

    #[test]
    fn latin_like_marker_is_zero() {
        // Checked before the thousand rule even though "like" contains "k".
        assert_eq!(parse_count("Like"), 0);
    }

    #[test]
    fn like_marker_with_count_is_still_zero() {
        assert_eq!(parse_count("5 нравится"), 0);
    }

    // -----------------------------------------------------------------------
    // plain numbers
    // -----------------------------------------------------------------------

    #[test]
    fn plain_integer() {
        assert_eq!(parse_count("456"), 456);
    }

    #[test]
    fn space_separated_thousands() {
        assert_eq!(parse_count("1 234"), 1_234);
    }

    #[test]
    fn no_break_space_separated_thousands() {
        assert_eq!(parse_count("1\u{a0}234"), 1_234);
    }

    #[test]
    fn comma_separated_thousands() {
        assert_eq!(parse_count("1,234"), 1_234);
    }

    // -----------------------------------------------------------------------
    // totality
    // -----------------------------------------------------------------------

    #[test]
    fn empty_string_is_zero() {
        assert_eq!(parse_count(""), 0);
    }

    #[test]
    fn whitespace_only_is_zero() {
        assert_eq!(parse_count("   "), 0);
    }

    #[test]
    fn non_numeric_text_is_zero() {
        assert_eq!(parse_count("просмотров нет"), 0);
    }

    #[test]
    fn mixed_script_garbage_is_zero() {
        assert_eq!(parse_count("•••"), 0);
    }
}
