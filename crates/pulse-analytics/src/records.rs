//! Raw post → [`PostRecord`] conversion.
//!
//! Parsing is forgiving per field but strict about timestamps: a post whose
//! timestamp cannot be read is dropped entirely rather than given a default,
//! since a record without a real posting instant would poison the hourly
//! profile. View-count text goes through [`crate::views::parse_count`], which
//! is total.

use chrono::{DateTime, FixedOffset};
use pulse_core::{PostRecord, RawPost};

use crate::views::parse_count;

/// Reference zone for all hour-of-day math: Moscow civil time, UTC+3.
/// The zone has no DST transitions, so a fixed offset models it exactly.
const REFERENCE_OFFSET_SECS: i32 = 3 * 3600;

/// Maximum preview length in characters.
const PREVIEW_CHARS: usize = 50;
const PREVIEW_ELLIPSIS: &str = "…";
/// Preview used for posts that carry no body text.
const MEDIA_PLACEHOLDER: &str = "[media]";

/// The fixed reference zone, UTC+3.
#[must_use]
pub fn reference_zone() -> FixedOffset {
    FixedOffset::east_opt(REFERENCE_OFFSET_SECS).expect("UTC+3 is a valid fixed offset")
}

/// Converts at most `limit` raw posts into normalized records, in input order.
///
/// Posts with an unparseable timestamp are skipped and logged at debug level.
/// No minimum is imposed here: the result may be shorter than `limit` or
/// empty, and the caller decides whether the sample is large enough.
#[must_use]
pub fn build_records(raw_posts: &[RawPost], limit: usize) -> Vec<PostRecord> {
    let zone = reference_zone();
    let mut records = Vec::with_capacity(limit.min(raw_posts.len()));

    for post in raw_posts.iter().take(limit) {
        let Ok(instant) = DateTime::parse_from_rfc3339(&post.timestamp_text) else {
            tracing::debug!(
                timestamp = %post.timestamp_text,
                "skipping post with unparseable timestamp"
            );
            continue;
        };

        records.push(PostRecord {
            timestamp: instant.with_timezone(&zone),
            views: parse_count(&post.views_text),
            preview: build_preview(post.body_text.as_deref()),
        });
    }

    records
}

/// First [`PREVIEW_CHARS`] characters of the body plus an ellipsis, or the
/// media placeholder when there is no body text.
fn build_preview(body_text: Option<&str>) -> String {
    match body_text {
        Some(text) if !text.is_empty() => {
            let head: String = text.chars().take(PREVIEW_CHARS).collect();
            format!("{head}{PREVIEW_ELLIPSIS}")
        }
        _ => MEDIA_PLACEHOLDER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::Timelike;

    use super::*;

    fn raw(timestamp: &str, views: &str, body: Option<&str>) -> RawPost {
        RawPost {
            timestamp_text: timestamp.to_string(),
            views_text: views.to_string(),
            body_text: body.map(ToString::to_string),
        }
    }

    #[test]
    fn utc_timestamp_shifts_to_reference_zone() {
        let records = build_records(
            &[raw("2026-01-18T21:30:00Z", "100", Some("evening post"))],
            10,
        );
        assert_eq!(records.len(), 1);
        // 21:30 UTC is 00:30 next day in UTC+3.
        assert_eq!(records[0].timestamp.hour(), 0);
        assert_eq!(records[0].timestamp.minute(), 30);
    }

    #[test]
    fn offset_timestamp_is_accepted() {
        let records = build_records(&[raw("2026-01-18T12:00:00+03:00", "50", None)], 10);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].timestamp.hour(), 12);
    }

    #[test]
    fn unparseable_timestamps_are_dropped_exactly() {
        let mut posts = Vec::new();
        for i in 0..10 {
            let stamp = if i == 3 || i == 7 {
                "yesterday evening".to_string()
            } else {
                format!("2026-01-18T0{i}:00:00Z")
            };
            posts.push(raw(&stamp, "100", Some("text")));
        }
        let records = build_records(&posts, 10);
        assert_eq!(records.len(), 8);
    }

    #[test]
    fn input_order_is_preserved() {
        let posts = vec![
            raw("2026-01-18T10:00:00Z", "300", Some("first")),
            raw("2026-01-18T11:00:00Z", "100", Some("second")),
            raw("2026-01-18T09:00:00Z", "200", Some("third")),
        ];
        let records = build_records(&posts, 10);
        let views: Vec<u64> = records.iter().map(|r| r.views).collect();
        assert_eq!(views, vec![300, 100, 200]);
    }

    #[test]
    fn limit_caps_processed_posts() {
        let posts: Vec<RawPost> = (0..8)
            .map(|i| raw(&format!("2026-01-18T0{i}:00:00Z"), "10", None))
            .collect();
        let records = build_records(&posts, 5);
        assert_eq!(records.len(), 5);
    }

    #[test]
    fn like_counter_becomes_zero_views_not_a_drop() {
        let records = build_records(&[raw("2026-01-18T10:00:00Z", "нравится", None)], 10);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].views, 0);
    }

    #[test]
    fn long_body_is_truncated_with_ellipsis() {
        let body = "a".repeat(80);
        let records = build_records(&[raw("2026-01-18T10:00:00Z", "1", Some(&body))], 10);
        assert_eq!(records[0].preview.chars().count(), 51);
        assert!(records[0].preview.ends_with('…'));
    }

    #[test]
    fn multibyte_body_truncates_on_char_boundary() {
        let body = "д".repeat(80);
        let records = build_records(&[raw("2026-01-18T10:00:00Z", "1", Some(&body))], 10);
        assert_eq!(records[0].preview.chars().count(), 51);
    }

    #[test]
    fn missing_body_uses_media_placeholder() {
        let records = build_records(&[raw("2026-01-18T10:00:00Z", "1", None)], 10);
        assert_eq!(records[0].preview, "[media]");
    }

    #[test]
    fn empty_body_uses_media_placeholder() {
        let records = build_records(&[raw("2026-01-18T10:00:00Z", "1", Some(""))], 10);
        assert_eq!(records[0].preview, "[media]");
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(build_records(&[], 10).is_empty());
    }
}
