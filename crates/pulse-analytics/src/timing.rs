//! Posting-time profile: hour-of-day buckets and the best-performing hour.

use std::collections::BTreeMap;

use chrono::Timelike;
use pulse_core::{HourlyBucket, PostRecord};
use serde::{Deserialize, Serialize};

/// How many distinct posting hours a sample needs before its hourly profile
/// says anything; below this the profile is still returned but flagged.
pub const MIN_DISTINCT_HOURS: usize = 3;

/// Hourly view profile of a record sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingProfile {
    /// Buckets in ascending hour order, one per hour that has posts.
    pub buckets: Vec<HourlyBucket>,
    /// Hour with the highest mean views; ties go to the lower hour.
    /// `None` when there are no records.
    pub best_hour: Option<u32>,
    /// Percentage gain of the best bucket's mean over the mean of all bucket
    /// means. `0.0` when undefined.
    pub uplift_pct: f64,
}

impl TimingProfile {
    /// Number of distinct posting hours in the sample.
    #[must_use]
    pub fn distinct_hours(&self) -> usize {
        self.buckets.len()
    }

    /// Whether the sample spreads over enough hours to be meaningful.
    #[must_use]
    pub fn has_hour_diversity(&self) -> bool {
        self.distinct_hours() >= MIN_DISTINCT_HOURS
    }
}

/// Groups records by hour of day in the reference zone and finds the
/// best-performing hour.
///
/// Never fails: an empty sample produces an empty profile with
/// `best_hour = None` and zero uplift.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn profile(records: &[PostRecord]) -> TimingProfile {
    let mut groups: BTreeMap<u32, (u64, usize)> = BTreeMap::new();
    for record in records {
        let entry = groups.entry(record.timestamp.hour()).or_insert((0, 0));
        entry.0 += record.views;
        entry.1 += 1;
    }

    // BTreeMap iteration is ascending by hour, which both keeps the bucket
    // list sorted and makes the strictly-greater comparison below resolve
    // ties toward the lower hour.
    let buckets: Vec<HourlyBucket> = groups
        .into_iter()
        .map(|(hour, (total, count))| HourlyBucket {
            hour,
            mean_views: total as f64 / count as f64,
            sample_count: count,
        })
        .collect();

    let mut best: Option<&HourlyBucket> = None;
    for bucket in &buckets {
        match best {
            Some(current) if bucket.mean_views <= current.mean_views => {}
            _ => best = Some(bucket),
        }
    }

    let uplift_pct = best.map_or(0.0, |best_bucket| {
        let overall = buckets.iter().map(|b| b.mean_views).sum::<f64>() / buckets.len() as f64;
        if overall > 0.0 {
            (best_bucket.mean_views / overall - 1.0) * 100.0
        } else {
            0.0
        }
    });

    TimingProfile {
        best_hour: best.map(|b| b.hour),
        buckets,
        uplift_pct,
    }
}

#[cfg(test)]
mod tests {
    use pulse_core::RawPost;

    use super::*;
    use crate::records::build_records;

    fn records_at(hours_and_views: &[(&str, u64)]) -> Vec<PostRecord> {
        let posts: Vec<RawPost> = hours_and_views
            .iter()
            .map(|(stamp, views)| RawPost {
                timestamp_text: (*stamp).to_string(),
                views_text: views.to_string(),
                body_text: Some("text".to_string()),
            })
            .collect();
        build_records(&posts, posts.len())
    }

    #[test]
    fn buckets_group_by_reference_zone_hour() {
        // Both stamps are hour 12 in UTC+3 even though one is written in UTC.
        let records = records_at(&[
            ("2026-01-18T12:00:00+03:00", 100),
            ("2026-01-18T09:30:00Z", 300),
        ]);
        let result = profile(&records);
        assert_eq!(result.buckets.len(), 1);
        assert_eq!(result.buckets[0].hour, 12);
        assert_eq!(result.buckets[0].sample_count, 2);
        assert!((result.buckets[0].mean_views - 200.0).abs() < f64::EPSILON);
    }

    #[test]
    fn sample_counts_sum_to_record_count() {
        let records = records_at(&[
            ("2026-01-18T08:00:00+03:00", 10),
            ("2026-01-18T08:30:00+03:00", 20),
            ("2026-01-18T12:00:00+03:00", 30),
            ("2026-01-18T19:00:00+03:00", 40),
        ]);
        let result = profile(&records);
        let total: usize = result.buckets.iter().map(|b| b.sample_count).sum();
        assert_eq!(total, records.len());
    }

    #[test]
    fn best_hour_has_highest_mean() {
        let records = records_at(&[
            ("2026-01-18T08:00:00+03:00", 100),
            ("2026-01-18T12:00:00+03:00", 500),
            ("2026-01-18T19:00:00+03:00", 300),
        ]);
        assert_eq!(profile(&records).best_hour, Some(12));
    }

    #[test]
    fn tie_breaks_toward_lower_hour() {
        let records = records_at(&[
            ("2026-01-18T19:00:00+03:00", 400),
            ("2026-01-18T08:00:00+03:00", 400),
        ]);
        assert_eq!(profile(&records).best_hour, Some(8));
    }

    #[test]
    fn uplift_relative_to_mean_of_bucket_means() {
        let records = records_at(&[
            ("2026-01-18T08:00:00+03:00", 100),
            ("2026-01-18T12:00:00+03:00", 300),
        ]);
        // Bucket means: 100 and 300; overall 200; best 300 → +50%.
        let result = profile(&records);
        assert!((result.uplift_pct - 50.0).abs() < 1e-9);
    }

    #[test]
    fn all_zero_views_gives_zero_uplift() {
        let records = records_at(&[
            ("2026-01-18T08:00:00+03:00", 0),
            ("2026-01-18T12:00:00+03:00", 0),
        ]);
        let result = profile(&records);
        assert!((result.uplift_pct - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_sample_produces_empty_profile() {
        let result = profile(&[]);
        assert!(result.buckets.is_empty());
        assert_eq!(result.best_hour, None);
        assert!((result.uplift_pct - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn two_hours_is_not_diverse_three_is() {
        let two = records_at(&[
            ("2026-01-18T08:00:00+03:00", 1),
            ("2026-01-18T12:00:00+03:00", 2),
        ]);
        assert!(!profile(&two).has_hour_diversity());

        let three = records_at(&[
            ("2026-01-18T08:00:00+03:00", 1),
            ("2026-01-18T12:00:00+03:00", 2),
            ("2026-01-18T19:00:00+03:00", 3),
        ]);
        assert!(profile(&three).has_hour_diversity());
    }
}
