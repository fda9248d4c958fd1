//! Per-club shot statistics.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

use super::miss::{MissBucket, classify};
use crate::domain::entities::{Club, Shot};

/// Inclusive calendar-date filter. A missing bound is unbounded on that side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self { from, to }
    }

    /// Range matching every date.
    pub fn all() -> Self {
        Self::default()
    }

    /// Range matching a single day.
    pub fn day(date: NaiveDate) -> Self {
        Self {
            from: Some(date),
            to: Some(date),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from.is_none_or(|from| date >= from) && self.to.is_none_or(|to| date <= to)
    }

    pub fn is_unbounded(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }
}

/// Aggregated numbers for one club.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClubStats {
    pub club_id: i64,
    pub shot_count: usize,
    /// Mean distance; `None` when the club has no shots.
    pub average_distance: Option<f64>,
    /// Shot count per miss bucket. All six buckets are always present.
    pub buckets: BTreeMap<MissBucket, usize>,
}

impl ClubStats {
    /// Zero shots, no average, all buckets zero.
    pub fn empty(club_id: i64) -> Self {
        Self {
            club_id,
            shot_count: 0,
            average_distance: None,
            buckets: MissBucket::ALL.iter().map(|b| (*b, 0)).collect(),
        }
    }

    pub fn bucket_count(&self, bucket: MissBucket) -> usize {
        self.buckets.get(&bucket).copied().unwrap_or(0)
    }

    /// Share of the club's shots in `bucket` as a percentage rounded to one
    /// decimal. Zero when the club has no shots.
    pub fn bucket_percent(&self, bucket: MissBucket) -> f64 {
        if self.shot_count == 0 {
            return 0.0;
        }
        let pct = 100.0 * self.bucket_count(bucket) as f64 / self.shot_count as f64;
        (pct * 10.0).round() / 10.0
    }
}

/// Computes [`ClubStats`] for every club in `clubs`.
///
/// Shots outside `range` and shots for clubs not in `clubs` are ignored.
/// Clubs without matching shots still get an entry with a zero count, no
/// average and all-zero buckets.
pub fn aggregate(clubs: &[Club], shots: &[Shot], range: &DateRange) -> BTreeMap<i64, ClubStats> {
    let mut totals: HashMap<i64, f64> = HashMap::with_capacity(clubs.len());
    let mut stats: BTreeMap<i64, ClubStats> = clubs
        .iter()
        .map(|club| (club.id, ClubStats::empty(club.id)))
        .collect();

    for shot in shots.iter().filter(|s| range.contains(s.date)) {
        let Some(entry) = stats.get_mut(&shot.club_id) else {
            continue;
        };

        entry.shot_count += 1;
        *totals.entry(shot.club_id).or_insert(0.0) += shot.distance;

        let bucket = classify(shot.result.as_deref().unwrap_or(""));
        *entry.buckets.entry(bucket).or_insert(0) += 1;
    }

    for entry in stats.values_mut() {
        if entry.shot_count > 0 {
            let total = totals.get(&entry.club_id).copied().unwrap_or(0.0);
            entry.average_distance = Some(total / entry.shot_count as f64);
        }
    }

    stats
}
