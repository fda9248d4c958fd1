//! DTOs for per-club statistics and the dispersion chart.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::application::services::ClubStatsRow;
use crate::domain::analysis::{DateRange, DispersionChart, MissBucket};

/// Statistics for one club.
#[derive(Debug, Serialize)]
pub struct ClubStatsItem {
    pub club_id: i64,
    pub name: String,
    pub label: String,
    pub category: &'static str,
    pub shot_count: usize,
    /// Mean distance, `null` when the club has no shots in range.
    pub average_distance: Option<f64>,
    pub buckets: BTreeMap<MissBucket, usize>,
    /// Share of shots per bucket, one decimal.
    pub percentages: BTreeMap<MissBucket, f64>,
}

impl From<ClubStatsRow> for ClubStatsItem {
    fn from(row: ClubStatsRow) -> Self {
        let percentages = MissBucket::ALL
            .iter()
            .map(|b| (*b, row.stats.bucket_percent(*b)))
            .collect();

        Self {
            club_id: row.club.id,
            label: row.club.label(),
            category: row.club.category().as_str(),
            name: row.club.name,
            shot_count: row.stats.shot_count,
            average_distance: row.stats.average_distance,
            buckets: row.stats.buckets,
            percentages,
        }
    }
}

/// Response of `GET /api/stats`.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub range: DateRange,
    pub total_shots: usize,
    pub clubs: Vec<ClubStatsItem>,
}

/// Response of `GET /api/dispersion`.
#[derive(Debug, Serialize)]
pub struct DispersionResponse {
    pub range: DateRange,
    #[serde(flatten)]
    pub chart: DispersionChart,
}
