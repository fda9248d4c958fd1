//! Per-club statistics and dispersion chart service.

use serde::Serialize;
use std::sync::Arc;

use crate::domain::analysis::{
    ClubStats, DateRange, DispersionChart, aggregate, chart, sort_by_bag_order,
};
use crate::domain::entities::{Club, CurrentUser};
use crate::domain::repositories::{ClubRepository, ShotRepository};
use crate::error::AppError;

/// Stats for one club, paired with the club itself.
#[derive(Debug, Clone, PartialEq)]
pub struct ClubStatsRow {
    pub club: Club,
    pub stats: ClubStats,
}

/// Everything the stats page shows for one date range.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsReport {
    pub range: DateRange,
    /// One row per club, in bag order, including clubs without shots.
    pub rows: Vec<ClubStatsRow>,
    pub chart: DispersionChart,
}

impl StatsReport {
    pub fn total_shots(&self) -> usize {
        self.rows.iter().map(|r| r.stats.shot_count).sum()
    }
}

/// Summary used by the admin CLI and the API.
#[derive(Debug, Clone, Serialize)]
pub struct StatsSummary {
    pub clubs: usize,
    pub shots: usize,
}

/// Service that loads one user's clubs and shots and runs the analysis
/// functions over them.
pub struct StatsService<C: ClubRepository, S: ShotRepository> {
    clubs: Arc<C>,
    shots: Arc<S>,
}

impl<C: ClubRepository, S: ShotRepository> StatsService<C, S> {
    /// Creates a new statistics service.
    pub fn new(clubs: Arc<C>, shots: Arc<S>) -> Self {
        Self { clubs, shots }
    }

    /// Builds the per-club table and the dispersion chart for `range`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if stored shots reference a club the
    /// user does not own, and [`AppError::Internal`] on database errors.
    pub async fn report(&self, user: CurrentUser, range: DateRange) -> Result<StatsReport, AppError> {
        let mut clubs = self.clubs.list_for_user(user.user_id).await?;
        sort_by_bag_order(&mut clubs);

        let shots = self.shots.list_for_user(user.user_id, range).await?;

        let mut per_club = aggregate(&clubs, &shots, &range);
        let chart = chart(&clubs, &shots)?;

        let rows = clubs
            .into_iter()
            .filter_map(|club| {
                per_club
                    .remove(&club.id)
                    .map(|stats| ClubStatsRow { club, stats })
            })
            .collect();

        Ok(StatsReport { range, rows, chart })
    }

    /// Per-club statistics in bag order.
    ///
    /// # Errors
    ///
    /// See [`Self::report`].
    pub async fn club_stats(
        &self,
        user: CurrentUser,
        range: DateRange,
    ) -> Result<Vec<ClubStatsRow>, AppError> {
        Ok(self.report(user, range).await?.rows)
    }

    /// Dispersion chart for the user's shots in `range`.
    ///
    /// # Errors
    ///
    /// See [`Self::report`].
    pub async fn dispersion(
        &self,
        user: CurrentUser,
        range: DateRange,
    ) -> Result<DispersionChart, AppError> {
        let mut clubs = self.clubs.list_for_user(user.user_id).await?;
        sort_by_bag_order(&mut clubs);

        let shots = self.shots.list_for_user(user.user_id, range).await?;

        Ok(chart(&clubs, &shots)?)
    }

    /// Club and shot totals for the user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn summary(&self, user: CurrentUser) -> Result<StatsSummary, AppError> {
        let clubs = self.clubs.list_for_user(user.user_id).await?.len();
        let shots = self.shots.count_for_user(user.user_id).await?;

        Ok(StatsSummary {
            clubs,
            shots: usize::try_from(shots).unwrap_or(0),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::MissBucket;
    use crate::domain::entities::Shot;
    use crate::domain::repositories::{MockClubRepository, MockShotRepository};
    use chrono::NaiveDate;

    const ALICE: CurrentUser = CurrentUser { user_id: 1 };

    fn shot(id: i64, club_id: i64, distance: f64, result: &str) -> Shot {
        Shot::new(
            id,
            club_id,
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            distance,
            Some(result.to_string()),
            None,
        )
    }

    fn clubs_repo() -> MockClubRepository {
        let mut clubs = MockClubRepository::new();
        clubs.expect_list_for_user().returning(|_| {
            Ok(vec![
                Club::new(1, 1, "Putter", None, None, None),
                Club::new(7, 1, "7i", None, None, None),
                Club::new(2, 1, "Driver", None, None, None),
            ])
        });
        clubs
    }

    #[tokio::test]
    async fn test_report_rows_in_bag_order_with_empty_clubs() {
        let mut shots = MockShotRepository::new();
        shots
            .expect_list_for_user()
            .withf(|user_id, range| *user_id == 1 && range.is_unbounded())
            .returning(|_, _| Ok(vec![shot(1, 7, 150.0, "pull"), shot(2, 7, 160.0, "straight")]));

        let report = StatsService::new(Arc::new(clubs_repo()), Arc::new(shots))
            .report(ALICE, DateRange::all())
            .await
            .unwrap();

        let names: Vec<&str> = report.rows.iter().map(|r| r.club.name.as_str()).collect();
        assert_eq!(names, vec!["Driver", "7i", "Putter"]);

        let seven = &report.rows[1].stats;
        assert_eq!(seven.shot_count, 2);
        assert_eq!(seven.average_distance, Some(155.0));
        assert_eq!(seven.bucket_count(MissBucket::Left), 1);
        assert_eq!(seven.bucket_count(MissBucket::Center), 1);

        assert_eq!(report.rows[0].stats.shot_count, 0);
        assert_eq!(report.total_shots(), 2);

        assert_eq!(report.chart.points.len(), 2);
        assert_eq!(report.chart.legend.len(), 1);
        assert_eq!(report.chart.legend[0].label, "7i");
    }

    #[tokio::test]
    async fn test_dispersion_colors_follow_bag_order() {
        let mut shots = MockShotRepository::new();
        shots
            .expect_list_for_user()
            .returning(|_, _| Ok(vec![shot(1, 1, 3.0, ""), shot(2, 2, 240.0, "fade")]));

        let chart = StatsService::new(Arc::new(clubs_repo()), Arc::new(shots))
            .dispersion(ALICE, DateRange::all())
            .await
            .unwrap();

        assert_eq!(chart.scale_max, 250.0);
        // Driver first in bag order, putter third.
        assert_eq!(chart.points[1].color, crate::domain::analysis::dispersion::PALETTE[0]);
        assert_eq!(chart.points[0].color, crate::domain::analysis::dispersion::PALETTE[2]);
    }

    #[tokio::test]
    async fn test_shot_for_unowned_club_is_validation_error() {
        let mut shots = MockShotRepository::new();
        shots
            .expect_list_for_user()
            .returning(|_, _| Ok(vec![shot(1, 99, 100.0, "")]));

        let err = StatsService::new(Arc::new(clubs_repo()), Arc::new(shots))
            .dispersion(ALICE, DateRange::all())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_summary() {
        let mut shots = MockShotRepository::new();
        shots.expect_count_for_user().returning(|_| Ok(12));

        let summary = StatsService::new(Arc::new(clubs_repo()), Arc::new(shots))
            .summary(ALICE)
            .await
            .unwrap();

        assert_eq!(summary.clubs, 3);
        assert_eq!(summary.shots, 12);
    }
}
