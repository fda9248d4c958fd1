//! Shot logging and listing.

use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::analysis::{DateRange, sort_by_bag_order};
use crate::domain::entities::{CurrentUser, NewShot, Shot, ShotWithClub};
use crate::domain::repositories::{ClubRepository, ShotRepository};
use crate::error::AppError;
use crate::utils::dates::today;
use serde_json::json;

/// A shot as submitted by the user, before defaults are applied.
#[derive(Debug, Clone, PartialEq)]
pub struct ShotDraft {
    pub club_id: i64,
    /// Today when absent.
    pub date: Option<NaiveDate>,
    pub distance: f64,
    pub result: Option<String>,
    pub context: Option<String>,
}

/// Service for recording and browsing practice shots.
pub struct ShotService<C: ClubRepository, S: ShotRepository> {
    clubs: Arc<C>,
    shots: Arc<S>,
}

impl<C: ClubRepository, S: ShotRepository> ShotService<C, S> {
    /// Creates a new shot service.
    pub fn new(clubs: Arc<C>, shots: Arc<S>) -> Self {
        Self { clubs, shots }
    }

    /// Lists the user's shots within `range` joined with their clubs.
    ///
    /// Ordered by the club's bag position, then date descending, then id
    /// descending.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list(
        &self,
        user: CurrentUser,
        range: DateRange,
    ) -> Result<Vec<ShotWithClub>, AppError> {
        let mut clubs = self.clubs.list_for_user(user.user_id).await?;
        sort_by_bag_order(&mut clubs);

        let position: HashMap<i64, usize> = clubs
            .iter()
            .enumerate()
            .map(|(idx, club)| (club.id, idx))
            .collect();

        let mut shots = self.shots.list_for_user(user.user_id, range).await?;
        shots.retain(|s| position.contains_key(&s.club_id));
        shots.sort_by(|a, b| {
            position[&a.club_id]
                .cmp(&position[&b.club_id])
                .then_with(|| b.date.cmp(&a.date))
                .then_with(|| b.id.cmp(&a.id))
        });

        Ok(shots
            .into_iter()
            .map(|shot| {
                let club = clubs[position[&shot.club_id]].clone();
                ShotWithClub { shot, club }
            })
            .collect())
    }

    /// Records a shot with one of the user's clubs.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the club is not the user's or the
    /// distance is negative or not a number.
    pub async fn log(&self, user: CurrentUser, draft: ShotDraft) -> Result<Shot, AppError> {
        if !draft.distance.is_finite() || draft.distance < 0.0 {
            return Err(AppError::bad_request(
                "Distance must be a non-negative number",
                json!({ "distance": draft.distance.to_string() }),
            ));
        }

        if self
            .clubs
            .find_for_user(user.user_id, draft.club_id)
            .await?
            .is_none()
        {
            return Err(AppError::bad_request(
                "Invalid club",
                json!({ "club_id": draft.club_id }),
            ));
        }

        let new_shot = NewShot {
            club_id: draft.club_id,
            date: draft.date.unwrap_or_else(today),
            distance: draft.distance,
            result: trimmed(draft.result),
            context: trimmed(draft.context),
        };

        let shot = self.shots.create(new_shot).await?;

        tracing::debug!(user_id = user.user_id, shot_id = shot.id, "shot logged");

        Ok(shot)
    }

    /// Deletes one of the user's shots.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the shot is not the user's.
    pub async fn delete(&self, user: CurrentUser, shot_id: i64) -> Result<(), AppError> {
        if !self.shots.delete(user.user_id, shot_id).await? {
            return Err(AppError::not_found(
                "Shot not found",
                json!({ "shot_id": shot_id }),
            ));
        }
        Ok(())
    }
}

fn trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Club;
    use crate::domain::repositories::{MockClubRepository, MockShotRepository};

    const ALICE: CurrentUser = CurrentUser { user_id: 1 };

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn draft(club_id: i64, distance: f64) -> ShotDraft {
        ShotDraft {
            club_id,
            date: None,
            distance,
            result: Some(" pull ".to_string()),
            context: Some(String::new()),
        }
    }

    fn stored(id: i64, club_id: i64, day: &str) -> Shot {
        Shot::new(id, club_id, date(day), 100.0, None, None)
    }

    #[tokio::test]
    async fn test_list_orders_by_bag_then_newest() {
        let mut clubs = MockClubRepository::new();
        clubs.expect_list_for_user().returning(|_| {
            Ok(vec![
                Club::new(10, 1, "Putter", None, None, None),
                Club::new(20, 1, "Driver", None, None, None),
            ])
        });

        let mut shots = MockShotRepository::new();
        shots.expect_list_for_user().returning(|_, _| {
            Ok(vec![
                stored(5, 10, "2025-06-02"),
                stored(4, 20, "2025-06-02"),
                stored(3, 10, "2025-06-01"),
                stored(2, 20, "2025-06-01"),
                stored(1, 20, "2025-06-01"),
            ])
        });

        let listed = ShotService::new(Arc::new(clubs), Arc::new(shots))
            .list(ALICE, DateRange::all())
            .await
            .unwrap();

        let ids: Vec<i64> = listed.iter().map(|s| s.shot.id).collect();
        assert_eq!(ids, vec![4, 2, 1, 5, 3]);
        assert_eq!(listed[0].club.name, "Driver");
        assert_eq!(listed[3].club.name, "Putter");
    }

    #[tokio::test]
    async fn test_log_defaults_date_and_trims_text() {
        let mut clubs = MockClubRepository::new();
        clubs
            .expect_find_for_user()
            .withf(|user_id, club_id| *user_id == 1 && *club_id == 3)
            .returning(|_, id| Ok(Some(Club::new(id, 1, "7i", None, None, None))));

        let expected = today();
        let mut shots = MockShotRepository::new();
        shots
            .expect_create()
            .withf(move |s| {
                s.date == expected && s.result.as_deref() == Some("pull") && s.context.is_none()
            })
            .times(1)
            .returning(|s| Ok(Shot::new(9, s.club_id, s.date, s.distance, s.result, s.context)));

        let shot = ShotService::new(Arc::new(clubs), Arc::new(shots))
            .log(ALICE, draft(3, 150.0))
            .await
            .unwrap();

        assert_eq!(shot.id, 9);
    }

    #[tokio::test]
    async fn test_log_rejects_foreign_club() {
        let mut clubs = MockClubRepository::new();
        clubs.expect_find_for_user().returning(|_, _| Ok(None));

        let err = ShotService::new(Arc::new(clubs), Arc::new(MockShotRepository::new()))
            .log(ALICE, draft(42, 150.0))
            .await
            .unwrap_err();

        assert_eq!(err.message(), "Invalid club");
    }

    #[tokio::test]
    async fn test_log_rejects_negative_distance() {
        let svc = ShotService::new(
            Arc::new(MockClubRepository::new()),
            Arc::new(MockShotRepository::new()),
        );

        for distance in [-1.0, f64::NAN] {
            let err = svc.log(ALICE, draft(1, distance)).await.unwrap_err();
            assert!(matches!(err, AppError::Validation { .. }));
        }
    }

    #[tokio::test]
    async fn test_zero_distance_is_allowed() {
        let mut clubs = MockClubRepository::new();
        clubs
            .expect_find_for_user()
            .returning(|_, id| Ok(Some(Club::new(id, 1, "Putter", None, None, None))));
        let mut shots = MockShotRepository::new();
        shots
            .expect_create()
            .returning(|s| Ok(Shot::new(1, s.club_id, s.date, s.distance, s.result, s.context)));

        let shot = ShotService::new(Arc::new(clubs), Arc::new(shots))
            .log(ALICE, draft(1, 0.0))
            .await
            .unwrap();

        assert_eq!(shot.distance, 0.0);
    }

    #[tokio::test]
    async fn test_delete_missing_shot() {
        let mut shots = MockShotRepository::new();
        shots.expect_delete().returning(|_, _| Ok(false));

        let err = ShotService::new(Arc::new(MockClubRepository::new()), Arc::new(shots))
            .delete(ALICE, 8)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound { .. }));
    }
}
