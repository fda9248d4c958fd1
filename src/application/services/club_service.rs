//! Club management scoped to the current user.

use std::sync::Arc;

use crate::domain::analysis::sort_by_bag_order;
use crate::domain::entities::{Club, CurrentUser, NewClub};
use crate::domain::repositories::ClubRepository;
use crate::error::AppError;
use serde_json::json;

const MAX_NAME_LEN: usize = 100;

/// Service for listing and editing a user's clubs.
///
/// Clubs are always returned in bag order; the order is recomputed from
/// category and loft on every read.
pub struct ClubService<R: ClubRepository> {
    repository: Arc<R>,
}

impl<R: ClubRepository> ClubService<R> {
    /// Creates a new club service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists the user's clubs in bag order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list(&self, user: CurrentUser) -> Result<Vec<Club>, AppError> {
        let mut clubs = self.repository.list_for_user(user.user_id).await?;
        sort_by_bag_order(&mut clubs);
        Ok(clubs)
    }

    /// Fetches one of the user's clubs.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the club is missing or owned by
    /// another user.
    pub async fn get(&self, user: CurrentUser, club_id: i64) -> Result<Club, AppError> {
        self.repository
            .find_for_user(user.user_id, club_id)
            .await?
            .ok_or_else(|| club_not_found(club_id))
    }

    /// Adds a club to the user's bag.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the name is blank or the loft is
    /// not a finite non-negative number.
    pub async fn create(&self, user: CurrentUser, new_club: NewClub) -> Result<Club, AppError> {
        let new_club = normalize(new_club)?;
        let club = self.repository.create(user.user_id, new_club).await?;

        tracing::info!(user_id = user.user_id, club_id = club.id, "club created");

        Ok(club)
    }

    /// Replaces the editable fields of one of the user's clubs.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for invalid input and
    /// [`AppError::NotFound`] if the club is not the user's.
    pub async fn update(
        &self,
        user: CurrentUser,
        club_id: i64,
        changes: NewClub,
    ) -> Result<Club, AppError> {
        let changes = normalize(changes)?;

        self.repository
            .update(user.user_id, club_id, changes)
            .await?
            .ok_or_else(|| club_not_found(club_id))
    }

    /// Deletes one of the user's clubs together with its shots.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the club is not the user's.
    pub async fn delete(&self, user: CurrentUser, club_id: i64) -> Result<(), AppError> {
        if !self.repository.delete(user.user_id, club_id).await? {
            return Err(club_not_found(club_id));
        }

        tracing::info!(user_id = user.user_id, club_id, "club deleted");

        Ok(())
    }
}

fn club_not_found(club_id: i64) -> AppError {
    AppError::not_found("Club not found", json!({ "club_id": club_id }))
}

fn blank_to_none(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Trims text fields and checks name and loft.
fn normalize(club: NewClub) -> Result<NewClub, AppError> {
    let name = club.name.trim().to_string();

    if name.is_empty() {
        return Err(AppError::bad_request("Must provide club name", json!({})));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(AppError::bad_request(
            "Club name is too long",
            json!({ "max_length": MAX_NAME_LEN }),
        ));
    }
    if let Some(loft) = club.loft
        && (!loft.is_finite() || loft < 0.0)
    {
        return Err(AppError::bad_request(
            "Loft must be a non-negative number",
            json!({ "loft": loft.to_string() }),
        ));
    }

    Ok(NewClub {
        name,
        category: blank_to_none(club.category),
        loft: club.loft,
        notes: blank_to_none(club.notes),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockClubRepository;

    const ALICE: CurrentUser = CurrentUser { user_id: 1 };

    fn club(id: i64, name: &str, loft: Option<f64>) -> Club {
        Club::new(id, 1, name, None, loft, None)
    }

    fn new_club(name: &str, loft: Option<f64>) -> NewClub {
        NewClub {
            name: name.to_string(),
            category: None,
            loft,
            notes: None,
        }
    }

    #[tokio::test]
    async fn test_list_returns_bag_order() {
        let mut repo = MockClubRepository::new();
        repo.expect_list_for_user()
            .withf(|user_id| *user_id == 1)
            .times(1)
            .returning(|_| {
                Ok(vec![
                    club(1, "Putter", None),
                    club(2, "Sand Wedge", Some(54.0)),
                    club(3, "Driver", None),
                    club(4, "Gap Wedge", Some(50.0)),
                ])
            });

        let clubs = ClubService::new(Arc::new(repo)).list(ALICE).await.unwrap();
        let names: Vec<&str> = clubs.iter().map(|c| c.name.as_str()).collect();

        assert_eq!(names, vec!["Driver", "Gap Wedge", "Sand Wedge", "Putter"]);
    }

    #[tokio::test]
    async fn test_get_foreign_club_is_not_found() {
        let mut repo = MockClubRepository::new();
        repo.expect_find_for_user()
            .withf(|user_id, club_id| *user_id == 1 && *club_id == 99)
            .returning(|_, _| Ok(None));

        let err = ClubService::new(Arc::new(repo))
            .get(ALICE, 99)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_create_trims_and_drops_blank_fields() {
        let mut repo = MockClubRepository::new();
        repo.expect_create()
            .withf(|user_id, c| {
                *user_id == 1
                    && c.name == "7 iron"
                    && c.category.is_none()
                    && c.notes.as_deref() == Some("new grips")
            })
            .times(1)
            .returning(|user_id, c| Ok(Club::new(5, user_id, c.name, c.category, c.loft, c.notes)));

        let input = NewClub {
            name: "  7 iron ".to_string(),
            category: Some("   ".to_string()),
            loft: None,
            notes: Some(" new grips ".to_string()),
        };

        let created = ClubService::new(Arc::new(repo))
            .create(ALICE, input)
            .await
            .unwrap();

        assert_eq!(created.id, 5);
    }

    #[tokio::test]
    async fn test_create_requires_name() {
        let err = ClubService::new(Arc::new(MockClubRepository::new()))
            .create(ALICE, new_club("   ", None))
            .await
            .unwrap_err();

        assert_eq!(err.message(), "Must provide club name");
    }

    #[tokio::test]
    async fn test_create_rejects_bad_loft() {
        let svc = ClubService::new(Arc::new(MockClubRepository::new()));

        for loft in [-1.0, f64::NAN, f64::INFINITY] {
            let err = svc.create(ALICE, new_club("SW", Some(loft))).await.unwrap_err();
            assert!(matches!(err, AppError::Validation { .. }), "loft {loft}");
        }
    }

    #[tokio::test]
    async fn test_update_missing_club() {
        let mut repo = MockClubRepository::new();
        repo.expect_update().returning(|_, _, _| Ok(None));

        let err = ClubService::new(Arc::new(repo))
            .update(ALICE, 3, new_club("Driver", None))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete() {
        let mut repo = MockClubRepository::new();
        repo.expect_delete()
            .withf(|_, club_id| *club_id == 2)
            .times(1)
            .returning(|_, _| Ok(true));
        repo.expect_delete()
            .withf(|_, club_id| *club_id == 3)
            .times(1)
            .returning(|_, _| Ok(false));

        let svc = ClubService::new(Arc::new(repo));

        assert!(svc.delete(ALICE, 2).await.is_ok());
        assert!(matches!(
            svc.delete(ALICE, 3).await.unwrap_err(),
            AppError::NotFound { .. }
        ));
    }
}
