//! SQLite implementation of the club repository.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::{Club, NewClub};
use crate::domain::repositories::ClubRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct ClubRow {
    id: i64,
    user_id: i64,
    name: String,
    category: Option<String>,
    loft: Option<f64>,
    notes: Option<String>,
}

impl From<ClubRow> for Club {
    fn from(row: ClubRow) -> Self {
        Club::new(
            row.id,
            row.user_id,
            row.name,
            row.category,
            row.loft,
            row.notes,
        )
    }
}

/// SQLite repository for clubs.
///
/// Every statement filters on `user_id`, so another user's club id is
/// indistinguishable from a missing one.
pub struct SqliteClubRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteClubRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClubRepository for SqliteClubRepository {
    async fn list_for_user(&self, user_id: i64) -> Result<Vec<Club>, AppError> {
        let rows = sqlx::query_as::<_, ClubRow>(
            r#"
            SELECT id, user_id, name, category, loft, notes
            FROM clubs
            WHERE user_id = ?
            ORDER BY id
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_for_user(&self, user_id: i64, club_id: i64) -> Result<Option<Club>, AppError> {
        let row = sqlx::query_as::<_, ClubRow>(
            r#"
            SELECT id, user_id, name, category, loft, notes
            FROM clubs
            WHERE id = ? AND user_id = ?
            "#,
        )
        .bind(club_id)
        .bind(user_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn create(&self, user_id: i64, new_club: NewClub) -> Result<Club, AppError> {
        let row = sqlx::query_as::<_, ClubRow>(
            r#"
            INSERT INTO clubs (user_id, name, category, loft, notes, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING id, user_id, name, category, loft, notes
            "#,
        )
        .bind(user_id)
        .bind(new_club.name)
        .bind(new_club.category)
        .bind(new_club.loft)
        .bind(new_club.notes)
        .bind(Utc::now())
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn update(
        &self,
        user_id: i64,
        club_id: i64,
        changes: NewClub,
    ) -> Result<Option<Club>, AppError> {
        let row = sqlx::query_as::<_, ClubRow>(
            r#"
            UPDATE clubs
            SET name = ?, category = ?, loft = ?, notes = ?
            WHERE id = ? AND user_id = ?
            RETURNING id, user_id, name, category, loft, notes
            "#,
        )
        .bind(changes.name)
        .bind(changes.category)
        .bind(changes.loft)
        .bind(changes.notes)
        .bind(club_id)
        .bind(user_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn delete(&self, user_id: i64, club_id: i64) -> Result<bool, AppError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            DELETE FROM shots
            WHERE club_id IN (SELECT id FROM clubs WHERE id = ? AND user_id = ?)
            "#,
        )
        .bind(club_id)
        .bind(user_id)
        .execute(&mut *tx)
        .await?;

        let result = sqlx::query("DELETE FROM clubs WHERE id = ? AND user_id = ?")
            .bind(club_id)
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(result.rows_affected() > 0)
    }
}
