//! SQLite implementation of the shot repository.

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::analysis::DateRange;
use crate::domain::entities::{NewShot, Shot};
use crate::domain::repositories::ShotRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct ShotRow {
    id: i64,
    club_id: i64,
    date: NaiveDate,
    distance: f64,
    result: Option<String>,
    context: Option<String>,
}

impl From<ShotRow> for Shot {
    fn from(row: ShotRow) -> Self {
        Shot::new(
            row.id,
            row.club_id,
            row.date,
            row.distance,
            row.result,
            row.context,
        )
    }
}

/// SQLite repository for shots.
///
/// Shots carry no owner column; ownership is checked by joining on
/// `clubs.user_id`.
pub struct SqliteShotRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteShotRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShotRepository for SqliteShotRepository {
    async fn list_for_user(&self, user_id: i64, range: DateRange) -> Result<Vec<Shot>, AppError> {
        let rows = sqlx::query_as::<_, ShotRow>(
            r#"
            SELECT s.id, s.club_id, s.date, s.distance, s.result, s.context
            FROM shots s
            JOIN clubs c ON c.id = s.club_id
            WHERE c.user_id = ?1
              AND (?2 IS NULL OR s.date >= ?2)
              AND (?3 IS NULL OR s.date <= ?3)
            ORDER BY s.date DESC, s.id DESC
            "#,
        )
        .bind(user_id)
        .bind(range.from)
        .bind(range.to)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn create(&self, new_shot: NewShot) -> Result<Shot, AppError> {
        let row = sqlx::query_as::<_, ShotRow>(
            r#"
            INSERT INTO shots (club_id, date, distance, result, context, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING id, club_id, date, distance, result, context
            "#,
        )
        .bind(new_shot.club_id)
        .bind(new_shot.date)
        .bind(new_shot.distance)
        .bind(new_shot.result)
        .bind(new_shot.context)
        .bind(Utc::now())
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn delete(&self, user_id: i64, shot_id: i64) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            DELETE FROM shots
            WHERE id = ?
              AND club_id IN (SELECT id FROM clubs WHERE user_id = ?)
            "#,
        )
        .bind(shot_id)
        .bind(user_id)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count_for_user(&self, user_id: i64) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM shots s
            JOIN clubs c ON c.id = s.club_id
            WHERE c.user_id = ?
            "#,
        )
        .bind(user_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(count)
    }
}
