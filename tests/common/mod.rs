#![allow(dead_code)]

use chrono::NaiveDate;
use golf_practice::domain::entities::{NewClub, NewShot};
use golf_practice::domain::repositories::{ClubRepository, ShotRepository};
use golf_practice::infrastructure::persistence::{SqliteClubRepository, SqliteShotRepository};
use golf_practice::state::AppState;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use std::sync::Arc;

pub const TEST_PASSWORD: &str = "correct horse";

/// Fresh in-memory database with migrations applied.
///
/// One connection only: every connection to `sqlite::memory:` opens its own
/// empty database.
pub async fn setup_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    sqlx::migrate!("./migrations").run(&pool).await.unwrap();

    pool
}

pub fn create_test_state(pool: SqlitePool) -> AppState {
    AppState::new(
        Arc::new(pool),
        "test-session-secret".to_string(),
        chrono::Duration::hours(1),
        false,
    )
}

pub async fn create_test_user(state: &AppState, username: &str) -> i64 {
    state
        .auth_service
        .register(username, TEST_PASSWORD, TEST_PASSWORD)
        .await
        .unwrap()
        .id
}

/// Raw session token for `username`, usable as cookie or Bearer token.
pub async fn login(state: &AppState, username: &str) -> String {
    state
        .auth_service
        .login(username, TEST_PASSWORD)
        .await
        .unwrap()
}

pub async fn create_test_club(
    pool: &SqlitePool,
    user_id: i64,
    name: &str,
    category: Option<&str>,
    loft: Option<f64>,
) -> i64 {
    SqliteClubRepository::new(Arc::new(pool.clone()))
        .create(
            user_id,
            NewClub {
                name: name.to_string(),
                category: category.map(str::to_string),
                loft,
                notes: None,
            },
        )
        .await
        .unwrap()
        .id
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

pub async fn create_test_shot(
    pool: &SqlitePool,
    club_id: i64,
    day: &str,
    distance: f64,
    result: &str,
) -> i64 {
    SqliteShotRepository::new(Arc::new(pool.clone()))
        .create(NewShot {
            club_id,
            date: date(day),
            distance,
            result: Some(result.to_string()),
            context: None,
        })
        .await
        .unwrap()
        .id
}

pub async fn count_rows(pool: &SqlitePool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
        .fetch_one(pool)
        .await
        .unwrap()
}
