mod common;

use golf_practice::domain::analysis::DateRange;
use golf_practice::domain::entities::NewShot;
use golf_practice::domain::repositories::ShotRepository;
use golf_practice::infrastructure::persistence::SqliteShotRepository;
use std::sync::Arc;

#[tokio::test]
async fn test_create_shot_round_trips_fields() {
    let pool = common::setup_pool().await;
    let state = common::create_test_state(pool.clone());
    let alice = common::create_test_user(&state, "alice").await;
    let club = common::create_test_club(&pool, alice, "7 iron", None, None).await;
    let repo = SqliteShotRepository::new(Arc::new(pool));

    let shot = repo
        .create(NewShot {
            club_id: club,
            date: common::date("2025-06-01"),
            distance: 152.5,
            result: Some("slight draw".to_string()),
            context: Some("into wind".to_string()),
        })
        .await
        .unwrap();

    let listed = repo.list_for_user(alice, DateRange::all()).await.unwrap();
    assert_eq!(listed, vec![shot]);
    assert_eq!(listed[0].date, common::date("2025-06-01"));
    assert_eq!(listed[0].distance, 152.5);
    assert_eq!(listed[0].context.as_deref(), Some("into wind"));
}

#[tokio::test]
async fn test_negative_distance_rejected_by_schema() {
    let pool = common::setup_pool().await;
    let state = common::create_test_state(pool.clone());
    let alice = common::create_test_user(&state, "alice").await;
    let club = common::create_test_club(&pool, alice, "7 iron", None, None).await;
    let repo = SqliteShotRepository::new(Arc::new(pool));

    let result = repo
        .create(NewShot {
            club_id: club,
            date: common::date("2025-06-01"),
            distance: -1.0,
            result: None,
            context: None,
        })
        .await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_list_filters_by_inclusive_date_range() {
    let pool = common::setup_pool().await;
    let state = common::create_test_state(pool.clone());
    let alice = common::create_test_user(&state, "alice").await;
    let club = common::create_test_club(&pool, alice, "7 iron", None, None).await;

    common::create_test_shot(&pool, club, "2025-05-31", 140.0, "").await;
    let first = common::create_test_shot(&pool, club, "2025-06-01", 150.0, "").await;
    let last = common::create_test_shot(&pool, club, "2025-06-03", 160.0, "").await;
    common::create_test_shot(&pool, club, "2025-06-04", 170.0, "").await;

    let repo = SqliteShotRepository::new(Arc::new(pool));

    let range = DateRange::new(
        Some(common::date("2025-06-01")),
        Some(common::date("2025-06-03")),
    );
    let ids: Vec<i64> = repo
        .list_for_user(alice, range)
        .await
        .unwrap()
        .iter()
        .map(|s| s.id)
        .collect();
    assert_eq!(ids, vec![last, first]);

    let day = repo
        .list_for_user(alice, DateRange::day(common::date("2025-05-31")))
        .await
        .unwrap();
    assert_eq!(day.len(), 1);

    let open_ended = repo
        .list_for_user(alice, DateRange::new(Some(common::date("2025-06-03")), None))
        .await
        .unwrap();
    assert_eq!(open_ended.len(), 2);
}

#[tokio::test]
async fn test_shots_are_scoped_to_club_owner() {
    let pool = common::setup_pool().await;
    let state = common::create_test_state(pool.clone());
    let alice = common::create_test_user(&state, "alice").await;
    let bob = common::create_test_user(&state, "bob").await;
    let alice_club = common::create_test_club(&pool, alice, "Driver", None, None).await;
    let bob_club = common::create_test_club(&pool, bob, "Driver", None, None).await;

    let shot = common::create_test_shot(&pool, alice_club, "2025-06-01", 230.0, "").await;
    common::create_test_shot(&pool, bob_club, "2025-06-01", 250.0, "").await;

    let repo = SqliteShotRepository::new(Arc::new(pool));

    assert_eq!(repo.count_for_user(alice).await.unwrap(), 1);
    assert_eq!(repo.count_for_user(bob).await.unwrap(), 1);

    let bob_shots = repo.list_for_user(bob, DateRange::all()).await.unwrap();
    assert!(bob_shots.iter().all(|s| s.club_id == bob_club));

    assert!(!repo.delete(bob, shot).await.unwrap());
    assert!(repo.delete(alice, shot).await.unwrap());
    assert_eq!(repo.count_for_user(alice).await.unwrap(), 0);
}
