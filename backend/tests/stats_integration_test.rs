//! Integration tests for the per-user stats endpoint

mod common;

use axum::http::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
#[ignore = "requires database"]
async fn test_stats_empty_for_new_user() {
    let app = common::TestApp::new().await;
    let user = app.register_user().await;

    let (status, response) = app.get_auth("/api/stats", &user.token).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response, "{}");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_stats_counts_days_entries_and_favourite() {
    let app = common::TestApp::new().await;
    let user = app.register_user().await;

    for (name, date) in [
        ("Bench Press", "2024-06-01"),
        ("Bench Press", "2024-06-02"),
        ("Squat", "2024-06-02"),
    ] {
        app.add_workout(&user.token, json!({ "exercise_name": name, "workout_date": date }))
            .await;
    }

    let (status, response) = app.get_auth("/api/stats", &user.token).await;
    assert_eq!(status, StatusCode::OK);

    let stats: Value = serde_json::from_str(&response).unwrap();
    assert_eq!(stats["total_days"], 2);
    assert_eq!(stats["total_exercises"], 3);
    assert_eq!(stats["most_common_exercise"], "Bench Press");
    assert_eq!(stats["exercise_count"], 2);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_stats_ignore_other_users() {
    let app = common::TestApp::new().await;
    let busy = app.register_user().await;
    let idle = app.register_user().await;

    app.add_workout(&busy.token, json!({ "exercise_name": "Row", "workout_date": "2024-06-01" }))
        .await;

    let (_, response) = app.get_auth("/api/stats", &idle.token).await;
    assert_eq!(response, "{}");
}
