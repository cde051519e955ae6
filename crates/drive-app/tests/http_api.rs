use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::{TimeZone, Utc};
use serde_json::{json, Value};
use tower::ServiceExt;

use drive_app::application::FixedClock;
use drive_app::presentation::{build_router, build_state};
use drive_domain::shared::UserId;
use drive_infrastructure::identity::TrustedHeaderIdentityProvider;
use drive_infrastructure::persistence::Database;

const USER_HEADER: &str = "x-user-id";

/// Router over a fresh in-memory database, "now" pinned to 2025-04-10 12:00 UTC.
async fn test_app() -> Router {
    let db = Database::in_memory().await.expect("open in-memory db");
    db.run_migrations().await.expect("run migrations");

    let clock = FixedClock::new(Utc.with_ymd_and_hms(2025, 4, 10, 12, 0, 0).unwrap());
    let state = build_state(
        Arc::new(db.pool().clone()),
        Arc::new(TrustedHeaderIdentityProvider::new(USER_HEADER)),
        Arc::new(clock),
        USER_HEADER.to_string(),
    );

    build_router(Arc::new(state), None).expect("build router")
}

async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    user: Option<&UserId>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(user) = user {
        builder = builder.header(USER_HEADER, user.as_str());
    }
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

async fn create_habit(app: &Router, user: &UserId, name: &str) -> String {
    let (status, body) = send(
        app,
        "POST",
        "/api/habits",
        Some(user),
        Some(json!({
            "name": name,
            "category": "Health",
            "icon": "run",
            "color": "#3b82f6"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    body["habit"]["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn health_check_reaches_database() {
    let app = test_app().await;

    let (status, body) = send(&app, "GET", "/healthz", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn requests_without_identity_are_unauthorized() {
    let app = test_app().await;

    let (status, body) = send(&app, "GET", "/api/habits", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["code"], 1001);
    assert_eq!(body["error"]["message"], "Missing x-user-id header");

    let request = Request::builder()
        .uri("/api/dashboard")
        .header(USER_HEADER, "alice")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn habit_crud_round() {
    let app = test_app().await;
    let user = UserId::new();

    let habit_id = create_habit(&app, &user, "Run").await;

    let (status, body) = send(&app, "GET", "/api/habits", Some(&user), None).await;
    assert_eq!(status, StatusCode::OK);
    let habits = body["habits"].as_array().unwrap();
    assert_eq!(habits.len(), 1);
    assert_eq!(habits[0]["name"], "Run");
    assert_eq!(habits[0]["mutedLight"], "#d7e6fd");
    assert_eq!(habits[0]["streak"]["currentStreak"], 0);

    let (status, body) = send(
        &app,
        "PATCH",
        &format!("/api/habits/{habit_id}"),
        Some(&user),
        Some(json!({ "name": "Run 5k", "description": "Before work" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["habit"]["name"], "Run 5k");
    assert_eq!(body["habit"]["description"], "Before work");

    let (status, body) = send(
        &app,
        "DELETE",
        &format!("/api/habits/{habit_id}"),
        Some(&user),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Habit deleted successfully");

    let (_, body) = send(&app, "GET", "/api/habits", Some(&user), None).await;
    assert!(body["habits"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn invalid_habit_payloads_are_bad_requests() {
    let app = test_app().await;
    let user = UserId::new();

    let (status, body) = send(
        &app,
        "POST",
        "/api/habits",
        Some(&user),
        Some(json!({ "name": "", "category": "Health", "icon": "run", "color": "#3b82f6" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], 6001);

    let (status, _) = send(
        &app,
        "POST",
        "/api/habits",
        Some(&user),
        Some(json!({ "name": "Run" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(&app, "DELETE", "/api/habits/42", Some(&user), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], 6002);
}

#[tokio::test]
async fn other_users_habits_are_not_found() {
    let app = test_app().await;
    let owner = UserId::new();
    let intruder = UserId::new();
    let habit_id = create_habit(&app, &owner, "Run").await;

    for (method, uri) in [
        ("GET", format!("/api/habits/{habit_id}/streak")),
        ("GET", format!("/api/habits/{habit_id}/grid")),
        ("POST", format!("/api/habits/{habit_id}/toggle")),
        ("DELETE", format!("/api/habits/{habit_id}")),
    ] {
        let (status, body) = send(&app, method, &uri, Some(&intruder), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{method} {uri}");
        assert_eq!(body["error"]["code"], 2001);
    }

    let (_, body) = send(&app, "GET", "/api/habits", Some(&intruder), None).await;
    assert!(body["habits"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn completions_and_streaks() {
    let app = test_app().await;
    let user = UserId::new();
    let habit_id = create_habit(&app, &user, "Read").await;

    for date in ["2025-04-08", "2025-04-09"] {
        let (status, body) = send(
            &app,
            "POST",
            "/api/habits/completion",
            Some(&user),
            Some(json!({ "habitId": habit_id, "date": date })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["completion"]["date"], date);
        assert_eq!(body["completion"]["completed"], true);
    }

    // Completed yesterday keeps the streak alive
    let (_, streak) = send(
        &app,
        "GET",
        &format!("/api/habits/{habit_id}/streak"),
        Some(&user),
        None,
    )
    .await;
    assert_eq!(streak["currentStreak"], 2);
    assert_eq!(streak["lastCompletedDate"], "2025-04-09");

    let (status, toggled) = send(
        &app,
        "POST",
        &format!("/api/habits/{habit_id}/toggle"),
        Some(&user),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(toggled["completed"], true);
    assert_eq!(toggled["date"], "2025-04-10");
    assert_eq!(toggled["streak"]["currentStreak"], 3);

    let completion_id = toggled["completion"]["id"].as_str().unwrap().to_string();
    let (status, body) = send(
        &app,
        "PATCH",
        &format!("/api/habits/completion/{completion_id}"),
        Some(&user),
        Some(json!({ "completed": false })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["completion"]["completed"], false);

    let (_, grid) = send(
        &app,
        "GET",
        &format!("/api/habits/{habit_id}/grid"),
        Some(&user),
        None,
    )
    .await;
    assert_eq!(grid["rows"], 6);
    assert_eq!(grid["cells"][0][0]["date"], "2025-04-08");
    assert_eq!(grid["cells"][2][0]["completed"], false);

    let (status, body) = send(
        &app,
        "DELETE",
        &format!("/api/habits/completion/{completion_id}"),
        Some(&user),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Habit completion deleted successfully");

    let (status, _) = send(
        &app,
        "DELETE",
        &format!("/api/habits/completion/{completion_id}"),
        Some(&user),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn sleep_entries_and_chart() {
    let app = test_app().await;
    let user = UserId::new();

    let (status, created) = send(
        &app,
        "POST",
        "/api/sleep",
        Some(&user),
        Some(json!({
            "startDate": "2025-04-09T22:00:00Z",
            "endDate": "2025-04-10T06:30:00Z"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["sleepEntry"]["hours"], 8.5);
    let entry_id = created["sleepEntry"]["id"].as_str().unwrap().to_string();

    let (status, body) = send(
        &app,
        "POST",
        "/api/sleep",
        Some(&user),
        Some(json!({
            "startDate": "2025-04-10T06:30:00Z",
            "endDate": "2025-04-10T06:30:00Z"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], 6001);

    let (status, list) = send(
        &app,
        "GET",
        "/api/sleep?startDate=2025-04-09&endDate=2025-04-09",
        Some(&user),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list["sleepEntries"].as_array().unwrap().len(), 1);
    assert_eq!(list["summary"]["quality"], "Great");

    let (status, chart) = send(
        &app,
        "GET",
        "/api/sleep/graph?from=2025-04-09&to=2025-04-11",
        Some(&user),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let days = chart["days"].as_array().unwrap();
    assert_eq!(days.len(), 3);
    assert_eq!(days[0]["intervals"], json!([{ "start": 22.0, "end": 24.0 }]));
    assert_eq!(days[0]["startTime"], "10:00 PM");
    assert_eq!(days[1]["intervals"], json!([{ "start": 0.0, "end": 6.5 }]));
    assert_eq!(days[1]["endTime"], "6:30 AM");
    assert_eq!(days[2]["hasData"], false);
    assert_eq!(chart["averageSleep"], 4.25);

    let (status, _) = send(
        &app,
        "DELETE",
        &format!("/api/sleep/{entry_id}"),
        Some(&UserId::new()),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(
        &app,
        "DELETE",
        &format!("/api/sleep/{entry_id}"),
        Some(&user),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Sleep entry deleted successfully");
}

#[tokio::test]
async fn sleep_in_last_second_of_day_stays_in_range() {
    let app = test_app().await;
    let user = UserId::new();

    let (status, _) = send(
        &app,
        "POST",
        "/api/sleep",
        Some(&user),
        Some(json!({
            "startDate": "2025-04-05T23:59:59.500Z",
            "endDate": "2025-04-06T06:00:00Z"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, list) = send(
        &app,
        "GET",
        "/api/sleep?startDate=2025-04-05&endDate=2025-04-05",
        Some(&user),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list["sleepEntries"].as_array().unwrap().len(), 1);

    let (status, chart) = send(
        &app,
        "GET",
        "/api/sleep/graph?from=2025-04-04&to=2025-04-05",
        Some(&user),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let days = chart["days"].as_array().unwrap();
    assert_eq!(days[0]["hasData"], false);
    assert!(days[0]["totalSleep"].as_f64().unwrap().is_sign_positive());
    assert_eq!(days[1]["hasData"], true);
}

#[tokio::test]
async fn sleep_chart_defaults_and_rejects_bad_dates() {
    let app = test_app().await;
    let user = UserId::new();

    let (status, chart) = send(&app, "GET", "/api/sleep/graph", Some(&user), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(chart["from"], "2025-03-01");
    assert_eq!(chart["to"], "2025-04-30");
    assert_eq!(chart["averageSleep"], 0.0);

    let (status, _) = send(
        &app,
        "GET",
        "/api/sleep/graph?from=April",
        Some(&user),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn dashboard_summarises_user_data() {
    let app = test_app().await;
    let user = UserId::new();
    let habit_id = create_habit(&app, &user, "Run").await;
    create_habit(&app, &user, "Read").await;

    send(
        &app,
        "POST",
        &format!("/api/habits/{habit_id}/toggle"),
        Some(&user),
        None,
    )
    .await;
    send(
        &app,
        "POST",
        "/api/sleep",
        Some(&user),
        Some(json!({
            "startDate": "2025-04-09T23:00:00Z",
            "endDate": "2025-04-10T05:30:00Z"
        })),
    )
    .await;

    let (status, dashboard) = send(&app, "GET", "/api/dashboard", Some(&user), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(dashboard["totalHabits"], 2);
    assert_eq!(dashboard["activeStreaks"], 1);
    assert_eq!(dashboard["completedToday"], 1);
    assert_eq!(dashboard["lastSleepHours"], 6.5);
    assert_eq!(dashboard["sleepQuality"], "Fair");
}

#[tokio::test]
async fn unknown_routes_return_json_not_found() {
    let app = test_app().await;

    let (status, body) = send(&app, "GET", "/api/nope", None, None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], 2004);
}

#[tokio::test]
async fn wrong_method_on_known_path_keeps_error_envelope() {
    let app = test_app().await;
    let user = UserId::new();

    let (status, body) = send(
        &app,
        "GET",
        "/api/habits/completion/streak",
        Some(&user),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], 2004);

    let (status, body) = send(&app, "DELETE", "/api/sleep/graph", Some(&user), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], 2004);
}
