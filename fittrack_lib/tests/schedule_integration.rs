use fittrack_lib::schedule::{self, ScheduleDraft};
use fittrack_lib::session::{self, Gate};
use fittrack_lib::types::ScheduleDay;
use fittrack_lib::{ApiSessionStore, Client, FitTrackError};
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn save_schedule_posts_the_validated_draft() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/training-sheets"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"[{"id": 100, "name": "Hipertrofia A", "publicName": "Treino A"}]"#,
        ))
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/training-schedules"))
        .and(body_partial_json(json!({
            "name": "Semana base",
            "weekDays": [{"day": 1, "trainingSheetId": 100}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{
                "success": true,
                "data": {
                    "id": 7,
                    "name": "Semana base",
                    "description": "",
                    "weekDays": [{"day": 1, "trainingSheetId": 100}],
                    "createdAt": "2024-06-01T10:00:00Z",
                    "updatedAt": "2024-06-01T10:00:00Z"
                }
            }"#,
        ))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let sheets = schedule::available_sheets(&client).await.unwrap();
    assert_eq!(sheets.len(), 1);

    let draft = ScheduleDraft {
        name: "Semana base".to_string(),
        description: String::new(),
        week_days: vec![ScheduleDay {
            day: 1,
            training_sheet_id: Some(100),
            custom_name: None,
        }],
    };

    let saved = schedule::save_schedule(&client, &draft, &sheets).await.unwrap();
    assert_eq!(saved.id, 7);
    assert_eq!(saved.week_days.len(), 1);
}

#[tokio::test]
async fn invalid_draft_never_reaches_the_api() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/training-schedules"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let draft = ScheduleDraft {
        name: "Semana base".to_string(),
        description: String::new(),
        week_days: vec![ScheduleDay {
            day: 9,
            training_sheet_id: None,
            custom_name: None,
        }],
    };

    let result = schedule::save_schedule(&client, &draft, &[]).await;
    assert!(matches!(result, Err(FitTrackError::InvalidInput(_))));
}

#[tokio::test]
async fn session_gate_allows_an_authenticated_user() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/session"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"user": {"id": "u1", "email": "ana@example.com", "name": "Ana", "image": null}}"#,
        ))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let store = ApiSessionStore::new(&client);

    match session::require_session(&store).await {
        Gate::Allow(Some(s)) => assert_eq!(s.user.name, "Ana"),
        other => panic!("expected allow, got {:?}", other),
    }
}

#[tokio::test]
async fn session_gate_redirects_when_the_endpoint_returns_null() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/session"))
        .respond_with(ResponseTemplate::new(200).set_body_string("null"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let store = ApiSessionStore::new(&client);

    assert_eq!(
        session::require_session(&store).await,
        Gate::Redirect(session::LOGIN_PATH.to_string())
    );
}

#[tokio::test]
async fn session_gate_redirects_when_the_lookup_fails() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/session"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let store = ApiSessionStore::new(&client);

    assert_eq!(
        session::require_session(&store).await,
        Gate::Redirect(session::LOGIN_PATH.to_string())
    );
}
