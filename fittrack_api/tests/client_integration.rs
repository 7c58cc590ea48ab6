use std::time::Duration;

use fittrack_api::types::{Exercise, Method, TrainingSheet};
use fittrack_api::{CancelToken, Client, Error, RequestOptions};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[tokio::test]
async fn get_exercises_success() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("exercises.json");

    Mock::given(method("GET"))
        .and(path("/api/db/exercises"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let exercises: Vec<Exercise> = client.get("db/exercises").await.unwrap();

    assert_eq!(exercises.len(), 2);
    assert_eq!(exercises[0].name, "Supino reto");
    assert_eq!(
        exercises[0].video_url.as_deref(),
        Some("https://videos.example.com/supino.mp4")
    );
    assert!(exercises[1].video_url.is_none());
}

#[tokio::test]
async fn enveloped_payload_is_unwrapped() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("methods_enveloped.json");

    Mock::given(method("GET"))
        .and(path("/api/db/methods"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let methods: Vec<Method> = client.get("/api/db/methods").await.unwrap();

    assert_eq!(methods.len(), 3);
    assert_eq!(methods[0].name, "Drop-set");
}

#[tokio::test]
async fn bare_endpoint_is_prefixed_with_api_root() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("sheets.json");

    Mock::given(method("GET"))
        .and(path("/api/training-sheets"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let sheets: Vec<TrainingSheet> = client.get("training-sheets").await.unwrap();

    assert_eq!(sheets.len(), 3);
    assert_eq!(sheets[0].public_name.as_deref(), Some("Treino A"));
    assert!(sheets[1].public_name.is_none());
}

#[tokio::test]
async fn error_status_uses_body_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/db/exercises"))
        .respond_with(ResponseTemplate::new(400).set_body_string(r#"{"message": "bad"}"#))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let result = client.get::<Vec<Exercise>>("db/exercises").await;

    match result {
        Err(Error::HttpStatus { status, message }) => {
            assert_eq!(status, 400);
            assert_eq!(message, "bad");
        }
        other => panic!("expected HttpStatus error, got {:?}", other.map(|_| ())),
    }
}

#[tokio::test]
async fn error_status_falls_back_to_status_text() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/db/exercises"))
        .respond_with(ResponseTemplate::new(500).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let result = client.get::<Vec<Exercise>>("db/exercises").await;

    match result {
        Err(Error::HttpStatus { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "API error: Internal Server Error");
        }
        other => panic!("expected HttpStatus error, got {:?}", other.map(|_| ())),
    }
}

#[tokio::test]
async fn malformed_json_is_a_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/db/exercises"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not valid json}"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let result = client.get::<Vec<Exercise>>("db/exercises").await;
    assert!(matches!(result, Err(Error::Decode(_))));
}

#[tokio::test]
async fn post_sends_json_body() {
    let mock_server = MockServer::start().await;
    let payload = json!({"name": "Remada curvada", "description": "Barra, pegada pronada"});

    Mock::given(method("POST"))
        .and(path("/api/db/exercises"))
        .and(body_json(&payload))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"success": true, "data": {"id": 3, "name": "Remada curvada", "description": "Barra, pegada pronada"}}"#,
        ))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let created: Exercise = client.post("db/exercises", payload).await.unwrap();
    assert_eq!(created.id, 3);
}

#[tokio::test]
async fn cancelled_request_fails_with_cancelled() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/db/exercises"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("[]")
                .set_delay(Duration::from_secs(10)),
        )
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let token = CancelToken::new();

    let trigger = token.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        trigger.cancel();
    });

    let result = client
        .call::<Vec<Exercise>>(
            "db/exercises",
            RequestOptions::default().with_cancel(token),
        )
        .await;

    assert!(matches!(result, Err(Error::Cancelled)));
    // The in-flight counter must be released on cancellation too.
    assert_eq!(client.loading().in_flight(), 0);
}

#[tokio::test]
async fn loading_counter_tracks_in_flight_requests() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/db/exercises"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("[]")
                .set_delay(Duration::from_millis(300)),
        )
        .mount(&mock_server)
        .await;

    let client = std::sync::Arc::new(Client::with_base_url(&mock_server.uri()));
    let tracker = client.loading().clone();

    let in_flight = {
        let client = std::sync::Arc::clone(&client);
        tokio::spawn(async move { client.get::<Vec<Exercise>>("db/exercises").await })
    };

    tokio::time::sleep(Duration::from_millis(100)).await;
    assert!(tracker.is_loading());
    assert_eq!(tracker.in_flight(), 1);

    in_flight.await.unwrap().unwrap();
    assert!(!tracker.is_loading());
}

#[tokio::test]
async fn skip_loading_leaves_counter_untouched() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/db/exercises"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("[]")
                .set_delay(Duration::from_millis(300)),
        )
        .mount(&mock_server)
        .await;

    let client = std::sync::Arc::new(Client::with_base_url(&mock_server.uri()));
    let tracker = client.loading().clone();

    let in_flight = {
        let client = std::sync::Arc::clone(&client);
        tokio::spawn(async move {
            client
                .call::<Vec<Exercise>>("db/exercises", RequestOptions::default().skip_loading())
                .await
        })
    };

    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(tracker.in_flight(), 0);

    in_flight.await.unwrap().unwrap();
}

#[tokio::test]
async fn get_many_fans_out_in_parallel() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/db/exercises"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&load_fixture("exercises.json")))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/db/archived-exercises"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let lists: Vec<Vec<Exercise>> = client
        .get_many(&["db/exercises", "db/archived-exercises"])
        .await
        .unwrap();

    assert_eq!(lists.len(), 2);
    assert_eq!(lists[0].len(), 2);
    assert!(lists[1].is_empty());
}

#[tokio::test]
async fn get_or_none_swallows_failures() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/db/exercises"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let result: Option<Vec<Exercise>> = client.get_or_none("db/exercises").await;
    assert!(result.is_none());
}
