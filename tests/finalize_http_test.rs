use httpmock::prelude::*;
use vendorverse::{BackendSettings, FinalizeSink, HttpFinalizeClient, MatchError};

fn settings_for(server: &MockServer) -> BackendSettings {
    BackendSettings {
        base_url: server.url(""),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_posts_selected_titles_and_parses_the_outcome() {
    let server = MockServer::start();

    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/finalize").json_body(serde_json::json!({
            "services": ["Custom Website Development", "SEO & Digital Marketing"]
        }));
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "success": true,
                "message": "Successfully finalized 2 services."
            }));
    });

    let client = HttpFinalizeClient::new(reqwest::Client::new(), &settings_for(&server));
    let outcome = client
        .finalize(&[
            "Custom Website Development".to_string(),
            "SEO & Digital Marketing".to_string(),
        ])
        .await
        .unwrap();

    api_mock.assert();
    assert!(outcome.success);
    assert_eq!(outcome.message, "Successfully finalized 2 services.");
}

#[tokio::test]
async fn test_rejection_becomes_a_failed_outcome() {
    let server = MockServer::start();

    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/finalize");
        then.status(400)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"message": "No services provided."}));
    });

    let client = HttpFinalizeClient::new(reqwest::Client::new(), &settings_for(&server));
    let outcome = client.finalize(&["A".to_string()]).await.unwrap();

    api_mock.assert();
    assert!(!outcome.success);
    assert_eq!(outcome.message, "No services provided.");
}

#[tokio::test]
async fn test_rejection_with_an_error_field_is_surfaced() {
    let server = MockServer::start();

    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/finalize");
        then.status(500)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"error": "An unexpected error occurred."}));
    });

    let client = HttpFinalizeClient::new(reqwest::Client::new(), &settings_for(&server));
    let outcome = client.finalize(&["A".to_string()]).await.unwrap();

    api_mock.assert();
    assert!(!outcome.success);
    assert_eq!(outcome.message, "An unexpected error occurred.");
}

#[tokio::test]
async fn test_unrecognized_success_body_is_a_failed_outcome() {
    let server = MockServer::start();

    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/finalize");
        then.status(200)
            .header("Content-Type", "application/json")
            .body("ok");
    });

    let client = HttpFinalizeClient::new(reqwest::Client::new(), &settings_for(&server));
    let outcome = client.finalize(&["A".to_string()]).await.unwrap();

    api_mock.assert();
    assert!(!outcome.success);
    assert!(outcome.message.contains("unrecognized finalize response"));
}

#[tokio::test]
async fn test_empty_selection_never_issues_a_request() {
    let server = MockServer::start();

    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/finalize");
        then.status(200);
    });

    let client = HttpFinalizeClient::new(reqwest::Client::new(), &settings_for(&server));
    let err = client.finalize(&[]).await.unwrap_err();

    assert!(matches!(err, MatchError::EmptyFinalizeError));
    api_mock.assert_hits(0);
}

#[tokio::test]
async fn test_connection_failure_is_a_transport_error() {
    let settings = BackendSettings {
        base_url: "http://127.0.0.1:9".to_string(),
        ..Default::default()
    };

    let client = HttpFinalizeClient::new(reqwest::Client::new(), &settings);
    let err = client.finalize(&["A".to_string()]).await.unwrap_err();

    assert!(matches!(err, MatchError::FinalizeTransportError { .. }));
}
