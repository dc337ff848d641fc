use super::*;

#[tokio::test]
async fn test_complete_appends_user_turn_and_returns_transcript() {
    let mut server = mockito::Server::new_async().await;

    let body = serde_json::json!([
        {"role": "user", "content": "hi"},
        {"role": "assistant", "content": "hello"},
    ]);

    let handler = server
        .mock("POST", "/")
        .with_status(200)
        .match_body(mockito::Matcher::Json(serde_json::json!({
            "msgss": [{"role": "user", "content": "hi"}],
        })))
        .with_body(body.to_string())
        .create();

    let backend = Remote::default().with_endpoint(&server.url());

    let transcript = backend
        .complete(&[], "hi")
        .await
        .expect("failed to complete");

    assert_eq!(transcript.len(), 2);
    assert_eq!(transcript[0], TranscriptEntry::user("hi"));
    assert_eq!(transcript[1], TranscriptEntry::assistant("hello"));
    handler.assert();
}

#[tokio::test]
async fn test_complete_sends_prior_transcript() {
    let mut server = mockito::Server::new_async().await;

    let handler = server
        .mock("POST", "/")
        .with_status(200)
        .match_body(mockito::Matcher::Json(serde_json::json!({
            "msgss": [
                {"role": "user", "content": "hi"},
                {"role": "assistant", "content": "hello"},
                {"role": "user", "content": "and again"},
            ],
        })))
        .with_body("[]")
        .create();

    let backend = Remote::default().with_endpoint(&server.url());
    let prior = vec![
        TranscriptEntry::user("hi"),
        TranscriptEntry::assistant("hello"),
    ];

    backend
        .complete(&prior, "and again")
        .await
        .expect("failed to complete");
    handler.assert();
}

#[tokio::test]
async fn test_complete_non_2xx_is_a_network_error() {
    let mut server = mockito::Server::new_async().await;

    server.mock("POST", "/").with_status(503).create();

    let backend = Remote::default().with_endpoint(&server.url());

    let err = backend.complete(&[], "hi").await.unwrap_err();
    match err {
        CompletionError::Network { status, .. } => assert_eq!(status, 503),
        err => panic!("unexpected error: {:?}", err),
    }
}

#[tokio::test]
async fn test_complete_malformed_body_is_a_parse_error() {
    let mut server = mockito::Server::new_async().await;

    server
        .mock("POST", "/")
        .with_status(200)
        .with_body("definitely not json")
        .create();

    let backend = Remote::default().with_endpoint(&server.url());

    let err = backend.complete(&[], "hi").await.unwrap_err();
    assert!(matches!(err, CompletionError::Parse(_)));
}
