use parley::api::{
    ApiError, ChatBackend, FALLBACK_REPLY, GameAction, HttpBackend, send_chat,
};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Chat Endpoint Tests
// ============================================================================

#[tokio::test]
async fn test_chat_successful_round_trip() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat"))
        .and(body_json(serde_json::json!({
            "message": "hello",
            "thread_id": "player1"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message": "hi",
            "actions": []
        })))
        .mount(&mock_server)
        .await;

    let backend = HttpBackend::new(mock_server.uri());
    let response = backend.send("hello", "player1").await.unwrap();

    assert_eq!(response.message, "hi");
    assert!(response.actions.is_empty());
}

#[tokio::test]
async fn test_chat_decodes_game_actions() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message": "here you go",
            "actions": [
                {"type": "add_item", "item": {"id": 1001, "name": "Friendship Card", "icon": "card.jpg"}, "slot": 0},
                {"type": "remove_item", "slot": 3}
            ]
        })))
        .mount(&mock_server)
        .await;

    let backend = HttpBackend::new(mock_server.uri());
    let response = backend.send("gift please", "player1").await.unwrap();

    assert_eq!(response.actions.len(), 2);
    match &response.actions[0] {
        GameAction::AddItem { item, slot } => {
            assert_eq!(*slot, 0);
            assert_eq!(item.label(), "Friendship Card");
            assert_eq!(item.icon_key(), "card.jpg");
        }
        other => panic!("expected AddItem, got {:?}", other),
    }
    assert_eq!(response.actions[1], GameAction::RemoveItem { slot: 3 });
}

#[tokio::test]
async fn test_chat_tolerates_unknown_action_tags() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message": "ta-da",
            "actions": [
                {"type": "play_sound", "sound": "fanfare.ogg"},
                {"type": "add_item", "item": {"name": "Card"}, "slot": 1}
            ]
        })))
        .mount(&mock_server)
        .await;

    let backend = HttpBackend::new(mock_server.uri());
    let response = backend.send("hello", "player1").await.unwrap();

    assert_eq!(response.actions[0], GameAction::Unknown);
    assert!(matches!(response.actions[1], GameAction::AddItem { slot: 1, .. }));
}

#[tokio::test]
async fn test_chat_api_error_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;

    let backend = HttpBackend::new(mock_server.uri());
    let result = backend.send("hello", "player1").await;

    assert!(matches!(result, Err(ApiError::Api { status: 500, .. })));
}

#[tokio::test]
async fn test_chat_network_error() {
    // Nothing listens here; the connection is refused
    let backend = HttpBackend::new("http://127.0.0.1:9".to_string());
    let result = backend.send("hello", "player1").await;

    assert!(matches!(result, Err(ApiError::Network(_))));
}

#[tokio::test]
async fn test_chat_malformed_body_is_a_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let backend = HttpBackend::new(mock_server.uri());
    let result = backend.send("hello", "player1").await;

    assert!(matches!(result, Err(ApiError::Parse(_))));
}

// ============================================================================
// Fallback Contract Tests
// ============================================================================

#[tokio::test]
async fn test_send_chat_passes_through_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message": "hi",
            "actions": []
        })))
        .mount(&mock_server)
        .await;

    let backend = HttpBackend::new(mock_server.uri());
    let outcome = send_chat(&backend, "hello", "player1").await;

    assert_eq!(outcome.reply, "hi");
    assert!(outcome.actions.is_empty());
}

#[tokio::test]
async fn test_send_chat_folds_failure_into_fallback_reply() {
    let backend = HttpBackend::new("http://127.0.0.1:9".to_string());
    let outcome = send_chat(&backend, "hello", "player1").await;

    assert_eq!(outcome.reply, FALLBACK_REPLY);
    assert!(outcome.actions.is_empty());
}

#[tokio::test]
async fn test_send_chat_folds_server_error_into_fallback_reply() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&mock_server)
        .await;

    let backend = HttpBackend::new(mock_server.uri());
    let outcome = send_chat(&backend, "hello", "player1").await;

    assert_eq!(outcome.reply, FALLBACK_REPLY);
    assert!(outcome.actions.is_empty());
}

// ============================================================================
// Reset Endpoint Tests
// ============================================================================

#[tokio::test]
async fn test_reset_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/reset"))
        .and(body_json(serde_json::json!({"thread_id": "player1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "reset"
        })))
        .mount(&mock_server)
        .await;

    let backend = HttpBackend::new(mock_server.uri());
    assert!(backend.reset("player1").await.is_ok());
}

#[tokio::test]
async fn test_reset_ignores_response_body() {
    let mock_server = MockServer::start().await;

    // Success is the 2xx status alone; the body can be anything
    Mock::given(method("POST"))
        .and(path("/reset"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let backend = HttpBackend::new(mock_server.uri());
    assert!(backend.reset("player1").await.is_ok());
}

#[tokio::test]
async fn test_reset_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/reset"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;

    let backend = HttpBackend::new(mock_server.uri());
    let result = backend.reset("player1").await;

    assert!(matches!(result, Err(ApiError::Api { status: 500, .. })));
}

#[tokio::test]
async fn test_reset_network_error() {
    let backend = HttpBackend::new("http://127.0.0.1:9".to_string());
    let result = backend.reset("player1").await;

    assert!(matches!(result, Err(ApiError::Network(_))));
}
