// Tests for the messaging client against a mock server.
use mockito::{Matcher, Server};
use pylon_client::{ClientError, DiscordClient};
use pylon_core::discord::format_messages;
use serde_json::json;

const WEBHOOK_PATH: &str = "/api/webhooks/123/secret";

const MESSAGES_NEWEST_FIRST: &str = r#"[
    {"id":"3","content":"sounds good","timestamp":"2026-02-18T10:02:00.000000+00:00",
     "author":{"username":"bob","global_name":"Bob"},
     "referenced_message":{"content":"deploy at noon?","author":{"username":"alice","global_name":null}}},
    {"id":"2","content":"","timestamp":"2026-02-18T10:01:00.000000+00:00",
     "author":{"username":"carol","global_name":""}},
    {"id":"1","content":"hello","timestamp":"2026-02-18T10:00:00.000000+00:00",
     "author":{"username":"alice","global_name":null}}
]"#;

fn webhook_client(server: &Server) -> DiscordClient {
    DiscordClient::new("", format!("{}{}", server.url(), WEBHOOK_PATH)).unwrap()
}

fn bot_client(server: &Server) -> DiscordClient {
    DiscordClient::new("bot-token", "")
        .unwrap()
        .with_api_base(server.url())
}

#[tokio::test]
async fn test_send_message_no_content() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", WEBHOOK_PATH)
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({"content": "hello world"})))
        .with_status(204)
        .create_async()
        .await;

    webhook_client(&server)
        .send_message("hello world")
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_send_message_ok() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", WEBHOOK_PATH)
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    webhook_client(&server).send_message("hi").await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_send_message_other_success_status_is_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", WEBHOOK_PATH)
        .with_status(201)
        .with_body("created")
        .create_async()
        .await;

    let err = webhook_client(&server).send_message("hi").await.unwrap_err();
    assert_eq!(err.status(), Some(201));
}

#[tokio::test]
async fn test_send_message_server_error_keeps_raw_body() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", WEBHOOK_PATH)
        .with_status(500)
        .with_body(r#"{"message":"internal"}"#)
        .create_async()
        .await;

    let err = webhook_client(&server).send_message("hi").await.unwrap_err();
    assert_eq!(
        err.to_string(),
        r#"api error: 500 {"message":"internal"}"#
    );
}

#[tokio::test]
async fn test_send_message_without_webhook_sends_nothing() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let client = DiscordClient::new("bot-token", "").unwrap();
    let err = client.send_message("hi").await.unwrap_err();

    assert!(err.is_config());
    assert!(err.to_string().starts_with("webhook URL not configured"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_read_messages_oldest_first() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/channels/42/messages")
        .match_query(Matcher::UrlEncoded("limit".into(), "5".into()))
        .match_header("authorization", "Bot bot-token")
        .with_status(200)
        .with_body(MESSAGES_NEWEST_FIRST)
        .create_async()
        .await;

    let messages = bot_client(&server).read_messages("42", 5).await.unwrap();

    let ids: Vec<&str> = messages.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3"]);
    assert_eq!(
        format_messages(&messages),
        "[2026-02-18T10:00:00] alice: hello\n\
         [2026-02-18T10:01:00] carol: (no text)\n\
         [2026-02-18T10:02:00] Bob (reply to alice: \"deploy at noon?\"): sounds good\n"
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn test_read_messages_out_of_range_limit_uses_default() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/channels/42/messages")
        .match_query(Matcher::UrlEncoded("limit".into(), "20".into()))
        .with_status(200)
        .with_body("[]")
        .expect(2)
        .create_async()
        .await;

    let client = bot_client(&server);
    assert!(client.read_messages("42", 0).await.unwrap().is_empty());
    assert!(client.read_messages("42", 101).await.unwrap().is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_read_messages_max_limit() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/channels/42/messages")
        .match_query(Matcher::UrlEncoded("limit".into(), "100".into()))
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    bot_client(&server).read_messages("42", 100).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_read_messages_without_token_sends_nothing() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let client = DiscordClient::new("", "").unwrap().with_api_base(server.url());
    let err = client.read_messages("42", 5).await.unwrap_err();

    assert!(err.is_config());
    assert!(err.to_string().starts_with("bot token not configured"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_read_messages_without_channel_sends_nothing() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let err = bot_client(&server).read_messages("", 5).await.unwrap_err();

    assert!(err.is_config());
    assert!(err.to_string().starts_with("channel ID not configured"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_read_messages_forbidden() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/channels/42/messages")
        .match_query(Matcher::Any)
        .with_status(403)
        .with_body(r#"{"message": "Missing Access", "code": 50001}"#)
        .create_async()
        .await;

    let err = bot_client(&server).read_messages("42", 5).await.unwrap_err();
    match err {
        ClientError::Api { status, message } => {
            assert_eq!(status, 403);
            assert_eq!(message, r#"{"message": "Missing Access", "code": 50001}"#);
        }
        other => panic!("expected api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_list_channels_keeps_text_channels() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/guilds/7/channels")
        .match_header("authorization", "Bot bot-token")
        .with_status(200)
        .with_body(
            r#"[
                {"id":"1","name":"general","type":0,"position":0},
                {"id":"2","name":"Voice","type":2,"position":1},
                {"id":"3","name":"dev","type":0,"position":2}
            ]"#,
        )
        .create_async()
        .await;

    let channels = bot_client(&server).list_channels("7").await.unwrap();

    let names: Vec<&str> = channels.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["general", "dev"]);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_null_list_bodies_are_empty() {
    let mut server = Server::new_async().await;
    let _messages = server
        .mock("GET", "/channels/42/messages")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("null")
        .create_async()
        .await;
    let _channels = server
        .mock("GET", "/guilds/7/channels")
        .with_status(200)
        .with_body("null")
        .create_async()
        .await;

    let client = bot_client(&server);
    assert!(client.read_messages("42", 5).await.unwrap().is_empty());
    assert!(client.list_channels("7").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_list_channels_without_guild_sends_nothing() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let err = bot_client(&server).list_channels("").await.unwrap_err();

    assert!(err.is_config());
    assert!(err.to_string().starts_with("guild ID not configured"));
    mock.assert_async().await;
}
