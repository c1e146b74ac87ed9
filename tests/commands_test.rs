//! Integration tests for command dispatch and the name-prompt interactions

use std::time::{Duration, Instant};

use nba_basketbot::{
    bot::{ConversationState, Dispatcher, InteractionKind},
    commands::{common::ReplySink, replies},
    nba::http::BallDontLie,
    ChatId, RecentGamesWindow, Result,
};
use serde_json::json;
use wiremock::{
    matchers::{any, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

const TIMEOUT: Duration = Duration::from_secs(60);

/// Collects outbound messages instead of sending them.
#[derive(Default)]
struct RecordingSink {
    sent: Vec<(ChatId, String)>,
}

impl RecordingSink {
    fn texts(&self) -> Vec<&str> {
        self.sent.iter().map(|(_, text)| text.as_str()).collect()
    }
}

impl ReplySink for RecordingSink {
    async fn send(&mut self, chat: ChatId, text: &str) -> Result<()> {
        self.sent.push((chat, text.to_string()));
        Ok(())
    }
}

fn chat() -> ChatId {
    ChatId::new(1001)
}

fn dispatcher_for(server: &MockServer) -> Dispatcher {
    let client = BallDontLie::with_base_url(&server.uri(), RecentGamesWindow::default()).unwrap();
    Dispatcher::new(client, TIMEOUT)
}

/// Fails the test on drop if any request reaches the API.
async fn forbid_api_calls(server: &MockServer) {
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(server)
        .await;
}

fn lebron_json() -> serde_json::Value {
    json!({
        "id": 237,
        "first_name": "LeBron",
        "last_name": "James",
        "position": "F",
        "height_feet": 6,
        "height_inches": 8,
        "weight_pounds": 250,
        "team": {
            "id": 14,
            "abbreviation": "LAL",
            "city": "Los Angeles",
            "conference": "West",
            "division": "Pacific",
            "full_name": "Los Angeles Lakers",
            "name": "Lakers"
        }
    })
}

#[tokio::test]
async fn test_start_and_info() {
    let mock_server = MockServer::start().await;
    forbid_api_calls(&mock_server).await;
    let mut dispatcher = dispatcher_for(&mock_server);
    let mut sink = RecordingSink::default();
    let now = Instant::now();

    dispatcher.handle_text(&mut sink, chat(), "/start", now).await.unwrap();
    dispatcher.handle_text(&mut sink, chat(), "/info", now).await.unwrap();

    assert_eq!(sink.texts(), vec![replies::GREETING, replies::COMMAND_INFO]);
    assert!(sink.sent.iter().all(|(c, _)| *c == chat()));
}

#[tokio::test]
async fn test_unknown_command_and_stray_text_refer_to_info() {
    let mock_server = MockServer::start().await;
    forbid_api_calls(&mock_server).await;
    let mut dispatcher = dispatcher_for(&mock_server);
    let mut sink = RecordingSink::default();
    let now = Instant::now();

    dispatcher.handle_text(&mut sink, chat(), "/help", now).await.unwrap();
    dispatcher.handle_text(&mut sink, chat(), "LeBron James", now).await.unwrap();

    assert_eq!(sink.texts(), vec![replies::REFER_TO_INFO, replies::REFER_TO_INFO]);
}

#[tokio::test]
async fn test_player_easter_egg_makes_no_api_call() {
    let mock_server = MockServer::start().await;
    forbid_api_calls(&mock_server).await;
    let mut dispatcher = dispatcher_for(&mock_server);
    let mut sink = RecordingSink::default();
    let now = Instant::now();

    dispatcher.handle_text(&mut sink, chat(), "/player", now).await.unwrap();
    dispatcher.handle_text(&mut sink, chat(), "Beka", now).await.unwrap();

    assert_eq!(
        sink.texts(),
        vec![
            replies::ASK_PLAYER_NAME,
            replies::PLEASE_WAIT,
            replies::EASTER_EGG_REPLY
        ]
    );
    assert_eq!(
        dispatcher
            .conversations()
            .state(chat(), InteractionKind::PlayerInfo),
        ConversationState::Idle
    );
}

#[tokio::test]
async fn test_player_info_flow() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/players"))
        .and(query_param("search", "LeBron James"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": [lebron_json()]})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut dispatcher = dispatcher_for(&mock_server);
    let mut sink = RecordingSink::default();
    let now = Instant::now();

    dispatcher.handle_text(&mut sink, chat(), "/player", now).await.unwrap();
    assert!(dispatcher
        .conversations()
        .state(chat(), InteractionKind::PlayerInfo)
        .is_awaiting());

    dispatcher
        .handle_text(&mut sink, chat(), " LeBron James ", now + Duration::from_secs(3))
        .await
        .unwrap();

    assert_eq!(
        sink.texts(),
        vec![
            replies::ASK_PLAYER_NAME,
            replies::PLEASE_WAIT,
            "LeBron James, position: F\n\
             Team: Los Angeles Lakers, conference: West\n\
             Height: 6'8, weight: 250 pounds"
        ]
    );

    // Interaction finished: the next text is not a name any more
    dispatcher
        .handle_text(&mut sink, chat(), "LeBron James", now + Duration::from_secs(4))
        .await
        .unwrap();
    assert_eq!(sink.texts().last(), Some(&replies::REFER_TO_INFO));
}

#[tokio::test]
async fn test_player_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/players"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .mount(&mock_server)
        .await;

    let mut dispatcher = dispatcher_for(&mock_server);
    let mut sink = RecordingSink::default();
    let now = Instant::now();

    dispatcher.handle_text(&mut sink, chat(), "/player", now).await.unwrap();
    dispatcher.handle_text(&mut sink, chat(), "Nobody", now).await.unwrap();

    assert_eq!(sink.texts().last(), Some(&replies::NO_PLAYER_FOUND));
}

#[tokio::test]
async fn test_season_average_flow() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/players"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": [lebron_json()]})))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/season_averages"))
        .and(query_param("player_ids[]", "237"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut dispatcher = dispatcher_for(&mock_server);
    let mut sink = RecordingSink::default();
    let now = Instant::now();

    dispatcher.handle_text(&mut sink, chat(), "/average", now).await.unwrap();
    dispatcher.handle_text(&mut sink, chat(), "LeBron James", now).await.unwrap();

    assert_eq!(
        sink.texts(),
        vec![
            replies::ASK_PLAYER_NAME,
            replies::PLEASE_WAIT,
            "No info on LeBron James"
        ]
    );
}

#[tokio::test]
async fn test_recent_games_http_failure_is_generic_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/games"))
        .respond_with(ResponseTemplate::new(502))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut dispatcher = dispatcher_for(&mock_server);
    let mut sink = RecordingSink::default();

    dispatcher
        .handle_text(&mut sink, chat(), "/recent", Instant::now())
        .await
        .unwrap();

    assert_eq!(sink.texts(), vec![replies::PLEASE_WAIT, replies::LOOKUP_FAILED]);
}

#[tokio::test]
async fn test_recent_games_one_message_per_game() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/games"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                {
                    "id": 1, "period": 0, "status": "7:30 pm ET",
                    "home_team": {"id": 2, "abbreviation": "BOS"},
                    "visitor_team": {"id": 16, "abbreviation": "MIA"},
                    "home_team_score": 0, "visitor_team_score": 0
                },
                {
                    "id": 2, "period": 4, "status": "Final",
                    "home_team": {"id": 14, "abbreviation": "LAL"},
                    "visitor_team": {"id": 10, "abbreviation": "GSW"},
                    "home_team_score": 112, "visitor_team_score": 105
                },
                {
                    "id": 3, "period": 2, "status": "2nd Qtr",
                    "home_team": {"id": 5, "abbreviation": "CHI"},
                    "visitor_team": {"id": 20, "abbreviation": "NYK"},
                    "home_team_score": 48, "visitor_team_score": 51
                }
            ]
        })))
        .mount(&mock_server)
        .await;

    let mut dispatcher = dispatcher_for(&mock_server);
    let mut sink = RecordingSink::default();

    dispatcher
        .handle_text(&mut sink, chat(), "/recent", Instant::now())
        .await
        .unwrap();

    assert_eq!(
        sink.texts(),
        vec![
            replies::PLEASE_WAIT,
            "LAL vs GSW\n112-105\nStatus: Final",
            "CHI vs NYK\n48-51\nStatus: 2nd Qtr"
        ]
    );
}

#[tokio::test]
async fn test_recent_games_none() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/games"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .mount(&mock_server)
        .await;

    let mut dispatcher = dispatcher_for(&mock_server);
    let mut sink = RecordingSink::default();

    dispatcher
        .handle_text(&mut sink, chat(), "/recent", Instant::now())
        .await
        .unwrap();

    assert_eq!(sink.texts(), vec![replies::PLEASE_WAIT, replies::NO_RECENT_GAMES]);
}

#[tokio::test]
async fn test_stat_with_unknown_player() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/players"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/games"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut dispatcher = dispatcher_for(&mock_server);
    let mut sink = RecordingSink::default();
    let now = Instant::now();

    dispatcher.handle_text(&mut sink, chat(), "/stat", now).await.unwrap();
    dispatcher.handle_text(&mut sink, chat(), "Nobody", now).await.unwrap();

    assert_eq!(
        sink.texts(),
        vec![
            replies::ASK_PLAYER_NAME,
            replies::PLEASE_WAIT_LONGER,
            replies::NO_PLAYER_GAME_FOUND
        ]
    );
}

#[tokio::test]
async fn test_stat_games_failure_is_generic_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/players"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/games"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let mut dispatcher = dispatcher_for(&mock_server);
    let mut sink = RecordingSink::default();
    let now = Instant::now();

    dispatcher.handle_text(&mut sink, chat(), "/stat", now).await.unwrap();
    dispatcher.handle_text(&mut sink, chat(), "Nobody", now).await.unwrap();

    assert_eq!(
        sink.texts(),
        vec![
            replies::ASK_PLAYER_NAME,
            replies::PLEASE_WAIT_LONGER,
            replies::LOOKUP_FAILED
        ]
    );
}

#[tokio::test]
async fn test_timeout_sends_notice_and_returns_to_idle() {
    let mock_server = MockServer::start().await;
    forbid_api_calls(&mock_server).await;
    let mut dispatcher = dispatcher_for(&mock_server);
    let mut sink = RecordingSink::default();
    let t0 = Instant::now();

    dispatcher.handle_text(&mut sink, chat(), "/player", t0).await.unwrap();

    // Not yet expired
    dispatcher
        .expire(&mut sink, t0 + TIMEOUT - Duration::from_secs(1))
        .await
        .unwrap();
    assert_eq!(sink.texts(), vec![replies::ASK_PLAYER_NAME]);

    dispatcher.expire(&mut sink, t0 + TIMEOUT).await.unwrap();
    assert_eq!(
        sink.texts(),
        vec![replies::ASK_PLAYER_NAME, replies::TIMEOUT_NOTICE]
    );
    assert_eq!(
        dispatcher
            .conversations()
            .state(chat(), InteractionKind::PlayerInfo),
        ConversationState::Idle
    );

    // A late name is just stray text now
    dispatcher
        .handle_text(&mut sink, chat(), "LeBron James", t0 + TIMEOUT * 2)
        .await
        .unwrap();
    assert_eq!(sink.texts().last(), Some(&replies::REFER_TO_INFO));
}

#[tokio::test]
async fn test_late_reply_before_sweep_times_out_first() {
    let mock_server = MockServer::start().await;
    forbid_api_calls(&mock_server).await;
    let mut dispatcher = dispatcher_for(&mock_server);
    let mut sink = RecordingSink::default();
    let t0 = Instant::now();

    dispatcher.handle_text(&mut sink, chat(), "/average", t0).await.unwrap();
    dispatcher
        .handle_text(&mut sink, chat(), "LeBron James", t0 + TIMEOUT + Duration::from_secs(1))
        .await
        .unwrap();

    assert_eq!(
        sink.texts(),
        vec![
            replies::ASK_PLAYER_NAME,
            replies::TIMEOUT_NOTICE,
            replies::REFER_TO_INFO
        ]
    );
}

#[tokio::test]
async fn test_independent_interactions_take_names_in_order() {
    let mock_server = MockServer::start().await;
    forbid_api_calls(&mock_server).await;
    let mut dispatcher = dispatcher_for(&mock_server);
    let mut sink = RecordingSink::default();
    let now = Instant::now();

    dispatcher.handle_text(&mut sink, chat(), "/average", now).await.unwrap();
    dispatcher.handle_text(&mut sink, chat(), "/player", now).await.unwrap();

    // /player takes precedence, /average keeps waiting
    dispatcher.handle_text(&mut sink, chat(), "Beka", now).await.unwrap();
    assert_eq!(sink.texts().last(), Some(&replies::EASTER_EGG_REPLY));
    assert!(dispatcher
        .conversations()
        .state(chat(), InteractionKind::SeasonAverage)
        .is_awaiting());

    // The other chat is unaffected
    let other = ChatId::new(2002);
    dispatcher.handle_text(&mut sink, other, "Beka", now).await.unwrap();
    assert_eq!(
        sink.sent.last(),
        Some(&(other, replies::REFER_TO_INFO.to_string()))
    );
}
