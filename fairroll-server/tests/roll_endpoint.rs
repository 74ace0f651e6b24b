use fairroll_core::{verify, verify_roll, ErrorBody, RollResponse};
use fairroll_server::ServerConfig;
use reqwest::StatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;

async fn spawn_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let config = ServerConfig {
        bind_addr: addr,
        ..Default::default()
    };

    tokio::spawn(async move {
        fairroll_server::serve_on(listener, config).await.unwrap();
    });

    format!("http://{}/api/roll-dice", addr)
}

async fn post(url: &str, body: Value) -> reqwest::Response {
    reqwest::Client::new()
        .post(url)
        .json(&body)
        .send()
        .await
        .unwrap()
}

async fn expect_rejection(url: &str, body: Value, message: &str) {
    let response = post(url, body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error: ErrorBody = response.json().await.unwrap();
    assert_eq!(error.error, message);
}

#[tokio::test]
async fn test_successful_roll() {
    let url = spawn_server().await;

    let response = post(
        &url,
        json!({ "betAmount": 50, "balance": 100, "clientSeed": "ff" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    for field in ["roll", "message", "newBalance", "hashedServerSeed", "serverSeed"] {
        assert!(body.get(field).is_some(), "missing field {}", field);
    }

    let roll: RollResponse = serde_json::from_value(body).unwrap();
    assert_eq!(roll.server_seed.as_str().len(), 32);
    assert_eq!(roll.hashed_server_seed.as_hex().len(), 64);
    assert!(verify(roll.server_seed.as_str(), roll.hashed_server_seed.as_hex()));
    assert!(verify_roll(roll.server_seed.as_str(), "ff", roll.roll.value()));

    if roll.roll.value() > 3 {
        assert_eq!(roll.message, "You win!");
        assert_eq!(roll.new_balance, 150.0);
    } else {
        assert_eq!(roll.message, "You lose!");
        assert_eq!(roll.new_balance, 50.0);
    }
}

#[tokio::test]
async fn test_each_request_gets_a_fresh_seed() {
    let url = spawn_server().await;
    let body = json!({ "betAmount": 1, "balance": 10, "clientSeed": "abc" });

    let first: RollResponse = post(&url, body.clone()).await.json().await.unwrap();
    let second: RollResponse = post(&url, body).await.json().await.unwrap();

    assert_ne!(first.server_seed, second.server_seed);
    assert_ne!(first.hashed_server_seed, second.hashed_server_seed);
}

#[tokio::test]
async fn test_validation_failures() {
    let url = spawn_server().await;

    expect_rejection(
        &url,
        json!({ "betAmount": 10, "balance": 0, "clientSeed": "ff" }),
        "Insufficient balance.",
    )
    .await;
    expect_rejection(
        &url,
        json!({ "betAmount": 0, "balance": 100, "clientSeed": "ff" }),
        "Please select a bet amount.",
    )
    .await;
    expect_rejection(
        &url,
        json!({ "betAmount": 10, "balance": 100 }),
        "Invalid input. Please try again.",
    )
    .await;
    expect_rejection(
        &url,
        json!({ "betAmount": 10, "balance": 100, "clientSeed": "" }),
        "Invalid input. Please try again.",
    )
    .await;
}

#[tokio::test]
async fn test_bet_above_balance_is_settled() {
    let url = spawn_server().await;

    let response = post(
        &url,
        json!({ "betAmount": 500, "balance": 100, "clientSeed": "ff" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let roll: RollResponse = response.json().await.unwrap();
    if roll.roll.is_win() {
        assert_eq!(roll.new_balance, 600.0);
    } else {
        assert_eq!(roll.new_balance, -400.0);
    }
}

#[tokio::test]
async fn test_malformed_body() {
    let url = spawn_server().await;

    let response = reqwest::Client::new()
        .post(&url)
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error: ErrorBody = response.json().await.unwrap();
    assert_eq!(error.error, "Invalid input. Please try again.");
}

#[tokio::test]
async fn test_only_post_is_routed() {
    let url = spawn_server().await;
    let response = reqwest::get(&url).await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
