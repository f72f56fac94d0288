//! Integration tests for request session lifecycle: supersession,
//! cancellation, and the safety timeout.

mod common;

use std::time::{Duration, Instant};

use tokio::sync::mpsc;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use qfetch::core::config::{Config, ConfigFile, EnvOverrides};
use qfetch::core::fetcher::QuoteFetcher;

use common::logger::TestLogger;

fn secondary_only_config(secondary: &MockServer) -> Config {
    Config::resolve(
        ConfigFile {
            api_key: None,
            primary_url: None,
            secondary_url: Some(format!("{}/random", secondary.uri())),
        },
        EnvOverrides::default(),
    )
}

#[tokio::test]
async fn superseding_request_cancels_the_prior_session() {
    let log = TestLogger::new("superseding_request_cancels_the_prior_session");
    log.phase("setup");

    let secondary = MockServer::start().await;

    // The first request would take 400ms; the second responds at once.
    Mock::given(method("GET"))
        .and(path("/random"))
        .and(query_param("tags", "slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({
                    "content": "slow quote", "author": "a", "tags": ["slow"]
                }))
                .set_delay(Duration::from_millis(400)),
        )
        .mount(&secondary)
        .await;

    Mock::given(method("GET"))
        .and(path("/random"))
        .and(query_param("tags", "fast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "content": "fast quote", "author": "b", "tags": ["fast"]
        })))
        .mount(&secondary)
        .await;

    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut fetcher = QuoteFetcher::new(secondary_only_config(&secondary), tx).unwrap();

    log.phase("execute");
    let gen_a = fetcher.request_quote("slow");
    let gen_b = fetcher.request_quote("fast");

    let first = rx.recv().await.unwrap();
    let second = rx.recv().await.unwrap();

    log.phase("verify");
    let (settled_a, settled_b) = if first.generation == gen_a {
        (first, second)
    } else {
        (second, first)
    };

    // A was superseded before settling: cancelled, and its settlement is
    // not the live session, so it may never render.
    assert!(settled_a.outcome.is_cancelled());
    assert!(!fetcher.settle(settled_a.generation));

    // Only B's outcome is observable.
    assert_eq!(settled_b.generation, gen_b);
    assert!(fetcher.settle(settled_b.generation));
    let quote = settled_b.outcome.result.expect("B should succeed");
    assert_eq!(quote.content, "fast quote");
    log.finish_ok();
}

#[tokio::test]
async fn safety_timeout_behaves_like_cancellation() {
    let log = TestLogger::new("safety_timeout_behaves_like_cancellation");
    log.phase("setup");

    let secondary = MockServer::start().await;

    // Slower than the (shortened) safety timeout.
    Mock::given(method("GET"))
        .and(path("/random"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({
                    "content": "too late", "author": "a", "tags": []
                }))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&secondary)
        .await;

    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut fetcher = QuoteFetcher::new(secondary_only_config(&secondary), tx)
        .unwrap()
        .with_safety_timeout(Duration::from_millis(150));

    log.phase("execute");
    let start = Instant::now();
    let generation = fetcher.request_quote("");
    let settled = rx.recv().await.unwrap();

    log.phase("verify");
    // Identical to an explicit cancellation: no quote, and it settled
    // well before the provider would have responded.
    assert_eq!(settled.generation, generation);
    assert!(settled.outcome.is_cancelled());
    assert!(start.elapsed() < Duration::from_secs(2));

    // The settlement still belongs to the live session, so the loading
    // indicator stops, but there is nothing to render.
    assert!(fetcher.settle(generation));
    log.finish_ok();
}

#[tokio::test]
async fn settled_request_is_not_cancelled_by_later_timeout() {
    let log = TestLogger::new("settled_request_is_not_cancelled_by_later_timeout");
    log.phase("setup");

    let secondary = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/random"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "content": "prompt quote", "author": "a", "tags": []
        })))
        .mount(&secondary)
        .await;

    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut fetcher = QuoteFetcher::new(secondary_only_config(&secondary), tx)
        .unwrap()
        .with_safety_timeout(Duration::from_millis(200));

    log.phase("execute");
    let generation = fetcher.request_quote("");
    let settled = rx.recv().await.unwrap();

    log.phase("verify");
    // The fetch settled before the timeout; the disarmed guard must not
    // turn it into a cancellation.
    assert_eq!(settled.generation, generation);
    let quote = settled.outcome.result.expect("fetch should succeed");
    assert_eq!(quote.content, "prompt quote");
    assert!(fetcher.settle(generation));
    log.finish_ok();
}

#[tokio::test]
async fn each_session_gets_a_fresh_generation() {
    let log = TestLogger::new("each_session_gets_a_fresh_generation");
    log.phase("setup");

    let secondary = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/random"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "content": "c", "author": "a", "tags": []
        })))
        .mount(&secondary)
        .await;

    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut fetcher = QuoteFetcher::new(secondary_only_config(&secondary), tx).unwrap();

    log.phase("execute");
    let gen_1 = fetcher.request_quote("");
    let settled = rx.recv().await.unwrap();
    assert!(fetcher.settle(settled.generation));

    let gen_2 = fetcher.request_quote("");

    log.phase("verify");
    assert!(gen_2 > gen_1);
    assert!(fetcher.is_current(gen_2));
    assert!(!fetcher.is_current(gen_1));
    log.finish_ok();
}
