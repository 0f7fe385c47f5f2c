use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use chrono::TimeDelta;
use tower::ServiceExt;

use mot_du_jour::cache::{SystemClock, TierCache, DAILY_TIER, HOURLY_TIER};
use mot_du_jour::fetch::PageSource;
use mot_du_jour::service::{routes, AppState, SharedClock};
use mot_du_jour::{Error, Options, Result, Word};

const PAGE: &str = r#"<html><body><h1>tour</h1><div>
  <div class="mw-heading mw-heading2"><h2 id="French">French</h2></div>
  <div class="mw-heading mw-heading3"><h3>Noun</h3></div>
  <p><span class="gender">f</span></p>
  <ol><li>tower</li></ol>
</div></body></html>"#;

/// Serves `PAGE` and counts how often it was asked to.
#[derive(Default)]
struct CountingSource {
    calls: AtomicUsize,
}

#[async_trait]
impl PageSource for CountingSource {
    async fn fetch_page(&self) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(PAGE.to_string())
    }

    fn describe(&self) -> String {
        "counting".to_string()
    }
}

struct FailingSource;

#[async_trait]
impl PageSource for FailingSource {
    async fn fetch_page(&self) -> Result<String> {
        Err(Error::UpstreamStatus {
            status: 503,
            url: "https://en.wiktionary.org/wiki/Special:RandomInCategory/French_lemmas".to_string(),
        })
    }

    fn describe(&self) -> String {
        "failing".to_string()
    }
}

fn cache() -> TierCache<SharedClock> {
    let clock: SharedClock = Arc::new(SystemClock);
    TierCache::with_clock(clock)
        .with_tier(DAILY_TIER, TimeDelta::days(1))
        .with_tier(HOURLY_TIER, TimeDelta::hours(1))
}

fn app(source: Arc<dyn PageSource>) -> axum::Router {
    routes(Arc::new(AppState::new(source, cache(), Options::default())))
}

async fn get(app: &axum::Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

#[tokio::test]
async fn daily_word_is_served_as_json() {
    let app = app(Arc::new(CountingSource::default()));

    let (status, body) = get(&app, "/mot_du_jour").await;

    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "name": "tour",
            "entries": [
                {"category": "Noun", "gender": "fem.", "definitions": ["tower"]}
            ]
        })
    );
}

#[tokio::test]
async fn tiers_are_cached_independently() {
    let source = Arc::new(CountingSource::default());
    let app = app(source.clone());

    get(&app, "/mot_du_jour").await;
    get(&app, "/mot_du_jour").await;
    assert_eq!(source.calls.load(Ordering::SeqCst), 1);

    get(&app, "/mot_de_l_heure").await;
    get(&app, "/mot_de_l_heure").await;
    assert_eq!(source.calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn random_word_is_never_cached() {
    let source = Arc::new(CountingSource::default());
    let app = app(source.clone());

    let (first, _) = get(&app, "/mot_aleatoire").await;
    let (second, body) = get(&app, "/mot_aleatoire").await;

    assert_eq!(first, StatusCode::OK);
    assert_eq!(second, StatusCode::OK);
    assert_eq!(source.calls.load(Ordering::SeqCst), 2);
    let word: Word = serde_json::from_slice(&body).unwrap();
    assert_eq!(word.name, "tour");
}

#[tokio::test]
async fn upstream_failure_is_a_server_error() {
    let app = app(Arc::new(FailingSource));

    let (status, body) = get(&app, "/mot_du_jour").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert!(json["error"].as_str().unwrap().contains("503"));
    assert!(json.get("name").is_none());
}

#[tokio::test]
async fn page_without_language_section_is_a_server_error() {
    struct EnglishOnly;

    #[async_trait]
    impl PageSource for EnglishOnly {
        async fn fetch_page(&self) -> Result<String> {
            Ok("<html><body><h1>house</h1></body></html>".to_string())
        }

        fn describe(&self) -> String {
            "english".to_string()
        }
    }

    let app = app(Arc::new(EnglishOnly));
    let (status, _) = get(&app, "/mot_aleatoire").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn home_page_is_html() {
    let app = app(Arc::new(CountingSource::default()));

    let (status, body) = get(&app, "/").await;

    assert_eq!(status, StatusCode::OK);
    let html = String::from_utf8(body).unwrap();
    assert!(html.contains("/mot_du_jour"));
}
