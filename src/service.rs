//! HTTP surface.
//!
//! Each word route decides on its own whether to answer from a cache tier or
//! to extract a fresh word. Failures become 5xx responses with a JSON error
//! body; a partially extracted word is never sent.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::cache::{Clock, TierCache, DAILY_TIER, HOURLY_TIER};
use crate::fetch::{fetch_word, PageSource};
use crate::result::Word;
use crate::{Error, Options};

const HOME_PAGE: &str = include_str!("../static/page.html");

/// Clock shared by the service's cache.
pub type SharedClock = Arc<dyn Clock>;

/// State shared by all handlers.
pub struct AppState {
    pub source: Arc<dyn PageSource>,
    pub cache: TierCache<SharedClock>,
    pub options: Options,
}

impl AppState {
    #[must_use]
    pub fn new(
        source: Arc<dyn PageSource>,
        cache: TierCache<SharedClock>,
        options: Options,
    ) -> Self {
        Self {
            source,
            cache,
            options,
        }
    }

    /// Serve `tier` from the cache, refreshing it from the source when stale.
    pub async fn tier_word(&self, tier: &str) -> Result<Word, Error> {
        self.cache
            .get_or_refresh(tier, || fetch_word(self.source.as_ref(), &self.options))
            .await
    }

    /// Extract a fresh word, bypassing every tier.
    pub async fn fresh_word(&self) -> Result<Word, Error> {
        fetch_word(self.source.as_ref(), &self.options).await
    }
}

/// Routes of the word service.
pub fn routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/mot_du_jour", get(daily_word))
        .route("/mot_de_l_heure", get(hourly_word))
        .route("/mot_aleatoire", get(random_word))
        .with_state(state)
}

async fn home() -> Html<&'static str> {
    Html(HOME_PAGE)
}

async fn daily_word(State(state): State<Arc<AppState>>) -> Result<Json<Word>, ApiError> {
    Ok(Json(state.tier_word(DAILY_TIER).await?))
}

async fn hourly_word(State(state): State<Arc<AppState>>) -> Result<Json<Word>, ApiError> {
    Ok(Json(state.tier_word(HOURLY_TIER).await?))
}

async fn random_word(State(state): State<Arc<AppState>>) -> Result<Json<Word>, ApiError> {
    Ok(Json(state.fresh_word().await?))
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Error as sent to HTTP clients.
#[derive(Debug)]
pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = if self.0.is_upstream() {
            StatusCode::BAD_GATEWAY
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };
        tracing::error!(%status, error = %self.0, "request failed");

        let body = ErrorBody {
            error: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
