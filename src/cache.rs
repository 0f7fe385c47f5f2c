//! Time-based caching of served words.
//!
//! Each tier ("daily", "hourly", ...) keeps one word and the time it was
//! refreshed. The pair sits behind the tier's own async mutex so that reading,
//! deciding to refresh, refreshing and writing back happen as one step, and a
//! failed refresh leaves the previous word in place.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Mutex;

use chrono::{DateTime, TimeDelta, Utc};

use crate::result::Word;
use crate::{Error, Result};

/// Tier refreshed once a day.
pub const DAILY_TIER: &str = "daily";

/// Tier refreshed once an hour.
pub const HOURLY_TIER: &str = "hourly";

/// Source of the current time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    #[must_use]
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    /// Move the clock forward by `delta`.
    pub fn advance(&self, delta: TimeDelta) {
        let mut now = self.now.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        *now += delta;
    }

    pub fn set(&self, time: DateTime<Utc>) {
        *self.now.lock().unwrap_or_else(std::sync::PoisonError::into_inner) = time;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl<C: Clock + ?Sized> Clock for std::sync::Arc<C> {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

/// A cached word and when it was fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedWord {
    pub word: Word,
    pub refreshed_at: DateTime<Utc>,
}

impl CachedWord {
    fn is_fresh(&self, now: DateTime<Utc>, ttl: TimeDelta) -> bool {
        now.signed_duration_since(self.refreshed_at) < ttl
    }
}

#[derive(Debug)]
struct TierSlot {
    ttl: TimeDelta,
    slot: tokio::sync::Mutex<Option<CachedWord>>,
}

/// Keyed store of tier name to cached word.
#[derive(Debug)]
pub struct TierCache<C = SystemClock> {
    clock: C,
    tiers: HashMap<String, TierSlot>,
}

impl TierCache<SystemClock> {
    /// Cache with no tiers on the wall clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for TierCache<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> TierCache<C> {
    /// Cache with no tiers on `clock`.
    #[must_use]
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            tiers: HashMap::new(),
        }
    }

    /// Add (or replace) a tier whose words live for `ttl`.
    #[must_use]
    pub fn with_tier(mut self, name: impl Into<String>, ttl: TimeDelta) -> Self {
        self.tiers.insert(
            name.into(),
            TierSlot {
                ttl,
                slot: tokio::sync::Mutex::new(None),
            },
        );
        self
    }

    /// Names of the configured tiers.
    pub fn tier_names(&self) -> impl Iterator<Item = &str> {
        self.tiers.keys().map(String::as_str)
    }

    /// Current cached word of `tier`, fresh or not, without refreshing.
    pub async fn cached(&self, tier: &str) -> Result<Option<CachedWord>> {
        let tier_slot = self.tier(tier)?;
        Ok(tier_slot.slot.lock().await.clone())
    }

    /// Return the tier's word if it is still fresh, otherwise run `refresh`.
    ///
    /// The tier stays locked while `refresh` runs, so concurrent callers wait
    /// for the one refresh instead of fetching again. On success the word and
    /// timestamp are replaced together; on failure the old entry is kept and
    /// the error is returned.
    pub async fn get_or_refresh<F, Fut>(&self, tier: &str, refresh: F) -> Result<Word>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Word>>,
    {
        let tier_slot = self.tier(tier)?;
        let mut slot = tier_slot.slot.lock().await;

        if let Some(cached) = slot.as_ref() {
            if cached.is_fresh(self.clock.now(), tier_slot.ttl) {
                tracing::debug!(tier, word = %cached.word.name, "serving cached word");
                return Ok(cached.word.clone());
            }
        }

        match refresh().await {
            Ok(word) => {
                let refreshed_at = self.clock.now();
                tracing::info!(tier, word = %word.name, %refreshed_at, "refreshed cached word");
                *slot = Some(CachedWord {
                    word: word.clone(),
                    refreshed_at,
                });
                Ok(word)
            }
            Err(err) => {
                tracing::warn!(tier, error = %err, "refresh failed, keeping previous word");
                Err(err)
            }
        }
    }

    fn tier(&self, name: &str) -> Result<&TierSlot> {
        self.tiers
            .get(name)
            .ok_or_else(|| Error::UnknownTier(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use chrono::TimeZone;

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap()
    }

    fn word(name: &str) -> Word {
        Word {
            name: name.to_string(),
            entries: Vec::new(),
        }
    }

    fn cache(clock: Arc<ManualClock>) -> TierCache<Arc<ManualClock>> {
        TierCache::with_clock(clock)
            .with_tier(DAILY_TIER, TimeDelta::days(1))
            .with_tier(HOURLY_TIER, TimeDelta::hours(1))
    }

    #[tokio::test]
    async fn fresh_word_is_served_without_refresh() {
        let clock = Arc::new(ManualClock::new(start()));
        let cache = cache(clock.clone());
        let calls = AtomicUsize::new(0);

        let first = cache
            .get_or_refresh(DAILY_TIER, || async {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok(word("tour"))
            })
            .await
            .unwrap();
        clock.advance(TimeDelta::hours(23));
        let second = cache
            .get_or_refresh(DAILY_TIER, || async {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok(word("chat"))
            })
            .await
            .unwrap();

        assert_eq!(first.name, "tour");
        assert_eq!(second.name, "tour");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn expired_word_is_refreshed() {
        let clock = Arc::new(ManualClock::new(start()));
        let cache = cache(clock.clone());

        cache
            .get_or_refresh(HOURLY_TIER, || async { Ok(word("tour")) })
            .await
            .unwrap();
        clock.advance(TimeDelta::hours(1));
        let refreshed = cache
            .get_or_refresh(HOURLY_TIER, || async { Ok(word("chat")) })
            .await
            .unwrap();

        assert_eq!(refreshed.name, "chat");
        let cached = cache.cached(HOURLY_TIER).await.unwrap().unwrap();
        assert_eq!(cached.refreshed_at, start() + TimeDelta::hours(1));
    }

    #[tokio::test]
    async fn failed_refresh_keeps_previous_word() {
        let clock = Arc::new(ManualClock::new(start()));
        let cache = cache(clock.clone());

        cache
            .get_or_refresh(HOURLY_TIER, || async { Ok(word("tour")) })
            .await
            .unwrap();
        clock.advance(TimeDelta::hours(2));

        let err = cache
            .get_or_refresh(HOURLY_TIER, || async {
                Err(Error::UpstreamStatus {
                    status: 503,
                    url: "https://example.org".to_string(),
                })
            })
            .await
            .unwrap_err();
        assert!(err.is_upstream());

        let cached = cache.cached(HOURLY_TIER).await.unwrap().unwrap();
        assert_eq!(cached.word.name, "tour");
        assert_eq!(cached.refreshed_at, start());
    }

    #[tokio::test]
    async fn tiers_are_independent() {
        let clock = Arc::new(ManualClock::new(start()));
        let cache = cache(clock.clone());

        cache
            .get_or_refresh(DAILY_TIER, || async { Ok(word("tour")) })
            .await
            .unwrap();
        cache
            .get_or_refresh(HOURLY_TIER, || async { Ok(word("chat")) })
            .await
            .unwrap();
        clock.advance(TimeDelta::hours(3));

        let daily = cache
            .get_or_refresh(DAILY_TIER, || async { Ok(word("pain")) })
            .await
            .unwrap();
        let hourly = cache
            .get_or_refresh(HOURLY_TIER, || async { Ok(word("pain")) })
            .await
            .unwrap();

        assert_eq!(daily.name, "tour");
        assert_eq!(hourly.name, "pain");
    }

    #[tokio::test]
    async fn unknown_tier_is_an_error() {
        let cache = TierCache::new();
        let result = cache
            .get_or_refresh("weekly", || async { Ok(word("tour")) })
            .await;
        assert!(matches!(result, Err(Error::UnknownTier(name)) if name == "weekly"));
    }

    #[tokio::test]
    async fn empty_tier_has_nothing_cached() {
        let cache = TierCache::new().with_tier(DAILY_TIER, TimeDelta::days(1));
        assert!(cache.cached(DAILY_TIER).await.unwrap().is_none());
    }
}
