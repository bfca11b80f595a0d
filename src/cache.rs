//! Freshness-windowed query cache in front of a `SeasonSource`.
//!
//! Entries are keyed by (resource, season, id) and stay valid for the
//! configured TTL. A fresh hit returns the cached clone without touching
//! the network, so repeat requests inside the window are deduplicated and
//! a season change supersedes the old data simply by keying on the new
//! season. Concurrent misses on one key coalesce into a single fetch: the
//! first caller holds that key's flight lock while the others wait, then
//! re-check the cache and hit. The map locks are never held across an
//! await; only the per-key flight lock is.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use tokio::sync::Mutex as FlightLock;

use crate::api::{ApiResult, SeasonSource};
use crate::logging::{json_log, obj, v_num, v_str};
use crate::model::{Driver, Race, SeasonOverview};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    resource: &'static str,
    season: u32,
    id: Option<String>,
}

impl CacheKey {
    fn new(resource: &'static str, season: u32, id: Option<&str>) -> Self {
        Self {
            resource,
            season,
            id: id.map(str::to_string),
        }
    }
}

#[derive(Clone)]
enum Payload {
    Drivers(Vec<Driver>),
    Races(Vec<Race>),
    Race(Race),
    Overview(Box<SeasonOverview>),
}

struct Entry {
    payload: Payload,
    fetched_at: Instant,
}

impl Entry {
    fn is_fresh(&self, ttl: Duration) -> bool {
        self.fetched_at.elapsed() < ttl
    }
}

pub struct DataHub {
    source: Box<dyn SeasonSource>,
    cache: Mutex<HashMap<CacheKey, Entry>>,
    in_flight: Mutex<HashMap<CacheKey, Arc<FlightLock<()>>>>,
    ttl: Duration,
}

impl DataHub {
    pub fn new(source: Box<dyn SeasonSource>, ttl: Duration) -> Self {
        Self {
            source,
            cache: Mutex::new(HashMap::new()),
            in_flight: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    pub async fn drivers(&self, season: u32) -> ApiResult<Vec<Driver>> {
        let key = CacheKey::new("drivers", season, None);
        if let Some(Payload::Drivers(cached)) = self.fresh(&key) {
            return Ok(cached);
        }
        let flight = self.flight_lock(&key);
        let _guard = flight.lock().await;
        // Another caller may have landed while we waited on the lock.
        if let Some(Payload::Drivers(cached)) = self.fresh(&key) {
            return Ok(cached);
        }
        let fetched = self.source.drivers(season).await?;
        self.store(key, Payload::Drivers(fetched.clone()));
        Ok(fetched)
    }

    pub async fn races(&self, season: u32) -> ApiResult<Vec<Race>> {
        let key = CacheKey::new("races", season, None);
        if let Some(Payload::Races(cached)) = self.fresh(&key) {
            return Ok(cached);
        }
        let flight = self.flight_lock(&key);
        let _guard = flight.lock().await;
        if let Some(Payload::Races(cached)) = self.fresh(&key) {
            return Ok(cached);
        }
        let fetched = self.source.races(season).await?;
        self.store(key, Payload::Races(fetched.clone()));
        Ok(fetched)
    }

    pub async fn race(&self, id: &str, season: u32) -> ApiResult<Race> {
        let key = CacheKey::new("race", season, Some(id));
        if let Some(Payload::Race(cached)) = self.fresh(&key) {
            return Ok(cached);
        }
        let flight = self.flight_lock(&key);
        let _guard = flight.lock().await;
        if let Some(Payload::Race(cached)) = self.fresh(&key) {
            return Ok(cached);
        }
        let fetched = self.source.race(id, season).await?;
        self.store(key, Payload::Race(fetched.clone()));
        Ok(fetched)
    }

    pub async fn overview(&self, season: u32) -> ApiResult<SeasonOverview> {
        let key = CacheKey::new("overview", season, None);
        if let Some(Payload::Overview(cached)) = self.fresh(&key) {
            return Ok(*cached);
        }
        let flight = self.flight_lock(&key);
        let _guard = flight.lock().await;
        if let Some(Payload::Overview(cached)) = self.fresh(&key) {
            return Ok(*cached);
        }
        let fetched = self.source.overview(season).await?;
        self.store(key, Payload::Overview(Box::new(fetched.clone())));
        Ok(fetched)
    }

    fn flight_lock(&self, key: &CacheKey) -> Arc<FlightLock<()>> {
        let mut in_flight = match self.in_flight.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        in_flight
            .entry(key.clone())
            .or_insert_with(|| Arc::new(FlightLock::new(())))
            .clone()
    }

    fn fresh(&self, key: &CacheKey) -> Option<Payload> {
        let cache = match self.cache.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let hit = cache
            .get(key)
            .filter(|entry| entry.is_fresh(self.ttl))
            .map(|entry| entry.payload.clone());
        json_log(
            "cache_lookup",
            obj(&[
                ("resource", v_str(key.resource)),
                ("season", v_num(key.season as f64)),
                ("outcome", v_str(if hit.is_some() { "hit" } else { "miss" })),
            ]),
        );
        hit
    }

    fn store(&self, key: CacheKey, payload: Payload) {
        {
            let mut in_flight = match self.in_flight.lock() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            in_flight.remove(&key);
        }
        let mut cache = match self.cache.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        cache.insert(
            key,
            Entry {
                payload,
                fetched_at: Instant::now(),
            },
        );
    }
}
