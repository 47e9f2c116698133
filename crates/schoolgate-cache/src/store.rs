//! The coalescing override cache.
//!
//! Shared mutable state is one mutex-guarded map plus an atomic generation
//! counter. Every fetch is tagged with the generation current at its start;
//! a result whose tag no longer matches when it completes is discarded
//! rather than cached, and its waiters retry against the new generation.
//! In-flight fetches are never cancelled, only discarded on arrival.

use chrono::{DateTime, TimeDelta, Utc};
use schoolgate_models::{OverrideMap, Role, Subject, UserId};
use schoolgate_overrides::{OverrideSource, merge_overrides};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::config::CacheConfig;

type SubjectKey = (Role, UserId);

/// The completed result of one fetch, tagged with the generation current
/// when the fetch started.
#[derive(Clone)]
struct FetchOutcome {
    generation: u64,
    map: Arc<OverrideMap>,
}

struct CacheEntry {
    map: Arc<OverrideMap>,
    generation: u64,
    fetched_at: DateTime<Utc>,
}

struct InFlight {
    generation: u64,
    rx: watch::Receiver<Option<FetchOutcome>>,
}

#[derive(Default)]
struct State {
    entries: HashMap<SubjectKey, CacheEntry>,
    in_flight: HashMap<SubjectKey, InFlight>,
}

struct Shared<S> {
    source: S,
    state: Mutex<State>,
    generation: AtomicU64,
    ttl: Option<TimeDelta>,
}

/// Per-subject override cache with request coalescing.
///
/// Cloning is cheap and all clones share the same cache; tests that need
/// isolation construct their own instance.
pub struct OverrideCache<S> {
    shared: Arc<Shared<S>>,
}

impl<S> Clone for OverrideCache<S> {
    fn clone(&self) -> Self {
        Self {
            shared: self.shared.clone(),
        }
    }
}

fn lock(state: &Mutex<State>) -> MutexGuard<'_, State> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

impl<S: OverrideSource> OverrideCache<S> {
    pub fn new(source: S, config: CacheConfig) -> Self {
        // A TTL too large for TimeDelta disables expiry instead of wrapping
        // into the past and expiring everything on sight.
        let ttl = (config.ttl_seconds > 0)
            .then(|| i64::try_from(config.ttl_seconds).ok())
            .flatten()
            .and_then(TimeDelta::try_seconds);
        Self {
            shared: Arc::new(Shared {
                source,
                state: Mutex::new(State::default()),
                generation: AtomicU64::new(0),
                ttl,
            }),
        }
    }

    /// The merged override map for a subject, fetching it if necessary.
    ///
    /// Concurrent callers for the same subject share one fetch. The returned
    /// map is always the product of a fetch started at the current
    /// generation; results superseded by an invalidation are refetched
    /// transparently.
    pub async fn get(&self, subject: &Subject) -> Arc<OverrideMap> {
        let key = (subject.role, subject.user_id);
        loop {
            let mut rx = {
                let mut state = lock(&self.shared.state);
                let generation = self.shared.generation.load(Ordering::SeqCst);
                if let Some(entry) = state.entries.get(&key) {
                    if entry.generation == generation && !self.is_expired(entry) {
                        return entry.map.clone();
                    }
                    state.entries.remove(&key);
                }
                // An in-flight entry whose sender is gone belongs to a fetch
                // task that died without a result; starting a fresh fetch
                // replaces it.
                let pending = state
                    .in_flight
                    .get(&key)
                    .filter(|f| f.generation == generation && f.rx.has_changed().is_ok())
                    .map(|f| f.rx.clone());
                match pending {
                    Some(rx) => rx,
                    None => self.start_fetch(&mut state, *subject, key, generation),
                }
            };

            let already_done = rx.borrow().clone();
            let outcome = match already_done {
                Some(outcome) => Some(outcome),
                None => match rx.changed().await {
                    Ok(()) => rx.borrow().clone(),
                    // Sender dropped without a result; start over.
                    Err(_) => None,
                },
            };

            if let Some(outcome) = outcome {
                if outcome.generation == self.shared.generation.load(Ordering::SeqCst) {
                    return outcome.map;
                }
            }
            // Superseded by an invalidation; retry at the new generation.
        }
    }

    /// Non-blocking lookup: the cached map if fresh, `None` while loading.
    ///
    /// A miss triggers the background fetch so that a later [`get`] or a
    /// repeated `peek` resolves.
    ///
    /// [`get`]: OverrideCache::get
    pub fn peek(&self, subject: &Subject) -> Option<Arc<OverrideMap>> {
        let key = (subject.role, subject.user_id);
        let mut state = lock(&self.shared.state);
        let generation = self.shared.generation.load(Ordering::SeqCst);
        if let Some(entry) = state.entries.get(&key) {
            if entry.generation == generation && !self.is_expired(entry) {
                return Some(entry.map.clone());
            }
            state.entries.remove(&key);
        }
        let pending = state
            .in_flight
            .get(&key)
            .is_some_and(|f| f.generation == generation && f.rx.has_changed().is_ok());
        if !pending {
            self.start_fetch(&mut state, *subject, key, generation);
        }
        None
    }

    /// Drop every cached map and mark in-flight fetches as superseded.
    ///
    /// Invalidation is coarse: override edits are rare administrative
    /// actions, so per-key precision is not worth the bookkeeping. Returns
    /// the new generation.
    pub fn invalidate(&self) -> u64 {
        let generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;
        {
            let mut state = lock(&self.shared.state);
            state.entries.clear();
            state.in_flight.clear();
        }
        debug!(generation, "Override cache invalidated");
        generation
    }

    /// The current invalidation generation.
    pub fn generation(&self) -> u64 {
        self.shared.generation.load(Ordering::SeqCst)
    }

    fn is_expired(&self, entry: &CacheEntry) -> bool {
        match self.ttl() {
            Some(ttl) => Utc::now() - entry.fetched_at > ttl,
            None => false,
        }
    }

    fn ttl(&self) -> Option<TimeDelta> {
        self.shared.ttl
    }

    /// Registers an in-flight entry and spawns the fetch task. Must be
    /// called with the state lock held; returns the receiver for waiters.
    fn start_fetch(
        &self,
        state: &mut State,
        subject: Subject,
        key: SubjectKey,
        generation: u64,
    ) -> watch::Receiver<Option<FetchOutcome>> {
        let (tx, rx) = watch::channel(None);
        state.in_flight.insert(
            key,
            InFlight {
                generation,
                rx: rx.clone(),
            },
        );

        let shared = self.shared.clone();
        tokio::spawn(async move {
            let map = match shared.source.fetch(&subject).await {
                Ok(records) => merge_overrides(records),
                Err(e) => {
                    // Fail safe: no overrides, the default policy still applies.
                    warn!(
                        role = %subject.role,
                        user_id = %subject.user_id,
                        error = %e,
                        "Override fetch failed, falling back to defaults"
                    );
                    OverrideMap::new()
                }
            };
            let outcome = FetchOutcome {
                generation,
                map: Arc::new(map),
            };

            {
                let mut state = lock(&shared.state);
                let current = shared.generation.load(Ordering::SeqCst);
                // Removed before the send below, so an in-flight entry whose
                // channel is closed always marks a task that died mid-fetch.
                if state
                    .in_flight
                    .get(&key)
                    .is_some_and(|f| f.generation == generation)
                {
                    state.in_flight.remove(&key);
                }
                if generation == current {
                    state.entries.insert(
                        key,
                        CacheEntry {
                            map: outcome.map.clone(),
                            generation,
                            fetched_at: Utc::now(),
                        },
                    );
                    debug!(
                        role = %subject.role,
                        user_id = %subject.user_id,
                        generation,
                        overrides = outcome.map.len(),
                        "Cached override map"
                    );
                } else {
                    debug!(
                        role = %subject.role,
                        user_id = %subject.user_id,
                        started = generation,
                        current,
                        "Discarding stale override fetch"
                    );
                }
            }
            // Waiters receive the tagged outcome and retry if it is stale.
            let _ = tx.send(Some(outcome));
        });

        rx
    }
}
