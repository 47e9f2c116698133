//! Invalidation broadcast adapter.
//!
//! The engine core knows nothing about pub/sub; it exposes an explicit
//! `invalidate()` and this thin adapter wires it to the application's
//! "overrides changed" broadcast. Whatever surface saves an override calls
//! [`InvalidationBroadcast::notify`]; every attached engine drops its cache.

use schoolgate_engine::PermissionEngine;
use schoolgate_overrides::OverrideSource;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tracing::debug;

/// Process-wide "overrides changed" signal.
#[derive(Clone)]
pub struct InvalidationBroadcast {
    tx: broadcast::Sender<()>,
}

impl InvalidationBroadcast {
    pub fn new() -> Self {
        // Capacity only bounds unprocessed signals; a lagged receiver still
        // invalidates, so losing intermediate signals is harmless.
        let (tx, _) = broadcast::channel(16);
        Self { tx }
    }

    /// Fire the signal. Called by the override management surface after an
    /// administrator saves, edits, or deletes an override.
    pub fn notify(&self) {
        // Send fails only when no engine is attached, which is fine.
        let _ = self.tx.send(());
    }

    /// Spawn a listener that invalidates the engine's cache on every signal.
    pub fn attach<S: OverrideSource>(&self, engine: PermissionEngine<S>) -> JoinHandle<()> {
        let mut rx = self.tx.subscribe();
        tokio::spawn(async move {
            loop {
                match rx.recv().await {
                    Ok(()) => {
                        debug!("Overrides changed, invalidating cache");
                        engine.invalidate();
                    }
                    Err(broadcast::error::RecvError::Lagged(_)) => {
                        // Missed signals collapse into one invalidation.
                        engine.invalidate();
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
        })
    }
}

impl Default for InvalidationBroadcast {
    fn default() -> Self {
        Self::new()
    }
}
