//! Time-bounded response store with a background reaper
//!
//! `ResponseCache` maps request URLs to decoded payloads of an arbitrary
//! caller-chosen type. A tokio task started at construction sweeps the store
//! once per interval and deletes entries whose age has reached that interval,
//! so an entry is gone within one reaper cycle of crossing its TTL.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use thiserror::Error;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, trace};

/// Errors that can occur when constructing a cache
#[derive(Debug, Error)]
pub enum CacheError {
    /// The configured expiry interval was zero
    #[error("cache expiry interval must be greater than zero")]
    ZeroInterval,
}

/// A single cached payload and the instant it was stored
#[derive(Debug, Clone)]
struct CacheEntry<T> {
    value: T,
    created_at: Instant,
}

/// Shared handle to the entry store, keyed by request URL
type Store<T> = Arc<Mutex<HashMap<String, CacheEntry<T>>>>;

/// Ownership token for the reaper task, consumed by `close`
struct Reaper {
    shutdown_tx: mpsc::Sender<()>,
    task: JoinHandle<()>,
}

/// Concurrency-safe store for decoded API responses with age-based expiry
///
/// The payload type is opaque to the cache; callers pick it and get owned
/// clones back from [`get`](ResponseCache::get). All reads and writes
/// serialize through a single whole-store mutex, which is never held across
/// an await point.
pub struct ResponseCache<T> {
    entries: Store<T>,
    interval: Duration,
    reaper: Mutex<Option<Reaper>>,
}

impl<T> ResponseCache<T>
where
    T: Clone + Send + 'static,
{
    /// Creates a cache and immediately starts its background reaper
    ///
    /// `interval` is both the reaper's wake period and the age at which an
    /// entry becomes eligible for removal. Must be called from within a tokio
    /// runtime.
    ///
    /// # Errors
    /// Returns [`CacheError::ZeroInterval`] if `interval` is zero.
    pub fn new(interval: Duration) -> Result<Self, CacheError> {
        if interval.is_zero() {
            return Err(CacheError::ZeroInterval);
        }

        let entries: Store<T> = Arc::new(Mutex::new(HashMap::new()));
        let (shutdown_tx, shutdown_rx) = mpsc::channel::<()>(1);
        let task = tokio::spawn(reap_loop(Arc::clone(&entries), interval, shutdown_rx));

        Ok(Self {
            entries,
            interval,
            reaper: Mutex::new(Some(Reaper { shutdown_tx, task })),
        })
    }

    /// Inserts or fully replaces the entry for `key`, stamping it with the
    /// current time
    ///
    /// Keys are compared exactly; callers must use the same identifier on
    /// `add` and `get`.
    pub fn add(&self, key: impl Into<String>, value: T) {
        let mut entries = self.lock_entries();
        entries.insert(
            key.into(),
            CacheEntry {
                value,
                created_at: Instant::now(),
            },
        );
    }

    /// Returns a clone of the stored value for `key`, or `None` if no entry
    /// exists
    ///
    /// There is no lazy expiry on read: an entry past its TTL that the reaper
    /// has not yet swept is still returned. Staleness is bounded by one
    /// reaper cycle.
    pub fn get(&self, key: &str) -> Option<T> {
        let entries = self.lock_entries();
        entries.get(key).map(|entry| entry.value.clone())
    }

    /// Number of entries currently in the store
    pub fn len(&self) -> usize {
        self.lock_entries().len()
    }

    /// Whether the store currently holds no entries
    pub fn is_empty(&self) -> bool {
        self.lock_entries().is_empty()
    }

    /// The configured expiry interval
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Stops the reaper permanently
    ///
    /// Signals the reaper task and waits for it to finish, which takes at
    /// most one in-flight sweep. No tick fires after this returns. Calling
    /// `close` again is a no-op.
    pub async fn close(&self) {
        let reaper = self.lock_reaper().take();
        if let Some(Reaper { shutdown_tx, task }) = reaper {
            // Receiver may already be gone if the task panicked; joining
            // below surfaces nothing either way.
            let _ = shutdown_tx.send(()).await;
            let _ = task.await;
            debug!("response cache closed");
        }
    }

    fn lock_entries(&self) -> std::sync::MutexGuard<'_, HashMap<String, CacheEntry<T>>> {
        self.entries.lock().expect("cache store mutex poisoned")
    }

    fn lock_reaper(&self) -> std::sync::MutexGuard<'_, Option<Reaper>> {
        self.reaper.lock().expect("cache reaper mutex poisoned")
    }
}

impl<T> Drop for ResponseCache<T> {
    fn drop(&mut self) {
        // A cache dropped without close() must not leak its task.
        if let Ok(mut reaper) = self.reaper.lock() {
            if let Some(reaper) = reaper.take() {
                reaper.task.abort();
            }
        }
    }
}

/// Reaper loop: wakes every `interval` and removes entries whose age has
/// reached it, until the shutdown channel fires
///
/// The sweep takes the store lock once per tick, so a concurrent reader sees
/// an entry either fully present or fully removed.
async fn reap_loop<T>(entries: Store<T>, interval: Duration, mut shutdown_rx: mpsc::Receiver<()>) {
    let mut ticker = tokio::time::interval(interval);
    // The first tick completes immediately; skip it so the first sweep
    // happens one full interval after construction.
    ticker.tick().await;

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let removed = {
                    let mut entries = entries.lock().expect("cache store mutex poisoned");
                    let before = entries.len();
                    entries.retain(|_, entry| entry.created_at.elapsed() < interval);
                    before - entries.len()
                };
                if removed > 0 {
                    debug!(removed, "reaped expired cache entries");
                } else {
                    trace!("reaper sweep found no expired entries");
                }
            }
            _ = shutdown_rx.recv() => {
                break;
            }
        }
    }
}
