//! Integration tests for the response cache lifecycle
//!
//! Exercises the cache the way the API client uses it: JSON payloads keyed
//! by URL, a short expiry interval, and a background sweep that removes
//! entries on its own clock.

use std::sync::Arc;
use std::time::Duration;

use serde_json::{json, Value};

use pokedex::cache::ResponseCache;

#[tokio::test]
async fn fresh_entry_is_served_then_reaped() {
    // interval = 100ms; add at t=0, hit at t=50ms, gone by t=250ms.
    let cache: ResponseCache<Value> =
        ResponseCache::new(Duration::from_millis(100)).expect("valid interval");

    cache.add("url-a", json!({"n": 1}));

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(cache.get("url-a"), Some(json!({"n": 1})));

    tokio::time::sleep(Duration::from_millis(200)).await;
    assert_eq!(cache.get("url-a"), None);

    cache.close().await;
}

#[tokio::test]
async fn reinsertion_restarts_the_clock() {
    let cache: ResponseCache<Value> =
        ResponseCache::new(Duration::from_millis(150)).expect("valid interval");

    cache.add("url-a", json!({"version": 1}));
    tokio::time::sleep(Duration::from_millis(100)).await;
    // Replacing the entry restamps it, so it survives the sweep that would
    // have removed the original.
    cache.add("url-a", json!({"version": 2}));
    tokio::time::sleep(Duration::from_millis(100)).await;

    assert_eq!(cache.get("url-a"), Some(json!({"version": 2})));

    cache.close().await;
}

#[tokio::test]
async fn sweep_removes_only_expired_entries() {
    let cache: ResponseCache<Value> =
        ResponseCache::new(Duration::from_millis(200)).expect("valid interval");

    cache.add("stale", json!("old"));
    tokio::time::sleep(Duration::from_millis(150)).await;
    cache.add("fresh", json!("new"));

    // First sweep fires around t=200ms: "stale" has crossed the interval,
    // "fresh" has not.
    tokio::time::sleep(Duration::from_millis(100)).await;

    assert_eq!(cache.get("stale"), None);
    assert_eq!(cache.get("fresh"), Some(json!("new")));
    assert_eq!(cache.len(), 1);

    cache.close().await;
}

#[tokio::test]
async fn close_stops_all_future_sweeps() {
    let cache: ResponseCache<Value> =
        ResponseCache::new(Duration::from_millis(100)).expect("valid interval");

    cache.add("url-a", json!({"kept": true}));
    cache.close().await;

    // Without the reaper the entry outlives many intervals.
    tokio::time::sleep(Duration::from_millis(350)).await;
    assert_eq!(cache.len(), 1);
    assert_eq!(cache.get("url-a"), Some(json!({"kept": true})));

    // Idempotent: closing again changes nothing.
    cache.close().await;
    assert_eq!(cache.len(), 1);
}

#[tokio::test]
async fn concurrent_tasks_never_observe_foreign_values() {
    let cache: Arc<ResponseCache<String>> =
        Arc::new(ResponseCache::new(Duration::from_millis(50)).expect("valid interval"));

    let mut handles = Vec::new();
    for task_id in 0..8usize {
        let cache = Arc::clone(&cache);
        handles.push(tokio::spawn(async move {
            for round in 0..100usize {
                // Half the keys overlap across tasks, half are private.
                let shared_key = format!("shared-{}", round % 5);
                let private_key = format!("task-{}-{}", task_id, round % 5);
                let value = format!("payload-{}", round % 5);

                cache.add(shared_key.clone(), value.clone());
                cache.add(private_key.clone(), value.clone());

                // A concurrent sweep may have removed either entry; when one
                // is present it must be a value some task wrote for that key.
                if let Some(seen) = cache.get(&shared_key) {
                    assert_eq!(seen, value);
                }
                if let Some(seen) = cache.get(&private_key) {
                    assert_eq!(seen, value);
                }

                tokio::task::yield_now().await;
            }
        }));
    }

    for handle in handles {
        handle.await.expect("task should not panic");
    }

    cache.close().await;
}
