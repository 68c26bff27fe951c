//! Concurrency specs.
//!
//! Firings arriving from many tasks at once are never lost, and every waiter
//! on a reached threshold is released.

use crate::prelude::*;
use std::sync::Arc;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn detached_firings_from_many_tasks_are_all_counted() {
    let source = LocalEventSource::new();
    let listener = Listener::new(&source, [ITEM_PROCESSED, JOB_DONE]).unwrap();

    for _ in 0..100 {
        source.emit_detached(ITEM_PROCESSED);
    }
    for _ in 0..10 {
        source.emit_detached(JOB_DONE);
    }

    listener
        .when(ITEM_PROCESSED, 100)
        .unwrap()
        .and(JOB_DONE, 10)
        .unwrap()
        .with_timeout(SPEC_TIMEOUT)
        .await
        .unwrap();
    assert_eq!(listener.count(ITEM_PROCESSED), Some(100));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn many_waiters_race_with_firings() {
    let source = Arc::new(TracedEventSource::new(LocalEventSource::new()));
    let listener = Listener::new(&source, [ITEM_PROCESSED]).unwrap();

    let waiters: Vec<_> = (1..=50u64)
        .map(|threshold| {
            let set = listener
                .when(ITEM_PROCESSED, threshold)
                .unwrap()
                .with_timeout(SPEC_TIMEOUT);
            tokio::spawn(set.into_future())
        })
        .collect();

    let firers: Vec<_> = (0..5)
        .map(|_| {
            let source = Arc::clone(&source);
            tokio::spawn(async move { emit_n(source.as_ref(), ITEM_PROCESSED, 10).await })
        })
        .collect();

    for firer in firers {
        firer.await.unwrap();
    }
    for waiter in waiters {
        waiter.await.unwrap().unwrap();
    }
    assert_eq!(listener.count(ITEM_PROCESSED), Some(50));
}

#[tokio::test]
async fn shared_threshold_releases_every_waiter_together() {
    let (source, listener) = fake_listener();

    let waiters: Vec<_> = (0..8)
        .map(|_| tokio::spawn(listener.when(JOB_DONE, 2).unwrap().into_future()))
        .collect();
    tokio::task::yield_now().await;

    source.fire_n(JOB_DONE, 2).await;

    for waiter in waiters {
        waiter.await.unwrap().unwrap();
    }
}
