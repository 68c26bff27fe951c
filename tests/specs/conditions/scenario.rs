//! Condition set scenario specs.
//!
//! A set resolves only when every event has reached its total count.

use crate::prelude::*;

#[tokio::test]
async fn items_then_job_done_resolves() {
    let (source, listener) = fake_listener();

    source.fire_n(ITEM_PROCESSED, 2).await;
    source.fire(JOB_DONE).await;

    listener
        .when(ITEM_PROCESSED, 2)
        .unwrap()
        .and(JOB_DONE, 1)
        .unwrap()
        .with_timeout(Duration::from_secs(1))
        .await
        .unwrap();
}

#[tokio::test(start_paused = true)]
async fn waiting_for_a_third_item_times_out_with_observed_count() {
    let (source, listener) = fake_listener();

    source.fire_n(ITEM_PROCESSED, 2).await;
    source.fire(JOB_DONE).await;

    let err = listener
        .when(ITEM_PROCESSED, 3)
        .unwrap()
        .and(JOB_DONE, 1)
        .unwrap()
        .with_timeout(Duration::from_secs(1))
        .await
        .unwrap_err();

    match err {
        Error::Timeout {
            event,
            threshold,
            observed,
        } => {
            assert_eq!(event, ITEM_PROCESSED);
            assert_eq!(threshold, 3);
            assert_eq!(observed, 2);
        }
        other => panic!("expected timeout, got {:?}", other),
    }
}

#[tokio::test]
async fn waiting_before_events_fire_resolves_once_they_do() {
    let source = LocalEventSource::new();
    let listener = source.listen_for([ITEM_PROCESSED, JOB_DONE]).unwrap();

    let set = listener
        .when(ITEM_PROCESSED, 2)
        .unwrap()
        .and_once(JOB_DONE)
        .unwrap()
        .with_timeout(SPEC_TIMEOUT);
    let waiter = tokio::spawn(set.into_future());

    emit_n(&source, ITEM_PROCESSED, 2).await;
    source.emit(JOB_DONE).await;

    waiter.await.unwrap().unwrap();
}

#[tokio::test(start_paused = true)]
async fn only_one_side_reaching_its_count_fails_the_set() {
    let (source, listener) = fake_listener();

    source.fire_n(ITEM_PROCESSED, 2).await;

    let err = listener
        .when(ITEM_PROCESSED, 2)
        .unwrap()
        .and(JOB_DONE, 1)
        .unwrap()
        .with_timeout(Duration::from_secs(1))
        .resolve()
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Timeout { ref event, .. } if event == JOB_DONE));
}

#[tokio::test]
async fn thresholds_count_firings_before_the_wait() {
    let (source, listener) = fake_listener();
    source.fire_n(JOB_DONE, 3).await;

    let set = listener.when(JOB_DONE, 3).unwrap();
    assert!(set.is_satisfied());
    set.await.unwrap();
}
