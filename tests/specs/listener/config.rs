//! Listener configuration specs.

use crate::prelude::*;

#[tokio::test]
async fn listener_from_toml_config_uses_its_timeout() {
    let config = ListenerConfig::from_toml_str(
        r#"
        default_timeout = "250ms"
        events = ["itemProcessed", "jobDone"]
        "#,
    )
    .unwrap();

    let source = LocalEventSource::new();
    let listener = Listener::from_config(&source, &config).unwrap();
    assert_eq!(listener.default_timeout(), Duration::from_millis(250));

    let err = listener.when_once(JOB_DONE).unwrap().await.unwrap_err();
    assert!(err.is_timeout());
}

#[test]
fn config_without_events_is_rejected_by_listener() {
    let config = ListenerConfig::from_toml_str("events = []").unwrap();
    let source = LocalEventSource::new();

    let err = Listener::from_config(&source, &config).unwrap_err();
    assert!(matches!(err, Error::NoEventNames));
}
