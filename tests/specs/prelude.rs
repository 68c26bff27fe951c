//! Shared helpers for behavioral specs.

pub use std::future::IntoFuture;
pub use std::time::Duration;
pub use tally_adapters::{EventEmitter, FakeEventSource, LocalEventSource, TracedEventSource};
pub use tally_core::{Error, ListenExt, Listener, ListenerConfig};

/// Event names used throughout the specs
pub const ITEM_PROCESSED: &str = "itemProcessed";
pub const JOB_DONE: &str = "jobDone";

/// Timeout for waits that are expected to succeed
pub const SPEC_TIMEOUT: Duration = Duration::from_secs(5);

/// A fake source plus a listener tracking both spec events
pub fn fake_listener() -> (FakeEventSource, Listener) {
    let source = FakeEventSource::new();
    let listener = Listener::new(&source, [ITEM_PROCESSED, JOB_DONE])
        .unwrap()
        .with_default_timeout(SPEC_TIMEOUT);
    (source, listener)
}

/// Fire `event` `times` times through any emitter
pub async fn emit_n<E: EventEmitter + ?Sized>(source: &E, event: &str, times: usize) {
    for _ in 0..times {
        source.emit(event).await;
    }
}
