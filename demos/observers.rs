//! # Example: observers
//!
//! Attaches the built-in [`LogWriter`] and a custom observer to an emitter,
//! then drives it through registrations, a refused registration and a failing
//! listener.
//!
//! ## Flow
//! ```text
//! EventEmitter ──► ObserverSet
//!                     ├─► LogWriter      (tracing: DEBUG/WARN)
//!                     └─► FailureCounter (counts warnings)
//! ```
//!
//! ## Run
//! Requires the `logging` feature to export [`LogWriter`].
//! ```bash
//! RUST_LOG=seqemit=debug cargo run --example observers --features logging
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use seqemit::{
    EmitterConfig, EventEmitter, ListenerError, ListenerFn, ListenerRef, LogWriter, Notice,
    Observe,
};
use tracing_subscriber::EnvFilter;

/// Counts warning notices. In real life, export a metric or page someone.
#[derive(Default)]
struct FailureCounter(AtomicUsize);

impl Observe for FailureCounter {
    fn on_notice(&self, notice: &Notice) {
        if notice.kind.is_warning() {
            let n = self.0.fetch_add(1, Ordering::Relaxed) + 1;
            println!("[failures] #{n}: {}", notice.kind.as_label());
        }
    }

    fn name(&self) -> &'static str {
        "failure-counter"
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("seqemit=debug")),
        )
        .init();

    let failures = Arc::new(FailureCounter::default());
    let emitter: EventEmitter<String> =
        EventEmitter::builder(EmitterConfig::default().with_max_listeners(2))
            .with_observer(Arc::new(LogWriter::new()))
            .with_observer(failures.clone())
            .build();

    let store: ListenerRef<String> = ListenerFn::arc("store", |line: Arc<String>| async move {
        println!("[store] {line}");
        Ok::<_, ListenerError>(())
    });
    let validate: ListenerRef<String> = ListenerFn::arc("validate", |line: Arc<String>| async move {
        if line.is_empty() {
            return Err(ListenerError::fail("empty line"));
        }
        Ok(())
    });

    emitter
        .on("line", store.clone())?
        .prepend_listener("line", validate)?;

    // Third listener exceeds the cap of 2.
    if let Err(e) = emitter.on("line", store.clone()) {
        println!("[main] {e}");
    }

    emitter.emit("line", "hello".to_string()).await?;
    if let Err(e) = emitter.emit("line", String::new()).await {
        println!("[main] dispatch stopped: {e}");
    }

    emitter.off("line", &store);
    emitter.remove_all_listeners("line");

    println!(
        "[main] warnings seen: {}",
        failures.0.load(Ordering::Relaxed)
    );
    Ok(())
}
