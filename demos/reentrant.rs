//! # Example: reentrant
//!
//! Listeners hold a clone of the emitter and change it while it dispatches.
//! The sequence is re-read after every listener, so changes take effect within
//! the running dispatch.
//!
//! ## Flow
//! ```text
//! emit("job", 1)
//!     ├─► bootstrap (once) ── on("job", worker)    appended, runs in this dispatch
//!     ├─► probe ─────────── off("job", probe)     later entries shift down by one
//!     │     (done moved to the slot just visited, skipped this round)
//!     └─► worker
//! emit("job", 2)
//!     ├─► bootstrap (spent)
//!     ├─► done ──────────── emit("audit")         nested dispatch runs inline
//!     └─► worker
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example reentrant
//! ```

use std::sync::{Arc, OnceLock};

use seqemit::{EventEmitter, ListenerError, ListenerFn, ListenerRef};

fn printer(tag: &'static str) -> ListenerRef<u32> {
    ListenerFn::arc(tag, move |round: Arc<u32>| async move {
        println!("[{tag}] round {round}");
        Ok::<_, ListenerError>(())
    })
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let emitter: EventEmitter<u32> = EventEmitter::new();
    let worker = printer("worker");

    // Adds the worker on first dispatch.
    let bootstrap: ListenerRef<u32> = {
        let (emitter, worker) = (emitter.clone(), worker.clone());
        ListenerFn::arc("bootstrap", move |_: Arc<u32>| {
            let (emitter, worker) = (emitter.clone(), worker.clone());
            async move {
                println!("[bootstrap] registering worker");
                emitter
                    .on("job", worker)
                    .map_err(|e| ListenerError::fail(e.to_string()))?;
                Ok::<_, ListenerError>(())
            }
        })
    };

    // Removes itself; needs its own handle, so it reads it from a cell.
    let probe_slot: Arc<OnceLock<ListenerRef<u32>>> = Arc::new(OnceLock::new());
    let probe: ListenerRef<u32> = {
        let (emitter, slot) = (emitter.clone(), Arc::clone(&probe_slot));
        ListenerFn::arc("probe", move |_: Arc<u32>| {
            let (emitter, slot) = (emitter.clone(), Arc::clone(&slot));
            async move {
                println!("[probe] removing myself");
                if let Some(me) = slot.get() {
                    emitter.off("job", me);
                }
                Ok::<_, ListenerError>(())
            }
        })
    };
    let _ = probe_slot.set(probe.clone());

    // Emits another event from inside a listener.
    let done: ListenerRef<u32> = {
        let emitter = emitter.clone();
        ListenerFn::arc("done", move |round: Arc<u32>| {
            let emitter = emitter.clone();
            async move {
                println!("[done] round {round}");
                if *round > 1 {
                    emitter.emit_arc("audit", round).await?;
                }
                Ok::<_, ListenerError>(())
            }
        })
    };

    emitter
        .once("job", bootstrap)?
        .on("job", probe)?
        .on("job", done)?
        .on("audit", printer("audit"))?;

    for round in 1..=2 {
        println!("--- emit job, round {round}");
        emitter.emit("job", round).await?;
    }

    let names: Vec<_> = emitter
        .listeners("job")
        .iter()
        .map(|e| format!("{}({})", e.name(), e.mode().as_label()))
        .collect();
    println!("job listeners: {names:?}");
    Ok(())
}
