//! # Example: basic
//!
//! Minimal tour of the emitter: persistent, fire-once and prepended listeners,
//! removal, and the per-event cap.
//!
//! ## Flow
//! ```text
//! emit("order.placed", 1)
//!     ├─► welcome (prepended, once)
//!     ├─► audit
//!     └─► invoice
//! emit("order.placed", 2)
//!     ├─► welcome (spent, skipped)
//!     ├─► audit
//!     └─► invoice
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example basic
//! ```

use std::sync::Arc;
use std::time::Duration;

use seqemit::{EmitterError, EventEmitter, ListenerError, ListenerFn, ListenerRef};

#[derive(Debug)]
struct Order {
    id: u64,
    total_cents: u64,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Emitter with the default cap (10 listeners per event)
    let emitter: EventEmitter<Order> = EventEmitter::new();

    // 2. Listeners are async; each is awaited before the next one starts
    let audit: ListenerRef<Order> = ListenerFn::arc("audit", |order: Arc<Order>| async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        println!("[audit] order #{} recorded", order.id);
        Ok::<_, ListenerError>(())
    });
    let invoice: ListenerRef<Order> = ListenerFn::arc("invoice", |order: Arc<Order>| async move {
        println!(
            "[invoice] order #{}: {}.{:02}",
            order.id,
            order.total_cents / 100,
            order.total_cents % 100
        );
        Ok::<_, ListenerError>(())
    });
    let welcome: ListenerRef<Order> = ListenerFn::arc("welcome", |order: Arc<Order>| async move {
        println!("[welcome] first order seen: #{}", order.id);
        Ok::<_, ListenerError>(())
    });

    // 3. Register (calls chain on success)
    emitter
        .on("order.placed", audit.clone())?
        .on("order.placed", invoice.clone())?
        .prepend_once_listener("order.placed", welcome)?;
    println!("events: {:?}", emitter.event_names());
    println!("listeners: {}", emitter.listener_count("order.placed"));

    // 4. Dispatch
    emitter
        .emit("order.placed", Order { id: 1, total_cents: 1999 })
        .await?;
    emitter
        .emit("order.placed", Order { id: 2, total_cents: 450 })
        .await?;

    // 5. Removal is by identity
    emitter.off("order.placed", &invoice);
    emitter
        .emit("order.placed", Order { id: 3, total_cents: 100 })
        .await?;

    // 6. Cap: lowering it keeps existing listeners but refuses new ones
    emitter.set_max_listeners(2)?;
    match emitter.on("order.placed", invoice) {
        Err(EmitterError::CapacityExceeded { event, max }) => {
            println!("refused: {event} already holds {max} listeners");
        }
        Err(e) => return Err(e.into()),
        Ok(_) => println!("accepted"),
    }

    // 7. Forget the event entirely
    emitter.remove_all_listeners("order.placed");
    println!("events after clear: {:?}", emitter.event_names());
    Ok(())
}
