//! # Observability & Tracing
//!
//! This module provides the tracing setup for the order desk.
//!
//! ## Configuration
//!
//! [`setup_tracing`] installs a compact `fmt` subscriber filtered by `RUST_LOG`.
//! Module paths are hidden (`with_target(false)`); the actor tags its lines with
//! `entity_type` instead.
//!
//! Logs are written to **stderr**. The terminal session redraws the widget on
//! stdout, so the two streams can be separated:
//!
//! ```bash
//! RUST_LOG=info cargo run 2> desk.log
//! ```
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: `Actor started`, `Menu loaded`, `Shutdown`
//! - **Events**: every dispatched [`DeskEvent`](crate::desk_actor::DeskEvent) at `debug`,
//!   its [`DeskOutcome`](crate::desk_actor::DeskOutcome) at `info`
//! - **Client calls**: one span per `DeskClient` method
//!
//! **With `RUST_LOG=info`**:
//!
//! ```text
//! INFO Actor started entity_type="OrderDesk"
//! INFO Menu loaded items=2 categories=2
//! INFO select_item: Event applied entity_type="OrderDesk" outcome=SelectionChanged(Some(ItemKey { name: "Beer", category: "Beer" }))
//! INFO add_to_order: Event applied entity_type="OrderDesk" outcome=LineAdded(LineId(1))
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false) // Don't show module paths - we use entity_type instead
        .compact() // Compact format shows spans inline (e.g., "add_to_order")
        .init();
}
