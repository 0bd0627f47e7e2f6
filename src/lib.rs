//! # Order Desk
//!
//! > **A single-screen order-entry widget, driven by an actor.**
//!
//! A staff member sets the customer's name, picks menu items with a quantity,
//! adds them to a running order, removes lines, and reads the total.
//!
//! ## 🏗️ Design Philosophy
//!
//! The whole widget is one piece of state. It lives inside a single
//! [`StateActor`](framework::StateActor) task, and every user gesture is a typed
//! event processed to completion before the next one. No locks, no shared
//! mutable state, no background work.
//!
//! Bad input is corrected rather than rejected: blank names are ignored,
//! nonsense quantities become 1, removing a missing line does nothing.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic `StateActor<T>` loop and its `StateClient<T>`.
//! - **Key items**: [`ActorEntity`](framework::ActorEntity), [`StateActor`](framework::StateActor).
//!
//! ### 2. The Data ([`model`])
//! Menu items, the category index, the pending selection, order lines.
//!
//! ### 3. The Widget ([`desk_actor`], [`view`])
//! [`OrderDesk`](desk_actor::OrderDesk) owns the state and handles
//! [`DeskEvent`](desk_actor::DeskEvent)s; [`DeskView`](view::DeskView) is what it looks like.
//!
//! ### 4. The Interface ([`clients`])
//! - **Key items**: [`DeskClient`](clients::DeskClient).
//!
//! ### 5. The Orchestrator ([`lifecycle`])
//! Config, tracing, and [`DeskSystem`](lifecycle::DeskSystem) start/shutdown.
//!
//! ### 6. The Front End ([`terminal`])
//! Line commands in, redrawn screen out.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Built-in menu
//! cargo run
//!
//! # Custom menu, logs to a file
//! RUST_LOG=info cargo run -- --menu menu.json 2> desk.log
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod clients;
pub mod desk_actor;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod terminal;
pub mod view;
