//! # printmon-app
//!
//! Application layer — the two actors and the **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `PrinterController` — fetch the printer and job status documents
//!   - `StreamProbe` — check whether the camera stream answers
//! - Run the **poller**: fetch on a timer, normalize into a snapshot, detect
//!   offline edges, notify the presenter
//! - Run the **presenter**: keep the last snapshot and camera reachability,
//!   re-render the widget, publish frames to readers
//! - Provide the in-process **message bus** connecting the two actors
//! - Own the **lifecycle** (`Monitor`): spawn both actors, shut them down
//!
//! ## Dependency rule
//! Depends on `printmon-domain` only (plus `tokio` for tasks, timers and
//! channels). Never imports adapter crates.

pub mod message_bus;
pub mod monitor;
pub mod poller;
pub mod ports;
pub mod presenter;
