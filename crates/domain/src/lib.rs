//! # printmon-domain
//!
//! Pure domain model for the printmon printer dashboard.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, timestamps
//! - Define the **monitor configuration** shared by the poller and presenter
//! - Define the typed shape of the two controller status documents
//!   (`/api/printer`, `/api/job`) with lenient, fully-defaulted parsing
//! - Define the normalized **printer snapshot** produced each poll cycle
//! - Track **online/offline edges** across poll cycles
//! - Format values for display and **render the widget** from a snapshot
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod time;

pub mod config;
pub mod format;
pub mod online;
pub mod snapshot;
pub mod status;
pub mod widget;
