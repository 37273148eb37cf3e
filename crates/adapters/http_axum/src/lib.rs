//! # printmon-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **printer widget** as a server-side-rendered HTML page that
//!   works with **zero JavaScript**: `<meta http-equiv="refresh">` reloads it
//!   at the poll interval
//! - Serve the current **frame as JSON** for programmatic access
//! - Serve the widget's static assets (stylesheet, stream placeholder)
//!
//! The adapter only reads frames published by the presenter; it never talks
//! to the poller or the controller.
//!
//! ## Dependency rule
//! Depends on `printmon-app` (for the `Frame` type) and `printmon-domain`
//! (for the widget tree). Never leaks axum types into the domain.

pub mod api;
pub mod assets;
pub mod dashboard;
pub mod router;
pub mod state;
