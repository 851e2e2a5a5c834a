//! Core library for Recetas 80/20, a recipe-request wizard backed by a
//! remote text-generation webhook.

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Remote calls: generation webhook client and lead notification.
pub mod generation;
/// Recipe pipeline: forms, prompt, parser, fallback, orchestration.
pub mod recipe;
/// HTTP server and API routes.
pub mod server;
/// Entry helpers to start the server.
pub mod start_recetas_server;
/// Wizard screen-flow state machine.
pub mod wizard;
