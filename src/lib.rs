//! One-time password verification front-end.
//!
//! The crate splits into a browser-only shell (app, components, routes) and
//! core modules that compile on any target (form state, wire types,
//! configuration, errors, HTTP helpers), so the interaction rules and the
//! error-body contract stay testable without a browser. The HTTP transport
//! itself only runs in the browser; its URL and error mapping is plain Rust.

#[cfg(target_arch = "wasm32")]
pub mod app;
#[path = "lib/mod.rs"]
pub mod app_lib;
#[cfg(target_arch = "wasm32")]
pub mod components;
pub mod features;
#[cfg(target_arch = "wasm32")]
pub mod routes;
