//! Shared frontend utilities for API access, configuration, errors, and build
//! metadata.
//!
//! The verification flow is a single round trip: the form assembles the
//! six-digit code and POSTs it to `otp/validate`; the service answers with a
//! human-readable `message` on both the success and failure paths. The code
//! itself is opaque to this crate; generation and checking live behind the
//! API. Centralizing the HTTP helpers keeps timeout and error behavior
//! consistent no matter where a request originates.

pub mod api;
pub mod build_info;
pub mod config;
pub mod errors;

pub use api::post_json;
pub use errors::AppError;
