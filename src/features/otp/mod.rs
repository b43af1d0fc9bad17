//! OTP entry feature: the headless form state machine, the wire types, and
//! the verification call. The form module carries all the interaction rules
//! and runs on any target; the client is browser-only.

#[cfg(target_arch = "wasm32")]
pub mod client;
pub mod form;
pub mod types;
