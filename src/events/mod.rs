//! Event types used by the engine.
//!
//! Submodules:
//! - [`keyboard`] – platform key transitions and the global key-down/key-up
//!   signals observed by tracked keys
pub mod keyboard;
