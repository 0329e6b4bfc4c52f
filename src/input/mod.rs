//! Terminal input module.
//!
//! Maps `crossterm` key events one-to-one onto session intents and lifecycle
//! controls. The mapper is stateless; gating (intents dropped while the
//! session is not running) lives in the session itself, so stray events
//! against an idle session are harmless no-ops.

pub mod map;

pub use map::{control_for_key, intent_for_key, should_quit, ControlEvent};
