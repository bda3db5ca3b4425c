//! JSON message bridge between a calculator UI and the shape solver.

pub mod dispatch;
pub mod engine_state;
pub mod messages;

#[cfg(target_arch = "wasm32")]
pub mod wasm_api;

pub use dispatch::{dispatch, dispatch_json, process_json};
pub use engine_state::{BridgeError, EngineState};
