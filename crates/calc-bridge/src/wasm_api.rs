//! WASM entry points for the web worker.
//!
//! This module is only compiled for the `wasm32` target. It provides the
//! `#[wasm_bindgen]` functions that JavaScript calls from the web worker.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::dispatch;
use crate::engine_state::EngineState;
use crate::messages::UiToEngine;

// Single-threaded in the web worker.
thread_local! {
    static ENGINE_STATE: RefCell<Option<EngineState>> = RefCell::new(None);
}

/// Initialize the engine. Calling it again resets all state.
#[wasm_bindgen]
pub fn init() {
    console_error_panic_hook::set_once();

    ENGINE_STATE.with(|cell| {
        *cell.borrow_mut() = Some(EngineState::new());
    });
}

/// Process a JSON `UiToEngine` message and return a JSON `EngineToUi`
/// response. Initializes the engine on first use if `init` was skipped.
#[wasm_bindgen]
pub fn process_message(json_input: &str) -> String {
    ENGINE_STATE.with(|cell| {
        let mut engine = cell.borrow_mut();
        let state = engine.get_or_insert_with(EngineState::new);
        dispatch::process_json(state, json_input)
    })
}

/// The topic catalog as JSON, for populating menus without a round trip
/// through `process_message`.
#[wasm_bindgen]
pub fn list_shapes() -> String {
    ENGINE_STATE.with(|cell| {
        let mut engine = cell.borrow_mut();
        let state = engine.get_or_insert_with(EngineState::new);
        dispatch::dispatch_json(state, UiToEngine::ListShapes)
    })
}
