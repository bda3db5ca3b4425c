use calc_session::{CalculatorSession, SessionError};
use shape_solver::solve_with_config;
use shape_types::ShapeFamily;
use tracing::{debug, warn};

use crate::engine_state::{BridgeError, EngineState};
use crate::messages::{EngineToUi, ShapeInfo, UiToEngine};

/// Dispatch a UI message to the engine and return a response.
///
/// Failures never escape: they come back as an `Error` response.
pub fn dispatch(state: &mut EngineState, msg: UiToEngine) -> EngineToUi {
    match handle_message(state, msg) {
        Ok(response) => response,
        Err(e) => {
            warn!(error = %e, "message rejected");
            EngineToUi::Error {
                message: e.to_string(),
            }
        }
    }
}

/// Parse a JSON `UiToEngine`, dispatch it, and serialize the response.
pub fn process_json(state: &mut EngineState, json_input: &str) -> String {
    match parse_message(json_input) {
        Ok(msg) => dispatch_json(state, msg),
        Err(e) => to_json(&EngineToUi::Error {
            message: e.to_string(),
        }),
    }
}

/// Dispatch `msg` and serialize the response. The result is always a JSON
/// `EngineToUi` object the UI can parse.
pub fn dispatch_json(state: &mut EngineState, msg: UiToEngine) -> String {
    to_json(&dispatch(state, msg))
}

fn to_json(response: &EngineToUi) -> String {
    serde_json::to_string(response).unwrap_or_else(|e| {
        serde_json::json!({
            "type": "Error",
            "message": format!("serialization failed: {e}"),
        })
        .to_string()
    })
}

fn parse_message(json_input: &str) -> Result<UiToEngine, BridgeError> {
    serde_json::from_str(json_input).map_err(|e| BridgeError::Serialization {
        reason: e.to_string(),
    })
}

fn handle_message(state: &mut EngineState, msg: UiToEngine) -> Result<EngineToUi, BridgeError> {
    debug!(?msg, "dispatch");
    match msg {
        // -- Catalog --
        UiToEngine::ListShapes => Ok(EngineToUi::ShapeList {
            shapes: ShapeFamily::ALL.into_iter().map(ShapeInfo::from).collect(),
        }),

        UiToEngine::SelectShape { shape } => {
            let session = state.select_shape(&shape)?;
            Ok(fields_updated(session))
        }

        // -- Calculator input --
        UiToEngine::EditField { key, value } => {
            let session = state.active_mut()?;
            session.edit(&key, &value)?;
            Ok(fields_updated(session))
        }

        UiToEngine::ClearInput => {
            let session = state.active_mut()?;
            session.clear();
            Ok(fields_updated(session))
        }

        // -- Stateless --
        UiToEngine::Solve {
            shape,
            known,
            preferred_key,
        } => {
            let shape: ShapeFamily = shape.parse().map_err(SessionError::from)?;
            let report = solve_with_config(
                shape,
                &known,
                preferred_key.as_deref(),
                &state.solver_config,
            );
            Ok(EngineToUi::Solved {
                values: report.values,
                passes: report.passes,
                converged: report.converged,
            })
        }
    }
}

/// Build a FieldsUpdated response from the open calculator.
fn fields_updated(session: &CalculatorSession) -> EngineToUi {
    EngineToUi::FieldsUpdated {
        shape: session.shape(),
        fields: session.fields(),
    }
}
