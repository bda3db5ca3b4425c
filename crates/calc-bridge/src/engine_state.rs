use calc_session::{CalculatorSession, DisplayFormat, SessionError};
use shape_solver::SolverConfig;
use shape_types::ShapeFamily;

/// The engine state wrapper for the bridge.
///
/// Holds the open calculator, if any, and the settings used for solving and
/// display.
#[derive(Debug, Default)]
pub struct EngineState {
    /// The calculator the user is currently filling in.
    pub session: Option<CalculatorSession>,
    /// Settings for stateless solves.
    pub solver_config: SolverConfig,
    /// Rendering of derived values in new calculators.
    pub format: DisplayFormat,
}

impl EngineState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the calculator for `shape_id`, discarding whatever was typed
    /// into the previous one.
    pub fn select_shape(&mut self, shape_id: &str) -> Result<&CalculatorSession, BridgeError> {
        let shape: ShapeFamily = shape_id.parse().map_err(SessionError::from)?;
        let session = match self.session.take() {
            Some(mut session) => {
                session.select(shape);
                session
            }
            None => CalculatorSession::with_format(shape, self.format),
        };
        Ok(self.session.insert(session))
    }

    pub fn active(&self) -> Result<&CalculatorSession, BridgeError> {
        self.session.as_ref().ok_or(BridgeError::NoActiveShape)
    }

    pub fn active_mut(&mut self) -> Result<&mut CalculatorSession, BridgeError> {
        self.session.as_mut().ok_or(BridgeError::NoActiveShape)
    }
}

/// Errors from the bridge layer.
#[derive(Debug, Clone, thiserror::Error)]
pub enum BridgeError {
    #[error("no shape selected")]
    NoActiveShape,

    #[error("session error: {0}")]
    Session(#[from] SessionError),

    #[error("serialization error: {reason}")]
    Serialization { reason: String },
}
