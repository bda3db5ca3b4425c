pub mod format;
pub mod session;
pub mod types;

pub use format::{clean_input, format_number, parse_number, DisplayFormat};
pub use session::{recompute_display_values, CalculatorSession};
pub use types::*;
