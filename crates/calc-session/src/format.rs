//! Text boundary of the calculator: cleaning what the user types and
//! rendering what the solver derives.

/// Controls how derived numbers are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayFormat {
    /// Maximum number of decimal places shown.
    pub decimals: u32,
}

impl Default for DisplayFormat {
    fn default() -> Self {
        Self { decimals: 4 }
    }
}

impl DisplayFormat {
    /// Round to `decimals` places. Integers print without a decimal point and
    /// trailing zeros are dropped. Non-finite values render as empty text.
    pub fn format(&self, value: f64) -> String {
        if !value.is_finite() {
            return String::new();
        }
        let decimals = i32::try_from(self.decimals).unwrap_or(i32::MAX);
        let factor = 10f64.powi(decimals);
        let scaled = value * factor;
        // Scaling overflowed; a value that large has no fractional digits.
        let rounded = if scaled.is_finite() {
            scaled.round() / factor
        } else {
            value
        };
        // f64's Display is already the shortest exact form: no exponent and
        // no trailing zeros.
        let text = rounded.to_string();
        if text == "-0" {
            "0".to_string()
        } else {
            text
        }
    }
}

/// [`DisplayFormat::format`] with the default four decimals.
pub fn format_number(value: f64) -> String {
    DisplayFormat::default().format(value)
}

/// Normalize raw keyboard input into a plain decimal string: the first comma
/// becomes a decimal point, anything but digits and points is dropped, and
/// only the first point is kept.
pub fn clean_input(raw: &str) -> String {
    let normalized = raw.replacen(',', ".", 1);
    let mut out = String::with_capacity(normalized.len());
    let mut seen_point = false;
    for ch in normalized.chars() {
        match ch {
            '0'..='9' => out.push(ch),
            '.' if !seen_point => {
                seen_point = true;
                out.push(ch);
            }
            _ => {}
        }
    }
    out
}

/// Parse cleaned text. Empty, unparseable, non-finite and negative inputs
/// all mean "unknown".
pub fn parse_number(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    text.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}
