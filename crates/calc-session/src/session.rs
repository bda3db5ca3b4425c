use shape_solver::solve;
use shape_types::{ManualFlags, ShapeFamily, ValueMap};
use tracing::debug;

use crate::format::{clean_input, parse_number, DisplayFormat};
use crate::types::{DisplayValues, FieldState, SessionError};

/// Recompute the displayed text of every field of `shape`.
///
/// Manual fields keep the exact text the user typed. Every other field shows
/// the formatted derived value, or nothing if it cannot be derived from the
/// manual ones. `active_key` is the field edited last.
pub fn recompute_display_values(
    shape: ShapeFamily,
    texts: &DisplayValues,
    manual: &ManualFlags,
    active_key: Option<&str>,
    format: &DisplayFormat,
) -> DisplayValues {
    let seeds: ValueMap = shape
        .fields()
        .iter()
        .filter(|field| manual.contains(field.key))
        .filter_map(|field| {
            let value = parse_number(texts.get(field.key)?)?;
            Some((field.key, value))
        })
        .collect();

    let solved = solve(shape, &seeds, active_key);

    shape
        .fields()
        .iter()
        .map(|field| {
            let text = if manual.contains(field.key) {
                texts.get(field.key).cloned().unwrap_or_default()
            } else {
                solved
                    .get(field.key)
                    .map(|v| format.format(v))
                    .unwrap_or_default()
            };
            (field.key.to_string(), text)
        })
        .collect()
}

/// One open calculator: the selected topic, the text in each field, and which
/// fields the user typed.
#[derive(Debug, Clone)]
pub struct CalculatorSession {
    shape: ShapeFamily,
    texts: DisplayValues,
    manual: ManualFlags,
    format: DisplayFormat,
}

impl CalculatorSession {
    /// Open an empty calculator for `shape`.
    pub fn new(shape: ShapeFamily) -> Self {
        Self::with_format(shape, DisplayFormat::default())
    }

    pub fn with_format(shape: ShapeFamily, format: DisplayFormat) -> Self {
        Self {
            shape,
            texts: empty_texts(shape),
            manual: ManualFlags::new(),
            format,
        }
    }

    /// Open a calculator by catalog id.
    pub fn open(shape_id: &str) -> Result<Self, SessionError> {
        Ok(Self::new(shape_id.parse()?))
    }

    pub fn shape(&self) -> ShapeFamily {
        self.shape
    }

    /// Switch topic. Everything typed so far is discarded.
    pub fn select(&mut self, shape: ShapeFamily) {
        debug!(from = %self.shape, to = %shape, "select shape");
        self.shape = shape;
        self.clear();
    }

    /// Empty every field and forget all manual flags.
    pub fn clear(&mut self) {
        self.texts = empty_texts(self.shape);
        self.manual.clear();
    }

    /// Apply a keystroke-level edit to `key` and recompute every other field.
    ///
    /// Non-empty text marks the field manual; empty text releases it back to
    /// the solver. On the length-unit ladder only the edited unit stays
    /// manual, so the others are all converted from it.
    pub fn edit(&mut self, key: &str, raw: &str) -> Result<&DisplayValues, SessionError> {
        if !self.shape.has_field(key) {
            return Err(SessionError::UnknownField {
                shape: self.shape,
                key: key.to_string(),
            });
        }

        let text = clean_input(raw);
        if text.is_empty() {
            self.manual.unmark(key);
        } else {
            if self.shape == ShapeFamily::LengthUnits {
                self.manual.clear();
            }
            self.manual.mark(key);
        }
        self.texts.insert(key.to_string(), text);

        self.texts = recompute_display_values(
            self.shape,
            &self.texts,
            &self.manual,
            Some(key),
            &self.format,
        );
        debug!(shape = %self.shape, key, manual = self.manual.len(), "field edited");
        Ok(&self.texts)
    }

    /// Displayed text of one field.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.texts.get(key).map(String::as_str)
    }

    pub fn texts(&self) -> &DisplayValues {
        &self.texts
    }

    pub fn manual(&self) -> &ManualFlags {
        &self.manual
    }

    /// Current numeric value of every field that shows one.
    pub fn values(&self) -> ValueMap {
        self.texts
            .iter()
            .filter_map(|(key, text)| Some((key.as_str(), parse_number(text)?)))
            .collect()
    }

    /// Display state of every field, in schema order.
    pub fn fields(&self) -> Vec<FieldState> {
        self.shape
            .fields()
            .iter()
            .map(|field| FieldState {
                key: field.key.to_string(),
                label: field.label.to_string(),
                text: self.text(field.key).unwrap_or_default().to_string(),
                manual: self.manual.contains(field.key),
            })
            .collect()
    }
}

fn empty_texts(shape: ShapeFamily) -> DisplayValues {
    shape
        .fields()
        .iter()
        .map(|field| (field.key.to_string(), String::new()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_has_empty_fields() {
        let session = CalculatorSession::new(ShapeFamily::Circle);
        let fields = session.fields();
        assert_eq!(fields.len(), ShapeFamily::Circle.fields().len());
        assert!(fields.iter().all(|f| f.text.is_empty() && !f.manual));
    }

    #[test]
    fn edit_derives_other_fields() {
        let mut session = CalculatorSession::new(ShapeFamily::Square);
        session.edit("s", "4").unwrap();
        assert_eq!(session.text("luas"), Some("16"));
        assert_eq!(session.text("kel"), Some("16"));
        assert!(session.manual().contains("s"));
        assert!(!session.manual().contains("luas"));
    }

    #[test]
    fn manual_text_is_kept_verbatim() {
        let mut session = CalculatorSession::new(ShapeFamily::Square);
        session.edit("s", "2,50").unwrap();
        assert_eq!(session.text("s"), Some("2.50"));
        assert_eq!(session.text("luas"), Some("6.25"));
    }

    #[test]
    fn clearing_a_field_releases_it() {
        let mut session = CalculatorSession::new(ShapeFamily::Square);
        session.edit("s", "3").unwrap();
        session.edit("s", "").unwrap();
        assert!(session.manual().is_empty());
        assert!(session.texts().values().all(String::is_empty));
    }

    #[test]
    fn unknown_field_is_rejected() {
        let mut session = CalculatorSession::new(ShapeFamily::Square);
        let err = session.edit("r", "1").unwrap_err();
        assert_eq!(
            err,
            SessionError::UnknownField {
                shape: ShapeFamily::Square,
                key: "r".to_string()
            }
        );
    }

    #[test]
    fn select_resets_state() {
        let mut session = CalculatorSession::new(ShapeFamily::Square);
        session.edit("s", "3").unwrap();
        session.select(ShapeFamily::Cube);
        assert_eq!(session.shape(), ShapeFamily::Cube);
        assert!(session.manual().is_empty());
        assert!(session.values().is_empty());
    }

    #[test]
    fn open_by_unknown_id_fails() {
        assert!(matches!(
            CalculatorSession::open("segi-tujuh"),
            Err(SessionError::UnknownShape(_))
        ));
    }
}
