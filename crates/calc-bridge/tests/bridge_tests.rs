use calc_bridge::messages::*;
use calc_bridge::*;
use serde_json::{json, Value};
use shape_types::{ShapeCategory, ShapeFamily, ValueMap};

// ── Helper functions ─────────────────────────────────────────────────────

fn select(state: &mut EngineState, shape: &str) -> EngineToUi {
    dispatch(
        state,
        UiToEngine::SelectShape {
            shape: shape.to_string(),
        },
    )
}

fn edit(state: &mut EngineState, key: &str, value: &str) -> EngineToUi {
    dispatch(
        state,
        UiToEngine::EditField {
            key: key.to_string(),
            value: value.to_string(),
        },
    )
}

fn field_text(response: &EngineToUi, key: &str) -> String {
    match response {
        EngineToUi::FieldsUpdated { fields, .. } => fields
            .iter()
            .find(|f| f.key == key)
            .map(|f| f.text.clone())
            .unwrap_or_else(|| panic!("no field {key}")),
        other => panic!("expected FieldsUpdated, got {other:?}"),
    }
}

fn error_message(response: &EngineToUi) -> &str {
    match response {
        EngineToUi::Error { message } => message,
        other => panic!("expected Error, got {other:?}"),
    }
}

// ── Catalog ──────────────────────────────────────────────────────────────

#[test]
fn list_shapes_covers_every_family() {
    let mut state = EngineState::new();
    let response = dispatch(&mut state, UiToEngine::ListShapes);
    let EngineToUi::ShapeList { shapes } = response else {
        panic!("expected ShapeList");
    };
    assert_eq!(shapes.len(), ShapeFamily::ALL.len());

    let circle = shapes
        .iter()
        .find(|s| s.shape == ShapeFamily::Circle)
        .unwrap();
    assert_eq!(circle.category, ShapeCategory::Plane);
    let keys: Vec<_> = circle.fields.iter().map(|f| f.key.as_str()).collect();
    assert_eq!(keys, ["r", "d", "luas", "kel"]);
}

// ── Calculator flow ──────────────────────────────────────────────────────

#[test]
fn select_then_edit_fills_derived_fields() {
    let mut state = EngineState::new();
    let opened = select(&mut state, "persegi-panjang");
    assert_eq!(field_text(&opened, "luas"), "");

    edit(&mut state, "p", "5");
    let response = edit(&mut state, "l", "3");
    assert_eq!(field_text(&response, "luas"), "15");
    assert_eq!(field_text(&response, "kel"), "16");
}

#[test]
fn clear_input_empties_fields() {
    let mut state = EngineState::new();
    select(&mut state, "persegi");
    edit(&mut state, "s", "4");
    let response = dispatch(&mut state, UiToEngine::ClearInput);
    let EngineToUi::FieldsUpdated { shape, fields } = response else {
        panic!("expected FieldsUpdated");
    };
    assert_eq!(shape, ShapeFamily::Square);
    assert!(fields.iter().all(|f| f.text.is_empty() && !f.manual));
}

#[test]
fn edit_without_selection_is_an_error() {
    let mut state = EngineState::new();
    let response = edit(&mut state, "s", "4");
    assert_eq!(error_message(&response), "no shape selected");
}

#[test]
fn edit_of_foreign_field_is_an_error() {
    let mut state = EngineState::new();
    select(&mut state, "persegi");
    let response = edit(&mut state, "r", "4");
    assert!(error_message(&response).contains("has no field"));
}

#[test]
fn select_of_unknown_shape_is_an_error() {
    let mut state = EngineState::new();
    let response = select(&mut state, "segi-tujuh");
    assert!(error_message(&response).contains("unknown shape: segi-tujuh"));
}

// ── Stateless solve ──────────────────────────────────────────────────────

#[test]
fn solve_reports_values_and_passes() {
    let mut state = EngineState::new();
    let known: ValueMap = [("a", 3.0), ("b", 4.0)].into_iter().collect();
    let response = dispatch(
        &mut state,
        UiToEngine::Solve {
            shape: "pythagoras".to_string(),
            known,
            preferred_key: None,
        },
    );
    let EngineToUi::Solved {
        values,
        passes,
        converged,
    } = response
    else {
        panic!("expected Solved");
    };
    assert_eq!(values.get("c"), Some(5.0));
    assert!(converged);
    assert_eq!(passes, 2);
    assert!(state.session.is_none());
}

#[test]
fn solve_of_unknown_shape_is_an_error() {
    let mut state = EngineState::new();
    let response = dispatch(
        &mut state,
        UiToEngine::Solve {
            shape: "segi-tujuh".to_string(),
            known: ValueMap::new(),
            preferred_key: None,
        },
    );
    assert!(error_message(&response).contains("unknown shape"));
}

// ── JSON surface ─────────────────────────────────────────────────────────

#[test]
fn json_round_trip_through_process_json() {
    let mut state = EngineState::new();
    let out = process_json(&mut state, r#"{"type":"SelectShape","shape":"lingkaran"}"#);
    let v: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v["type"], "FieldsUpdated");
    assert_eq!(v["shape"], "lingkaran");

    let out = process_json(&mut state, r#"{"type":"EditField","key":"d","value":"10"}"#);
    let v: Value = serde_json::from_str(&out).unwrap();
    let r = v["fields"]
        .as_array()
        .unwrap()
        .iter()
        .find(|f| f["key"] == "r")
        .unwrap();
    assert_eq!(r["text"], "5");
    assert_eq!(r["manual"], false);
}

#[test]
fn json_solve_with_unit_hint() {
    let mut state = EngineState::new();
    let out = process_json(
        &mut state,
        &json!({
            "type": "Solve",
            "shape": "konversi-satuan",
            "known": { "km": 1.0, "m": 5.0 },
            "preferred_key": "m",
        })
        .to_string(),
    );
    let v: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v["type"], "Solved");
    assert_eq!(v["values"]["km"], 1.0);
    let dm = v["values"]["dm"].as_f64().unwrap();
    assert!((dm - 50.0).abs() < 1e-9, "dm = {dm}");
}

#[test]
fn json_solve_drops_negative_known_values() {
    let mut state = EngineState::new();
    let out = process_json(
        &mut state,
        r#"{"type":"Solve","shape":"persegi","known":{"s":-2}}"#,
    );
    let v: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v["type"], "Solved");
    assert_eq!(v["values"], json!({}));
}

#[test]
fn malformed_json_becomes_error_response() {
    let mut state = EngineState::new();
    let out = process_json(&mut state, "{not json");
    let v: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v["type"], "Error");
    assert!(v["message"]
        .as_str()
        .unwrap()
        .starts_with("serialization error:"));
}

#[test]
fn dispatch_json_serializes_catalog() {
    let mut state = EngineState::new();
    let out = dispatch_json(&mut state, UiToEngine::ListShapes);
    let v: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v["type"], "ShapeList");
    assert_eq!(v["shapes"].as_array().unwrap().len(), ShapeFamily::ALL.len());
    assert_eq!(v["shapes"][0]["shape"], "persegi");
}

#[test]
fn dispatch_json_reports_failures_as_error_objects() {
    let mut state = EngineState::new();
    let out = dispatch_json(&mut state, UiToEngine::ClearInput);
    let v: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v["type"], "Error");
    assert_eq!(v["message"], "no shape selected");
}

#[test]
fn unknown_message_type_becomes_error_response() {
    let mut state = EngineState::new();
    let out = process_json(&mut state, r#"{"type":"ExportStep"}"#);
    let v: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v["type"], "Error");
}
