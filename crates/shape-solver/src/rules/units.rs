//! Length-unit ladder, km down to mm.

use shape_types::LENGTH_UNITS as UNIT_KEYS;

use super::{Pass, Rule};

pub const LENGTH_UNITS: &[Rule] = &[length_ladder];

/// Meters per unit, in ladder order.
const METERS_PER_UNIT: [(&str, f64); 7] = [
    ("km", 1000.0),
    ("hm", 100.0),
    ("dam", 10.0),
    ("m", 1.0),
    ("dm", 0.1),
    ("cm", 0.01),
    ("mm", 0.001),
];

pub fn meters_per_unit(unit: &str) -> Option<f64> {
    METERS_PER_UNIT
        .iter()
        .find(|(key, _)| *key == unit)
        .map(|(_, factor)| *factor)
}

/// The unit every other unit is converted from: the preferred key when it is
/// a known unit, otherwise the first known unit in ladder order.
fn source_unit(v: &Pass) -> Option<&'static str> {
    if let Some(preferred) = v.preferred_key() {
        if let Some(unit) = UNIT_KEYS.iter().find(|u| **u == preferred) {
            if v.has(unit) {
                return Some(*unit);
            }
        }
    }
    UNIT_KEYS.iter().copied().find(|unit| v.has(unit))
}

fn length_ladder(v: &mut Pass) {
    let Some(source) = source_unit(v) else {
        return;
    };
    let (Some(value), Some(factor)) = (v.get(source), meters_per_unit(source)) else {
        return;
    };
    let meters = value * factor;
    for (unit, unit_factor) in METERS_PER_UNIT {
        if unit != source {
            v.set(unit, meters / unit_factor);
        }
    }
}
