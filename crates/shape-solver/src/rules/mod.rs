//! Per-family inference rules.
//!
//! Each family owns an ordered list of directional rules of the form
//! "if these fields are known, derive that one". Rules never overwrite a
//! known field and never store a non-finite or negative value; both checks
//! live in [`Pass::set`] so individual rules only state the relation and
//! guard their divisors.

use shape_types::{ShapeFamily, ValueMap};
use tracing::trace;

pub mod basic;
pub mod plane;
pub mod polygon;
pub mod solids;
pub mod units;

/// A single inference rule. Reads known fields from the pass and may write
/// any number of new ones.
pub type Rule = fn(&mut Pass<'_>);

/// Write access to the working values during one sweep over a rule list.
pub struct Pass<'a> {
    values: &'a mut ValueMap,
    preferred_key: Option<&'a str>,
    writes: usize,
}

impl<'a> Pass<'a> {
    pub fn new(values: &'a mut ValueMap, preferred_key: Option<&'a str>) -> Self {
        Self {
            values,
            preferred_key,
            writes: 0,
        }
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.values.get(key)
    }

    pub fn has(&self, key: &str) -> bool {
        self.values.contains(key)
    }

    /// All of `keys`, or `None` if any is unknown.
    pub fn all<const N: usize>(&self, keys: [&str; N]) -> Option<[f64; N]> {
        let mut out = [0.0; N];
        for (slot, key) in out.iter_mut().zip(keys) {
            *slot = self.values.get(key)?;
        }
        Some(out)
    }

    /// The field the caller last edited, if any.
    pub fn preferred_key(&self) -> Option<&str> {
        self.preferred_key
    }

    /// Record `value` for `key` unless the key is already known or the value
    /// is not a finite non-negative number.
    pub fn set(&mut self, key: &str, value: f64) {
        if self.values.insert_if_absent(key, value) {
            trace!(key, value, "derived");
            self.writes += 1;
        }
    }

    /// Number of fields written so far in this pass.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

/// The ordered rule list for `family`.
pub fn rules_for(family: ShapeFamily) -> &'static [Rule] {
    match family {
        ShapeFamily::Square => plane::SQUARE,
        ShapeFamily::Rectangle => plane::RECTANGLE,
        ShapeFamily::Triangle => plane::TRIANGLE,
        ShapeFamily::Circle => plane::CIRCLE,
        ShapeFamily::Parallelogram => plane::PARALLELOGRAM,
        ShapeFamily::Trapezoid => plane::TRAPEZOID,
        ShapeFamily::Rhombus => plane::RHOMBUS,
        ShapeFamily::Kite => plane::KITE,
        ShapeFamily::Pentagon => polygon::PENTAGON,
        ShapeFamily::Hexagon => polygon::HEXAGON,
        ShapeFamily::RegularPolygon => polygon::N_GON,
        ShapeFamily::Cube => solids::CUBE,
        ShapeFamily::Box => solids::BOX,
        ShapeFamily::TriangularPrism => solids::TRIANGULAR_PRISM,
        ShapeFamily::SquarePyramid => solids::SQUARE_PYRAMID,
        ShapeFamily::Cylinder => solids::CYLINDER,
        ShapeFamily::Cone => solids::CONE,
        ShapeFamily::Sphere => solids::SPHERE,
        ShapeFamily::Pythagoras => basic::PYTHAGORAS,
        ShapeFamily::SpeedDistanceTime => basic::SPEED_DISTANCE_TIME,
        ShapeFamily::Percentage => basic::PERCENTAGE,
        ShapeFamily::Average => basic::AVERAGE,
        ShapeFamily::Scale => basic::SCALE,
        ShapeFamily::GcfLcm => basic::GCF_LCM,
        ShapeFamily::Fraction => basic::FRACTION,
        ShapeFamily::FlowRate => basic::FLOW_RATE,
        ShapeFamily::LengthUnits => units::LENGTH_UNITS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_skips_known_and_invalid_values() {
        let mut values: ValueMap = [("s", 4.0)].into_iter().collect();
        let mut pass = Pass::new(&mut values, None);
        pass.set("s", 5.0);
        pass.set("luas", f64::NAN);
        pass.set("kel", -1.0);
        pass.set("luas", 16.0);
        assert_eq!(pass.writes(), 1);
        assert_eq!(values.get("s"), Some(4.0));
        assert_eq!(values.get("luas"), Some(16.0));
        assert!(!values.contains("kel"));
    }

    #[test]
    fn all_requires_every_key() {
        let mut values: ValueMap = [("p", 4.0), ("l", 3.0)].into_iter().collect();
        let pass = Pass::new(&mut values, None);
        assert_eq!(pass.all(["p", "l"]), Some([4.0, 3.0]));
        assert_eq!(pass.all(["p", "t"]), None);
    }

    #[test]
    fn every_family_has_rules() {
        for family in ShapeFamily::ALL {
            assert!(!rules_for(family).is_empty(), "{family} has no rules");
        }
    }
}
