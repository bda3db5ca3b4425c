use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A supported geometry or arithmetic topic, each with its own field schema
/// and rule set. The set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ShapeFamily {
    // -- Plane figures --
    #[serde(rename = "persegi")]
    Square,
    #[serde(rename = "persegi-panjang")]
    Rectangle,
    #[serde(rename = "segitiga")]
    Triangle,
    #[serde(rename = "lingkaran")]
    Circle,
    #[serde(rename = "jajar-genjang")]
    Parallelogram,
    #[serde(rename = "trapesium")]
    Trapezoid,
    #[serde(rename = "belah-ketupat")]
    Rhombus,
    #[serde(rename = "layang-layang")]
    Kite,
    #[serde(rename = "segi-lima")]
    Pentagon,
    #[serde(rename = "segi-enam")]
    Hexagon,
    #[serde(rename = "segi-n")]
    RegularPolygon,

    // -- Solids --
    #[serde(rename = "kubus")]
    Cube,
    #[serde(rename = "balok")]
    Box,
    #[serde(rename = "prisma-segitiga")]
    TriangularPrism,
    #[serde(rename = "limas-segiempat")]
    SquarePyramid,
    #[serde(rename = "tabung")]
    Cylinder,
    #[serde(rename = "kerucut")]
    Cone,
    #[serde(rename = "bola")]
    Sphere,

    // -- Basic formulas --
    #[serde(rename = "pythagoras")]
    Pythagoras,
    #[serde(rename = "kecepatan-jarak-waktu")]
    SpeedDistanceTime,
    #[serde(rename = "persen")]
    Percentage,
    #[serde(rename = "rata-rata")]
    Average,
    #[serde(rename = "skala")]
    Scale,
    #[serde(rename = "fpb-kpk")]
    GcfLcm,
    #[serde(rename = "pecahan")]
    Fraction,
    #[serde(rename = "konversi-satuan")]
    LengthUnits,
    #[serde(rename = "debit")]
    FlowRate,
}

/// Catalog grouping a family belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeCategory {
    /// Two-dimensional figures (bangun datar).
    #[serde(rename = "bangun-datar")]
    Plane,
    /// Three-dimensional solids (bangun ruang).
    #[serde(rename = "bangun-ruang")]
    Solid,
    /// Rates, ratios, number theory and unit conversion (rumus dasar).
    #[serde(rename = "rumus-dasar")]
    Basic,
}

impl ShapeFamily {
    /// Every family, in catalog order.
    pub const ALL: [ShapeFamily; 27] = [
        ShapeFamily::Square,
        ShapeFamily::Rectangle,
        ShapeFamily::Triangle,
        ShapeFamily::Circle,
        ShapeFamily::Parallelogram,
        ShapeFamily::Trapezoid,
        ShapeFamily::Rhombus,
        ShapeFamily::Kite,
        ShapeFamily::Pentagon,
        ShapeFamily::Hexagon,
        ShapeFamily::RegularPolygon,
        ShapeFamily::Cube,
        ShapeFamily::Box,
        ShapeFamily::TriangularPrism,
        ShapeFamily::SquarePyramid,
        ShapeFamily::Cylinder,
        ShapeFamily::Cone,
        ShapeFamily::Sphere,
        ShapeFamily::Pythagoras,
        ShapeFamily::SpeedDistanceTime,
        ShapeFamily::Percentage,
        ShapeFamily::Average,
        ShapeFamily::Scale,
        ShapeFamily::GcfLcm,
        ShapeFamily::Fraction,
        ShapeFamily::LengthUnits,
        ShapeFamily::FlowRate,
    ];

    /// Stable string identifier, identical to the serde representation.
    pub fn id(self) -> &'static str {
        match self {
            ShapeFamily::Square => "persegi",
            ShapeFamily::Rectangle => "persegi-panjang",
            ShapeFamily::Triangle => "segitiga",
            ShapeFamily::Circle => "lingkaran",
            ShapeFamily::Parallelogram => "jajar-genjang",
            ShapeFamily::Trapezoid => "trapesium",
            ShapeFamily::Rhombus => "belah-ketupat",
            ShapeFamily::Kite => "layang-layang",
            ShapeFamily::Pentagon => "segi-lima",
            ShapeFamily::Hexagon => "segi-enam",
            ShapeFamily::RegularPolygon => "segi-n",
            ShapeFamily::Cube => "kubus",
            ShapeFamily::Box => "balok",
            ShapeFamily::TriangularPrism => "prisma-segitiga",
            ShapeFamily::SquarePyramid => "limas-segiempat",
            ShapeFamily::Cylinder => "tabung",
            ShapeFamily::Cone => "kerucut",
            ShapeFamily::Sphere => "bola",
            ShapeFamily::Pythagoras => "pythagoras",
            ShapeFamily::SpeedDistanceTime => "kecepatan-jarak-waktu",
            ShapeFamily::Percentage => "persen",
            ShapeFamily::Average => "rata-rata",
            ShapeFamily::Scale => "skala",
            ShapeFamily::GcfLcm => "fpb-kpk",
            ShapeFamily::Fraction => "pecahan",
            ShapeFamily::LengthUnits => "konversi-satuan",
            ShapeFamily::FlowRate => "debit",
        }
    }

    pub fn category(self) -> ShapeCategory {
        use ShapeFamily::*;
        match self {
            Square | Rectangle | Triangle | Circle | Parallelogram | Trapezoid | Rhombus | Kite
            | Pentagon | Hexagon | RegularPolygon => ShapeCategory::Plane,
            Cube | Box | TriangularPrism | SquarePyramid | Cylinder | Cone | Sphere => {
                ShapeCategory::Solid
            }
            Pythagoras | SpeedDistanceTime | Percentage | Average | Scale | GcfLcm | Fraction
            | LengthUnits | FlowRate => ShapeCategory::Basic,
        }
    }
}

impl fmt::Display for ShapeFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Returned when a string does not name any known family.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown shape: {id}")]
pub struct UnknownShape {
    pub id: String,
}

impl FromStr for ShapeFamily {
    type Err = UnknownShape;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShapeFamily::ALL
            .into_iter()
            .find(|family| family.id() == s)
            .ok_or_else(|| UnknownShape { id: s.to_string() })
    }
}
