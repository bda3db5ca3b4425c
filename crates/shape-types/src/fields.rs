use serde::Serialize;

use crate::shape::ShapeFamily;

/// One numeric field of a family's calculator schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    /// Family-scoped key, e.g. `s` or `luas`.
    pub key: &'static str,
    /// Display label. May contain `<sub>` markup for subscripts.
    pub label: &'static str,
}

const fn field(key: &'static str, label: &'static str) -> FieldSpec {
    FieldSpec { key, label }
}

/// Length units of the unit ladder, largest first.
pub const LENGTH_UNITS: [&str; 7] = ["km", "hm", "dam", "m", "dm", "cm", "mm"];

const SQUARE: &[FieldSpec] = &[
    field("s", "s (sisi)"),
    field("luas", "Luas (L)"),
    field("kel", "Keliling (Kel)"),
];

const RECTANGLE: &[FieldSpec] = &[
    field("p", "p (panjang)"),
    field("l", "l (lebar)"),
    field("luas", "Luas (L)"),
    field("kel", "Keliling (Kel)"),
];

const TRIANGLE: &[FieldSpec] = &[
    field("a", "a (alas)"),
    field("t", "t (tinggi)"),
    field("s1", "s1"),
    field("s2", "s2"),
    field("s3", "s3"),
    field("luas", "Luas (L)"),
    field("kel", "Keliling (Kel)"),
];

const CIRCLE: &[FieldSpec] = &[
    field("r", "r (jari-jari)"),
    field("d", "d (diameter)"),
    field("luas", "Luas (L)"),
    field("kel", "Keliling (K)"),
];

const PARALLELOGRAM: &[FieldSpec] = &[
    field("a", "a (alas)"),
    field("t", "t (tinggi)"),
    field("b", "b (sisi miring)"),
    field("luas", "Luas (L)"),
    field("kel", "Keliling (K)"),
];

const TRAPEZOID: &[FieldSpec] = &[
    field("a", "a (sejajar 1)"),
    field("b", "b (sejajar 2)"),
    field("t", "t (tinggi)"),
    field("c", "c (sisi 1)"),
    field("d", "d (sisi 2)"),
    field("luas", "Luas (L)"),
    field("kel", "Keliling (K)"),
];

const RHOMBUS: &[FieldSpec] = &[
    field("d1", "d1"),
    field("d2", "d2"),
    field("s", "s (sisi)"),
    field("luas", "Luas (L)"),
    field("kel", "Keliling (K)"),
];

const KITE: &[FieldSpec] = &[
    field("d1", "d1"),
    field("d2", "d2"),
    field("a", "a"),
    field("b", "b"),
    field("luas", "Luas (L)"),
    field("kel", "Keliling (K)"),
];

const FIXED_POLYGON: &[FieldSpec] = &[
    field("s", "s (sisi)"),
    field("ap", "ap (apotema)"),
    field("kel", "Keliling (K)"),
    field("luas", "Luas (L)"),
];

const REGULAR_POLYGON: &[FieldSpec] = &[
    field("n", "n (jumlah sisi)"),
    field("s", "s (sisi)"),
    field("ap", "ap (apotema)"),
    field("kel", "Keliling (K)"),
    field("luas", "Luas (L)"),
];

const PYTHAGORAS: &[FieldSpec] = &[
    field("a", "a (sisi siku-siku)"),
    field("b", "b (sisi siku-siku)"),
    field("c", "c (sisi miring)"),
];

const SPEED_DISTANCE_TIME: &[FieldSpec] = &[
    field("v", "v (kecepatan)"),
    field("s", "s (jarak)"),
    field("t", "t (waktu)"),
];

const PERCENTAGE: &[FieldSpec] = &[
    field("bagian", "Bagian"),
    field("total", "Total"),
    field("persen", "Persentase (%)"),
];

const AVERAGE: &[FieldSpec] = &[
    field("jumlah", "Jumlah"),
    field("n", "Banyak data (n)"),
    field("rata", "Rata-rata"),
];

const SCALE: &[FieldSpec] = &[
    field("skala", "Skala"),
    field("jarakPeta", "Jarak peta"),
    field("jarakSebenarnya", "Jarak sebenarnya"),
];

const GCF_LCM: &[FieldSpec] = &[
    field("a", "a"),
    field("b", "b"),
    field("fpb", "FPB"),
    field("kpk", "KPK"),
];

const FRACTION: &[FieldSpec] = &[
    field("pembilang", "Pembilang"),
    field("penyebut", "Penyebut"),
    field("desimal", "Desimal"),
    field("persen", "Persen (%)"),
];

const LENGTH_UNIT_FIELDS: &[FieldSpec] = &[
    field("km", "km"),
    field("hm", "hm"),
    field("dam", "dam"),
    field("m", "m"),
    field("dm", "dm"),
    field("cm", "cm"),
    field("mm", "mm"),
];

const FLOW_RATE: &[FieldSpec] = &[
    field("debit", "Debit"),
    field("volume", "Volume"),
    field("waktu", "Waktu"),
];

const CUBE: &[FieldSpec] = &[
    field("s", "s (sisi)"),
    field("volume", "Volume (V)"),
    field("luas", "Luas Permukaan (LP)"),
];

const BOX: &[FieldSpec] = &[
    field("p", "p (panjang)"),
    field("l", "l (lebar)"),
    field("t", "t (tinggi)"),
    field("volume", "Volume (V)"),
    field("luas", "Luas Permukaan (LP)"),
];

const TRIANGULAR_PRISM: &[FieldSpec] = &[
    field("luasAlas", "L<sub>alas</sub>"),
    field("kelAlas", "K<sub>alas</sub>"),
    field("tp", "Tinggi prisma"),
    field("volume", "Volume (V)"),
    field("luas", "Luas Permukaan (LP)"),
];

const SQUARE_PYRAMID: &[FieldSpec] = &[
    field("luasAlas", "L<sub>alas</sub>"),
    field("kelAlas", "K<sub>alas</sub>"),
    field("ts", "Tinggi sisi tegak"),
    field("t", "Tinggi"),
    field("volume", "Volume (V)"),
    field("luas", "Luas Permukaan (LP)"),
];

const CYLINDER: &[FieldSpec] = &[
    field("r", "r (jari-jari)"),
    field("t", "t (tinggi)"),
    field("volume", "Volume (V)"),
    field("luas", "Luas Permukaan (LP)"),
];

const CONE: &[FieldSpec] = &[
    field("r", "r (jari-jari)"),
    field("t", "t (tinggi)"),
    field("s", "s (garis pelukis)"),
    field("volume", "Volume (V)"),
    field("luas", "Luas Permukaan (LP)"),
];

const SPHERE: &[FieldSpec] = &[
    field("r", "r (jari-jari)"),
    field("d", "d (diameter)"),
    field("volume", "Volume (V)"),
    field("luas", "Luas Permukaan (LP)"),
];

impl ShapeFamily {
    /// The ordered field schema shown by the calculator for this family.
    pub fn fields(self) -> &'static [FieldSpec] {
        match self {
            ShapeFamily::Square => SQUARE,
            ShapeFamily::Rectangle => RECTANGLE,
            ShapeFamily::Triangle => TRIANGLE,
            ShapeFamily::Circle => CIRCLE,
            ShapeFamily::Parallelogram => PARALLELOGRAM,
            ShapeFamily::Trapezoid => TRAPEZOID,
            ShapeFamily::Rhombus => RHOMBUS,
            ShapeFamily::Kite => KITE,
            ShapeFamily::Pentagon | ShapeFamily::Hexagon => FIXED_POLYGON,
            ShapeFamily::RegularPolygon => REGULAR_POLYGON,
            ShapeFamily::Cube => CUBE,
            ShapeFamily::Box => BOX,
            ShapeFamily::TriangularPrism => TRIANGULAR_PRISM,
            ShapeFamily::SquarePyramid => SQUARE_PYRAMID,
            ShapeFamily::Cylinder => CYLINDER,
            ShapeFamily::Cone => CONE,
            ShapeFamily::Sphere => SPHERE,
            ShapeFamily::Pythagoras => PYTHAGORAS,
            ShapeFamily::SpeedDistanceTime => SPEED_DISTANCE_TIME,
            ShapeFamily::Percentage => PERCENTAGE,
            ShapeFamily::Average => AVERAGE,
            ShapeFamily::Scale => SCALE,
            ShapeFamily::GcfLcm => GCF_LCM,
            ShapeFamily::Fraction => FRACTION,
            ShapeFamily::LengthUnits => LENGTH_UNIT_FIELDS,
            ShapeFamily::FlowRate => FLOW_RATE,
        }
    }

    /// Whether `key` belongs to this family's schema.
    pub fn has_field(self, key: &str) -> bool {
        self.fields().iter().any(|f| f.key == key)
    }
}
