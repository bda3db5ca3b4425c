//! Regular polygons: one set of relations parameterized by side count.

use std::f64::consts::PI;

use super::{Pass, Rule};

pub const PENTAGON: &[Rule] = &[pentagon];
pub const HEXAGON: &[Rule] = &[hexagon];
pub const N_GON: &[Rule] = &[n_gon];

fn pentagon(v: &mut Pass) {
    regular_polygon(v, 5.0);
}

fn hexagon(v: &mut Pass) {
    regular_polygon(v, 6.0);
}

/// Side count comes from field `n`; nothing is derived until it is known.
fn n_gon(v: &mut Pass) {
    if let Some(n) = v.get("n") {
        regular_polygon(v, n);
    }
}

/// Relations between side `s`, apothem `ap`, perimeter `kel` and area `luas`
/// of a regular polygon with `n` sides. `n` must be an integer greater than 2.
pub fn regular_polygon(v: &mut Pass, n: f64) {
    if !n.is_finite() || n.fract() != 0.0 || n <= 2.0 {
        return;
    }
    let tan = (PI / n).tan();

    if let Some(s) = v.get("s") {
        v.set("kel", n * s);
        v.set("ap", s / (2.0 * tan));
        v.set("luas", n * s * s / (4.0 * tan));
    }
    if let Some(kel) = v.get("kel") {
        v.set("s", kel / n);
    }
    if let Some(ap) = v.get("ap") {
        v.set("s", 2.0 * ap * tan);
    }
    if let Some([ap, kel]) = v.all(["ap", "kel"]) {
        v.set("luas", 0.5 * ap * kel);
    }
    if let Some([area, ap]) = v.all(["luas", "ap"]) {
        if ap > 0.0 {
            v.set("kel", 2.0 * area / ap);
        }
    }
    if let Some([area, kel]) = v.all(["luas", "kel"]) {
        if kel > 0.0 {
            v.set("ap", 2.0 * area / kel);
        }
    }
}
