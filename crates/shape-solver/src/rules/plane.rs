//! Quadrilaterals, triangles and circles.

use std::f64::consts::PI;

use super::{Pass, Rule};

// ── Square ──────────────────────────────────────────────────────────────────

pub const SQUARE: &[Rule] = &[square_from_side, square_side_from_area, square_side_from_perimeter];

fn square_from_side(v: &mut Pass) {
    if let Some(s) = v.get("s") {
        v.set("luas", s * s);
        v.set("kel", 4.0 * s);
    }
}

fn square_side_from_area(v: &mut Pass) {
    if let Some(area) = v.get("luas") {
        v.set("s", area.sqrt());
    }
}

fn square_side_from_perimeter(v: &mut Pass) {
    if let Some(kel) = v.get("kel") {
        v.set("s", kel / 4.0);
    }
}

// ── Rectangle ───────────────────────────────────────────────────────────────

pub const RECTANGLE: &[Rule] = &[
    rectangle_from_sides,
    rectangle_length_from_area,
    rectangle_width_from_area,
    rectangle_width_from_perimeter,
    rectangle_length_from_perimeter,
];

fn rectangle_from_sides(v: &mut Pass) {
    if let Some([p, l]) = v.all(["p", "l"]) {
        v.set("luas", p * l);
        v.set("kel", 2.0 * (p + l));
    }
}

fn rectangle_length_from_area(v: &mut Pass) {
    if let Some([area, l]) = v.all(["luas", "l"]) {
        if l > 0.0 {
            v.set("p", area / l);
        }
    }
}

fn rectangle_width_from_area(v: &mut Pass) {
    if let Some([area, p]) = v.all(["luas", "p"]) {
        if p > 0.0 {
            v.set("l", area / p);
        }
    }
}

fn rectangle_width_from_perimeter(v: &mut Pass) {
    if let Some([kel, p]) = v.all(["kel", "p"]) {
        v.set("l", kel / 2.0 - p);
    }
}

fn rectangle_length_from_perimeter(v: &mut Pass) {
    if let Some([kel, l]) = v.all(["kel", "l"]) {
        v.set("p", kel / 2.0 - l);
    }
}

// ── Triangle ────────────────────────────────────────────────────────────────

pub const TRIANGLE: &[Rule] = &[
    triangle_area,
    triangle_height_from_area,
    triangle_base_from_area,
    triangle_perimeter,
    triangle_missing_side,
];

fn triangle_area(v: &mut Pass) {
    if let Some([a, t]) = v.all(["a", "t"]) {
        v.set("luas", 0.5 * a * t);
    }
}

fn triangle_height_from_area(v: &mut Pass) {
    if let Some([area, a]) = v.all(["luas", "a"]) {
        if a > 0.0 {
            v.set("t", 2.0 * area / a);
        }
    }
}

fn triangle_base_from_area(v: &mut Pass) {
    if let Some([area, t]) = v.all(["luas", "t"]) {
        if t > 0.0 {
            v.set("a", 2.0 * area / t);
        }
    }
}

fn triangle_perimeter(v: &mut Pass) {
    if let Some([s1, s2, s3]) = v.all(["s1", "s2", "s3"]) {
        v.set("kel", s1 + s2 + s3);
    }
}

fn triangle_missing_side(v: &mut Pass) {
    if let Some([kel, s1, s2]) = v.all(["kel", "s1", "s2"]) {
        v.set("s3", kel - s1 - s2);
    }
    if let Some([kel, s1, s3]) = v.all(["kel", "s1", "s3"]) {
        v.set("s2", kel - s1 - s3);
    }
    if let Some([kel, s2, s3]) = v.all(["kel", "s2", "s3"]) {
        v.set("s1", kel - s2 - s3);
    }
}

// ── Circle ──────────────────────────────────────────────────────────────────

pub const CIRCLE: &[Rule] = &[circle_from_radius, circle_radius_from_other];

fn circle_from_radius(v: &mut Pass) {
    if let Some(r) = v.get("r") {
        v.set("d", 2.0 * r);
        v.set("luas", PI * r * r);
        v.set("kel", 2.0 * PI * r);
    }
}

fn circle_radius_from_other(v: &mut Pass) {
    if let Some(d) = v.get("d") {
        v.set("r", d / 2.0);
    }
    if let Some(area) = v.get("luas") {
        v.set("r", (area / PI).sqrt());
    }
    if let Some(kel) = v.get("kel") {
        v.set("r", kel / (2.0 * PI));
    }
}

// ── Parallelogram ───────────────────────────────────────────────────────────

pub const PARALLELOGRAM: &[Rule] = &[
    parallelogram_area,
    parallelogram_height_from_area,
    parallelogram_base_from_area,
    two_pair_perimeter,
    two_pair_sides_from_perimeter,
];

fn parallelogram_area(v: &mut Pass) {
    if let Some([a, t]) = v.all(["a", "t"]) {
        v.set("luas", a * t);
    }
}

fn parallelogram_height_from_area(v: &mut Pass) {
    if let Some([area, a]) = v.all(["luas", "a"]) {
        if a > 0.0 {
            v.set("t", area / a);
        }
    }
}

fn parallelogram_base_from_area(v: &mut Pass) {
    if let Some([area, t]) = v.all(["luas", "t"]) {
        if t > 0.0 {
            v.set("a", area / t);
        }
    }
}

/// `kel = 2(a + b)`, shared by the parallelogram and the kite.
fn two_pair_perimeter(v: &mut Pass) {
    if let Some([a, b]) = v.all(["a", "b"]) {
        v.set("kel", 2.0 * (a + b));
    }
}

fn two_pair_sides_from_perimeter(v: &mut Pass) {
    if let Some([kel, a]) = v.all(["kel", "a"]) {
        v.set("b", kel / 2.0 - a);
    }
    if let Some([kel, b]) = v.all(["kel", "b"]) {
        v.set("a", kel / 2.0 - b);
    }
}

// ── Trapezoid ───────────────────────────────────────────────────────────────

pub const TRAPEZOID: &[Rule] = &[
    trapezoid_area,
    trapezoid_height_from_area,
    trapezoid_parallel_side_from_area,
    trapezoid_perimeter,
    trapezoid_missing_side,
];

fn trapezoid_area(v: &mut Pass) {
    if let Some([a, b, t]) = v.all(["a", "b", "t"]) {
        v.set("luas", 0.5 * (a + b) * t);
    }
}

fn trapezoid_height_from_area(v: &mut Pass) {
    if let Some([area, a, b]) = v.all(["luas", "a", "b"]) {
        if a + b > 0.0 {
            v.set("t", 2.0 * area / (a + b));
        }
    }
}

fn trapezoid_parallel_side_from_area(v: &mut Pass) {
    if let Some([area, t, a]) = v.all(["luas", "t", "a"]) {
        if t > 0.0 {
            v.set("b", 2.0 * area / t - a);
        }
    }
    if let Some([area, t, b]) = v.all(["luas", "t", "b"]) {
        if t > 0.0 {
            v.set("a", 2.0 * area / t - b);
        }
    }
}

fn trapezoid_perimeter(v: &mut Pass) {
    if let Some([a, b, c, d]) = v.all(["a", "b", "c", "d"]) {
        v.set("kel", a + b + c + d);
    }
}

fn trapezoid_missing_side(v: &mut Pass) {
    if let Some([kel, a, b, c]) = v.all(["kel", "a", "b", "c"]) {
        v.set("d", kel - a - b - c);
    }
    if let Some([kel, a, b, d]) = v.all(["kel", "a", "b", "d"]) {
        v.set("c", kel - a - b - d);
    }
    if let Some([kel, a, c, d]) = v.all(["kel", "a", "c", "d"]) {
        v.set("b", kel - a - c - d);
    }
    if let Some([kel, b, c, d]) = v.all(["kel", "b", "c", "d"]) {
        v.set("a", kel - b - c - d);
    }
}

// ── Rhombus and kite ────────────────────────────────────────────────────────

pub const RHOMBUS: &[Rule] = &[
    diagonal_area,
    diagonal_from_area,
    rhombus_perimeter,
    rhombus_side_from_perimeter,
];

pub const KITE: &[Rule] = &[
    diagonal_area,
    diagonal_from_area,
    two_pair_perimeter,
    two_pair_sides_from_perimeter,
];

fn diagonal_area(v: &mut Pass) {
    if let Some([d1, d2]) = v.all(["d1", "d2"]) {
        v.set("luas", 0.5 * d1 * d2);
    }
}

fn diagonal_from_area(v: &mut Pass) {
    if let Some([area, d1]) = v.all(["luas", "d1"]) {
        if d1 > 0.0 {
            v.set("d2", 2.0 * area / d1);
        }
    }
    if let Some([area, d2]) = v.all(["luas", "d2"]) {
        if d2 > 0.0 {
            v.set("d1", 2.0 * area / d2);
        }
    }
}

fn rhombus_perimeter(v: &mut Pass) {
    if let Some(s) = v.get("s") {
        v.set("kel", 4.0 * s);
    }
}

fn rhombus_side_from_perimeter(v: &mut Pass) {
    if let Some(kel) = v.get("kel") {
        v.set("s", kel / 4.0);
    }
}
