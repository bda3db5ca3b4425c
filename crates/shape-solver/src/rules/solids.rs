//! Three-dimensional solids. `luas` is the total surface area throughout.

use std::f64::consts::PI;

use super::{Pass, Rule};

// ── Cube ────────────────────────────────────────────────────────────────────

pub const CUBE: &[Rule] = &[cube_from_side, cube_side_from_volume, cube_side_from_surface];

fn cube_from_side(v: &mut Pass) {
    if let Some(s) = v.get("s") {
        v.set("volume", s.powi(3));
        v.set("luas", 6.0 * s * s);
    }
}

fn cube_side_from_volume(v: &mut Pass) {
    if let Some(volume) = v.get("volume") {
        v.set("s", volume.cbrt());
    }
}

fn cube_side_from_surface(v: &mut Pass) {
    if let Some(surface) = v.get("luas") {
        v.set("s", (surface / 6.0).sqrt());
    }
}

// ── Box ─────────────────────────────────────────────────────────────────────

pub const BOX: &[Rule] = &[box_from_edges, box_edge_from_volume, box_edge_from_surface];

fn box_from_edges(v: &mut Pass) {
    if let Some([p, l, t]) = v.all(["p", "l", "t"]) {
        v.set("volume", p * l * t);
        v.set("luas", 2.0 * (p * l + p * t + l * t));
    }
}

/// Each edge from the volume and the other two edges.
fn box_edge_from_volume(v: &mut Pass) {
    for [missing, x, y] in [["t", "p", "l"], ["l", "p", "t"], ["p", "l", "t"]] {
        if let Some([volume, a, b]) = v.all(["volume", x, y]) {
            if a * b > 0.0 {
                v.set(missing, volume / (a * b));
            }
        }
    }
}

/// `luas / 2 = ab + (a + b)·missing`, linear in the missing edge.
fn box_edge_from_surface(v: &mut Pass) {
    for [missing, x, y] in [["t", "p", "l"], ["l", "p", "t"], ["p", "l", "t"]] {
        if let Some([surface, a, b]) = v.all(["luas", x, y]) {
            if a + b > 0.0 {
                v.set(missing, (surface / 2.0 - a * b) / (a + b));
            }
        }
    }
}

// ── Triangular prism ────────────────────────────────────────────────────────

pub const TRIANGULAR_PRISM: &[Rule] = &[
    prism_volume,
    prism_surface,
    prism_from_volume,
    prism_from_surface,
];

fn prism_volume(v: &mut Pass) {
    if let Some([base, height]) = v.all(["luasAlas", "tp"]) {
        v.set("volume", base * height);
    }
}

fn prism_surface(v: &mut Pass) {
    if let Some([base, base_perimeter, height]) = v.all(["luasAlas", "kelAlas", "tp"]) {
        v.set("luas", 2.0 * base + base_perimeter * height);
    }
}

fn prism_from_volume(v: &mut Pass) {
    if let Some([volume, base]) = v.all(["volume", "luasAlas"]) {
        if base > 0.0 {
            v.set("tp", volume / base);
        }
    }
    if let Some([volume, height]) = v.all(["volume", "tp"]) {
        if height > 0.0 {
            v.set("luasAlas", volume / height);
        }
    }
}

fn prism_from_surface(v: &mut Pass) {
    if let Some([surface, base, height]) = v.all(["luas", "luasAlas", "tp"]) {
        if height > 0.0 {
            v.set("kelAlas", (surface - 2.0 * base) / height);
        }
    }
    if let Some([surface, base, base_perimeter]) = v.all(["luas", "luasAlas", "kelAlas"]) {
        if base_perimeter > 0.0 {
            v.set("tp", (surface - 2.0 * base) / base_perimeter);
        }
    }
    if let Some([surface, base_perimeter, height]) = v.all(["luas", "kelAlas", "tp"]) {
        v.set("luasAlas", (surface - base_perimeter * height) / 2.0);
    }
}

// ── Square pyramid ──────────────────────────────────────────────────────────

pub const SQUARE_PYRAMID: &[Rule] = &[
    pyramid_volume,
    pyramid_surface,
    pyramid_from_volume,
    pyramid_from_surface,
];

fn pyramid_volume(v: &mut Pass) {
    if let Some([base, height]) = v.all(["luasAlas", "t"]) {
        v.set("volume", base * height / 3.0);
    }
}

fn pyramid_surface(v: &mut Pass) {
    if let Some([base, base_perimeter, slant]) = v.all(["luasAlas", "kelAlas", "ts"]) {
        v.set("luas", base + 0.5 * base_perimeter * slant);
    }
}

fn pyramid_from_volume(v: &mut Pass) {
    if let Some([volume, base]) = v.all(["volume", "luasAlas"]) {
        if base > 0.0 {
            v.set("t", 3.0 * volume / base);
        }
    }
    if let Some([volume, height]) = v.all(["volume", "t"]) {
        if height > 0.0 {
            v.set("luasAlas", 3.0 * volume / height);
        }
    }
}

fn pyramid_from_surface(v: &mut Pass) {
    if let Some([surface, base, base_perimeter]) = v.all(["luas", "luasAlas", "kelAlas"]) {
        if base_perimeter > 0.0 {
            v.set("ts", 2.0 * (surface - base) / base_perimeter);
        }
    }
    if let Some([surface, base, slant]) = v.all(["luas", "luasAlas", "ts"]) {
        if slant > 0.0 {
            v.set("kelAlas", 2.0 * (surface - base) / slant);
        }
    }
    if let Some([surface, base_perimeter, slant]) = v.all(["luas", "kelAlas", "ts"]) {
        v.set("luasAlas", surface - 0.5 * base_perimeter * slant);
    }
}

// ── Cylinder ────────────────────────────────────────────────────────────────

pub const CYLINDER: &[Rule] = &[
    cylinder_from_radius_height,
    cylinder_from_volume,
    cylinder_from_surface,
];

fn cylinder_from_radius_height(v: &mut Pass) {
    if let Some([r, t]) = v.all(["r", "t"]) {
        v.set("volume", PI * r * r * t);
        v.set("luas", 2.0 * PI * r * (r + t));
    }
}

fn cylinder_from_volume(v: &mut Pass) {
    if let Some([volume, r]) = v.all(["volume", "r"]) {
        if r > 0.0 {
            v.set("t", volume / (PI * r * r));
        }
    }
    if let Some([volume, t]) = v.all(["volume", "t"]) {
        if t > 0.0 {
            v.set("r", (volume / (PI * t)).sqrt());
        }
    }
}

fn cylinder_from_surface(v: &mut Pass) {
    if let Some([surface, r]) = v.all(["luas", "r"]) {
        if r > 0.0 {
            v.set("t", surface / (2.0 * PI * r) - r);
        }
    }
    // r² + t·r − luas/(2π) = 0, positive root.
    if let Some([surface, t]) = v.all(["luas", "t"]) {
        v.set("r", positive_root(t, surface / (2.0 * PI)));
    }
}

// ── Cone ────────────────────────────────────────────────────────────────────

pub const CONE: &[Rule] = &[
    cone_from_radius_height,
    cone_surface,
    cone_from_volume,
    cone_from_surface,
    cone_from_slant,
];

fn cone_from_radius_height(v: &mut Pass) {
    if let Some([r, t]) = v.all(["r", "t"]) {
        v.set("volume", PI * r * r * t / 3.0);
        v.set("s", r.hypot(t));
    }
}

fn cone_surface(v: &mut Pass) {
    if let Some([r, s]) = v.all(["r", "s"]) {
        v.set("luas", PI * r * (r + s));
    }
}

fn cone_from_volume(v: &mut Pass) {
    if let Some([volume, r]) = v.all(["volume", "r"]) {
        if r > 0.0 {
            v.set("t", 3.0 * volume / (PI * r * r));
        }
    }
    if let Some([volume, t]) = v.all(["volume", "t"]) {
        if t > 0.0 {
            v.set("r", (3.0 * volume / (PI * t)).sqrt());
        }
    }
}

fn cone_from_surface(v: &mut Pass) {
    if let Some([surface, r]) = v.all(["luas", "r"]) {
        if r > 0.0 {
            v.set("s", surface / (PI * r) - r);
        }
    }
    // r² + s·r − luas/π = 0, positive root.
    if let Some([surface, s]) = v.all(["luas", "s"]) {
        v.set("r", positive_root(s, surface / PI));
    }
}

fn cone_from_slant(v: &mut Pass) {
    if let Some([s, r]) = v.all(["s", "r"]) {
        if s >= r {
            v.set("t", (s * s - r * r).sqrt());
        }
    }
    if let Some([s, t]) = v.all(["s", "t"]) {
        if s >= t {
            v.set("r", (s * s - t * t).sqrt());
        }
    }
}

// ── Sphere ──────────────────────────────────────────────────────────────────

pub const SPHERE: &[Rule] = &[sphere_from_radius, sphere_radius_from_other];

fn sphere_from_radius(v: &mut Pass) {
    if let Some(r) = v.get("r") {
        v.set("d", 2.0 * r);
        v.set("volume", 4.0 / 3.0 * PI * r.powi(3));
        v.set("luas", 4.0 * PI * r * r);
    }
}

fn sphere_radius_from_other(v: &mut Pass) {
    if let Some(d) = v.get("d") {
        v.set("r", d / 2.0);
    }
    if let Some(volume) = v.get("volume") {
        v.set("r", (3.0 * volume / (4.0 * PI)).cbrt());
    }
    if let Some(surface) = v.get("luas") {
        v.set("r", (surface / (4.0 * PI)).sqrt());
    }
}

/// Larger root of `x² + b·x − c = 0`. NaN when the discriminant is negative,
/// which the write gate then discards.
fn positive_root(b: f64, c: f64) -> f64 {
    (-b + (b * b + 4.0 * c).sqrt()) / 2.0
}
