//! Rates, ratios and number theory.

use super::{Pass, Rule};
use crate::number_theory::{gcd, lcm};

// ── Pythagoras ──────────────────────────────────────────────────────────────

pub const PYTHAGORAS: &[Rule] = &[hypotenuse, leg_from_hypotenuse];

fn hypotenuse(v: &mut Pass) {
    if let Some([a, b]) = v.all(["a", "b"]) {
        v.set("c", (a * a + b * b).sqrt());
    }
}

fn leg_from_hypotenuse(v: &mut Pass) {
    if let Some([c, a]) = v.all(["c", "a"]) {
        if c >= a {
            v.set("b", (c * c - a * a).sqrt());
        }
    }
    if let Some([c, b]) = v.all(["c", "b"]) {
        if c >= b {
            v.set("a", (c * c - b * b).sqrt());
        }
    }
}

// ── Product relations ───────────────────────────────────────────────────────
//
// Several topics share the shape `product = x · y`. Each gets its own rule
// list because the keys differ, but they read the same way.

fn product_relation(v: &mut Pass, product: &str, x: &str, y: &str) {
    if let Some([px, py]) = v.all([x, y]) {
        v.set(product, px * py);
    }
    if let Some([total, py]) = v.all([product, y]) {
        if py > 0.0 {
            v.set(x, total / py);
        }
    }
    if let Some([total, px]) = v.all([product, x]) {
        if px > 0.0 {
            v.set(y, total / px);
        }
    }
}

pub const SPEED_DISTANCE_TIME: &[Rule] = &[speed_distance_time];

/// Distance `s = v · t`.
fn speed_distance_time(v: &mut Pass) {
    product_relation(v, "s", "v", "t");
}

pub const FLOW_RATE: &[Rule] = &[flow_rate];

/// `volume = debit · waktu`.
fn flow_rate(v: &mut Pass) {
    product_relation(v, "volume", "debit", "waktu");
}

pub const AVERAGE: &[Rule] = &[average];

/// `jumlah = rata · n`.
fn average(v: &mut Pass) {
    product_relation(v, "jumlah", "rata", "n");
}

pub const SCALE: &[Rule] = &[scale];

/// `jarakPeta = skala · jarakSebenarnya`.
fn scale(v: &mut Pass) {
    product_relation(v, "jarakPeta", "skala", "jarakSebenarnya");
}

// ── Percentage ──────────────────────────────────────────────────────────────

pub const PERCENTAGE: &[Rule] = &[percentage];

fn percentage(v: &mut Pass) {
    if let Some([part, total]) = v.all(["bagian", "total"]) {
        if total > 0.0 {
            v.set("persen", part / total * 100.0);
        }
    }
    if let Some([pct, total]) = v.all(["persen", "total"]) {
        v.set("bagian", pct / 100.0 * total);
    }
    if let Some([part, pct]) = v.all(["bagian", "persen"]) {
        if pct > 0.0 {
            v.set("total", part * 100.0 / pct);
        }
    }
}

// ── GCF / LCM ───────────────────────────────────────────────────────────────

pub const GCF_LCM: &[Rule] = &[gcf_lcm];

/// Only fires for two positive integers.
fn gcf_lcm(v: &mut Pass) {
    let Some([a, b]) = v.all(["a", "b"]) else {
        return;
    };
    if a.fract() != 0.0 || b.fract() != 0.0 || a <= 0.0 || b <= 0.0 {
        return;
    }
    v.set("fpb", gcd(a, b));
    v.set("kpk", lcm(a, b));
}

// ── Fraction ────────────────────────────────────────────────────────────────

pub const FRACTION: &[Rule] = &[
    fraction_from_parts,
    fraction_decimal_percent,
    fraction_numerator,
    fraction_denominator,
];

fn fraction_from_parts(v: &mut Pass) {
    if let Some([num, den]) = v.all(["pembilang", "penyebut"]) {
        if den > 0.0 {
            v.set("desimal", num / den);
            v.set("persen", num / den * 100.0);
        }
    }
}

fn fraction_decimal_percent(v: &mut Pass) {
    if let Some(decimal) = v.get("desimal") {
        v.set("persen", decimal * 100.0);
    }
    if let Some(pct) = v.get("persen") {
        v.set("desimal", pct / 100.0);
    }
}

fn fraction_numerator(v: &mut Pass) {
    if let Some([decimal, den]) = v.all(["desimal", "penyebut"]) {
        if den > 0.0 {
            v.set("pembilang", decimal * den);
        }
    }
    if let Some([pct, den]) = v.all(["persen", "penyebut"]) {
        if den > 0.0 {
            v.set("pembilang", pct / 100.0 * den);
        }
    }
}

fn fraction_denominator(v: &mut Pass) {
    if let Some([num, decimal]) = v.all(["pembilang", "desimal"]) {
        if decimal > 0.0 {
            v.set("penyebut", num / decimal);
        }
    }
    if let Some([num, pct]) = v.all(["pembilang", "persen"]) {
        if pct > 0.0 {
            v.set("penyebut", num / (pct / 100.0));
        }
    }
}
