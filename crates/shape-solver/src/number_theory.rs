//! Integer helpers for the GCF/LCM topic. Inputs are truncated toward zero
//! and taken by absolute value.

fn as_natural(x: f64) -> f64 {
    x.trunc().abs()
}

/// Greatest common divisor by Euclid's algorithm. `gcd(0, n) = n`.
///
/// Runs on `f64` directly: `%` is exact for integer-valued floats, so
/// integers past `u64::MAX` are handled too.
pub fn gcd(a: f64, b: f64) -> f64 {
    let mut x = as_natural(a);
    let mut y = as_natural(b);
    while y != 0.0 {
        let rem = x % y;
        x = y;
        y = rem;
    }
    x
}

/// Least common multiple; zero when either input is zero.
pub fn lcm(a: f64, b: f64) -> f64 {
    let x = as_natural(a);
    let y = as_natural(b);
    if x == 0.0 || y == 0.0 {
        return 0.0;
    }
    // Divide first so the product stays in range.
    (x / gcd(x, y)) * y
}
