use crate::TcError;

/// Floating point type used throughout system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, TcError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(TcError::NonFinite { what, value: v })
    }
}

/// Round to a fixed number of decimal digits (half away from zero).
///
/// Output-only: derivations should keep working on the unrounded value.
pub fn round_to(v: Real, decimals: u32) -> Real {
    let scale = 10_f64.powi(decimals as i32);
    let rounded = (v * scale).round() / scale;
    // avoid reporting -0.0
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// `|value - target| <= tol`. Boundary counts as a match.
///
/// Used when grading numeric answers.
pub fn within_inclusive(value: Real, target: Real, tol: Real) -> bool {
    (value - target).abs() <= tol
}

/// `|value - target| < tol`. Boundary does not match.
///
/// Used when checking a Hess combination against its target.
pub fn within_exclusive(value: Real, target: Real, tol: Real) -> bool {
    (value - target).abs() < tol
}
