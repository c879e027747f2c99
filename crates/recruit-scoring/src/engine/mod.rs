//! Pure classification functions over caller-supplied recruiting data.
//!
//! The four components are independent: [`status`] and [`phase`] work on
//! activity and milestone data, while [`fit`] produces per-school scores that
//! [`portfolio`] aggregates.

pub mod fit;
pub mod phase;
pub mod portfolio;
pub mod status;

/// Treats NaN and infinities as "no value" so every downstream rule sees a
/// finite number.
pub(crate) fn finite_or_zero(value: Option<f64>) -> f64 {
    value.filter(|value| value.is_finite()).unwrap_or(0.0)
}
