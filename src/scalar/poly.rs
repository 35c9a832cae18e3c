//! Horner evaluation of the minimax polynomials.
//!
//! The evaluator is generic over the operand so that scalar kernels and
//! vector lanes run the exact same sequence of IEEE operations. Rust never
//! contracts `a * b + c` into a fused multiply-add, so the order below is the
//! order executed.

use std::ops::{Add, Div, Mul};

use num::Float;

/// Something a coefficient of type `S` can be broadcast into.
pub trait Operand<S>: Copy + Add<Output = Self> + Mul<Output = Self> + Div<Output = Self> {
    fn splat(value: S) -> Self;
}

impl Operand<f64> for f64 {
    #[inline(always)]
    fn splat(value: f64) -> Self {
        value
    }
}

impl Operand<f32> for f32 {
    #[inline(always)]
    fn splat(value: f32) -> Self {
        value
    }
}

/// `c[0] + z*(c[1] + z*(c[2] + ...))`.
#[inline(always)]
pub fn horner<S: Float, V: Operand<S>>(z: V, coeffs: &[S]) -> V {
    match coeffs.split_last() {
        Some((&last, rest)) => rest
            .iter()
            .rev()
            .fold(V::splat(last), |acc, &c| V::splat(c) + z * acc),
        None => V::splat(S::zero()),
    }
}

/// `P(z) / Q(z)` where `den` holds `Q`'s coefficients after the implicit leading 1.
#[inline(always)]
pub fn rational<S: Float, V: Operand<S>>(z: V, num: &[S], den: &[S]) -> V {
    let p = horner(z, num);
    let q = V::splat(S::one()) + z * horner(z, den);
    p / q
}
