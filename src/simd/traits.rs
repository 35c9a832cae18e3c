use crate::scalar::exp::{exp, expf};
use crate::simd::erfc::erfc_lanes;
use crate::simd::erfcf::erfcf_lanes;
use crate::simd::lanes::Lanes;

/// Lane-wise math on a whole vector.
pub trait SimdMath: Sized {
    /// Complementary error function of every lane.
    fn erfc(self) -> Self;

    /// Exponential of every lane.
    fn exp(self) -> Self;
}

impl<const N: usize> SimdMath for Lanes<f64, N> {
    #[inline(always)]
    fn erfc(self) -> Self {
        erfc_lanes(self)
    }

    #[inline(always)]
    fn exp(self) -> Self {
        self.map(exp)
    }
}

impl<const N: usize> SimdMath for Lanes<f32, N> {
    #[inline(always)]
    fn erfc(self) -> Self {
        erfcf_lanes(self)
    }

    #[inline(always)]
    fn exp(self) -> Self {
        self.map(expf)
    }
}

pub trait SimdErfc<Rhs = Self> {
    type Output;

    fn simd_erfc(self) -> Self::Output;
    fn par_simd_erfc(self) -> Self::Output;
    fn scalar_erfc(self) -> Self::Output;
}

pub trait SimdExp<Rhs = Self> {
    type Output;

    fn simd_exp(self) -> Self::Output;
    fn par_simd_exp(self) -> Self::Output;
    fn scalar_exp(self) -> Self::Output;
}
