//! Array drivers: run a vector kernel over slices of any length.
//!
//! Full blocks of `LANE_COUNT` elements go through the kernel directly, the
//! remainder is loaded as a zero padded partial vector and stored partially.
//! The parallel variants hand [`PARALLEL_CHUNK_SIZE`] elements to each Rayon
//! task and run the same block loop inside it, so all variants produce
//! identical bits.

use rayon::{
    iter::{IndexedParallelIterator, ParallelIterator},
    slice::{ParallelSlice, ParallelSliceMut},
};

use crate::error::{length_mismatch, Result};
use crate::scalar::erfc::erfc;
use crate::scalar::erfcf::erfcf;
use crate::scalar::exp::{exp, expf};
use crate::simd::erfc::erfc_lanes;
use crate::simd::erfcf::erfcf_lanes;
use crate::simd::lanes::Lanes;
use crate::simd::traits::{SimdErfc, SimdExp, SimdMath};
use crate::{F32_LANES, F64_LANES, PARALLEL_CHUNK_SIZE};

#[inline(always)]
fn simd_apply<T, const N: usize>(a: &[T], c: &mut [T], kernel: impl Fn(Lanes<T, N>) -> Lanes<T, N>)
where
    T: Copy + Default,
{
    debug_assert_eq!(a.len(), c.len());

    let step = Lanes::<T, N>::LANE_COUNT;
    let mut a_blocks = a.chunks_exact(step);
    let mut c_blocks = c.chunks_exact_mut(step);

    for (a_block, c_block) in (&mut a_blocks).zip(&mut c_blocks) {
        kernel(Lanes::from(a_block)).store_at(c_block);
    }

    // remaining uncomplete lanes
    let a_rem = a_blocks.remainder();
    if !a_rem.is_empty() {
        kernel(Lanes::load_partial(a_rem)).store_at(c_blocks.into_remainder());
    }
}

#[inline(always)]
fn parallel_simd_apply<T, const N: usize>(
    a: &[T],
    c: &mut [T],
    kernel: impl Fn(Lanes<T, N>) -> Lanes<T, N> + Sync,
) where
    T: Copy + Default + Send + Sync,
{
    debug_assert_eq!(a.len(), c.len());

    c.par_chunks_mut(PARALLEL_CHUNK_SIZE)
        .zip(a.par_chunks(PARALLEL_CHUNK_SIZE))
        .for_each(|(c_chunk, a_chunk)| simd_apply(a_chunk, c_chunk, &kernel));
}

#[inline(always)]
fn check_lengths<T>(a: &[T], c: &[T]) -> Result<()> {
    if a.len() != c.len() {
        return Err(length_mismatch(a.len(), c.len()));
    }
    Ok(())
}

/// Writes `erfc(src[i])` into `dst[i]` using the 8-lane kernel.
///
/// # Errors
///
/// [`ErfclyError::LengthMismatch`](crate::ErfclyError::LengthMismatch) when
/// `dst` and `src` differ in length; `dst` is left untouched.
pub fn erfc_into(src: &[f64], dst: &mut [f64]) -> Result<()> {
    check_lengths(src, dst)?;
    simd_apply(src, dst, erfc_lanes::<F64_LANES>);
    Ok(())
}

/// Parallel version of [`erfc_into`].
pub fn par_erfc_into(src: &[f64], dst: &mut [f64]) -> Result<()> {
    check_lengths(src, dst)?;
    parallel_simd_apply(src, dst, erfc_lanes::<F64_LANES>);
    Ok(())
}

/// Writes `erfcf(src[i])` into `dst[i]` using the 16-lane kernel.
///
/// # Errors
///
/// [`ErfclyError::LengthMismatch`](crate::ErfclyError::LengthMismatch) when
/// `dst` and `src` differ in length; `dst` is left untouched.
pub fn erfcf_into(src: &[f32], dst: &mut [f32]) -> Result<()> {
    check_lengths(src, dst)?;
    simd_apply(src, dst, erfcf_lanes::<F32_LANES>);
    Ok(())
}

/// Parallel version of [`erfcf_into`].
pub fn par_erfcf_into(src: &[f32], dst: &mut [f32]) -> Result<()> {
    check_lengths(src, dst)?;
    parallel_simd_apply(src, dst, erfcf_lanes::<F32_LANES>);
    Ok(())
}

impl SimdErfc<&[f64]> for &[f64] {
    type Output = Vec<f64>;

    #[inline(always)]
    fn simd_erfc(self) -> Self::Output {
        let mut c = vec![0.0; self.len()];
        simd_apply(self, &mut c, erfc_lanes::<F64_LANES>);
        c
    }

    #[inline(always)]
    fn par_simd_erfc(self) -> Self::Output {
        let mut c = vec![0.0; self.len()];
        parallel_simd_apply(self, &mut c, erfc_lanes::<F64_LANES>);
        c
    }

    #[inline(always)]
    fn scalar_erfc(self) -> Self::Output {
        self.iter().map(|&x| erfc(x)).collect()
    }
}

impl SimdErfc<&[f32]> for &[f32] {
    type Output = Vec<f32>;

    #[inline(always)]
    fn simd_erfc(self) -> Self::Output {
        let mut c = vec![0.0; self.len()];
        simd_apply(self, &mut c, erfcf_lanes::<F32_LANES>);
        c
    }

    #[inline(always)]
    fn par_simd_erfc(self) -> Self::Output {
        let mut c = vec![0.0; self.len()];
        parallel_simd_apply(self, &mut c, erfcf_lanes::<F32_LANES>);
        c
    }

    #[inline(always)]
    fn scalar_erfc(self) -> Self::Output {
        self.iter().map(|&x| erfcf(x)).collect()
    }
}

impl SimdExp<&[f64]> for &[f64] {
    type Output = Vec<f64>;

    #[inline(always)]
    fn simd_exp(self) -> Self::Output {
        let mut c = vec![0.0; self.len()];
        simd_apply(self, &mut c, Lanes::<f64, F64_LANES>::exp);
        c
    }

    #[inline(always)]
    fn par_simd_exp(self) -> Self::Output {
        let mut c = vec![0.0; self.len()];
        parallel_simd_apply(self, &mut c, Lanes::<f64, F64_LANES>::exp);
        c
    }

    #[inline(always)]
    fn scalar_exp(self) -> Self::Output {
        self.iter().map(|&x| exp(x)).collect()
    }
}

impl SimdExp<&[f32]> for &[f32] {
    type Output = Vec<f32>;

    #[inline(always)]
    fn simd_exp(self) -> Self::Output {
        let mut c = vec![0.0; self.len()];
        simd_apply(self, &mut c, Lanes::<f32, F32_LANES>::exp);
        c
    }

    #[inline(always)]
    fn par_simd_exp(self) -> Self::Output {
        let mut c = vec![0.0; self.len()];
        parallel_simd_apply(self, &mut c, Lanes::<f32, F32_LANES>::exp);
        c
    }

    #[inline(always)]
    fn scalar_exp(self) -> Self::Output {
        self.iter().map(|&x| expf(x)).collect()
    }
}
