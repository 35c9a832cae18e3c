//! Portable fixed-width vectors.
//!
//! `Lanes<T, N>` holds `N` packed values and applies every operation lane by
//! lane with plain IEEE arithmetic, so each lane computes exactly what the
//! scalar code computes for the same sequence of operations. The fixed-size
//! array layout lets the compiler map the loops onto SSE, AVX or AVX-512
//! registers when the target allows it.
//!
//! # Widths
//!
//! | Alias | Register | Lanes |
//! |---|---|---|
//! | [`F64x2`] / [`F32x4`] | 128-bit | 2 / 4 |
//! | [`F64x4`] / [`F32x8`] | 256-bit | 4 / 8 |
//! | [`F64x8`] / [`F32x16`] | 512-bit | 8 / 16 |
//!
//! # Loading and Storing
//! - `From<&[T]>` - loads up to `N` elements, zero padding short slices
//! - [`Lanes::try_load`] - same, rejecting empty slices
//! - [`Lanes::store_at`] - writes back only the valid elements

use std::ops::{Add, BitAnd, Div, Index, Mul, Neg, Sub};

use crate::error::{validation_error, Result};
use crate::scalar::poly::Operand;

/// `N` packed values of type `T`.
///
/// ```rust
/// use erfcly::simd::lanes::F64x4;
///
/// let data = [1.0, 2.0, 3.0];
/// let v = F64x4::from(data.as_slice());
/// assert_eq!(v.size, 3);
/// assert_eq!(v.to_array(), [1.0, 2.0, 3.0, 0.0]);
/// ```
#[derive(Copy, Clone, Debug)]
pub struct Lanes<T, const N: usize> {
    /// Number of valid elements (at most `N`); the remaining lanes are padding.
    pub size: usize,
    pub elements: [T; N],
}

/// 2 × f64, SSE register width.
pub type F64x2 = Lanes<f64, 2>;
/// 4 × f64, AVX register width.
pub type F64x4 = Lanes<f64, 4>;
/// 8 × f64, AVX-512 register width.
pub type F64x8 = Lanes<f64, 8>;
/// 4 × f32, SSE register width.
pub type F32x4 = Lanes<f32, 4>;
/// 8 × f32, AVX register width.
pub type F32x8 = Lanes<f32, 8>;
/// 16 × f32, AVX-512 register width.
pub type F32x16 = Lanes<f32, 16>;

impl<T: Copy + Default, const N: usize> Lanes<T, N> {
    /// Lanes per vector.
    pub const LANE_COUNT: usize = N;

    #[inline(always)]
    pub fn splat(value: T) -> Self {
        Self {
            size: N,
            elements: [value; N],
        }
    }

    #[inline(always)]
    pub fn from_array(elements: [T; N]) -> Self {
        Self { size: N, elements }
    }

    #[inline(always)]
    pub fn to_array(self) -> [T; N] {
        self.elements
    }

    /// Loads the first `min(slice.len(), N)` elements and pads with `T::default()`.
    #[inline(always)]
    pub fn load_partial(slice: &[T]) -> Self {
        let size = slice.len().min(N);
        let mut elements = [T::default(); N];
        elements[..size].copy_from_slice(&slice[..size]);

        Self { size, elements }
    }

    /// Like [`Lanes::load_partial`] but fails on an empty slice.
    pub fn try_load(slice: &[T]) -> Result<Self> {
        if slice.is_empty() {
            return Err(validation_error(format!(
                "cannot load a {}-lane vector from an empty slice",
                N
            )));
        }

        Ok(Self::load_partial(slice))
    }

    /// Writes the valid elements into `out`, truncated to `out.len()`.
    #[inline(always)]
    pub fn store_at(&self, out: &mut [T]) {
        let size = self.size.min(out.len());
        out[..size].copy_from_slice(&self.elements[..size]);
    }

    #[inline(always)]
    pub fn map<U: Copy + Default>(self, f: impl Fn(T) -> U) -> Lanes<U, N> {
        Lanes {
            size: self.size,
            elements: self.elements.map(f),
        }
    }

    /// Evaluates a predicate on every lane.
    #[inline(always)]
    pub fn mask(self, f: impl Fn(T) -> bool) -> Mask<N> {
        Mask {
            lanes: self.elements.map(f),
        }
    }

    #[inline(always)]
    fn zip_with(self, rhs: Self, f: impl Fn(T, T) -> T) -> Self {
        Self {
            size: self.size.min(rhs.size),
            elements: std::array::from_fn(|i| f(self.elements[i], rhs.elements[i])),
        }
    }
}

impl<T: Copy + Default + PartialOrd, const N: usize> Lanes<T, N> {
    #[inline(always)]
    pub fn simd_lt(self, rhs: Self) -> Mask<N> {
        Mask {
            lanes: std::array::from_fn(|i| self.elements[i] < rhs.elements[i]),
        }
    }

    #[inline(always)]
    pub fn simd_ge(self, rhs: Self) -> Mask<N> {
        Mask {
            lanes: std::array::from_fn(|i| self.elements[i] >= rhs.elements[i]),
        }
    }
}

impl<const N: usize> Lanes<f64, N> {
    #[inline(always)]
    pub fn abs(self) -> Self {
        self.map(f64::abs)
    }
}

impl<const N: usize> Lanes<f32, N> {
    #[inline(always)]
    pub fn abs(self) -> Self {
        self.map(f32::abs)
    }
}

impl<T: Copy + Default, const N: usize> From<&[T]> for Lanes<T, N> {
    /// Loads up to `N` elements; shorter slices are zero padded.
    #[inline(always)]
    fn from(slice: &[T]) -> Self {
        Self::load_partial(slice)
    }
}

impl<T, const N: usize> Index<usize> for Lanes<T, N> {
    type Output = T;

    #[inline(always)]
    fn index(&self, index: usize) -> &T {
        &self.elements[index]
    }
}

macro_rules! impl_lane_op {
    ($op:ident, $method:ident) => {
        impl<T, const N: usize> $op for Lanes<T, N>
        where
            T: Copy + Default + $op<Output = T>,
        {
            type Output = Self;

            #[inline(always)]
            fn $method(self, rhs: Self) -> Self::Output {
                self.zip_with(rhs, |a, b| a.$method(b))
            }
        }
    };
}

impl_lane_op!(Add, add);
impl_lane_op!(Sub, sub);
impl_lane_op!(Mul, mul);
impl_lane_op!(Div, div);

impl<T, const N: usize> Neg for Lanes<T, N>
where
    T: Copy + Default + Neg<Output = T>,
{
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self::Output {
        self.map(|a| -a)
    }
}

impl<const N: usize> Operand<f64> for Lanes<f64, N> {
    #[inline(always)]
    fn splat(value: f64) -> Self {
        Lanes::splat(value)
    }
}

impl<const N: usize> Operand<f32> for Lanes<f32, N> {
    #[inline(always)]
    fn splat(value: f32) -> Self {
        Lanes::splat(value)
    }
}

/// Per-lane booleans produced by vector comparisons.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Mask<const N: usize> {
    pub lanes: [bool; N],
}

impl<const N: usize> Mask<N> {
    #[inline(always)]
    pub fn all(self) -> bool {
        self.lanes.iter().all(|&lane| lane)
    }

    #[inline(always)]
    pub fn any(self) -> bool {
        self.lanes.iter().any(|&lane| lane)
    }

    /// Picks `if_true` where the mask is set and `if_false` elsewhere.
    #[inline(always)]
    pub fn select<T: Copy + Default>(self, if_true: Lanes<T, N>, if_false: Lanes<T, N>) -> Lanes<T, N> {
        Lanes {
            size: if_true.size.min(if_false.size),
            elements: std::array::from_fn(|i| {
                if self.lanes[i] {
                    if_true.elements[i]
                } else {
                    if_false.elements[i]
                }
            }),
        }
    }
}

impl<const N: usize> BitAnd for Mask<N> {
    type Output = Self;

    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self::Output {
        Self {
            lanes: std::array::from_fn(|i| self.lanes[i] & rhs.lanes[i]),
        }
    }
}
