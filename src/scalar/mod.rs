//! Scalar reference kernels.
//!
//! These are the oracles for the vector kernels in [`crate::simd`]: every
//! vector lane must produce exactly the bits the scalar kernel produces.

pub mod bits;
pub mod erfc;
pub mod erfcf;
pub mod exp;
pub mod poly;
pub mod regions;
