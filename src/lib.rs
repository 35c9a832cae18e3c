//! Complementary error function for `f64` and `f32`.
//!
//! Three layers share one set of coefficient tables:
//!
//! - [`erfc`] / [`erfcf`]: scalar reference kernels.
//! - [`simd`]: fixed-width vector kernels (2/4/8 × f64, 4/8/16 × f32) that
//!   match the scalar kernels bit for bit in every lane.
//! - Slice drivers through [`SimdErfc`](simd::SimdErfc) and
//!   [`erfc_into`](simd::slice::erfc_into), sequential or spread over Rayon.
//!
//! ```rust
//! use erfcly::simd::{F64x4, SimdErfc, SimdMath};
//!
//! assert_eq!(erfcly::erfc(0.0), 1.0);
//!
//! let v = F64x4::from_array([0.5, 1.0, 1.5, 2.0]).erfc();
//! assert_eq!(v[1], erfcly::erfc(1.0));
//!
//! let xs = vec![-1.0f32, 0.0, 1.0];
//! assert_eq!(xs.as_slice().simd_erfc()[1], 1.0);
//! ```

pub mod error;
pub mod scalar;
pub mod simd;

pub use error::{ErfclyError, Result};
pub use scalar::erfc::erfc;
pub use scalar::erfcf::erfcf;
pub use scalar::exp::{exp, expf};
pub use simd::slice::{erfc_into, erfcf_into, par_erfc_into, par_erfcf_into};

/// Lanes per `f64` vector used by the slice drivers.
pub const F64_LANES: usize = 8;
/// Lanes per `f32` vector used by the slice drivers.
pub const F32_LANES: usize = 16;

/// Elements handed to one Rayon task; a multiple of both lane counts.
pub const PARALLEL_CHUNK_SIZE: usize = 4096;
