pub mod erfc;
pub mod erfcf;
pub mod lanes;
pub mod slice;
pub mod traits;

pub use lanes::{F32x16, F32x4, F32x8, F64x2, F64x4, F64x8, Lanes, Mask};
pub use traits::{SimdErfc, SimdExp, SimdMath};
