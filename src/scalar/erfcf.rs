//! Single precision complementary error function.
//!
//! Same piecewise scheme as [`erfc`](crate::scalar::erfc::erfc) with single
//! precision coefficients, a `2^-26` tiny threshold and a high part that keeps
//! the top 10 mantissa bits. Between `1/4` and `0.84375` the result is rebuilt
//! around `0.5` to keep the subtraction exact.

use crate::scalar::bits::FloatBits;
use crate::scalar::exp::expf;
use crate::scalar::poly::rational;
use crate::scalar::regions::{Region, F32_REGIONS};

pub(crate) const ERX: f32 = 8.450_629e-1;
/// `0x1.4484cp-100`; squaring it underflows to zero.
pub(crate) const TINY: f32 = 1e-30;
pub(crate) const EXP_OFFSET: f32 = 0.5625;
/// `1/4`, compared against the signed bit pattern so negative inputs fall below it.
pub(crate) const QUARTER_KEY: i32 = 0x3e80_0000;

pub(crate) const PP: [f32; 5] = [
    0.128_379_17,
    -0.325_042_1,
    -0.028_481_75,
    -0.005_770_270_2,
    -2.376_301_7e-5,
];
pub(crate) const QQ: [f32; 5] = [
    0.397_917_2,
    0.065_022_25,
    0.005_081_306,
    1.324_947_4e-4,
    -3.960_228_2e-6,
];

pub(crate) const PA: [f32; 7] = [
    -0.002_362_118_6,
    0.414_856_1,
    -0.372_207_88,
    0.318_346_62,
    -0.110_894_695,
    0.035_478_305,
    -0.002_166_375_5,
];
pub(crate) const QA: [f32; 6] = [
    0.106_420_88,
    0.540_397_94,
    0.071_828_656,
    0.126_171_22,
    0.013_637_084,
    0.011_984_5,
];

pub(crate) const RA: [f32; 8] = [
    -0.009_864_944,
    -0.693_858_56,
    -10.558_626,
    -62.375_33,
    -162.396_67,
    -184.605_09,
    -81.287_44,
    -9.814_329,
];
pub(crate) const SA: [f32; 8] = [
    19.651_272,
    137.657_76,
    434.565_9,
    645.387_27,
    429.008_15,
    108.635,
    6.570_249_6,
    -0.060_424_414,
];

pub(crate) const RB: [f32; 7] = [
    -0.009_864_943,
    -0.799_283_27,
    -17.757_956,
    -160.636_38,
    -637.566_47,
    -1_025.095_1,
    -483.519_2,
];
pub(crate) const SB: [f32; 7] = [
    30.338_06,
    325.792_5,
    1_536.729_6,
    3_199.858_2,
    2_553.050_3,
    474.528_53,
    -22.440_952,
];

/// Complementary error function (f32).
pub fn erfcf(x: f32) -> f32 {
    let c = x.classify_bits();

    match F32_REGIONS.locate(c.key) {
        Region::Special => special(x, c.negative),
        Region::Minute | Region::Tiny => 1.0 - x,
        Region::NearZero => {
            let z = x * x;
            let y = rational(z, &PP, &QQ);
            if (x.to_bits() as i32) < QUARTER_KEY {
                1.0 - (x + x * y)
            } else {
                0.5 - (x * y + (x - 0.5))
            }
        }
        Region::NearOne => {
            let s = f32::from_abs_bits(c.abs_bits) - 1.0;
            let p = rational(s, &PA, &QA);
            if c.negative {
                1.0 + (ERX + p)
            } else {
                (1.0 - ERX) - p
            }
        }
        Region::FarTail if c.negative && c.key >= F32_REGIONS.neg_cutoff => 2.0 - TINY,
        region @ (Region::Tail | Region::FarTail) => {
            let ax = f32::from_abs_bits(c.abs_bits);
            let s = 1.0 / (ax * ax);
            let rs = if region == Region::Tail {
                rational(s, &RA, &SA)
            } else {
                rational(s, &RB, &SB)
            };
            let z = ax.high_part();
            let r = expf(-z * z - EXP_OFFSET) * expf((z - ax) * (z + ax) + rs);
            if c.negative {
                2.0 - r / ax
            } else {
                r / ax
            }
        }
        Region::Saturated => {
            if c.negative {
                2.0 - TINY
            } else {
                TINY * TINY
            }
        }
    }
}

#[inline(always)]
fn special(x: f32, negative: bool) -> f32 {
    if x.is_nan() {
        x - x
    } else if negative {
        2.0
    } else {
        0.0
    }
}
