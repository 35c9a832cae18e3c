//! Double precision complementary error function.
//!
//! `erfc(x) = 1 - erf(x)`, evaluated piecewise over the regions of
//! [`F64_REGIONS`]:
//!
//! * `|x| < 0.84375`: `1 - (x + x*P(x^2)/Q(x^2))`.
//! * `0.84375 <= |x| < 1.25`: with `s = |x| - 1` and `erx = erf(1)` rounded to
//!   single precision, `(1 - erx) - P(s)/Q(s)` for positive `x` and
//!   `1 + (erx + P(s)/Q(s))` for negative `x`.
//! * `1.25 <= |x| < 28`: `exp(-x^2 - 0.5625 + R(1/x^2)/S(1/x^2)) / |x|`, the
//!   exponential split in two calls around the high word of `|x|`. Negative
//!   inputs return `2 - result`, or exactly 2 once `|x| >= 6`.
//! * `|x| >= 28`: underflows to 0 for positive `x`, 2 for negative `x`.
//!
//! Worst observed error is about 2.5 ulp, except below `2^-28` where `1 - x`
//! is returned as is.

use crate::scalar::bits::FloatBits;
use crate::scalar::exp::exp;
use crate::scalar::poly::rational;
use crate::scalar::regions::{Region, F64_REGIONS};

/// `erf(1)` rounded to single precision.
#[allow(clippy::excessive_precision)]
pub(crate) const ERX: f64 = 8.450_629_115_104_675_292_97e-01;
/// `2^-997`; squaring it underflows to zero.
pub(crate) const TINY: f64 = 7.466_108_948_025_751e-301;
pub(crate) const EXP_OFFSET: f64 = 0.5625;

// |x| < 0.84375
pub(crate) const PP: [f64; 5] = [
    0.128_379_167_095_512_56,
    -0.325_042_107_247_001_5,
    -0.028_481_749_575_598_51,
    -0.005_770_270_296_489_442,
    -2.376_301_665_665_016_3e-05,
];
pub(crate) const QQ: [f64; 5] = [
    0.397_917_223_959_155_35,
    0.065_022_249_988_767_3,
    0.005_081_306_281_875_766,
    0.000_132_494_738_004_321_64,
    -3.960_228_278_775_368e-06,
];

// 0.84375 <= |x| < 1.25
pub(crate) const PA: [f64; 7] = [
    -0.002_362_118_560_752_659_4,
    0.414_856_118_683_748_33,
    -0.372_207_876_035_701_3,
    0.318_346_619_901_161_75,
    -0.110_894_694_282_396_68,
    0.035_478_304_325_618_236,
    -0.002_166_375_594_868_791,
];
pub(crate) const QA: [f64; 6] = [
    0.106_420_880_400_844_23,
    0.540_397_917_702_171,
    0.071_828_654_414_196_28,
    0.126_171_219_808_761_64,
    0.013_637_083_912_029_05,
    0.011_984_499_846_799_107,
];

// 1.25 <= |x| < 1/0.35
pub(crate) const RA: [f64; 8] = [
    -0.009_864_944_034_847_148,
    -0.693_858_572_707_181_8,
    -10.558_626_225_323_291,
    -62.375_332_450_326_006,
    -162.396_669_462_573_47,
    -184.605_092_906_711_04,
    -81.287_435_506_306_6,
    -9.814_329_344_169_145,
];
pub(crate) const SA: [f64; 8] = [
    19.651_271_667_439_257,
    137.657_754_143_519_04,
    434.565_877_475_229_23,
    645.387_271_733_267_9,
    429.008_140_027_567_83,
    108.635_005_541_779_44,
    6.570_249_770_319_282,
    -0.060_424_415_214_858_1,
];

// 1/0.35 <= |x| < 28
pub(crate) const RB: [f64; 7] = [
    -0.009_864_942_924_700_1,
    -0.799_283_237_680_523,
    -17.757_954_917_754_752,
    -160.636_384_855_821_92,
    -637.566_443_368_389_6,
    -1_025.095_131_611_077_2,
    -483.519_191_608_651_4,
];
pub(crate) const SB: [f64; 7] = [
    30.338_060_743_482_46,
    325.792_512_996_573_9,
    1_536.729_586_084_437,
    3_199.858_219_508_595_5,
    2_553.050_406_433_164_4,
    474.528_541_206_955_37,
    -22.440_952_446_585_82,
];

/// Complementary error function (f64).
///
/// Total over every input: `erfc(+inf) = 0`, `erfc(-inf) = 2` and a NaN input
/// comes back as `x - x`, which quiets signalling NaNs.
pub fn erfc(x: f64) -> f64 {
    let c = x.classify_bits();

    match F64_REGIONS.locate(c.key) {
        Region::Special => special(x, c.negative),
        Region::Minute => 1.0 - (x + x * x),
        Region::Tiny => 1.0 - x,
        Region::NearZero => {
            let z = x * x;
            let y = rational(z, &PP, &QQ);
            1.0 - (x + x * y)
        }
        Region::NearOne => {
            let s = f64::from_abs_bits(c.abs_bits) - 1.0;
            let p = rational(s, &PA, &QA);
            if c.negative {
                1.0 + (ERX + p)
            } else {
                (1.0 - ERX) - p
            }
        }
        Region::FarTail if c.negative && c.key >= F64_REGIONS.neg_cutoff => 2.0,
        region @ (Region::Tail | Region::FarTail) => {
            let ax = f64::from_abs_bits(c.abs_bits);
            let s = 1.0 / (ax * ax);
            let rs = if region == Region::Tail {
                rational(s, &RA, &SA)
            } else {
                rational(s, &RB, &SB)
            };
            let z = ax.high_part();
            let r = exp(-z * z - EXP_OFFSET) * exp((z - ax) * (z + ax) + rs);
            if c.negative {
                2.0 - r / ax
            } else {
                r / ax
            }
        }
        Region::Saturated => {
            if c.negative {
                2.0
            } else {
                TINY * TINY
            }
        }
    }
}

#[inline(always)]
fn special(x: f64, negative: bool) -> f64 {
    if x.is_nan() {
        x - x
    } else if negative {
        2.0
    } else {
        0.0
    }
}
