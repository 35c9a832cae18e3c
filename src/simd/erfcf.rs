//! Single precision vector erfc.
//!
//! Same agreement test as the double precision kernel. In the near-zero
//! region both reconstructions are evaluated and the lanes pick theirs by
//! comparing against `1/4`.

use crate::scalar::bits::FloatBits;
use crate::scalar::erfcf::{
    erfcf, ERX, EXP_OFFSET, PA, PP, QA, QQ, QUARTER_KEY, RA, RB, SA, SB, TINY,
};
use crate::scalar::poly::rational;
use crate::scalar::regions::{Region, F32_REGIONS};
use crate::simd::lanes::{F32x16, F32x4, F32x8, Lanes};
use crate::simd::traits::SimdMath;

/// `erfcf` over any lane count, bit-identical to the scalar kernel per lane.
pub fn erfcf_lanes<const N: usize>(x: Lanes<f32, N>) -> Lanes<f32, N> {
    let keys = x.map(|v| v.classify_bits().key);
    let region = F32_REGIONS.locate(keys[0]);

    let in_region = keys.simd_ge(Lanes::splat(F32_REGIONS.lower(region)))
        & keys.simd_lt(Lanes::splat(F32_REGIONS.upper(region)));
    if !in_region.all() {
        return x.map(erfcf);
    }

    let negative = x.mask(f32::is_sign_negative);
    let one = Lanes::splat(1.0);
    let two = Lanes::splat(2.0);
    let tiny = Lanes::splat(TINY);

    match region {
        Region::Special => {
            let nan = x.mask(f32::is_nan);
            nan.select(x - x, negative.select(two, Lanes::splat(0.0)))
        }
        Region::Minute | Region::Tiny => one - x,
        Region::NearZero => {
            let half = Lanes::splat(0.5);
            let z = x * x;
            let y = rational(z, &PP, &QQ);
            let below_quarter = x.mask(|v| (v.to_bits() as i32) < QUARTER_KEY);
            below_quarter.select(one - (x + x * y), half - (x * y + (x - half)))
        }
        Region::NearOne => {
            let s = x.abs() - one;
            let p = rational(s, &PA, &QA);
            negative.select(
                one + (Lanes::splat(ERX) + p),
                (one - Lanes::splat(ERX)) - p,
            )
        }
        Region::Tail | Region::FarTail => {
            if region == Region::FarTail {
                let cutoff = negative & keys.simd_ge(Lanes::splat(F32_REGIONS.neg_cutoff));
                if cutoff.all() {
                    return two - tiny;
                }
                if cutoff.any() {
                    return x.map(erfcf);
                }
            }

            let ax = x.abs();
            let s = one / (ax * ax);
            let rs = if region == Region::Tail {
                rational(s, &RA, &SA)
            } else {
                rational(s, &RB, &SB)
            };
            let z = ax.map(f32::high_part);
            let r = (-z * z - Lanes::splat(EXP_OFFSET)).exp() * ((z - ax) * (z + ax) + rs).exp();
            let q = r / ax;
            negative.select(two - q, q)
        }
        Region::Saturated => negative.select(two - tiny, tiny * tiny),
    }
}

/// 4-lane `erfcf`.
#[inline]
pub fn erfcf_f32x4(x: F32x4) -> F32x4 {
    erfcf_lanes(x)
}

/// 8-lane `erfcf`.
#[inline]
pub fn erfcf_f32x8(x: F32x8) -> F32x8 {
    erfcf_lanes(x)
}

/// 16-lane `erfcf`.
#[inline]
pub fn erfcf_f32x16(x: F32x16) -> F32x16 {
    erfcf_lanes(x)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_matches_scalar<const N: usize>(input: [f32; N]) {
        let out = erfcf_lanes(Lanes::from_array(input));
        for (i, &x) in input.iter().enumerate() {
            let expected = erfcf(x);
            if expected.is_nan() {
                assert!(out[i].is_nan(), "lane {i} should be NaN");
                continue;
            }
            assert_eq!(
                out[i].to_bits(),
                expected.to_bits(),
                "lane {i} (x = {x:e}) of {input:?}"
            );
        }
    }

    #[test]
    fn test_near_zero_mixes_both_reconstructions() {
        assert_matches_scalar([0.1, 0.3, -0.3, 0.8]);
        assert_matches_scalar([0.2, -0.8, 0.26, 0.5, 0.0625, -0.0625, 0.75, 0.249]);
    }

    #[test]
    fn test_uniform_regions_match_scalar() {
        assert_matches_scalar([1e-9, -1e-10, 0.0, -0.0]);
        assert_matches_scalar([0.9, -1.0, 1.1, -1.2]);
        assert_matches_scalar([1.3, -1.7, 2.0, -2.1]);
        assert_matches_scalar([2.2, -2.8, 3.0, 4.5, 9.0, 10.5, -2.5, 2.75]);
        assert_matches_scalar([-3.0, -4.5, -5.5, -5.99]);
        assert_matches_scalar([28.0, -30.0, 1e10, -1e30]);
    }

    #[test]
    fn test_far_tail_negative_cutoff() {
        let out = erfcf_f32x4(F32x4::from_array([-6.0, -7.5, -20.0, -27.0]));
        assert_eq!(out.to_array(), [2.0; 4]);

        assert_matches_scalar([-5.5, -6.5, 3.0, -27.0]);
    }

    #[test]
    fn test_straddling_lanes_fall_back() {
        let input = [
            0.0f32, 0.5, 0.84375, 1.25, 2.0, 3.0, 6.0, 28.0, -0.5, -1.0, -2.0, -3.0, -6.0,
            f32::INFINITY, f32::NEG_INFINITY, f32::NAN,
        ];
        assert_matches_scalar(input);
        assert!(erfcf_f32x16(F32x16::from_array(input))[15].is_nan());
    }
}
