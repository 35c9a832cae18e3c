//! Double precision vector erfc.
//!
//! The kernel classifies every lane first. When all lanes fall in one region
//! that region's formula runs once over the full vector, with the sign
//! dependent final step chosen per lane by mask. Otherwise each lane goes
//! through the scalar [`erfc`] and the results are reassembled.

use crate::scalar::bits::FloatBits;
use crate::scalar::erfc::{erfc, ERX, EXP_OFFSET, PA, PP, QA, QQ, RA, RB, SA, SB, TINY};
use crate::scalar::poly::rational;
use crate::scalar::regions::{Region, F64_REGIONS};
use crate::simd::lanes::{F64x2, F64x4, F64x8, Lanes};
use crate::simd::traits::SimdMath;

/// `erfc` over any lane count, bit-identical to the scalar kernel per lane.
pub fn erfc_lanes<const N: usize>(x: Lanes<f64, N>) -> Lanes<f64, N> {
    let keys = x.map(|v| v.classify_bits().key);
    let region = F64_REGIONS.locate(keys[0]);

    let in_region = keys.simd_ge(Lanes::splat(F64_REGIONS.lower(region)))
        & keys.simd_lt(Lanes::splat(F64_REGIONS.upper(region)));
    if !in_region.all() {
        return x.map(erfc);
    }

    let negative = x.mask(f64::is_sign_negative);
    let one = Lanes::splat(1.0);
    let two = Lanes::splat(2.0);

    match region {
        Region::Special => {
            let nan = x.mask(f64::is_nan);
            nan.select(x - x, negative.select(two, Lanes::splat(0.0)))
        }
        Region::Minute => one - (x + x * x),
        Region::Tiny => one - x,
        Region::NearZero => {
            let z = x * x;
            let y = rational(z, &PP, &QQ);
            one - (x + x * y)
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
                let cutoff = negative & keys.simd_ge(Lanes::splat(F64_REGIONS.neg_cutoff));
                if cutoff.all() {
                    return two;
                }
                if cutoff.any() {
                    return x.map(erfc);
                }
            }

            let ax = x.abs();
            let s = one / (ax * ax);
            let rs = if region == Region::Tail {
                rational(s, &RA, &SA)
            } else {
                rational(s, &RB, &SB)
            };
            let z = ax.map(f64::high_part);
            let r = (-z * z - Lanes::splat(EXP_OFFSET)).exp() * ((z - ax) * (z + ax) + rs).exp();
            let q = r / ax;
            negative.select(two - q, q)
        }
        Region::Saturated => {
            let tiny = Lanes::splat(TINY);
            negative.select(two, tiny * tiny)
        }
    }
}

/// 2-lane `erfc`.
#[inline]
pub fn erfc_f64x2(x: F64x2) -> F64x2 {
    erfc_lanes(x)
}

/// 4-lane `erfc`.
#[inline]
pub fn erfc_f64x4(x: F64x4) -> F64x4 {
    erfc_lanes(x)
}

/// 8-lane `erfc`.
#[inline]
pub fn erfc_f64x8(x: F64x8) -> F64x8 {
    erfc_lanes(x)
}
