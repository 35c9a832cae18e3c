//! Exponential primitives feeding the asymptotic erfc region.
//!
//! # Method
//!
//! 1. Reduce `x = k*ln2 + r` with `|r| <= 0.5*ln2`, keeping `r = hi - lo`
//!    with a two-constant `ln2` so `k*ln2hi` is exact.
//! 2. Approximate `R(r^2) = r*(exp(r)+1)/(exp(r)-1)` with a minimax
//!    polynomial and rebuild `exp(r) = 1 + r + r*c/(2 - c)`.
//! 3. Scale by `2^k`.
//!
//! Both variants are below 1 ulp. `exp(nan)` is nan, `exp(+inf)` is `+inf`
//! and `exp(-inf)` is `0`.

const HALF: [f64; 2] = [0.5, -0.5];
const LN2_HI: f64 = 6.931_471_803_691_238_164_90e-01;
const LN2_LO: f64 = 1.908_214_929_270_587_700_02e-10;
const INV_LN2: f64 = 1.442_695_040_888_963_387_00e+00;
const P1: f64 = 1.666_666_666_666_660_190_37e-01;
const P2: f64 = -2.777_777_777_701_559_338_42e-03;
const P3: f64 = 6.613_756_321_437_934_361_17e-05;
const P4: f64 = -1.653_390_220_546_525_153_90e-06;
const P5: f64 = 4.138_136_797_057_238_460_39e-08;

const EXP_OVERFLOW: f64 = 709.782_712_893_383_973_096;
const EXP_UNDERFLOW: f64 = -745.133_219_101_941_108_42;

/// Multiplies `x` by `2^n` without intermediate rounding for normal results.
#[inline]
fn scalbn(x: f64, mut n: i32) -> f64 {
    let x1p1023 = f64::from_bits(0x7fe0_0000_0000_0000);
    let x1p53 = f64::from_bits(0x4340_0000_0000_0000);
    let x1p_1022 = f64::from_bits(0x0010_0000_0000_0000);

    let mut y = x;
    if n > 1023 {
        y *= x1p1023;
        n -= 1023;
        if n > 1023 {
            y *= x1p1023;
            n -= 1023;
            if n > 1023 {
                n = 1023;
            }
        }
    } else if n < -1022 {
        // Scale by 2^-969 first so the final product rounds once.
        y *= x1p_1022 * x1p53;
        n += 1022 - 53;
        if n < -1022 {
            y *= x1p_1022 * x1p53;
            n += 1022 - 53;
            if n < -1022 {
                n = -1022;
            }
        }
    }
    y * f64::from_bits(((0x3ff + n) as u64) << 52)
}

/// Exponential, base *e* (f64).
pub fn exp(x: f64) -> f64 {
    let hx = (x.to_bits() >> 32) as u32;
    let sign = (hx >> 31) as usize;
    let hx = hx & 0x7fff_ffff;

    // |x| >= 708.39
    if hx >= 0x4086_232b {
        if x.is_nan() {
            return x;
        }
        if x > EXP_OVERFLOW {
            return x * f64::from_bits(0x7fe0_0000_0000_0000);
        }
        if x < EXP_UNDERFLOW {
            return 0.0;
        }
    }

    let (r, hi, lo, k) = if hx > 0x3fd6_2e42 {
        // |x| > 0.5 ln2
        let k = if hx >= 0x3ff0_a2b2 {
            (INV_LN2 * x + HALF[sign]) as i32
        } else {
            1 - 2 * sign as i32
        };
        let hi = x - k as f64 * LN2_HI;
        let lo = k as f64 * LN2_LO;
        (hi - lo, hi, lo, k)
    } else if hx > 0x3e30_0000 {
        (x, x, 0.0, 0)
    } else {
        return 1.0 + x;
    };

    let rr = r * r;
    let c = r - rr * (P1 + rr * (P2 + rr * (P3 + rr * (P4 + rr * P5))));
    let y = 1.0 + (r * c / (2.0 - c) - lo + hi);

    if k == 0 {
        y
    } else {
        scalbn(y, k)
    }
}

const HALF_F: [f32; 2] = [0.5, -0.5];
const LN2_HI_F: [f32; 2] = [6.931_457_5e-1, -6.931_457_5e-1];
const LN2_LO_F: [f32; 2] = [1.428_606_8e-6, -1.428_606_8e-6];
const INV_LN2_F: f32 = 1.442_695;
const P1_F: f32 = 1.666_662_5e-1;
const P2_F: f32 = -2.766_733_3e-3;

const EXPF_OVERFLOW: f32 = 88.721_68;
const EXPF_UNDERFLOW: f32 = -103.972_084;

/// Exponential, base *e* (f32).
pub fn expf(x: f32) -> f32 {
    let hx = x.to_bits();
    let sign = (hx >> 31) as usize;
    let hx = hx & 0x7fff_ffff;

    // |x| >= 88.72 or nan
    if hx >= 0x42b1_7218 {
        if hx > 0x7f80_0000 {
            return x + x;
        }
        if hx == 0x7f80_0000 {
            return if sign == 0 { x } else { 0.0 };
        }
        if x > EXPF_OVERFLOW {
            return x * f32::from_bits(0x7f00_0000);
        }
        if x < EXPF_UNDERFLOW {
            return 0.0;
        }
    }

    let (r, hi, lo, k) = if hx > 0x3eb1_7218 {
        // |x| > 0.5 ln2
        if hx < 0x3f85_1592 {
            let hi = x - LN2_HI_F[sign];
            let lo = LN2_LO_F[sign];
            (hi - lo, hi, lo, 1 - 2 * sign as i32)
        } else {
            let k = (INV_LN2_F * x + HALF_F[sign]) as i32;
            let t = k as f32;
            let hi = x - t * LN2_HI_F[0];
            let lo = t * LN2_LO_F[0];
            (hi - lo, hi, lo, k)
        }
    } else if hx < 0x3900_0000 {
        // |x| < 2^-13
        return 1.0 + x;
    } else {
        (x, x, 0.0, 0)
    };

    let rr = r * r;
    let c = r - rr * (P1_F + rr * P2_F);
    if k == 0 {
        return 1.0 - ((r * c) / (c - 2.0) - r);
    }
    let y = 1.0 - ((lo - (r * c) / (2.0 - c)) - hi);

    if k >= -125 {
        if k == 128 {
            return y * 2.0 * f32::from_bits(0x7f00_0000);
        }
        y * f32::from_bits(((0x7f + k) as u32) << 23)
    } else {
        y * f32::from_bits(((0x7f + k + 100) as u32) << 23) * f32::from_bits(0x0d80_0000)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ulp_distance_f64(a: f64, b: f64) -> u64 {
        (a.to_bits() as i64 - b.to_bits() as i64).unsigned_abs()
    }

    #[test]
    fn test_exp_special_values() {
        assert!(exp(f64::NAN).is_nan());
        assert_eq!(exp(f64::INFINITY), f64::INFINITY);
        assert_eq!(exp(f64::NEG_INFINITY), 0.0);
        assert_eq!(exp(0.0), 1.0);
        assert_eq!(exp(-0.0), 1.0);
        assert_eq!(exp(710.0), f64::INFINITY);
        assert_eq!(exp(-746.0), 0.0);
    }

    #[test]
    fn test_exp_close_to_std() {
        let mut x = -740.0f64;
        while x < 709.0 {
            let diff = ulp_distance_f64(exp(x), x.exp());
            assert!(diff <= 1, "exp({x}) off by {diff} ulp");
            x += 0.371;
        }
    }

    #[test]
    fn test_exp_subnormal_results() {
        let y = exp(-740.0);
        assert!(y > 0.0 && y < f64::MIN_POSITIVE);
        assert!(ulp_distance_f64(y, (-740.0f64).exp()) <= 1);
    }

    #[test]
    fn test_expf_special_values() {
        assert!(expf(f32::NAN).is_nan());
        assert_eq!(expf(f32::INFINITY), f32::INFINITY);
        assert_eq!(expf(f32::NEG_INFINITY), 0.0);
        assert_eq!(expf(0.0), 1.0);
        assert_eq!(expf(89.0), f32::INFINITY);
        assert_eq!(expf(-104.0), 0.0);
    }

    #[test]
    fn test_expf_close_to_std() {
        let mut x = -87.0f32;
        while x < 88.0 {
            let expected = (x as f64).exp();
            let rel = ((expf(x) as f64 - expected) / expected).abs();
            assert!(rel < 2.5e-7, "expf({x}) relative error {rel:e}");
            x += 0.173;
        }
    }
}
