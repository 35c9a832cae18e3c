//! Accuracy and IEEE behaviour of the double precision `erfc`.
//!
//! Results are compared against `statrs` as an independent reference, and
//! the algebraic properties of erfc (range, symmetry, monotonicity) are
//! checked across every approximation region.

use std::hint::black_box;

use erfcly::erfc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// `2^-28`: below it the kernel returns `1 - x` unrefined.
const TINY_THRESHOLD: f64 = 3.725_290_298_461_914e-9;

fn ulp_distance(a: f64, b: f64) -> u64 {
    let key = |v: f64| {
        let bits = v.to_bits() as i64;
        if bits < 0 {
            i64::MIN - bits
        } else {
            bits
        }
    };
    (key(a) - key(b)).unsigned_abs()
}

/// Test the conformance scenarios and a few extra reference points, bit for bit.
#[test]
fn test_erfc_reference_scenarios() {
    let cases: [(u64, u64); 6] = [
        (0x3ff0_0000_0000_0000, 0x3fc4_2261_62fb_ddd5), // 1.0 -> 0.15729920705028513
        (0x4062_0000_0000_0000, 0x0000_0000_0000_0000), // 144.0 underflows
        (0xc017_b000_c953_9b89, 0x4000_0000_0000_0000), // -5.92 -> 2
        (0x3fe0_0000_0000_0000, 0x3fde_b021_47ce_245c), // 0.5 -> 0.4795001221869535
        (0x4018_0000_0000_0000, 0x3c78_cf81_557d_20b7), // 6.0
        (0x403c_0000_0000_0000, 0x0000_0000_0000_0000), // 28.0
    ];

    for (input, expected) in cases {
        let x = f64::from_bits(input);
        let y = erfc(x);
        println!("erfc({x:e}) = {y:e} ({:#018x})", y.to_bits());
        assert_eq!(y.to_bits(), expected, "erfc({x:e}) = {y:e}");
    }

    assert!((erfc(1.0) - 0.157_299_207_050_285_13).abs() < 1e-17);
}

/// Test the special inputs, including both signed zeros.
#[test]
fn test_erfc_special_values() {
    assert_eq!(erfc(0.0).to_bits(), 1.0f64.to_bits());
    assert_eq!(erfc(-0.0).to_bits(), 1.0f64.to_bits());
    assert_eq!(erfc(f64::INFINITY).to_bits(), 0.0f64.to_bits());
    assert_eq!(erfc(f64::NEG_INFINITY), 2.0);
    assert!(erfc(f64::NAN).is_nan());
    assert!(erfc(-f64::NAN).is_nan());
}

/// Test that a signalling NaN comes back quiet.
#[test]
fn test_erfc_signalling_nan_is_quieted() {
    let snan = f64::from_bits(0x7ff0_0000_0000_0001);
    let y = erfc(black_box(snan));

    assert!(y.is_nan());
    assert_ne!(y.to_bits() & 0x0008_0000_0000_0000, 0, "quiet bit must be set");
}

/// Test that every finite input lands in [0, 2].
#[test]
fn test_erfc_range_random_bit_patterns() {
    let mut rng = StdRng::seed_from_u64(12345);

    for _ in 0..100_000 {
        let x = f64::from_bits(rng.random::<u64>());
        if x.is_nan() {
            continue;
        }
        let y = erfc(x);
        assert!((0.0..=2.0).contains(&y), "erfc({x:e}) = {y:e} out of range");
    }
}

/// Correctly rounded erfc values (50-digit evaluation).
const REFERENCE_VALUES: [(f64, f64); 21] = [
    (-5.5, 1.999_999_999_999_992_7),
    (-3.25, 1.999_995_697_220_536_4),
    (-1.75, 1.986_671_671_219_182_5),
    (-1.0, 1.842_700_792_949_714_8),
    (-0.6, 1.603_856_090_847_925_8),
    (-0.125, 1.140_316_204_801_333_8),
    (1e-6, 0.999_998_871_620_832_9),
    (0.3, 0.671_373_240_540_872_6),
    (0.7, 0.322_198_806_162_581_56),
    (0.9, 0.203_091_787_577_167_86),
    (1.1, 0.119_794_930_425_918_27),
    (1.5, 0.033_894_853_524_689_274),
    (2.023_646_372_462_726_7, 0.004_211_520_749_444_376),
    (2.5, 0.000_406_952_017_444_958_9),
    (3.0, 2.209_049_699_858_544e-5),
    (4.0, 1.541_725_790_028_002e-8),
    (6.5, 3.842_148_327_120_647_5e-20),
    (9.0, 4.137_031_746_513_81e-37),
    (12.5, 6.231_942_781_979_911e-70),
    (20.0, 5.395_865_611_607_901e-176),
    (26.5, 2.210_907_664_263_734_3e-307),
];

/// Test the ulp error against correctly rounded values in every region.
#[test]
fn test_erfc_ulp_error_against_reference_values() {
    for (x, expected) in REFERENCE_VALUES {
        let actual = erfc(x);
        let ulps = ulp_distance(actual, expected);
        assert!(
            ulps <= 2,
            "erfc({x}) = {actual:e}, correctly rounded {expected:e}, {ulps} ulp apart"
        );
    }
}

/// Test precision against statrs over the non-saturated range.
///
/// statrs is only good to about 1e-10 relative, so this sweep catches gross
/// errors; the ulp bound lives in the reference-value test above.
#[test]
fn test_erfc_precision_random_inputs() {
    let mut rng = StdRng::seed_from_u64(12345);
    let mut max_rel_error = 0.0f64;
    let mut worst_input = 0.0f64;

    for _ in 0..20_000 {
        let x: f64 = rng.random_range(-5.9..10.0);
        if x.abs() < TINY_THRESHOLD {
            continue;
        }

        let expected = statrs::function::erf::erfc(x);
        let actual = erfc(x);
        let rel_error = ((actual - expected) / expected).abs();

        if rel_error > max_rel_error {
            max_rel_error = rel_error;
            worst_input = x;
        }
        assert!(
            rel_error < 1e-8,
            "erfc({x}) = {actual:e}, reference {expected:e}, rel error {rel_error:.2e}"
        );
    }

    println!("max relative error {max_rel_error:.3e} at x = {worst_input}");
}

/// Test erfc(x) + erfc(-x) = 2.
#[test]
fn test_erfc_symmetry() {
    let mut x = 0.0f64;
    while x < 30.0 {
        let sum = erfc(x) + erfc(-x);
        assert!(
            (sum - 2.0).abs() <= 4.5e-16,
            "erfc({x}) + erfc(-{x}) = {sum:e}"
        );
        x += 0.001;
    }
}

/// Test that erfc is non-increasing across all regions.
#[test]
fn test_erfc_monotonic_sweep() {
    let mut previous = erfc(-7.0);
    let mut x = -7.0f64;

    while x < 30.0 {
        x += 0.0007;
        let y = erfc(x);
        assert!(y <= previous, "erfc not monotonic at x = {x}: {y:e} > {previous:e}");
        previous = y;
    }
}

/// Test that stepping over a region boundary does not change the slope by more
/// than a few ulp.
#[test]
fn test_erfc_region_boundary_continuity() {
    let boundaries = [
        0.84375,
        1.25,
        f64::from_bits(0x4006_db6d_0000_0000),
        6.0,
        28.0,
    ];

    for &b in &boundaries {
        for x in [b, -b] {
            let below = erfc(x.next_down_compat());
            let at = erfc(x);
            let above = erfc(x.next_up_compat());

            assert!(below >= at && at >= above, "not monotonic around {x}");

            let d_lo = ulp_distance(below, at);
            let d_hi = ulp_distance(at, above);
            println!("boundary {x}: {d_lo} / {d_hi} ulp");
            assert!(
                d_lo.abs_diff(d_hi) <= 4,
                "jump at {x}: {d_lo} ulp below vs {d_hi} ulp above"
            );
        }
    }
}

/// Test that the tiny region stays monotonic where `1 - x` takes over.
///
/// `2^-28` itself is the first input of the rational region, so only the
/// value just below it is `1 - x`.
#[test]
fn test_erfc_tiny_threshold_is_monotonic() {
    let x_below = TINY_THRESHOLD.next_down_compat();
    let below = erfc(x_below);
    let at = erfc(TINY_THRESHOLD);
    let above = erfc(TINY_THRESHOLD.next_up_compat());

    assert_eq!(below, 1.0 - x_below);
    assert!(below >= at && at >= above);
}

trait NextFloat {
    fn next_up_compat(self) -> Self;
    fn next_down_compat(self) -> Self;
}

impl NextFloat for f64 {
    fn next_up_compat(self) -> Self {
        match self {
            x if x == 0.0 => f64::from_bits(1),
            x if x > 0.0 => f64::from_bits(x.to_bits() + 1),
            x => f64::from_bits(x.to_bits() - 1),
        }
    }

    fn next_down_compat(self) -> Self {
        -(-self).next_up_compat()
    }
}
