//! erfc Table Demonstration
//!
//! Prints erfc across every approximation region, shows that the vector
//! kernel agrees with the scalar one, and how the buffer-writing driver
//! reports a bad output length.

use erfcly::simd::{F32x8, F64x4, SimdErfc, SimdMath};
use erfcly::{erfc, erfc_into, erfcf, ErfclyError};

fn main() {
    println!("📈 erfc across regions\n");

    let points = [-28.0, -6.0, -2.0, -1.0, -0.5, 0.0, 1e-9, 0.5, 1.0, 1.25, 2.0, 3.0, 6.0, 10.0, 28.0];
    println!("   {:>8}  {:>24}  {:>16}", "x", "erfc(x)", "erfcf(x)");
    for &x in &points {
        println!("   {:>8}  {:>24.17e}  {:>16.9e}", x, erfc(x), erfcf(x as f32));
    }
    println!();

    println!("🧮 Vector kernels");
    let v = F64x4::from_array([0.3, 0.9, 2.0, -4.0]).erfc();
    for i in 0..4 {
        println!("   lane {i}: {:.17e}", v[i]);
    }
    let w = F32x8::from_array([0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8]).erfc();
    println!("   f32x8: {:?}", w.to_array());
    println!();

    println!("📦 Slices");
    let xs: Vec<f64> = (0..10).map(|i| i as f64 * 0.5).collect();
    println!("   par_simd_erfc: {:?}", xs.as_slice().par_simd_erfc());

    let mut short = vec![0.0; 4];
    match erfc_into(&xs, &mut short) {
        Ok(()) => println!("   Unexpected success"),
        Err(ErfclyError::LengthMismatch { expected, actual }) => {
            println!("   Length mismatch caught: need {expected}, got {actual}")
        }
        Err(e) => println!("   Error: {e}"),
    }
}
