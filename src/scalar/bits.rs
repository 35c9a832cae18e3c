//! Bit-pattern views of IEEE-754 values.
//!
//! Every threshold comparison in the erfc kernels happens on integer keys
//! derived from the raw representation, never on the floating-point value.

/// A value split into the fields the region dispatch branches on.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Classified<B> {
    /// Sign bit of the input, set for `-0.0` as well.
    pub negative: bool,
    /// Raw bits of `|x|`.
    pub abs_bits: B,
    /// Monotonic proxy for `|x|` compared against the region table.
    ///
    /// For `f64` this is the high word of `|x|`, for `f32` the whole
    /// magnitude pattern.
    pub key: u32,
}

/// Float types the erfc kernels can classify.
pub trait FloatBits: Copy {
    type Bits: Copy;

    /// Mask keeping the bits of `|x|` that form the high part of the
    /// two-part exponential split.
    const SPLIT_MASK: Self::Bits;

    /// Splits `self` into sign, magnitude bits and region key.
    fn classify_bits(self) -> Classified<Self::Bits>;

    /// Rebuilds a value from a magnitude pattern.
    fn from_abs_bits(bits: Self::Bits) -> Self;

    /// `|x|` with the low mantissa bits selected by [`Self::SPLIT_MASK`] cleared.
    fn high_part(self) -> Self;
}

impl FloatBits for f64 {
    type Bits = u64;

    const SPLIT_MASK: u64 = 0xffff_ffff_0000_0000;

    #[inline(always)]
    fn classify_bits(self) -> Classified<u64> {
        let bits = self.to_bits();
        let abs_bits = bits & 0x7fff_ffff_ffff_ffff;

        Classified {
            negative: bits >> 63 != 0,
            abs_bits,
            key: (abs_bits >> 32) as u32,
        }
    }

    #[inline(always)]
    fn from_abs_bits(bits: u64) -> Self {
        f64::from_bits(bits)
    }

    #[inline(always)]
    fn high_part(self) -> Self {
        f64::from_bits(self.to_bits() & 0x7fff_ffff_ffff_ffff & Self::SPLIT_MASK)
    }
}

impl FloatBits for f32 {
    type Bits = u32;

    const SPLIT_MASK: u32 = 0xffff_e000;

    #[inline(always)]
    fn classify_bits(self) -> Classified<u32> {
        let bits = self.to_bits();
        let abs_bits = bits & 0x7fff_ffff;

        Classified {
            negative: bits >> 31 != 0,
            abs_bits,
            key: abs_bits,
        }
    }

    #[inline(always)]
    fn from_abs_bits(bits: u32) -> Self {
        f32::from_bits(bits)
    }

    #[inline(always)]
    fn high_part(self) -> Self {
        f32::from_bits(self.to_bits() & 0x7fff_ffff & Self::SPLIT_MASK)
    }
}
