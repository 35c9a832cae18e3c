//! Approximation regions of `erfc` and the per-precision boundary tables.

/// Magnitude ranges sharing one reconstruction formula, in increasing order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Region {
    /// Subnormal-adjacent inputs: `1 - (x + x*x)`. Never selected for `f32`.
    Minute,
    /// Below the tiny threshold: `1 - x`.
    Tiny,
    /// `|x| < 0.84375`: rational approximation of `erf(x)/x`.
    NearZero,
    /// `0.84375 <= |x| < 1.25`: rational approximation around `erf(1)`.
    NearOne,
    /// `1.25 <= |x| < 1/0.35` (f32: about 2.107): exponential tail, first coefficient set.
    Tail,
    /// From the sub-split up to 28: exponential tail, second coefficient set.
    FarTail,
    /// `|x| >= 28`: result saturates to `0` or `2`.
    Saturated,
    /// Infinities and NaNs.
    Special,
}

impl Region {
    pub const ALL: [Region; 8] = [
        Region::Minute,
        Region::Tiny,
        Region::NearZero,
        Region::NearOne,
        Region::Tail,
        Region::FarTail,
        Region::Saturated,
        Region::Special,
    ];

    #[inline(always)]
    const fn index(self) -> usize {
        self as usize
    }
}

/// Boundary keys partitioning `[0, +inf]` into [`Region`]s.
///
/// `bounds[i]` is the smallest key of `Region::ALL[i + 1]`; keys are compared
/// as produced by [`FloatBits::classify_bits`](crate::scalar::bits::FloatBits::classify_bits).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RegionTable {
    pub bounds: [u32; 7],
    /// Negative inputs of [`Region::FarTail`] at or above this key return 2.
    pub neg_cutoff: u32,
}

impl RegionTable {
    /// Region containing `key`.
    #[inline(always)]
    pub fn locate(&self, key: u32) -> Region {
        let position = self.bounds.iter().take_while(|&&bound| key >= bound).count();
        Region::ALL[position]
    }

    /// Smallest key belonging to `region`.
    #[inline(always)]
    pub const fn lower(&self, region: Region) -> u32 {
        match region.index() {
            0 => 0,
            i => self.bounds[i - 1],
        }
    }

    /// First key past `region`, `u32::MAX` for [`Region::Special`].
    #[inline(always)]
    pub const fn upper(&self, region: Region) -> u32 {
        match region {
            Region::Special => u32::MAX,
            _ => self.bounds[region.index()],
        }
    }
}

/// Double precision keys: high word of `|x|`.
pub const F64_REGIONS: RegionTable = RegionTable {
    bounds: [
        0x0080_0000, // 2^-1015
        0x3e30_0000, // 2^-28
        0x3feb_0000, // 0.84375
        0x3ff4_0000, // 1.25
        0x4006_db6d, // 1/0.35
        0x403c_0000, // 28
        0x7ff0_0000, // inf / nan
    ],
    neg_cutoff: 0x4018_0000, // 6
};

/// Single precision keys: bits of `|x|`. `Minute` is empty.
pub const F32_REGIONS: RegionTable = RegionTable {
    bounds: [
        0x0000_0000,
        0x3280_0000, // 2^-26
        0x3f58_0000, // 0.84375
        0x3fa0_0000, // 1.25
        0x4006_db6d, // ~2.107
        0x41e0_0000, // 28
        0x7f80_0000, // inf / nan
    ],
    neg_cutoff: 0x40c0_0000, // 6
};
