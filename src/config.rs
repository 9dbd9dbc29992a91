//! Bit-rate to PLL/HS-timing configuration
//!
//! The table below carries the characterized M31 DPHY TX settings for a
//! 12 MHz reference clock. Values are measured per board, not derived, so
//! the lookup is an exact match on the aligned bit rate: rates are rounded
//! up to the next [`BITRATE_ALIGN`] step and the table is scanned in order.
//!
//! Coverage is 160-200 Mbps and 320-1000 Mbps in 10 Mbps steps. Rates in
//! between (210-310 Mbps) have no entry.

use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::consts::{BITRATE_ALIGN, MAP_LANES_NUM};

/// One characterized PLL and HS timing setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DphyConfig {
    pub ref_clk_hz: u32,
    pub bitrate_hz: u64,
    pub pll_pre_div: u32,
    pub pll_fbk_int: u32,
    pub pll_fbk_fra: u32,
    pub extd_cycle_sel: u32,
    pub dlane_hs_pre_time: u32,
    pub dlane_hs_zero_time: u32,
    pub dlane_hs_trail_time: u32,
    pub clane_hs_pre_time: u32,
    pub clane_hs_zero_time: u32,
    pub clane_hs_trail_time: u32,
    pub clane_hs_clk_pre_time: u32,
    pub clane_hs_clk_post_time: u32,
}

impl DphyConfig {
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        ref_clk_hz: u32,
        bitrate_hz: u64,
        pll_pre_div: u32,
        pll_fbk_int: u32,
        pll_fbk_fra: u32,
        extd_cycle_sel: u32,
        dlane_hs_pre_time: u32,
        dlane_hs_zero_time: u32,
        dlane_hs_trail_time: u32,
        clane_hs_pre_time: u32,
        clane_hs_zero_time: u32,
        clane_hs_trail_time: u32,
        clane_hs_clk_pre_time: u32,
        clane_hs_clk_post_time: u32,
    ) -> Self {
        Self {
            ref_clk_hz,
            bitrate_hz,
            pll_pre_div,
            pll_fbk_int,
            pll_fbk_fra,
            extd_cycle_sel,
            dlane_hs_pre_time,
            dlane_hs_zero_time,
            dlane_hs_trail_time,
            clane_hs_pre_time,
            clane_hs_zero_time,
            clane_hs_trail_time,
            clane_hs_clk_pre_time,
            clane_hs_clk_post_time,
        }
    }

    pub fn ref_clk(&self) -> Option<RefClock> {
        RefClock::from_hz(self.ref_clk_hz)
    }
}

/// Reference clock input, as encoded in `REFCLK_IN_SEL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
#[repr(u32)]
pub enum RefClock {
    Mhz12 = 1,
}

impl RefClock {
    pub fn from_hz(hz: u32) -> Option<Self> {
        match hz {
            12_000_000 => Some(Self::Mhz12),
            _ => None,
        }
    }

    pub fn hz(self) -> u32 {
        match self {
            Self::Mhz12 => 12_000_000,
        }
    }
}

#[rustfmt::skip]
pub static M31_DPHY_CONFIGS: [DphyConfig; 74] = [
    DphyConfig::new(12_000_000, 160_000_000, 0x0, 0x6a, 0xaa_aaaa, 0x3, 0xa, 0x17, 0x11, 0x5, 0x2b, 0xd, 0x7, 0x3d),
    DphyConfig::new(12_000_000, 170_000_000, 0x0, 0x71, 0x55_5555, 0x3, 0xb, 0x18, 0x11, 0x5, 0x2e, 0xd, 0x7, 0x3d),
    DphyConfig::new(12_000_000, 180_000_000, 0x0, 0x78, 0x0, 0x3, 0xb, 0x19, 0x12, 0x6, 0x30, 0xe, 0x7, 0x3e),
    DphyConfig::new(12_000_000, 190_000_000, 0x0, 0x7e, 0xaa_aaaa, 0x3, 0xc, 0x1a, 0x12, 0x6, 0x33, 0xe, 0x7, 0x3e),
    DphyConfig::new(12_000_000, 200_000_000, 0x0, 0x85, 0x55_5555, 0x3, 0xc, 0x1b, 0x13, 0x7, 0x35, 0xf, 0x7, 0x3f),
    DphyConfig::new(12_000_000, 320_000_000, 0x0, 0x6a, 0xaa_aaaa, 0x2, 0x8, 0x14, 0xf, 0x5, 0x2b, 0xd, 0x3, 0x23),
    DphyConfig::new(12_000_000, 330_000_000, 0x0, 0x6e, 0x0, 0x2, 0x8, 0x15, 0xf, 0x5, 0x2d, 0xd, 0x3, 0x23),
    DphyConfig::new(12_000_000, 340_000_000, 0x0, 0x71, 0x55_5555, 0x2, 0x9, 0x15, 0xf, 0x5, 0x2e, 0xd, 0x3, 0x23),
    DphyConfig::new(12_000_000, 350_000_000, 0x0, 0x74, 0xaa_aaaa, 0x2, 0x9, 0x15, 0x10, 0x6, 0x2f, 0xe, 0x3, 0x24),
    DphyConfig::new(12_000_000, 360_000_000, 0x0, 0x78, 0x0, 0x2, 0x9, 0x16, 0x10, 0x6, 0x30, 0xe, 0x3, 0x24),
    DphyConfig::new(12_000_000, 370_000_000, 0x0, 0x7b, 0x55_5555, 0x2, 0x9, 0x17, 0x10, 0x6, 0x32, 0xe, 0x3, 0x24),
    DphyConfig::new(12_000_000, 380_000_000, 0x0, 0x7e, 0xaa_aaaa, 0x2, 0xa, 0x17, 0x10, 0x6, 0x33, 0xe, 0x3, 0x24),
    DphyConfig::new(12_000_000, 390_000_000, 0x0, 0x82, 0x0, 0x2, 0xa, 0x17, 0x11, 0x6, 0x35, 0xf, 0x3, 0x25),
    DphyConfig::new(12_000_000, 400_000_000, 0x0, 0x85, 0x55_5555, 0x2, 0xa, 0x18, 0x11, 0x7, 0x35, 0xf, 0x3, 0x25),
    DphyConfig::new(12_000_000, 410_000_000, 0x0, 0x88, 0xaa_aaaa, 0x2, 0xa, 0x19, 0x11, 0x7, 0x37, 0xf, 0x3, 0x25),
    DphyConfig::new(12_000_000, 420_000_000, 0x0, 0x8c, 0x0, 0x2, 0xa, 0x19, 0x12, 0x7, 0x38, 0x10, 0x3, 0x26),
    DphyConfig::new(12_000_000, 430_000_000, 0x0, 0x8f, 0x55_5555, 0x2, 0xb, 0x19, 0x12, 0x7, 0x39, 0x10, 0x3, 0x26),
    DphyConfig::new(12_000_000, 440_000_000, 0x0, 0x92, 0xaa_aaaa, 0x2, 0xb, 0x1a, 0x12, 0x7, 0x3b, 0x10, 0x3, 0x26),
    DphyConfig::new(12_000_000, 450_000_000, 0x0, 0x96, 0x0, 0x2, 0xb, 0x1b, 0x12, 0x8, 0x3c, 0x10, 0x3, 0x26),
    DphyConfig::new(12_000_000, 460_000_000, 0x0, 0x99, 0x55_5555, 0x2, 0xb, 0x1b, 0x13, 0x8, 0x3d, 0x11, 0x3, 0x27),
    DphyConfig::new(12_000_000, 470_000_000, 0x0, 0x9c, 0xaa_aaaa, 0x2, 0xc, 0x1b, 0x13, 0x8, 0x3e, 0x11, 0x3, 0x27),
    DphyConfig::new(12_000_000, 480_000_000, 0x0, 0xa0, 0x0, 0x2, 0xc, 0x1c, 0x13, 0x8, 0x40, 0x11, 0x3, 0x27),
    DphyConfig::new(12_000_000, 490_000_000, 0x0, 0xa3, 0x55_5555, 0x2, 0xc, 0x1d, 0x14, 0x8, 0x42, 0x12, 0x3, 0x28),
    DphyConfig::new(12_000_000, 500_000_000, 0x0, 0xa6, 0xaa_aaaa, 0x2, 0xc, 0x1d, 0x14, 0x9, 0x42, 0x12, 0x3, 0x28),
    DphyConfig::new(12_000_000, 510_000_000, 0x0, 0xaa, 0x0, 0x2, 0xc, 0x1e, 0x14, 0x9, 0x44, 0x12, 0x3, 0x28),
    DphyConfig::new(12_000_000, 520_000_000, 0x0, 0xad, 0x55_5555, 0x2, 0xd, 0x1e, 0x15, 0x9, 0x45, 0x13, 0x3, 0x29),
    DphyConfig::new(12_000_000, 530_000_000, 0x0, 0xb0, 0xaa_aaaa, 0x2, 0xd, 0x1e, 0x15, 0x9, 0x47, 0x13, 0x3, 0x29),
    DphyConfig::new(12_000_000, 540_000_000, 0x0, 0xb4, 0x0, 0x2, 0xd, 0x1f, 0x15, 0x9, 0x48, 0x13, 0x3, 0x29),
    DphyConfig::new(12_000_000, 550_000_000, 0x0, 0xb7, 0x55_5555, 0x2, 0xd, 0x20, 0x16, 0x9, 0x4a, 0x14, 0x3, 0x2a),
    DphyConfig::new(12_000_000, 560_000_000, 0x0, 0xba, 0xaa_aaaa, 0x2, 0xe, 0x20, 0x16, 0xa, 0x4a, 0x14, 0x3, 0x2a),
    DphyConfig::new(12_000_000, 570_000_000, 0x0, 0xbe, 0x0, 0x2, 0xe, 0x20, 0x16, 0xa, 0x4c, 0x14, 0x3, 0x2a),
    DphyConfig::new(12_000_000, 580_000_000, 0x0, 0xc1, 0x55_5555, 0x2, 0xe, 0x21, 0x16, 0xa, 0x4d, 0x14, 0x3, 0x2a),
    DphyConfig::new(12_000_000, 590_000_000, 0x0, 0xc4, 0xaa_aaaa, 0x2, 0xe, 0x22, 0x17, 0xa, 0x4f, 0x15, 0x3, 0x2b),
    DphyConfig::new(12_000_000, 600_000_000, 0x0, 0xc8, 0x0, 0x2, 0xe, 0x23, 0x17, 0xa, 0x50, 0x15, 0x3, 0x2b),
    DphyConfig::new(12_000_000, 610_000_000, 0x0, 0xcb, 0x55_5555, 0x2, 0xf, 0x22, 0x17, 0xb, 0x50, 0x15, 0x3, 0x2b),
    DphyConfig::new(12_000_000, 620_000_000, 0x0, 0xce, 0xaa_aaaa, 0x2, 0xf, 0x23, 0x18, 0xb, 0x52, 0x16, 0x3, 0x2c),
    DphyConfig::new(12_000_000, 630_000_000, 0x0, 0x69, 0x0, 0x1, 0x7, 0x12, 0xd, 0x5, 0x2a, 0xc, 0x1, 0x15),
    DphyConfig::new(12_000_000, 640_000_000, 0x0, 0x6a, 0xaa_aaaa, 0x1, 0x7, 0x13, 0xe, 0x5, 0x2b, 0xd, 0x1, 0x16),
    DphyConfig::new(12_000_000, 650_000_000, 0x0, 0x6c, 0x55_5555, 0x1, 0x7, 0x13, 0xe, 0x5, 0x2c, 0xd, 0x1, 0x16),
    DphyConfig::new(12_000_000, 660_000_000, 0x0, 0x6e, 0x0, 0x1, 0x7, 0x13, 0xe, 0x5, 0x2d, 0xd, 0x1, 0x16),
    DphyConfig::new(12_000_000, 670_000_000, 0x0, 0x6f, 0xaa_aaaa, 0x1, 0x8, 0x13, 0xe, 0x5, 0x2d, 0xd, 0x1, 0x16),
    DphyConfig::new(12_000_000, 680_000_000, 0x0, 0x71, 0x55_5555, 0x1, 0x8, 0x13, 0xe, 0x5, 0x2e, 0xd, 0x1, 0x16),
    DphyConfig::new(12_000_000, 690_000_000, 0x0, 0x73, 0x0, 0x1, 0x8, 0x14, 0xe, 0x6, 0x2e, 0xd, 0x1, 0x16),
    DphyConfig::new(12_000_000, 700_000_000, 0x0, 0x74, 0xaa_aaaa, 0x1, 0x8, 0x14, 0xf, 0x6, 0x2f, 0xe, 0x1, 0x16),
    DphyConfig::new(12_000_000, 710_000_000, 0x0, 0x76, 0x55_5555, 0x1, 0x8, 0x14, 0xf, 0x6, 0x2f, 0xe, 0x1, 0x17),
    DphyConfig::new(12_000_000, 720_000_000, 0x0, 0x78, 0x0, 0x1, 0x8, 0x15, 0xf, 0x6, 0x30, 0xe, 0x1, 0x17),
    DphyConfig::new(12_000_000, 730_000_000, 0x0, 0x79, 0xaa_aaaa, 0x1, 0x8, 0x15, 0xf, 0x6, 0x31, 0xe, 0x1, 0x17),
    DphyConfig::new(12_000_000, 740_000_000, 0x0, 0x7b, 0x55_5555, 0x1, 0x8, 0x15, 0xf, 0x6, 0x32, 0xe, 0x1, 0x17),
    DphyConfig::new(12_000_000, 750_000_000, 0x0, 0x7d, 0x0, 0x1, 0x8, 0x16, 0xf, 0x6, 0x32, 0xe, 0x1, 0x17),
    DphyConfig::new(12_000_000, 760_000_000, 0x0, 0x7e, 0xaa_aaaa, 0x1, 0x9, 0x15, 0xf, 0x6, 0x33, 0xe, 0x1, 0x17),
    DphyConfig::new(12_000_000, 770_000_000, 0x0, 0x80, 0x55_5555, 0x1, 0x9, 0x15, 0x10, 0x6, 0x34, 0xf, 0x1, 0x18),
    DphyConfig::new(12_000_000, 780_000_000, 0x0, 0x82, 0x0, 0x1, 0x9, 0x16, 0x10, 0x6, 0x35, 0xf, 0x1, 0x18),
    DphyConfig::new(12_000_000, 790_000_000, 0x0, 0x83, 0xaa_aaaa, 0x1, 0x9, 0x16, 0x10, 0x7, 0x34, 0xf, 0x1, 0x18),
    DphyConfig::new(12_000_000, 800_000_000, 0x0, 0x85, 0x55_5555, 0x1, 0x9, 0x17, 0x10, 0x7, 0x35, 0xf, 0x1, 0x18),
    DphyConfig::new(12_000_000, 810_000_000, 0x0, 0x87, 0x0, 0x1, 0x9, 0x17, 0x10, 0x7, 0x36, 0xf, 0x1, 0x18),
    DphyConfig::new(12_000_000, 820_000_000, 0x0, 0x88, 0xaa_aaaa, 0x1, 0x9, 0x17, 0x10, 0x7, 0x37, 0xf, 0x1, 0x18),
    DphyConfig::new(12_000_000, 830_000_000, 0x0, 0x8a, 0x55_5555, 0x1, 0x9, 0x18, 0x10, 0x7, 0x37, 0xf, 0x1, 0x18),
    DphyConfig::new(12_000_000, 840_000_000, 0x0, 0x8c, 0x0, 0x1, 0x9, 0x18, 0x11, 0x7, 0x38, 0x10, 0x1, 0x19),
    DphyConfig::new(12_000_000, 850_000_000, 0x0, 0x8d, 0xaa_aaaa, 0x1, 0xa, 0x17, 0x11, 0x7, 0x39, 0x10, 0x1, 0x19),
    DphyConfig::new(12_000_000, 860_000_000, 0x0, 0x8f, 0x55_5555, 0x1, 0xa, 0x18, 0x11, 0x7, 0x39, 0x10, 0x1, 0x19),
    DphyConfig::new(12_000_000, 870_000_000, 0x0, 0x91, 0x0, 0x1, 0xa, 0x18, 0x11, 0x7, 0x3a, 0x10, 0x1, 0x19),
    DphyConfig::new(12_000_000, 880_000_000, 0x0, 0x92, 0xaa_aaaa, 0x1, 0xa, 0x18, 0x11, 0x7, 0x3b, 0x10, 0x1, 0x19),
    DphyConfig::new(12_000_000, 890_000_000, 0x0, 0x94, 0x55_5555, 0x1, 0xa, 0x19, 0x11, 0x7, 0x3c, 0x10, 0x1, 0x19),
    DphyConfig::new(12_000_000, 900_000_000, 0x0, 0x96, 0x0, 0x1, 0xa, 0x19, 0x12, 0x8, 0x3c, 0x10, 0x1, 0x19),
    DphyConfig::new(12_000_000, 910_000_000, 0x0, 0x97, 0xaa_aaaa, 0x1, 0xa, 0x19, 0x12, 0x8, 0x3c, 0x11, 0x1, 0x1a),
    DphyConfig::new(12_000_000, 920_000_000, 0x0, 0x99, 0x55_5555, 0x1, 0xa, 0x1a, 0x12, 0x8, 0x3d, 0x11, 0x1, 0x1a),
    DphyConfig::new(12_000_000, 930_000_000, 0x0, 0x9b, 0x0, 0x1, 0xa, 0x1a, 0x12, 0x8, 0x3e, 0x11, 0x1, 0x1a),
    DphyConfig::new(12_000_000, 940_000_000, 0x0, 0x9c, 0xaa_aaaa, 0x1, 0xb, 0x1a, 0x12, 0x8, 0x3e, 0x11, 0x1, 0x1a),
    DphyConfig::new(12_000_000, 950_000_000, 0x0, 0x9e, 0x55_5555, 0x1, 0xb, 0x1a, 0x12, 0x8, 0x3f, 0x11, 0x1, 0x1a),
    DphyConfig::new(12_000_000, 960_000_000, 0x0, 0xa0, 0x0, 0x1, 0xb, 0x1a, 0x12, 0x8, 0x40, 0x11, 0x1, 0x1a),
    DphyConfig::new(12_000_000, 970_000_000, 0x0, 0xa1, 0xaa_aaaa, 0x1, 0xb, 0x1b, 0x13, 0x8, 0x41, 0x12, 0x1, 0x1b),
    DphyConfig::new(12_000_000, 980_000_000, 0x0, 0xa3, 0x55_5555, 0x1, 0xb, 0x1b, 0x13, 0x8, 0x42, 0x12, 0x1, 0x1b),
    DphyConfig::new(12_000_000, 990_000_000, 0x0, 0xa5, 0x0, 0x1, 0xb, 0x1b, 0x13, 0x8, 0x42, 0x12, 0x1, 0x1b),
    DphyConfig::new(12_000_000, 1_000_000_000, 0x0, 0xa6, 0xaa_aaaa, 0x1, 0xb, 0x1c, 0x13, 0x9, 0x42, 0x12, 0x1, 0x1b),
];

/// Rounds `bitrate` up to the next [`BITRATE_ALIGN`] multiple.
///
/// Saturates instead of wrapping; a saturated rate never matches a row.
pub fn align_bitrate(bitrate: u64) -> u64 {
    bitrate
        .checked_next_multiple_of(BITRATE_ALIGN)
        .unwrap_or(u64::MAX)
}

/// Looks up the configuration for `bitrate`, after rounding it up to the
/// alignment step. The scan is linear and takes the first exact match.
pub fn select_config(bitrate: u64) -> Option<&'static DphyConfig> {
    let aligned = align_bitrate(bitrate);
    M31_DPHY_CONFIGS.iter().find(|p| p.bitrate_hz == aligned)
}

/// Physical lane index for each logical lane `[data0, data1, data2, data3, clock]`.
///
/// Must be a permutation of `0..=4`; this is not checked.
pub type LaneMap = [u8; MAP_LANES_NUM];

/// Per-compatible board data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DphyInfo {
    pub maps: LaneMap,
}

pub const STARFIVE_DPHY_INFO: DphyInfo = DphyInfo {
    maps: [0, 1, 2, 3, 4],
};

pub const OF_MATCH_TABLE: &[(&str, &DphyInfo)] =
    &[("starfive,jh7110-dphy-tx", &STARFIVE_DPHY_INFO)];

/// Finds the board data bound to a device-tree `compatible` string.
pub fn of_match(compatible: &str) -> Option<&'static DphyInfo> {
    OF_MATCH_TABLE
        .iter()
        .find(|(c, _)| *c == compatible)
        .map(|&(_, info)| info)
}
