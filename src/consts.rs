//! JH7110 DPHY TX (APBIF SAIF syscfg) register layout
//!
//! All registers are 32 bit words inside the `topsys` window. Each word's
//! fields are declared once with `register_bitfields!` and then bound to
//! their word offset as [`RegField`] constants, which is what the driver
//! programs through.
//!
//! ```text
//! 0x00  AON_POWER_READY_N [0], L0..L4_SWAP_SEL [26:12]
//! 0x08  RGS_CDTX_PLL_UNLOCK [18], L0N/L0P_HSTX_RES [28:19]
//! 0x0c  L1P/L2N/L2P/L3N/L3P_HSTX_RES [29:5]
//! 0x10  L4N/L4P_HSTX_RES [9:0]
//! 0x14  PLL_FBK_FRA [23:0]
//! 0x18  PLL_FBK_INT [8:0], FM_EN [9], LDO_STB_X2_EN [10], PRE_DIV [12:11]
//! 0x1c  PLL_SSC_EN [18]
//! 0x20  CLANE HS clk_post/clk_pre/pre/trail
//! 0x24  CLANE HS zero, DLANE HS pre/trail/zero
//! 0x28  EXTD_CYCLE_SEL [2:0]
//! 0x2c  C_HS_PRE_ZERO_TIME [31:0]
//! 0x30  DSI_TXREADY_ESC_SEL [2:1], PPI_C_READY_SEL [4:3]
//! 0x64  REFCLK_IN_SEL [28:26], RESETB [29]
//! ```

use tock_registers::register_bitfields;

use crate::regmap::RegField;

/// syscfg word offsets (bytes)
pub mod syscfg {
    pub const SYSCFG_0: u32 = 0;
    pub const SYSCFG_8: u32 = 8;
    pub const SYSCFG_12: u32 = 12;
    pub const SYSCFG_16: u32 = 16;
    pub const SYSCFG_20: u32 = 20;
    pub const SYSCFG_24: u32 = 24;
    pub const SYSCFG_28: u32 = 28;
    pub const SYSCFG_32: u32 = 32;
    pub const SYSCFG_36: u32 = 36;
    pub const SYSCFG_40: u32 = 40;
    pub const SYSCFG_44: u32 = 44;
    pub const SYSCFG_48: u32 = 48;
    pub const SYSCFG_100: u32 = 100;
}

/// Round requested bit rates up to this step before the table lookup.
pub const BITRATE_ALIGN: u64 = 10_000_000;

/// Physical lanes: four data lanes plus the clock lane.
pub const MAP_LANES_NUM: usize = 5;

/// `AON_POWER_READY_N` is active low.
pub const AON_POWER_READY_N_ACTIVE: u32 = 0;

/// Output resistance preset written to every HSTX driver leg.
pub const HSTX_RES_PRESET: u32 = 0x10;

/// Clock-lane HS pre+zero time strap.
pub const C_HS_PRE_ZERO_TIME: u32 = 0x30;

register_bitfields![u32,
    pub SYSCFG0 [
        AON_POWER_READY_N OFFSET(0) NUMBITS(1) [],
        L0_SWAP_SEL OFFSET(12) NUMBITS(3) [],
        L1_SWAP_SEL OFFSET(15) NUMBITS(3) [],
        L2_SWAP_SEL OFFSET(18) NUMBITS(3) [],
        L3_SWAP_SEL OFFSET(21) NUMBITS(3) [],
        L4_SWAP_SEL OFFSET(24) NUMBITS(3) [],
    ],
    pub SYSCFG8 [
        /// Reads 1 while the CDTX PLL is unlocked
        RGS_CDTX_PLL_UNLOCK OFFSET(18) NUMBITS(1) [],
        L0N_HSTX_RES OFFSET(19) NUMBITS(5) [],
        L0P_HSTX_RES OFFSET(24) NUMBITS(5) [],
    ],
    pub SYSCFG12 [
        L1P_HSTX_RES OFFSET(5) NUMBITS(5) [],
        L2N_HSTX_RES OFFSET(10) NUMBITS(5) [],
        L2P_HSTX_RES OFFSET(15) NUMBITS(5) [],
        L3N_HSTX_RES OFFSET(20) NUMBITS(5) [],
        L3P_HSTX_RES OFFSET(25) NUMBITS(5) [],
    ],
    pub SYSCFG16 [
        L4N_HSTX_RES OFFSET(0) NUMBITS(5) [],
        L4P_HSTX_RES OFFSET(5) NUMBITS(5) [],
    ],
    pub SYSCFG20 [
        PLL_FBK_FRA OFFSET(0) NUMBITS(24) [],
    ],
    pub SYSCFG24 [
        PLL_FBK_INT OFFSET(0) NUMBITS(9) [],
        PLL_FM_EN OFFSET(9) NUMBITS(1) [],
        PLL_LDO_STB_X2_EN OFFSET(10) NUMBITS(1) [],
        PLL_PRE_DIV OFFSET(11) NUMBITS(2) [],
    ],
    pub SYSCFG28 [
        PLL_SSC_EN OFFSET(18) NUMBITS(1) [],
    ],
    pub SYSCFG32 [
        CLANE_HS_CLK_POST_TIME OFFSET(0) NUMBITS(8) [],
        CLANE_HS_CLK_PRE_TIME OFFSET(8) NUMBITS(8) [],
        CLANE_HS_PRE_TIME OFFSET(16) NUMBITS(8) [],
        CLANE_HS_TRAIL_TIME OFFSET(24) NUMBITS(8) [],
    ],
    pub SYSCFG36 [
        CLANE_HS_ZERO_TIME OFFSET(0) NUMBITS(8) [],
        DLANE_HS_PRE_TIME OFFSET(8) NUMBITS(8) [],
        DLANE_HS_TRAIL_TIME OFFSET(16) NUMBITS(8) [],
        DLANE_HS_ZERO_TIME OFFSET(24) NUMBITS(8) [],
    ],
    pub SYSCFG40 [
        EXTD_CYCLE_SEL OFFSET(0) NUMBITS(3) [],
    ],
    pub SYSCFG44 [
        C_HS_PRE_ZERO_TIME OFFSET(0) NUMBITS(32) [],
    ],
    pub SYSCFG48 [
        DSI_TXREADY_ESC_SEL OFFSET(1) NUMBITS(2) [],
        PPI_C_READY_SEL OFFSET(3) NUMBITS(2) [],
    ],
    pub SYSCFG100 [
        REFCLK_IN_SEL OFFSET(26) NUMBITS(3) [],
        /// Analog reset, active low
        RESETB OFFSET(29) NUMBITS(1) [],
    ]
];

use syscfg::*;

pub const AON_POWER_READY_N: RegField = RegField::new(SYSCFG_0, SYSCFG0::AON_POWER_READY_N);

/// Swap-select fields, indexed by logical lane `[data0..data3, clock]`.
pub const LANE_SWAP_SEL: [RegField; MAP_LANES_NUM] = [
    RegField::new(SYSCFG_0, SYSCFG0::L0_SWAP_SEL),
    RegField::new(SYSCFG_0, SYSCFG0::L1_SWAP_SEL),
    RegField::new(SYSCFG_0, SYSCFG0::L2_SWAP_SEL),
    RegField::new(SYSCFG_0, SYSCFG0::L3_SWAP_SEL),
    RegField::new(SYSCFG_0, SYSCFG0::L4_SWAP_SEL),
];

pub const PLL_UNLOCK: RegField = RegField::new(SYSCFG_8, SYSCFG8::RGS_CDTX_PLL_UNLOCK);

/// HSTX output resistance fields, in the order they are preset.
pub const HSTX_RES: [RegField; 9] = [
    RegField::new(SYSCFG_8, SYSCFG8::L0N_HSTX_RES),
    RegField::new(SYSCFG_12, SYSCFG12::L2N_HSTX_RES),
    RegField::new(SYSCFG_12, SYSCFG12::L3N_HSTX_RES),
    RegField::new(SYSCFG_16, SYSCFG16::L4N_HSTX_RES),
    RegField::new(SYSCFG_8, SYSCFG8::L0P_HSTX_RES),
    RegField::new(SYSCFG_12, SYSCFG12::L1P_HSTX_RES),
    RegField::new(SYSCFG_12, SYSCFG12::L2P_HSTX_RES),
    RegField::new(SYSCFG_12, SYSCFG12::L3P_HSTX_RES),
    RegField::new(SYSCFG_16, SYSCFG16::L4P_HSTX_RES),
];

pub const PLL_FBK_FRA: RegField = RegField::new(SYSCFG_20, SYSCFG20::PLL_FBK_FRA);
pub const PLL_FBK_INT: RegField = RegField::new(SYSCFG_24, SYSCFG24::PLL_FBK_INT);
pub const PLL_FM_EN: RegField = RegField::new(SYSCFG_24, SYSCFG24::PLL_FM_EN);
pub const PLL_LDO_STB_X2_EN: RegField = RegField::new(SYSCFG_24, SYSCFG24::PLL_LDO_STB_X2_EN);
pub const PLL_PRE_DIV: RegField = RegField::new(SYSCFG_24, SYSCFG24::PLL_PRE_DIV);
pub const PLL_SSC_EN: RegField = RegField::new(SYSCFG_28, SYSCFG28::PLL_SSC_EN);

pub const CLANE_HS_CLK_POST_TIME: RegField =
    RegField::new(SYSCFG_32, SYSCFG32::CLANE_HS_CLK_POST_TIME);
pub const CLANE_HS_CLK_PRE_TIME: RegField =
    RegField::new(SYSCFG_32, SYSCFG32::CLANE_HS_CLK_PRE_TIME);
pub const CLANE_HS_PRE_TIME: RegField = RegField::new(SYSCFG_32, SYSCFG32::CLANE_HS_PRE_TIME);
pub const CLANE_HS_TRAIL_TIME: RegField = RegField::new(SYSCFG_32, SYSCFG32::CLANE_HS_TRAIL_TIME);
pub const CLANE_HS_ZERO_TIME: RegField = RegField::new(SYSCFG_36, SYSCFG36::CLANE_HS_ZERO_TIME);
pub const DLANE_HS_PRE_TIME: RegField = RegField::new(SYSCFG_36, SYSCFG36::DLANE_HS_PRE_TIME);
pub const DLANE_HS_TRAIL_TIME: RegField = RegField::new(SYSCFG_36, SYSCFG36::DLANE_HS_TRAIL_TIME);
pub const DLANE_HS_ZERO_TIME: RegField = RegField::new(SYSCFG_36, SYSCFG36::DLANE_HS_ZERO_TIME);

pub const EXTD_CYCLE_SEL: RegField = RegField::new(SYSCFG_40, SYSCFG40::EXTD_CYCLE_SEL);
pub const HS_PRE_ZERO_TIME: RegField = RegField::new(SYSCFG_44, SYSCFG44::C_HS_PRE_ZERO_TIME);
pub const DSI_TXREADY_ESC_SEL: RegField = RegField::new(SYSCFG_48, SYSCFG48::DSI_TXREADY_ESC_SEL);
pub const PPI_C_READY_SEL: RegField = RegField::new(SYSCFG_48, SYSCFG48::PPI_C_READY_SEL);

pub const REFCLK_IN_SEL: RegField = RegField::new(SYSCFG_100, SYSCFG100::REFCLK_IN_SEL);
pub const RESETB: RegField = RegField::new(SYSCFG_100, SYSCFG100::RESETB);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swap_sel_masks() {
        let masks = [0x7000, 0x38000, 0x1c0000, 0xe00000, 0x7000000];
        for (field, mask) in LANE_SWAP_SEL.iter().zip(masks) {
            assert_eq!(field.offset, SYSCFG_0);
            assert_eq!(field.mask, mask);
        }
        assert_eq!(LANE_SWAP_SEL[4].shift, 24);
    }

    #[test]
    fn test_pll_field_layout() {
        assert_eq!(PLL_UNLOCK.mask, 1 << 18);
        assert_eq!(PLL_SSC_EN.mask, 0x40000);
        assert_eq!(PLL_FBK_FRA.mask, 0x00ff_ffff);
        assert_eq!(PLL_FBK_INT.mask, 0x1ff);
        assert_eq!(PLL_PRE_DIV.mask, 0x1800);
        assert_eq!(PLL_PRE_DIV.shift, 11);
        assert_eq!(HS_PRE_ZERO_TIME.mask, u32::MAX);
    }

    #[test]
    fn test_syscfg100_layout() {
        assert_eq!(REFCLK_IN_SEL.mask, 0x1c00_0000);
        assert_eq!(RESETB.mask, 1 << 29);
        assert_eq!(RESETB.offset, 100);
    }

    #[test]
    fn test_timing_fields_share_words() {
        // clk_post/clk_pre/pre/trail fill SYSCFG_32 without overlapping
        let word32 = CLANE_HS_CLK_POST_TIME.mask
            | CLANE_HS_CLK_PRE_TIME.mask
            | CLANE_HS_PRE_TIME.mask
            | CLANE_HS_TRAIL_TIME.mask;
        assert_eq!(word32, u32::MAX);

        let word36 = CLANE_HS_ZERO_TIME.mask
            | DLANE_HS_PRE_TIME.mask
            | DLANE_HS_TRAIL_TIME.mask
            | DLANE_HS_ZERO_TIME.mask;
        assert_eq!(word36, u32::MAX);
    }
}
