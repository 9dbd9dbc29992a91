//! Generic PHY framework contract.

use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::err::Result;

/// PHY operating modes known to the generic PHY framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
#[repr(u32)]
pub enum PhyMode {
    Invalid = 0,
    UsbHost,
    UsbHostLs,
    UsbHostFs,
    UsbHostHs,
    UsbHostSs,
    UsbDevice,
    UsbDeviceLs,
    UsbDeviceFs,
    UsbDeviceHs,
    UsbDeviceSs,
    UsbOtg,
    UfsHsA,
    UfsHsB,
    Pcie,
    Ethernet,
    MipiDphy,
    Sata,
    Lvds,
    Dp,
    Hdmi,
}

/// MIPI D-PHY configuration requested by the display/camera stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MipiDphyOpts {
    /// High-speed bit rate per lane, in bps.
    pub hs_clk_rate: u64,
    /// Number of active data lanes.
    pub lanes: u8,
    /// Low-power/escape clock rate, in Hz.
    pub lp_clk_rate: u64,
}

impl MipiDphyOpts {
    pub fn new(hs_clk_rate: u64) -> Self {
        Self {
            hs_clk_rate,
            lanes: 4,
            lp_clk_rate: 0,
        }
    }

    /// Derives the per-lane bit rate from a pixel clock: `pixel_clock * bpp / lanes`.
    ///
    /// Returns `None` for zero lanes or on overflow.
    pub fn from_pixel_clock(pixel_clock_hz: u64, bpp: u32, lanes: u8) -> Option<Self> {
        if lanes == 0 {
            return None;
        }
        let hs_clk_rate = pixel_clock_hz.checked_mul(bpp as u64)? / lanes as u64;
        Some(Self {
            hs_clk_rate,
            lanes,
            lp_clk_rate: 0,
        })
    }
}

/// Lifecycle callbacks a PHY provider hands to the framework.
///
/// The framework serializes calls per instance: `init`, then `configure`
/// any number of times, `power_on`/`power_off` pairs, and finally `exit`.
pub trait PhyOps {
    fn init(&mut self) -> Result;
    fn exit(&mut self) -> Result;
    fn power_on(&mut self) -> Result;
    fn power_off(&mut self) -> Result;
    fn configure(&mut self, opts: &MipiDphyOpts) -> Result;
    fn validate(&self, mode: PhyMode) -> Result;
}
