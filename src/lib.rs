//! MIPI D-PHY TX driver for the StarFive JH7110 SoC.
//!
//! The host OS hands over a register window ([`Regmap`] or any
//! [`RegAccess`]), the `txesc` clock, the `sys` reset line and its runtime
//! PM handle; [`StfDphy`] implements the generic PHY callbacks ([`PhyOps`])
//! on top of them.

#![cfg_attr(not(test), no_std)]

#[macro_use]
extern crate log;

pub mod config;
pub mod consts;
pub mod delay;
pub mod dphy;
pub mod err;
pub mod osal;
pub mod phy;
pub mod regmap;

#[cfg(test)]
mod mock;

pub use config::{DphyConfig, DphyInfo, LaneMap, RefClock, of_match, select_config};
pub use delay::PollConfig;
pub use dphy::{DphyParam, DphyState, StfDphy, apply_config, apply_lane_map};
pub use err::{DphyError, ResourceError, Result};
pub use osal::{ClockOp, PowerOp, ResetOp};
pub use phy::{MipiDphyOpts, PhyMode, PhyOps};
pub use regmap::{Mmio, RegAccess, RegField, Regmap};
