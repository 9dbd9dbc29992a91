//! StarFive JH7110 MIPI DPHY TX driver
//!
//! ## Bring-up
//!
//! ```text
//! init:  RESETB=1 -> wait PLL lock -> PPI/ESC straps -> txesc clk on -> sys rst deassert
//! exit:  sys rst assert -> txesc clk off -> RESETB=0
//! ```
//!
//! `configure` selects a row from [`crate::config::M31_DPHY_CONFIGS`] for the requested
//! bit rate and programs the reference clock, lane swap and PLL/HS timing
//! fields. Nothing here locks the register window: the framework must not
//! issue concurrent callbacks for one instance.

use mbarrier::wmb;

use crate::{
    config::{DphyConfig, DphyInfo, LaneMap, STARFIVE_DPHY_INFO, select_config},
    consts::*,
    delay::{PollConfig, SpinWhile},
    err::{DphyError, Result},
    osal::{ClockOp, PowerOp, ResetOp},
    phy::{MipiDphyOpts, PhyMode, PhyOps},
    regmap::RegAccess,
};

bitflags::bitflags! {
    /// What the instance currently holds.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct DphyState: u8 {
        const PLL_LOCKED = 1;
        const CLK_ENABLED = 1 << 1;
        const SYS_RST_DEASSERTED = 1 << 2;
        const CONFIGURED = 1 << 3;
    }
}

/// Probe-time parameters.
#[derive(Debug, Clone, Copy)]
pub struct DphyParam {
    /// Board data, see [`crate::config::of_match`].
    pub info: &'static DphyInfo,
    /// Bound on the PLL lock wait after releasing the analog reset.
    pub lock_poll: PollConfig,
}

impl Default for DphyParam {
    fn default() -> Self {
        Self {
            info: &STARFIVE_DPHY_INFO,
            lock_poll: PollConfig::default(),
        }
    }
}

pub struct StfDphy<M, C, R, P> {
    regs: M,
    txesc_clk: C,
    sys_rst: R,
    pm: P,
    info: &'static DphyInfo,
    lock_poll: PollConfig,
    config: Option<MipiDphyOpts>,
    state: DphyState,
}

impl<M, C, R, P> StfDphy<M, C, R, P>
where
    M: RegAccess,
    C: ClockOp,
    R: ResetOp,
    P: PowerOp,
{
    pub fn new(regs: M, txesc_clk: C, sys_rst: R, pm: P, param: DphyParam) -> Self {
        debug!("dphy: lane map {:?}", param.info.maps);
        Self {
            regs,
            txesc_clk,
            sys_rst,
            pm,
            info: param.info,
            lock_poll: param.lock_poll,
            config: None,
            state: DphyState::empty(),
        }
    }

    pub fn state(&self) -> DphyState {
        self.state
    }

    /// Options passed to the last `configure` call.
    pub fn config(&self) -> Option<&MipiDphyOpts> {
        self.config.as_ref()
    }

    pub fn info(&self) -> &'static DphyInfo {
        self.info
    }

    pub fn regs(&self) -> &M {
        &self.regs
    }

    pub fn clock(&self) -> &C {
        &self.txesc_clk
    }

    pub fn reset(&self) -> &R {
        &self.sys_rst
    }

    pub fn power(&self) -> &P {
        &self.pm
    }

    pub fn is_pll_locked(&self) -> bool {
        self.regs.read_field(PLL_UNLOCK) == 0
    }

    /// Drives the analog reset (`RESETB`, active low).
    ///
    /// On release, waits for the PLL to lock within the configured poll
    /// budget instead of spinning forever.
    pub fn hw_reset(&mut self, assert: bool) -> Result {
        self.regs.write_field(RESETB, !assert as u32);
        wmb();

        if assert {
            self.state.remove(DphyState::PLL_LOCKED);
            return Ok(());
        }

        let locked = SpinWhile::new(|| !self.is_pll_locked()).wait(self.lock_poll);
        match locked {
            Some(polls) => {
                self.state.insert(DphyState::PLL_LOCKED);
                info!("MIPI dphy-tx: PLL locked after {polls} polls");
                Ok(())
            }
            None => {
                error!(
                    "MIPI dphy-tx: PLL not locked after {} polls",
                    self.lock_poll.max_polls
                );
                Err(DphyError::HardwareNotReady {
                    polls: self.lock_poll.max_polls,
                })
            }
        }
    }

    fn preset_hstx_res(&self) {
        for field in HSTX_RES {
            self.regs.write_field(field, HSTX_RES_PRESET);
        }
    }
}

/// Writes the physical lane for each logical lane, data0 first, clock last.
pub fn apply_lane_map(regs: &impl RegAccess, maps: &LaneMap) {
    for (field, &lane) in LANE_SWAP_SEL.iter().zip(maps.iter()) {
        regs.write_field(*field, lane as u32);
    }
}

/// Programs PLL dividers and HS timing from `p`.
///
/// SSC off and LDO/FM on go first; they gate the PLL start-up.
pub fn apply_config(regs: &impl RegAccess, p: &DphyConfig) {
    regs.write_field(PLL_SSC_EN, 0);
    regs.write_field(PLL_LDO_STB_X2_EN, 1);
    regs.write_field(PLL_FM_EN, 1);

    regs.write_field(PLL_PRE_DIV, p.pll_pre_div);
    regs.write_field(PLL_FBK_INT, p.pll_fbk_int);
    regs.write_field(PLL_FBK_FRA, p.pll_fbk_fra);
    regs.write_field(EXTD_CYCLE_SEL, p.extd_cycle_sel);

    regs.write_field(DLANE_HS_PRE_TIME, p.dlane_hs_pre_time);
    regs.write_field(DLANE_HS_ZERO_TIME, p.dlane_hs_zero_time);
    regs.write_field(DLANE_HS_TRAIL_TIME, p.dlane_hs_trail_time);

    regs.write_field(CLANE_HS_PRE_TIME, p.clane_hs_pre_time);
    regs.write_field(CLANE_HS_ZERO_TIME, p.clane_hs_zero_time);
    regs.write_field(CLANE_HS_TRAIL_TIME, p.clane_hs_trail_time);
    regs.write_field(CLANE_HS_CLK_PRE_TIME, p.clane_hs_clk_pre_time);
    regs.write_field(CLANE_HS_CLK_POST_TIME, p.clane_hs_clk_post_time);
}

impl<M, C, R, P> PhyOps for StfDphy<M, C, R, P>
where
    M: RegAccess,
    C: ClockOp,
    R: ResetOp,
    P: PowerOp,
{
    fn init(&mut self) -> Result {
        self.hw_reset(false)?;

        self.regs.write_field(PPI_C_READY_SEL, 0);
        self.regs.write_field(DSI_TXREADY_ESC_SEL, 0);
        self.regs.write_field(HS_PRE_ZERO_TIME, C_HS_PRE_ZERO_TIME);

        self.txesc_clk.prepare_enable().map_err(|e| {
            error!("dphy: failed to prepare/enable txesc_clk: {e}");
            DphyError::ClockEnable(e)
        })?;
        self.state.insert(DphyState::CLK_ENABLED);

        if let Err(e) = self.sys_rst.deassert() {
            error!("dphy: failed to deassert sys_rst: {e}");
            self.txesc_clk.disable_unprepare();
            self.state.remove(DphyState::CLK_ENABLED);
            return Err(DphyError::ResetDeassert(e));
        }
        self.state.insert(DphyState::SYS_RST_DEASSERTED);

        info!("dphy: initialized");
        Ok(())
    }

    fn exit(&mut self) -> Result {
        // Still out of reset on failure, so the clock stays on.
        self.sys_rst.assert().map_err(|e| {
            error!("dphy: failed to assert sys_rst: {e}");
            DphyError::ResetAssert(e)
        })?;
        self.state.remove(DphyState::SYS_RST_DEASSERTED);

        if self.state.contains(DphyState::CLK_ENABLED) {
            self.txesc_clk.disable_unprepare();
            self.state.remove(DphyState::CLK_ENABLED);
        }

        self.hw_reset(true)?;
        self.state.remove(DphyState::CONFIGURED);

        info!("dphy: exited");
        Ok(())
    }

    fn power_on(&mut self) -> Result {
        self.pm.resume_and_get().map_err(|e| {
            error!("dphy: runtime resume failed: {e}");
            DphyError::Power(e)
        })
    }

    fn power_off(&mut self) -> Result {
        self.pm.put_sync().map_err(|e| {
            error!("dphy: runtime put failed: {e}");
            DphyError::Power(e)
        })
    }

    fn configure(&mut self, opts: &MipiDphyOpts) -> Result {
        self.config = Some(*opts);
        self.preset_hstx_res();

        let Some(p) = select_config(opts.hs_clk_rate) else {
            let err = DphyError::ConfigurationNotFound {
                requested: opts.hs_clk_rate,
                aligned: crate::config::align_bitrate(opts.hs_clk_rate),
            };
            error!("dphy: {err}");
            return Err(err);
        };
        let Some(ref_clk) = p.ref_clk() else {
            error!("dphy: unsupported reference clock {} Hz", p.ref_clk_hz);
            return Err(DphyError::ConfigurationNotFound {
                requested: opts.hs_clk_rate,
                aligned: p.bitrate_hz,
            });
        };
        debug!("dphy: {} bps -> {:?}", opts.hs_clk_rate, p);

        self.regs.write_field(REFCLK_IN_SEL, ref_clk.into());
        self.regs
            .write_field(AON_POWER_READY_N, AON_POWER_READY_N_ACTIVE);

        apply_lane_map(&self.regs, &self.info.maps);
        apply_config(&self.regs, p);

        self.state.insert(DphyState::CONFIGURED);
        Ok(())
    }

    fn validate(&self, mode: PhyMode) -> Result {
        if mode != PhyMode::MipiDphy {
            debug!("dphy: rejecting mode {mode:?}");
            return Err(DphyError::UnsupportedMode(mode));
        }
        Ok(())
    }
}
