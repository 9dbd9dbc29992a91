use crate::phy::PhyMode;

pub type Result<T = ()> = core::result::Result<T, DphyError>;

/// Failure reported by a clock, reset or power collaborator.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceError {
    #[error("Resource busy")]
    Busy,
    #[error("Resource unavailable")]
    Unavailable,
    #[error("Errno {0}")]
    Errno(i32),
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DphyError {
    #[error("Failed to prepare/enable txesc clock: {0}")]
    ClockEnable(ResourceError),
    #[error("Failed to deassert sys reset: {0}")]
    ResetDeassert(ResourceError),
    #[error("Failed to assert sys reset: {0}")]
    ResetAssert(ResourceError),
    #[error("Runtime power management failed: {0}")]
    Power(ResourceError),
    #[error("Unsupported phy mode {0:?}")]
    UnsupportedMode(PhyMode),
    #[error("No dphy configuration for {requested} bps (aligned to {aligned} bps)")]
    ConfigurationNotFound { requested: u64, aligned: u64 },
    #[error("PLL not locked after {polls} polls")]
    HardwareNotReady { polls: u32 },
}

impl DphyError {
    /// Clock, reset and runtime PM failures, i.e. anything a collaborator refused.
    pub fn is_resource_error(&self) -> bool {
        matches!(
            self,
            Self::ClockEnable(_) | Self::ResetDeassert(_) | Self::ResetAssert(_) | Self::Power(_)
        )
    }

    /// The collaborator's own error, surfaced verbatim.
    pub fn resource(&self) -> Option<ResourceError> {
        match *self {
            Self::ClockEnable(e) | Self::ResetDeassert(e) | Self::ResetAssert(e) | Self::Power(e) => {
                Some(e)
            }
            _ => None,
        }
    }
}
