//! Services the driver borrows from the host OS.

use crate::err::ResourceError;

/// Gating clock (`txesc`).
pub trait ClockOp {
    fn prepare_enable(&mut self) -> Result<(), ResourceError>;
    fn disable_unprepare(&mut self);
}

/// Exclusive reset line (`sys`). Both operations are idempotent.
pub trait ResetOp {
    fn assert(&mut self) -> Result<(), ResourceError>;
    fn deassert(&mut self) -> Result<(), ResourceError>;
}

/// Runtime power management. Reference counted by the implementor.
pub trait PowerOp {
    fn resume_and_get(&mut self) -> Result<(), ResourceError>;
    fn put_sync(&mut self) -> Result<(), ResourceError>;
}
