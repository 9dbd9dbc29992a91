//! In-memory register file and recording collaborators for host tests.

use core::cell::{Cell, RefCell};
use std::rc::Rc;
use std::vec::Vec;

use crate::consts::PLL_UNLOCK;
use crate::err::ResourceError;
use crate::osal::{ClockOp, PowerOp, ResetOp};
use crate::regmap::RegAccess;

const WORDS: usize = 32;

pub struct FakeRegs {
    words: [Cell<u32>; WORDS],
    writes: RefCell<Vec<(u32, u32)>>,
    /// Status reads that still report the PLL as unlocked.
    unlocked_polls: Cell<u32>,
    stuck_unlocked: Cell<bool>,
}

impl FakeRegs {
    pub fn new() -> Self {
        Self {
            words: core::array::from_fn(|_| Cell::new(0)),
            writes: RefCell::new(Vec::new()),
            unlocked_polls: Cell::new(0),
            stuck_unlocked: Cell::new(false),
        }
    }

    pub fn lock_after(self, polls: u32) -> Self {
        self.unlocked_polls.set(polls);
        self
    }

    pub fn never_lock(self) -> Self {
        self.stuck_unlocked.set(true);
        self
    }

    pub fn write_log(&self) -> Vec<(u32, u32)> {
        self.writes.borrow().clone()
    }

    pub fn clear_log(&self) {
        self.writes.borrow_mut().clear();
    }
}

impl RegAccess for FakeRegs {
    fn reg_read(&self, offset: u32) -> u32 {
        let mut val = self.words[offset as usize / 4].get();
        if offset == PLL_UNLOCK.offset {
            let pending = self.unlocked_polls.get();
            if self.stuck_unlocked.get() || pending > 0 {
                self.unlocked_polls.set(pending.saturating_sub(1));
                val |= PLL_UNLOCK.mask;
            }
        }
        val
    }

    fn reg_write(&self, offset: u32, val: u32) {
        self.writes.borrow_mut().push((offset, val));
        // the unlock flag is a read-only status bit
        let val = if offset == PLL_UNLOCK.offset {
            val & !PLL_UNLOCK.mask
        } else {
            val
        };
        self.words[offset as usize / 4].set(val);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    ClkEnable,
    ClkDisable,
    RstAssert,
    RstDeassert,
    PmGet,
    PmPut,
}

pub type EventLog = Rc<RefCell<Vec<Event>>>;

pub fn event_log() -> EventLog {
    Rc::new(RefCell::new(Vec::new()))
}

pub struct MockClock {
    pub log: EventLog,
    pub enabled: bool,
    pub fail: Option<ResourceError>,
}

impl ClockOp for MockClock {
    fn prepare_enable(&mut self) -> Result<(), ResourceError> {
        if let Some(e) = self.fail {
            return Err(e);
        }
        self.enabled = true;
        self.log.borrow_mut().push(Event::ClkEnable);
        Ok(())
    }

    fn disable_unprepare(&mut self) {
        self.enabled = false;
        self.log.borrow_mut().push(Event::ClkDisable);
    }
}

pub struct MockReset {
    pub log: EventLog,
    pub asserted: bool,
    pub fail_assert: Option<ResourceError>,
    pub fail_deassert: Option<ResourceError>,
}

impl ResetOp for MockReset {
    fn assert(&mut self) -> Result<(), ResourceError> {
        if let Some(e) = self.fail_assert {
            return Err(e);
        }
        self.asserted = true;
        self.log.borrow_mut().push(Event::RstAssert);
        Ok(())
    }

    fn deassert(&mut self) -> Result<(), ResourceError> {
        if let Some(e) = self.fail_deassert {
            return Err(e);
        }
        self.asserted = false;
        self.log.borrow_mut().push(Event::RstDeassert);
        Ok(())
    }
}

pub struct MockPower {
    pub log: EventLog,
    pub usage: i32,
    pub fail: Option<ResourceError>,
}

impl PowerOp for MockPower {
    fn resume_and_get(&mut self) -> Result<(), ResourceError> {
        if let Some(e) = self.fail {
            return Err(e);
        }
        self.usage += 1;
        self.log.borrow_mut().push(Event::PmGet);
        Ok(())
    }

    fn put_sync(&mut self) -> Result<(), ResourceError> {
        if let Some(e) = self.fail {
            return Err(e);
        }
        self.usage -= 1;
        self.log.borrow_mut().push(Event::PmPut);
        Ok(())
    }
}

/// Collaborators that always succeed, sharing one event log.
pub fn resources(log: &EventLog) -> (MockClock, MockReset, MockPower) {
    (
        MockClock {
            log: log.clone(),
            enabled: false,
            fail: None,
        },
        MockReset {
            log: log.clone(),
            asserted: true,
            fail_assert: None,
            fail_deassert: None,
        },
        MockPower {
            log: log.clone(),
            usage: 0,
            fail: None,
        },
    )
}
