use core::ptr::NonNull;

use tock_registers::{
    fields::Field,
    interfaces::{Readable, Writeable},
    registers::ReadWrite,
    RegisterLongName,
};

pub type Mmio = NonNull<u8>;

/// A sub-range of one 32 bit register: byte offset, shift and the in-place mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegField {
    pub offset: u32,
    pub shift: u32,
    pub mask: u32,
}

impl RegField {
    /// Binds a `register_bitfields!` field to the word at `offset`.
    pub const fn new<R: RegisterLongName>(offset: u32, field: Field<u32, R>) -> Self {
        Self {
            offset,
            shift: field.shift as u32,
            mask: field.mask << field.shift,
        }
    }

    pub const fn from_raw(offset: u32, shift: u32, mask: u32) -> Self {
        Self {
            offset,
            shift,
            mask,
        }
    }

    /// Field width in bits.
    pub const fn width(&self) -> u32 {
        (self.mask >> self.shift).count_ones()
    }
}

/// 32 bit register window.
///
/// Field writes are read-modify-write and not atomic; callers must not let
/// two mutators touch the same word concurrently.
pub trait RegAccess {
    fn reg_read(&self, offset: u32) -> u32;

    fn reg_write(&self, offset: u32, val: u32);

    fn update_bits(&self, offset: u32, mask: u32, val: u32) {
        let current = self.reg_read(offset);
        let new = (current & !mask) | (val & mask);
        self.reg_write(offset, new);
    }

    fn read_field(&self, field: RegField) -> u32 {
        (self.reg_read(field.offset) & field.mask) >> field.shift
    }

    /// Values wider than the field are truncated by the mask.
    fn write_field(&self, field: RegField, val: u32) {
        trace!(
            "dphy: field @{:#x} [{:#010x}] <= {:#x}",
            field.offset, field.mask, val
        );
        self.update_bits(field.offset, field.mask, val.wrapping_shl(field.shift));
    }
}

/// Memory-mapped register window.
#[derive(Clone, Copy)]
pub struct Regmap(usize);

impl Regmap {
    /// # Safety
    ///
    /// `base` must point to a mapped register window covering every offset
    /// the driver touches, valid for volatile 32 bit access for the lifetime
    /// of this value.
    pub unsafe fn new(base: Mmio) -> Self {
        Self(base.as_ptr() as usize)
    }

    pub fn base(&self) -> usize {
        self.0
    }

    fn reg(&self, offset: u32) -> &ReadWrite<u32> {
        unsafe { &*((self.0 + offset as usize) as *const ReadWrite<u32>) }
    }
}

impl RegAccess for Regmap {
    fn reg_read(&self, offset: u32) -> u32 {
        self.reg(offset).get()
    }

    fn reg_write(&self, offset: u32, val: u32) {
        self.reg(offset).set(val);
    }
}
