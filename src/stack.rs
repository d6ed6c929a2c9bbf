//! # Stack Protocol
//!
//! The 6502 stack is located at memory addresses 0x0100-0x01FF and grows downward.
//! The stack pointer (SP) is an 8-bit register that serves as an offset into this
//! page. The full stack address is calculated as 0x0100 | SP.
//!
//! SP wraps modulo 256 in both directions and every address is formed with
//! `0x0100 |`, so pushing onto a full stack or pulling from an empty one wraps
//! around inside page 1 instead of faulting.

use crate::{Bus, MemoryBus, CPU};

/// Base address of the stack page.
pub const STACK_BASE: u16 = 0x0100;

/// Full stack address for a stack pointer value.
#[inline]
pub(crate) fn stack_address(sp: u8) -> u16 {
    STACK_BASE | sp as u16
}

impl CPU {
    /// Returns the stack pointer as a full 16-bit address in page 1.
    pub fn sp_address(&self) -> u16 {
        stack_address(self.sp)
    }

    /// Pushes a byte: write at 0x0100 | SP, then decrement SP. 2 cycles.
    pub fn push_byte<M: MemoryBus>(&mut self, value: u8, bus: &mut Bus<M>) {
        bus.write_byte(stack_address(self.sp), value);
        self.sp = self.sp.wrapping_sub(1);
        bus.tick();
    }

    /// Pops a byte: read at 0x0100 | (SP + 1), then increment SP. 2 cycles.
    pub fn pop_byte<M: MemoryBus>(&mut self, bus: &mut Bus<M>) -> u8 {
        let value = bus.read_byte(stack_address(self.sp.wrapping_add(1)));
        self.sp = self.sp.wrapping_add(1);
        bus.tick();
        value
    }

    /// Pushes a word: low byte at SP - 1, high byte at SP, then SP -= 2. 2 cycles.
    pub fn push_word<M: MemoryBus>(&mut self, value: u16, bus: &mut Bus<M>) {
        bus.write_word(
            stack_address(self.sp.wrapping_sub(1)),
            stack_address(self.sp),
            value,
        );
        self.sp = self.sp.wrapping_sub(2);
    }

    /// Pops a word: low byte at SP + 1, high byte at SP + 2, then SP += 2. 3 cycles.
    pub fn pop_word<M: MemoryBus>(&mut self, bus: &mut Bus<M>) -> u16 {
        let low = bus.read_byte(stack_address(self.sp.wrapping_add(1))) as u16;
        let high = bus.read_byte(stack_address(self.sp.wrapping_add(2))) as u16;
        self.sp = self.sp.wrapping_add(2);
        bus.tick();
        (high << 8) | low
    }
}
