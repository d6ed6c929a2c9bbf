//! # Cycle-Counted Memory Access
//!
//! Every byte the 6502 moves across its bus costs one clock cycle. `Bus` wraps a
//! borrowed `MemoryBus` together with the remaining cycle budget of the current
//! `execute` call and charges that budget on each access, so cycle accounting
//! falls out of the memory traffic an instruction actually performs.
//!
//! Internal cycles that do not touch memory (index additions, stack pointer
//! adjustments, read-modify-write turnarounds) are charged with `tick`.

use crate::MemoryBus;

/// A memory bus view that charges one cycle per byte accessed.
///
/// The budget is signed: instructions always run to completion, so it goes
/// negative when the last instruction of an `execute` call overruns.
///
/// # Examples
///
/// ```
/// use cpu6502::{Bus, FlatMemory};
///
/// let mut memory = FlatMemory::new();
/// memory[0x1234] = 0x34;
/// memory[0x1235] = 0x12;
///
/// let mut bus = Bus::new(&mut memory, 10);
/// assert_eq!(bus.read_word(0x1234), 0x1234);
/// bus.write_byte(0x0000, 0xFF);
/// assert_eq!(bus.remaining(), 7);
/// ```
pub struct Bus<'a, M: MemoryBus> {
    memory: &'a mut M,
    remaining: i32,
}

impl<'a, M: MemoryBus> Bus<'a, M> {
    /// Wraps `memory` with `budget` cycles to spend.
    pub fn new(memory: &'a mut M, budget: i32) -> Self {
        Self {
            memory,
            remaining: budget,
        }
    }

    /// Cycles left in the budget (negative after an overrun).
    pub fn remaining(&self) -> i32 {
        self.remaining
    }

    /// Spends one internal cycle without a memory access.
    pub fn tick(&mut self) {
        self.remaining -= 1;
    }

    /// Reads one byte. 1 cycle.
    pub fn read_byte(&mut self, addr: u16) -> u8 {
        self.tick();
        self.memory.read(addr)
    }

    /// Reads a little-endian word from `addr` and `addr + 1`. 2 cycles.
    ///
    /// The second address wraps from 0xFFFF to 0x0000.
    pub fn read_word(&mut self, addr: u16) -> u16 {
        let low = self.read_byte(addr) as u16;
        let high = self.read_byte(addr.wrapping_add(1)) as u16;
        (high << 8) | low
    }

    /// Writes one byte. 1 cycle.
    pub fn write_byte(&mut self, addr: u16, value: u8) {
        self.tick();
        self.memory.write(addr, value);
    }

    /// Writes a little-endian word, low byte at `low_addr`, high byte at `high_addr`. 2 cycles.
    ///
    /// The two addresses are passed separately because the stack keeps both
    /// halves inside page 1 even when they straddle the SP wraparound.
    pub fn write_word(&mut self, low_addr: u16, high_addr: u16, value: u16) {
        self.write_byte(low_addr, (value & 0xFF) as u8);
        self.write_byte(high_addr, (value >> 8) as u8);
    }
}
