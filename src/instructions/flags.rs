//! # Status Flag Instructions
//!
//! CLC, SEC, CLI, SEI, CLV, CLD and SED each set or clear one flag and take
//! 2 cycles. No other state changes.

use crate::{Bus, MemoryBus, Status, CPU};

/// Sets (`value = true`) or clears a single status flag.
pub(crate) fn execute_flag<M: MemoryBus>(cpu: &mut CPU, flag: Status, value: bool, bus: &mut Bus<M>) {
    cpu.status.set(flag, value);
    bus.tick();
}
