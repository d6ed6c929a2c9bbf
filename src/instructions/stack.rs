//! # Stack Instructions
//!
//! - PHA: Push Accumulator (3 cycles)
//! - PHP: Push Processor Status (3 cycles)
//! - PLA: Pull Accumulator (4 cycles)
//! - PLP: Pull Processor Status (4 cycles)
//!
//! PHP and PLP move the status byte verbatim; no bits are forced on or off.

use crate::{Bus, MemoryBus, Status, CPU};

/// Executes the PHA (Push Accumulator) instruction.
pub(crate) fn execute_pha<M: MemoryBus>(cpu: &mut CPU, bus: &mut Bus<M>) {
    let value = cpu.a;
    cpu.push_byte(value, bus);
}

/// Executes the PHP (Push Processor Status) instruction.
pub(crate) fn execute_php<M: MemoryBus>(cpu: &mut CPU, bus: &mut Bus<M>) {
    let value = cpu.status.bits();
    cpu.push_byte(value, bus);
}

/// Executes the PLA (Pull Accumulator) instruction.
///
/// Updates Z and N flags.
pub(crate) fn execute_pla<M: MemoryBus>(cpu: &mut CPU, bus: &mut Bus<M>) {
    cpu.a = cpu.pop_byte(bus);
    bus.tick();
    cpu.status.set_zero_negative(cpu.a);
}

/// Executes the PLP (Pull Processor Status) instruction.
pub(crate) fn execute_plp<M: MemoryBus>(cpu: &mut CPU, bus: &mut Bus<M>) {
    cpu.status = Status::from_bits_retain(cpu.pop_byte(bus));
    bus.tick();
}
