//! # Increment and Decrement Instructions
//!
//! This module implements increment and decrement operations:
//! - INC, DEC: read-modify-write on a memory location
//! - INX, INY, DEX, DEY: register forms
//!
//! All of them wrap modulo 256 and set Z and N from the new value.

use crate::{Access, AddressingMode, Bus, MemoryBus, CPU};

/// Executes the INC (Increment Memory) instruction.
///
/// Read, internal modify cycle, write. Indexed forms always pay the
/// page fix-up cycle, so INC abs,X costs 7 cycles.
pub(crate) fn execute_inc<M: MemoryBus>(cpu: &mut CPU, mode: AddressingMode, bus: &mut Bus<M>) {
    modify_memory(cpu, mode, bus, |value| value.wrapping_add(1));
}

/// Executes the DEC (Decrement Memory) instruction.
pub(crate) fn execute_dec<M: MemoryBus>(cpu: &mut CPU, mode: AddressingMode, bus: &mut Bus<M>) {
    modify_memory(cpu, mode, bus, |value| value.wrapping_sub(1));
}

fn modify_memory<M: MemoryBus>(
    cpu: &mut CPU,
    mode: AddressingMode,
    bus: &mut Bus<M>,
    operation: impl FnOnce(u8) -> u8,
) {
    let addr = cpu.effective_address(mode, Access::Write, bus);
    let value = operation(bus.read_byte(addr));
    bus.tick();
    bus.write_byte(addr, value);
    cpu.status.set_zero_negative(value);
}

/// Executes the INX (Increment X Register) instruction.
pub(crate) fn execute_inx<M: MemoryBus>(cpu: &mut CPU, bus: &mut Bus<M>) {
    cpu.x = cpu.x.wrapping_add(1);
    cpu.status.set_zero_negative(cpu.x);
    bus.tick();
}

/// Executes the INY (Increment Y Register) instruction.
pub(crate) fn execute_iny<M: MemoryBus>(cpu: &mut CPU, bus: &mut Bus<M>) {
    cpu.y = cpu.y.wrapping_add(1);
    cpu.status.set_zero_negative(cpu.y);
    bus.tick();
}

/// Executes the DEX (Decrement X Register) instruction.
pub(crate) fn execute_dex<M: MemoryBus>(cpu: &mut CPU, bus: &mut Bus<M>) {
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.status.set_zero_negative(cpu.x);
    bus.tick();
}

/// Executes the DEY (Decrement Y Register) instruction.
pub(crate) fn execute_dey<M: MemoryBus>(cpu: &mut CPU, bus: &mut Bus<M>) {
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.status.set_zero_negative(cpu.y);
    bus.tick();
}
