//! # Compare Instructions
//!
//! CMP, CPX and CPY subtract a memory operand from a register without storing
//! the result:
//! - C: set if register >= M (unsigned)
//! - Z: set if register == M
//! - N: bit 7 of (register - M)

use crate::{AddressingMode, Bus, MemoryBus, Status, CPU};

/// Executes the CMP (Compare Accumulator) instruction.
pub(crate) fn execute_cmp<M: MemoryBus>(cpu: &mut CPU, mode: AddressingMode, bus: &mut Bus<M>) {
    let register = cpu.a;
    compare(cpu, register, mode, bus);
}

/// Executes the CPX (Compare X Register) instruction.
pub(crate) fn execute_cpx<M: MemoryBus>(cpu: &mut CPU, mode: AddressingMode, bus: &mut Bus<M>) {
    let register = cpu.x;
    compare(cpu, register, mode, bus);
}

/// Executes the CPY (Compare Y Register) instruction.
pub(crate) fn execute_cpy<M: MemoryBus>(cpu: &mut CPU, mode: AddressingMode, bus: &mut Bus<M>) {
    let register = cpu.y;
    compare(cpu, register, mode, bus);
}

fn compare<M: MemoryBus>(cpu: &mut CPU, register: u8, mode: AddressingMode, bus: &mut Bus<M>) {
    let value = cpu.read_operand(mode, bus);
    let difference = register.wrapping_sub(value);

    cpu.status.set(Status::CARRY, register >= value);
    cpu.status.set_zero_negative(difference);
}
