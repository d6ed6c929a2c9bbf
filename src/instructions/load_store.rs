//! # Load and Store Instructions
//!
//! This module implements the load and store operations:
//! - LDA, LDX, LDY: Load a register from memory, setting Z and N
//! - STA, STX, STY: Store a register to memory, no flags affected
//!
//! Loads resolve indexed operands with the `Access::Read` policy (the
//! page-crossing cycle is conditional). Stores use `Access::Write`, which
//! always pays the fix-up cycle.

use crate::{Access, AddressingMode, Bus, MemoryBus, CPU};

/// Executes the LDA (Load Accumulator) instruction.
///
/// Loads a byte from memory (or an immediate value) into the accumulator.
/// Updates Z and N flags.
pub(crate) fn execute_lda<M: MemoryBus>(cpu: &mut CPU, mode: AddressingMode, bus: &mut Bus<M>) {
    cpu.a = cpu.read_operand(mode, bus);
    cpu.status.set_zero_negative(cpu.a);
}

/// Executes the LDX (Load X Register) instruction.
///
/// Updates Z and N flags.
pub(crate) fn execute_ldx<M: MemoryBus>(cpu: &mut CPU, mode: AddressingMode, bus: &mut Bus<M>) {
    cpu.x = cpu.read_operand(mode, bus);
    cpu.status.set_zero_negative(cpu.x);
}

/// Executes the LDY (Load Y Register) instruction.
///
/// Updates Z and N flags.
pub(crate) fn execute_ldy<M: MemoryBus>(cpu: &mut CPU, mode: AddressingMode, bus: &mut Bus<M>) {
    cpu.y = cpu.read_operand(mode, bus);
    cpu.status.set_zero_negative(cpu.y);
}

/// Executes the STA (Store Accumulator) instruction.
pub(crate) fn execute_sta<M: MemoryBus>(cpu: &mut CPU, mode: AddressingMode, bus: &mut Bus<M>) {
    let value = cpu.a;
    store(cpu, mode, value, bus);
}

/// Executes the STX (Store X Register) instruction.
pub(crate) fn execute_stx<M: MemoryBus>(cpu: &mut CPU, mode: AddressingMode, bus: &mut Bus<M>) {
    let value = cpu.x;
    store(cpu, mode, value, bus);
}

/// Executes the STY (Store Y Register) instruction.
pub(crate) fn execute_sty<M: MemoryBus>(cpu: &mut CPU, mode: AddressingMode, bus: &mut Bus<M>) {
    let value = cpu.y;
    store(cpu, mode, value, bus);
}

fn store<M: MemoryBus>(cpu: &mut CPU, mode: AddressingMode, value: u8, bus: &mut Bus<M>) {
    let addr = cpu.effective_address(mode, Access::Write, bus);
    bus.write_byte(addr, value);
}
