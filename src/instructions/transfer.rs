//! # Register Transfer Instructions
//!
//! This module implements register transfer operations:
//! - TAX: Transfer Accumulator to X
//! - TAY: Transfer Accumulator to Y
//! - TXA: Transfer X to Accumulator
//! - TYA: Transfer Y to Accumulator
//! - TSX: Transfer Stack Pointer to X
//! - TXS: Transfer X to Stack Pointer
//!
//! Every transfer takes 2 cycles and sets Z and N from the value moved,
//! including TXS.

use crate::{Bus, MemoryBus, CPU};

/// Executes the TAX (Transfer Accumulator to X) instruction.
pub(crate) fn execute_tax<M: MemoryBus>(cpu: &mut CPU, bus: &mut Bus<M>) {
    cpu.x = cpu.a;
    cpu.status.set_zero_negative(cpu.x);
    bus.tick();
}

/// Executes the TAY (Transfer Accumulator to Y) instruction.
pub(crate) fn execute_tay<M: MemoryBus>(cpu: &mut CPU, bus: &mut Bus<M>) {
    cpu.y = cpu.a;
    cpu.status.set_zero_negative(cpu.y);
    bus.tick();
}

/// Executes the TXA (Transfer X to Accumulator) instruction.
pub(crate) fn execute_txa<M: MemoryBus>(cpu: &mut CPU, bus: &mut Bus<M>) {
    cpu.a = cpu.x;
    cpu.status.set_zero_negative(cpu.a);
    bus.tick();
}

/// Executes the TYA (Transfer Y to Accumulator) instruction.
pub(crate) fn execute_tya<M: MemoryBus>(cpu: &mut CPU, bus: &mut Bus<M>) {
    cpu.a = cpu.y;
    cpu.status.set_zero_negative(cpu.a);
    bus.tick();
}

/// Executes the TSX (Transfer Stack Pointer to X) instruction.
pub(crate) fn execute_tsx<M: MemoryBus>(cpu: &mut CPU, bus: &mut Bus<M>) {
    cpu.x = cpu.sp;
    cpu.status.set_zero_negative(cpu.x);
    bus.tick();
}

/// Executes the TXS (Transfer X to Stack Pointer) instruction.
///
/// Z and N are taken from the new stack pointer value.
pub(crate) fn execute_txs<M: MemoryBus>(cpu: &mut CPU, bus: &mut Bus<M>) {
    cpu.sp = cpu.x;
    cpu.status.set_zero_negative(cpu.sp);
    bus.tick();
}
