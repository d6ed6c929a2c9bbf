//! # Control Flow Instructions
//!
//! This module implements control flow operations:
//! - JMP: Jump to address (absolute or indirect)
//! - JSR: Jump to Subroutine
//! - RTS: Return from Subroutine
//! - NOP: No Operation
//!
//! JSR pushes the address of its own last byte (return address - 1) and RTS
//! adds 1 to the popped value, the same convention as the hardware, so
//! subroutines that manipulate the stack directly behave as on a real part.

use crate::{Access, AddressingMode, Bus, MemoryBus, CPU};

/// Executes the JMP (Jump) instruction.
///
/// - Absolute: 3 cycles
/// - Indirect: 5 cycles, with the NMOS page-wrap quirk for pointers at `$xxFF`
///
/// No flags are affected.
pub(crate) fn execute_jmp<M: MemoryBus>(cpu: &mut CPU, mode: AddressingMode, bus: &mut Bus<M>) {
    cpu.pc = cpu.effective_address(mode, Access::Read, bus);
}

/// Executes the JSR (Jump to Subroutine) instruction.
///
/// Pushes PC - 1 (the address of the operand's high byte) and jumps to the
/// operand address. 6 cycles. No flags are affected.
pub(crate) fn execute_jsr<M: MemoryBus>(cpu: &mut CPU, bus: &mut Bus<M>) {
    let target = cpu.fetch_word(bus);
    let return_address = cpu.pc.wrapping_sub(1);
    cpu.push_word(return_address, bus);
    bus.tick();
    cpu.pc = target;
}

/// Executes the RTS (Return from Subroutine) instruction.
///
/// Pops the return address and resumes at the byte after it. 6 cycles.
/// No flags are affected.
pub(crate) fn execute_rts<M: MemoryBus>(cpu: &mut CPU, bus: &mut Bus<M>) {
    let return_address = cpu.pop_word(bus);
    cpu.pc = return_address.wrapping_add(1);
    bus.tick();
    bus.tick();
}

/// Executes the NOP (No Operation) instruction. 2 cycles.
pub(crate) fn execute_nop<M: MemoryBus>(bus: &mut Bus<M>) {
    bus.tick();
}
