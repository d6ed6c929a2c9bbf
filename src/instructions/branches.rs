//! # Branch Instructions
//!
//! BCC, BCS, BEQ, BNE, BMI, BPL, BVC and BVS share one implementation; the
//! dispatcher evaluates the flag condition and passes it in.
//!
//! All branch instructions use relative addressing with a signed 8-bit offset
//! measured from the address after the operand byte.

use crate::addressing::page_crossed;
use crate::{Bus, MemoryBus, CPU};

/// Executes a conditional branch.
///
/// Cycle timing:
/// - 2 cycles if branch not taken
/// - 3 cycles if branch taken to the same page
/// - 5 cycles if branch taken to a different page
///
/// No flags are affected.
pub(crate) fn execute_branch<M: MemoryBus>(cpu: &mut CPU, condition: bool, bus: &mut Bus<M>) {
    let offset = cpu.fetch_byte(bus) as i8;

    if !condition {
        return;
    }

    let target = cpu.pc.wrapping_add_signed(offset as i16);
    bus.tick();
    if page_crossed(cpu.pc, target) {
        bus.tick();
        bus.tick();
    }
    cpu.pc = target;
}
