//! Fuzz target for the execution loop.
//!
//! Builds an arbitrary register file and memory image, then runs a cycle
//! budget to completion or to the first unknown opcode.

#![no_main]

use arbitrary::Arbitrary;
use cpu6502::{FlatMemory, Status, CPU};
use libfuzzer_sys::fuzz_target;

/// Arbitrary CPU initial state for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    pc: u16,
    status: u8,
}

/// Memory regions for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Bytes at the PC location
    program: [u8; 64],
    /// Zero page contents
    zero_page: [u8; 256],
    /// Stack page contents
    stack_page: [u8; 256],
}

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    memory: FuzzMemory,
    budget: u8,
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = FlatMemory::new();
    let mut cpu = CPU::reset_to(&mut memory, input.cpu_state.pc);

    for (i, &byte) in input.memory.zero_page.iter().enumerate() {
        memory[i as u16] = byte;
    }
    for (i, &byte) in input.memory.stack_page.iter().enumerate() {
        memory[0x0100 + i as u16] = byte;
    }
    for (i, &byte) in input.memory.program.iter().enumerate() {
        memory[input.cpu_state.pc.wrapping_add(i as u16)] = byte;
    }

    cpu.set_a(input.cpu_state.a);
    cpu.set_x(input.cpu_state.x);
    cpu.set_y(input.cpu_state.y);
    cpu.set_sp(input.cpu_state.sp);
    cpu.set_status(Status::from_bits_retain(input.cpu_state.status));

    let budget = input.budget as i32;
    // Unknown opcodes are an expected outcome; only panics are bugs
    if let Ok(used) = cpu.execute(budget, &mut memory) {
        // The last instruction may overrun by at most 6 cycles
        assert!(used >= budget);
        assert!(used <= budget + 6);
    }
});
