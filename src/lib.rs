//! # 6502 CPU Interpreter
//!
//! A cycle-accurate NMOS 6502 instruction interpreter designed for modularity,
//! clarity, and WebAssembly portability.
//!
//! The crate provides the CPU register file, a trait-based memory bus
//! abstraction, a table-driven opcode decoder and a fetch-decode-execute loop
//! that charges every bus access against a cycle budget.
//!
//! ## Quick Start
//!
//! ```rust
//! use cpu6502::{load_program, CPU, FlatMemory};
//!
//! let mut memory = FlatMemory::new();
//! let mut cpu = CPU::reset(&mut memory);
//!
//! // LDA #$FF; STA $90; STA $8000; EOR #$CC; JMP $1000
//! let program = [
//!     0x00, 0x10, 0xA9, 0xFF, 0x85, 0x90, 0x8D, 0x00, 0x80, 0x49, 0xCC, 0x4C, 0x00, 0x10,
//! ];
//! cpu.set_pc(load_program(&program, &mut memory));
//!
//! // Run in 20-cycle slices, tolerating overrun
//! let mut clock: i32 = 1000;
//! while clock > 0 {
//!     clock -= cpu.execute(20, &mut memory).unwrap();
//! }
//! assert_eq!(memory[0x0090], 0xFF);
//! assert_eq!(memory[0x8000], 0xFF);
//! ```
//!
//! ## Architecture
//!
//! - **Modularity**: CPU state is separated from memory via the `MemoryBus` trait
//! - **Cycle Accuracy**: every byte access costs one cycle on the `Bus`
//! - **Table-Driven Design**: opcode metadata lives in `OPCODE_TABLE`
//! - **Value Semantics**: `CPU` is `Copy`, so snapshots are plain copies
//!
//! ## Modules
//!
//! - `cpu` - Register file and execution loop
//! - `memory` - MemoryBus trait and `FlatMemory`
//! - `bus` - Cycle-counted memory access
//! - `addressing` - Addressing modes and effective-address resolution
//! - `stack` - Stack push/pop protocol
//! - `status` - Status register flags
//! - `opcodes` - Opcode metadata table
//! - `loader` - Program image loader
//!
//! ## Logging
//!
//! The crate logs through the `log` facade: every executed instruction at
//! `trace`, each `execute` call at `debug` and unknown opcodes at `warn`. No
//! logger is installed by the library.

pub mod addressing;
pub mod bus;
pub mod cpu;
pub mod loader;
pub mod memory;
pub mod opcodes;
pub mod stack;
pub mod status;

// Internal instruction implementations (not part of public API)
mod instructions;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export public API
pub use addressing::{Access, AddressingMode};
pub use bus::Bus;
pub use cpu::{CPU, RESET_VECTOR};
pub use loader::load_program;
pub use memory::{FlatMemory, MemoryBus, MEMORY_SIZE};
pub use opcodes::{Mnemonic, OpcodeMetadata, OPCODE_TABLE};
pub use stack::STACK_BASE;
pub use status::Status;

/// Errors that can occur during CPU execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionError {
    /// The fetched opcode byte has no entry in `OPCODE_TABLE`.
    ///
    /// `address` is where the opcode was fetched from.
    UnknownOpcode { opcode: u8, address: u16 },
}

impl std::fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ExecutionError::UnknownOpcode { opcode, address } => {
                write!(f, "Unknown opcode 0x{:02X} at 0x{:04X}", opcode, address)
            }
        }
    }
}

impl std::error::Error for ExecutionError {}
