//! # 6502 Instruction Implementations
//!
//! This module contains the implementations of all supported 6502 instructions,
//! organized by category. Each instruction is a standalone function that takes
//! the CPU, the addressing mode from `OPCODE_TABLE` where it has one, and the
//! cycle-counting `Bus`. The opcode byte has already been fetched (1 cycle) by
//! the time an instruction function runs.
//!
//! ## Categories
//!
//! - **load_store**: Load and store instructions (LDA, LDX, LDY, STA, STX, STY)
//! - **alu**: Arithmetic and logic operations (ADC, SBC, AND, ORA, EOR, BIT)
//! - **compare**: Register comparisons (CMP, CPX, CPY)
//! - **inc_dec**: Increment and decrement operations (INC, DEC, INX, INY, DEX, DEY)
//! - **transfer**: Register transfer operations (TAX, TAY, TXA, TYA, TSX, TXS)
//! - **stack**: Stack operations (PHA, PHP, PLA, PLP)
//! - **branches**: Conditional branch instructions (BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS)
//! - **control**: Control flow instructions (JMP, JSR, RTS, NOP)
//! - **flags**: Status flag manipulation (CLC, SEC, CLI, SEI, CLD, SED, CLV)

pub(crate) mod alu;
pub(crate) mod branches;
pub(crate) mod compare;
pub(crate) mod control;
pub(crate) mod flags;
pub(crate) mod inc_dec;
pub(crate) mod load_store;
pub(crate) mod stack;
pub(crate) mod transfer;
