//! # Opcode Metadata Table
//!
//! This module contains the 256-entry opcode table that drives instruction
//! decoding. It is built at compile time from a compact list of supported
//! opcodes; every other byte value decodes to `None`, which the execute loop
//! reports as `ExecutionError::UnknownOpcode`.
//!
//! Each entry includes:
//! - Mnemonic (the instruction the opcode dispatches to)
//! - Addressing mode
//! - Base cycle cost (no page crossing, branch not taken)
//! - Instruction size in bytes

use crate::addressing::AddressingMode;
use std::fmt;

/// Instructions understood by the interpreter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mnemonic {
    Adc,
    And,
    Bcc,
    Bcs,
    Beq,
    Bit,
    Bmi,
    Bne,
    Bpl,
    Bvc,
    Bvs,
    Clc,
    Cld,
    Cli,
    Clv,
    Cmp,
    Cpx,
    Cpy,
    Dec,
    Dex,
    Dey,
    Eor,
    Inc,
    Inx,
    Iny,
    Jmp,
    Jsr,
    Lda,
    Ldx,
    Ldy,
    Nop,
    Ora,
    Pha,
    Php,
    Pla,
    Plp,
    Rts,
    Sbc,
    Sec,
    Sed,
    Sei,
    Sta,
    Stx,
    Sty,
    Tax,
    Tay,
    Tsx,
    Txa,
    Txs,
    Tya,
}

impl Mnemonic {
    /// Three-letter assembler name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Mnemonic::Adc => "ADC",
            Mnemonic::And => "AND",
            Mnemonic::Bcc => "BCC",
            Mnemonic::Bcs => "BCS",
            Mnemonic::Beq => "BEQ",
            Mnemonic::Bit => "BIT",
            Mnemonic::Bmi => "BMI",
            Mnemonic::Bne => "BNE",
            Mnemonic::Bpl => "BPL",
            Mnemonic::Bvc => "BVC",
            Mnemonic::Bvs => "BVS",
            Mnemonic::Clc => "CLC",
            Mnemonic::Cld => "CLD",
            Mnemonic::Cli => "CLI",
            Mnemonic::Clv => "CLV",
            Mnemonic::Cmp => "CMP",
            Mnemonic::Cpx => "CPX",
            Mnemonic::Cpy => "CPY",
            Mnemonic::Dec => "DEC",
            Mnemonic::Dex => "DEX",
            Mnemonic::Dey => "DEY",
            Mnemonic::Eor => "EOR",
            Mnemonic::Inc => "INC",
            Mnemonic::Inx => "INX",
            Mnemonic::Iny => "INY",
            Mnemonic::Jmp => "JMP",
            Mnemonic::Jsr => "JSR",
            Mnemonic::Lda => "LDA",
            Mnemonic::Ldx => "LDX",
            Mnemonic::Ldy => "LDY",
            Mnemonic::Nop => "NOP",
            Mnemonic::Ora => "ORA",
            Mnemonic::Pha => "PHA",
            Mnemonic::Php => "PHP",
            Mnemonic::Pla => "PLA",
            Mnemonic::Plp => "PLP",
            Mnemonic::Rts => "RTS",
            Mnemonic::Sbc => "SBC",
            Mnemonic::Sec => "SEC",
            Mnemonic::Sed => "SED",
            Mnemonic::Sei => "SEI",
            Mnemonic::Sta => "STA",
            Mnemonic::Stx => "STX",
            Mnemonic::Sty => "STY",
            Mnemonic::Tax => "TAX",
            Mnemonic::Tay => "TAY",
            Mnemonic::Tsx => "TSX",
            Mnemonic::Txa => "TXA",
            Mnemonic::Txs => "TXS",
            Mnemonic::Tya => "TYA",
        }
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata for a single 6502 opcode.
///
/// # Examples
///
/// ```
/// use cpu6502::{AddressingMode, Mnemonic, OPCODE_TABLE};
///
/// // Look up LDA immediate (opcode 0xA9)
/// let lda_imm = OPCODE_TABLE[0xA9].unwrap();
/// assert_eq!(lda_imm.mnemonic, Mnemonic::Lda);
/// assert_eq!(lda_imm.addressing_mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.base_cycles, 2);
/// assert_eq!(lda_imm.size_bytes, 2);
///
/// // Unsupported byte values have no entry
/// assert!(OPCODE_TABLE[0x02].is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Instruction this opcode dispatches to.
    pub mnemonic: Mnemonic,

    /// Addressing mode for this instruction.
    pub addressing_mode: AddressingMode,

    /// Cycle cost without page-crossing or branch penalties.
    pub base_cycles: u8,

    /// Total instruction size in bytes (opcode + operands).
    pub size_bytes: u8,
}

impl OpcodeMetadata {
    const fn new(mnemonic: Mnemonic, addressing_mode: AddressingMode, base_cycles: u8) -> Self {
        Self {
            mnemonic,
            addressing_mode,
            base_cycles,
            size_bytes: 1 + addressing_mode.operand_bytes(),
        }
    }
}

use AddressingMode::*;
use Mnemonic::*;

/// Supported opcodes, grouped by instruction family.
const SUPPORTED: [(u8, OpcodeMetadata); 129] = [
    // Loads
    (0xA9, OpcodeMetadata::new(Lda, Immediate, 2)),
    (0xA5, OpcodeMetadata::new(Lda, ZeroPage, 3)),
    (0xB5, OpcodeMetadata::new(Lda, ZeroPageX, 4)),
    (0xAD, OpcodeMetadata::new(Lda, Absolute, 4)),
    (0xBD, OpcodeMetadata::new(Lda, AbsoluteX, 4)),
    (0xB9, OpcodeMetadata::new(Lda, AbsoluteY, 4)),
    (0xA1, OpcodeMetadata::new(Lda, IndirectX, 6)),
    (0xB1, OpcodeMetadata::new(Lda, IndirectY, 5)),
    (0xA2, OpcodeMetadata::new(Ldx, Immediate, 2)),
    (0xA6, OpcodeMetadata::new(Ldx, ZeroPage, 3)),
    (0xB6, OpcodeMetadata::new(Ldx, ZeroPageY, 4)),
    (0xAE, OpcodeMetadata::new(Ldx, Absolute, 4)),
    (0xBE, OpcodeMetadata::new(Ldx, AbsoluteY, 4)),
    (0xA0, OpcodeMetadata::new(Ldy, Immediate, 2)),
    (0xA4, OpcodeMetadata::new(Ldy, ZeroPage, 3)),
    (0xB4, OpcodeMetadata::new(Ldy, ZeroPageX, 4)),
    (0xAC, OpcodeMetadata::new(Ldy, Absolute, 4)),
    (0xBC, OpcodeMetadata::new(Ldy, AbsoluteX, 4)),
    // Stores
    (0x85, OpcodeMetadata::new(Sta, ZeroPage, 3)),
    (0x95, OpcodeMetadata::new(Sta, ZeroPageX, 4)),
    (0x8D, OpcodeMetadata::new(Sta, Absolute, 4)),
    (0x9D, OpcodeMetadata::new(Sta, AbsoluteX, 5)),
    (0x99, OpcodeMetadata::new(Sta, AbsoluteY, 5)),
    (0x81, OpcodeMetadata::new(Sta, IndirectX, 6)),
    (0x91, OpcodeMetadata::new(Sta, IndirectY, 6)),
    (0x86, OpcodeMetadata::new(Stx, ZeroPage, 3)),
    (0x96, OpcodeMetadata::new(Stx, ZeroPageY, 4)),
    (0x8E, OpcodeMetadata::new(Stx, Absolute, 4)),
    (0x84, OpcodeMetadata::new(Sty, ZeroPage, 3)),
    (0x94, OpcodeMetadata::new(Sty, ZeroPageX, 4)),
    (0x8C, OpcodeMetadata::new(Sty, Absolute, 4)),
    // Register transfers
    (0xAA, OpcodeMetadata::new(Tax, Implied, 2)),
    (0xA8, OpcodeMetadata::new(Tay, Implied, 2)),
    (0x8A, OpcodeMetadata::new(Txa, Implied, 2)),
    (0x98, OpcodeMetadata::new(Tya, Implied, 2)),
    (0xBA, OpcodeMetadata::new(Tsx, Implied, 2)),
    (0x9A, OpcodeMetadata::new(Txs, Implied, 2)),
    // Stack
    (0x48, OpcodeMetadata::new(Pha, Implied, 3)),
    (0x08, OpcodeMetadata::new(Php, Implied, 3)),
    (0x68, OpcodeMetadata::new(Pla, Implied, 4)),
    (0x28, OpcodeMetadata::new(Plp, Implied, 4)),
    // Logical
    (0x29, OpcodeMetadata::new(And, Immediate, 2)),
    (0x25, OpcodeMetadata::new(And, ZeroPage, 3)),
    (0x35, OpcodeMetadata::new(And, ZeroPageX, 4)),
    (0x2D, OpcodeMetadata::new(And, Absolute, 4)),
    (0x3D, OpcodeMetadata::new(And, AbsoluteX, 4)),
    (0x39, OpcodeMetadata::new(And, AbsoluteY, 4)),
    (0x21, OpcodeMetadata::new(And, IndirectX, 6)),
    (0x31, OpcodeMetadata::new(And, IndirectY, 5)),
    (0x49, OpcodeMetadata::new(Eor, Immediate, 2)),
    (0x45, OpcodeMetadata::new(Eor, ZeroPage, 3)),
    (0x55, OpcodeMetadata::new(Eor, ZeroPageX, 4)),
    (0x4D, OpcodeMetadata::new(Eor, Absolute, 4)),
    (0x5D, OpcodeMetadata::new(Eor, AbsoluteX, 4)),
    (0x59, OpcodeMetadata::new(Eor, AbsoluteY, 4)),
    (0x41, OpcodeMetadata::new(Eor, IndirectX, 6)),
    (0x51, OpcodeMetadata::new(Eor, IndirectY, 5)),
    (0x09, OpcodeMetadata::new(Ora, Immediate, 2)),
    (0x05, OpcodeMetadata::new(Ora, ZeroPage, 3)),
    (0x15, OpcodeMetadata::new(Ora, ZeroPageX, 4)),
    (0x0D, OpcodeMetadata::new(Ora, Absolute, 4)),
    (0x1D, OpcodeMetadata::new(Ora, AbsoluteX, 4)),
    (0x19, OpcodeMetadata::new(Ora, AbsoluteY, 4)),
    (0x01, OpcodeMetadata::new(Ora, IndirectX, 6)),
    (0x11, OpcodeMetadata::new(Ora, IndirectY, 5)),
    (0x24, OpcodeMetadata::new(Bit, ZeroPage, 3)),
    (0x2C, OpcodeMetadata::new(Bit, Absolute, 4)),
    // Arithmetic
    (0x69, OpcodeMetadata::new(Adc, Immediate, 2)),
    (0x65, OpcodeMetadata::new(Adc, ZeroPage, 3)),
    (0x75, OpcodeMetadata::new(Adc, ZeroPageX, 4)),
    (0x6D, OpcodeMetadata::new(Adc, Absolute, 4)),
    (0x7D, OpcodeMetadata::new(Adc, AbsoluteX, 4)),
    (0x79, OpcodeMetadata::new(Adc, AbsoluteY, 4)),
    (0x61, OpcodeMetadata::new(Adc, IndirectX, 6)),
    (0x71, OpcodeMetadata::new(Adc, IndirectY, 5)),
    (0xE9, OpcodeMetadata::new(Sbc, Immediate, 2)),
    (0xE5, OpcodeMetadata::new(Sbc, ZeroPage, 3)),
    (0xF5, OpcodeMetadata::new(Sbc, ZeroPageX, 4)),
    (0xED, OpcodeMetadata::new(Sbc, Absolute, 4)),
    (0xFD, OpcodeMetadata::new(Sbc, AbsoluteX, 4)),
    (0xF9, OpcodeMetadata::new(Sbc, AbsoluteY, 4)),
    (0xE1, OpcodeMetadata::new(Sbc, IndirectX, 6)),
    (0xF1, OpcodeMetadata::new(Sbc, IndirectY, 5)),
    // Compare
    (0xC9, OpcodeMetadata::new(Cmp, Immediate, 2)),
    (0xC5, OpcodeMetadata::new(Cmp, ZeroPage, 3)),
    (0xD5, OpcodeMetadata::new(Cmp, ZeroPageX, 4)),
    (0xCD, OpcodeMetadata::new(Cmp, Absolute, 4)),
    (0xDD, OpcodeMetadata::new(Cmp, AbsoluteX, 4)),
    (0xD9, OpcodeMetadata::new(Cmp, AbsoluteY, 4)),
    (0xC1, OpcodeMetadata::new(Cmp, IndirectX, 6)),
    (0xD1, OpcodeMetadata::new(Cmp, IndirectY, 5)),
    (0xE0, OpcodeMetadata::new(Cpx, Immediate, 2)),
    (0xE4, OpcodeMetadata::new(Cpx, ZeroPage, 3)),
    (0xEC, OpcodeMetadata::new(Cpx, Absolute, 4)),
    (0xC0, OpcodeMetadata::new(Cpy, Immediate, 2)),
    (0xC4, OpcodeMetadata::new(Cpy, ZeroPage, 3)),
    (0xCC, OpcodeMetadata::new(Cpy, Absolute, 4)),
    // Increments and decrements
    (0xE6, OpcodeMetadata::new(Inc, ZeroPage, 5)),
    (0xF6, OpcodeMetadata::new(Inc, ZeroPageX, 6)),
    (0xEE, OpcodeMetadata::new(Inc, Absolute, 6)),
    (0xFE, OpcodeMetadata::new(Inc, AbsoluteX, 7)),
    (0xC6, OpcodeMetadata::new(Dec, ZeroPage, 5)),
    (0xD6, OpcodeMetadata::new(Dec, ZeroPageX, 6)),
    (0xCE, OpcodeMetadata::new(Dec, Absolute, 6)),
    (0xDE, OpcodeMetadata::new(Dec, AbsoluteX, 7)),
    (0xE8, OpcodeMetadata::new(Inx, Implied, 2)),
    (0xC8, OpcodeMetadata::new(Iny, Implied, 2)),
    (0xCA, OpcodeMetadata::new(Dex, Implied, 2)),
    (0x88, OpcodeMetadata::new(Dey, Implied, 2)),
    // Jumps and calls
    (0x4C, OpcodeMetadata::new(Jmp, Absolute, 3)),
    (0x6C, OpcodeMetadata::new(Jmp, Indirect, 5)),
    (0x20, OpcodeMetadata::new(Jsr, Absolute, 6)),
    (0x60, OpcodeMetadata::new(Rts, Implied, 6)),
    // Branches
    (0x90, OpcodeMetadata::new(Bcc, Relative, 2)),
    (0xB0, OpcodeMetadata::new(Bcs, Relative, 2)),
    (0xF0, OpcodeMetadata::new(Beq, Relative, 2)),
    (0xD0, OpcodeMetadata::new(Bne, Relative, 2)),
    (0x30, OpcodeMetadata::new(Bmi, Relative, 2)),
    (0x10, OpcodeMetadata::new(Bpl, Relative, 2)),
    (0x50, OpcodeMetadata::new(Bvc, Relative, 2)),
    (0x70, OpcodeMetadata::new(Bvs, Relative, 2)),
    // Status flags
    (0x18, OpcodeMetadata::new(Clc, Implied, 2)),
    (0x38, OpcodeMetadata::new(Sec, Implied, 2)),
    (0x58, OpcodeMetadata::new(Cli, Implied, 2)),
    (0x78, OpcodeMetadata::new(Sei, Implied, 2)),
    (0xB8, OpcodeMetadata::new(Clv, Implied, 2)),
    (0xD8, OpcodeMetadata::new(Cld, Implied, 2)),
    (0xF8, OpcodeMetadata::new(Sed, Implied, 2)),
    // System
    (0xEA, OpcodeMetadata::new(Nop, Implied, 2)),
];

const fn build_table() -> [Option<OpcodeMetadata>; 256] {
    let mut table: [Option<OpcodeMetadata>; 256] = [None; 256];
    let mut i = 0;
    while i < SUPPORTED.len() {
        let (opcode, metadata) = SUPPORTED[i];
        table[opcode as usize] = Some(metadata);
        i += 1;
    }
    table
}

/// 256-entry opcode table indexed by opcode byte value.
///
/// `None` marks byte values the interpreter does not execute.
///
/// # Examples
///
/// ```
/// use cpu6502::{Mnemonic, OPCODE_TABLE};
///
/// let jsr = OPCODE_TABLE[0x20].unwrap();
/// assert_eq!(jsr.mnemonic, Mnemonic::Jsr);
/// assert_eq!(jsr.base_cycles, 6);
/// assert_eq!(jsr.size_bytes, 3);
/// ```
pub const OPCODE_TABLE: [Option<OpcodeMetadata>; 256] = build_table();
