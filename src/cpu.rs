//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the 6502 register file and
//! the fetch-decode-execute loop.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of next instruction
//! - **Stack pointer** (SP): 8-bit offset into stack page (0x0100-0x01FF)
//! - **Status register**: N, V, B, D, I, Z, C packed into a `Status` byte
//!
//! The CPU does not own its memory. Every call that executes code borrows a
//! `MemoryBus` for its duration, so the register file stays `Copy` and can be
//! snapshotted and compared freely in tests.
//!
//! ## Execution Model
//!
//! The CPU executes instructions via:
//! - `step()`: Execute one instruction
//! - `execute()`: Execute whole instructions until a cycle budget is spent
//!
//! Instructions are never split: the last one started by `execute` always
//! runs to completion, so the cycles used may exceed the budget.

use crate::instructions::{
    alu, branches, compare, control, flags, inc_dec, load_store, stack, transfer,
};
use crate::opcodes::Mnemonic;
use crate::{Bus, ExecutionError, MemoryBus, Status, OPCODE_TABLE};
use log::{debug, trace, warn};

/// Conventional start address used by `CPU::reset`.
pub const RESET_VECTOR: u16 = 0xFFFC;

/// 6502 register file.
///
/// # Examples
///
/// ```
/// use cpu6502::{CPU, FlatMemory};
///
/// let mut memory = FlatMemory::new();
/// let cpu = CPU::reset(&mut memory);
///
/// assert_eq!(cpu.pc(), 0xFFFC);
/// assert_eq!(cpu.sp(), 0xFF);
/// assert_eq!(cpu.status().bits(), 0x00);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CPU {
    /// Program counter (address of next instruction)
    pub(crate) pc: u16,

    /// Stack pointer (0x0100 | sp gives full stack address)
    pub(crate) sp: u8,

    /// Accumulator register
    pub(crate) a: u8,

    /// X index register
    pub(crate) x: u8,

    /// Y index register
    pub(crate) y: u8,

    /// Processor status flags
    pub(crate) status: Status,
}

impl CPU {
    /// Resets the machine with PC at `RESET_VECTOR`.
    ///
    /// Equivalent to `CPU::reset_to(memory, RESET_VECTOR)`.
    pub fn reset<M: MemoryBus>(memory: &mut M) -> Self {
        Self::reset_to(memory, RESET_VECTOR)
    }

    /// Resets the machine with PC at `start_address`.
    ///
    /// Memory is zero-filled and the register file comes back in its
    /// power-on state:
    /// - PC = `start_address`
    /// - SP = 0xFF
    /// - Status byte = 0x00 (every flag clear)
    /// - A, X, Y = 0
    ///
    /// # Examples
    ///
    /// ```
    /// use cpu6502::{CPU, FlatMemory, MemoryBus};
    ///
    /// let mut memory = FlatMemory::new();
    /// memory.write(0x1234, 0xAA);
    ///
    /// let cpu = CPU::reset_to(&mut memory, 0xFF00);
    /// assert_eq!(cpu.pc(), 0xFF00);
    /// assert_eq!(memory.read(0x1234), 0x00);
    /// ```
    pub fn reset_to<M: MemoryBus>(memory: &mut M, start_address: u16) -> Self {
        memory.clear();

        Self {
            pc: start_address,
            sp: 0xFF,
            a: 0x00,
            x: 0x00,
            y: 0x00,
            status: Status::empty(),
        }
    }

    /// Executes whole instructions until `cycle_budget` cycles have been spent.
    ///
    /// Returns the number of cycles actually used. Because the last
    /// instruction always completes, this can be larger than the budget. A
    /// budget of zero or less executes nothing and returns 0.
    ///
    /// # Errors
    ///
    /// Returns `ExecutionError::UnknownOpcode` when an opcode byte with no
    /// entry in `OPCODE_TABLE` is fetched. Execution stops there with PC
    /// pointing just past the offending byte.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpu6502::{CPU, FlatMemory};
    ///
    /// let mut memory = FlatMemory::new();
    /// let mut cpu = CPU::reset_to(&mut memory, 0x8000);
    /// memory[0x8000] = 0xA9; // LDA #$42
    /// memory[0x8001] = 0x42;
    ///
    /// // A 1-cycle budget still runs the whole 2-cycle instruction
    /// let used = cpu.execute(1, &mut memory).unwrap();
    /// assert_eq!(used, 2);
    /// assert_eq!(cpu.a(), 0x42);
    /// ```
    pub fn execute<M: MemoryBus>(
        &mut self,
        cycle_budget: i32,
        memory: &mut M,
    ) -> Result<i32, ExecutionError> {
        if cycle_budget <= 0 {
            return Ok(0);
        }

        let mut bus = Bus::new(memory, cycle_budget);
        while bus.remaining() > 0 {
            self.execute_instruction(&mut bus)?;
        }

        let used = cycle_budget - bus.remaining();
        debug!(
            "executed {} cycles (budget {}), PC=${:04X}",
            used, cycle_budget, self.pc
        );
        Ok(used)
    }

    /// Executes exactly one instruction and returns the cycles it took.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpu6502::{CPU, FlatMemory};
    ///
    /// let mut memory = FlatMemory::new();
    /// let mut cpu = CPU::reset_to(&mut memory, 0x8000);
    /// memory[0x8000] = 0xEA; // NOP
    ///
    /// assert_eq!(cpu.step(&mut memory).unwrap(), 2);
    /// assert_eq!(cpu.pc(), 0x8001);
    /// ```
    pub fn step<M: MemoryBus>(&mut self, memory: &mut M) -> Result<i32, ExecutionError> {
        let mut bus = Bus::new(memory, 0);
        self.execute_instruction(&mut bus)?;
        Ok(-bus.remaining())
    }

    /// Fetches, decodes and executes one instruction.
    fn execute_instruction<M: MemoryBus>(
        &mut self,
        bus: &mut Bus<M>,
    ) -> Result<(), ExecutionError> {
        let address = self.pc;
        let before = bus.remaining();
        let opcode = self.fetch_byte(bus);

        let metadata = match OPCODE_TABLE[opcode as usize] {
            Some(metadata) => metadata,
            None => {
                warn!("unknown opcode ${:02X} at ${:04X}", opcode, address);
                return Err(ExecutionError::UnknownOpcode { opcode, address });
            }
        };
        let mode = metadata.addressing_mode;
        let status = self.status;

        match metadata.mnemonic {
            Mnemonic::Lda => load_store::execute_lda(self, mode, bus),
            Mnemonic::Ldx => load_store::execute_ldx(self, mode, bus),
            Mnemonic::Ldy => load_store::execute_ldy(self, mode, bus),
            Mnemonic::Sta => load_store::execute_sta(self, mode, bus),
            Mnemonic::Stx => load_store::execute_stx(self, mode, bus),
            Mnemonic::Sty => load_store::execute_sty(self, mode, bus),

            Mnemonic::And => alu::execute_and(self, mode, bus),
            Mnemonic::Ora => alu::execute_ora(self, mode, bus),
            Mnemonic::Eor => alu::execute_eor(self, mode, bus),
            Mnemonic::Bit => alu::execute_bit(self, mode, bus),
            Mnemonic::Adc => alu::execute_adc(self, mode, bus),
            Mnemonic::Sbc => alu::execute_sbc(self, mode, bus),

            Mnemonic::Cmp => compare::execute_cmp(self, mode, bus),
            Mnemonic::Cpx => compare::execute_cpx(self, mode, bus),
            Mnemonic::Cpy => compare::execute_cpy(self, mode, bus),

            Mnemonic::Inc => inc_dec::execute_inc(self, mode, bus),
            Mnemonic::Dec => inc_dec::execute_dec(self, mode, bus),
            Mnemonic::Inx => inc_dec::execute_inx(self, bus),
            Mnemonic::Iny => inc_dec::execute_iny(self, bus),
            Mnemonic::Dex => inc_dec::execute_dex(self, bus),
            Mnemonic::Dey => inc_dec::execute_dey(self, bus),

            Mnemonic::Tax => transfer::execute_tax(self, bus),
            Mnemonic::Tay => transfer::execute_tay(self, bus),
            Mnemonic::Txa => transfer::execute_txa(self, bus),
            Mnemonic::Tya => transfer::execute_tya(self, bus),
            Mnemonic::Tsx => transfer::execute_tsx(self, bus),
            Mnemonic::Txs => transfer::execute_txs(self, bus),

            Mnemonic::Pha => stack::execute_pha(self, bus),
            Mnemonic::Php => stack::execute_php(self, bus),
            Mnemonic::Pla => stack::execute_pla(self, bus),
            Mnemonic::Plp => stack::execute_plp(self, bus),

            Mnemonic::Bcc => branches::execute_branch(self, !status.carry(), bus),
            Mnemonic::Bcs => branches::execute_branch(self, status.carry(), bus),
            Mnemonic::Bne => branches::execute_branch(self, !status.zero(), bus),
            Mnemonic::Beq => branches::execute_branch(self, status.zero(), bus),
            Mnemonic::Bpl => branches::execute_branch(self, !status.negative(), bus),
            Mnemonic::Bmi => branches::execute_branch(self, status.negative(), bus),
            Mnemonic::Bvc => branches::execute_branch(self, !status.overflow(), bus),
            Mnemonic::Bvs => branches::execute_branch(self, status.overflow(), bus),

            Mnemonic::Jmp => control::execute_jmp(self, mode, bus),
            Mnemonic::Jsr => control::execute_jsr(self, bus),
            Mnemonic::Rts => control::execute_rts(self, bus),
            Mnemonic::Nop => control::execute_nop(bus),

            Mnemonic::Clc => flags::execute_flag(self, Status::CARRY, false, bus),
            Mnemonic::Sec => flags::execute_flag(self, Status::CARRY, true, bus),
            Mnemonic::Cli => flags::execute_flag(self, Status::INTERRUPT_DISABLE, false, bus),
            Mnemonic::Sei => flags::execute_flag(self, Status::INTERRUPT_DISABLE, true, bus),
            Mnemonic::Clv => flags::execute_flag(self, Status::OVERFLOW, false, bus),
            Mnemonic::Cld => flags::execute_flag(self, Status::DECIMAL, false, bus),
            Mnemonic::Sed => flags::execute_flag(self, Status::DECIMAL, true, bus),
        }

        trace!(
            "${:04X}  {} {:?}  {} cycles",
            address,
            metadata.mnemonic,
            mode,
            before - bus.remaining()
        );
        Ok(())
    }

    // ========== Instruction Stream ==========

    /// Reads the byte at PC and advances PC by 1. 1 cycle.
    pub fn fetch_byte<M: MemoryBus>(&mut self, bus: &mut Bus<M>) -> u8 {
        let value = bus.read_byte(self.pc);
        self.pc = self.pc.wrapping_add(1);
        value
    }

    /// Reads the little-endian word at PC and advances PC by 2. 2 cycles.
    pub fn fetch_word<M: MemoryBus>(&mut self, bus: &mut Bus<M>) -> u16 {
        let low = self.fetch_byte(bus) as u16;
        let high = self.fetch_byte(bus) as u16;
        (high << 8) | low
    }

    // ========== Register Getters ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the stack pointer value.
    ///
    /// Note: The full stack address is 0x0100 | SP. The stack grows downward from 0x01FF.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Returns the status register.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpu6502::{CPU, FlatMemory, Status};
    ///
    /// let mut memory = FlatMemory::new();
    /// let mut cpu = CPU::reset_to(&mut memory, 0x8000);
    /// cpu.set_flag_c(true);
    /// cpu.set_flag_n(true);
    ///
    /// assert_eq!(cpu.status(), Status::CARRY | Status::NEGATIVE);
    /// assert_eq!(cpu.status().bits(), 0x81);
    /// ```
    pub fn status(&self) -> Status {
        self.status
    }

    // ========== Register Setters ==========

    /// Sets the accumulator register.
    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    /// Sets the X index register.
    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    /// Sets the Y index register.
    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    /// Sets the program counter.
    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    /// Sets the stack pointer.
    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    /// Replaces the whole status register.
    pub fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    // ========== Status Flag Getters ==========

    /// Returns true if the Negative flag is set.
    pub fn flag_n(&self) -> bool {
        self.status.negative()
    }

    /// Returns true if the Overflow flag is set.
    pub fn flag_v(&self) -> bool {
        self.status.overflow()
    }

    /// Returns true if the Break flag is set.
    pub fn flag_b(&self) -> bool {
        self.status.brk()
    }

    /// Returns true if the Decimal mode flag is set.
    pub fn flag_d(&self) -> bool {
        self.status.decimal()
    }

    /// Returns true if the Interrupt Disable flag is set.
    pub fn flag_i(&self) -> bool {
        self.status.interrupt_disable()
    }

    /// Returns true if the Zero flag is set.
    pub fn flag_z(&self) -> bool {
        self.status.zero()
    }

    /// Returns true if the Carry flag is set.
    pub fn flag_c(&self) -> bool {
        self.status.carry()
    }

    // ========== Status Flag Setters ==========

    /// Sets or clears the Negative flag.
    pub fn set_flag_n(&mut self, value: bool) {
        self.status.set(Status::NEGATIVE, value);
    }

    /// Sets or clears the Overflow flag.
    pub fn set_flag_v(&mut self, value: bool) {
        self.status.set(Status::OVERFLOW, value);
    }

    /// Sets or clears the Break flag.
    pub fn set_flag_b(&mut self, value: bool) {
        self.status.set(Status::BREAK, value);
    }

    /// Sets or clears the Decimal mode flag.
    pub fn set_flag_d(&mut self, value: bool) {
        self.status.set(Status::DECIMAL, value);
    }

    /// Sets or clears the Interrupt Disable flag.
    pub fn set_flag_i(&mut self, value: bool) {
        self.status.set(Status::INTERRUPT_DISABLE, value);
    }

    /// Sets or clears the Zero flag.
    pub fn set_flag_z(&mut self, value: bool) {
        self.status.set(Status::ZERO, value);
    }

    /// Sets or clears the Carry flag.
    pub fn set_flag_c(&mut self, value: bool) {
        self.status.set(Status::CARRY, value);
    }
}
