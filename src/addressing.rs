//! # Addressing Modes
//!
//! This module defines the addressing modes of the 6502 and the resolver that
//! turns operand bytes plus register state into an effective address.
//!
//! Each mode consumes its operand bytes through `fetch_byte`/`fetch_word` and
//! charges its own extra cycles on the `Bus`:
//!
//! | Mode | Extra cycles |
//! |------|--------------|
//! | ZeroPage, Absolute | none |
//! | ZeroPageX/Y, IndirectX | 1 (index addition) |
//! | AbsoluteX/Y, IndirectY (read) | 1 only when the high byte changes |
//! | AbsoluteX/Y, IndirectY (write) | 1 always |
//!
//! Stores and read-modify-write instructions cannot skip the high-byte fix-up
//! cycle, which is why the resolver needs to know the kind of access.

use crate::{Bus, MemoryBus, CPU};

/// 6502 addressing mode enumeration.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implied
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, RTS, TAX
    Implied,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80
    ZeroPage,

    /// Zero page address indexed by X register, wrapping within zero page.
    ///
    /// Example: LDA $80,X
    ZeroPageX,

    /// Zero page address indexed by Y register, wrapping within zero page.
    ///
    /// Example: LDX $80,Y
    ZeroPageY,

    /// Signed 8-bit offset for branch instructions.
    Relative,

    /// Full 16-bit address.
    ///
    /// Example: JMP $1234
    Absolute,

    /// 16-bit address indexed by X register.
    AbsoluteX,

    /// 16-bit address indexed by Y register.
    AbsoluteY,

    /// Indirect jump through 16-bit pointer. Only used by JMP.
    Indirect,

    /// Indexed indirect: (ZP + X) then dereference.
    ///
    /// Example: LDA ($40,X)
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y.
    ///
    /// Example: LDA ($40),Y
    IndirectY,
}

impl AddressingMode {
    /// Number of operand bytes following the opcode.
    pub const fn operand_bytes(self) -> u8 {
        match self {
            AddressingMode::Implied => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Relative
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }
}

/// Kind of memory access an instruction performs at the effective address.
///
/// Selects the cycle policy of the indexed modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Loads, logic, arithmetic, compares: the page-crossing cycle is only
    /// spent when the index addition carries into the high byte.
    Read,

    /// Stores and read-modify-write: the fix-up cycle is always spent.
    Write,
}

/// Returns true if `a` and `b` lie on different 256-byte pages.
pub(crate) fn page_crossed(a: u16, b: u16) -> bool {
    (a ^ b) & 0xFF00 != 0
}

impl CPU {
    /// Resolves the effective address of a memory operand.
    ///
    /// Advances PC past the operand bytes and charges the mode's cycles on
    /// `bus`. The access itself (the read or write at the returned address) is
    /// left to the caller.
    ///
    /// `Indirect` returns the jump target read through the pointer. When the
    /// pointer sits at the end of a page (`$xxFF`), the high byte is fetched
    /// from the start of the same page, as on NMOS hardware.
    ///
    /// `Immediate` and `Relative` resolve to the address of their operand byte
    /// in the instruction stream. `Implied` consumes nothing and resolves to PC.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpu6502::{Access, AddressingMode, Bus, FlatMemory, CPU};
    ///
    /// let mut memory = FlatMemory::new();
    /// let mut cpu = CPU::reset_to(&mut memory, 0x8000);
    /// memory[0x8000] = 0x80;
    /// cpu.set_x(0xFF);
    ///
    /// let mut bus = Bus::new(&mut memory, 0);
    /// let addr = cpu.effective_address(AddressingMode::ZeroPageX, Access::Read, &mut bus);
    /// assert_eq!(addr, 0x007F); // wrapped within zero page
    /// assert_eq!(bus.remaining(), -2);
    /// ```
    pub fn effective_address<M: MemoryBus>(
        &mut self,
        mode: AddressingMode,
        access: Access,
        bus: &mut Bus<M>,
    ) -> u16 {
        match mode {
            AddressingMode::ZeroPage => self.fetch_byte(bus) as u16,
            AddressingMode::ZeroPageX => self.zero_page_indexed(self.x, bus),
            AddressingMode::ZeroPageY => self.zero_page_indexed(self.y, bus),
            AddressingMode::Absolute => self.fetch_word(bus),
            AddressingMode::AbsoluteX => self.absolute_indexed(self.x, access, bus),
            AddressingMode::AbsoluteY => self.absolute_indexed(self.y, access, bus),
            AddressingMode::Indirect => {
                let pointer = self.fetch_word(bus);
                let low = bus.read_byte(pointer) as u16;
                let high_addr = (pointer & 0xFF00) | (pointer.wrapping_add(1) & 0x00FF);
                let high = bus.read_byte(high_addr) as u16;
                (high << 8) | low
            }
            AddressingMode::IndirectX => {
                let pointer = self.fetch_byte(bus).wrapping_add(self.x);
                bus.tick();
                read_zero_page_word(pointer, bus)
            }
            AddressingMode::IndirectY => {
                let pointer = self.fetch_byte(bus);
                let base = read_zero_page_word(pointer, bus);
                let addr = base.wrapping_add(self.y as u16);
                if access == Access::Write || page_crossed(base, addr) {
                    bus.tick();
                }
                addr
            }
            AddressingMode::Immediate | AddressingMode::Relative => {
                let addr = self.pc;
                self.pc = self.pc.wrapping_add(1);
                addr
            }
            AddressingMode::Implied => self.pc,
        }
    }

    /// Reads the value operand of a load, logic, arithmetic or compare instruction.
    ///
    /// Resolved with the `Access::Read` policy, so indexed modes only pay the
    /// page-crossing cycle when they need it.
    pub(crate) fn read_operand<M: MemoryBus>(
        &mut self,
        mode: AddressingMode,
        bus: &mut Bus<M>,
    ) -> u8 {
        let addr = self.effective_address(mode, Access::Read, bus);
        bus.read_byte(addr)
    }

    fn zero_page_indexed<M: MemoryBus>(&mut self, index: u8, bus: &mut Bus<M>) -> u16 {
        let addr = self.fetch_byte(bus).wrapping_add(index);
        bus.tick();
        addr as u16
    }

    fn absolute_indexed<M: MemoryBus>(&mut self, index: u8, access: Access, bus: &mut Bus<M>) -> u16 {
        let base = self.fetch_word(bus);
        let addr = base.wrapping_add(index as u16);
        if access == Access::Write || page_crossed(base, addr) {
            bus.tick();
        }
        addr
    }
}

/// Reads a pointer stored in zero page; the high byte wraps to $00 after $FF.
fn read_zero_page_word<M: MemoryBus>(pointer: u8, bus: &mut Bus<M>) -> u16 {
    let low = bus.read_byte(pointer as u16) as u16;
    let high = bus.read_byte(pointer.wrapping_add(1) as u16) as u16;
    (high << 8) | low
}
