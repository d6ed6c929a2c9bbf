//! # Processor Status Register
//!
//! The 6502 keeps its eight status flags packed into a single byte (`NV-BDIZC`).
//! Instructions such as PHP and PLP move that byte to and from the stack
//! verbatim, while everything else reads or writes individual flags.
//!
//! `Status` stores the raw byte and exposes named flag constants through
//! `bitflags`, so both views always agree.

use bitflags::bitflags;
use std::fmt;

bitflags! {
    /// Status register flags.
    ///
    /// Bit layout (NV-BDIZC):
    /// - Bit 7: N (Negative)
    /// - Bit 6: V (Overflow)
    /// - Bit 5: unused
    /// - Bit 4: B (Break)
    /// - Bit 3: D (Decimal)
    /// - Bit 2: I (Interrupt Disable)
    /// - Bit 1: Z (Zero)
    /// - Bit 0: C (Carry)
    ///
    /// # Examples
    ///
    /// ```
    /// use cpu6502::Status;
    ///
    /// let mut status = Status::from_bits_retain(0b1000_0001);
    /// assert!(status.contains(Status::NEGATIVE));
    /// assert!(status.carry());
    ///
    /// status.set(Status::CARRY, false);
    /// assert_eq!(status.bits(), 0b1000_0000);
    /// ```
    #[derive(Default, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Status: u8 {
        const CARRY             = 0b0000_0001;
        const ZERO              = 0b0000_0010;
        const INTERRUPT_DISABLE = 0b0000_0100;
        const DECIMAL           = 0b0000_1000;
        const BREAK             = 0b0001_0000;
        const UNUSED            = 0b0010_0000;
        const OVERFLOW          = 0b0100_0000;
        const NEGATIVE          = 0b1000_0000;
    }
}

impl Status {
    /// Sets Z and N from a value that was just loaded into a register or memory cell.
    ///
    /// - Zero (Z): set if `value == 0`
    /// - Negative (N): set if bit 7 of `value` is set
    ///
    /// No other flag is touched.
    pub fn set_zero_negative(&mut self, value: u8) {
        self.set(Status::ZERO, value == 0);
        self.set(Status::NEGATIVE, value & 0x80 != 0);
    }

    /// Returns true if the Carry flag is set.
    pub fn carry(&self) -> bool {
        self.contains(Status::CARRY)
    }

    /// Returns true if the Zero flag is set.
    pub fn zero(&self) -> bool {
        self.contains(Status::ZERO)
    }

    /// Returns true if the Interrupt Disable flag is set.
    pub fn interrupt_disable(&self) -> bool {
        self.contains(Status::INTERRUPT_DISABLE)
    }

    /// Returns true if the Decimal mode flag is set.
    pub fn decimal(&self) -> bool {
        self.contains(Status::DECIMAL)
    }

    /// Returns true if the Break flag is set.
    pub fn brk(&self) -> bool {
        self.contains(Status::BREAK)
    }

    /// Returns true if the Overflow flag is set.
    pub fn overflow(&self) -> bool {
        self.contains(Status::OVERFLOW)
    }

    /// Returns true if the Negative flag is set.
    pub fn negative(&self) -> bool {
        self.contains(Status::NEGATIVE)
    }
}

impl fmt::Debug for Status {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        const LETTERS: [(char, Status); 8] = [
            ('N', Status::NEGATIVE),
            ('V', Status::OVERFLOW),
            ('-', Status::UNUSED),
            ('B', Status::BREAK),
            ('D', Status::DECIMAL),
            ('I', Status::INTERRUPT_DISABLE),
            ('Z', Status::ZERO),
            ('C', Status::CARRY),
        ];

        let flags: String = LETTERS
            .iter()
            .map(|&(letter, flag)| if self.contains(flag) { letter } else { '.' })
            .collect();
        write!(f, "Status({} ${:02X})", flags, self.bits())
    }
}

impl From<u8> for Status {
    fn from(byte: u8) -> Self {
        Status::from_bits_retain(byte)
    }
}

impl From<Status> for u8 {
    fn from(status: Status) -> Self {
        status.bits()
    }
}
