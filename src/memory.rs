//! # Memory Bus Abstraction
//!
//! This module provides the `MemoryBus` trait that decouples the CPU from the
//! memory it executes against, and `FlatMemory`, the plain 64KB array used by
//! tests and simple hosts.
//!
//! ## Design Principles
//!
//! The MemoryBus trait follows 6502 hardware behavior:
//! - No bus errors - reads/writes always succeed
//! - Every 16-bit address is valid; there is nothing to bounds-check
//! - Cycle accounting is not the memory's concern (see `bus::Bus`)

use std::fmt;
use std::ops::{Index, IndexMut};

/// Number of addressable bytes (64KB).
pub const MEMORY_SIZE: usize = 0x1_0000;

/// Memory bus trait for CPU to read/write bytes.
///
/// # Design
///
/// - `read(&self)`: Immutable reference allows shared reads
/// - `write(&mut self)`: Mutable reference makes side effects explicit
/// - `clear(&mut self)`: Zero-fill, called by `CPU::reset`
/// - No error types: 6502 hardware has no bus error mechanism
///
/// # Examples
///
/// ```
/// use cpu6502::{MemoryBus, FlatMemory};
///
/// let mut mem = FlatMemory::new();
///
/// mem.write(0x1234, 0x42);
/// assert_eq!(mem.read(0x1234), 0x42);
///
/// mem.clear();
/// assert_eq!(mem.read(0x1234), 0x00);
/// ```
///
/// ## Implementing Custom Memory
///
/// ```
/// use cpu6502::MemoryBus;
///
/// struct RomRamMemory {
///     ram: [u8; 0x8000],  // 32KB RAM (0x0000-0x7FFF)
///     rom: [u8; 0x8000],  // 32KB ROM (0x8000-0xFFFF)
/// }
///
/// impl MemoryBus for RomRamMemory {
///     fn read(&self, addr: u16) -> u8 {
///         if addr < 0x8000 {
///             self.ram[addr as usize]
///         } else {
///             self.rom[(addr - 0x8000) as usize]
///         }
///     }
///
///     fn write(&mut self, addr: u16, value: u8) {
///         if addr < 0x8000 {
///             self.ram[addr as usize] = value;
///         }
///         // Writes to ROM (0x8000+) are silently ignored
///     }
///
///     fn clear(&mut self) {
///         // Only RAM is volatile
///         self.ram = [0; 0x8000];
///     }
/// }
/// ```
pub trait MemoryBus {
    /// Reads a byte from the specified 16-bit address.
    ///
    /// This method must never panic.
    fn read(&self, addr: u16) -> u8;

    /// Writes a byte to the specified 16-bit address.
    ///
    /// This method must never panic. Read-only regions may ignore the write.
    fn write(&mut self, addr: u16, value: u8);

    /// Zero-fills the memory.
    ///
    /// The default implementation writes `0x00` to every address through
    /// `write`, so read-only regions keep their contents.
    fn clear(&mut self) {
        for addr in 0..=u16::MAX {
            self.write(addr, 0x00);
        }
    }
}

/// Simple 64KB flat memory implementation.
///
/// All 65536 addresses (0x0000-0xFFFF) map to a single contiguous RAM array
/// initialized to 0x00. Besides the `MemoryBus` methods it can be indexed
/// directly with a `u16`, which keeps test setup short.
///
/// `FlatMemory` is `Clone + PartialEq`, so a copy taken before an `execute`
/// call can be diffed against the memory afterwards.
///
/// # Examples
///
/// ```
/// use cpu6502::{CPU, FlatMemory};
///
/// let mut memory = FlatMemory::new();
/// let mut cpu = CPU::reset_to(&mut memory, 0x8000);
///
/// memory[0x8000] = 0xA9; // LDA #$42
/// memory[0x8001] = 0x42;
///
/// let cycles = cpu.execute(2, &mut memory).unwrap();
/// assert_eq!(cycles, 2);
/// assert_eq!(cpu.a(), 0x42);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct FlatMemory {
    /// 64KB contiguous memory array
    data: Box<[u8; MEMORY_SIZE]>,
}

impl FlatMemory {
    /// Creates a new FlatMemory instance with all bytes initialized to zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpu6502::{FlatMemory, MemoryBus};
    ///
    /// let mem = FlatMemory::new();
    /// assert_eq!(mem.read(0x0000), 0x00);
    /// assert_eq!(mem.read(0xFFFF), 0x00);
    /// ```
    pub fn new() -> Self {
        Self {
            data: Box::new([0; MEMORY_SIZE]),
        }
    }

    /// Returns the whole address space as a byte slice.
    pub fn as_slice(&self) -> &[u8] {
        &self.data[..]
    }

    /// Returns the 256 bytes of the given page.
    pub fn page(&self, page: u8) -> &[u8] {
        let start = (page as usize) << 8;
        &self.data[start..start + 0x100]
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FlatMemory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let used = self.data.iter().filter(|&&byte| byte != 0).count();
        f.debug_struct("FlatMemory")
            .field("size", &MEMORY_SIZE)
            .field("non_zero_bytes", &used)
            .finish()
    }
}

impl MemoryBus for FlatMemory {
    fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }

    fn clear(&mut self) {
        self.data.fill(0);
    }
}

impl Index<u16> for FlatMemory {
    type Output = u8;

    fn index(&self, addr: u16) -> &u8 {
        &self.data[addr as usize]
    }
}

impl IndexMut<u16> for FlatMemory {
    fn index_mut(&mut self, addr: u16) -> &mut u8 {
        &mut self.data[addr as usize]
    }
}
