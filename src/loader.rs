//! # Program Loader
//!
//! Loads a program image whose first two bytes hold its load address
//! (little-endian), the same layout as a Commodore `.prg` file.

use crate::MemoryBus;
use log::debug;

/// Copies a program image into memory and returns its load address.
///
/// The first two bytes of `program` are the load address; the remaining
/// bytes are written starting there. Addresses wrap from 0xFFFF to 0x0000.
///
/// An image of 2 bytes or fewer carries no code: nothing is written and the
/// returned address is 0.
///
/// # Examples
///
/// ```
/// use cpu6502::{load_program, FlatMemory, CPU};
///
/// let mut memory = FlatMemory::new();
/// let mut cpu = CPU::reset(&mut memory);
///
/// // LDA #$FF; JMP $1000
/// let program = [0x00, 0x10, 0xA9, 0xFF, 0x4C, 0x00, 0x10];
/// let start = load_program(&program, &mut memory);
/// assert_eq!(start, 0x1000);
/// assert_eq!(memory[0x1000], 0xA9);
///
/// cpu.set_pc(start);
/// cpu.execute(5, &mut memory).unwrap();
/// assert_eq!(cpu.a(), 0xFF);
/// ```
pub fn load_program<M: MemoryBus>(program: &[u8], memory: &mut M) -> u16 {
    let (header, body) = match program {
        [low, high, body @ ..] if !body.is_empty() => ([*low, *high], body),
        _ => {
            debug!("program image of {} bytes has no code", program.len());
            return 0;
        }
    };

    let load_address = u16::from_le_bytes(header);
    let mut addr = load_address;
    for &byte in body {
        memory.write(addr, byte);
        addr = addr.wrapping_add(1);
    }

    debug!(
        "loaded {} bytes at ${:04X}",
        body.len(),
        load_address
    );
    load_address
}
