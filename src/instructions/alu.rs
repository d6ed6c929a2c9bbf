//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic and logical operations:
//! - ADC: Add with Carry
//! - SBC: Subtract with Carry
//! - AND: Logical AND
//! - ORA: Logical Inclusive OR
//! - EOR: Exclusive OR
//! - BIT: Bit Test
//!
//! Arithmetic is always binary. The Decimal flag can be set and cleared but
//! does not change how ADC and SBC compute their result.

use crate::{AddressingMode, Bus, MemoryBus, Status, CPU};

/// Executes the ADC (Add with Carry) instruction.
///
/// A = A + M + C. Updates C, V, Z and N:
/// - C: set if the unsigned sum exceeds 0xFF
/// - V: set if both operands had the same sign and the result's sign differs
pub(crate) fn execute_adc<M: MemoryBus>(cpu: &mut CPU, mode: AddressingMode, bus: &mut Bus<M>) {
    let value = cpu.read_operand(mode, bus);
    add_with_carry(cpu, value);
}

/// Executes the SBC (Subtract with Carry) instruction.
///
/// A = A - M - (1 - C). Implemented as ADC of the operand's one's complement,
/// so C ends up set when no borrow occurred and V follows the same signed
/// overflow rule as ADC.
pub(crate) fn execute_sbc<M: MemoryBus>(cpu: &mut CPU, mode: AddressingMode, bus: &mut Bus<M>) {
    let value = cpu.read_operand(mode, bus);
    add_with_carry(cpu, !value);
}

fn add_with_carry(cpu: &mut CPU, value: u8) {
    let a = cpu.a;
    let sum = a as u16 + value as u16 + cpu.status.carry() as u16;
    let result = sum as u8;

    cpu.status.set(Status::CARRY, sum > 0xFF);
    cpu.status
        .set(Status::OVERFLOW, (a ^ result) & (value ^ result) & 0x80 != 0);
    cpu.a = result;
    cpu.status.set_zero_negative(result);
}

/// Executes the AND (Logical AND) instruction.
///
/// A = A & M. Updates Z and N flags.
pub(crate) fn execute_and<M: MemoryBus>(cpu: &mut CPU, mode: AddressingMode, bus: &mut Bus<M>) {
    let value = cpu.read_operand(mode, bus);
    cpu.a &= value;
    cpu.status.set_zero_negative(cpu.a);
}

/// Executes the ORA (Logical Inclusive OR) instruction.
///
/// A = A | M. Updates Z and N flags.
pub(crate) fn execute_ora<M: MemoryBus>(cpu: &mut CPU, mode: AddressingMode, bus: &mut Bus<M>) {
    let value = cpu.read_operand(mode, bus);
    cpu.a |= value;
    cpu.status.set_zero_negative(cpu.a);
}

/// Executes the EOR (Exclusive OR) instruction.
///
/// A = A ^ M. Updates Z and N flags.
pub(crate) fn execute_eor<M: MemoryBus>(cpu: &mut CPU, mode: AddressingMode, bus: &mut Bus<M>) {
    let value = cpu.read_operand(mode, bus);
    cpu.a ^= value;
    cpu.status.set_zero_negative(cpu.a);
}

/// Executes the BIT (Bit Test) instruction.
///
/// Flags affected:
/// - Z: set if A & M == 0 (the result is discarded)
/// - N: bit 7 of M
/// - V: bit 6 of M
///
/// The accumulator is never modified.
pub(crate) fn execute_bit<M: MemoryBus>(cpu: &mut CPU, mode: AddressingMode, bus: &mut Bus<M>) {
    let value = cpu.read_operand(mode, bus);

    cpu.status.set(Status::ZERO, cpu.a & value == 0);
    cpu.status.set(Status::NEGATIVE, value & 0x80 != 0);
    cpu.status.set(Status::OVERFLOW, value & 0x40 != 0);
}
