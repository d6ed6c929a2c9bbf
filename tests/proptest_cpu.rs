//! Property-based tests for CPU invariants.
//!
//! These tests use proptest to verify that CPU operations maintain
//! fundamental invariants across all possible input combinations.

use cpu6502::{FlatMemory, Status, CPU, OPCODE_TABLE};
use proptest::prelude::*;

fn setup_cpu() -> (CPU, FlatMemory) {
    let mut memory = FlatMemory::new();
    let cpu = CPU::reset_to(&mut memory, 0x8000);
    (cpu, memory)
}

fn expected_zn(value: u8) -> (bool, bool) {
    (value == 0, value & 0x80 != 0)
}

proptest! {
    /// Property: loads copy the operand and derive Z/N from it, leaving C/V
    #[test]
    fn prop_load_sets_zero_negative(
        opcode in prop::sample::select(vec![0xA9u8, 0xA2, 0xA0]),
        value in 0u8..=255u8,
        status in 0u8..=255u8,
    ) {
        let (mut cpu, mut memory) = setup_cpu();
        cpu.set_status(Status::from_bits_retain(status));
        memory[0x8000] = opcode;
        memory[0x8001] = value;

        cpu.step(&mut memory).unwrap();

        let loaded = match opcode {
            0xA9 => cpu.a(),
            0xA2 => cpu.x(),
            _ => cpu.y(),
        };
        prop_assert_eq!(loaded, value);
        prop_assert_eq!((cpu.flag_z(), cpu.flag_n()), expected_zn(value));
        prop_assert_eq!(cpu.flag_c(), status & 0x01 != 0);
        prop_assert_eq!(cpu.flag_v(), status & 0x40 != 0);
    }

    /// Property: ADC matches the 9-bit sum and the signed overflow rule
    #[test]
    fn prop_adc_matches_reference(a in 0u8..=255u8, m in 0u8..=255u8, carry in any::<bool>()) {
        let (mut cpu, mut memory) = setup_cpu();
        cpu.set_a(a);
        cpu.set_flag_c(carry);
        memory[0x8000] = 0x69;
        memory[0x8001] = m;

        cpu.step(&mut memory).unwrap();

        let sum = a as u16 + m as u16 + carry as u16;
        let signed = a as i8 as i16 + m as i8 as i16 + carry as i16;
        prop_assert_eq!(cpu.a(), sum as u8);
        prop_assert_eq!(cpu.flag_c(), sum > 0xFF);
        prop_assert_eq!(cpu.flag_v(), !(-128..=127).contains(&signed));
        prop_assert_eq!((cpu.flag_z(), cpu.flag_n()), expected_zn(sum as u8));
    }

    /// Property: SBC matches subtraction with borrow = !C
    #[test]
    fn prop_sbc_matches_reference(a in 0u8..=255u8, m in 0u8..=255u8, carry in any::<bool>()) {
        let (mut cpu, mut memory) = setup_cpu();
        cpu.set_a(a);
        cpu.set_flag_c(carry);
        memory[0x8000] = 0xE9;
        memory[0x8001] = m;

        cpu.step(&mut memory).unwrap();

        let borrow = !carry as i16;
        let difference = a as i16 - m as i16 - borrow;
        let signed = a as i8 as i16 - m as i8 as i16 - borrow;
        prop_assert_eq!(cpu.a(), difference as u8);
        prop_assert_eq!(cpu.flag_c(), difference >= 0);
        prop_assert_eq!(cpu.flag_v(), !(-128..=127).contains(&signed));
    }

    /// Property: CMP sets C for A >= M and Z for A == M, leaving A alone
    #[test]
    fn prop_cmp_ordering(a in 0u8..=255u8, m in 0u8..=255u8) {
        let (mut cpu, mut memory) = setup_cpu();
        cpu.set_a(a);
        memory[0x8000] = 0xC9;
        memory[0x8001] = m;

        cpu.step(&mut memory).unwrap();

        prop_assert_eq!(cpu.a(), a);
        prop_assert_eq!(cpu.flag_c(), a >= m);
        prop_assert_eq!(cpu.flag_z(), a == m);
        prop_assert_eq!(cpu.flag_n(), a.wrapping_sub(m) & 0x80 != 0);
    }

    /// Property: PHA followed by PLA restores A and SP for any SP
    #[test]
    fn prop_push_pull_round_trip(value in 0u8..=255u8, sp in 0u8..=255u8) {
        let (mut cpu, mut memory) = setup_cpu();
        cpu.set_a(value);
        cpu.set_sp(sp);
        memory[0x8000] = 0x48; // PHA
        memory[0x8001] = 0xA9; // LDA #$00
        memory[0x8002] = 0x00;
        memory[0x8003] = 0x68; // PLA

        let cycles = cpu.execute(9, &mut memory).unwrap();

        prop_assert_eq!(cycles, 9);
        prop_assert_eq!(cpu.a(), value);
        prop_assert_eq!(cpu.sp(), sp);
        prop_assert_eq!(memory[0x0100 | sp as u16], value);
    }

    /// Property: PHP/PLP move the status byte verbatim
    #[test]
    fn prop_status_round_trip(status in 0u8..=255u8) {
        let (mut cpu, mut memory) = setup_cpu();
        cpu.set_status(Status::from_bits_retain(status));
        memory[0x8000] = 0x08; // PHP
        memory[0x8001] = 0x28; // PLP

        cpu.execute(7, &mut memory).unwrap();

        prop_assert_eq!(memory[0x01FF], status);
        prop_assert_eq!(cpu.status().bits(), status);
    }

    /// Property: execute never uses fewer cycles than its budget and
    /// overruns by less than one instruction
    #[test]
    fn prop_execute_budget_bounds(budget in 1i32..200) {
        let (mut cpu, mut memory) = setup_cpu();
        // INC $10 (5) / NOP (2) / JMP $8000 (3)
        let program = [0xE6, 0x10, 0xEA, 0x4C, 0x00, 0x80];
        for (i, &byte) in program.iter().enumerate() {
            memory[0x8000 + i as u16] = byte;
        }

        let used = cpu.execute(budget, &mut memory).unwrap();

        prop_assert!(used >= budget);
        prop_assert!(used < budget + 5);
    }

    /// Property: any supported opcode either runs or is rejected, never panics,
    /// and unsupported opcodes report themselves
    #[test]
    fn prop_any_opcode_is_handled(opcode in 0u8..=255u8, operand in 0u8..=255u8) {
        let (mut cpu, mut memory) = setup_cpu();
        memory[0x8000] = opcode;
        memory[0x8001] = operand;
        memory[0x8002] = operand;

        let result = cpu.step(&mut memory);

        match OPCODE_TABLE[opcode as usize] {
            Some(metadata) => {
                let cycles = result.unwrap();
                prop_assert!(cycles >= metadata.base_cycles as i32);
                prop_assert!(cycles <= 7);
            }
            None => {
                prop_assert!(result.is_err());
            }
        }
    }
}
