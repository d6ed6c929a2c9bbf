//! Tests for the load instructions (LDA, LDX, LDY).
//!
//! Tests cover:
//! - Every addressing mode of each instruction
//! - Z and N updates, with C, I, D, B and V left alone
//! - Cycle counts including page crossing penalties
//! - Zero page index wraparound
//!
//! The register under test is passed as an accessor function so that one
//! helper covers LDA, LDX and LDY.

use cpu6502::{FlatMemory, CPU};

type Getter = fn(&CPU) -> u8;
type Setter = fn(&mut CPU, u8);

/// Helper function to create a CPU with PC at the reset vector (0xFFFC)
fn setup_cpu() -> (CPU, FlatMemory) {
    let mut memory = FlatMemory::new();
    let cpu = CPU::reset(&mut memory);
    (cpu, memory)
}

/// Asserts that a load left C, I, D, B and V as they were.
fn assert_unmodified_flags(cpu: &CPU, before: &CPU) {
    assert_eq!(cpu.flag_c(), before.flag_c());
    assert_eq!(cpu.flag_i(), before.flag_i());
    assert_eq!(cpu.flag_d(), before.flag_d());
    assert_eq!(cpu.flag_b(), before.flag_b());
    assert_eq!(cpu.flag_v(), before.flag_v());
}

fn load_immediate(opcode: u8, register: Getter) {
    let (mut cpu, mut memory) = setup_cpu();
    memory[0xFFFC] = opcode;
    memory[0xFFFD] = 0x84;
    let before = cpu;

    let cycles = cpu.execute(2, &mut memory).unwrap();

    assert_eq!(register(&cpu), 0x84);
    assert_eq!(cycles, 2);
    assert!(!cpu.flag_z());
    assert!(cpu.flag_n());
    assert_unmodified_flags(&cpu, &before);
}

fn load_zero_page(opcode: u8, register: Getter) {
    let (mut cpu, mut memory) = setup_cpu();
    cpu.set_flag_z(true);
    cpu.set_flag_n(true);
    memory[0xFFFC] = opcode;
    memory[0xFFFD] = 0x42;
    memory[0x0042] = 0x37;
    let before = cpu;

    let cycles = cpu.execute(3, &mut memory).unwrap();

    assert_eq!(register(&cpu), 0x37);
    assert_eq!(cycles, 3);
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
    assert_unmodified_flags(&cpu, &before);
}

fn load_zero_page_offset(opcode: u8, register: Getter, set_offset: Setter) {
    let (mut cpu, mut memory) = setup_cpu();
    cpu.set_flag_z(true);
    cpu.set_flag_n(true);
    set_offset(&mut cpu, 5);
    memory[0xFFFC] = opcode;
    memory[0xFFFD] = 0x42;
    memory[0x0047] = 0x37;
    let before = cpu;

    let cycles = cpu.execute(4, &mut memory).unwrap();

    assert_eq!(register(&cpu), 0x37);
    assert_eq!(cycles, 4);
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
    assert_unmodified_flags(&cpu, &before);
}

fn load_absolute(opcode: u8, register: Getter) {
    let (mut cpu, mut memory) = setup_cpu();
    cpu.set_flag_z(true);
    cpu.set_flag_n(true);
    memory[0xFFFC] = opcode;
    memory[0xFFFD] = 0x80;
    memory[0xFFFE] = 0x44; // 0x4480
    memory[0x4480] = 0x37;
    let before = cpu;

    let cycles = cpu.execute(4, &mut memory).unwrap();

    assert_eq!(register(&cpu), 0x37);
    assert_eq!(cycles, 4);
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
    assert_unmodified_flags(&cpu, &before);
}

fn load_absolute_offset(opcode: u8, register: Getter, set_offset: Setter) {
    let (mut cpu, mut memory) = setup_cpu();
    cpu.set_flag_z(true);
    cpu.set_flag_n(true);
    set_offset(&mut cpu, 0x01);
    memory[0xFFFC] = opcode;
    memory[0xFFFD] = 0x02;
    memory[0xFFFE] = 0x44; // 0x4402
    memory[0x4403] = 0x37;
    let before = cpu;

    let cycles = cpu.execute(4, &mut memory).unwrap();

    assert_eq!(register(&cpu), 0x37);
    assert_eq!(cycles, 4);
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
    assert_unmodified_flags(&cpu, &before);
}

fn load_absolute_offset_page_cross(opcode: u8, register: Getter, set_offset: Setter) {
    let (mut cpu, mut memory) = setup_cpu();
    cpu.set_flag_z(true);
    cpu.set_flag_n(true);
    set_offset(&mut cpu, 0xFF);
    memory[0xFFFC] = opcode;
    memory[0xFFFD] = 0x02;
    memory[0xFFFE] = 0x44; // 0x4402
    memory[0x4501] = 0x37; // 0x4402 + 0xFF crosses page boundary
    let before = cpu;

    let cycles = cpu.execute(5, &mut memory).unwrap();

    assert_eq!(register(&cpu), 0x37);
    assert_eq!(cycles, 5);
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
    assert_unmodified_flags(&cpu, &before);
}

// ========== Execute Loop Basics ==========

#[test]
fn test_execute_zero_cycles_does_nothing() {
    let (mut cpu, mut memory) = setup_cpu();
    memory[0xFFFC] = 0xA9;
    let before = cpu;

    assert_eq!(cpu.execute(0, &mut memory).unwrap(), 0);
    assert_eq!(cpu, before);
}

#[test]
fn test_execute_runs_whole_instruction_past_budget() {
    let (mut cpu, mut memory) = setup_cpu();
    memory[0xFFFC] = 0xA9; // LDA #$84
    memory[0xFFFD] = 0x84;

    assert_eq!(cpu.execute(1, &mut memory).unwrap(), 2);
    assert_eq!(cpu.a(), 0x84);
}

// ========== Immediate ==========

#[test]
fn test_lda_immediate() {
    load_immediate(0xA9, CPU::a);
}

#[test]
fn test_ldx_immediate() {
    load_immediate(0xA2, CPU::x);
}

#[test]
fn test_ldy_immediate() {
    load_immediate(0xA0, CPU::y);
}

#[test]
fn test_lda_immediate_sets_zero_flag() {
    let (mut cpu, mut memory) = setup_cpu();
    cpu.set_a(0x44);
    memory[0xFFFC] = 0xA9;
    memory[0xFFFD] = 0x00;
    let before = cpu;

    cpu.execute(2, &mut memory).unwrap();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());
    assert!(!cpu.flag_n());
    assert_unmodified_flags(&cpu, &before);
}

#[test]
fn test_load_preserves_other_flags_when_set() {
    let (mut cpu, mut memory) = setup_cpu();
    cpu.set_flag_c(true);
    cpu.set_flag_i(true);
    cpu.set_flag_d(true);
    cpu.set_flag_b(true);
    cpu.set_flag_v(true);
    memory[0xFFFC] = 0xA2; // LDX #$00
    memory[0xFFFD] = 0x00;
    let before = cpu;

    cpu.execute(2, &mut memory).unwrap();

    assert!(cpu.flag_z());
    assert_unmodified_flags(&cpu, &before);
}

// ========== Zero Page ==========

#[test]
fn test_lda_zero_page() {
    load_zero_page(0xA5, CPU::a);
}

#[test]
fn test_ldx_zero_page() {
    load_zero_page(0xA6, CPU::x);
}

#[test]
fn test_ldy_zero_page() {
    load_zero_page(0xA4, CPU::y);
}

// ========== Zero Page Indexed ==========

#[test]
fn test_lda_zero_page_x() {
    load_zero_page_offset(0xB5, CPU::a, CPU::set_x);
}

#[test]
fn test_ldx_zero_page_y() {
    load_zero_page_offset(0xB6, CPU::x, CPU::set_y);
}

#[test]
fn test_ldy_zero_page_x() {
    load_zero_page_offset(0xB4, CPU::y, CPU::set_x);
}

#[test]
fn test_lda_zero_page_x_wraps() {
    let (mut cpu, mut memory) = setup_cpu();
    cpu.set_x(0xFF);
    memory[0xFFFC] = 0xB5;
    memory[0xFFFD] = 0x80;
    memory[0x007F] = 0x37;
    memory[0x017F] = 0x99;

    let cycles = cpu.execute(4, &mut memory).unwrap();

    assert_eq!(cpu.a(), 0x37);
    assert_eq!(cycles, 4);
}

// ========== Absolute ==========

#[test]
fn test_lda_absolute() {
    load_absolute(0xAD, CPU::a);
}

#[test]
fn test_ldx_absolute() {
    load_absolute(0xAE, CPU::x);
}

#[test]
fn test_ldy_absolute() {
    load_absolute(0xAC, CPU::y);
}

// ========== Absolute Indexed ==========

#[test]
fn test_lda_absolute_x() {
    load_absolute_offset(0xBD, CPU::a, CPU::set_x);
}

#[test]
fn test_lda_absolute_y() {
    load_absolute_offset(0xB9, CPU::a, CPU::set_y);
}

#[test]
fn test_ldx_absolute_y() {
    load_absolute_offset(0xBE, CPU::x, CPU::set_y);
}

#[test]
fn test_ldy_absolute_x() {
    load_absolute_offset(0xBC, CPU::y, CPU::set_x);
}

#[test]
fn test_lda_absolute_x_page_cross() {
    load_absolute_offset_page_cross(0xBD, CPU::a, CPU::set_x);
}

#[test]
fn test_lda_absolute_y_page_cross() {
    load_absolute_offset_page_cross(0xB9, CPU::a, CPU::set_y);
}

#[test]
fn test_ldx_absolute_y_page_cross() {
    load_absolute_offset_page_cross(0xBE, CPU::x, CPU::set_y);
}

#[test]
fn test_ldy_absolute_x_page_cross() {
    load_absolute_offset_page_cross(0xBC, CPU::y, CPU::set_x);
}

// ========== Indirect ==========

#[test]
fn test_lda_indirect_x() {
    let (mut cpu, mut memory) = setup_cpu();
    cpu.set_flag_z(true);
    cpu.set_flag_n(true);
    cpu.set_x(0x04);
    memory[0xFFFC] = 0xA1;
    memory[0xFFFD] = 0x02;
    memory[0x0006] = 0x00; // 0x02 + 0x04
    memory[0x0007] = 0x80;
    memory[0x8000] = 0x37;
    let before = cpu;

    let cycles = cpu.execute(6, &mut memory).unwrap();

    assert_eq!(cpu.a(), 0x37);
    assert_eq!(cycles, 6);
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
    assert_unmodified_flags(&cpu, &before);
}

#[test]
fn test_lda_indirect_x_pointer_wraps() {
    let (mut cpu, mut memory) = setup_cpu();
    cpu.set_x(0xFF);
    memory[0xFFFC] = 0xA1;
    memory[0xFFFD] = 0x04; // 0x04 + 0xFF = 0x03
    memory[0x0003] = 0x00;
    memory[0x0004] = 0x80;
    memory[0x8000] = 0x37;

    let cycles = cpu.execute(6, &mut memory).unwrap();

    assert_eq!(cpu.a(), 0x37);
    assert_eq!(cycles, 6);
}

#[test]
fn test_lda_indirect_y() {
    let (mut cpu, mut memory) = setup_cpu();
    cpu.set_flag_z(true);
    cpu.set_flag_n(true);
    cpu.set_y(0x04);
    memory[0xFFFC] = 0xB1;
    memory[0xFFFD] = 0x02;
    memory[0x0002] = 0x00;
    memory[0x0003] = 0x80;
    memory[0x8004] = 0x37; // 0x8000 + 0x04
    let before = cpu;

    let cycles = cpu.execute(5, &mut memory).unwrap();

    assert_eq!(cpu.a(), 0x37);
    assert_eq!(cycles, 5);
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
    assert_unmodified_flags(&cpu, &before);
}

#[test]
fn test_lda_indirect_y_page_cross() {
    let (mut cpu, mut memory) = setup_cpu();
    cpu.set_y(0xFF);
    memory[0xFFFC] = 0xB1;
    memory[0xFFFD] = 0x02;
    memory[0x0002] = 0x02;
    memory[0x0003] = 0x80;
    memory[0x8101] = 0x37; // 0x8002 + 0xFF

    let cycles = cpu.execute(6, &mut memory).unwrap();

    assert_eq!(cpu.a(), 0x37);
    assert_eq!(cycles, 6);
}
