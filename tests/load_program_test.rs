//! Tests for loading a program image and running it in cycle slices.

use cpu6502::{load_program, FlatMemory, CPU};

/// LDA #$FF; STA $90; STA $8000; EOR #$CC; JMP $1000, loaded at $1000.
const TEST_PROGRAM: [u8; 14] = [
    0x00, 0x10, 0xA9, 0xFF, 0x85, 0x90, 0x8D, 0x00, 0x80, 0x49, 0xCC, 0x4C, 0x00, 0x10,
];

#[test]
fn test_load_program_into_memory() {
    let mut memory = FlatMemory::new();
    let _cpu = CPU::reset(&mut memory);

    let start = load_program(&TEST_PROGRAM, &mut memory);

    assert_eq!(start, 0x1000);
    assert_eq!(memory[0x0FFF], 0x00);
    assert_eq!(memory[0x1000], 0xA9);
    assert_eq!(memory[0x1001], 0xFF);
    assert_eq!(memory[0x1002], 0x85);
    assert_eq!(memory[0x1009], 0x4C);
    assert_eq!(memory[0x100A], 0x00);
    assert_eq!(memory[0x100B], 0x10);
    assert_eq!(memory[0x100C], 0x00);
}

#[test]
fn test_load_program_and_execute() {
    let mut memory = FlatMemory::new();
    let mut cpu = CPU::reset(&mut memory);

    cpu.set_pc(load_program(&TEST_PROGRAM, &mut memory));

    let mut clock: i32 = 10_000;
    while clock > 0 {
        clock -= cpu.execute(20, &mut memory).unwrap();
    }

    assert_eq!(memory[0x0090], 0xFF);
    assert_eq!(memory[0x8000], 0xFF);
    assert!(clock <= 0);
}

#[test]
fn test_program_loop_takes_expected_cycles_per_pass() {
    // LDA 2 + STA zp 3 + STA abs 4 + EOR 2 + JMP 3
    let mut memory = FlatMemory::new();
    let mut cpu = CPU::reset(&mut memory);
    cpu.set_pc(load_program(&TEST_PROGRAM, &mut memory));

    let cycles = cpu.execute(14, &mut memory).unwrap();

    assert_eq!(cycles, 14);
    assert_eq!(cpu.pc(), 0x1000);
    assert_eq!(cpu.a(), 0xFF ^ 0xCC);
}

#[test]
fn test_image_without_body_is_ignored() {
    let mut memory = FlatMemory::new();
    let before = memory.clone();

    let start = load_program(&[0x00, 0x10], &mut memory);

    assert_eq!(start, 0);
    assert!(memory == before);
}
