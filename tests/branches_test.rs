//! Tests for the conditional branch instructions.
//!
//! A branch costs 2 cycles when not taken, 3 when taken and 5 when the target
//! lies on a different page than the instruction following the branch.

use cpu6502::{FlatMemory, CPU};

fn setup_cpu_at(start: u16) -> (CPU, FlatMemory) {
    let mut memory = FlatMemory::new();
    let cpu = CPU::reset_to(&mut memory, start);
    (cpu, memory)
}

/// Runs `opcode offset` at `start` and returns the CPU and cycles spent.
fn branch(opcode: u8, offset: u8, start: u16, arrange: impl Fn(&mut CPU)) -> (CPU, i32) {
    let (mut cpu, mut memory) = setup_cpu_at(start);
    arrange(&mut cpu);
    memory[start] = opcode;
    memory[start.wrapping_add(1)] = offset;

    let cycles = cpu.execute(1, &mut memory).unwrap();
    (cpu, cycles)
}

// ========== Taken / Not Taken ==========

#[test]
fn test_beq_taken_forward() {
    let (cpu, cycles) = branch(0xF0, 0x01, 0xF000, |cpu| cpu.set_flag_z(true));
    assert_eq!(cpu.pc(), 0xF003);
    assert_eq!(cycles, 3);
}

#[test]
fn test_beq_not_taken() {
    let (cpu, cycles) = branch(0xF0, 0x01, 0xF000, |cpu| cpu.set_flag_z(false));
    assert_eq!(cpu.pc(), 0xF002);
    assert_eq!(cycles, 2);
}

#[test]
fn test_beq_taken_across_page_forward() {
    let (cpu, cycles) = branch(0xF0, 0x01, 0xF0FD, |cpu| cpu.set_flag_z(true));
    assert_eq!(cpu.pc(), 0xF100);
    assert_eq!(cycles, 5);
}

#[test]
fn test_beq_taken_backward() {
    let (cpu, cycles) = branch(0xF0, 0xFD, 0xF005, |cpu| cpu.set_flag_z(true));
    assert_eq!(cpu.pc(), 0xF004);
    assert_eq!(cycles, 3);
}

#[test]
fn test_beq_taken_backward_across_page() {
    let (cpu, cycles) = branch(0xF0, 0xFD, 0xF000, |cpu| cpu.set_flag_z(true));
    assert_eq!(cpu.pc(), 0xEFFF);
    assert_eq!(cycles, 5);
}

#[test]
fn test_branch_crossing_is_measured_from_next_instruction() {
    // Branch at 0xF0FE: next instruction is 0xF100, target 0xF101 stays on its page
    let (cpu, cycles) = branch(0xF0, 0x01, 0xF0FE, |cpu| cpu.set_flag_z(true));
    assert_eq!(cpu.pc(), 0xF101);
    assert_eq!(cycles, 3);
}

#[test]
fn test_branch_offset_zero_taken() {
    let (cpu, cycles) = branch(0xF0, 0x00, 0xF000, |cpu| cpu.set_flag_z(true));
    assert_eq!(cpu.pc(), 0xF002);
    assert_eq!(cycles, 3);
}

#[test]
fn test_branch_leaves_flags_alone() {
    let (cpu, _) = branch(0xF0, 0x10, 0xF000, |cpu| {
        cpu.set_flag_z(true);
        cpu.set_flag_c(true);
        cpu.set_flag_n(true);
    });
    assert!(cpu.flag_z());
    assert!(cpu.flag_c());
    assert!(cpu.flag_n());
}

// ========== Every Condition ==========

type FlagSetter = fn(&mut CPU, bool);

#[test]
fn test_every_branch_condition() {
    let cases: [(u8, FlagSetter, bool); 8] = [
        (0x90, CPU::set_flag_c, false), // BCC
        (0xB0, CPU::set_flag_c, true),  // BCS
        (0xF0, CPU::set_flag_z, true),  // BEQ
        (0xD0, CPU::set_flag_z, false), // BNE
        (0x30, CPU::set_flag_n, true),  // BMI
        (0x10, CPU::set_flag_n, false), // BPL
        (0x70, CPU::set_flag_v, true),  // BVS
        (0x50, CPU::set_flag_v, false), // BVC
    ];

    for (opcode, set_flag, take_when) in cases {
        let (cpu, cycles) = branch(opcode, 0x10, 0x8000, |cpu| set_flag(cpu, take_when));
        assert_eq!(cpu.pc(), 0x8012, "opcode {:02X} should branch", opcode);
        assert_eq!(cycles, 3);

        let (cpu, cycles) = branch(opcode, 0x10, 0x8000, |cpu| set_flag(cpu, !take_when));
        assert_eq!(cpu.pc(), 0x8002, "opcode {:02X} should fall through", opcode);
        assert_eq!(cycles, 2);
    }
}

#[test]
fn test_countdown_loop() {
    // LDX #$03; loop: DEX; BNE loop
    let (mut cpu, mut memory) = setup_cpu_at(0x8000);
    memory[0x8000] = 0xA2;
    memory[0x8001] = 0x03;
    memory[0x8002] = 0xCA;
    memory[0x8003] = 0xD0;
    memory[0x8004] = 0xFD;

    // LDX 2, then (DEX 2 + BNE 3) twice, then DEX 2 + BNE 2
    let cycles = cpu.execute(2 + 5 + 5 + 4, &mut memory).unwrap();

    assert_eq!(cycles, 16);
    assert_eq!(cpu.x(), 0x00);
    assert_eq!(cpu.pc(), 0x8005);
}
