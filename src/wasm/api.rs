//! WASM API for the 6502 interpreter.
//!
//! Provides JavaScript-callable interfaces for CPU control, program loading
//! and state inspection.

use crate::{load_program, FlatMemory, MemoryBus, CPU, RESET_VECTOR};
use wasm_bindgen::prelude::*;

/// JavaScript-compatible error wrapper
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct JsError {
    message: String,
}

#[wasm_bindgen]
impl JsError {
    #[wasm_bindgen(constructor)]
    pub fn new(message: &str) -> JsError {
        JsError {
            message: message.to_string(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

/// Main emulator interface for JavaScript
#[wasm_bindgen]
pub struct Emulator6502 {
    cpu: CPU,
    memory: FlatMemory,
    total_cycles: f64,
}

#[wasm_bindgen]
impl Emulator6502 {
    /// Create an emulator with zeroed memory and PC at the reset vector
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        let mut memory = FlatMemory::new();
        let cpu = CPU::reset(&mut memory);

        Emulator6502 {
            cpu,
            memory,
            total_cycles: 0.0,
        }
    }

    /// Zero memory and reset the registers with PC at `start_address`
    pub fn reset(&mut self, start_address: Option<u16>) {
        self.cpu = CPU::reset_to(&mut self.memory, start_address.unwrap_or(RESET_VECTOR));
        self.total_cycles = 0.0;
    }

    /// Execute whole instructions for at least `budget` cycles and return
    /// the cycles actually used
    pub fn execute(&mut self, budget: i32) -> Result<i32, JsError> {
        let used = self
            .cpu
            .execute(budget, &mut self.memory)
            .map_err(|e| JsError::new(&e.to_string()))?;
        self.total_cycles += used as f64;
        Ok(used)
    }

    /// Execute a single instruction and return its cycle count
    pub fn step(&mut self) -> Result<i32, JsError> {
        let used = self
            .cpu
            .step(&mut self.memory)
            .map_err(|e| JsError::new(&e.to_string()))?;
        self.total_cycles += used as f64;
        Ok(used)
    }

    /// Load a program image (2-byte little-endian load address followed by
    /// code), point PC at it and return the load address
    pub fn load_program(&mut self, program: &[u8]) -> u16 {
        let address = load_program(program, &mut self.memory);
        if program.len() > 2 {
            self.cpu.set_pc(address);
        }
        address
    }

    // Register getters
    #[wasm_bindgen(getter)]
    pub fn a(&self) -> u8 {
        self.cpu.a()
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> u8 {
        self.cpu.x()
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> u8 {
        self.cpu.y()
    }

    #[wasm_bindgen(getter)]
    pub fn pc(&self) -> u16 {
        self.cpu.pc()
    }

    #[wasm_bindgen(getter)]
    pub fn sp(&self) -> u8 {
        self.cpu.sp()
    }

    #[wasm_bindgen(getter)]
    pub fn status(&self) -> u8 {
        self.cpu.status().bits()
    }

    #[wasm_bindgen(getter)]
    pub fn cycles(&self) -> f64 {
        self.total_cycles
    }

    // Flag getters
    #[wasm_bindgen(getter)]
    pub fn flag_n(&self) -> bool {
        self.cpu.flag_n()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_v(&self) -> bool {
        self.cpu.flag_v()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_b(&self) -> bool {
        self.cpu.flag_b()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_d(&self) -> bool {
        self.cpu.flag_d()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_i(&self) -> bool {
        self.cpu.flag_i()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_z(&self) -> bool {
        self.cpu.flag_z()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_c(&self) -> bool {
        self.cpu.flag_c()
    }

    /// Set the program counter
    pub fn set_pc(&mut self, addr: u16) {
        self.cpu.set_pc(addr);
    }

    // Memory access methods

    /// Read a single byte from memory
    pub fn read_memory(&self, addr: u16) -> u8 {
        self.memory.read(addr)
    }

    /// Write a single byte to memory
    pub fn write_memory(&mut self, addr: u16, value: u8) {
        self.memory.write(addr, value);
    }

    /// Copy a 256-byte page of memory into a typed array (for efficient display)
    pub fn memory_page(&self, page: u8) -> js_sys::Uint8Array {
        js_sys::Uint8Array::from(self.memory.page(page))
    }
}

impl Default for Emulator6502 {
    fn default() -> Self {
        Self::new()
    }
}
