//! WebAssembly bindings for the cpu6502 interpreter.
//!
//! This module provides a JavaScript-callable wrapper around a `CPU` and its
//! `FlatMemory`, enabling browser-based execution of 6502 machine code.

pub mod api;

pub use api::Emulator6502;
