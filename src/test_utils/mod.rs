//! Shared test utilities for loading small programs into a `FlatMemory`.
//!
//! Programs are placed at `PROGRAM_ORIGIN` unless a test asks otherwise, and
//! the reset vector is pointed at them so a freshly reset CPU starts on the
//! first byte.

#![allow(dead_code)]

use crate::cpu::core::Cpu;
use crate::memory::FlatMemory;

/// Where `setup` places programs.
pub const PROGRAM_ORIGIN: u16 = 0x8000;

/// Memory with `prg` at `origin` and the reset vector pointing at it.
pub fn program_memory(origin: u16, prg: &[u8]) -> FlatMemory {
    let mut mem = FlatMemory::new();
    mem.load_program(origin, prg)
        .expect("test program must fit in the address space");
    mem.set_reset_vector(origin);
    mem
}

/// Reset CPU with `prg` loaded at `PROGRAM_ORIGIN`.
pub fn setup(prg: &[u8]) -> (Cpu, FlatMemory) {
    setup_at(PROGRAM_ORIGIN, prg)
}

/// Reset CPU with `prg` loaded at `origin`.
pub fn setup_at(origin: u16, prg: &[u8]) -> (Cpu, FlatMemory) {
    let mut mem = program_memory(origin, prg);
    let mut cpu = Cpu::new();
    cpu.reset(&mut mem);
    (cpu, mem)
}
