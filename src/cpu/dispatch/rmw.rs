/*!
rmw.rs - RMW / shift / increment / decrement opcode family handlers

Overview
========
Implements all documented 6502 Read-Modify-Write (RMW) instructions. Memory
forms perform the read -> dummy write (old value) -> write (new value)
sequence inside `execute::rmw_memory`, so memory-mapped devices observe the
same bus traffic as on hardware.

Covered Opcodes
---------------
Shifts / Rotates
  ASL: 0x0A (A), 0x06 (zp), 0x16 (zp,X), 0x0E (abs), 0x1E (abs,X)
  LSR: 0x4A (A), 0x46 (zp), 0x56 (zp,X), 0x4E (abs), 0x5E (abs,X)
  ROL: 0x2A (A), 0x26 (zp), 0x36 (zp,X), 0x2E (abs), 0x3E (abs,X)
  ROR: 0x6A (A), 0x66 (zp), 0x76 (zp,X), 0x6E (abs), 0x7E (abs,X)

Memory Increment / Decrement
  INC: 0xE6 (zp), 0xF6 (zp,X), 0xEE (abs), 0xFE (abs,X)
  DEC: 0xC6 (zp), 0xD6 (zp,X), 0xCE (abs), 0xDE (abs,X)

Timing
======
Indexed forms have a fixed cost (7 for abs,X); `page_crossed` may be raised
by the resolver but the page-cross table holds zero for every RMW opcode.
*/

use crate::cpu::addressing::{AddressingMode, resolve};
use crate::cpu::execute;
use crate::cpu::state::CpuState;
use crate::memory::Memory;

pub(crate) fn asl(cpu: &mut CpuState, mem: &mut dyn Memory, mode: AddressingMode) {
    if mode == AddressingMode::Accumulator {
        execute::asl_acc(cpu);
    } else {
        let addr = resolve(cpu, mem, mode);
        execute::asl_mem(cpu, mem, addr);
    }
}

pub(crate) fn lsr(cpu: &mut CpuState, mem: &mut dyn Memory, mode: AddressingMode) {
    if mode == AddressingMode::Accumulator {
        execute::lsr_acc(cpu);
    } else {
        let addr = resolve(cpu, mem, mode);
        execute::lsr_mem(cpu, mem, addr);
    }
}

pub(crate) fn rol(cpu: &mut CpuState, mem: &mut dyn Memory, mode: AddressingMode) {
    if mode == AddressingMode::Accumulator {
        execute::rol_acc(cpu);
    } else {
        let addr = resolve(cpu, mem, mode);
        execute::rol_mem(cpu, mem, addr);
    }
}

pub(crate) fn ror(cpu: &mut CpuState, mem: &mut dyn Memory, mode: AddressingMode) {
    if mode == AddressingMode::Accumulator {
        execute::ror_acc(cpu);
    } else {
        let addr = resolve(cpu, mem, mode);
        execute::ror_mem(cpu, mem, addr);
    }
}

pub(crate) fn inc(cpu: &mut CpuState, mem: &mut dyn Memory, mode: AddressingMode) {
    let addr = resolve(cpu, mem, mode);
    execute::inc_mem(cpu, mem, addr);
}

pub(crate) fn dec(cpu: &mut CpuState, mem: &mut dyn Memory, mode: AddressingMode) {
    let addr = resolve(cpu, mem, mode);
    execute::dec_mem(cpu, mem, addr);
}
