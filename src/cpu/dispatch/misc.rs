/*!
misc.rs - Transfers / Stack / Flag / Register-step opcode family handlers

Overview
========
Handles small, fixed-cycle instructions that move register values, manipulate
the stack, set/clear individual processor status flags, or step an index
register:

Transfers:
  TAX (0xAA), TAY (0xA8), TXA (0x8A), TYA (0x98), TSX (0xBA), TXS (0x9A)

Stack:
  PHA (0x48), PLA (0x68), PHP (0x08), PLP (0x28)

Flag operations:
  CLC (0x18), SEC (0x38),
  CLI (0x58), SEI (0x78),
  CLD (0xD8), SED (0xF8),
  CLV (0xB8)

Index step:
  INX (0xE8), INY (0xC8), DEX (0xCA), DEY (0x88)

NOP:
  0xEA plus every undocumented NOP variant; operand-bearing variants still
  perform their read so memory-mapped side effects and the page-cross
  bonus match hardware.
*/

use crate::cpu::addressing::{AddressingMode, read_operand};
use crate::cpu::execute;
use crate::cpu::state::{CpuState, Status};
use crate::memory::Memory;

// -------- Transfers --------

pub(crate) fn tax(cpu: &mut CpuState, _mem: &mut dyn Memory, _mode: AddressingMode) {
    execute::tax(cpu);
}

pub(crate) fn tay(cpu: &mut CpuState, _mem: &mut dyn Memory, _mode: AddressingMode) {
    execute::tay(cpu);
}

pub(crate) fn txa(cpu: &mut CpuState, _mem: &mut dyn Memory, _mode: AddressingMode) {
    execute::txa(cpu);
}

pub(crate) fn tya(cpu: &mut CpuState, _mem: &mut dyn Memory, _mode: AddressingMode) {
    execute::tya(cpu);
}

pub(crate) fn tsx(cpu: &mut CpuState, _mem: &mut dyn Memory, _mode: AddressingMode) {
    execute::tsx(cpu);
}

pub(crate) fn txs(cpu: &mut CpuState, _mem: &mut dyn Memory, _mode: AddressingMode) {
    execute::txs(cpu);
}

// -------- Stack --------

pub(crate) fn pha(cpu: &mut CpuState, mem: &mut dyn Memory, _mode: AddressingMode) {
    execute::pha(cpu, mem);
}

pub(crate) fn pla(cpu: &mut CpuState, mem: &mut dyn Memory, _mode: AddressingMode) {
    execute::pla(cpu, mem);
}

pub(crate) fn php(cpu: &mut CpuState, mem: &mut dyn Memory, _mode: AddressingMode) {
    execute::php(cpu, mem);
}

pub(crate) fn plp(cpu: &mut CpuState, mem: &mut dyn Memory, _mode: AddressingMode) {
    execute::plp(cpu, mem);
}

// -------- Flags --------

pub(crate) fn clc(cpu: &mut CpuState, _mem: &mut dyn Memory, _mode: AddressingMode) {
    cpu.assign_flag(Status::CARRY, false);
}

pub(crate) fn sec(cpu: &mut CpuState, _mem: &mut dyn Memory, _mode: AddressingMode) {
    cpu.assign_flag(Status::CARRY, true);
}

pub(crate) fn cli(cpu: &mut CpuState, _mem: &mut dyn Memory, _mode: AddressingMode) {
    cpu.assign_flag(Status::IRQ_DISABLE, false);
}

pub(crate) fn sei(cpu: &mut CpuState, _mem: &mut dyn Memory, _mode: AddressingMode) {
    cpu.assign_flag(Status::IRQ_DISABLE, true);
}

pub(crate) fn cld(cpu: &mut CpuState, _mem: &mut dyn Memory, _mode: AddressingMode) {
    cpu.assign_flag(Status::DECIMAL, false);
}

pub(crate) fn sed(cpu: &mut CpuState, _mem: &mut dyn Memory, _mode: AddressingMode) {
    cpu.assign_flag(Status::DECIMAL, true);
}

pub(crate) fn clv(cpu: &mut CpuState, _mem: &mut dyn Memory, _mode: AddressingMode) {
    cpu.assign_flag(Status::OVERFLOW, false);
}

// -------- Index step --------

pub(crate) fn inx(cpu: &mut CpuState, _mem: &mut dyn Memory, _mode: AddressingMode) {
    execute::inx(cpu);
}

pub(crate) fn iny(cpu: &mut CpuState, _mem: &mut dyn Memory, _mode: AddressingMode) {
    execute::iny(cpu);
}

pub(crate) fn dex(cpu: &mut CpuState, _mem: &mut dyn Memory, _mode: AddressingMode) {
    execute::dex(cpu);
}

pub(crate) fn dey(cpu: &mut CpuState, _mem: &mut dyn Memory, _mode: AddressingMode) {
    execute::dey(cpu);
}

// -------- NOP --------

pub(crate) fn nop(cpu: &mut CpuState, mem: &mut dyn Memory, mode: AddressingMode) {
    if mode != AddressingMode::Implied {
        let _ = read_operand(cpu, mem, mode);
    }
}
