/*!
load_store.rs - Load / Store opcode family handlers

Overview
========
Handles all documented 6502 load and store instructions:

Loads (set Z/N flags; indexed reads may pay the page-cross bonus):
    LDA: A9, A5, B5, AD, BD*, B9*, A1, B1*
    LDX: A2, A6, B6, AE, BE*
    LDY: A0, A4, B4, AC, BC*

Stores (no flags changed, never pay the page-cross bonus):
    STA: 85, 95, 8D, 9D, 99, 81, 91
    STX: 86, 96, 8E
    STY: 84, 94, 8C

(*) The resolver raises `page_crossed`; the dispatcher charges the bonus from
    `cycles::PAGE_CROSS_CYCLES`.

Each handler has the table signature `fn(&mut CpuState, &mut dyn Memory,
AddressingMode)`; the addressing mode comes from the opcode table row.
*/

use crate::cpu::addressing::{AddressingMode, read_operand, resolve};
use crate::cpu::execute;
use crate::cpu::state::CpuState;
use crate::memory::Memory;

pub(crate) fn lda(cpu: &mut CpuState, mem: &mut dyn Memory, mode: AddressingMode) {
    let v = read_operand(cpu, mem, mode);
    execute::lda(cpu, v);
}

pub(crate) fn ldx(cpu: &mut CpuState, mem: &mut dyn Memory, mode: AddressingMode) {
    let v = read_operand(cpu, mem, mode);
    execute::ldx(cpu, v);
}

pub(crate) fn ldy(cpu: &mut CpuState, mem: &mut dyn Memory, mode: AddressingMode) {
    let v = read_operand(cpu, mem, mode);
    execute::ldy(cpu, v);
}

pub(crate) fn sta(cpu: &mut CpuState, mem: &mut dyn Memory, mode: AddressingMode) {
    let addr = resolve(cpu, mem, mode);
    mem.write(addr, cpu.a);
}

pub(crate) fn stx(cpu: &mut CpuState, mem: &mut dyn Memory, mode: AddressingMode) {
    let addr = resolve(cpu, mem, mode);
    mem.write(addr, cpu.x);
}

pub(crate) fn sty(cpu: &mut CpuState, mem: &mut dyn Memory, mode: AddressingMode) {
    let addr = resolve(cpu, mem, mode);
    mem.write(addr, cpu.y);
}
