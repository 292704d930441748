/*!
arithmetic.rs - ADC / SBC opcode family handlers

Overview
========
Implements 6502 add / subtract with carry instructions:

ADC: 0x69, 0x65, 0x75, 0x6D, 0x7D*, 0x79*, 0x61, 0x71*
SBC: 0xE9, 0xE5, 0xF5, 0xED, 0xFD*, 0xF9*, 0xE1, 0xF1*  (+ undocumented 0xEB)

(*) Page-cross capable read modes.

Binary arithmetic only: the DECIMAL flag can be set and cleared but never
changes the result.
*/

use crate::cpu::addressing::{AddressingMode, read_operand};
use crate::cpu::execute;
use crate::cpu::state::CpuState;
use crate::memory::Memory;

pub(crate) fn adc(cpu: &mut CpuState, mem: &mut dyn Memory, mode: AddressingMode) {
    let v = read_operand(cpu, mem, mode);
    execute::adc(cpu, v);
}

pub(crate) fn sbc(cpu: &mut CpuState, mem: &mut dyn Memory, mode: AddressingMode) {
    let v = read_operand(cpu, mem, mode);
    execute::sbc(cpu, v);
}
