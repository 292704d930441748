/*!
compare.rs - Compare opcode family handlers (CMP / CPX / CPY)

CMP: 0xC9 (imm), 0xC5 (zp), 0xD5 (zp,X), 0xCD (abs),
     0xDD (abs,X*), 0xD9 (abs,Y*), 0xC1 ((ind,X)), 0xD1 ((ind),Y*)
CPX: 0xE0 (imm), 0xE4 (zp), 0xEC (abs)
CPY: 0xC0 (imm), 0xC4 (zp), 0xCC (abs)

Registers are never modified; only C, Z and N change.
*/

use crate::cpu::addressing::{AddressingMode, read_operand};
use crate::cpu::execute::compare;
use crate::cpu::state::CpuState;
use crate::memory::Memory;

pub(crate) fn cmp(cpu: &mut CpuState, mem: &mut dyn Memory, mode: AddressingMode) {
    let v = read_operand(cpu, mem, mode);
    let reg = cpu.a;
    compare(cpu, reg, v);
}

pub(crate) fn cpx(cpu: &mut CpuState, mem: &mut dyn Memory, mode: AddressingMode) {
    let v = read_operand(cpu, mem, mode);
    let reg = cpu.x;
    compare(cpu, reg, v);
}

pub(crate) fn cpy(cpu: &mut CpuState, mem: &mut dyn Memory, mode: AddressingMode) {
    let v = read_operand(cpu, mem, mode);
    let reg = cpu.y;
    compare(cpu, reg, v);
}
