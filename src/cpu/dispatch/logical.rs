/*!
logical.rs - Logical and bit-test opcode family handlers

AND: 0x29, 0x25, 0x35, 0x2D, 0x3D*, 0x39*, 0x21, 0x31*
ORA: 0x09, 0x05, 0x15, 0x0D, 0x1D*, 0x19*, 0x01, 0x11*
EOR: 0x49, 0x45, 0x55, 0x4D, 0x5D*, 0x59*, 0x41, 0x51*
BIT: 0x24, 0x2C

(*) Page-cross capable read modes.
*/

use crate::cpu::addressing::{AddressingMode, read_operand};
use crate::cpu::execute;
use crate::cpu::state::CpuState;
use crate::memory::Memory;

pub(crate) fn and(cpu: &mut CpuState, mem: &mut dyn Memory, mode: AddressingMode) {
    let v = read_operand(cpu, mem, mode);
    execute::and(cpu, v);
}

pub(crate) fn ora(cpu: &mut CpuState, mem: &mut dyn Memory, mode: AddressingMode) {
    let v = read_operand(cpu, mem, mode);
    execute::ora(cpu, v);
}

pub(crate) fn eor(cpu: &mut CpuState, mem: &mut dyn Memory, mode: AddressingMode) {
    let v = read_operand(cpu, mem, mode);
    execute::eor(cpu, v);
}

pub(crate) fn bit(cpu: &mut CpuState, mem: &mut dyn Memory, mode: AddressingMode) {
    let v = read_operand(cpu, mem, mode);
    execute::bit(cpu, v);
}
