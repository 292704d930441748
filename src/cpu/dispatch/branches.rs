/*!
branches.rs - Relative branch opcode handlers (BPL/BMI/BVC/BVS/BCC/BCS/BNE/BEQ)

Cycle Rules
===========
Base cost: 2 cycles.
If branch is taken: +1 cycle (`branch_taken`).
If the target lies on another page than the next instruction: +1 more
(`page_crossed`, via the page-cross table).

A branch not taken still consumes its displacement byte.
*/

use crate::cpu::addressing::AddressingMode;
use crate::cpu::execute::branch;
use crate::cpu::state::{CpuState, Status};
use crate::memory::Memory;

pub(crate) fn bpl(cpu: &mut CpuState, mem: &mut dyn Memory, _mode: AddressingMode) {
    let take = !cpu.flag(Status::NEGATIVE);
    branch(cpu, mem, take);
}

pub(crate) fn bmi(cpu: &mut CpuState, mem: &mut dyn Memory, _mode: AddressingMode) {
    let take = cpu.flag(Status::NEGATIVE);
    branch(cpu, mem, take);
}

pub(crate) fn bvc(cpu: &mut CpuState, mem: &mut dyn Memory, _mode: AddressingMode) {
    let take = !cpu.flag(Status::OVERFLOW);
    branch(cpu, mem, take);
}

pub(crate) fn bvs(cpu: &mut CpuState, mem: &mut dyn Memory, _mode: AddressingMode) {
    let take = cpu.flag(Status::OVERFLOW);
    branch(cpu, mem, take);
}

pub(crate) fn bcc(cpu: &mut CpuState, mem: &mut dyn Memory, _mode: AddressingMode) {
    let take = !cpu.flag(Status::CARRY);
    branch(cpu, mem, take);
}

pub(crate) fn bcs(cpu: &mut CpuState, mem: &mut dyn Memory, _mode: AddressingMode) {
    let take = cpu.flag(Status::CARRY);
    branch(cpu, mem, take);
}

pub(crate) fn bne(cpu: &mut CpuState, mem: &mut dyn Memory, _mode: AddressingMode) {
    let take = !cpu.flag(Status::ZERO);
    branch(cpu, mem, take);
}

pub(crate) fn beq(cpu: &mut CpuState, mem: &mut dyn Memory, _mode: AddressingMode) {
    let take = cpu.flag(Status::ZERO);
    branch(cpu, mem, take);
}
