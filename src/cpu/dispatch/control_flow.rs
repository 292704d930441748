/*!
control_flow.rs - Control-flow / system opcode family handlers

Overview
========
Implements 6502 control-flow and system instructions that manipulate program
counter, stack, or processor status:

  JMP abs        (0x4C)
  JMP (ind)      (0x6C)  (hardware indirect page-wrap quirk preserved)
  JSR abs        (0x20)
  RTS            (0x60)
  RTI            (0x40)
  BRK            (0x00)

Stack conventions
=================
- JSR pushes the address of its own last byte (return - 1); RTS adds one back.
- BRK pushes PC as left by the opcode fetch (BRK address + 1), so RTI
  resumes on the byte after the opcode. BREAK is set in P before P is pushed.
- RTI pulls P verbatim, then PC, with no adjustment.
*/

use crate::cpu::addressing::{AddressingMode, resolve};
use crate::cpu::execute::{php, plp};
use crate::cpu::state::{CpuState, Status};
use crate::memory::{IRQ_VECTOR, Memory};

pub(crate) fn jmp(cpu: &mut CpuState, mem: &mut dyn Memory, mode: AddressingMode) {
    let target = resolve(cpu, mem, mode);
    cpu.set_pc(target);
}

pub(crate) fn jsr(cpu: &mut CpuState, mem: &mut dyn Memory, mode: AddressingMode) {
    let target = resolve(cpu, mem, mode);
    // After operand fetch PC points to next instruction; push (PC - 1)
    let ret = cpu.pc().wrapping_sub(1);
    cpu.push_u16(mem, ret);
    cpu.set_pc(target);
}

pub(crate) fn rts(cpu: &mut CpuState, mem: &mut dyn Memory, _mode: AddressingMode) {
    let ret = cpu.pop_u16(mem);
    cpu.set_pc(ret.wrapping_add(1));
}

pub(crate) fn rti(cpu: &mut CpuState, mem: &mut dyn Memory, _mode: AddressingMode) {
    plp(cpu, mem);
    let return_pc = cpu.pop_u16(mem);
    cpu.set_pc(return_pc);
}

pub(crate) fn brk(cpu: &mut CpuState, mem: &mut dyn Memory, _mode: AddressingMode) {
    cpu.push_pc(mem);
    cpu.assign_flag(Status::BREAK, true);
    php(cpu, mem);
    cpu.assign_flag(Status::IRQ_DISABLE, true);
    let vector = mem.read_word(IRQ_VECTOR);
    cpu.set_pc(vector);
}
