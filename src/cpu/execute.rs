/*!
execute.rs - 6502 instruction semantic helpers (ALU, flags, stack, RMW)

Purpose
=======
Centralize side-effect logic for instructions so the opcode handlers in
`dispatch::*` stay one-liners: resolve the operand, call a helper here.
Helpers operate on `CpuState` directly and take `&mut dyn Memory` only when
they touch the bus.

Scope (crate-visible)
---------------------
Stack:
    php, plp, pha, pla
Loads / transfers:
    lda/ldx/ldy, tax/tay/txa/tya, tsx/txs
Logical / bit:
    and/ora/eor/bit
Increment / decrement (register):
    inx/iny/dex/dey
Shifts / rotates:
    accumulator (`*_acc`) and memory (`*_mem`) forms
ADC / SBC / compare:
    adc, sbc, compare
RMW choreography:
    rmw_memory (read -> dummy write old -> write new)
Branch:
    branch

Design Notes
============
- The status byte is pushed and pulled verbatim; PHP does not force the
  BREAK or UNUSED bits and PLP does not mask them.
- The decimal flag never alters ADC/SBC.
- `update_zn` is the single place Z/N are derived from a result byte.
*/

use crate::cpu::state::{CpuState, Status};
use crate::memory::Memory;

// ---------------------------------------------------------------------------
// Stack
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn php(cpu: &mut CpuState, mem: &mut dyn Memory) {
    let p = cpu.status.bits();
    cpu.push_u8(mem, p);
}

#[inline]
pub(crate) fn plp(cpu: &mut CpuState, mem: &mut dyn Memory) {
    let v = cpu.pop_u8(mem);
    cpu.status = Status::from_bits_retain(v);
}

#[inline]
pub(crate) fn pha(cpu: &mut CpuState, mem: &mut dyn Memory) {
    let a = cpu.a;
    cpu.push_u8(mem, a);
}

#[inline]
pub(crate) fn pla(cpu: &mut CpuState, mem: &mut dyn Memory) {
    let val = cpu.pop_u8(mem);
    lda(cpu, val);
}

// ---------------------------------------------------------------------------
// Loads / Transfers
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn lda(cpu: &mut CpuState, v: u8) {
    cpu.a = v;
    cpu.update_zn(v);
}

#[inline]
pub(crate) fn ldx(cpu: &mut CpuState, v: u8) {
    cpu.x = v;
    cpu.update_zn(v);
}

#[inline]
pub(crate) fn ldy(cpu: &mut CpuState, v: u8) {
    cpu.y = v;
    cpu.update_zn(v);
}

#[inline]
pub(crate) fn tax(cpu: &mut CpuState) {
    let v = cpu.a;
    ldx(cpu, v);
}

#[inline]
pub(crate) fn tay(cpu: &mut CpuState) {
    let v = cpu.a;
    ldy(cpu, v);
}

#[inline]
pub(crate) fn txa(cpu: &mut CpuState) {
    let v = cpu.x;
    lda(cpu, v);
}

#[inline]
pub(crate) fn tya(cpu: &mut CpuState) {
    let v = cpu.y;
    lda(cpu, v);
}

#[inline]
pub(crate) fn tsx(cpu: &mut CpuState) {
    let v = cpu.sp;
    ldx(cpu, v);
}

/// TXS is the only transfer that leaves the flags alone.
#[inline]
pub(crate) fn txs(cpu: &mut CpuState) {
    cpu.sp = cpu.x;
}

// ---------------------------------------------------------------------------
// Logical / Bit
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn and(cpu: &mut CpuState, v: u8) {
    let r = cpu.a & v;
    lda(cpu, r);
}

#[inline]
pub(crate) fn ora(cpu: &mut CpuState, v: u8) {
    let r = cpu.a | v;
    lda(cpu, r);
}

#[inline]
pub(crate) fn eor(cpu: &mut CpuState, v: u8) {
    let r = cpu.a ^ v;
    lda(cpu, r);
}

#[inline]
pub(crate) fn bit(cpu: &mut CpuState, v: u8) {
    cpu.set_zero_from(cpu.a & v);
    cpu.set_negative_from(v);
    cpu.set_overflow_from(v);
}

// ---------------------------------------------------------------------------
// Increment / Decrement (register)
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn inx(cpu: &mut CpuState) {
    let v = cpu.x.wrapping_add(1);
    ldx(cpu, v);
}

#[inline]
pub(crate) fn iny(cpu: &mut CpuState) {
    let v = cpu.y.wrapping_add(1);
    ldy(cpu, v);
}

#[inline]
pub(crate) fn dex(cpu: &mut CpuState) {
    let v = cpu.x.wrapping_sub(1);
    ldx(cpu, v);
}

#[inline]
pub(crate) fn dey(cpu: &mut CpuState) {
    let v = cpu.y.wrapping_sub(1);
    ldy(cpu, v);
}

// ---------------------------------------------------------------------------
// Shift / rotate primitives (value in, value out; carry updated)
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn asl_value(cpu: &mut CpuState, v: u8) -> u8 {
    cpu.update_carry(v & 0x80 != 0);
    v << 1
}

#[inline]
pub(crate) fn lsr_value(cpu: &mut CpuState, v: u8) -> u8 {
    cpu.update_carry(v & 0x01 != 0);
    v >> 1
}

#[inline]
pub(crate) fn rol_value(cpu: &mut CpuState, v: u8) -> u8 {
    let carry_in = cpu.flag(Status::CARRY) as u8;
    cpu.update_carry(v & 0x80 != 0);
    (v << 1) | carry_in
}

#[inline]
pub(crate) fn ror_value(cpu: &mut CpuState, v: u8) -> u8 {
    let carry_in = (cpu.flag(Status::CARRY) as u8) << 7;
    cpu.update_carry(v & 0x01 != 0);
    (v >> 1) | carry_in
}

// ---------------------------------------------------------------------------
// Shifts / Rotates - Accumulator
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn asl_acc(cpu: &mut CpuState) {
    let a = cpu.a;
    let r = asl_value(cpu, a);
    lda(cpu, r);
}

#[inline]
pub(crate) fn lsr_acc(cpu: &mut CpuState) {
    let a = cpu.a;
    let r = lsr_value(cpu, a);
    lda(cpu, r);
}

#[inline]
pub(crate) fn rol_acc(cpu: &mut CpuState) {
    let a = cpu.a;
    let r = rol_value(cpu, a);
    lda(cpu, r);
}

#[inline]
pub(crate) fn ror_acc(cpu: &mut CpuState) {
    let a = cpu.a;
    let r = ror_value(cpu, a);
    lda(cpu, r);
}

// ---------------------------------------------------------------------------
// ADC / SBC
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn adc(cpu: &mut CpuState, v: u8) {
    let a = cpu.a;
    let carry_in = cpu.flag(Status::CARRY) as u16;
    let sum16 = a as u16 + v as u16 + carry_in;
    let result = sum16 as u8;

    cpu.update_carry(sum16 > 0xFF);
    // Overflow: ( !(A ^ M) & (A ^ R) & 0x80 ) != 0
    cpu.update_overflow((!(a ^ v)) & (a ^ result) & 0x80 != 0);

    lda(cpu, result);
}

/// A - M - (1 - C), computed as A + !M + C. Carry out means "no borrow".
#[inline]
pub(crate) fn sbc(cpu: &mut CpuState, v: u8) {
    adc(cpu, v ^ 0xFF);
}

// ---------------------------------------------------------------------------
// Compare
// ---------------------------------------------------------------------------

/// Shared CMP/CPX/CPY core: C = reg >= v, Z/N from reg - v. Registers untouched.
#[inline]
pub(crate) fn compare(cpu: &mut CpuState, reg: u8, v: u8) {
    cpu.update_carry(reg >= v);
    cpu.update_zn(reg.wrapping_sub(v));
}

// ---------------------------------------------------------------------------
// Read-Modify-Write (memory) choreography
// ---------------------------------------------------------------------------

/// Perform canonical 6502 RMW sequence: read -> dummy write old -> write new.
/// Returns the final value.
pub(crate) fn rmw_memory<F>(cpu: &mut CpuState, mem: &mut dyn Memory, addr: u16, transform: F) -> u8
where
    F: FnOnce(&mut CpuState, u8) -> u8,
{
    let old = mem.read(addr);
    mem.write(addr, old);
    let newv = transform(cpu, old);
    mem.write(addr, newv);
    newv
}

// ---------------------------------------------------------------------------
// Shifts / Rotates / INC / DEC - Memory
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn asl_mem(cpu: &mut CpuState, mem: &mut dyn Memory, addr: u16) -> u8 {
    let r = rmw_memory(cpu, mem, addr, asl_value);
    cpu.update_zn(r);
    r
}

#[inline]
pub(crate) fn lsr_mem(cpu: &mut CpuState, mem: &mut dyn Memory, addr: u16) -> u8 {
    let r = rmw_memory(cpu, mem, addr, lsr_value);
    cpu.update_zn(r);
    r
}

#[inline]
pub(crate) fn rol_mem(cpu: &mut CpuState, mem: &mut dyn Memory, addr: u16) -> u8 {
    let r = rmw_memory(cpu, mem, addr, rol_value);
    cpu.update_zn(r);
    r
}

#[inline]
pub(crate) fn ror_mem(cpu: &mut CpuState, mem: &mut dyn Memory, addr: u16) -> u8 {
    let r = rmw_memory(cpu, mem, addr, ror_value);
    cpu.update_zn(r);
    r
}

#[inline]
pub(crate) fn inc_mem(cpu: &mut CpuState, mem: &mut dyn Memory, addr: u16) -> u8 {
    let r = rmw_memory(cpu, mem, addr, |_, old| old.wrapping_add(1));
    cpu.update_zn(r);
    r
}

#[inline]
pub(crate) fn dec_mem(cpu: &mut CpuState, mem: &mut dyn Memory, addr: u16) -> u8 {
    let r = rmw_memory(cpu, mem, addr, |_, old| old.wrapping_sub(1));
    cpu.update_zn(r);
    r
}

// ---------------------------------------------------------------------------
// Branch
// ---------------------------------------------------------------------------

/// Fetch the displacement and, if `take`, jump.
///
/// The displacement byte is always consumed. A taken branch raises
/// `branch_taken`; landing on a different page than the following
/// instruction also raises `page_crossed`.
pub(crate) fn branch(cpu: &mut CpuState, mem: &mut dyn Memory, take: bool) {
    let offset = cpu.fetch_u8(mem) as i8;
    if !take {
        return;
    }
    let old_pc = cpu.pc();
    let new_pc = old_pc.wrapping_add(offset as u16);
    cpu.branch_taken = true;
    cpu.page_crossed = (old_pc & 0xFF00) != (new_pc & 0xFF00);
    cpu.set_pc(new_pc);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
