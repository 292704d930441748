/*!
addressing.rs - 6502 addressing modes and operand fetch helpers (shared by dispatch)

Overview
========
Provides canonical helpers for:
- Instruction stream byte/word fetch
- Effective address calculation for all thirteen 6502 addressing modes
- Page-cross detection (recorded on `CpuState::page_crossed` for the cycle bonus)
- Emulation of the 6502 JMP (indirect) page-wrap quirk

Scope & Responsibilities
=======================
- Pure address / operand resolution only.
- Does NOT apply cycle penalties; the dispatcher reads `page_crossed` after
  the handler returns and consults the cycle tables.
- Only AbsoluteX, AbsoluteY and IndirectIndexed raise `page_crossed`. Whether
  the flag costs a cycle is decided per opcode by `cycles::PAGE_CROSS_CYCLES`,
  so stores and read-modify-write opcodes may raise it for free.

Caller Assumptions
==================
- PC points at the first operand byte when `resolve` is invoked.
- Handlers advance PC exclusively via these helpers.

Function Inventory
------------------
```text
    resolve(cpu, mem, mode) -> u16          effective address (consumes operand)
    read_operand(cpu, mem, mode) -> u8      value operand (Immediate or memory)
    resolve_unindexed_base(cpu, mem, mode)  (base, index) for the SH* family
    read_word_zp(mem, base)                 zero-page pointer, wraps at $FF
    read_word_indirect_bug(mem, addr)       JMP ($xxFF) quirk
```
*/

use crate::cpu::state::CpuState;
use crate::memory::Memory;

/// Operand addressing modes of the NMOS 6502.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    Implied,
    Accumulator,
    Immediate,
    ZeroPage,
    ZeroPageX,
    ZeroPageY,
    Relative,
    Absolute,
    AbsoluteX,
    AbsoluteY,
    Indirect,
    /// `(zp,X)`
    IndexedIndirect,
    /// `(zp),Y`
    IndirectIndexed,
}

impl AddressingMode {
    /// Number of operand bytes following the opcode.
    pub const fn operand_len(self) -> u16 {
        match self {
            AddressingMode::Implied | AddressingMode::Accumulator => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Relative
            | AddressingMode::IndexedIndirect
            | AddressingMode::IndirectIndexed => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }
}

#[inline]
pub(crate) fn fetch_byte(cpu: &mut CpuState, mem: &mut dyn Memory) -> u8 {
    cpu.fetch_u8(mem)
}

#[inline]
pub(crate) fn fetch_word(cpu: &mut CpuState, mem: &mut dyn Memory) -> u16 {
    cpu.fetch_u16(mem)
}

#[inline]
fn crosses_page(base: u16, addr: u16) -> bool {
    (base & 0xFF00) != (addr & 0xFF00)
}

/// Compute the effective address for `mode`, consuming its operand bytes.
///
/// Immediate resolves to the address of the operand byte itself. Relative
/// resolves to the branch target. Implied and Accumulator have no address;
/// they return PC untouched.
pub(crate) fn resolve(cpu: &mut CpuState, mem: &mut dyn Memory, mode: AddressingMode) -> u16 {
    match mode {
        AddressingMode::Implied | AddressingMode::Accumulator => cpu.pc(),
        AddressingMode::Immediate => {
            let addr = cpu.pc();
            cpu.advance_pc(1);
            addr
        }
        AddressingMode::ZeroPage => fetch_byte(cpu, mem) as u16,
        AddressingMode::ZeroPageX => fetch_byte(cpu, mem).wrapping_add(cpu.x) as u16,
        AddressingMode::ZeroPageY => fetch_byte(cpu, mem).wrapping_add(cpu.y) as u16,
        AddressingMode::Relative => {
            let offset = fetch_byte(cpu, mem) as i8;
            cpu.pc().wrapping_add(offset as u16)
        }
        AddressingMode::Absolute => fetch_word(cpu, mem),
        AddressingMode::AbsoluteX => {
            let base = fetch_word(cpu, mem);
            let addr = base.wrapping_add(cpu.x as u16);
            cpu.page_crossed = crosses_page(base, addr);
            addr
        }
        AddressingMode::AbsoluteY => {
            let base = fetch_word(cpu, mem);
            let addr = base.wrapping_add(cpu.y as u16);
            cpu.page_crossed = crosses_page(base, addr);
            addr
        }
        AddressingMode::Indirect => {
            let ptr = fetch_word(cpu, mem);
            read_word_indirect_bug(mem, ptr)
        }
        AddressingMode::IndexedIndirect => {
            let zp = fetch_byte(cpu, mem).wrapping_add(cpu.x);
            read_word_zp(mem, zp)
        }
        AddressingMode::IndirectIndexed => {
            let zp = fetch_byte(cpu, mem);
            let base = read_word_zp(mem, zp);
            let addr = base.wrapping_add(cpu.y as u16);
            cpu.page_crossed = crosses_page(base, addr);
            addr
        }
    }
}

/// Fetch the value operand for read-class instructions.
#[inline]
pub(crate) fn read_operand(cpu: &mut CpuState, mem: &mut dyn Memory, mode: AddressingMode) -> u8 {
    let addr = resolve(cpu, mem, mode);
    mem.read(addr)
}

/// Resolve an indexed absolute mode but hand back the unindexed base and the
/// index separately. The SHX/SHY/SHA/TAS family derives its stored value from
/// the base high byte.
pub(crate) fn resolve_unindexed_base(
    cpu: &mut CpuState,
    mem: &mut dyn Memory,
    mode: AddressingMode,
) -> (u16, u8) {
    match mode {
        AddressingMode::AbsoluteX => (fetch_word(cpu, mem), cpu.x),
        AddressingMode::AbsoluteY => (fetch_word(cpu, mem), cpu.y),
        AddressingMode::IndirectIndexed => {
            let zp = fetch_byte(cpu, mem);
            (read_word_zp(mem, zp), cpu.y)
        }
        other => (resolve(cpu, mem, other), 0),
    }
}

/// Read a 16-bit little endian pointer from zero page with wraparound
/// on the high byte (standard 6502 zero-page indirect behavior).
#[inline]
pub(crate) fn read_word_zp(mem: &mut dyn Memory, base: u8) -> u16 {
    let lo = mem.read(base as u16) as u16;
    let hi = mem.read(base.wrapping_add(1) as u16) as u16;
    (hi << 8) | lo
}

/// Emulate the original 6502 JMP (indirect) hardware bug: when the
/// low byte of the indirect vector is 0xFF, the high byte does not
/// cross to the next page; it wraps within the same page.
#[inline]
pub(crate) fn read_word_indirect_bug(mem: &mut dyn Memory, addr: u16) -> u16 {
    let lo = mem.read(addr) as u16;
    let hi_addr = (addr & 0xFF00) | (addr.wrapping_add(1) & 0x00FF);
    let hi = mem.read(hi_addr) as u16;
    (hi << 8) | lo
}
