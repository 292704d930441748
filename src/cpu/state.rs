/*!
state.rs - Canonical 6502 CPU architectural state (registers + flags) and
inline-friendly helpers.

Overview
========
`CpuState` is the single owner of every architecturally visible register,
the interrupt latches set by the host, and the transient per-instruction
markers (`page_crossed`, `branch_taken`) that the dispatcher turns into extra
cycles. It excludes:
  - Memory decoding (the host's `Memory` implementation)
  - Opcode decode / dispatch (`cpu::dispatch`, `cpu::table`)
  - Cycle tables (`cpu::cycles`)

6502 Status Register Bit Layout
===============================
Bit: 7 6 5 4 3 2 1 0
     N V 1 B D I Z C
Where:
  N = NEGATIVE
  V = OVERFLOW
  1 = UNUSED (set at reset, otherwise carried verbatim)
  B = BREAK (set by BRK, cleared by IRQ/NMI entry)
  D = DECIMAL (settable, no arithmetic effect on this core)
  I = IRQ_DISABLE
  Z = ZERO
  C = CARRY

The status byte is kept as a genuine 8-bit value: every bit, including
UNUSED and BREAK, survives PHP/PLP and BRK/RTI unchanged.
*/

use bitflags::bitflags;

use crate::cpu::regs::{Register16, Registers};
use crate::memory::{Memory, RESET_VECTOR};

bitflags! {
    /// Processor status register (P).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Status: u8 {
        const CARRY = 0b0000_0001;
        const ZERO = 0b0000_0010;
        const IRQ_DISABLE = 0b0000_0100;
        const DECIMAL = 0b0000_1000;
        const BREAK = 0b0001_0000;
        const UNUSED = 0b0010_0000;
        const OVERFLOW = 0b0100_0000;
        const NEGATIVE = 0b1000_0000;
    }
}

impl Status {
    /// Value loaded into P by `reset` ($34: UNUSED | BREAK | IRQ_DISABLE).
    pub const RESET: Status = Status::from_bits_retain(0x34);
}

impl Default for Status {
    fn default() -> Self {
        Status::RESET
    }
}

/// Stack page base; S is an offset into $0100-$01FF.
pub const STACK_BASE: u16 = 0x0100;

/// Stack pointer value after reset.
pub const RESET_SP: u8 = 0xFD;

/// Architectural register / flag container for the 6502 CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CpuState {
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub sp: u8,
    pub pc: Register16,
    pub status: Status,

    // Interrupt latches (host-driven).
    pub(crate) irq_line: bool,
    pub(crate) nmi_pending: bool,

    // Per-instruction markers, cleared before every opcode.
    pub(crate) page_crossed: bool,
    pub(crate) branch_taken: bool,

    // Set by a JAM opcode; cleared by reset or interrupt entry.
    pub(crate) jammed: bool,
}

impl Default for CpuState {
    fn default() -> Self {
        Self {
            a: 0,
            x: 0,
            y: 0,
            sp: RESET_SP,
            pc: Register16::default(),
            status: Status::RESET,
            irq_line: false,
            nmi_pending: false,
            page_crossed: false,
            branch_taken: false,
            jammed: false,
        }
    }
}

impl CpuState {
    // ---------------------------------------------------------------------
    // Construction / Reset
    // ---------------------------------------------------------------------

    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset registers, latches and markers, then load PC from $FFFC/$FFFD.
    pub fn reset(&mut self, mem: &mut dyn Memory) {
        *self = Self::default();
        self.pc.set_low(mem.read(RESET_VECTOR));
        self.pc.set_high(mem.read(RESET_VECTOR.wrapping_add(1)));
    }

    // ---------------------------------------------------------------------
    // Basic Accessors
    // ---------------------------------------------------------------------
    #[inline]
    pub fn a(&self) -> u8 {
        self.a
    }
    #[inline]
    pub fn x(&self) -> u8 {
        self.x
    }
    #[inline]
    pub fn y(&self) -> u8 {
        self.y
    }
    #[inline]
    pub fn sp(&self) -> u8 {
        self.sp
    }
    #[inline]
    pub fn pc(&self) -> u16 {
        self.pc.get()
    }
    #[inline]
    pub fn status(&self) -> Status {
        self.status
    }

    #[inline]
    pub fn set_a(&mut self, v: u8) {
        self.a = v;
    }
    #[inline]
    pub fn set_x(&mut self, v: u8) {
        self.x = v;
    }
    #[inline]
    pub fn set_y(&mut self, v: u8) {
        self.y = v;
    }
    #[inline]
    pub fn set_sp(&mut self, v: u8) {
        self.sp = v;
    }
    #[inline]
    pub fn set_pc(&mut self, v: u16) {
        self.pc.set(v);
    }
    #[inline]
    pub fn set_status(&mut self, v: Status) {
        self.status = v;
    }

    /// Snapshot of all registers.
    pub fn registers(&self) -> Registers {
        Registers {
            pc: self.pc.get(),
            a: self.a,
            x: self.x,
            y: self.y,
            sp: self.sp,
            p: self.status,
        }
    }

    // ---------------------------------------------------------------------
    // Program Counter Helpers
    // ---------------------------------------------------------------------

    /// Advance PC by `delta` (wrapping at 16 bits).
    #[inline]
    pub fn advance_pc(&mut self, delta: u16) {
        self.pc.advance(delta);
    }

    /// Read the byte at PC, then advance PC by 1.
    #[inline]
    pub fn fetch_u8(&mut self, mem: &mut dyn Memory) -> u8 {
        let b = mem.read(self.pc.get());
        self.pc.increment();
        b
    }

    /// Read a little-endian word (low then high) at PC, advancing PC by 2.
    #[inline]
    pub fn fetch_u16(&mut self, mem: &mut dyn Memory) -> u16 {
        let lo = self.fetch_u8(mem) as u16;
        let hi = self.fetch_u8(mem) as u16;
        (hi << 8) | lo
    }

    // ---------------------------------------------------------------------
    // Flag Operations
    // ---------------------------------------------------------------------

    #[inline]
    pub fn flag(&self, flag: Status) -> bool {
        self.status.contains(flag)
    }

    #[inline]
    pub fn assign_flag(&mut self, flag: Status, value: bool) {
        self.status.set(flag, value);
    }

    /// ZERO = (result == 0).
    #[inline]
    pub fn set_zero_from(&mut self, result: u8) {
        self.assign_flag(Status::ZERO, result == 0);
    }

    /// NEGATIVE = bit 7 of `result`.
    #[inline]
    pub fn set_negative_from(&mut self, result: u8) {
        self.assign_flag(Status::NEGATIVE, result & 0x80 != 0);
    }

    /// OVERFLOW = bit 6 of `value` (BIT copies it straight from memory).
    #[inline]
    pub fn set_overflow_from(&mut self, value: u8) {
        self.assign_flag(Status::OVERFLOW, value & 0x40 != 0);
    }

    /// Composite helper to update ZERO + NEGATIVE according to 6502 rules.
    #[inline]
    pub fn update_zn(&mut self, result: u8) {
        self.set_zero_from(result);
        self.set_negative_from(result);
    }

    #[inline]
    pub fn update_carry(&mut self, carry: bool) {
        self.assign_flag(Status::CARRY, carry);
    }

    #[inline]
    pub fn update_overflow(&mut self, overflow: bool) {
        self.assign_flag(Status::OVERFLOW, overflow);
    }

    // ---------------------------------------------------------------------
    // Stack Helpers
    // ---------------------------------------------------------------------
    //
    //   Push: write at 0x0100 | SP, then SP = SP - 1
    //   Pull: SP = SP + 1, then read at 0x0100 | SP
    // SP wraps within the page; there is no overflow detection.

    #[inline]
    pub fn push_u8(&mut self, mem: &mut dyn Memory, value: u8) {
        mem.write(STACK_BASE | self.sp as u16, value);
        self.sp = self.sp.wrapping_sub(1);
    }

    #[inline]
    pub fn pop_u8(&mut self, mem: &mut dyn Memory) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        mem.read(STACK_BASE | self.sp as u16)
    }

    /// Push a word high byte first, so it reads back little-endian.
    #[inline]
    pub fn push_u16(&mut self, mem: &mut dyn Memory, value: u16) {
        self.push_u8(mem, (value >> 8) as u8);
        self.push_u8(mem, value as u8);
    }

    #[inline]
    pub fn pop_u16(&mut self, mem: &mut dyn Memory) -> u16 {
        let lo = self.pop_u8(mem) as u16;
        let hi = self.pop_u8(mem) as u16;
        (hi << 8) | lo
    }

    /// Push the program counter (high, then low).
    #[inline]
    pub fn push_pc(&mut self, mem: &mut dyn Memory) {
        let (hi, lo) = (self.pc.high(), self.pc.low());
        self.push_u8(mem, hi);
        self.push_u8(mem, lo);
    }

    // ---------------------------------------------------------------------
    // Per-instruction markers
    // ---------------------------------------------------------------------

    /// Clear the transient markers ahead of an opcode.
    #[inline]
    pub(crate) fn begin_instruction(&mut self) {
        self.page_crossed = false;
        self.branch_taken = false;
    }

    /// True when the last instruction's effective address crossed a page.
    #[inline]
    pub fn page_crossed(&self) -> bool {
        self.page_crossed
    }

    /// True when the last instruction was a taken branch.
    #[inline]
    pub fn branch_taken(&self) -> bool {
        self.branch_taken
    }

    #[inline]
    pub fn jammed(&self) -> bool {
        self.jammed
    }
}
