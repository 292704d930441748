/*!
regs.rs - Register file primitives.

The 6502 has five 8-bit registers (A, X, Y, S, P) and one 16-bit program
counter. The 8-bit registers are plain `u8` values mutated with wrapping
arithmetic. The program counter is wrapped in `Register16` so stack pushes
and vector loads can address its bytes individually.

`Registers` is a copyable snapshot of the architecturally visible state,
handed out by the `Cpu` facade for inspection and comparisons in tests.
*/

use crate::cpu::state::Status;

/// 16-bit register with split high/low byte access. All arithmetic wraps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Register16(u16);

impl Register16 {
    #[inline]
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn get(self) -> u16 {
        self.0
    }

    #[inline]
    pub fn set(&mut self, value: u16) {
        self.0 = value;
    }

    #[inline]
    pub const fn low(self) -> u8 {
        self.0 as u8
    }

    #[inline]
    pub const fn high(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub fn set_low(&mut self, value: u8) {
        self.0 = (self.0 & 0xFF00) | value as u16;
    }

    #[inline]
    pub fn set_high(&mut self, value: u8) {
        self.0 = (self.0 & 0x00FF) | ((value as u16) << 8);
    }

    #[inline]
    pub fn increment(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }

    #[inline]
    pub fn decrement(&mut self) {
        self.0 = self.0.wrapping_sub(1);
    }

    /// Add `delta` with 16-bit wraparound.
    #[inline]
    pub fn advance(&mut self, delta: u16) {
        self.0 = self.0.wrapping_add(delta);
    }
}

impl From<u16> for Register16 {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

impl From<Register16> for u16 {
    fn from(reg: Register16) -> Self {
        reg.0
    }
}

/// Snapshot of the register file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registers {
    pub pc: u16,
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub sp: u8,
    pub p: Status,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_byte_access() {
        let mut r = Register16::new(0x1234);
        assert_eq!(r.high(), 0x12);
        assert_eq!(r.low(), 0x34);
        r.set_low(0xCD);
        assert_eq!(r.get(), 0x12CD);
        r.set_high(0xAB);
        assert_eq!(r.get(), 0xABCD);
    }

    #[test]
    fn increment_and_decrement_wrap() {
        let mut r = Register16::new(0xFFFF);
        r.increment();
        assert_eq!(r.get(), 0x0000);
        r.decrement();
        assert_eq!(r.get(), 0xFFFF);
        r.advance(3);
        assert_eq!(r.get(), 0x0002);
    }

    #[test]
    fn conversions() {
        let r: Register16 = 0xBEEF.into();
        let v: u16 = r.into();
        assert_eq!(v, 0xBEEF);
    }
}
