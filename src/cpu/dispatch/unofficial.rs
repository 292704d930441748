/*!
unofficial.rs - Undocumented NMOS 6502 opcode handlers

Overview
========
The NMOS decode ROM gives every one of the 105 undocumented opcodes a
deterministic effect. Most combine a read-modify-write with an accumulator
operation; a few ("unstable" ones) depend on analog bus behaviour and are
modelled with the commonly accepted stable approximations.

Combined RMW + ALU:
  SLO (ASL, ORA)   03 07 0F 13 17 1B 1F
  RLA (ROL, AND)   23 27 2F 33 37 3B 3F
  SRE (LSR, EOR)   43 47 4F 53 57 5B 5F
  RRA (ROR, ADC)   63 67 6F 73 77 7B 7F
  DCP (DEC, CMP)   C3 C7 CF D3 D7 DB DF
  ISC (INC, SBC)   E3 E7 EF F3 F7 FB FF

Load / store combos:
  SAX  83 87 8F 97          LAX  A3 A7 AF B3 B7 BF
  LAS  BB

Immediate ALU:
  ANC 0B 2B   ALR 4B   ARR 6B   XAA 8B   LXA AB   AXS CB

High-byte stores (value ANDed with base high byte + 1):
  AHX 93 9F   TAS 9B   SHY 9C   SHX 9E

Processor lock:
  JAM 02 12 22 32 42 52 62 72 92 B2 D2 F2

Undocumented NOPs and SBC EB are routed to `misc::nop` and
`arithmetic::sbc` by the opcode table.
*/

use crate::cpu::addressing::{AddressingMode, read_operand, resolve, resolve_unindexed_base};
use crate::cpu::execute::{self, rmw_memory};
use crate::cpu::state::{CpuState, Status};
use crate::memory::Memory;

// ---------------------------------------------------------------------------
// JAM
// ---------------------------------------------------------------------------

/// Lock the processor: PC is parked on the JAM opcode so every later tick
/// re-executes it until a reset or an interrupt.
pub(crate) fn jam(cpu: &mut CpuState, _mem: &mut dyn Memory, _mode: AddressingMode) {
    let pc = cpu.pc().wrapping_sub(1);
    if !cpu.jammed {
        log::warn!(target: "g6502::unofficial", "JAM at ${pc:04X}: processor halted until reset or interrupt");
    }
    cpu.set_pc(pc);
    cpu.jammed = true;
}

// ---------------------------------------------------------------------------
// Combined RMW + ALU
// ---------------------------------------------------------------------------

pub(crate) fn slo(cpu: &mut CpuState, mem: &mut dyn Memory, mode: AddressingMode) {
    let addr = resolve(cpu, mem, mode);
    let r = rmw_memory(cpu, mem, addr, execute::asl_value);
    execute::ora(cpu, r);
}

pub(crate) fn rla(cpu: &mut CpuState, mem: &mut dyn Memory, mode: AddressingMode) {
    let addr = resolve(cpu, mem, mode);
    let r = rmw_memory(cpu, mem, addr, execute::rol_value);
    execute::and(cpu, r);
}

pub(crate) fn sre(cpu: &mut CpuState, mem: &mut dyn Memory, mode: AddressingMode) {
    let addr = resolve(cpu, mem, mode);
    let r = rmw_memory(cpu, mem, addr, execute::lsr_value);
    execute::eor(cpu, r);
}

/// ROR feeds its carry-out into the ADC.
pub(crate) fn rra(cpu: &mut CpuState, mem: &mut dyn Memory, mode: AddressingMode) {
    let addr = resolve(cpu, mem, mode);
    let r = rmw_memory(cpu, mem, addr, execute::ror_value);
    execute::adc(cpu, r);
}

pub(crate) fn dcp(cpu: &mut CpuState, mem: &mut dyn Memory, mode: AddressingMode) {
    let addr = resolve(cpu, mem, mode);
    let r = rmw_memory(cpu, mem, addr, |_, old| old.wrapping_sub(1));
    let a = cpu.a;
    execute::compare(cpu, a, r);
}

pub(crate) fn isc(cpu: &mut CpuState, mem: &mut dyn Memory, mode: AddressingMode) {
    let addr = resolve(cpu, mem, mode);
    let r = rmw_memory(cpu, mem, addr, |_, old| old.wrapping_add(1));
    execute::sbc(cpu, r);
}

// ---------------------------------------------------------------------------
// Load / store combos
// ---------------------------------------------------------------------------

pub(crate) fn sax(cpu: &mut CpuState, mem: &mut dyn Memory, mode: AddressingMode) {
    let addr = resolve(cpu, mem, mode);
    mem.write(addr, cpu.a & cpu.x);
}

pub(crate) fn lax(cpu: &mut CpuState, mem: &mut dyn Memory, mode: AddressingMode) {
    let v = read_operand(cpu, mem, mode);
    cpu.x = v;
    execute::lda(cpu, v);
}

pub(crate) fn las(cpu: &mut CpuState, mem: &mut dyn Memory, mode: AddressingMode) {
    let v = read_operand(cpu, mem, mode) & cpu.sp;
    cpu.sp = v;
    cpu.x = v;
    execute::lda(cpu, v);
}

// ---------------------------------------------------------------------------
// Immediate ALU
// ---------------------------------------------------------------------------

/// AND, then copy N into C.
pub(crate) fn anc(cpu: &mut CpuState, mem: &mut dyn Memory, mode: AddressingMode) {
    let v = read_operand(cpu, mem, mode);
    execute::and(cpu, v);
    let n = cpu.flag(Status::NEGATIVE);
    cpu.update_carry(n);
}

/// AND, then LSR A.
pub(crate) fn alr(cpu: &mut CpuState, mem: &mut dyn Memory, mode: AddressingMode) {
    let v = read_operand(cpu, mem, mode);
    execute::and(cpu, v);
    execute::lsr_acc(cpu);
}

/// AND, then ROR A with C = bit 6 and V = bit 6 ^ bit 5 of the result.
pub(crate) fn arr(cpu: &mut CpuState, mem: &mut dyn Memory, mode: AddressingMode) {
    let v = read_operand(cpu, mem, mode);
    let carry_in = (cpu.flag(Status::CARRY) as u8) << 7;
    let r = ((cpu.a & v) >> 1) | carry_in;
    execute::lda(cpu, r);
    let bit6 = r & 0x40 != 0;
    let bit5 = r & 0x20 != 0;
    cpu.update_carry(bit6);
    cpu.update_overflow(bit6 ^ bit5);
}

/// Unstable on silicon; modelled with the $EE magic constant.
pub(crate) fn xaa(cpu: &mut CpuState, mem: &mut dyn Memory, mode: AddressingMode) {
    let v = read_operand(cpu, mem, mode);
    let r = (cpu.a | 0xEE) & cpu.x & v;
    execute::lda(cpu, r);
}

/// Unstable on silicon; modelled as A = X = operand.
pub(crate) fn lxa(cpu: &mut CpuState, mem: &mut dyn Memory, mode: AddressingMode) {
    let v = read_operand(cpu, mem, mode);
    cpu.x = v;
    execute::lda(cpu, v);
}

/// X = (A & X) - operand, carry as for CMP.
pub(crate) fn axs(cpu: &mut CpuState, mem: &mut dyn Memory, mode: AddressingMode) {
    let v = read_operand(cpu, mem, mode);
    let ax = cpu.a & cpu.x;
    cpu.update_carry(ax >= v);
    execute::ldx(cpu, ax.wrapping_sub(v));
}

// ---------------------------------------------------------------------------
// High-byte stores
// ---------------------------------------------------------------------------

/// Store `value & (base_hi + 1)`. When indexing crosses a page, the target
/// high byte is corrupted to `hi & value`.
fn store_and_high(cpu: &mut CpuState, mem: &mut dyn Memory, mode: AddressingMode, value: u8) {
    let (base, index) = resolve_unindexed_base(cpu, mem, mode);
    let addr = base.wrapping_add(index as u16);
    let crossed = (base & 0xFF00) != (addr & 0xFF00);
    let [lo, mut hi] = addr.to_le_bytes();
    if crossed {
        hi &= value;
    }
    let stored = value & ((base >> 8) as u8).wrapping_add(1);
    mem.write(u16::from_le_bytes([lo, hi]), stored);
}

pub(crate) fn ahx(cpu: &mut CpuState, mem: &mut dyn Memory, mode: AddressingMode) {
    let value = cpu.a & cpu.x;
    store_and_high(cpu, mem, mode, value);
}

/// S = A & X, then store like AHX.
pub(crate) fn tas(cpu: &mut CpuState, mem: &mut dyn Memory, mode: AddressingMode) {
    let value = cpu.a & cpu.x;
    cpu.sp = value;
    store_and_high(cpu, mem, mode, value);
}

pub(crate) fn shy(cpu: &mut CpuState, mem: &mut dyn Memory, mode: AddressingMode) {
    let value = cpu.y;
    store_and_high(cpu, mem, mode, value);
}

pub(crate) fn shx(cpu: &mut CpuState, mem: &mut dyn Memory, mode: AddressingMode) {
    let value = cpu.x;
    store_and_high(cpu, mem, mode, value);
}

// ---------------------------------------------------------------------------
// Ignore policy
// ---------------------------------------------------------------------------

/// Stand-in used when undocumented opcodes are configured off: consume the
/// operand bytes and do nothing else.
pub(crate) fn skip(cpu: &mut CpuState, _mem: &mut dyn Memory, mode: AddressingMode) {
    cpu.advance_pc(mode.operand_len());
}

#[cfg(test)]
mod tests {
    use crate::cpu::state::Status;
    use crate::memory::Memory;
    use crate::test_utils::{PROGRAM_ORIGIN, setup};

    #[test]
    fn lax_loads_a_and_x() {
        // LAX $10
        let (mut cpu, mut mem) = setup(&[0xA7, 0x10]);
        mem.load(0x0010, 0x80);
        assert_eq!(cpu.tick(&mut mem), 3);
        assert_eq!(cpu.a(), 0x80);
        assert_eq!(cpu.x(), 0x80);
        assert!(cpu.flag(Status::NEGATIVE));
    }

    #[test]
    fn sax_stores_a_and_x_without_flags() {
        // LDA #$F0 ; LDX #$3C ; SAX $20
        let (mut cpu, mut mem) = setup(&[0xA9, 0xF0, 0xA2, 0x3C, 0x87, 0x20]);
        cpu.tick(&mut mem);
        cpu.tick(&mut mem);
        let p = cpu.status();
        assert_eq!(cpu.tick(&mut mem), 3);
        assert_eq!(mem.retrieve(0x0020), 0x30);
        assert_eq!(cpu.status(), p);
    }

    #[test]
    fn slo_shifts_memory_then_ors() {
        // LDA #$01 ; SLO $10 ($10 = $81)
        let (mut cpu, mut mem) = setup(&[0xA9, 0x01, 0x07, 0x10]);
        mem.load(0x0010, 0x81);
        cpu.tick(&mut mem);
        assert_eq!(cpu.tick(&mut mem), 5);
        assert_eq!(mem.retrieve(0x0010), 0x02);
        assert_eq!(cpu.a(), 0x03);
        assert!(cpu.flag(Status::CARRY));
    }

    #[test]
    fn rla_rotates_then_ands() {
        // SEC ; LDA #$FF ; RLA $10 ($10 = $40)
        let (mut cpu, mut mem) = setup(&[0x38, 0xA9, 0xFF, 0x27, 0x10]);
        mem.load(0x0010, 0x40);
        for _ in 0..3 {
            cpu.tick(&mut mem);
        }
        assert_eq!(mem.retrieve(0x0010), 0x81);
        assert_eq!(cpu.a(), 0x81);
        assert!(!cpu.flag(Status::CARRY));
    }

    #[test]
    fn sre_shifts_then_eors() {
        // LDA #$FF ; SRE $10 ($10 = $03)
        let (mut cpu, mut mem) = setup(&[0xA9, 0xFF, 0x47, 0x10]);
        mem.load(0x0010, 0x03);
        cpu.tick(&mut mem);
        cpu.tick(&mut mem);
        assert_eq!(mem.retrieve(0x0010), 0x01);
        assert_eq!(cpu.a(), 0xFE);
        assert!(cpu.flag(Status::CARRY));
    }

    #[test]
    fn rra_rotates_then_adds_with_carry_out() {
        // CLC ; LDA #$10 ; RRA $10 ($10 = $03 -> $01, C=1) ; A = $10 + $01 + 1
        let (mut cpu, mut mem) = setup(&[0x18, 0xA9, 0x10, 0x67, 0x10]);
        mem.load(0x0010, 0x03);
        for _ in 0..3 {
            cpu.tick(&mut mem);
        }
        assert_eq!(mem.retrieve(0x0010), 0x01);
        assert_eq!(cpu.a(), 0x12);
    }

    #[test]
    fn dcp_decrements_then_compares() {
        // LDA #$05 ; DCP $10 ($10 = $06)
        let (mut cpu, mut mem) = setup(&[0xA9, 0x05, 0xC7, 0x10]);
        mem.load(0x0010, 0x06);
        cpu.tick(&mut mem);
        cpu.tick(&mut mem);
        assert_eq!(mem.retrieve(0x0010), 0x05);
        assert!(cpu.flag(Status::ZERO));
        assert!(cpu.flag(Status::CARRY));
    }

    #[test]
    fn isc_increments_then_subtracts() {
        // SEC ; LDA #$10 ; ISC $10 ($10 = $04)
        let (mut cpu, mut mem) = setup(&[0x38, 0xA9, 0x10, 0xE7, 0x10]);
        mem.load(0x0010, 0x04);
        for _ in 0..3 {
            cpu.tick(&mut mem);
        }
        assert_eq!(mem.retrieve(0x0010), 0x05);
        assert_eq!(cpu.a(), 0x0B);
    }

    #[test]
    fn anc_copies_negative_into_carry() {
        // LDA #$FF ; ANC #$80
        let (mut cpu, mut mem) = setup(&[0xA9, 0xFF, 0x0B, 0x80]);
        cpu.tick(&mut mem);
        cpu.tick(&mut mem);
        assert_eq!(cpu.a(), 0x80);
        assert!(cpu.flag(Status::CARRY));
    }

    #[test]
    fn alr_ands_then_shifts() {
        // LDA #$FF ; ALR #$03
        let (mut cpu, mut mem) = setup(&[0xA9, 0xFF, 0x4B, 0x03]);
        cpu.tick(&mut mem);
        cpu.tick(&mut mem);
        assert_eq!(cpu.a(), 0x01);
        assert!(cpu.flag(Status::CARRY));
    }

    #[test]
    fn arr_flag_rules() {
        // SEC ; LDA #$FF ; ARR #$C0 -> A = ($C0 >> 1) | $80 = $E0
        let (mut cpu, mut mem) = setup(&[0x38, 0xA9, 0xFF, 0x6B, 0xC0]);
        for _ in 0..3 {
            cpu.tick(&mut mem);
        }
        assert_eq!(cpu.a(), 0xE0);
        assert!(cpu.flag(Status::CARRY)); // bit 6
        assert!(!cpu.flag(Status::OVERFLOW)); // bit 6 ^ bit 5
        assert!(cpu.flag(Status::NEGATIVE));
    }

    #[test]
    fn axs_subtracts_from_a_and_x() {
        // LDA #$0F ; LDX #$FF ; AXS #$05
        let (mut cpu, mut mem) = setup(&[0xA9, 0x0F, 0xA2, 0xFF, 0xCB, 0x05]);
        for _ in 0..3 {
            cpu.tick(&mut mem);
        }
        assert_eq!(cpu.x(), 0x0A);
        assert!(cpu.flag(Status::CARRY));
        assert_eq!(cpu.a(), 0x0F);
    }

    #[test]
    fn xaa_and_lxa() {
        // LDA #$11 ; LDX #$0F ; XAA #$FF ; LXA #$42
        let (mut cpu, mut mem) = setup(&[0xA9, 0x11, 0xA2, 0x0F, 0x8B, 0xFF, 0xAB, 0x42]);
        for _ in 0..3 {
            cpu.tick(&mut mem);
        }
        assert_eq!(cpu.a(), (0x11 | 0xEE) & 0x0F);
        cpu.tick(&mut mem);
        assert_eq!(cpu.a(), 0x42);
        assert_eq!(cpu.x(), 0x42);
    }

    #[test]
    fn las_ands_memory_with_stack_pointer() {
        // LAS $0200,Y ($0200 = $F3, S = $FD)
        let (mut cpu, mut mem) = setup(&[0xBB, 0x00, 0x02]);
        mem.load(0x0200, 0xF3);
        assert_eq!(cpu.tick(&mut mem), 4);
        assert_eq!(cpu.a(), 0xF1);
        assert_eq!(cpu.x(), 0xF1);
        assert_eq!(cpu.sp(), 0xF1);
    }

    #[test]
    fn shx_stores_x_and_high_plus_one() {
        // LDX #$FF ; SHX $0200,Y (Y = 0) -> $FF & $03
        let (mut cpu, mut mem) = setup(&[0xA2, 0xFF, 0x9E, 0x00, 0x02]);
        cpu.tick(&mut mem);
        assert_eq!(cpu.tick(&mut mem), 5);
        assert_eq!(mem.retrieve(0x0200), 0x03);
    }

    #[test]
    fn shy_page_cross_corrupts_high_byte() {
        // LDY #$01 ; LDX #$10 ; SHY $02FF,X -> target $030F
        let (mut cpu, mut mem) = setup(&[0xA0, 0x01, 0xA2, 0x10, 0x9C, 0xFF, 0x02]);
        for _ in 0..3 {
            cpu.tick(&mut mem);
        }
        // Y & ($02 + 1) = $01; high byte $03 & $01 = $01 -> $010F
        assert_eq!(mem.retrieve(0x010F), 0x01);
    }

    #[test]
    fn ahx_indirect_indexed_same_page() {
        // LDA #$3F ; LDX #$FF ; LDY #$05 ; AHX ($10),Y   ptr $0200 -> $0205
        let (mut cpu, mut mem) = setup(&[0xA9, 0x3F, 0xA2, 0xFF, 0xA0, 0x05, 0x93, 0x10]);
        mem.load(0x0010, 0x00);
        mem.load(0x0011, 0x02);
        for _ in 0..3 {
            cpu.tick(&mut mem);
        }
        assert_eq!(cpu.tick(&mut mem), 6);
        // A & X & ($02 + 1)
        assert_eq!(mem.retrieve(0x0205), 0x3F & 0xFF & 0x03);
        assert_eq!(cpu.pc(), PROGRAM_ORIGIN + 8);
    }

    #[test]
    fn ahx_indirect_indexed_page_cross_corrupts_high_byte() {
        // LDA #$FF ; LDX #$F1 ; LDY #$20 ; AHX ($10),Y   ptr $02F0 -> $0310
        let (mut cpu, mut mem) = setup(&[0xA9, 0xFF, 0xA2, 0xF1, 0xA0, 0x20, 0x93, 0x10]);
        mem.load(0x0010, 0xF0);
        mem.load(0x0011, 0x02);
        for _ in 0..3 {
            cpu.tick(&mut mem);
        }
        assert_eq!(cpu.tick(&mut mem), 6);
        // Value $F1 & ($02 + 1) = $01; high byte $03 & $F1 = $01 -> $0110
        assert_eq!(mem.retrieve(0x0110), 0x01);
        assert_eq!(mem.retrieve(0x0310), 0x00);
    }

    #[test]
    fn ahx_absolute_y_same_page() {
        // LDA #$FF ; LDX #$F1 ; LDY #$05 ; AHX $0400,Y -> $0405
        let (mut cpu, mut mem) = setup(&[0xA9, 0xFF, 0xA2, 0xF1, 0xA0, 0x05, 0x9F, 0x00, 0x04]);
        for _ in 0..3 {
            cpu.tick(&mut mem);
        }
        assert_eq!(cpu.tick(&mut mem), 5);
        // A & X & ($04 + 1)
        assert_eq!(mem.retrieve(0x0405), 0xF1 & 0x05);
    }

    #[test]
    fn ahx_absolute_y_page_cross_corrupts_high_byte() {
        // LDA #$FF ; LDX #$F3 ; LDY #$20 ; AHX $04F0,Y -> $0510
        let (mut cpu, mut mem) = setup(&[0xA9, 0xFF, 0xA2, 0xF3, 0xA0, 0x20, 0x9F, 0xF0, 0x04]);
        for _ in 0..3 {
            cpu.tick(&mut mem);
        }
        assert_eq!(cpu.tick(&mut mem), 5);
        // Value $F3 & ($04 + 1) = $01; high byte $05 & $F3 = $01 -> $0110
        assert_eq!(mem.retrieve(0x0110), 0x01);
        assert_eq!(mem.retrieve(0x0510), 0x00);
    }

    #[test]
    fn tas_sets_stack_pointer() {
        // LDA #$F0 ; LDX #$3F ; TAS $0200,Y
        let (mut cpu, mut mem) = setup(&[0xA9, 0xF0, 0xA2, 0x3F, 0x9B, 0x00, 0x02]);
        for _ in 0..3 {
            cpu.tick(&mut mem);
        }
        assert_eq!(cpu.sp(), 0x30);
        assert_eq!(mem.retrieve(0x0200), 0x30 & 0x03);
    }

    #[test]
    fn jam_parks_pc_and_repeats() {
        let (mut cpu, mut mem) = setup(&[0x02, 0xEA]);
        assert_eq!(cpu.tick(&mut mem), 2);
        assert!(cpu.is_jammed());
        assert_eq!(cpu.pc(), PROGRAM_ORIGIN);
        assert_eq!(cpu.tick(&mut mem), 2);
        assert_eq!(cpu.pc(), PROGRAM_ORIGIN);
    }
}
