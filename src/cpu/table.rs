/*!
table.rs - Opcode table: one row per opcode byte (256 entries).

Purpose
=======
Maps every opcode to its mnemonic, addressing mode, documented/undocumented
status and a handler function pointer. The dispatcher fetches the opcode,
looks up the row, and calls `exec(cpu, mem, mode)`; cycle costs come from
`cycles::BASE_CYCLES` / `cycles::PAGE_CROSS_CYCLES` indexed by the same byte.

Design
------
- Table: `[Instruction; 256]` built in a `static` from `const fn` row
  constructors, so there is no lazy initialisation and no `Option` holes.
- `OpHandler = fn(&mut CpuState, &mut dyn Memory, AddressingMode)`.
- Handlers are grouped by family under `cpu::dispatch::*`.
- `official` is false for the 105 undocumented opcodes; the dispatcher uses
  it for the undocumented-opcode policy and diagnostics.
*/

use std::fmt;

use crate::cpu::addressing::AddressingMode::{self, *};
use crate::cpu::dispatch::{
    arithmetic, branches, compare, control_flow, load_store, logical, misc, rmw, unofficial,
};
use crate::cpu::state::CpuState;
use crate::memory::Memory;

pub(crate) type OpHandler = fn(&mut CpuState, &mut dyn Memory, AddressingMode);

/// Decoded metadata for one opcode byte.
#[derive(Clone, Copy)]
pub struct Instruction {
    pub mnemonic: &'static str,
    pub mode: AddressingMode,
    /// False for undocumented opcodes.
    pub official: bool,
    pub(crate) exec: OpHandler,
}

impl Instruction {
    /// Total encoded length in bytes (opcode + operand).
    pub const fn byte_len(&self) -> u16 {
        1 + self.mode.operand_len()
    }
}

impl fmt::Debug for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instruction")
            .field("mnemonic", &self.mnemonic)
            .field("mode", &self.mode)
            .field("official", &self.official)
            .finish_non_exhaustive()
    }
}

const fn doc(mnemonic: &'static str, mode: AddressingMode, exec: OpHandler) -> Instruction {
    Instruction {
        mnemonic,
        mode,
        official: true,
        exec,
    }
}

const fn und(mnemonic: &'static str, mode: AddressingMode, exec: OpHandler) -> Instruction {
    Instruction {
        mnemonic,
        mode,
        official: false,
        exec,
    }
}

/// Metadata for `opcode`.
#[inline]
pub fn instruction(opcode: u8) -> &'static Instruction {
    &OPCODES[opcode as usize]
}

// ------------------------------------------
// Dispatch Table (256 entries)
// ------------------------------------------

#[rustfmt::skip]
pub static OPCODES: [Instruction; 256] = [
    doc("BRK", Implied, control_flow::brk), // 00
    doc("ORA", IndexedIndirect, logical::ora), // 01
    und("JAM", Implied, unofficial::jam), // 02
    und("SLO", IndexedIndirect, unofficial::slo), // 03
    und("NOP", ZeroPage, misc::nop), // 04
    doc("ORA", ZeroPage, logical::ora), // 05
    doc("ASL", ZeroPage, rmw::asl), // 06
    und("SLO", ZeroPage, unofficial::slo), // 07
    doc("PHP", Implied, misc::php), // 08
    doc("ORA", Immediate, logical::ora), // 09
    doc("ASL", Accumulator, rmw::asl), // 0A
    und("ANC", Immediate, unofficial::anc), // 0B
    und("NOP", Absolute, misc::nop), // 0C
    doc("ORA", Absolute, logical::ora), // 0D
    doc("ASL", Absolute, rmw::asl), // 0E
    und("SLO", Absolute, unofficial::slo), // 0F
    doc("BPL", Relative, branches::bpl), // 10
    doc("ORA", IndirectIndexed, logical::ora), // 11
    und("JAM", Implied, unofficial::jam), // 12
    und("SLO", IndirectIndexed, unofficial::slo), // 13
    und("NOP", ZeroPageX, misc::nop), // 14
    doc("ORA", ZeroPageX, logical::ora), // 15
    doc("ASL", ZeroPageX, rmw::asl), // 16
    und("SLO", ZeroPageX, unofficial::slo), // 17
    doc("CLC", Implied, misc::clc), // 18
    doc("ORA", AbsoluteY, logical::ora), // 19
    und("NOP", Implied, misc::nop), // 1A
    und("SLO", AbsoluteY, unofficial::slo), // 1B
    und("NOP", AbsoluteX, misc::nop), // 1C
    doc("ORA", AbsoluteX, logical::ora), // 1D
    doc("ASL", AbsoluteX, rmw::asl), // 1E
    und("SLO", AbsoluteX, unofficial::slo), // 1F
    doc("JSR", Absolute, control_flow::jsr), // 20
    doc("AND", IndexedIndirect, logical::and), // 21
    und("JAM", Implied, unofficial::jam), // 22
    und("RLA", IndexedIndirect, unofficial::rla), // 23
    doc("BIT", ZeroPage, logical::bit), // 24
    doc("AND", ZeroPage, logical::and), // 25
    doc("ROL", ZeroPage, rmw::rol), // 26
    und("RLA", ZeroPage, unofficial::rla), // 27
    doc("PLP", Implied, misc::plp), // 28
    doc("AND", Immediate, logical::and), // 29
    doc("ROL", Accumulator, rmw::rol), // 2A
    und("ANC", Immediate, unofficial::anc), // 2B
    doc("BIT", Absolute, logical::bit), // 2C
    doc("AND", Absolute, logical::and), // 2D
    doc("ROL", Absolute, rmw::rol), // 2E
    und("RLA", Absolute, unofficial::rla), // 2F
    doc("BMI", Relative, branches::bmi), // 30
    doc("AND", IndirectIndexed, logical::and), // 31
    und("JAM", Implied, unofficial::jam), // 32
    und("RLA", IndirectIndexed, unofficial::rla), // 33
    und("NOP", ZeroPageX, misc::nop), // 34
    doc("AND", ZeroPageX, logical::and), // 35
    doc("ROL", ZeroPageX, rmw::rol), // 36
    und("RLA", ZeroPageX, unofficial::rla), // 37
    doc("SEC", Implied, misc::sec), // 38
    doc("AND", AbsoluteY, logical::and), // 39
    und("NOP", Implied, misc::nop), // 3A
    und("RLA", AbsoluteY, unofficial::rla), // 3B
    und("NOP", AbsoluteX, misc::nop), // 3C
    doc("AND", AbsoluteX, logical::and), // 3D
    doc("ROL", AbsoluteX, rmw::rol), // 3E
    und("RLA", AbsoluteX, unofficial::rla), // 3F
    doc("RTI", Implied, control_flow::rti), // 40
    doc("EOR", IndexedIndirect, logical::eor), // 41
    und("JAM", Implied, unofficial::jam), // 42
    und("SRE", IndexedIndirect, unofficial::sre), // 43
    und("NOP", ZeroPage, misc::nop), // 44
    doc("EOR", ZeroPage, logical::eor), // 45
    doc("LSR", ZeroPage, rmw::lsr), // 46
    und("SRE", ZeroPage, unofficial::sre), // 47
    doc("PHA", Implied, misc::pha), // 48
    doc("EOR", Immediate, logical::eor), // 49
    doc("LSR", Accumulator, rmw::lsr), // 4A
    und("ALR", Immediate, unofficial::alr), // 4B
    doc("JMP", Absolute, control_flow::jmp), // 4C
    doc("EOR", Absolute, logical::eor), // 4D
    doc("LSR", Absolute, rmw::lsr), // 4E
    und("SRE", Absolute, unofficial::sre), // 4F
    doc("BVC", Relative, branches::bvc), // 50
    doc("EOR", IndirectIndexed, logical::eor), // 51
    und("JAM", Implied, unofficial::jam), // 52
    und("SRE", IndirectIndexed, unofficial::sre), // 53
    und("NOP", ZeroPageX, misc::nop), // 54
    doc("EOR", ZeroPageX, logical::eor), // 55
    doc("LSR", ZeroPageX, rmw::lsr), // 56
    und("SRE", ZeroPageX, unofficial::sre), // 57
    doc("CLI", Implied, misc::cli), // 58
    doc("EOR", AbsoluteY, logical::eor), // 59
    und("NOP", Implied, misc::nop), // 5A
    und("SRE", AbsoluteY, unofficial::sre), // 5B
    und("NOP", AbsoluteX, misc::nop), // 5C
    doc("EOR", AbsoluteX, logical::eor), // 5D
    doc("LSR", AbsoluteX, rmw::lsr), // 5E
    und("SRE", AbsoluteX, unofficial::sre), // 5F
    doc("RTS", Implied, control_flow::rts), // 60
    doc("ADC", IndexedIndirect, arithmetic::adc), // 61
    und("JAM", Implied, unofficial::jam), // 62
    und("RRA", IndexedIndirect, unofficial::rra), // 63
    und("NOP", ZeroPage, misc::nop), // 64
    doc("ADC", ZeroPage, arithmetic::adc), // 65
    doc("ROR", ZeroPage, rmw::ror), // 66
    und("RRA", ZeroPage, unofficial::rra), // 67
    doc("PLA", Implied, misc::pla), // 68
    doc("ADC", Immediate, arithmetic::adc), // 69
    doc("ROR", Accumulator, rmw::ror), // 6A
    und("ARR", Immediate, unofficial::arr), // 6B
    doc("JMP", Indirect, control_flow::jmp), // 6C
    doc("ADC", Absolute, arithmetic::adc), // 6D
    doc("ROR", Absolute, rmw::ror), // 6E
    und("RRA", Absolute, unofficial::rra), // 6F
    doc("BVS", Relative, branches::bvs), // 70
    doc("ADC", IndirectIndexed, arithmetic::adc), // 71
    und("JAM", Implied, unofficial::jam), // 72
    und("RRA", IndirectIndexed, unofficial::rra), // 73
    und("NOP", ZeroPageX, misc::nop), // 74
    doc("ADC", ZeroPageX, arithmetic::adc), // 75
    doc("ROR", ZeroPageX, rmw::ror), // 76
    und("RRA", ZeroPageX, unofficial::rra), // 77
    doc("SEI", Implied, misc::sei), // 78
    doc("ADC", AbsoluteY, arithmetic::adc), // 79
    und("NOP", Implied, misc::nop), // 7A
    und("RRA", AbsoluteY, unofficial::rra), // 7B
    und("NOP", AbsoluteX, misc::nop), // 7C
    doc("ADC", AbsoluteX, arithmetic::adc), // 7D
    doc("ROR", AbsoluteX, rmw::ror), // 7E
    und("RRA", AbsoluteX, unofficial::rra), // 7F
    und("NOP", Immediate, misc::nop), // 80
    doc("STA", IndexedIndirect, load_store::sta), // 81
    und("NOP", Immediate, misc::nop), // 82
    und("SAX", IndexedIndirect, unofficial::sax), // 83
    doc("STY", ZeroPage, load_store::sty), // 84
    doc("STA", ZeroPage, load_store::sta), // 85
    doc("STX", ZeroPage, load_store::stx), // 86
    und("SAX", ZeroPage, unofficial::sax), // 87
    doc("DEY", Implied, misc::dey), // 88
    und("NOP", Immediate, misc::nop), // 89
    doc("TXA", Implied, misc::txa), // 8A
    und("XAA", Immediate, unofficial::xaa), // 8B
    doc("STY", Absolute, load_store::sty), // 8C
    doc("STA", Absolute, load_store::sta), // 8D
    doc("STX", Absolute, load_store::stx), // 8E
    und("SAX", Absolute, unofficial::sax), // 8F
    doc("BCC", Relative, branches::bcc), // 90
    doc("STA", IndirectIndexed, load_store::sta), // 91
    und("JAM", Implied, unofficial::jam), // 92
    und("AHX", IndirectIndexed, unofficial::ahx), // 93
    doc("STY", ZeroPageX, load_store::sty), // 94
    doc("STA", ZeroPageX, load_store::sta), // 95
    doc("STX", ZeroPageY, load_store::stx), // 96
    und("SAX", ZeroPageY, unofficial::sax), // 97
    doc("TYA", Implied, misc::tya), // 98
    doc("STA", AbsoluteY, load_store::sta), // 99
    doc("TXS", Implied, misc::txs), // 9A
    und("TAS", AbsoluteY, unofficial::tas), // 9B
    und("SHY", AbsoluteX, unofficial::shy), // 9C
    doc("STA", AbsoluteX, load_store::sta), // 9D
    und("SHX", AbsoluteY, unofficial::shx), // 9E
    und("AHX", AbsoluteY, unofficial::ahx), // 9F
    doc("LDY", Immediate, load_store::ldy), // A0
    doc("LDA", IndexedIndirect, load_store::lda), // A1
    doc("LDX", Immediate, load_store::ldx), // A2
    und("LAX", IndexedIndirect, unofficial::lax), // A3
    doc("LDY", ZeroPage, load_store::ldy), // A4
    doc("LDA", ZeroPage, load_store::lda), // A5
    doc("LDX", ZeroPage, load_store::ldx), // A6
    und("LAX", ZeroPage, unofficial::lax), // A7
    doc("TAY", Implied, misc::tay), // A8
    doc("LDA", Immediate, load_store::lda), // A9
    doc("TAX", Implied, misc::tax), // AA
    und("LXA", Immediate, unofficial::lxa), // AB
    doc("LDY", Absolute, load_store::ldy), // AC
    doc("LDA", Absolute, load_store::lda), // AD
    doc("LDX", Absolute, load_store::ldx), // AE
    und("LAX", Absolute, unofficial::lax), // AF
    doc("BCS", Relative, branches::bcs), // B0
    doc("LDA", IndirectIndexed, load_store::lda), // B1
    und("JAM", Implied, unofficial::jam), // B2
    und("LAX", IndirectIndexed, unofficial::lax), // B3
    doc("LDY", ZeroPageX, load_store::ldy), // B4
    doc("LDA", ZeroPageX, load_store::lda), // B5
    doc("LDX", ZeroPageY, load_store::ldx), // B6
    und("LAX", ZeroPageY, unofficial::lax), // B7
    doc("CLV", Implied, misc::clv), // B8
    doc("LDA", AbsoluteY, load_store::lda), // B9
    doc("TSX", Implied, misc::tsx), // BA
    und("LAS", AbsoluteY, unofficial::las), // BB
    doc("LDY", AbsoluteX, load_store::ldy), // BC
    doc("LDA", AbsoluteX, load_store::lda), // BD
    doc("LDX", AbsoluteY, load_store::ldx), // BE
    und("LAX", AbsoluteY, unofficial::lax), // BF
    doc("CPY", Immediate, compare::cpy), // C0
    doc("CMP", IndexedIndirect, compare::cmp), // C1
    und("NOP", Immediate, misc::nop), // C2
    und("DCP", IndexedIndirect, unofficial::dcp), // C3
    doc("CPY", ZeroPage, compare::cpy), // C4
    doc("CMP", ZeroPage, compare::cmp), // C5
    doc("DEC", ZeroPage, rmw::dec), // C6
    und("DCP", ZeroPage, unofficial::dcp), // C7
    doc("INY", Implied, misc::iny), // C8
    doc("CMP", Immediate, compare::cmp), // C9
    doc("DEX", Implied, misc::dex), // CA
    und("AXS", Immediate, unofficial::axs), // CB
    doc("CPY", Absolute, compare::cpy), // CC
    doc("CMP", Absolute, compare::cmp), // CD
    doc("DEC", Absolute, rmw::dec), // CE
    und("DCP", Absolute, unofficial::dcp), // CF
    doc("BNE", Relative, branches::bne), // D0
    doc("CMP", IndirectIndexed, compare::cmp), // D1
    und("JAM", Implied, unofficial::jam), // D2
    und("DCP", IndirectIndexed, unofficial::dcp), // D3
    und("NOP", ZeroPageX, misc::nop), // D4
    doc("CMP", ZeroPageX, compare::cmp), // D5
    doc("DEC", ZeroPageX, rmw::dec), // D6
    und("DCP", ZeroPageX, unofficial::dcp), // D7
    doc("CLD", Implied, misc::cld), // D8
    doc("CMP", AbsoluteY, compare::cmp), // D9
    und("NOP", Implied, misc::nop), // DA
    und("DCP", AbsoluteY, unofficial::dcp), // DB
    und("NOP", AbsoluteX, misc::nop), // DC
    doc("CMP", AbsoluteX, compare::cmp), // DD
    doc("DEC", AbsoluteX, rmw::dec), // DE
    und("DCP", AbsoluteX, unofficial::dcp), // DF
    doc("CPX", Immediate, compare::cpx), // E0
    doc("SBC", IndexedIndirect, arithmetic::sbc), // E1
    und("NOP", Immediate, misc::nop), // E2
    und("ISC", IndexedIndirect, unofficial::isc), // E3
    doc("CPX", ZeroPage, compare::cpx), // E4
    doc("SBC", ZeroPage, arithmetic::sbc), // E5
    doc("INC", ZeroPage, rmw::inc), // E6
    und("ISC", ZeroPage, unofficial::isc), // E7
    doc("INX", Implied, misc::inx), // E8
    doc("SBC", Immediate, arithmetic::sbc), // E9
    doc("NOP", Implied, misc::nop), // EA
    und("SBC", Immediate, arithmetic::sbc), // EB
    doc("CPX", Absolute, compare::cpx), // EC
    doc("SBC", Absolute, arithmetic::sbc), // ED
    doc("INC", Absolute, rmw::inc), // EE
    und("ISC", Absolute, unofficial::isc), // EF
    doc("BEQ", Relative, branches::beq), // F0
    doc("SBC", IndirectIndexed, arithmetic::sbc), // F1
    und("JAM", Implied, unofficial::jam), // F2
    und("ISC", IndirectIndexed, unofficial::isc), // F3
    und("NOP", ZeroPageX, misc::nop), // F4
    doc("SBC", ZeroPageX, arithmetic::sbc), // F5
    doc("INC", ZeroPageX, rmw::inc), // F6
    und("ISC", ZeroPageX, unofficial::isc), // F7
    doc("SED", Implied, misc::sed), // F8
    doc("SBC", AbsoluteY, arithmetic::sbc), // F9
    und("NOP", Implied, misc::nop), // FA
    und("ISC", AbsoluteY, unofficial::isc), // FB
    und("NOP", AbsoluteX, misc::nop), // FC
    doc("SBC", AbsoluteX, arithmetic::sbc), // FD
    doc("INC", AbsoluteX, rmw::inc), // FE
    und("ISC", AbsoluteX, unofficial::isc), // FF
];
