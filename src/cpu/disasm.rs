/*!
disasm.rs - One-instruction disassembler.

Reads through `Memory::retrieve`, so disassembling never triggers device side
effects. Output uses conventional 6502 assembler syntax; undocumented
opcodes are printed with their common mnemonics.
*/

use crate::cpu::addressing::AddressingMode;
use crate::cpu::table::instruction;
use crate::memory::Memory;

/// Disassemble the instruction at `address`.
///
/// Returns the text and the instruction's length in bytes.
pub fn disassemble(mem: &mut dyn Memory, address: u16) -> (String, u16) {
    let opcode = mem.retrieve(address);
    let instr = instruction(opcode);
    let b1 = mem.retrieve(address.wrapping_add(1));
    let b2 = mem.retrieve(address.wrapping_add(2));
    let word = u16::from_le_bytes([b1, b2]);
    let name = instr.mnemonic;

    let text = match instr.mode {
        AddressingMode::Implied => name.to_string(),
        AddressingMode::Accumulator => format!("{name} A"),
        AddressingMode::Immediate => format!("{name} #${b1:02X}"),
        AddressingMode::ZeroPage => format!("{name} ${b1:02X}"),
        AddressingMode::ZeroPageX => format!("{name} ${b1:02X},X"),
        AddressingMode::ZeroPageY => format!("{name} ${b1:02X},Y"),
        AddressingMode::Relative => {
            let target = address.wrapping_add(2).wrapping_add(b1 as i8 as u16);
            format!("{name} ${target:04X}")
        }
        AddressingMode::Absolute => format!("{name} ${word:04X}"),
        AddressingMode::AbsoluteX => format!("{name} ${word:04X},X"),
        AddressingMode::AbsoluteY => format!("{name} ${word:04X},Y"),
        AddressingMode::Indirect => format!("{name} (${word:04X})"),
        AddressingMode::IndexedIndirect => format!("{name} (${b1:02X},X)"),
        AddressingMode::IndirectIndexed => format!("{name} (${b1:02X}),Y"),
    };

    (text, instr.byte_len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::FlatMemory;

    fn disasm_bytes(bytes: &[u8]) -> (String, u16) {
        let mut mem = FlatMemory::new();
        mem.load_program(0x8000, bytes).unwrap();
        disassemble(&mut mem, 0x8000)
    }

    #[test]
    fn formats_every_mode() {
        assert_eq!(disasm_bytes(&[0xEA]), ("NOP".to_string(), 1));
        assert_eq!(disasm_bytes(&[0x0A]).0, "ASL A");
        assert_eq!(disasm_bytes(&[0xA9, 0x42]), ("LDA #$42".to_string(), 2));
        assert_eq!(disasm_bytes(&[0xA5, 0x10]).0, "LDA $10");
        assert_eq!(disasm_bytes(&[0xB5, 0x10]).0, "LDA $10,X");
        assert_eq!(disasm_bytes(&[0xB6, 0x10]).0, "LDX $10,Y");
        assert_eq!(disasm_bytes(&[0xAD, 0x34, 0x12]), ("LDA $1234".to_string(), 3));
        assert_eq!(disasm_bytes(&[0xBD, 0x34, 0x12]).0, "LDA $1234,X");
        assert_eq!(disasm_bytes(&[0xB9, 0x34, 0x12]).0, "LDA $1234,Y");
        assert_eq!(disasm_bytes(&[0x6C, 0xFC, 0xFF]).0, "JMP ($FFFC)");
        assert_eq!(disasm_bytes(&[0xA1, 0x20]).0, "LDA ($20,X)");
        assert_eq!(disasm_bytes(&[0xB1, 0x20]).0, "LDA ($20),Y");
    }

    #[test]
    fn relative_shows_target() {
        assert_eq!(disasm_bytes(&[0xD0, 0xFE]).0, "BNE $8000");
        assert_eq!(disasm_bytes(&[0xF0, 0x10]).0, "BEQ $8012");
    }

    #[test]
    fn undocumented_mnemonics() {
        assert_eq!(disasm_bytes(&[0xA7, 0x10]).0, "LAX $10");
        assert_eq!(disasm_bytes(&[0x02]).0, "JAM");
    }

    #[test]
    fn does_not_count_as_cpu_access() {
        let mut mem = FlatMemory::new();
        mem.load_program(0x8000, &[0xAD, 0x00, 0x20]).unwrap();
        disassemble(&mut mem, 0x8000);
        assert_eq!(mem.reads(), 0);
    }
}
