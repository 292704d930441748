/*!
memory.rs - Memory access capability consumed by the 6502 core.

Overview
========
The processor core never owns or decodes the address space. Every byte it
touches goes through a `Memory` implementation supplied by the host (a system
bus, a mapper front-end, or the flat RAM below). The core treats every call as
infallible; out-of-range handling, mirroring and side effects are the host's
business.

Hooks
=====
- `retrieve` / `load` are side-effect-free variants used by debug tooling
  (the disassembler). They default to `read` / `write` for plain RAM.
- `mark_disassembled` / `is_disassembled` let the core record instruction text
  per address when the `trace` feature is enabled. They are advisory and never
  influence execution.

`FlatMemory` is a 64 KiB RAM image with no mapping logic. It backs the demo
binary and the test suite.
*/

use std::collections::HashMap;

/// Byte-addressed memory as seen by the CPU.
pub trait Memory {
    /// Read a byte (may trigger device side effects).
    fn read(&mut self, address: u16) -> u8;

    /// Write a byte (may trigger device side effects).
    fn write(&mut self, address: u16, value: u8);

    /// Side-effect-free read for debuggers and disassembly.
    fn retrieve(&mut self, address: u16) -> u8 {
        self.read(address)
    }

    /// Side-effect-free write for loaders and debuggers.
    fn load(&mut self, address: u16, value: u8) {
        self.write(address, value);
    }

    /// Record the disassembled text of the instruction starting at `address`.
    fn mark_disassembled(&mut self, _address: u16, _text: &str) {}

    /// True when `address` already carries disassembly text.
    fn is_disassembled(&self, _address: u16) -> bool {
        false
    }

    /// Little-endian word read (low byte first). Used for vector fetches.
    #[inline]
    fn read_word(&mut self, address: u16) -> u16 {
        let lo = self.read(address) as u16;
        let hi = self.read(address.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }
}

/// Size of the full 16-bit address space.
pub const ADDRESS_SPACE: usize = 0x1_0000;

pub const NMI_VECTOR: u16 = 0xFFFA;
pub const RESET_VECTOR: u16 = 0xFFFC;
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// Flat 64 KiB RAM with a per-address disassembly record.
#[derive(Debug, Clone)]
pub struct FlatMemory {
    data: Vec<u8>,
    disassembly: HashMap<u16, String>,
    reads: u64,
    writes: u64,
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl FlatMemory {
    /// Create a zero-filled address space.
    pub fn new() -> Self {
        Self {
            data: vec![0; ADDRESS_SPACE],
            disassembly: HashMap::new(),
            reads: 0,
            writes: 0,
        }
    }

    /// Copy `bytes` into memory starting at `origin`.
    ///
    /// Fails without writing anything when the image would run past $FFFF.
    pub fn load_program(&mut self, origin: u16, bytes: &[u8]) -> Result<(), String> {
        let start = origin as usize;
        let end = start + bytes.len();
        if end > ADDRESS_SPACE {
            return Err(format!(
                "program of {} bytes at ${:04X} overruns the address space by {} bytes",
                bytes.len(),
                origin,
                end - ADDRESS_SPACE
            ));
        }
        self.data[start..end].copy_from_slice(bytes);
        Ok(())
    }

    fn set_vector(&mut self, vector: u16, target: u16) {
        let [lo, hi] = target.to_le_bytes();
        self.data[vector as usize] = lo;
        self.data[vector.wrapping_add(1) as usize] = hi;
    }

    pub fn set_reset_vector(&mut self, target: u16) {
        self.set_vector(RESET_VECTOR, target);
    }

    pub fn set_nmi_vector(&mut self, target: u16) {
        self.set_vector(NMI_VECTOR, target);
    }

    pub fn set_irq_vector(&mut self, target: u16) {
        self.set_vector(IRQ_VECTOR, target);
    }

    /// Disassembly text recorded for `address`, if any.
    pub fn disassembly(&self, address: u16) -> Option<&str> {
        self.disassembly.get(&address).map(String::as_str)
    }

    /// Number of CPU-visible reads since construction.
    pub fn reads(&self) -> u64 {
        self.reads
    }

    /// Number of CPU-visible writes since construction.
    pub fn writes(&self) -> u64 {
        self.writes
    }

    /// Direct view of the backing bytes.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }
}

impl Memory for FlatMemory {
    #[inline]
    fn read(&mut self, address: u16) -> u8 {
        self.reads += 1;
        self.data[address as usize]
    }

    #[inline]
    fn write(&mut self, address: u16, value: u8) {
        self.writes += 1;
        self.data[address as usize] = value;
    }

    fn retrieve(&mut self, address: u16) -> u8 {
        self.data[address as usize]
    }

    fn load(&mut self, address: u16, value: u8) {
        self.data[address as usize] = value;
    }

    fn mark_disassembled(&mut self, address: u16, text: &str) {
        self.disassembly.insert(address, text.to_owned());
    }

    fn is_disassembled(&self, address: u16) -> bool {
        self.disassembly.contains_key(&address)
    }
}
