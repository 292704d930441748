//! Disassembly hook coverage; only meaningful with the `trace` feature.
#![cfg(feature = "trace")]

use g6502::{Cpu, FlatMemory};

#[test]
fn executed_instructions_are_recorded() {
    let mut mem = FlatMemory::new();
    mem.load_program(0x8000, &[0xA9, 0x42, 0xBD, 0x34, 0x12, 0xEA])
        .unwrap();
    mem.set_reset_vector(0x8000);
    let mut cpu = Cpu::new();
    cpu.reset(&mut mem);
    let reads_before = mem.reads();
    cpu.run_for(&mut mem, 6);
    assert_eq!(mem.disassembly(0x8000), Some("LDA #$42"));
    assert_eq!(mem.disassembly(0x8002), Some("LDA $1234,X"));
    assert_eq!(mem.disassembly(0x8005), None);
    // Tracing reads through `retrieve`, so only CPU fetches are counted.
    assert_eq!(mem.reads() - reads_before, 2 + 4);
}
