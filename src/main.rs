use g6502::{Cpu, FlatMemory, Memory};

const ORIGIN: u16 = 0x8000;

fn build_demo_memory() -> FlatMemory {
    let mut mem = FlatMemory::new();

    // Program at $8000
    let program: &[u8] = &[
        0xA9, 0x10, // LDA #$10
        0x69, 0x05, // ADC #$05 => A = 0x15
        0x8D, 0x00, 0x02, // STA $0200
        0xE8, // INX
        0xD0, 0xFD, // BNE -3 -> loop until X wraps to 0
        0x02, // JAM
    ];
    mem.load_program(ORIGIN, program)
        .expect("demo program fits in memory");

    // Vectors (NMI, RESET, IRQ/BRK)
    mem.set_nmi_vector(ORIGIN);
    mem.set_reset_vector(ORIGIN);
    mem.set_irq_vector(ORIGIN);
    mem
}

fn main() {
    let mut mem = build_demo_memory();

    // Create CPU and reset using the reset vector
    let mut cpu = Cpu::new();
    cpu.reset(&mut mem);

    // Run in frame-sized slices until the program parks on its JAM (with a safety cap)
    let slice: u32 = 1_000;
    let max_cycles: u64 = 1_000_000;
    while !cpu.is_jammed() && cpu.total_cycles() < max_cycles {
        cpu.run_for(&mut mem, slice);
    }

    // Inspect state
    let m0200 = mem.read(0x0200);
    println!("cycles: {}", cpu.total_cycles());
    println!("A: 0x{:02X}", cpu.a());
    println!("X: 0x{:02X}", cpu.x());
    println!("Y: 0x{:02X}", cpu.y());
    println!("SP: 0x{:02X}", cpu.sp());
    println!("PC: 0x{:04X}", cpu.pc());
    println!("P (flags): 0b{:08b}", cpu.status().bits());
    println!("mem[0x0200]: 0x{:02X}", m0200);
}
