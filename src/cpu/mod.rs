/*!
cpu::mod - Public façade for the 6502 CPU core.

Layout:

```text
    state.rs        - Architectural state (registers, flags, latches) + stack / fetch helpers.
    regs.rs         - 16-bit register wrapper and the register snapshot type.
    addressing.rs   - Addressing mode enum & operand resolution helpers.
    execute.rs      - Instruction semantic helpers (ALU, stack, RMW, branch).
    table.rs        - 256-entry opcode metadata & handler table.
    cycles.rs       - Base and page-cross cycle tables.
    dispatch/       - Orchestrates a single CPU step (NMI/IRQ + fetch/execute) and
                      holds the per-family handlers.
    disasm.rs       - One-instruction disassembler.
    core/           - `Cpu` facade and the memory-bound `Processor`.
```

The public surface is the `Cpu` facade (wrapping `CpuState`) and `Processor`.
Downstream code should not rely on internal module layout.

Feature flags:
    trace           - Disassemble and log every executed instruction on the
                      `g6502::trace` target.

Usage:
```rust
use g6502::cpu::Cpu;
use g6502::memory::FlatMemory;

let mut mem = FlatMemory::new();
mem.load_program(0x8000, &[0xA9, 0x01]).unwrap();
mem.set_reset_vector(0x8000);

let mut cpu = Cpu::new();
cpu.reset(&mut mem);
assert_eq!(cpu.tick(&mut mem), 2);
assert_eq!(cpu.a(), 0x01);
```
*/

pub mod addressing;
pub mod core;
pub mod cycles;
pub mod disasm;
pub mod dispatch;
pub mod execute;
pub mod regs;
pub mod state;
pub mod table;

pub use crate::cpu::addressing::AddressingMode;
pub use crate::cpu::core::{Cpu, CpuConfig, Processor, UnofficialOpcodes};
pub use crate::cpu::disasm::disassemble;
pub use crate::cpu::dispatch::{Step, StepEvent};
pub use crate::cpu::regs::{Register16, Registers};
pub use crate::cpu::state::{CpuState, Status};
pub use crate::cpu::table::{Instruction, OPCODES, instruction};
