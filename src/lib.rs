#![doc = r#"
g6502 library crate.

A cycle-counted NMOS 6502 CPU core with pluggable memory.

Modules:
- cpu: 6502 CPU core (facade + state + dispatch + execute modules)
- memory: `Memory` trait the core drives, plus a flat 64 KiB implementation

The host owns the memory and hands it to the CPU on every call (`Cpu`) or
binds it once (`Processor`). Each `tick` runs one instruction or one
interrupt entry and returns the cycles it cost.

In tests, program loaders are available under `crate::test_utils`.
"#]

pub mod cpu;
pub mod memory;

// Re-export commonly used types at the crate root for convenience.
pub use cpu::{Cpu, CpuConfig, Processor, Status, UnofficialOpcodes};
pub use memory::{FlatMemory, Memory};

// Shared test utilities (only compiled for tests)
#[cfg(test)]
pub mod test_utils;
