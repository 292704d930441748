/*!
core - `Cpu` facade wrapping `CpuState`, and the memory-bound `Processor`.

Design
======
- `Cpu` owns the architectural state, the run configuration and running
  counters. Memory is passed per call (`&mut dyn Memory`), so one host bus
  can be shared with other devices between ticks.
- `Processor` binds a `Cpu` to one memory for its whole lifetime and offers
  the same operations without the memory argument.
- `tick` executes exactly one instruction or one interrupt entry and
  returns the cycles it cost. `run_for` ticks until at least the requested
  number of cycles has elapsed; the overshoot is at most one instruction.

Interrupts
==========
- `request_irq(true/false)` drives the level-sensitive IRQ line. It stays
  asserted until the host releases it.
- `request_nmi()` latches one NMI; the next tick consumes it. NMI wins over
  IRQ when both are pending.

Logging
=======
- `g6502::cpu`        reset (debug), interrupt entry (trace)
- `g6502::unofficial` each undocumented opcode executed (debug), JAM (warn)
*/

use crate::cpu::dispatch::{self, Step, StepEvent};
use crate::cpu::regs::Registers;
use crate::cpu::state::{CpuState, Status};
use crate::cpu::table::instruction;
use crate::memory::Memory;

/// What to do with the 105 undocumented NMOS opcodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnofficialOpcodes {
    /// Execute them with their NMOS behaviour.
    #[default]
    Emulate,
    /// Treat them as NOPs of the same length and base cost.
    Ignore,
}

/// Run configuration for a `Cpu`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CpuConfig {
    pub unofficial: UnofficialOpcodes,
}

impl CpuConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_unofficial(mut self, policy: UnofficialOpcodes) -> Self {
        self.unofficial = policy;
        self
    }
}

#[derive(Debug, Clone)]
pub struct Cpu {
    state: CpuState,
    config: CpuConfig,
    total_cycles: u64,
    unofficial_executed: u64,
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu {
    /// Construct a new CPU with power-up defaults.
    pub fn new() -> Self {
        Self::with_config(CpuConfig::default())
    }

    pub fn with_config(config: CpuConfig) -> Self {
        Self {
            state: CpuState::new(),
            config,
            total_cycles: 0,
            unofficial_executed: 0,
        }
    }

    pub fn config(&self) -> CpuConfig {
        self.config
    }

    pub fn set_config(&mut self, config: CpuConfig) {
        self.config = config;
    }

    /// Return immutable reference to internal state (for inspection / testing).
    pub fn state(&self) -> &CpuState {
        &self.state
    }

    /// Return mutable reference to internal state.
    pub fn state_mut(&mut self) -> &mut CpuState {
        &mut self.state
    }

    /// Reset registers, latches and counters, then load PC from the reset vector.
    pub fn reset(&mut self, mem: &mut dyn Memory) {
        self.state.reset(mem);
        self.total_cycles = 0;
        self.unofficial_executed = 0;
        log::debug!(target: "g6502::cpu", "reset: PC=${:04X}", self.state.pc());
    }

    // ---------------------------------------------------------------------
    // Execution
    // ---------------------------------------------------------------------

    /// Execute one instruction or interrupt entry; return its cycle cost.
    pub fn tick(&mut self, mem: &mut dyn Memory) -> u32 {
        self.step(mem).cycles
    }

    /// Like `tick`, but report what happened as well.
    pub fn step(&mut self, mem: &mut dyn Memory) -> Step {
        let step = dispatch::step(&mut self.state, mem, self.config.unofficial);
        self.total_cycles += step.cycles as u64;
        match step.event {
            StepEvent::Instruction {
                opcode,
                address,
                official: false,
            } => {
                self.unofficial_executed += 1;
                if log::log_enabled!(target: "g6502::unofficial", log::Level::Debug) {
                    let verb = match self.config.unofficial {
                        UnofficialOpcodes::Emulate => "executed",
                        UnofficialOpcodes::Ignore => "ignored",
                    };
                    log::debug!(
                        target: "g6502::unofficial",
                        "{verb} ${opcode:02X} ({}) at ${address:04X}",
                        instruction(opcode).mnemonic,
                    );
                }
            }
            StepEvent::Nmi => {
                log::trace!(target: "g6502::cpu", "NMI -> ${:04X}", self.state.pc());
            }
            StepEvent::Irq => {
                log::trace!(target: "g6502::cpu", "IRQ -> ${:04X}", self.state.pc());
            }
            StepEvent::Instruction { .. } => {}
        }
        step
    }

    /// Tick until at least `cycles` cycles have elapsed; return the actual count.
    ///
    /// The count saturates at `u32::MAX`.
    pub fn run_for(&mut self, mem: &mut dyn Memory, cycles: u32) -> u32 {
        self.run_until(mem, 0, cycles)
    }

    fn run_until(&mut self, mem: &mut dyn Memory, mut count: u32, target: u32) -> u32 {
        while count < target {
            count = count.saturating_add(self.tick(mem));
        }
        count
    }

    // ---------------------------------------------------------------------
    // Interrupt lines
    // ---------------------------------------------------------------------

    /// Drive the IRQ line. Serviced on a tick boundary while asserted and
    /// IRQ_DISABLE is clear.
    pub fn request_irq(&mut self, asserted: bool) {
        self.state.irq_line = asserted;
    }

    /// Latch an NMI for the next tick.
    pub fn request_nmi(&mut self) {
        self.state.nmi_pending = true;
    }

    pub fn irq_asserted(&self) -> bool {
        self.state.irq_line
    }

    pub fn nmi_pending(&self) -> bool {
        self.state.nmi_pending
    }

    /// True after a JAM opcode until reset or interrupt entry.
    pub fn is_jammed(&self) -> bool {
        self.state.jammed
    }

    /// Cycles consumed since the last reset.
    pub fn total_cycles(&self) -> u64 {
        self.total_cycles
    }

    /// Undocumented opcodes encountered since the last reset.
    pub fn unofficial_executed(&self) -> u64 {
        self.unofficial_executed
    }

    // ---------------------------------------------------------------------
    // Register accessors (read)
    // ---------------------------------------------------------------------
    pub fn a(&self) -> u8 {
        self.state.a
    }
    pub fn x(&self) -> u8 {
        self.state.x
    }
    pub fn y(&self) -> u8 {
        self.state.y
    }
    pub fn sp(&self) -> u8 {
        self.state.sp
    }
    pub fn pc(&self) -> u16 {
        self.state.pc()
    }
    pub fn status(&self) -> Status {
        self.state.status
    }
    pub fn registers(&self) -> Registers {
        self.state.registers()
    }

    // ---------------------------------------------------------------------
    // Register mutators (write)
    // ---------------------------------------------------------------------
    pub fn set_a(&mut self, v: u8) {
        self.state.a = v;
    }
    pub fn set_x(&mut self, v: u8) {
        self.state.x = v;
    }
    pub fn set_y(&mut self, v: u8) {
        self.state.y = v;
    }
    pub fn set_sp(&mut self, v: u8) {
        self.state.sp = v;
    }
    pub fn set_pc(&mut self, v: u16) {
        self.state.set_pc(v);
    }
    pub fn set_status(&mut self, v: Status) {
        self.state.status = v;
    }

    // ---------------------------------------------------------------------
    // Flag helpers
    // ---------------------------------------------------------------------
    pub fn flag(&self, flag: Status) -> bool {
        self.state.flag(flag)
    }

    pub fn set_flag(&mut self, flag: Status, on: bool) {
        self.state.assign_flag(flag, on);
    }
}

/// A `Cpu` bound to one memory for its lifetime.
pub struct Processor<'m> {
    cpu: Cpu,
    memory: &'m mut dyn Memory,
}

impl<'m> Processor<'m> {
    /// Bind to `memory`. The processor is not reset; call `reset` before the
    /// first `tick`.
    pub fn init(memory: &'m mut dyn Memory) -> Self {
        Self::with_config(memory, CpuConfig::default())
    }

    pub fn with_config(memory: &'m mut dyn Memory, config: CpuConfig) -> Self {
        Self {
            cpu: Cpu::with_config(config),
            memory,
        }
    }

    pub fn reset(&mut self) {
        self.cpu.reset(&mut *self.memory);
    }

    pub fn tick(&mut self) -> u32 {
        self.cpu.tick(&mut *self.memory)
    }

    pub fn step(&mut self) -> Step {
        self.cpu.step(&mut *self.memory)
    }

    pub fn run_for(&mut self, cycles: u32) -> u32 {
        self.cpu.run_for(&mut *self.memory, cycles)
    }

    pub fn request_irq(&mut self, asserted: bool) {
        self.cpu.request_irq(asserted);
    }

    pub fn request_nmi(&mut self) {
        self.cpu.request_nmi();
    }

    pub fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    pub fn cpu_mut(&mut self) -> &mut Cpu {
        &mut self.cpu
    }

    pub fn memory(&self) -> &(dyn Memory + 'm) {
        &*self.memory
    }

    pub fn memory_mut(&mut self) -> &mut (dyn Memory + 'm) {
        &mut *self.memory
    }

    /// Release the memory borrow, keeping the processor state.
    pub fn into_cpu(self) -> Cpu {
        self.cpu
    }
}

// -------------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------------
