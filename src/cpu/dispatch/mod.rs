/*!
dispatch - Orchestrator for a single 6502 CPU step (interrupts / fetch / execute / timing)

Overview
========
Coordinates a single CPU step:
1. Services a pending NMI (edge latch, consumed here).
2. Otherwise services IRQ when the line is asserted and IRQ_DISABLE is clear.
3. Otherwise fetches one opcode, looks it up in `table::OPCODES`, runs the
   handler, and prices it from the cycle tables:
       base + (page_crossed ? page_cross_bonus : 0) + (branch_taken ? 1 : 0)

Interrupt entry pushes PC (high, low), clears BREAK in P, pushes P, sets
IRQ_DISABLE and loads PC from the vector. It costs 7 cycles and also releases
a jammed processor.

Family handlers
===============
```text
    arithmetic    ADC / SBC
    branches      Bxx
    compare       CMP / CPX / CPY
    control_flow  JMP / JSR / RTS / RTI / BRK
    load_store    LDA / LDX / LDY / STA / STX / STY
    logical       AND / ORA / EOR / BIT
    misc          transfers, stack, flags, index step, NOP
    rmw           ASL / LSR / ROL / ROR / INC / DEC
    unofficial    undocumented opcodes
```

Tracing
=======
With the `trace` feature enabled, every fetched instruction is disassembled
(side-effect-free reads), recorded through `Memory::mark_disassembled` the
first time its address is seen, and logged on the `g6502::trace` target.
*/

pub(crate) mod arithmetic;
pub(crate) mod branches;
pub(crate) mod compare;
pub(crate) mod control_flow;
pub(crate) mod load_store;
pub(crate) mod logical;
pub(crate) mod misc;
pub(crate) mod rmw;
pub(crate) mod unofficial;

use crate::cpu::core::UnofficialOpcodes;
use crate::cpu::cycles::{INTERRUPT_CYCLES, base_cycles, page_cross_cycles};
use crate::cpu::execute::php;
use crate::cpu::state::{CpuState, Status};
use crate::cpu::table;
use crate::memory::{IRQ_VECTOR, Memory, NMI_VECTOR};

/// What a single step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepEvent {
    /// NMI entry sequence ran.
    Nmi,
    /// IRQ entry sequence ran.
    Irq,
    /// One opcode was fetched from `address` and executed.
    Instruction {
        opcode: u8,
        address: u16,
        official: bool,
    },
}

/// Outcome of one step: cycles consumed plus what happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub cycles: u32,
    pub event: StepEvent,
}

/// Execute one CPU step (interrupt entry or one instruction).
pub(crate) fn step(cpu: &mut CpuState, mem: &mut dyn Memory, policy: UnofficialOpcodes) -> Step {
    cpu.begin_instruction();

    // 1. Non-maskable interrupt (NMI)
    if cpu.nmi_pending {
        cpu.nmi_pending = false;
        service_interrupt(cpu, mem, NMI_VECTOR);
        return Step {
            cycles: INTERRUPT_CYCLES,
            event: StepEvent::Nmi,
        };
    }

    // 2. Maskable IRQ (line asserted & I flag clear)
    if cpu.irq_line && !cpu.flag(Status::IRQ_DISABLE) {
        service_interrupt(cpu, mem, IRQ_VECTOR);
        return Step {
            cycles: INTERRUPT_CYCLES,
            event: StepEvent::Irq,
        };
    }

    // 3. Fetch / decode / execute
    let address = cpu.pc();
    let opcode = cpu.fetch_u8(mem);
    let instr = table::instruction(opcode);

    #[cfg(feature = "trace")]
    trace_instruction(cpu, mem, address);

    let exec = if instr.official || policy == UnofficialOpcodes::Emulate {
        instr.exec
    } else {
        unofficial::skip
    };
    exec(cpu, mem, instr.mode);

    let mut cycles = base_cycles(opcode);
    if cpu.page_crossed {
        cycles += page_cross_cycles(opcode);
    }
    if cpu.branch_taken {
        cycles += 1;
    }

    Step {
        cycles,
        event: StepEvent::Instruction {
            opcode,
            address,
            official: instr.official,
        },
    }
}

/// Common interrupt entry sequence (push PC, status with Break=0; set I; load vector).
fn service_interrupt(cpu: &mut CpuState, mem: &mut dyn Memory, vector_addr: u16) {
    cpu.push_pc(mem);
    cpu.assign_flag(Status::BREAK, false);
    php(cpu, mem);
    cpu.assign_flag(Status::IRQ_DISABLE, true);
    let new_pc = mem.read_word(vector_addr);
    cpu.set_pc(new_pc);
    cpu.jammed = false;
}

#[cfg(feature = "trace")]
fn trace_instruction(cpu: &CpuState, mem: &mut dyn Memory, address: u16) {
    let (text, _) = crate::cpu::disasm::disassemble(mem, address);
    if !mem.is_disassembled(address) {
        mem.mark_disassembled(address, &text);
    }
    log::trace!(
        target: "g6502::trace",
        "{address:04X}  {text:<14} A:{:02X} X:{:02X} Y:{:02X} P:{:02X} SP:{:02X}",
        cpu.a,
        cpu.x,
        cpu.y,
        cpu.status.bits(),
        cpu.sp
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{PROGRAM_ORIGIN, setup};

    #[test]
    fn nmi_preempts_opcode() {
        let (mut cpu, mut mem) = setup(&[0xEA, 0x00]); // NOP; BRK
        mem.set_nmi_vector(0x9000);
        cpu.state_mut().nmi_pending = true;
        let s = step(cpu.state_mut(), &mut mem, UnofficialOpcodes::Emulate);
        assert_eq!(s.cycles, 7);
        assert_eq!(s.event, StepEvent::Nmi);
        assert_eq!(cpu.pc(), 0x9000);
        assert!(!cpu.state().nmi_pending);
    }

    #[test]
    fn step_executes_nop() {
        let (mut cpu, mut mem) = setup(&[0xEA, 0x00]); // NOP; BRK
        let s = step(cpu.state_mut(), &mut mem, UnofficialOpcodes::Emulate);
        assert_eq!(s.cycles, 2);
        assert_eq!(
            s.event,
            StepEvent::Instruction {
                opcode: 0xEA,
                address: PROGRAM_ORIGIN,
                official: true
            }
        );
        assert_eq!(cpu.pc(), PROGRAM_ORIGIN + 1);
    }

    #[test]
    fn irq_mask_respected() {
        let (mut cpu, mut mem) = setup(&[0xEA, 0x00]);
        // Assert IRQ line but leave I flag set from reset (IRQ ignored)
        cpu.state_mut().irq_line = true;
        let s = step(cpu.state_mut(), &mut mem, UnofficialOpcodes::Emulate);
        assert!(matches!(s.event, StepEvent::Instruction { opcode: 0xEA, .. }));
    }

    #[test]
    fn interrupt_entry_pushes_status_without_break() {
        let (mut cpu, mut mem) = setup(&[0xEA]);
        mem.set_irq_vector(0xA000);
        cpu.set_status(Status::from_bits_retain(0x30)); // BREAK | UNUSED, I clear
        cpu.state_mut().irq_line = true;
        let s = step(cpu.state_mut(), &mut mem, UnofficialOpcodes::Emulate);
        assert_eq!(s.event, StepEvent::Irq);
        assert_eq!(mem.retrieve(0x01FD), 0x80);
        assert_eq!(mem.retrieve(0x01FC), 0x00);
        assert_eq!(mem.retrieve(0x01FB), 0x20);
        assert!(cpu.flag(Status::IRQ_DISABLE));
        assert!(!cpu.flag(Status::BREAK));
        assert_eq!(cpu.pc(), 0xA000);
    }

    #[test]
    fn ignore_policy_skips_operands() {
        // LAX $10 ; NOP
        let (mut cpu, mut mem) = setup(&[0xA7, 0x10, 0xEA]);
        mem.load(0x0010, 0x55);
        let s = step(cpu.state_mut(), &mut mem, UnofficialOpcodes::Ignore);
        assert_eq!(s.cycles, 3);
        assert_eq!(cpu.a(), 0);
        assert_eq!(cpu.x(), 0);
        assert_eq!(cpu.pc(), PROGRAM_ORIGIN + 2);
    }

    #[test]
    fn interrupt_releases_jam() {
        let (mut cpu, mut mem) = setup(&[0x02]);
        mem.set_nmi_vector(0x9000);
        step(cpu.state_mut(), &mut mem, UnofficialOpcodes::Emulate);
        assert!(cpu.is_jammed());
        cpu.state_mut().nmi_pending = true;
        step(cpu.state_mut(), &mut mem, UnofficialOpcodes::Emulate);
        assert!(!cpu.is_jammed());
        assert_eq!(cpu.pc(), 0x9000);
    }
}
