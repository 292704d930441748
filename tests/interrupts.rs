//! Interrupt priority, masking and the processor-lock / unofficial policies.

use g6502::cpu::StepEvent;
use g6502::{Cpu, CpuConfig, FlatMemory, Memory, Processor, Status, UnofficialOpcodes};

const ORIGIN: u16 = 0x8000;
const NMI_HANDLER: u16 = 0x9000;
const IRQ_HANDLER: u16 = 0xA000;

fn boot_with(config: CpuConfig, prg: &[u8]) -> (Cpu, FlatMemory) {
    let mut mem = FlatMemory::new();
    mem.load_program(ORIGIN, prg).unwrap();
    mem.set_reset_vector(ORIGIN);
    mem.set_nmi_vector(NMI_HANDLER);
    mem.set_irq_vector(IRQ_HANDLER);
    let mut cpu = Cpu::with_config(config);
    cpu.reset(&mut mem);
    (cpu, mem)
}

fn boot(prg: &[u8]) -> (Cpu, FlatMemory) {
    boot_with(CpuConfig::default(), prg)
}

#[test]
fn nmi_wins_over_irq_and_masks_it() {
    // CLI ; NOP ; NOP
    let (mut cpu, mut mem) = boot(&[0x58, 0xEA, 0xEA]);
    // NMI handler: NOP ; CLI ; NOP
    mem.load_program(NMI_HANDLER, &[0xEA, 0x58, 0xEA]).unwrap();
    cpu.tick(&mut mem);
    assert!(!cpu.flag(Status::IRQ_DISABLE));

    cpu.request_irq(true);
    cpu.request_nmi();
    assert_eq!(cpu.step(&mut mem).event, StepEvent::Nmi);
    assert_eq!(cpu.pc(), NMI_HANDLER);
    assert!(!cpu.nmi_pending());

    // I is now set: the asserted IRQ waits.
    let next = cpu.step(&mut mem);
    assert!(matches!(next.event, StepEvent::Instruction { opcode: 0xEA, .. }));
    let next = cpu.step(&mut mem);
    assert!(matches!(next.event, StepEvent::Instruction { opcode: 0x58, .. }));

    // CLI executed: IRQ is taken on the following tick.
    let s = cpu.step(&mut mem);
    assert_eq!(s.event, StepEvent::Irq);
    assert_eq!(s.cycles, 7);
    assert_eq!(cpu.pc(), IRQ_HANDLER);
}

#[test]
fn irq_stays_pending_while_masked() {
    let (mut cpu, mut mem) = boot(&[0xEA, 0xEA, 0x58, 0xEA]);
    cpu.request_irq(true);
    assert_eq!(cpu.tick(&mut mem), 2);
    assert_eq!(cpu.tick(&mut mem), 2);
    assert_eq!(cpu.tick(&mut mem), 2); // CLI
    assert_eq!(cpu.tick(&mut mem), 7);
    assert_eq!(cpu.pc(), IRQ_HANDLER);
    // Return address is the instruction after CLI.
    assert_eq!(mem.retrieve(0x01FD), 0x80);
    assert_eq!(mem.retrieve(0x01FC), 0x03);
}

#[test]
fn nmi_is_serviced_once_per_request() {
    let (mut cpu, mut mem) = boot(&[0xEA]);
    mem.load_program(NMI_HANDLER, &[0xEA, 0xEA]).unwrap();
    cpu.request_nmi();
    cpu.tick(&mut mem);
    assert_eq!(cpu.pc(), NMI_HANDLER);
    cpu.tick(&mut mem);
    assert_eq!(cpu.pc(), NMI_HANDLER + 1);
}

#[test]
fn jam_holds_until_reset() {
    let (mut cpu, mut mem) = boot(&[0xEA, 0x02, 0xEA]);
    cpu.tick(&mut mem);
    assert_eq!(cpu.tick(&mut mem), 2);
    assert!(cpu.is_jammed());
    for _ in 0..4 {
        assert_eq!(cpu.tick(&mut mem), 2);
        assert_eq!(cpu.pc(), ORIGIN + 1);
    }
    assert_eq!(cpu.unofficial_executed(), 5);
    cpu.reset(&mut mem);
    assert!(!cpu.is_jammed());
    assert_eq!(cpu.pc(), ORIGIN);
}

#[test]
fn nmi_breaks_a_jam() {
    let (mut cpu, mut mem) = boot(&[0x02]);
    cpu.tick(&mut mem);
    assert!(cpu.is_jammed());
    cpu.request_nmi();
    assert_eq!(cpu.tick(&mut mem), 7);
    assert!(!cpu.is_jammed());
    assert_eq!(cpu.pc(), NMI_HANDLER);
}

#[test]
fn ignore_policy_turns_unofficial_opcodes_into_nops() {
    let config = CpuConfig::new().with_unofficial(UnofficialOpcodes::Ignore);
    // SLO $10 ; JAM ; LDA #$01
    let (mut cpu, mut mem) = boot_with(config, &[0x07, 0x10, 0x02, 0xA9, 0x01]);
    mem.load(0x0010, 0x81);
    assert_eq!(cpu.tick(&mut mem), 5);
    assert_eq!(mem.retrieve(0x0010), 0x81);
    assert_eq!(cpu.a(), 0);
    assert_eq!(cpu.tick(&mut mem), 2);
    assert!(!cpu.is_jammed());
    cpu.tick(&mut mem);
    assert_eq!(cpu.a(), 0x01);
    assert_eq!(cpu.unofficial_executed(), 2);
}

#[test]
fn emulate_policy_runs_combined_opcodes() {
    // SLO $10 with A=$01: mem $81 -> $02, carry out; A = $01 | $02
    let (mut cpu, mut mem) = boot(&[0x07, 0x10]);
    mem.load(0x0010, 0x81);
    cpu.set_a(0x01);
    assert_eq!(cpu.tick(&mut mem), 5);
    assert_eq!(mem.retrieve(0x0010), 0x02);
    assert_eq!(cpu.a(), 0x03);
    assert!(cpu.flag(Status::CARRY));
}

#[test]
fn run_for_overshoots_by_at_most_one_instruction() {
    // Seven-cycle budget against 4-cycle instructions (LDA abs)
    let prg: Vec<u8> = [0xAD, 0x00, 0x02].repeat(8);
    let (mut cpu, mut mem) = boot(&prg);
    assert_eq!(cpu.run_for(&mut mem, 7), 8);
    assert_eq!(cpu.run_for(&mut mem, 0), 0);
    assert_eq!(cpu.total_cycles(), 8);
}

#[test]
fn processor_requires_explicit_reset() {
    let mut mem = FlatMemory::new();
    mem.load_program(ORIGIN, &[0xA2, 0x07]).unwrap();
    mem.set_reset_vector(ORIGIN);
    let mut p = Processor::init(&mut mem);
    assert_eq!(p.cpu().pc(), 0);
    p.reset();
    assert_eq!(p.cpu().pc(), ORIGIN);
    assert_eq!(p.tick(), 2);
    assert_eq!(p.cpu().x(), 0x07);
    p.request_nmi();
    assert!(p.cpu().nmi_pending());
}
