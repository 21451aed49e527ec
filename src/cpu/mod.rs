/*!
cpu::mod - Public facade for the cycle-budgeted 65C02 core (§2, §6).

    state.rs      - Registers, flags, runner substates.
    regs.rs       - `CpuRegs` trait, the generic surface ops/addressing use.
    addressing.rs - Effective-address resolution for all addressing modes.
    ops.rs        - Flag-updating ALU/logic kernels (§4.4).
    stack.rs      - Push/pull primitives (§4.2).
    cycles.rs     - Per-opcode max-cycle-cost table, for budget preflighting.
    control.rs    - Reset/IRQ/NMI control events (§4.6).
    dispatch/     - Per-opcode executors, one family module per instruction
                    group, entered through `dispatch::execute`.

`Cpu<B>` owns a `CpuState` and a host-supplied `B: Bus`. It is the only
type application code constructs; everything above is `pub(crate)` and
reachable only through this facade.
*/

mod addressing;
mod control;
mod cycles;
mod dispatch;
mod ops;
mod regs;
mod stack;
pub mod state;

pub use state::CpuState;

use crate::bus::Bus;
use crate::error::CpuError;
use crate::personality::{EmulationMode, Personality};
use regs::CpuRegs;

/// A 65C02 core bound to a host-supplied bus `B`.
pub struct Cpu<B: Bus> {
    state: CpuState,
    bus: B,
}

impl<B: Bus> Cpu<B> {
    /// Construct a new instance. Per §4.6 the core starts `crashed`; call
    /// [`Cpu::reset`] before the first [`Cpu::step`] or [`Cpu::run`].
    pub fn new(bus: B, personality: Personality, emulation_mode: EmulationMode) -> Self {
        Self {
            state: CpuState::new(personality, emulation_mode),
            bus,
        }
    }

    /// Apply a reset: clears crashed/stopped/waiting and loads PC from the
    /// reset vector at 0xFFFC.
    pub fn reset(&mut self) -> Result<(), CpuError<B::Error>> {
        control::reset(&mut self.state, &mut self.bus)?;
        Ok(())
    }

    /// Notify the core of the maskable interrupt line's level (§4.6, §6).
    /// `asserted = true` attempts to service the interrupt immediately
    /// (clearing `waiting` unconditionally; pushing state and jumping
    /// through the IRQ/BRK vector only if IRQ_DISABLE is clear).
    /// `asserted = false` is a no-op beyond recording the line state.
    pub fn interrupt(&mut self, asserted: bool) -> Result<(), CpuError<B::Error>> {
        if !asserted || self.state.crashed() || self.state.stopped() {
            return Ok(());
        }
        control::service_irq(&mut self.state, &mut self.bus)?;
        Ok(())
    }

    /// Service a non-maskable interrupt. Always taken unless the core is
    /// crashed or stopped (both require reset first, §4.6).
    pub fn nmi(&mut self) -> Result<(), CpuError<B::Error>> {
        if self.state.crashed() || self.state.stopped() {
            return Ok(());
        }
        control::service_nmi(&mut self.state, &mut self.bus)?;
        Ok(())
    }

    /// Execute exactly one instruction and return the number of cycles it
    /// charged. Errors (and leaves `crashed` set) if the core is crashed,
    /// stopped, or encounters an invalid opcode in Strict mode.
    pub fn step(&mut self) -> Result<u32, CpuError<B::Error>> {
        if self.state.crashed() {
            return Err(CpuError::InvalidProcessorState);
        }
        if self.state.stopped() {
            return Err(CpuError::ProcessorStopped);
        }
        if self.state.waiting() {
            return Ok(1);
        }

        let pc = self.state.pc();
        let opcode = self.bus.read(pc)?;
        self.state.advance_pc_one();
        log::trace!("fetch 0x{opcode:02X} at PC={pc:#06X}");

        let base_cycles = cycles::max_cycles(opcode);
        dispatch::execute(
            &mut self.state,
            &mut self.bus,
            opcode,
            base_cycles,
            self.state.personality(),
            self.state.emulation_mode(),
        )
    }

    /// Run until the cycle budget is exhausted, carrying any overshoot
    /// forward via `cycle_delta` (§4.7) — read it back with
    /// [`Cpu::cycle_delta`]. If the core becomes stopped or enters the
    /// waiting substate mid-run, the entire remaining budget is consumed
    /// (`cycle_delta` is left at 0) rather than carried forward. Errors if
    /// the core is already crashed on entry.
    pub fn run(&mut self, budget: i64) -> Result<(), CpuError<B::Error>> {
        if self.state.crashed() {
            return Err(CpuError::InvalidProcessorState);
        }

        let mut remaining = budget + self.state.cycle_delta();
        self.state.set_cycle_delta(0);

        while remaining > 0 {
            if self.state.crashed() || self.state.stopped() || self.state.waiting() {
                remaining = 0;
                break;
            }
            let opcode_preview = self.bus.read(self.state.pc())?;
            let max_cost = cycles::max_cycles(opcode_preview) as i64;
            if max_cost > remaining {
                break;
            }
            let spent = self.step()? as i64;
            remaining -= spent;
        }

        self.state.set_cycle_delta(remaining);
        Ok(())
    }

    // -------------------------------------------------------------------
    // Register / flag accessors (§6)
    // -------------------------------------------------------------------
    pub fn a(&self) -> u8 {
        self.state.a()
    }
    pub fn x(&self) -> u8 {
        self.state.x()
    }
    pub fn y(&self) -> u8 {
        self.state.y()
    }
    pub fn sp(&self) -> u8 {
        self.state.sp()
    }
    pub fn pc(&self) -> u16 {
        self.state.pc()
    }
    pub fn status(&self) -> u8 {
        self.state.status()
    }
    pub fn set_a(&mut self, v: u8) {
        self.state.set_a(v);
    }
    pub fn set_x(&mut self, v: u8) {
        self.state.set_x(v);
    }
    pub fn set_y(&mut self, v: u8) {
        self.state.set_y(v);
    }
    pub fn set_sp(&mut self, v: u8) {
        self.state.set_sp(v);
    }
    pub fn set_pc(&mut self, v: u16) {
        self.state.set_pc(v);
    }
    pub fn set_status(&mut self, v: u8) {
        self.state.set_status(v);
    }
    pub fn crashed(&self) -> bool {
        self.state.crashed()
    }
    pub fn stopped(&self) -> bool {
        self.state.stopped()
    }
    pub fn waiting(&self) -> bool {
        self.state.waiting()
    }
    pub fn cycle_delta(&self) -> i64 {
        self.state.cycle_delta()
    }
    pub fn personality(&self) -> Personality {
        self.state.personality()
    }
    pub fn emulation_mode(&self) -> EmulationMode {
        self.state.emulation_mode()
    }

    /// Borrow the bus, e.g. to inspect host-side peripheral state between
    /// steps.
    pub fn bus(&self) -> &B {
        &self.bus
    }
    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FlatMemory;

    fn reset_vector_cpu(prg_at: u16, prg: &[u8]) -> Cpu<FlatMemory> {
        let mut mem = FlatMemory::new();
        mem.load(prg_at, prg);
        mem.set_vector(0xFFFC, prg_at);
        let mut cpu = Cpu::new(mem, Personality::Wdc, EmulationMode::Strict);
        cpu.reset().unwrap();
        cpu
    }

    #[test]
    fn reset_then_step_executes_from_vector() {
        // §8 scenario 1: reset loads PC from 0xFFFC.
        let mut cpu = reset_vector_cpu(0x8000, &[0xA9, 0x42]); // LDA #$42
        assert_eq!(cpu.pc(), 0x8000);
        let cycles = cpu.step().unwrap();
        assert_eq!(cpu.a(), 0x42);
        assert_eq!(cycles, 2);
    }

    #[test]
    fn adc_immediate_binary_scenario() {
        // §8 scenario 2.
        let mut cpu = reset_vector_cpu(0x8000, &[0xA9, 0x01, 0x69, 0x02]);
        cpu.step().unwrap(); // LDA #$01
        cpu.step().unwrap(); // ADC #$02
        assert_eq!(cpu.a(), 0x03);
    }

    #[test]
    fn adc_zp_indirect_x_bcd_wdc_scenario() {
        // §8 scenario 3: ADC (zp,X) in decimal mode on WDC.
        let mut cpu = reset_vector_cpu(0x8000, &[0xF8, 0xA9, 0x55, 0x61, 0x10]);
        cpu.bus_mut().load(0x0012, &[0x00, 0x20]); // (zp,X) pointer at $12 -> $2000
        cpu.bus_mut().mem[0x2000] = 0x55;
        cpu.set_x(0x02);
        cpu.step().unwrap(); // SED
        cpu.step().unwrap(); // LDA #$55
        cpu.step().unwrap(); // ADC ($10,X)
        assert_eq!(cpu.a(), 0x10);
        assert!(cpu.status() & state::CARRY != 0);
    }

    #[test]
    fn brk_scenario_pushes_and_jumps_through_vector() {
        // §8 scenario 4.
        let mut cpu = reset_vector_cpu(0x8000, &[0xF8, 0x00]); // SED; BRK
        cpu.bus_mut().set_vector(0xFFFE, 0x9000);
        cpu.step().unwrap(); // SED, so D is set going into BRK
        cpu.step().unwrap();
        assert_eq!(cpu.pc(), 0x9000);
        assert!(cpu.status() & state::IRQ_DISABLE != 0);
        assert!(cpu.status() & state::DECIMAL == 0);
    }

    #[test]
    fn bcc_taken_negative_offset_scenario() {
        // §8 scenario 5.
        let mut cpu = reset_vector_cpu(0x8000, &[0x18, 0x90, 0xFC]); // CLC; BCC -4
        cpu.step().unwrap(); // CLC
        let pc_before_branch = cpu.pc();
        let cycles = cpu.step().unwrap();
        assert_eq!(cpu.pc(), pc_before_branch.wrapping_add(2).wrapping_sub(4));
        assert_eq!(cycles, 3); // base 2 + 1 taken
    }

    #[test]
    fn stp_then_reset_scenario() {
        // §8 scenario 6: STP stops the core; only reset clears it.
        let mut cpu = reset_vector_cpu(0x8000, &[0xDB]); // STP
        cpu.step().unwrap();
        assert!(cpu.stopped());
        let err = cpu.step().unwrap_err();
        assert!(matches!(err, CpuError::ProcessorStopped));
        cpu.reset().unwrap();
        assert!(!cpu.stopped());
    }

    #[test]
    fn run_conserves_cycles_and_carries_overshoot() {
        let mut cpu = reset_vector_cpu(0x8000, &[0xEA, 0xEA, 0xEA]); // NOP x3, 2 cycles each
        cpu.run(5).unwrap();
        // 2 NOPs fit in budget 5 (4 cycles); third NOP (2 more) would exceed
        // remaining 1, so it's deferred; remaining carries to cycle_delta.
        assert_eq!(cpu.cycle_delta(), 1);
    }

    #[test]
    fn run_on_crashed_cpu_errors_without_consuming_budget() {
        let mut cpu = reset_vector_cpu(0x8000, &[0x02]); // undefined, crashes on step
        cpu.step().unwrap_err();
        assert!(cpu.crashed());
        let err = cpu.run(10).unwrap_err();
        assert!(matches!(err, CpuError::InvalidProcessorState));
    }

    #[test]
    fn run_entering_waiting_substate_discards_remaining_budget() {
        // WAI; NOP — WAI consumes its own cycles then the run loop must
        // zero out the rest of the budget rather than carry it forward.
        let mut cpu = reset_vector_cpu(0x8000, &[0xCB, 0xEA]);
        cpu.run(20).unwrap();
        assert!(cpu.waiting());
        assert_eq!(cpu.cycle_delta(), 0);
    }

    #[test]
    fn run_entering_stopped_substate_discards_remaining_budget() {
        let mut cpu = reset_vector_cpu(0x8000, &[0xDB, 0xEA]); // STP; NOP
        cpu.run(20).unwrap();
        assert!(cpu.stopped());
        assert_eq!(cpu.cycle_delta(), 0);
    }

    #[test]
    fn invalid_opcode_crashes_and_requires_reset() {
        let mut cpu = reset_vector_cpu(0x8000, &[0x02]); // undefined
        let err = cpu.step().unwrap_err();
        assert!(matches!(err, CpuError::InvalidOpcode { opcode: 0x02, .. }));
        assert!(cpu.crashed());
        let err2 = cpu.step().unwrap_err();
        assert!(matches!(err2, CpuError::InvalidProcessorState));
        cpu.reset().unwrap();
        assert!(!cpu.crashed());
    }
}
