/*!
control.rs - Reset/IRQ/NMI control events (§4.6), distinct from opcode
executors: these are runner-driven transitions, never dispatched through
`dispatch::execute`.
*/

use crate::bus::Bus;
use crate::cpu::regs::CpuRegs;
use crate::cpu::stack::{push_u16, push_u8};
use crate::cpu::state::{DECIMAL, IRQ_DISABLE};

const RESET_VECTOR: u16 = 0xFFFC;
const IRQ_BRK_VECTOR: u16 = 0xFFFE;
const NMI_VECTOR: u16 = 0xFFFA;

/// Reset: clears crashed/stopped/waiting, zeroes A/X/Y, sets SP=0xFD and
/// status=NC|BREAK, and loads PC from 0xFFFC. Always available regardless
/// of prior substate.
pub(crate) fn reset<C: CpuRegs, B: Bus>(state: &mut C, bus: &mut B) -> Result<(), B::Error> {
    let vector = bus.read_u16(RESET_VECTOR)?;
    state.set_a(0);
    state.set_x(0);
    state.set_y(0);
    state.set_sp(0xFD);
    state.set_status(crate::cpu::state::UNUSED | crate::cpu::state::BREAK);
    state.set_crashed(false);
    state.set_stopped(false);
    state.set_waiting(false);
    state.set_pc(vector);
    log::debug!("reset complete; PC={vector:#06X}");
    Ok(())
}

/// Service a maskable interrupt request. Clearing `waiting` is unconditional
/// on any IRQ delivery; if IRQ_DISABLE is set, the IRQ is ignored beyond
/// that wake. Otherwise pushes PC and status (B clear), sets I, clears D,
/// and jumps through the IRQ/BRK vector.
pub(crate) fn service_irq<C: CpuRegs, B: Bus>(state: &mut C, bus: &mut B) -> Result<bool, B::Error> {
    if state.waiting() {
        log::debug!("IRQ wakes a waiting core");
        state.set_waiting(false);
    }
    if state.is_flag_set(IRQ_DISABLE) {
        log::debug!("IRQ ignored; IRQ_DISABLE is set");
        return Ok(false);
    }
    push_u16(state, bus, state.pc())?;
    let pushed = state.compose_status_for_push(false);
    push_u8(state, bus, pushed)?;
    state.assign_flag(IRQ_DISABLE, true);
    state.assign_flag(DECIMAL, false);
    let vector = bus.read_u16(IRQ_BRK_VECTOR)?;
    state.set_pc(vector);
    log::debug!("IRQ serviced; PC={vector:#06X}");
    Ok(true)
}

/// Service a non-maskable interrupt: always taken, even with IRQ_DISABLE
/// set. Clears `waiting` unconditionally (§9 Resolution: any interrupt,
/// not just IRQ, wakes a WAI'd core).
pub(crate) fn service_nmi<C: CpuRegs, B: Bus>(state: &mut C, bus: &mut B) -> Result<(), B::Error> {
    if state.waiting() {
        log::debug!("NMI wakes a waiting core");
    }
    state.set_waiting(false);
    push_u16(state, bus, state.pc())?;
    let pushed = state.compose_status_for_push(false);
    push_u8(state, bus, pushed)?;
    state.assign_flag(IRQ_DISABLE, true);
    state.assign_flag(DECIMAL, false);
    let vector = bus.read_u16(NMI_VECTOR)?;
    state.set_pc(vector);
    log::debug!("NMI serviced; PC={vector:#06X}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu::state::CpuState;
    use crate::personality::{EmulationMode, Personality};
    use crate::test_support::FlatMemory;

    fn cpu() -> CpuState {
        CpuState::new(Personality::Wdc, EmulationMode::Strict)
    }

    #[test]
    fn reset_loads_vector_and_clears_crashed() {
        let mut c = cpu();
        let mut mem = FlatMemory::new();
        mem.set_vector(RESET_VECTOR, 0x8000);
        reset(&mut c, &mut mem).unwrap();
        assert_eq!(c.pc(), 0x8000);
        assert!(!c.crashed());
        assert_eq!(c.sp(), 0xFD);
    }

    #[test]
    fn irq_ignored_when_disabled_and_not_waiting() {
        let mut c = cpu();
        c.set_sp(0xFD);
        let mut mem = FlatMemory::new();
        c.assign_flag(IRQ_DISABLE, true);
        let serviced = service_irq(&mut c, &mut mem).unwrap();
        assert!(!serviced);
    }

    #[test]
    fn irq_wakes_a_waiting_core_but_stays_masked() {
        let mut c = cpu();
        c.set_sp(0xFD);
        let mut mem = FlatMemory::new();
        mem.set_vector(IRQ_BRK_VECTOR, 0x9000);
        c.assign_flag(IRQ_DISABLE, true);
        c.set_waiting(true);
        let pc_before = c.pc();
        let serviced = service_irq(&mut c, &mut mem).unwrap();
        assert!(!serviced);
        assert!(!c.waiting());
        assert_eq!(c.pc(), pc_before);
    }

    #[test]
    fn irq_wakes_a_waiting_core_and_services_when_unmasked() {
        let mut c = cpu();
        c.set_sp(0xFD);
        let mut mem = FlatMemory::new();
        mem.set_vector(IRQ_BRK_VECTOR, 0x9000);
        c.set_waiting(true);
        let serviced = service_irq(&mut c, &mut mem).unwrap();
        assert!(serviced);
        assert!(!c.waiting());
        assert_eq!(c.pc(), 0x9000);
    }

    #[test]
    fn irq_serviced_clears_decimal() {
        let mut c = cpu();
        c.set_sp(0xFD);
        let mut mem = FlatMemory::new();
        mem.set_vector(IRQ_BRK_VECTOR, 0x9000);
        c.assign_flag(DECIMAL, true);
        service_irq(&mut c, &mut mem).unwrap();
        assert!(!c.is_flag_set(DECIMAL));
    }

    #[test]
    fn nmi_always_serviced_and_clears_waiting() {
        let mut c = cpu();
        c.set_sp(0xFD);
        let mut mem = FlatMemory::new();
        mem.set_vector(NMI_VECTOR, 0xA000);
        c.assign_flag(IRQ_DISABLE, true);
        c.set_waiting(true);
        service_nmi(&mut c, &mut mem).unwrap();
        assert!(!c.waiting());
        assert_eq!(c.pc(), 0xA000);
    }

    #[test]
    fn nmi_serviced_clears_decimal() {
        let mut c = cpu();
        c.set_sp(0xFD);
        let mut mem = FlatMemory::new();
        mem.set_vector(NMI_VECTOR, 0xA000);
        c.assign_flag(DECIMAL, true);
        service_nmi(&mut c, &mut mem).unwrap();
        assert!(!c.is_flag_set(DECIMAL));
    }
}
