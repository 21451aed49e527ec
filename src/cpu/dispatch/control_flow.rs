/*!
control_flow.rs - JMP/JSR/RTS/RTI/BRK/NOP/WAI/STP executors (§4.5, §4.6).
*/

use crate::bus::Bus;
use crate::cpu::addressing::*;
use crate::cpu::regs::CpuRegs;
use crate::cpu::stack::{pull_u16, pull_u8, push_u16, push_u8};
use crate::cpu::state::{DECIMAL, IRQ_DISABLE};

pub(crate) fn exec_jmp_abs<C: CpuRegs, B: Bus>(state: &mut C, bus: &mut B) -> Result<(), B::Error> {
    let addr = addr_abs(state, bus)?;
    state.set_pc(addr);
    Ok(())
}

pub(crate) fn exec_jmp_indirect<C: CpuRegs, B: Bus>(state: &mut C, bus: &mut B) -> Result<(), B::Error> {
    let addr = addr_abs_indirect(state, bus)?;
    state.set_pc(addr);
    Ok(())
}

pub(crate) fn exec_jmp_abs_x_indirect<C: CpuRegs, B: Bus>(
    state: &mut C,
    bus: &mut B,
) -> Result<(), B::Error> {
    let addr = addr_abs_x_indirect(state, bus)?;
    state.set_pc(addr);
    Ok(())
}

/// JSR: push (PC of the last instruction byte), i.e. return_addr - 1, then
/// jump. PC has already been advanced past the 2-byte operand when this
/// runs, so the pushed value is `pc - 1`.
pub(crate) fn exec_jsr<C: CpuRegs, B: Bus>(state: &mut C, bus: &mut B) -> Result<(), B::Error> {
    let target = addr_abs(state, bus)?;
    let return_addr = state.pc().wrapping_sub(1);
    push_u16(state, bus, return_addr)?;
    state.set_pc(target);
    Ok(())
}

/// RTS: pull the return address and add 1 (§4.5 / SPEC_FULL §4.5).
pub(crate) fn exec_rts<C: CpuRegs, B: Bus>(state: &mut C, bus: &mut B) -> Result<(), B::Error> {
    let pulled = pull_u16(state, bus)?;
    state.set_pc(pulled.wrapping_add(1));
    Ok(())
}

/// RTI: pull status (forcing NC, ignoring B), then pull PC. No +1 on PC.
pub(crate) fn exec_rti<C: CpuRegs, B: Bus>(state: &mut C, bus: &mut B) -> Result<(), B::Error> {
    let pulled_status = pull_u8(state, bus)?;
    state.restore_status_from_pull(pulled_status);
    let pc = pull_u16(state, bus)?;
    state.set_pc(pc);
    Ok(())
}

/// BRK: software interrupt. Pushes PC+1 (the byte after the BRK opcode,
/// traditionally a padding/signature byte), status with B set, then sets I,
/// clears D, and jumps through the IRQ/BRK vector at 0xFFFE.
pub(crate) fn exec_brk<C: CpuRegs, B: Bus>(state: &mut C, bus: &mut B) -> Result<(), B::Error> {
    let return_addr = state.pc().wrapping_add(1);
    push_u16(state, bus, return_addr)?;
    let pushed_status = state.compose_status_for_push(true);
    push_u8(state, bus, pushed_status)?;
    state.assign_flag(IRQ_DISABLE, true);
    state.assign_flag(DECIMAL, false);
    let vector = bus.read_u16(0xFFFE)?;
    state.set_pc(vector);
    Ok(())
}

pub(crate) fn exec_nop() {}

/// WAI (65C02): enter the waiting substate; cleared by any interrupt.
pub(crate) fn exec_wai<C: CpuRegs>(state: &mut C) {
    state.set_waiting(true);
    log::debug!("WAI entered; core waits for an interrupt");
}

/// STP (65C02): enter the stopped substate; only a reset clears it.
pub(crate) fn exec_stp<C: CpuRegs>(state: &mut C) {
    state.set_stopped(true);
    log::debug!("STP entered; core stopped until reset");
}
