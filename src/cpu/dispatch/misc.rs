/*!
misc.rs - Transfers, stack ops, flag ops, and register inc/dec executors
(§4.4, §4.5).
*/

use crate::bus::Bus;
use crate::cpu::regs::CpuRegs;
use crate::cpu::stack::{pull_u8, push_u8};
use crate::cpu::state::{CARRY, DECIMAL, IRQ_DISABLE, OVERFLOW};

pub(crate) fn tax<C: CpuRegs>(state: &mut C) {
    let v = state.a();
    state.set_x(v);
    state.update_zn(v);
}

pub(crate) fn tay<C: CpuRegs>(state: &mut C) {
    let v = state.a();
    state.set_y(v);
    state.update_zn(v);
}

pub(crate) fn txa<C: CpuRegs>(state: &mut C) {
    let v = state.x();
    state.set_a(v);
    state.update_zn(v);
}

pub(crate) fn tya<C: CpuRegs>(state: &mut C) {
    let v = state.y();
    state.set_a(v);
    state.update_zn(v);
}

pub(crate) fn tsx<C: CpuRegs>(state: &mut C) {
    let v = state.sp();
    state.set_x(v);
    state.update_zn(v);
}

/// TXS: unlike the other transfers, does not touch N/Z (SP is not a
/// general-purpose accumulator).
pub(crate) fn txs<C: CpuRegs>(state: &mut C) {
    let v = state.x();
    state.set_sp(v);
}

pub(crate) fn inx<C: CpuRegs>(state: &mut C) {
    let v = state.x().wrapping_add(1);
    state.set_x(v);
    state.update_zn(v);
}

pub(crate) fn iny<C: CpuRegs>(state: &mut C) {
    let v = state.y().wrapping_add(1);
    state.set_y(v);
    state.update_zn(v);
}

pub(crate) fn dex<C: CpuRegs>(state: &mut C) {
    let v = state.x().wrapping_sub(1);
    state.set_x(v);
    state.update_zn(v);
}

pub(crate) fn dey<C: CpuRegs>(state: &mut C) {
    let v = state.y().wrapping_sub(1);
    state.set_y(v);
    state.update_zn(v);
}

pub(crate) fn clc<C: CpuRegs>(state: &mut C) {
    state.assign_flag(CARRY, false);
}
pub(crate) fn sec<C: CpuRegs>(state: &mut C) {
    state.assign_flag(CARRY, true);
}
pub(crate) fn cli<C: CpuRegs>(state: &mut C) {
    state.assign_flag(IRQ_DISABLE, false);
}
pub(crate) fn sei<C: CpuRegs>(state: &mut C) {
    state.assign_flag(IRQ_DISABLE, true);
}
pub(crate) fn cld<C: CpuRegs>(state: &mut C) {
    state.assign_flag(DECIMAL, false);
}
pub(crate) fn sed<C: CpuRegs>(state: &mut C) {
    state.assign_flag(DECIMAL, true);
}
pub(crate) fn clv<C: CpuRegs>(state: &mut C) {
    state.assign_flag(OVERFLOW, false);
}

pub(crate) fn pha<C: CpuRegs, B: Bus>(state: &mut C, bus: &mut B) -> Result<(), B::Error> {
    push_u8(state, bus, state.a())
}

pub(crate) fn pla<C: CpuRegs, B: Bus>(state: &mut C, bus: &mut B) -> Result<(), B::Error> {
    let v = pull_u8(state, bus)?;
    state.set_a(v);
    state.update_zn(v);
    Ok(())
}

pub(crate) fn phx<C: CpuRegs, B: Bus>(state: &mut C, bus: &mut B) -> Result<(), B::Error> {
    push_u8(state, bus, state.x())
}

pub(crate) fn plx<C: CpuRegs, B: Bus>(state: &mut C, bus: &mut B) -> Result<(), B::Error> {
    let v = pull_u8(state, bus)?;
    state.set_x(v);
    state.update_zn(v);
    Ok(())
}

pub(crate) fn phy<C: CpuRegs, B: Bus>(state: &mut C, bus: &mut B) -> Result<(), B::Error> {
    push_u8(state, bus, state.y())
}

pub(crate) fn ply<C: CpuRegs, B: Bus>(state: &mut C, bus: &mut B) -> Result<(), B::Error> {
    let v = pull_u8(state, bus)?;
    state.set_y(v);
    state.update_zn(v);
    Ok(())
}

/// PHP: pushes status with B forced set (software push convention).
pub(crate) fn php<C: CpuRegs, B: Bus>(state: &mut C, bus: &mut B) -> Result<(), B::Error> {
    let pushed = state.compose_status_for_push(true);
    push_u8(state, bus, pushed)
}

/// PLP: pulls status, forcing NC per §9 Resolution 4.
pub(crate) fn plp<C: CpuRegs, B: Bus>(state: &mut C, bus: &mut B) -> Result<(), B::Error> {
    let pulled = pull_u8(state, bus)?;
    state.restore_status_from_pull(pulled);
    Ok(())
}
