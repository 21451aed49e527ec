/*!
rmw.rs - Read-modify-write executors: INC/DEC (memory and accumulator),
ASL/LSR/ROL/ROR (memory and accumulator), TRB/TSB (§4.4, §4.5).
*/

use crate::bus::Bus;
use crate::cpu::addressing::*;
use crate::cpu::ops::{asl_value, lsr_value, rol_value, ror_value, trb, tsb};
use crate::cpu::regs::CpuRegs;
use crate::error::CpuError;

enum ShiftOp {
    Asl,
    Lsr,
    Rol,
    Ror,
}

fn apply_shift<C: CpuRegs>(state: &mut C, op: &ShiftOp, v: u8) -> u8 {
    match op {
        ShiftOp::Asl => asl_value(state, v),
        ShiftOp::Lsr => lsr_value(state, v),
        ShiftOp::Rol => rol_value(state, v),
        ShiftOp::Ror => ror_value(state, v),
    }
}

fn exec_shift<C: CpuRegs, B: Bus>(
    state: &mut C,
    bus: &mut B,
    opcode: u8,
    accumulator_opcode: u8,
    zp: u8,
    zp_x: u8,
    abs: u8,
    abs_x: u8,
    op: ShiftOp,
) -> Result<(), CpuError<B::Error>> {
    if opcode == accumulator_opcode {
        let v = apply_shift(state, &op, state.a());
        state.set_a(v);
        return Ok(());
    }
    let addr = match opcode {
        o if o == zp => addr_zp(state, bus)?,
        o if o == zp_x => addr_zp_x(state, bus)?,
        o if o == abs => addr_abs(state, bus)?,
        o if o == abs_x => addr_abs_x(state, bus)?,
        _ => unreachable!("exec_shift called with unrecognized opcode"),
    };
    let v = bus.read(addr)?;
    let result = apply_shift(state, &op, v);
    bus.write(addr, result)?;
    Ok(())
}

pub(crate) fn exec_asl<C: CpuRegs, B: Bus>(state: &mut C, bus: &mut B, opcode: u8) -> Result<(), CpuError<B::Error>> {
    exec_shift(state, bus, opcode, 0x0A, 0x06, 0x16, 0x0E, 0x1E, ShiftOp::Asl)
}

pub(crate) fn exec_lsr<C: CpuRegs, B: Bus>(state: &mut C, bus: &mut B, opcode: u8) -> Result<(), CpuError<B::Error>> {
    exec_shift(state, bus, opcode, 0x4A, 0x46, 0x56, 0x4E, 0x5E, ShiftOp::Lsr)
}

pub(crate) fn exec_rol<C: CpuRegs, B: Bus>(state: &mut C, bus: &mut B, opcode: u8) -> Result<(), CpuError<B::Error>> {
    exec_shift(state, bus, opcode, 0x2A, 0x26, 0x36, 0x2E, 0x3E, ShiftOp::Rol)
}

pub(crate) fn exec_ror<C: CpuRegs, B: Bus>(state: &mut C, bus: &mut B, opcode: u8) -> Result<(), CpuError<B::Error>> {
    exec_shift(state, bus, opcode, 0x6A, 0x66, 0x76, 0x6E, 0x7E, ShiftOp::Ror)
}

/// INC: memory (zp/zp,X/abs/abs,X) or accumulator (0x1A, 65C02-only).
pub(crate) fn exec_inc<C: CpuRegs, B: Bus>(state: &mut C, bus: &mut B, opcode: u8) -> Result<(), CpuError<B::Error>> {
    if opcode == 0x1A {
        let v = state.a().wrapping_add(1);
        state.set_a(v);
        state.update_zn(v);
        return Ok(());
    }
    let addr = match opcode {
        0xE6 => addr_zp(state, bus)?,
        0xF6 => addr_zp_x(state, bus)?,
        0xEE => addr_abs(state, bus)?,
        0xFE => addr_abs_x(state, bus)?,
        _ => unreachable!("exec_inc called with non-INC opcode"),
    };
    let v = bus.read(addr)?.wrapping_add(1);
    state.update_zn(v);
    bus.write(addr, v)?;
    Ok(())
}

/// DEC: memory (zp/zp,X/abs/abs,X) or accumulator (0x3A, 65C02-only).
pub(crate) fn exec_dec<C: CpuRegs, B: Bus>(state: &mut C, bus: &mut B, opcode: u8) -> Result<(), CpuError<B::Error>> {
    if opcode == 0x3A {
        let v = state.a().wrapping_sub(1);
        state.set_a(v);
        state.update_zn(v);
        return Ok(());
    }
    let addr = match opcode {
        0xC6 => addr_zp(state, bus)?,
        0xD6 => addr_zp_x(state, bus)?,
        0xCE => addr_abs(state, bus)?,
        0xDE => addr_abs_x(state, bus)?,
        _ => unreachable!("exec_dec called with non-DEC opcode"),
    };
    let v = bus.read(addr)?.wrapping_sub(1);
    state.update_zn(v);
    bus.write(addr, v)?;
    Ok(())
}

/// TRB (65C02): zp/abs.
pub(crate) fn exec_trb<C: CpuRegs, B: Bus>(state: &mut C, bus: &mut B, opcode: u8) -> Result<(), CpuError<B::Error>> {
    let addr = match opcode {
        0x14 => addr_zp(state, bus)?,
        0x1C => addr_abs(state, bus)?,
        _ => unreachable!("exec_trb called with non-TRB opcode"),
    };
    let v = bus.read(addr)?;
    let result = trb(state, v);
    bus.write(addr, result)?;
    Ok(())
}

/// TSB (65C02): zp/abs.
pub(crate) fn exec_tsb<C: CpuRegs, B: Bus>(state: &mut C, bus: &mut B, opcode: u8) -> Result<(), CpuError<B::Error>> {
    let addr = match opcode {
        0x04 => addr_zp(state, bus)?,
        0x0C => addr_abs(state, bus)?,
        _ => unreachable!("exec_tsb called with non-TSB opcode"),
    };
    let v = bus.read(addr)?;
    let result = tsb(state, v);
    bus.write(addr, result)?;
    Ok(())
}
