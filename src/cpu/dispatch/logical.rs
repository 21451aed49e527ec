/*!
logical.rs - AND/ORA/EOR/BIT executors (§4.4, §4.5).
*/

use crate::bus::Bus;
use crate::cpu::addressing::*;
use crate::cpu::ops::{and, bit, eor, ora};
use crate::cpu::regs::CpuRegs;
use crate::error::CpuError;
use crate::personality::Personality;

enum LogicalOp {
    And,
    Ora,
    Eor,
}

pub(crate) fn exec_and<C: CpuRegs, B: Bus>(
    state: &mut C,
    bus: &mut B,
    opcode: u8,
    personality: Personality,
) -> Result<(), CpuError<B::Error>> {
    exec_logical(state, bus, opcode, personality, LogicalOp::And)
}

pub(crate) fn exec_ora<C: CpuRegs, B: Bus>(
    state: &mut C,
    bus: &mut B,
    opcode: u8,
    personality: Personality,
) -> Result<(), CpuError<B::Error>> {
    exec_logical(state, bus, opcode, personality, LogicalOp::Ora)
}

pub(crate) fn exec_eor<C: CpuRegs, B: Bus>(
    state: &mut C,
    bus: &mut B,
    opcode: u8,
    personality: Personality,
) -> Result<(), CpuError<B::Error>> {
    exec_logical(state, bus, opcode, personality, LogicalOp::Eor)
}

fn exec_logical<C: CpuRegs, B: Bus>(
    state: &mut C,
    bus: &mut B,
    opcode: u8,
    personality: Personality,
    op: LogicalOp,
) -> Result<(), CpuError<B::Error>> {
    let addr = match opcode {
        0x29 | 0x09 | 0x49 => {
            let a = addr_immediate(state);
            let v = bus.read(a)?;
            apply(state, op, v);
            return Ok(());
        }
        0x25 | 0x05 | 0x45 => addr_zp(state, bus)?,
        0x35 | 0x15 | 0x55 => addr_zp_x(state, bus)?,
        0x2D | 0x0D | 0x4D => addr_abs(state, bus)?,
        0x3D | 0x1D | 0x5D => addr_abs_x(state, bus)?,
        0x39 | 0x19 | 0x59 => addr_abs_y(state, bus)?,
        0x21 | 0x01 | 0x41 => addr_zp_ind_x(state, bus)?,
        0x31 | 0x11 | 0x51 => addr_zp_ind_y(state, bus)?,
        0x32 | 0x12 | 0x52 => {
            if personality == Personality::Mos {
                return Err(CpuError::InvalidOpcode { opcode, pc: state.pc() });
            }
            addr_zp_ind(state, bus)?
        }
        _ => unreachable!("exec_logical called with non-logical opcode"),
    };
    let v = bus.read(addr)?;
    apply(state, op, v);
    Ok(())
}

fn apply<C: CpuRegs>(state: &mut C, op: LogicalOp, v: u8) {
    match op {
        LogicalOp::And => and(state, v),
        LogicalOp::Ora => ora(state, v),
        LogicalOp::Eor => eor(state, v),
    }
}

/// BIT: zp/abs/(65C02) immediate, zp,X, abs,X.
pub(crate) fn exec_bit<C: CpuRegs, B: Bus>(
    state: &mut C,
    bus: &mut B,
    opcode: u8,
) -> Result<(), CpuError<B::Error>> {
    let (addr, immediate) = match opcode {
        0x89 => (addr_immediate(state), true),
        0x24 => (addr_zp(state, bus)?, false),
        0x34 => (addr_zp_x(state, bus)?, false),
        0x2C => (addr_abs(state, bus)?, false),
        0x3C => (addr_abs_x(state, bus)?, false),
        _ => unreachable!("exec_bit called with non-BIT opcode"),
    };
    let v = bus.read(addr)?;
    bit(state, v, immediate);
    Ok(())
}
