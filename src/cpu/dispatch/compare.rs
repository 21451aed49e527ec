/*!
compare.rs - CMP/CPX/CPY executors (§4.4).
*/

use crate::bus::Bus;
use crate::cpu::addressing::*;
use crate::cpu::ops::cmp;
use crate::cpu::regs::CpuRegs;
use crate::error::CpuError;
use crate::personality::Personality;

pub(crate) fn exec_cmp<C: CpuRegs, B: Bus>(
    state: &mut C,
    bus: &mut B,
    opcode: u8,
    personality: Personality,
) -> Result<(), CpuError<B::Error>> {
    let addr = match opcode {
        0xC9 => {
            let a = addr_immediate(state);
            let v = bus.read(a)?;
            cmp(state, state.a(), v);
            return Ok(());
        }
        0xC5 => addr_zp(state, bus)?,
        0xD5 => addr_zp_x(state, bus)?,
        0xCD => addr_abs(state, bus)?,
        0xDD => addr_abs_x(state, bus)?,
        0xD9 => addr_abs_y(state, bus)?,
        0xC1 => addr_zp_ind_x(state, bus)?,
        0xD1 => addr_zp_ind_y(state, bus)?,
        0xD2 => {
            if personality == Personality::Mos {
                return Err(CpuError::InvalidOpcode { opcode, pc: state.pc() });
            }
            addr_zp_ind(state, bus)?
        }
        _ => unreachable!("exec_cmp called with non-CMP opcode"),
    };
    let v = bus.read(addr)?;
    cmp(state, state.a(), v);
    Ok(())
}

pub(crate) fn exec_cpx<C: CpuRegs, B: Bus>(
    state: &mut C,
    bus: &mut B,
    opcode: u8,
) -> Result<(), CpuError<B::Error>> {
    let addr = match opcode {
        0xE0 => {
            let a = addr_immediate(state);
            let v = bus.read(a)?;
            cmp(state, state.x(), v);
            return Ok(());
        }
        0xE4 => addr_zp(state, bus)?,
        0xEC => addr_abs(state, bus)?,
        _ => unreachable!("exec_cpx called with non-CPX opcode"),
    };
    let v = bus.read(addr)?;
    cmp(state, state.x(), v);
    Ok(())
}

pub(crate) fn exec_cpy<C: CpuRegs, B: Bus>(
    state: &mut C,
    bus: &mut B,
    opcode: u8,
) -> Result<(), CpuError<B::Error>> {
    let addr = match opcode {
        0xC0 => {
            let a = addr_immediate(state);
            let v = bus.read(a)?;
            cmp(state, state.y(), v);
            return Ok(());
        }
        0xC4 => addr_zp(state, bus)?,
        0xCC => addr_abs(state, bus)?,
        _ => unreachable!("exec_cpy called with non-CPY opcode"),
    };
    let v = bus.read(addr)?;
    cmp(state, state.y(), v);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu::state::{CpuState, CARRY, ZERO};
    use crate::personality::EmulationMode;
    use crate::test_support::FlatMemory;

    #[test]
    fn cmp_equal_sets_zero_and_carry() {
        let mut c = CpuState::new(Personality::Wdc, EmulationMode::Strict);
        let mut mem = FlatMemory::new();
        c.set_pc(0x1000);
        mem.load(0x1000, &[0x10]);
        c.set_a(0x10);
        exec_cmp(&mut c, &mut mem, 0xC9, Personality::Wdc).unwrap();
        assert!(c.is_flag_set(ZERO));
        assert!(c.is_flag_set(CARRY));
    }

    #[test]
    fn cpx_absolute_compares_x() {
        let mut c = CpuState::new(Personality::Wdc, EmulationMode::Strict);
        let mut mem = FlatMemory::new();
        c.set_pc(0x1000);
        mem.load(0x1000, &[0x00, 0x20]);
        mem.mem[0x2000] = 0x05;
        c.set_x(0x03);
        exec_cpx(&mut c, &mut mem, 0xEC).unwrap();
        assert!(!c.is_flag_set(CARRY)); // X(3) < mem(5)
    }
}
