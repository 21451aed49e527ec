/*!
arithmetic.rs - ADC/SBC executors (§4.4).

Every addressing mode costs a flat, unconditional number of cycles (§4.3):
the BCD decimal-mode penalty is the only additive cost, and it is computed
once via `ops::decimal_cycle_penalty` rather than duplicated per mode.
*/

use crate::bus::Bus;
use crate::cpu::addressing::*;
use crate::cpu::ops::{adc, decimal_cycle_penalty, sbc};
use crate::cpu::regs::CpuRegs;
use crate::error::CpuError;
use crate::personality::Personality;

pub(crate) fn exec_adc<C: CpuRegs, B: Bus>(
    state: &mut C,
    bus: &mut B,
    opcode: u8,
    personality: Personality,
) -> Result<u32, CpuError<B::Error>> {
    let addr = resolve_operand_addr(state, bus, opcode, personality)?;
    let v = bus.read(addr)?;
    adc(state, v);
    Ok(decimal_cycle_penalty(state, personality))
}

pub(crate) fn exec_sbc<C: CpuRegs, B: Bus>(
    state: &mut C,
    bus: &mut B,
    opcode: u8,
    personality: Personality,
) -> Result<u32, CpuError<B::Error>> {
    let addr = resolve_operand_addr(state, bus, opcode, personality)?;
    let v = bus.read(addr)?;
    sbc(state, v);
    Ok(decimal_cycle_penalty(state, personality))
}

/// Shared addressing-mode resolution for ADC and SBC: the two instructions
/// share an identical addressing-mode byte layout.
fn resolve_operand_addr<C: CpuRegs, B: Bus>(
    state: &mut C,
    bus: &mut B,
    opcode: u8,
    personality: Personality,
) -> Result<u16, CpuError<B::Error>> {
    let addr = match opcode {
        0x69 | 0xE9 => addr_immediate(state),
        0x65 | 0xE5 => addr_zp(state, bus)?,
        0x75 | 0xF5 => addr_zp_x(state, bus)?,
        0x6D | 0xED => addr_abs(state, bus)?,
        0x7D | 0xFD => addr_abs_x(state, bus)?,
        0x79 | 0xF9 => addr_abs_y(state, bus)?,
        0x61 | 0xE1 => addr_zp_ind_x(state, bus)?,
        0x71 | 0xF1 => addr_zp_ind_y(state, bus)?,
        0x72 | 0xF2 => {
            if personality == Personality::Mos {
                return Err(CpuError::InvalidOpcode { opcode, pc: state.pc() });
            }
            addr_zp_ind(state, bus)?
        }
        _ => unreachable!("resolve_operand_addr called with non ADC/SBC opcode"),
    };
    Ok(addr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu::state::{CpuState, CARRY};
    use crate::personality::EmulationMode;
    use crate::test_support::FlatMemory;

    #[test]
    fn adc_immediate_adds_and_advances_pc() {
        let mut c = CpuState::new(Personality::Wdc, EmulationMode::Strict);
        let mut mem = FlatMemory::new();
        c.set_pc(0x1000);
        mem.load(0x1000, &[0x05]);
        c.set_a(0x01);
        c.assign_flag(CARRY, false);
        let penalty = exec_adc(&mut c, &mut mem, 0x69, Personality::Wdc).unwrap();
        assert_eq!(c.a(), 0x06);
        assert_eq!(c.pc(), 0x1001);
        assert_eq!(penalty, 0);
    }

    #[test]
    fn sbc_zp_indirect_rejected_on_mos() {
        let mut c = CpuState::new(Personality::Mos, EmulationMode::Strict);
        let mut mem = FlatMemory::new();
        c.set_pc(0x1000);
        mem.load(0x1000, &[0x10]);
        let err = exec_sbc(&mut c, &mut mem, 0xF2, Personality::Mos).unwrap_err();
        assert!(matches!(err, CpuError::InvalidOpcode { opcode: 0xF2, .. }));
    }

    #[test]
    fn adc_decimal_wdc_carries_penalty() {
        let mut c = CpuState::new(Personality::Wdc, EmulationMode::Strict);
        let mut mem = FlatMemory::new();
        c.set_pc(0x1000);
        mem.load(0x1000, &[0x55]);
        c.set_a(0x55);
        c.assign_flag(crate::cpu::state::DECIMAL, true);
        c.assign_flag(CARRY, false);
        let penalty = exec_adc(&mut c, &mut mem, 0x69, Personality::Wdc).unwrap();
        assert_eq!(c.a(), 0x10);
        assert!(c.is_flag_set(CARRY));
        assert_eq!(penalty, 1);
    }
}
