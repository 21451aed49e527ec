/*!
load_store.rs - LDA/LDX/LDY/STA/STX/STY/STZ executors (§4.5).

Loads update N/Z from the loaded value; stores and STZ (65C02) touch no
flags. Addressing-mode resolution happens in the caller (`dispatch::mod`);
these take an already-resolved effective address.
*/

use crate::bus::Bus;
use crate::cpu::regs::CpuRegs;

pub(crate) fn lda<C: CpuRegs, B: Bus>(state: &mut C, bus: &mut B, addr: u16) -> Result<(), B::Error> {
    let v = bus.read(addr)?;
    state.set_a(v);
    state.update_zn(v);
    Ok(())
}

pub(crate) fn ldx<C: CpuRegs, B: Bus>(state: &mut C, bus: &mut B, addr: u16) -> Result<(), B::Error> {
    let v = bus.read(addr)?;
    state.set_x(v);
    state.update_zn(v);
    Ok(())
}

pub(crate) fn ldy<C: CpuRegs, B: Bus>(state: &mut C, bus: &mut B, addr: u16) -> Result<(), B::Error> {
    let v = bus.read(addr)?;
    state.set_y(v);
    state.update_zn(v);
    Ok(())
}

pub(crate) fn sta<C: CpuRegs, B: Bus>(state: &mut C, bus: &mut B, addr: u16) -> Result<(), B::Error> {
    bus.write(addr, state.a())
}

pub(crate) fn stx<C: CpuRegs, B: Bus>(state: &mut C, bus: &mut B, addr: u16) -> Result<(), B::Error> {
    bus.write(addr, state.x())
}

pub(crate) fn sty<C: CpuRegs, B: Bus>(state: &mut C, bus: &mut B, addr: u16) -> Result<(), B::Error> {
    bus.write(addr, state.y())
}

/// STZ (65C02): store a literal zero. No flags affected.
pub(crate) fn stz<B: Bus>(bus: &mut B, addr: u16) -> Result<(), B::Error> {
    bus.write(addr, 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu::state::CpuState;
    use crate::personality::{EmulationMode, Personality};
    use crate::test_support::FlatMemory;

    #[test]
    fn lda_sets_register_and_flags() {
        let mut c = CpuState::new(Personality::Mos, EmulationMode::Strict);
        let mut mem = FlatMemory::new();
        mem.mem[0x0010] = 0x00;
        lda(&mut c, &mut mem, 0x0010).unwrap();
        assert_eq!(c.a(), 0);
        assert!(c.is_flag_set(crate::cpu::state::ZERO));
    }

    #[test]
    fn stz_writes_zero_regardless_of_prior_contents() {
        let mut mem = FlatMemory::new();
        mem.mem[0x0020] = 0xFF;
        stz(&mut mem, 0x0020).unwrap();
        assert_eq!(mem.mem[0x0020], 0);
    }
}
