/*!
branches.rs - Conditional branch and BRA executors (§4.4, §9).

Every branch fetches its signed 8-bit displacement unconditionally (PC
always advances past it), then adds 1 extra cycle if the branch is taken,
on top of the table's base 2. §9 Resolution 2: no NMOS-style extra cycle
for a taken branch that crosses a page boundary — only the taken/not-taken
distinction matters here.
*/

use crate::bus::Bus;
use crate::cpu::addressing::fetch_byte;
use crate::cpu::regs::CpuRegs;
use crate::cpu::state::{CARRY, NEGATIVE, OVERFLOW, ZERO};

enum Condition {
    Carry(bool),
    Zero(bool),
    Negative(bool),
    Overflow(bool),
    Always,
}

fn condition_met<C: CpuRegs>(state: &C, cond: &Condition) -> bool {
    match *cond {
        Condition::Carry(want) => state.is_flag_set(CARRY) == want,
        Condition::Zero(want) => state.is_flag_set(ZERO) == want,
        Condition::Negative(want) => state.is_flag_set(NEGATIVE) == want,
        Condition::Overflow(want) => state.is_flag_set(OVERFLOW) == want,
        Condition::Always => true,
    }
}

/// Executes a branch instruction. Returns the number of extra cycles (0 or
/// 1) beyond the table's base cost, for the taken/not-taken distinction.
fn exec_branch<C: CpuRegs, B: Bus>(
    state: &mut C,
    bus: &mut B,
    cond: Condition,
) -> Result<u32, B::Error> {
    let offset = fetch_byte(state, bus)? as i8;
    if condition_met(state, &cond) {
        let pc = state.pc();
        state.set_pc(pc.wrapping_add(offset as i16 as u16));
        Ok(1)
    } else {
        Ok(0)
    }
}

pub(crate) fn exec<C: CpuRegs, B: Bus>(state: &mut C, bus: &mut B, opcode: u8) -> Result<u32, B::Error> {
    let cond = match opcode {
        0x10 => Condition::Negative(false), // BPL
        0x30 => Condition::Negative(true),  // BMI
        0x50 => Condition::Overflow(false), // BVC
        0x70 => Condition::Overflow(true),  // BVS
        0x90 => Condition::Carry(false),    // BCC
        0xB0 => Condition::Carry(true),     // BCS
        0xD0 => Condition::Zero(false),     // BNE
        0xF0 => Condition::Zero(true),      // BEQ
        0x80 => Condition::Always,          // BRA (65C02)
        _ => unreachable!("exec called with non-branch opcode"),
    };
    exec_branch(state, bus, cond)
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
    fn bcc_not_taken_when_carry_set() {
        let mut c = cpu();
        let mut mem = FlatMemory::new();
        c.set_pc(0x1000);
        mem.load(0x1000, &[0x05]);
        c.assign_flag(CARRY, true);
        let extra = exec(&mut c, &mut mem, 0x90).unwrap();
        assert_eq!(extra, 0);
        assert_eq!(c.pc(), 0x1001);
    }

    #[test]
    fn bcc_taken_with_negative_offset() {
        // §8 scenario: BCC with carry clear and a negative displacement.
        let mut c = cpu();
        let mut mem = FlatMemory::new();
        c.set_pc(0x1000);
        mem.load(0x1000, &[0xFC]); // -4
        c.assign_flag(CARRY, false);
        let extra = exec(&mut c, &mut mem, 0x90).unwrap();
        assert_eq!(extra, 1);
        assert_eq!(c.pc(), 0x0FFD);
    }

    #[test]
    fn bra_is_always_taken() {
        let mut c = cpu();
        let mut mem = FlatMemory::new();
        c.set_pc(0x1000);
        mem.load(0x1000, &[0x10]);
        let extra = exec(&mut c, &mut mem, 0x80).unwrap();
        assert_eq!(extra, 1);
        assert_eq!(c.pc(), 0x1011);
    }
}
