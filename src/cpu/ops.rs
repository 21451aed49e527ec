/*!
ops.rs - Operation primitives (§4.4): pure flag-updating arithmetic/logic
kernels shared by every opcode executor that composes them. None of these
touch PC or the bus; memory-targeted callers (RMW executors, TRB/TSB) read
the operand themselves, call the matching `*_value` kernel, and write the
result back.
*/

use crate::cpu::regs::CpuRegs;
use crate::cpu::state::{CARRY, DECIMAL, NEGATIVE, OVERFLOW};
use crate::personality::Personality;

/// ADC(v): r = A + v + C, with a BCD correction path when D is set.
/// V and N are derived from the pre-store `lhs`/`rhs`/`result` triple
/// (not from the already-truncated byte) — the scoped original source
/// computes these the same way; a naive re-derivation after truncating to
/// `A` would silently disagree with it at the BCD correction boundary.
pub(crate) fn adc<C: CpuRegs>(cpu: &mut C, value: u8) {
    let lhs = cpu.a() as u32;
    let rhs = value as u32;
    let carry_in = if cpu.is_flag_set(CARRY) { 1 } else { 0 };
    let mut result = lhs + rhs + carry_in;

    if !cpu.is_flag_set(DECIMAL) {
        cpu.assign_flag(CARRY, result > 0xFF);
    } else {
        if (lhs & 0x0F) + (rhs & 0x0F) + carry_in > 9 {
            result += 6;
        }
        if result > 0x99 {
            result += 0x60;
        }
        cpu.assign_flag(CARRY, result > 0x99);
    }

    let overflow = ((lhs ^ result) & (rhs ^ result) & 0x80) != 0;
    cpu.assign_flag(OVERFLOW, overflow);
    let byte = (result & 0xFF) as u8;
    cpu.assign_flag(NEGATIVE, (byte & 0x80) != 0);
    cpu.assign_flag(crate::cpu::state::ZERO, byte == 0);
    cpu.set_a(byte);
}

/// SBC(v): r = A - v - (1 - C), with a BCD correction path when D is set.
/// Mirrors the scoped original source's use of wrapping unsigned
/// arithmetic (a borrow shows up as the subtraction wrapping past zero)
/// rather than signed comparison, so the carry/overflow derivation agrees
/// with it exactly at the BCD correction boundary.
pub(crate) fn sbc<C: CpuRegs>(cpu: &mut C, value: u8) {
    let lhs = cpu.a() as u32;
    let rhs = value as u32;
    let borrow: u32 = if cpu.is_flag_set(CARRY) { 0 } else { 1 };
    let mut result = lhs.wrapping_sub(rhs).wrapping_sub(borrow);

    if !cpu.is_flag_set(DECIMAL) {
        cpu.assign_flag(CARRY, result <= 0xFF);
    } else {
        if (rhs & 0x0F) + borrow > (lhs & 0x0F) {
            result = result.wrapping_sub(0x06);
        }
        if result > 0x99 {
            result = result.wrapping_sub(0x60);
        }
        cpu.assign_flag(CARRY, result < 0x100);
    }

    let overflow = ((lhs ^ result) & (rhs ^ result) & 0x80) != 0;
    cpu.assign_flag(OVERFLOW, overflow);
    let wrapped = (result & 0xFF) as u8;
    cpu.assign_flag(NEGATIVE, (wrapped & 0x80) != 0);
    cpu.assign_flag(crate::cpu::state::ZERO, wrapped == 0);
    cpu.set_a(wrapped);
}

pub(crate) fn and<C: CpuRegs>(cpu: &mut C, value: u8) {
    let r = cpu.a() & value;
    cpu.set_a(r);
    cpu.update_zn(r);
}

pub(crate) fn ora<C: CpuRegs>(cpu: &mut C, value: u8) {
    let r = cpu.a() | value;
    cpu.set_a(r);
    cpu.update_zn(r);
}

pub(crate) fn eor<C: CpuRegs>(cpu: &mut C, value: u8) {
    let r = cpu.a() ^ value;
    cpu.set_a(r);
    cpu.update_zn(r);
}

/// ASL on an arbitrary byte (accumulator or memory); returns the new value.
pub(crate) fn asl_value<C: CpuRegs>(cpu: &mut C, value: u8) -> u8 {
    cpu.assign_flag(CARRY, (value & 0x80) != 0);
    let r = value << 1;
    cpu.update_zn(r);
    r
}

pub(crate) fn lsr_value<C: CpuRegs>(cpu: &mut C, value: u8) -> u8 {
    cpu.assign_flag(CARRY, (value & 0x01) != 0);
    let r = value >> 1;
    cpu.assign_flag(NEGATIVE, false);
    cpu.assign_flag(crate::cpu::state::ZERO, r == 0);
    r
}

pub(crate) fn rol_value<C: CpuRegs>(cpu: &mut C, value: u8) -> u8 {
    let old_carry = if cpu.is_flag_set(CARRY) { 1 } else { 0 };
    cpu.assign_flag(CARRY, (value & 0x80) != 0);
    let r = (value << 1) | old_carry;
    cpu.update_zn(r);
    r
}

pub(crate) fn ror_value<C: CpuRegs>(cpu: &mut C, value: u8) -> u8 {
    let old_carry = if cpu.is_flag_set(CARRY) { 0x80 } else { 0 };
    cpu.assign_flag(CARRY, (value & 0x01) != 0);
    let r = (value >> 1) | old_carry;
    cpu.update_zn(r);
    r
}

/// BIT(v): N/V come from the operand's own bits 7/6; Z from A & v. In
/// immediate mode the hardware quirk is that only Z is set — callers pass
/// `immediate = true` for BIT #imm.
pub(crate) fn bit<C: CpuRegs>(cpu: &mut C, value: u8, immediate: bool) {
    cpu.assign_flag(crate::cpu::state::ZERO, (cpu.a() & value) == 0);
    if !immediate {
        cpu.assign_flag(NEGATIVE, (value & 0x80) != 0);
        cpu.assign_flag(OVERFLOW, (value & 0x40) != 0);
    }
}

/// CMP(lhs, rhs): flags only, no register write.
pub(crate) fn cmp<C: CpuRegs>(cpu: &mut C, lhs: u8, rhs: u8) {
    let r = lhs as i32 - rhs as i32;
    cpu.assign_flag(CARRY, r >= 0);
    cpu.assign_flag(NEGATIVE, (r as u8 & 0x80) != 0);
    cpu.assign_flag(crate::cpu::state::ZERO, (r & 0xFF) == 0);
}

/// TRB(mem_value): Z := (A & v) == 0; returns the new memory value,
/// `(~A) & v`.
pub(crate) fn trb<C: CpuRegs>(cpu: &mut C, value: u8) -> u8 {
    cpu.assign_flag(crate::cpu::state::ZERO, (cpu.a() & value) == 0);
    (!cpu.a()) & value
}

/// TSB(mem_value): Z := (A & v) == 0; returns the new memory value,
/// `A | v`.
pub(crate) fn tsb<C: CpuRegs>(cpu: &mut C, value: u8) -> u8 {
    cpu.assign_flag(crate::cpu::state::ZERO, (cpu.a() & value) == 0);
    cpu.a() | value
}

/// Centralized BCD cycle penalty (§4.4, §9): one extra cycle for ADC/SBC
/// in decimal mode on Rockwell and WDC, never on MOS.
pub(crate) fn decimal_cycle_penalty<C: CpuRegs>(cpu: &C, personality: Personality) -> u32 {
    if cpu.is_flag_set(DECIMAL) && personality.is_rockwell_or_wdc() {
        1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu::state::CpuState;
    use crate::personality::{EmulationMode, Personality};

    fn cpu() -> CpuState {
        CpuState::new(Personality::Wdc, EmulationMode::Strict)
    }

    #[test]
    fn adc_binary_no_carry() {
        let mut c = cpu();
        c.set_a(0x01);
        c.assign_flag(CARRY, false);
        adc(&mut c, 0x12);
        assert_eq!(c.a(), 0x13);
        assert!(!c.is_flag_set(CARRY));
        assert!(!c.is_flag_set(OVERFLOW));
    }

    #[test]
    fn adc_decimal_mode_wdc() {
        // Scenario from §8.3: A=0x55, mem=0x55, D=1, C=0 -> A=0x10, C=1.
        let mut c = cpu();
        c.set_a(0x55);
        c.assign_flag(DECIMAL, true);
        c.assign_flag(CARRY, false);
        adc(&mut c, 0x55);
        assert_eq!(c.a(), 0x10);
        assert!(c.is_flag_set(CARRY));
    }

    #[test]
    fn adc_sbc_are_inverse_in_binary_mode() {
        let mut c = cpu();
        c.set_a(0x40);
        c.assign_flag(CARRY, true);
        let original = c.a();
        adc(&mut c, 0x20);
        sbc(&mut c, 0x20);
        assert_eq!(c.a(), original);
    }

    #[test]
    fn rol_then_ror_round_trips() {
        let mut c = cpu();
        c.assign_flag(CARRY, false);
        let original = 0b0101_0101u8;
        let rolled = rol_value(&mut c, original);
        let back = ror_value(&mut c, rolled);
        assert_eq!(back, original);
    }

    #[test]
    fn bit_immediate_sets_only_zero() {
        let mut c = cpu();
        c.set_a(0x0F);
        c.assign_flag(NEGATIVE, true);
        c.assign_flag(OVERFLOW, true);
        bit(&mut c, 0xF0, true);
        assert!(c.is_flag_set(crate::cpu::state::ZERO));
        assert!(c.is_flag_set(NEGATIVE)); // untouched by immediate BIT
    }

    #[test]
    fn trb_clears_bits_and_sets_zero() {
        let mut c = cpu();
        c.set_a(0b1010);
        let new_val = trb(&mut c, 0b1111);
        assert_eq!(new_val, 0b0101);
        assert!(!c.is_flag_set(crate::cpu::state::ZERO));
    }

    #[test]
    fn decimal_penalty_gated_by_personality() {
        let mut mos = CpuState::new(Personality::Mos, EmulationMode::Strict);
        mos.assign_flag(DECIMAL, true);
        assert_eq!(decimal_cycle_penalty(&mos, Personality::Mos), 0);

        let mut wdc = CpuState::new(Personality::Wdc, EmulationMode::Strict);
        wdc.assign_flag(DECIMAL, true);
        assert_eq!(decimal_cycle_penalty(&wdc, Personality::Wdc), 1);
    }
}
