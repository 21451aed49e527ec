/*!
regs.rs - CpuRegs trait: the register/flag surface operation primitives and
addressing helpers are generic over.

Mirrors the teacher's `CpuRegs` shape closely (same split: read accessors,
mutators, PC helpers, flag composites) so that `cpu::ops` and
`cpu::addressing` can be written once against the trait rather than
against `CpuState` directly. Deliberately excludes bus access and stack
push/pull, which need a `Bus` and so stay at call sites in `cpu::mod`.
*/

use crate::cpu::state::{CpuState, NEGATIVE, UNUSED, ZERO};

pub(crate) trait CpuRegs {
    fn a(&self) -> u8;
    fn x(&self) -> u8;
    fn y(&self) -> u8;
    fn sp(&self) -> u8;
    fn pc(&self) -> u16;
    fn status_raw(&self) -> u8;

    fn set_a(&mut self, v: u8);
    fn set_x(&mut self, v: u8);
    fn set_y(&mut self, v: u8);
    fn set_sp(&mut self, v: u8);
    fn set_pc(&mut self, v: u16);
    fn set_status_raw(&mut self, v: u8);

    fn advance_pc(&mut self, delta: u16);
    #[inline]
    fn advance_pc_one(&mut self) {
        self.advance_pc(1);
    }

    fn is_flag_set(&self, mask: u8) -> bool;
    fn assign_flag(&mut self, mask: u8, value: bool);

    #[inline]
    fn update_zn(&mut self, result: u8) {
        self.assign_flag(ZERO, result == 0);
        self.assign_flag(NEGATIVE, (result & 0x80) != 0);
    }

    #[inline]
    fn status(&self) -> u8 {
        self.status_raw()
    }
    #[inline]
    fn set_status(&mut self, v: u8) {
        self.set_status_raw(v);
    }

    fn compose_status_for_push(&self, set_break: bool) -> u8;
    fn restore_status_from_pull(&mut self, pulled: u8);

    fn crashed(&self) -> bool;
    fn set_crashed(&mut self, v: bool);
    fn stopped(&self) -> bool;
    fn set_stopped(&mut self, v: bool);
    fn waiting(&self) -> bool;
    fn set_waiting(&mut self, v: bool);
}

impl CpuRegs for CpuState {
    #[inline]
    fn a(&self) -> u8 {
        CpuState::a(self)
    }
    #[inline]
    fn x(&self) -> u8 {
        CpuState::x(self)
    }
    #[inline]
    fn y(&self) -> u8 {
        CpuState::y(self)
    }
    #[inline]
    fn sp(&self) -> u8 {
        CpuState::sp(self)
    }
    #[inline]
    fn pc(&self) -> u16 {
        CpuState::pc(self)
    }
    #[inline]
    fn status_raw(&self) -> u8 {
        self.status | UNUSED
    }

    #[inline]
    fn set_a(&mut self, v: u8) {
        CpuState::set_a(self, v);
    }
    #[inline]
    fn set_x(&mut self, v: u8) {
        CpuState::set_x(self, v);
    }
    #[inline]
    fn set_y(&mut self, v: u8) {
        CpuState::set_y(self, v);
    }
    #[inline]
    fn set_sp(&mut self, v: u8) {
        CpuState::set_sp(self, v);
    }
    #[inline]
    fn set_pc(&mut self, v: u16) {
        CpuState::set_pc(self, v);
    }
    #[inline]
    fn set_status_raw(&mut self, v: u8) {
        CpuState::set_status(self, v);
    }

    #[inline]
    fn advance_pc(&mut self, delta: u16) {
        CpuState::advance_pc(self, delta);
    }

    #[inline]
    fn is_flag_set(&self, mask: u8) -> bool {
        CpuState::is_flag_set(self, mask)
    }

    #[inline]
    fn assign_flag(&mut self, mask: u8, value: bool) {
        CpuState::assign_flag(self, mask, value);
    }

    #[inline]
    fn compose_status_for_push(&self, set_break: bool) -> u8 {
        CpuState::compose_status_for_push(self, set_break)
    }
    #[inline]
    fn restore_status_from_pull(&mut self, pulled: u8) {
        CpuState::restore_status_from_pull(self, pulled);
    }

    #[inline]
    fn crashed(&self) -> bool {
        CpuState::crashed(self)
    }
    #[inline]
    fn set_crashed(&mut self, v: bool) {
        CpuState::set_crashed(self, v);
    }
    #[inline]
    fn stopped(&self) -> bool {
        CpuState::stopped(self)
    }
    #[inline]
    fn set_stopped(&mut self, v: bool) {
        CpuState::set_stopped(self, v);
    }
    #[inline]
    fn waiting(&self) -> bool {
        CpuState::waiting(self)
    }
    #[inline]
    fn set_waiting(&mut self, v: bool) {
        CpuState::set_waiting(self, v);
    }
}
