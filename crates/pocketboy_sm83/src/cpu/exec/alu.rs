use crate::bus::Bus;
use crate::cpu::decode::{AluOp, R16, R8};
use crate::cpu::{Cpu, Flag};

impl Cpu {
    pub(super) fn exec_alu_r8<B: Bus>(&mut self, bus: &mut B, op: AluOp, src: R8) -> u32 {
        let value = self.read_r8(bus, src);
        self.apply_alu(op, value);
        if src == R8::HlInd { 2 } else { 1 }
    }

    pub(super) fn exec_alu_imm8<B: Bus>(&mut self, bus: &mut B, op: AluOp) -> u32 {
        let value = self.fetch8(bus);
        self.apply_alu(op, value);
        2
    }

    fn apply_alu(&mut self, op: AluOp, value: u8) {
        match op {
            AluOp::Add => self.alu_add(value, false),
            AluOp::Adc => self.alu_add(value, true),
            AluOp::Sub => self.alu_sub(value, false),
            AluOp::Sbc => self.alu_sub(value, true),
            AluOp::And => self.alu_and(value),
            AluOp::Xor => self.alu_xor(value),
            AluOp::Or => self.alu_or(value),
            AluOp::Cp => self.alu_cp(value),
        }
    }

    pub(super) fn exec_add_hl_r16(&mut self, rp: R16) -> u32 {
        let value = self.read_r16(rp);
        self.alu_add16_hl(value);
        2
    }

    pub(super) fn exec_add_sp_imm8<B: Bus>(&mut self, bus: &mut B) -> u32 {
        let imm = self.fetch8(bus);
        self.regs.sp = self.alu_add16_signed(self.regs.sp, imm);
        4
    }

    // The unprefixed rotates on A always clear Z, unlike their CB
    // cousins.

    pub(super) fn exec_rlca(&mut self) -> u32 {
        let a = self.regs.a();
        self.regs.clear_flags();
        self.regs.set_flag(Flag::C, a & 0x80 != 0);
        self.regs.set_a(a.rotate_left(1));
        1
    }

    pub(super) fn exec_rrca(&mut self) -> u32 {
        let a = self.regs.a();
        self.regs.clear_flags();
        self.regs.set_flag(Flag::C, a & 0x01 != 0);
        self.regs.set_a(a.rotate_right(1));
        1
    }

    pub(super) fn exec_rla(&mut self) -> u32 {
        let a = self.regs.a();
        let carry_in = u8::from(self.regs.flag(Flag::C));
        self.regs.clear_flags();
        self.regs.set_flag(Flag::C, a & 0x80 != 0);
        self.regs.set_a(a << 1 | carry_in);
        1
    }

    pub(super) fn exec_rra(&mut self) -> u32 {
        let a = self.regs.a();
        let carry_in = u8::from(self.regs.flag(Flag::C)) << 7;
        self.regs.clear_flags();
        self.regs.set_flag(Flag::C, a & 0x01 != 0);
        self.regs.set_a(a >> 1 | carry_in);
        1
    }

    pub(super) fn exec_daa(&mut self) -> u32 {
        self.alu_daa();
        1
    }

    pub(super) fn exec_cpl(&mut self) -> u32 {
        self.regs.set_a(!self.regs.a());
        self.regs.set_flag(Flag::N, true);
        self.regs.set_flag(Flag::H, true);
        1
    }

    pub(super) fn exec_scf(&mut self) -> u32 {
        self.regs.set_flag(Flag::C, true);
        self.regs.set_flag(Flag::N, false);
        self.regs.set_flag(Flag::H, false);
        1
    }

    pub(super) fn exec_ccf(&mut self) -> u32 {
        let carry = self.regs.flag(Flag::C);
        self.regs.set_flag(Flag::C, !carry);
        self.regs.set_flag(Flag::N, false);
        self.regs.set_flag(Flag::H, false);
        1
    }
}
