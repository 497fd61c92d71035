use crate::bus::Bus;
use crate::cpu::decode::{R8, ShiftOp};
use crate::cpu::{Cpu, Flag};

impl Cpu {
    /// CB rotates and shifts. Unlike the unprefixed rotates on A these
    /// compute Z from the result.
    pub(super) fn exec_shift<B: Bus>(&mut self, bus: &mut B, op: ShiftOp, reg: R8) -> u32 {
        let value = self.read_r8(bus, reg);
        let carry_in = u8::from(self.regs.flag(Flag::C));

        let (result, carry_out) = match op {
            ShiftOp::Rlc => (value.rotate_left(1), value & 0x80 != 0),
            ShiftOp::Rrc => (value.rotate_right(1), value & 0x01 != 0),
            ShiftOp::Rl => (value << 1 | carry_in, value & 0x80 != 0),
            ShiftOp::Rr => (value >> 1 | carry_in << 7, value & 0x01 != 0),
            ShiftOp::Sla => (value << 1, value & 0x80 != 0),
            // Arithmetic shift keeps the sign bit.
            ShiftOp::Sra => (value >> 1 | value & 0x80, value & 0x01 != 0),
            ShiftOp::Swap => (value << 4 | value >> 4, false),
            ShiftOp::Srl => (value >> 1, value & 0x01 != 0),
        };

        self.regs.clear_flags();
        self.regs.set_flag(Flag::Z, result == 0);
        self.regs.set_flag(Flag::C, carry_out);
        self.write_r8(bus, reg, result);

        if reg == R8::HlInd { 4 } else { 2 }
    }

    /// BIT b,r8: only Z/N/H change; C survives.
    pub(super) fn exec_bit<B: Bus>(&mut self, bus: &mut B, bit: u8, reg: R8) -> u32 {
        let value = self.read_r8(bus, reg);
        self.regs.set_flag(Flag::Z, value & (1 << bit) == 0);
        self.regs.set_flag(Flag::N, false);
        self.regs.set_flag(Flag::H, true);
        if reg == R8::HlInd { 3 } else { 2 }
    }

    pub(super) fn exec_res<B: Bus>(&mut self, bus: &mut B, bit: u8, reg: R8) -> u32 {
        let value = self.read_r8(bus, reg);
        self.write_r8(bus, reg, value & !(1 << bit));
        if reg == R8::HlInd { 4 } else { 2 }
    }

    pub(super) fn exec_set<B: Bus>(&mut self, bus: &mut B, bit: u8, reg: R8) -> u32 {
        let value = self.read_r8(bus, reg);
        self.write_r8(bus, reg, value | 1 << bit);
        if reg == R8::HlInd { 4 } else { 2 }
    }
}
