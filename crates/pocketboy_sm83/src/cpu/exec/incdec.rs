use crate::bus::Bus;
use crate::cpu::decode::{R16, R8};
use crate::cpu::Cpu;

impl Cpu {
    pub(super) fn exec_inc8<B: Bus>(&mut self, bus: &mut B, reg: R8) -> u32 {
        let value = self.read_r8(bus, reg);
        let result = self.alu_inc8(value);
        self.write_r8(bus, reg, result);
        if reg == R8::HlInd { 3 } else { 1 }
    }

    pub(super) fn exec_dec8<B: Bus>(&mut self, bus: &mut B, reg: R8) -> u32 {
        let value = self.read_r8(bus, reg);
        let result = self.alu_dec8(value);
        self.write_r8(bus, reg, result);
        if reg == R8::HlInd { 3 } else { 1 }
    }

    // 16-bit INC/DEC run through the dedicated address adder and leave
    // the flags alone.

    pub(super) fn exec_inc16(&mut self, rp: R16) -> u32 {
        let value = self.read_r16(rp).wrapping_add(1);
        self.write_r16(rp, value);
        2
    }

    pub(super) fn exec_dec16(&mut self, rp: R16) -> u32 {
        let value = self.read_r16(rp).wrapping_sub(1);
        self.write_r16(rp, value);
        2
    }
}
