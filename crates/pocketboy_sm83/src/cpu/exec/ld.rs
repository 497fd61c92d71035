use crate::bus::Bus;
use crate::cpu::decode::{R16, R16Mem, R8};
use crate::cpu::Cpu;

impl Cpu {
    pub(super) fn exec_ld_r16_imm16<B: Bus>(&mut self, bus: &mut B, rp: R16) -> u32 {
        let value = self.fetch16(bus);
        self.write_r16(rp, value);
        3
    }

    pub(super) fn exec_ld_r8_imm8<B: Bus>(&mut self, bus: &mut B, reg: R8) -> u32 {
        let value = self.fetch8(bus);
        self.write_r8(bus, reg, value);
        if reg == R8::HlInd { 3 } else { 2 }
    }

    pub(super) fn exec_ld_r8_r8<B: Bus>(&mut self, bus: &mut B, dst: R8, src: R8) -> u32 {
        let value = self.read_r8(bus, src);
        self.write_r8(bus, dst, value);
        if dst == R8::HlInd || src == R8::HlInd {
            2
        } else {
            1
        }
    }

    pub(super) fn exec_ld_r16mem_a<B: Bus>(&mut self, bus: &mut B, target: R16Mem) -> u32 {
        let addr = self.r16_mem_addr(target);
        bus.write8(addr, self.regs.a());
        2
    }

    pub(super) fn exec_ld_a_r16mem<B: Bus>(&mut self, bus: &mut B, source: R16Mem) -> u32 {
        let addr = self.r16_mem_addr(source);
        let value = bus.read8(addr);
        self.regs.set_a(value);
        2
    }

    /// LD (a16),SP: the only instruction that stores SP to memory.
    pub(super) fn exec_ld_imm16_sp<B: Bus>(&mut self, bus: &mut B) -> u32 {
        let addr = self.fetch16(bus);
        bus.write16(addr, self.regs.sp);
        5
    }

    pub(super) fn exec_ldh_c_a<B: Bus>(&mut self, bus: &mut B) -> u32 {
        let addr = 0xFF00 | u16::from(self.regs.c());
        bus.write8(addr, self.regs.a());
        2
    }

    pub(super) fn exec_ldh_a_c<B: Bus>(&mut self, bus: &mut B) -> u32 {
        let addr = 0xFF00 | u16::from(self.regs.c());
        let value = bus.read8(addr);
        self.regs.set_a(value);
        2
    }

    pub(super) fn exec_ldh_imm8_a<B: Bus>(&mut self, bus: &mut B) -> u32 {
        let addr = 0xFF00 | u16::from(self.fetch8(bus));
        bus.write8(addr, self.regs.a());
        3
    }

    pub(super) fn exec_ldh_a_imm8<B: Bus>(&mut self, bus: &mut B) -> u32 {
        let addr = 0xFF00 | u16::from(self.fetch8(bus));
        let value = bus.read8(addr);
        self.regs.set_a(value);
        3
    }

    pub(super) fn exec_ld_imm16_a<B: Bus>(&mut self, bus: &mut B) -> u32 {
        let addr = self.fetch16(bus);
        bus.write8(addr, self.regs.a());
        4
    }

    pub(super) fn exec_ld_a_imm16<B: Bus>(&mut self, bus: &mut B) -> u32 {
        let addr = self.fetch16(bus);
        let value = bus.read8(addr);
        self.regs.set_a(value);
        4
    }

    pub(super) fn exec_ld_sp_hl(&mut self) -> u32 {
        self.regs.sp = self.regs.hl();
        2
    }

    /// LD HL,SP+e8 shares the signed-add flag rules with ADD SP,e8 but
    /// leaves SP itself alone.
    pub(super) fn exec_ld_hl_sp_imm8<B: Bus>(&mut self, bus: &mut B) -> u32 {
        let imm = self.fetch8(bus);
        let result = self.alu_add16_signed(self.regs.sp, imm);
        self.regs.set_hl(result);
        3
    }
}
