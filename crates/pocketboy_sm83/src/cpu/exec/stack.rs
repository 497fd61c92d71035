use crate::bus::Bus;
use crate::cpu::decode::R16Stk;
use crate::cpu::Cpu;

impl Cpu {
    pub(super) fn exec_push<B: Bus>(&mut self, bus: &mut B, rp: R16Stk) -> u32 {
        let value = self.read_r16_stk(rp);
        self.push16(bus, value);
        4
    }

    /// POP into AF goes through the masking setter; the low nibble of
    /// the loaded F reads back as zero.
    pub(super) fn exec_pop<B: Bus>(&mut self, bus: &mut B, rp: R16Stk) -> u32 {
        let value = self.pop16(bus);
        self.write_r16_stk(rp, value);
        3
    }
}
