use crate::bus::Bus;
use crate::cpu::Cpu;

impl Cpu {
    /// HALT idles the core until `request_interrupt` wakes it. The
    /// IME=0 halt bug (the double-fetched byte) is not modelled: the
    /// core cannot see IE/IF, so it has no way to know an interrupt was
    /// already pending at the moment HALT executed.
    pub(super) fn exec_halt(&mut self) -> u32 {
        self.halted = true;
        1
    }

    /// STOP is a two-byte instruction; the padding byte is consumed so
    /// PC matches hardware. The core stays stopped until `reset`;
    /// speed switching and joypad wake-up live outside the bus
    /// contract.
    pub(super) fn exec_stop<B: Bus>(&mut self, bus: &mut B) -> u32 {
        let _padding = self.fetch8(bus);
        self.stopped = true;
        self.halted = false;
        1
    }

    /// DI takes effect immediately and cancels a pending EI.
    pub(super) fn exec_di(&mut self) -> u32 {
        self.ime = false;
        self.ime_pending = 0;
        1
    }

    /// EI arms the delayed enable; the step driver flips IME after the
    /// *next* instruction finishes.
    pub(super) fn exec_ei(&mut self) -> u32 {
        self.ime_pending = 1;
        1
    }

    /// Opcode holes: report and keep going. PC has already moved past
    /// the byte; no other state is touched. Real hardware hard-locks
    /// here.
    pub(super) fn exec_undefined(&mut self, opcode: u8) -> u32 {
        log::error!(
            "undefined opcode {opcode:#04X} at {pc:#06X} (AF={af:#06X} BC={bc:#06X} DE={de:#06X} HL={hl:#06X} SP={sp:#06X})",
            opcode = opcode,
            pc = self.regs.pc.wrapping_sub(1),
            af = self.regs.af(),
            bc = self.regs.bc(),
            de = self.regs.de(),
            hl = self.regs.hl(),
            sp = self.regs.sp,
        );
        1
    }
}
