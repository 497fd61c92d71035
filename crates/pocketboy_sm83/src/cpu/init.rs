use super::{Cpu, Registers};

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu {
    pub fn new() -> Self {
        let mut cpu = Self {
            regs: Registers::default(),
            ime: false,
            halted: false,
            stopped: false,
            ime_pending: 0,
        };
        cpu.apply_post_boot_state();
        cpu
    }

    /// Return the CPU to the post-boot-ROM state. Register contents at
    /// real power-on are undefined; what is architecturally required is
    /// PC/SP and the cleared interrupt state, and callers are free to
    /// overwrite the rest through `regs`.
    pub fn reset(&mut self) {
        self.regs = Registers::default();
        self.ime = false;
        self.halted = false;
        self.stopped = false;
        self.ime_pending = 0;
        self.apply_post_boot_state();
    }

    /// Register values the DMG boot ROM leaves behind when it hands
    /// control to the cartridge at 0x0100, per Pan Docs.
    fn apply_post_boot_state(&mut self) {
        self.regs.set_af(0x01B0);
        self.regs.set_bc(0x0013);
        self.regs.set_de(0x00D8);
        self.regs.set_hl(0x014D);
        self.regs.sp = 0xFFFE;
        self.regs.pc = 0x0100;
    }
}
