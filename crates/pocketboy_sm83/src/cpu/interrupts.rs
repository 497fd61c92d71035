use crate::bus::Bus;

use super::Cpu;

/// The five maskable interrupt lines, in priority order. Which line is
/// pending when is the machine's business; the core only needs the
/// vector to jump through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InterruptSource {
    VBlank,
    LcdStat,
    Timer,
    Serial,
    Joypad,
}

impl InterruptSource {
    /// Fixed dispatch vector for this line.
    pub fn vector(self) -> u16 {
        match self {
            InterruptSource::VBlank => 0x0040,
            InterruptSource::LcdStat => 0x0048,
            InterruptSource::Timer => 0x0050,
            InterruptSource::Serial => 0x0058,
            InterruptSource::Joypad => 0x0060,
        }
    }
}

impl Cpu {
    /// Inject an interrupt from the outside.
    ///
    /// Waking from HALT does not depend on IME: a pending line always
    /// clears `halted`. Dispatch does depend on it; with IME clear
    /// nothing else happens and the cost is 0. Otherwise IME drops
    /// (along with any EI still in flight), the current PC goes to the
    /// stack, and execution continues at the line's vector. STOP is
    /// unaffected.
    pub fn request_interrupt<B: Bus>(&mut self, bus: &mut B, source: InterruptSource) -> u32 {
        self.halted = false;

        if !self.ime {
            return 0;
        }

        self.ime = false;
        self.ime_pending = 0;

        let pc = self.regs.pc;
        self.push16(bus, pc);
        self.regs.pc = source.vector();

        log::debug!(
            "interrupt dispatch: {source:?} vector={vector:#06X} from pc={pc:#06X} sp={sp:#06X}",
            source = source,
            vector = self.regs.pc,
            pc = pc,
            sp = self.regs.sp,
        );

        // Two internal wait states, two stack pushes, one vector fetch.
        5
    }
}
