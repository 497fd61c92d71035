use crate::bus::Bus;

use super::decode::decode;
use super::Cpu;

impl Cpu {
    /// Execute a single instruction and return its cost in M-cycles.
    ///
    /// While halted or stopped the core burns one idle M-cycle per call
    /// and leaves PC alone; HALT is left via `request_interrupt`, STOP
    /// via `reset`.
    ///
    /// The EI delay works by sampling the counter before executing: an
    /// EI can only arm it *during* its own slot, so the enable lands
    /// after the following instruction. A DI in that window zeroes the
    /// counter again and the enable is dropped.
    pub fn step<B: Bus>(&mut self, bus: &mut B) -> u32 {
        if self.halted || self.stopped {
            return 1;
        }

        let ei_seen_before = self.ime_pending;

        let opcode = self.fetch8(bus);
        let instr = decode(opcode, || self.fetch8(bus));
        let cycles = self.execute(bus, instr);

        if ei_seen_before != 0 && self.ime_pending != 0 {
            self.ime = true;
            self.ime_pending = 0;
        }

        cycles
    }
}
