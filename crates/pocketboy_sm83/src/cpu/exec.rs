mod alu;
mod bits;
mod control;
mod incdec;
mod ld;
mod stack;
mod system;

use crate::bus::Bus;

use super::decode::Instruction;
use super::Cpu;

impl Cpu {
    /// Execute one decoded instruction and return its cost in M-cycles.
    ///
    /// Handlers commit PC as they go: immediate fetches advance it,
    /// jumps overwrite it, so `regs.pc` holds the next PC when this
    /// returns.
    pub(super) fn execute<B: Bus>(&mut self, bus: &mut B, instr: Instruction) -> u32 {
        use Instruction::*;

        match instr {
            Nop => 1,
            Stop => self.exec_stop(bus),
            Halt => self.exec_halt(),

            LdR16Imm16(rp) => self.exec_ld_r16_imm16(bus, rp),
            LdR16MemA(target) => self.exec_ld_r16mem_a(bus, target),
            LdAR16Mem(source) => self.exec_ld_a_r16mem(bus, source),
            LdImm16Sp => self.exec_ld_imm16_sp(bus),
            LdR8Imm8(reg) => self.exec_ld_r8_imm8(bus, reg),
            LdR8R8 { dst, src } => self.exec_ld_r8_r8(bus, dst, src),
            LdhCA => self.exec_ldh_c_a(bus),
            LdhAC => self.exec_ldh_a_c(bus),
            LdhImm8A => self.exec_ldh_imm8_a(bus),
            LdhAImm8 => self.exec_ldh_a_imm8(bus),
            LdImm16A => self.exec_ld_imm16_a(bus),
            LdAImm16 => self.exec_ld_a_imm16(bus),
            LdSpHl => self.exec_ld_sp_hl(),
            LdHlSpImm8 => self.exec_ld_hl_sp_imm8(bus),

            IncR16(rp) => self.exec_inc16(rp),
            DecR16(rp) => self.exec_dec16(rp),
            AddHlR16(rp) => self.exec_add_hl_r16(rp),
            AddSpImm8 => self.exec_add_sp_imm8(bus),
            IncR8(reg) => self.exec_inc8(bus, reg),
            DecR8(reg) => self.exec_dec8(bus, reg),
            AluR8(op, src) => self.exec_alu_r8(bus, op, src),
            AluImm8(op) => self.exec_alu_imm8(bus, op),

            Rlca => self.exec_rlca(),
            Rrca => self.exec_rrca(),
            Rla => self.exec_rla(),
            Rra => self.exec_rra(),
            Daa => self.exec_daa(),
            Cpl => self.exec_cpl(),
            Scf => self.exec_scf(),
            Ccf => self.exec_ccf(),

            JrImm8 => self.jr(bus, true),
            JrCond(cc) => self.jr(bus, self.cond_met(cc)),
            JpImm16 => self.jp(bus, true),
            JpCond(cc) => self.jp(bus, self.cond_met(cc)),
            JpHl => self.exec_jp_hl(),
            CallImm16 => self.call(bus, true),
            CallCond(cc) => self.call(bus, self.cond_met(cc)),
            Ret => self.exec_ret(bus),
            RetCond(cc) => self.ret_cond(bus, self.cond_met(cc)),
            Reti => self.exec_reti(bus),
            Rst(target) => self.exec_rst(bus, target),

            Push(rp) => self.exec_push(bus, rp),
            Pop(rp) => self.exec_pop(bus, rp),

            Di => self.exec_di(),
            Ei => self.exec_ei(),

            Shift(op, reg) => self.exec_shift(bus, op, reg),
            Bit(bit, reg) => self.exec_bit(bus, bit, reg),
            Res(bit, reg) => self.exec_res(bus, bit, reg),
            Set(bit, reg) => self.exec_set(bus, bit, reg),

            Undefined(opcode) => self.exec_undefined(opcode),
        }
    }
}
