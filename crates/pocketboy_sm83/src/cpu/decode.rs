//! Opcode decoding for the SM83.
//!
//! `decode` is a pure, total function from an opcode byte to an
//! [`Instruction`] carrying the operand selectors embedded in the bit
//! pattern. It never touches CPU or bus state; the executor fetches
//! immediates itself. The only extra byte the decoder consumes is the
//! second opcode byte behind the `0xCB` prefix, pulled through the
//! `fetch_next` callback.
//!
//! The unprefixed space splits into four blocks on the top two opcode
//! bits, and each block is matched the way the SM83 manual lays it out.
//! A full-table decode keyed on the exact byte would work as well; the
//! block match keeps the selector extraction readable.

/// 8-bit operand selector. Index 6 is the memory byte at `HL`, not a
/// register.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum R8 {
    B,
    C,
    D,
    E,
    H,
    L,
    HlInd,
    A,
}

impl R8 {
    /// Selector from the low three bits of `bits`.
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0x07 {
            0 => R8::B,
            1 => R8::C,
            2 => R8::D,
            3 => R8::E,
            4 => R8::H,
            5 => R8::L,
            6 => R8::HlInd,
            _ => R8::A,
        }
    }
}

/// 16-bit pair selector used by arithmetic and immediate loads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum R16 {
    Bc,
    De,
    Hl,
    Sp,
}

impl R16 {
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0x03 {
            0 => R16::Bc,
            1 => R16::De,
            2 => R16::Hl,
            _ => R16::Sp,
        }
    }
}

/// Pair selector for PUSH/POP; swaps SP for AF.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum R16Stk {
    Bc,
    De,
    Hl,
    Af,
}

impl R16Stk {
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0x03 {
            0 => R16Stk::Bc,
            1 => R16Stk::De,
            2 => R16Stk::Hl,
            _ => R16Stk::Af,
        }
    }
}

/// Pair selector for indirect loads. `Hli`/`Hld` post-increment and
/// post-decrement HL after the access.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum R16Mem {
    Bc,
    De,
    Hli,
    Hld,
}

impl R16Mem {
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0x03 {
            0 => R16Mem::Bc,
            1 => R16Mem::De,
            2 => R16Mem::Hli,
            _ => R16Mem::Hld,
        }
    }
}

/// Branch predicate over the flag register.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cond {
    Nz,
    Z,
    Nc,
    C,
}

impl Cond {
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0x03 {
            0 => Cond::Nz,
            1 => Cond::Z,
            2 => Cond::Nc,
            _ => Cond::C,
        }
    }
}

/// The eight accumulator ALU operations, in opcode order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AluOp {
    Add,
    Adc,
    Sub,
    Sbc,
    And,
    Xor,
    Or,
    Cp,
}

impl AluOp {
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0x07 {
            0 => AluOp::Add,
            1 => AluOp::Adc,
            2 => AluOp::Sub,
            3 => AluOp::Sbc,
            4 => AluOp::And,
            5 => AluOp::Xor,
            6 => AluOp::Or,
            _ => AluOp::Cp,
        }
    }
}

/// The eight CB-prefixed rotate/shift operations, in opcode order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShiftOp {
    Rlc,
    Rrc,
    Rl,
    Rr,
    Sla,
    Sra,
    Swap,
    Srl,
}

impl ShiftOp {
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0x07 {
            0 => ShiftOp::Rlc,
            1 => ShiftOp::Rrc,
            2 => ShiftOp::Rl,
            3 => ShiftOp::Rr,
            4 => ShiftOp::Sla,
            5 => ShiftOp::Sra,
            6 => ShiftOp::Swap,
            _ => ShiftOp::Srl,
        }
    }
}

/// A decoded instruction: one variant per handler, selectors attached.
/// Immediate operands are not part of the decoded form; the executor
/// fetches them from the byte stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction {
    Nop,
    Stop,
    Halt,

    LdR16Imm16(R16),
    LdR16MemA(R16Mem),
    LdAR16Mem(R16Mem),
    LdImm16Sp,
    LdR8Imm8(R8),
    LdR8R8 { dst: R8, src: R8 },
    LdhCA,
    LdhAC,
    LdhImm8A,
    LdhAImm8,
    LdImm16A,
    LdAImm16,
    LdSpHl,
    LdHlSpImm8,

    IncR16(R16),
    DecR16(R16),
    AddHlR16(R16),
    AddSpImm8,
    IncR8(R8),
    DecR8(R8),
    AluR8(AluOp, R8),
    AluImm8(AluOp),

    Rlca,
    Rrca,
    Rla,
    Rra,
    Daa,
    Cpl,
    Scf,
    Ccf,

    JrImm8,
    JrCond(Cond),
    JpImm16,
    JpCond(Cond),
    JpHl,
    CallImm16,
    CallCond(Cond),
    Ret,
    RetCond(Cond),
    Reti,
    /// Restart; the target index 0..7 selects vector `index * 8`.
    Rst(u8),

    Push(R16Stk),
    Pop(R16Stk),

    Di,
    Ei,

    Shift(ShiftOp, R8),
    Bit(u8, R8),
    Res(u8, R8),
    Set(u8, R8),

    /// One of the eleven opcode holes (D3, DB, DD, E3, E4, EB, EC, ED,
    /// F4, FC, FD). Carries the raw byte for diagnostics.
    Undefined(u8),
}

/// Decode one instruction. `fetch_next` is called exactly once, and
/// only when `opcode` is the `0xCB` prefix.
pub fn decode(opcode: u8, fetch_next: impl FnOnce() -> u8) -> Instruction {
    match opcode {
        0xCB => decode_cb(fetch_next()),
        0x00..=0x3F => decode_block0(opcode),
        0x40..=0x7F => decode_block1(opcode),
        0x80..=0xBF => Instruction::AluR8(AluOp::from_bits(opcode >> 3), R8::from_bits(opcode)),
        0xC0..=0xFF => decode_block3(opcode),
    }
}

/// Block 0 (`00xxxxxx`): loads, 16-bit arithmetic, INC/DEC, rotates on
/// A, relative jumps, NOP/STOP.
fn decode_block0(opcode: u8) -> Instruction {
    use Instruction::*;

    match opcode {
        0x00 => Nop,
        0x10 => Stop,
        0x08 => LdImm16Sp,
        0x07 => Rlca,
        0x0F => Rrca,
        0x17 => Rla,
        0x1F => Rra,
        0x27 => Daa,
        0x2F => Cpl,
        0x37 => Scf,
        0x3F => Ccf,
        0x18 => JrImm8,
        0x20 | 0x28 | 0x30 | 0x38 => JrCond(Cond::from_bits(opcode >> 3)),
        _ => match opcode & 0x0F {
            0x01 => LdR16Imm16(R16::from_bits(opcode >> 4)),
            0x02 => LdR16MemA(R16Mem::from_bits(opcode >> 4)),
            0x0A => LdAR16Mem(R16Mem::from_bits(opcode >> 4)),
            0x03 => IncR16(R16::from_bits(opcode >> 4)),
            0x0B => DecR16(R16::from_bits(opcode >> 4)),
            0x09 => AddHlR16(R16::from_bits(opcode >> 4)),
            // Remaining columns encode the destination in bits 5..3.
            _ => match opcode & 0x07 {
                0x04 => IncR8(R8::from_bits(opcode >> 3)),
                0x05 => DecR8(R8::from_bits(opcode >> 3)),
                0x06 => LdR8Imm8(R8::from_bits(opcode >> 3)),
                _ => unreachable!("block 0 opcode {opcode:#04X} not covered"),
            },
        },
    }
}

/// Block 1 (`01xxxxxx`): LD r8, r8, except `0x76`: the pattern would
/// read it as LD (HL), (HL) and the hardware repurposes it as HALT.
fn decode_block1(opcode: u8) -> Instruction {
    if opcode == 0x76 {
        Instruction::Halt
    } else {
        Instruction::LdR8R8 {
            dst: R8::from_bits(opcode >> 3),
            src: R8::from_bits(opcode),
        }
    }
}

/// Block 3 (`11xxxxxx`): control flow, stack ops, IO-page loads, the
/// immediate ALU column, DI/EI, and the opcode holes.
fn decode_block3(opcode: u8) -> Instruction {
    use Instruction::*;

    match opcode {
        0xC6 | 0xCE | 0xD6 | 0xDE | 0xE6 | 0xEE | 0xF6 | 0xFE => {
            AluImm8(AluOp::from_bits(opcode >> 3))
        }
        0xC0 | 0xC8 | 0xD0 | 0xD8 => RetCond(Cond::from_bits(opcode >> 3)),
        0xC9 => Ret,
        0xD9 => Reti,
        0xC2 | 0xCA | 0xD2 | 0xDA => JpCond(Cond::from_bits(opcode >> 3)),
        0xC3 => JpImm16,
        0xE9 => JpHl,
        0xC4 | 0xCC | 0xD4 | 0xDC => CallCond(Cond::from_bits(opcode >> 3)),
        0xCD => CallImm16,
        0xC7 | 0xCF | 0xD7 | 0xDF | 0xE7 | 0xEF | 0xF7 | 0xFF => Rst((opcode >> 3) & 0x07),
        0xC5 | 0xD5 | 0xE5 | 0xF5 => Push(R16Stk::from_bits(opcode >> 4)),
        0xC1 | 0xD1 | 0xE1 | 0xF1 => Pop(R16Stk::from_bits(opcode >> 4)),
        0xE0 => LdhImm8A,
        0xF0 => LdhAImm8,
        0xE2 => LdhCA,
        0xF2 => LdhAC,
        0xEA => LdImm16A,
        0xFA => LdAImm16,
        0xE8 => AddSpImm8,
        0xF8 => LdHlSpImm8,
        0xF9 => LdSpHl,
        0xF3 => Di,
        0xFB => Ei,
        _ => Undefined(opcode),
    }
}

/// CB block: rotates/shifts in the top quarter, then BIT/RES/SET with
/// the bit index in bits 5..3.
fn decode_cb(cb: u8) -> Instruction {
    let reg = R8::from_bits(cb);
    match cb >> 6 {
        0 => Instruction::Shift(ShiftOp::from_bits(cb >> 3), reg),
        1 => Instruction::Bit((cb >> 3) & 0x07, reg),
        2 => Instruction::Res((cb >> 3) & 0x07, reg),
        _ => Instruction::Set((cb >> 3) & 0x07, reg),
    }
}
