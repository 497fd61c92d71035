//! M-cycle conformance tables for the SM83.
//!
//! The executor returns its own counts; these tables are the
//! independent reference the timing tests check every opcode against.
//! One M-cycle is four clock ticks.
//!
//! `BASE_MCYCLES` holds the cost of each unprefixed opcode with
//! conditional branches *not* taken; `taken_mcycles` gives the taken
//! cost for the opcodes that have one. The `0xCB` slot is zero: the
//! prefix has no cost of its own and the second byte is priced by
//! `cb_mcycles`. The eleven opcode holes are listed at one M-cycle,
//! the cost this core charges for reporting them.

/// Per-opcode M-cycles, conditional branches not taken.
#[rustfmt::skip]
pub const BASE_MCYCLES: [u32; 256] = [
    // x0 x1 x2 x3 x4 x5 x6 x7 x8 x9 xA xB xC xD xE xF
    1, 3, 2, 2, 1, 1, 2, 1, 5, 2, 2, 2, 1, 1, 2, 1, // 0x
    1, 3, 2, 2, 1, 1, 2, 1, 3, 2, 2, 2, 1, 1, 2, 1, // 1x
    2, 3, 2, 2, 1, 1, 2, 1, 2, 2, 2, 2, 1, 1, 2, 1, // 2x
    2, 3, 2, 2, 3, 3, 3, 1, 2, 2, 2, 2, 1, 1, 2, 1, // 3x
    1, 1, 1, 1, 1, 1, 2, 1, 1, 1, 1, 1, 1, 1, 2, 1, // 4x
    1, 1, 1, 1, 1, 1, 2, 1, 1, 1, 1, 1, 1, 1, 2, 1, // 5x
    1, 1, 1, 1, 1, 1, 2, 1, 1, 1, 1, 1, 1, 1, 2, 1, // 6x
    2, 2, 2, 2, 2, 2, 1, 2, 1, 1, 1, 1, 1, 1, 2, 1, // 7x
    1, 1, 1, 1, 1, 1, 2, 1, 1, 1, 1, 1, 1, 1, 2, 1, // 8x
    1, 1, 1, 1, 1, 1, 2, 1, 1, 1, 1, 1, 1, 1, 2, 1, // 9x
    1, 1, 1, 1, 1, 1, 2, 1, 1, 1, 1, 1, 1, 1, 2, 1, // Ax
    1, 1, 1, 1, 1, 1, 2, 1, 1, 1, 1, 1, 1, 1, 2, 1, // Bx
    2, 3, 3, 4, 3, 4, 2, 4, 2, 4, 3, 0, 3, 6, 2, 4, // Cx
    2, 3, 3, 1, 3, 4, 2, 4, 2, 4, 3, 1, 3, 1, 2, 4, // Dx
    3, 3, 2, 1, 1, 4, 2, 4, 4, 1, 4, 1, 1, 1, 2, 4, // Ex
    3, 3, 2, 1, 1, 4, 2, 4, 3, 2, 4, 1, 1, 1, 2, 4, // Fx
];

/// Taken cost for the conditional branches; `None` everywhere else.
pub fn taken_mcycles(opcode: u8) -> Option<u32> {
    match opcode {
        0x20 | 0x28 | 0x30 | 0x38 => Some(3), // JR cc
        0xC2 | 0xCA | 0xD2 | 0xDA => Some(4), // JP cc
        0xC4 | 0xCC | 0xD4 | 0xDC => Some(6), // CALL cc
        0xC0 | 0xC8 | 0xD0 | 0xD8 => Some(5), // RET cc
        _ => None,
    }
}

/// M-cycles for a CB-prefixed opcode, prefix byte included. Register
/// forms cost 2; `(HL)` forms cost 4, except BIT which only reads and
/// costs 3.
pub fn cb_mcycles(cb: u8) -> u32 {
    if cb & 0x07 != 0x06 {
        return 2;
    }
    if cb >> 6 == 0b01 { 3 } else { 4 }
}
