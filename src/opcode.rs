use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OperandKind {
    Register,
    Immediate,
}

impl OperandKind {
    /// Encoded width in bytes.
    pub fn width(self) -> usize {
        match self {
            OperandKind::Register => 1,
            OperandKind::Immediate => 8,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct OpDesc {
    pub mnemonic: &'static str,
    pub code: u8,
    pub shape: &'static [OperandKind],
}

use OperandKind::{Immediate as I, Register as R};

const NONE: &[OperandKind] = &[];
const REG: &[OperandKind] = &[R];
const REG2: &[OperandKind] = &[R, R];
const REG3: &[OperandKind] = &[R, R, R];
const REG_IMM: &[OperandKind] = &[R, I];

pub const TABLE: &[OpDesc] = &[
    OpDesc { mnemonic: "NOP", code: 0xF1, shape: NONE },
    OpDesc { mnemonic: "RET", code: 0xF2, shape: NONE },
    OpDesc { mnemonic: "IL", code: 0xF3, shape: NONE },
    OpDesc { mnemonic: "IU", code: 0xF4, shape: NONE },
    OpDesc { mnemonic: "INT", code: 0x81, shape: REG },
    OpDesc { mnemonic: "LPC", code: 0x82, shape: REG },
    OpDesc { mnemonic: "LSP", code: 0x83, shape: REG },
    OpDesc { mnemonic: "LIP", code: 0x84, shape: REG },
    OpDesc { mnemonic: "LCR", code: 0x85, shape: REG },
    OpDesc { mnemonic: "NOT", code: 0x86, shape: REG },
    OpDesc { mnemonic: "PUS", code: 0x87, shape: REG },
    OpDesc { mnemonic: "POP", code: 0x88, shape: REG },
    OpDesc { mnemonic: "SIP", code: 0x89, shape: REG },
    OpDesc { mnemonic: "SSP", code: 0x8A, shape: REG },
    OpDesc { mnemonic: "SCR", code: 0x8B, shape: REG },
    OpDesc { mnemonic: "L", code: 0x01, shape: REG2 },
    OpDesc { mnemonic: "LS", code: 0x02, shape: REG2 },
    OpDesc { mnemonic: "ST", code: 0x03, shape: REG2 },
    OpDesc { mnemonic: "A", code: 0x04, shape: REG2 },
    OpDesc { mnemonic: "AU", code: 0x05, shape: REG2 },
    OpDesc { mnemonic: "S", code: 0x06, shape: REG2 },
    OpDesc { mnemonic: "SU", code: 0x07, shape: REG2 },
    OpDesc { mnemonic: "M", code: 0x08, shape: REG2 },
    OpDesc { mnemonic: "MU", code: 0x09, shape: REG2 },
    OpDesc { mnemonic: "AND", code: 0x0A, shape: REG2 },
    OpDesc { mnemonic: "OR", code: 0x0B, shape: REG2 },
    OpDesc { mnemonic: "XOR", code: 0x0C, shape: REG2 },
    OpDesc { mnemonic: "B", code: 0x0D, shape: REG2 },
    OpDesc { mnemonic: "BAS", code: 0x0E, shape: REG2 },
    OpDesc { mnemonic: "CP", code: 0x0F, shape: REG2 },
    OpDesc { mnemonic: "CPU", code: 0x10, shape: REG2 },
    OpDesc { mnemonic: "SHL", code: 0x11, shape: REG2 },
    OpDesc { mnemonic: "SHR", code: 0x12, shape: REG2 },
    OpDesc { mnemonic: "D", code: 0xC1, shape: REG3 },
    OpDesc { mnemonic: "DU", code: 0xC2, shape: REG3 },
    OpDesc { mnemonic: "BAL", code: 0xC3, shape: REG3 },
    OpDesc { mnemonic: "LSM", code: 0xC4, shape: REG3 },
    OpDesc { mnemonic: "STM", code: 0xC5, shape: REG3 },
    OpDesc { mnemonic: "LUM", code: 0xC6, shape: REG3 },
    OpDesc { mnemonic: "SUM", code: 0xC7, shape: REG3 },
    OpDesc { mnemonic: "LI", code: 0xE1, shape: REG_IMM },
];

/// Exact, case-sensitive lookup against the fixed table.
pub fn lookup(mnemonic: &str) -> Option<&'static OpDesc> {
    TABLE.iter().find(|d| d.mnemonic == mnemonic)
}
