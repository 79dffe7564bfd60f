//! Preshader programs: small constant-folding bytecode that precomputes
//! expressions feeding shader constant registers.

use crate::types::Symbol;

/// First opcode number of the scalar-form ops.
///
/// Opcodes at or above this value are the scalar variants of the vector ops
/// they alias; they share mnemonics with their vector counterparts but take a
/// scalar (broadcast) first source.
pub const SCALAR_OPS_BASE: u32 = 25;

/// A preshader opcode.
///
/// The scalar-form variants (`MinScalar` and friends) deliberately reuse the
/// mnemonic of their vector counterpart; two opcode numbers share semantics at
/// different arity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreshaderOpcode {
    Nop,
    Mov,
    Neg,
    Rcp,
    Frc,
    Exp,
    Log,
    Rsq,
    Sin,
    Cos,
    Asin,
    Acos,
    Atan,
    Min,
    Max,
    Lt,
    Ge,
    Add,
    Mul,
    Atan2,
    Div,
    Cmp,
    Movc,
    Dot,
    Noise,
    MinScalar,
    MaxScalar,
    LtScalar,
    GeScalar,
    AddScalar,
    MulScalar,
    Atan2Scalar,
    DivScalar,
    DotScalar,
    NoiseScalar,
    Unknown(u32),
}

impl PreshaderOpcode {
    pub fn from_raw(raw: u32) -> Self {
        match raw {
            0 => Self::Nop,
            1 => Self::Mov,
            2 => Self::Neg,
            3 => Self::Rcp,
            4 => Self::Frc,
            5 => Self::Exp,
            6 => Self::Log,
            7 => Self::Rsq,
            8 => Self::Sin,
            9 => Self::Cos,
            10 => Self::Asin,
            11 => Self::Acos,
            12 => Self::Atan,
            13 => Self::Min,
            14 => Self::Max,
            15 => Self::Lt,
            16 => Self::Ge,
            17 => Self::Add,
            18 => Self::Mul,
            19 => Self::Atan2,
            20 => Self::Div,
            21 => Self::Cmp,
            22 => Self::Movc,
            23 => Self::Dot,
            24 => Self::Noise,
            25 => Self::MinScalar,
            26 => Self::MaxScalar,
            27 => Self::LtScalar,
            28 => Self::GeScalar,
            29 => Self::AddScalar,
            30 => Self::MulScalar,
            31 => Self::Atan2Scalar,
            32 => Self::DivScalar,
            33 => Self::DotScalar,
            34 => Self::NoiseScalar,
            other => Self::Unknown(other),
        }
    }

    #[deny(unreachable_patterns)]
    pub fn raw(&self) -> u32 {
        match self {
            Self::Nop => 0,
            Self::Mov => 1,
            Self::Neg => 2,
            Self::Rcp => 3,
            Self::Frc => 4,
            Self::Exp => 5,
            Self::Log => 6,
            Self::Rsq => 7,
            Self::Sin => 8,
            Self::Cos => 9,
            Self::Asin => 10,
            Self::Acos => 11,
            Self::Atan => 12,
            Self::Min => 13,
            Self::Max => 14,
            Self::Lt => 15,
            Self::Ge => 16,
            Self::Add => 17,
            Self::Mul => 18,
            Self::Atan2 => 19,
            Self::Div => 20,
            Self::Cmp => 21,
            Self::Movc => 22,
            Self::Dot => 23,
            Self::Noise => 24,
            Self::MinScalar => 25,
            Self::MaxScalar => 26,
            Self::LtScalar => 27,
            Self::GeScalar => 28,
            Self::AddScalar => 29,
            Self::MulScalar => 30,
            Self::Atan2Scalar => 31,
            Self::DivScalar => 32,
            Self::DotScalar => 33,
            Self::NoiseScalar => 34,
            Self::Unknown(raw) => *raw,
        }
    }

    /// Mnemonic used in disassembly. Scalar-form opcodes alias the mnemonic
    /// of their vector counterpart on purpose.
    pub fn mnemonic(&self) -> &'static str {
        match self {
            Self::Nop => "nop",
            Self::Mov => "mov",
            Self::Neg => "neg",
            Self::Rcp => "rcp",
            Self::Frc => "frc",
            Self::Exp => "exp",
            Self::Log => "log",
            Self::Rsq => "rsq",
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Asin => "asin",
            Self::Acos => "acos",
            Self::Atan => "atan",
            Self::Min | Self::MinScalar => "min",
            Self::Max | Self::MaxScalar => "max",
            Self::Lt | Self::LtScalar => "lt",
            Self::Ge | Self::GeScalar => "ge",
            Self::Add | Self::AddScalar => "add",
            Self::Mul | Self::MulScalar => "mul",
            Self::Atan2 | Self::Atan2Scalar => "atan2",
            Self::Div | Self::DivScalar => "div",
            Self::Cmp => "cmp",
            Self::Movc => "movc",
            Self::Dot | Self::DotScalar => "dot",
            Self::Noise | Self::NoiseScalar => "noise",
            Self::Unknown(_) => "unknown",
        }
    }

    /// True for scalar-form ops.
    ///
    /// Defined on the raw opcode number so that unrecognized high opcodes
    /// classify the same way they always did.
    pub fn is_scalar_class(&self) -> bool {
        self.raw() >= SCALAR_OPS_BASE
    }
}

/// Where a preshader operand's data comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreshaderOperandKind {
    Input,
    Output,
    Literal,
    Temp,
    Unknown(u32),
}

impl PreshaderOperandKind {
    pub fn from_raw(raw: u32) -> Self {
        match raw {
            0 => Self::Input,
            1 => Self::Output,
            2 => Self::Literal,
            3 => Self::Temp,
            other => Self::Unknown(other),
        }
    }

    pub fn raw(&self) -> u32 {
        match self {
            Self::Input => 0,
            Self::Output => 1,
            Self::Literal => 2,
            Self::Temp => 3,
            Self::Unknown(raw) => *raw,
        }
    }
}

/// One operand of a preshader instruction.
///
/// `index` is a flat component index: register number `index / 4`, starting
/// component `index % 4`. A non-empty `array_registers` stack means indirect
/// addressing through constant registers, most-significant index first.
#[derive(Debug, Clone, PartialEq)]
pub struct PreshaderOperand {
    pub kind: PreshaderOperandKind,
    pub index: u32,
    pub array_registers: Vec<u32>,
}

/// One decoded preshader instruction.
///
/// The destination is always the last operand; the sources are the remaining
/// operands in order. `element_count` is the number of vector components the
/// instruction touches.
#[derive(Debug, Clone, PartialEq)]
pub struct PreshaderInstruction {
    pub opcode: PreshaderOpcode,
    pub element_count: u32,
    pub operands: Vec<PreshaderOperand>,
}

/// A complete preshader program.
#[derive(Debug, Clone, PartialEq)]
pub struct Preshader {
    pub literals: Vec<f64>,
    pub symbols: Vec<Symbol>,
    pub instructions: Vec<PreshaderInstruction>,
}
