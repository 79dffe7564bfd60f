//! The parsed representation of one compiled shader, as produced by the
//! external bytecode compiler.

use crate::preshader::Preshader;
use crate::types::{SamplerKind, ShaderKind, Symbol, UniformKind, Usage};

/// One compile/parse diagnostic attached to a shader or effect.
///
/// This is data, not a Rust error: a non-empty diagnostic list replaces the
/// structural report for the entity that carries it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// Source file the diagnostic refers to; reporting falls back to the
    /// caller-supplied source name when absent.
    pub filename: Option<String>,
    pub position: i32,
    pub message: String,
}

/// A declared shader input or output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub usage: Usage,
    /// Usage index; 0 renders without a numeric suffix.
    pub index: u32,
    pub name: Option<String>,
}

/// Value of an embedded constant, tagged by its register set.
#[derive(Debug, Clone, PartialEq)]
pub enum ConstantValue {
    Float([f32; 4]),
    Int([i32; 4]),
    Bool(bool),
    /// Carries the raw type tag of a constant we do not recognize.
    Unrecognized(i32),
}

impl ConstantValue {
    pub fn kind(&self) -> UniformKind {
        match self {
            Self::Float(_) => UniformKind::Float,
            Self::Int(_) => UniformKind::Int,
            Self::Bool(_) => UniformKind::Bool,
            Self::Unrecognized(raw) => UniformKind::Unrecognized(*raw),
        }
    }

    pub fn float4(&self) -> Option<[f32; 4]> {
        match self {
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn int4(&self) -> Option<[i32; 4]> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn bool_value(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }
}

/// An embedded constant register definition.
#[derive(Debug, Clone, PartialEq)]
pub struct Constant {
    pub index: u32,
    pub value: ConstantValue,
}

/// A uniform register range used by the shader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Uniform {
    pub index: u32,
    pub kind: UniformKind,
    /// 0 for a non-array uniform.
    pub array_count: u32,
    pub constant: bool,
    pub name: Option<String>,
}

/// A sampler register used by the shader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sampler {
    pub index: u32,
    pub kind: SamplerKind,
    pub name: Option<String>,
    /// Legacy `texbem`-style sampler, needing matrix uniforms at runtime.
    pub texbem: bool,
}

/// Everything the external compiler recovered from one shader.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedShader {
    /// Target profile the shader was compiled against (e.g. `glsl`, `spirv`).
    pub profile: String,
    pub kind: ShaderKind,
    pub major_ver: u32,
    pub minor_ver: u32,
    pub instruction_count: u32,
    /// Entry-point function name.
    pub mainfn: String,
    pub inputs: Vec<Attribute>,
    pub outputs: Vec<Attribute>,
    pub constants: Vec<Constant>,
    pub uniforms: Vec<Uniform>,
    pub samplers: Vec<Sampler>,
    pub symbols: Vec<Symbol>,
    pub preshader: Option<Preshader>,
    /// Non-empty when compilation failed; structural fields are then
    /// meaningless and reporting emits only these.
    pub errors: Vec<ParseError>,
    /// Profile-dependent output payload: textual source for most profiles, a
    /// packed binary for `spirv`.
    pub output: Vec<u8>,
}

impl ParsedShader {
    /// An error-bearing placeholder shader, as the external compiler returns
    /// when parsing fails outright.
    pub fn from_errors(profile: impl Into<String>, errors: Vec<ParseError>) -> Self {
        Self {
            profile: profile.into(),
            kind: ShaderKind::Unknown,
            major_ver: 0,
            minor_ver: 0,
            instruction_count: 0,
            mainfn: String::new(),
            inputs: Vec::new(),
            outputs: Vec::new(),
            constants: Vec::new(),
            uniforms: Vec::new(),
            samplers: Vec::new(),
            symbols: Vec::new(),
            preshader: None,
            errors,
            output: Vec::new(),
        }
    }
}
