//! Data model for compiled Direct3D shader introspection.
//!
//! This crate defines the in-memory representation an external bytecode
//! compiler produces for one shader: the parsed-shader record, its recursive
//! symbol/type-info tree, and the embedded preshader program (a small
//! constant-folding bytecode that feeds shader constant registers).
//!
//! Nothing here parses bytecode; the types exist so that the effect container
//! model (`fxray-effect`) and the diagnostic reporters (`fxray-report`) can
//! consume compiler output without owning the compiler. Every enumerated tag
//! decoded from compiled data carries an `Unknown`/`Unrecognized` variant, so
//! hostile or out-of-range tags degrade to marker strings instead of
//! undefined behavior.

#![forbid(unsafe_code)]

mod parse_data;
mod preshader;
mod types;

pub use crate::parse_data::{
    Attribute, Constant, ConstantValue, ParseError, ParsedShader, Sampler, Uniform,
};
pub use crate::preshader::{
    Preshader, PreshaderInstruction, PreshaderOpcode, PreshaderOperand, PreshaderOperandKind,
    SCALAR_OPS_BASE,
};
pub use crate::types::{
    ParameterClass, ParameterType, RegisterSet, SamplerKind, ShaderKind, StructMember, Symbol,
    TypeInfo, UniformKind, Usage,
};
