//! Compiled-effect container model and classifier.
//!
//! An *effect* bundles compiled shader objects, render-state techniques and
//! passes, and typed parameters with annotations. This crate models the
//! compiled result, sniffs raw buffers for the effect-pool signatures, and
//! recovers the individual parsed shaders stored in an effect's object table
//! through an external compiler collaborator.
//!
//! The bytecode compilers themselves are collaborators behind the
//! [`ShaderCompiler`] and [`EffectCompiler`] traits; this crate only invokes
//! them. Input buffers are untrusted: classification never reads past the
//! buffer and extracted-shader access is bounds-checked.

#![forbid(unsafe_code)]

mod compiler;
mod container;
mod effect;

pub use crate::compiler::{
    EffectCompiler, SamplerMapping, ShaderCompileRequest, ShaderCompiler, Swizzle,
};
pub use crate::container::{
    classify, parse_effect, Classification, ExtractError, ParsedEffect, EFFECT_MAGIC,
    EFFECT_MAGIC_ALT,
};
pub use crate::effect::{
    Effect, EffectObject, EffectParam, EffectPass, EffectState, EffectTechnique, SamplerState,
    SamplerStateKind, SamplerStateValue, ShaderObject, ShaderObjectContent, Value, ValuePayload,
};
