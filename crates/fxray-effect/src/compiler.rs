//! Collaborator traits for the external bytecode compiler.
//!
//! This crate never parses Direct3D tokens itself. The container extractor
//! hands token blobs to an [`EffectCompiler`], which in turn calls back into a
//! [`ShaderCompiler`] for every embedded shader. The target profile travels
//! inside the compile request rather than through any process-wide state.

use crate::effect::Effect;
use fxray_shader::{ParsedShader, Usage};

/// Component remapping applied to an attribute during compilation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swizzle {
    pub usage: Usage,
    pub index: u32,
    /// New component order, one entry per destination component.
    pub swizzles: [u8; 4],
}

/// Renames a sampler register during compilation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SamplerMapping {
    pub index: u32,
    pub name: String,
}

/// Everything a [`ShaderCompiler`] needs to parse one token blob.
#[derive(Debug, Clone, Copy)]
pub struct ShaderCompileRequest<'a> {
    /// Target profile name (e.g. `glsl`, `spirv`).
    pub profile: &'a str,
    /// Entry-point name to assign; `None` keeps the compiler default.
    pub mainfn: Option<&'a str>,
    /// Raw Direct3D token bytes.
    pub tokens: &'a [u8],
    pub swizzles: &'a [Swizzle],
    pub sampler_map: &'a [SamplerMapping],
}

/// Compiles one shader token blob into a [`ParsedShader`].
///
/// A failed parse is reported through the returned shader's error list, not
/// through a Rust error; the caller renders those diagnostics.
pub trait ShaderCompiler {
    fn compile(&self, request: &ShaderCompileRequest<'_>) -> ParsedShader;
}

/// Compiles a whole effect container.
///
/// Implementations call `shaders.compile` once per embedded shader token
/// blob, with `profile` threaded through unchanged. The returned [`Effect`]
/// owns every parsed shader it produced; there is no separate delete step.
pub trait EffectCompiler {
    fn compile(
        &self,
        tokens: &[u8],
        profile: &str,
        shaders: &dyn ShaderCompiler,
    ) -> Effect;
}
