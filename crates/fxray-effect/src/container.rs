//! Classifies raw buffers as compiled-effect pools and recovers the shaders
//! embedded in them.

use thiserror::Error;
use tracing::debug;

use crate::compiler::{EffectCompiler, ShaderCompiler};
use crate::effect::{Effect, EffectObject, ShaderObjectContent};
use fxray_shader::ParsedShader;

/// Leading bytes of a compiled effect pool.
pub const EFFECT_MAGIC: [u8; 4] = [0x01, 0x09, 0xFF, 0xFE];
/// Alternate effect-pool signature found in some containers.
pub const EFFECT_MAGIC_ALT: [u8; 4] = [0xCF, 0x0B, 0xF0, 0xBC];

/// Result of sniffing a raw buffer's leading bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// The buffer starts with one of the known effect-pool signatures.
    EffectPool,
    /// Anything else. Not an error: the caller may hand the buffer to a
    /// different consumer.
    NotAnEffect,
}

/// Decides whether `bytes` holds a compiled effect pool.
pub fn classify(bytes: &[u8]) -> Classification {
    match bytes.get(..4) {
        Some(head) if head == EFFECT_MAGIC || head == EFFECT_MAGIC_ALT => {
            Classification::EffectPool
        }
        _ => Classification::NotAnEffect,
    }
}

#[derive(Debug, Error)]
pub enum ExtractError {
    /// The buffer does not start with an effect-pool signature. Recoverable;
    /// try another interpretation of the bytes.
    #[error("buffer does not begin with a compiled-effect signature")]
    NotAnEffect,
}

/// A compiled effect plus the shaders recovered from its object table.
///
/// Shader handles are borrowed views into the effect's object table; they
/// stay valid exactly as long as the `ParsedEffect` does.
#[derive(Debug, Clone)]
pub struct ParsedEffect {
    effect: Effect,
    /// Object-table indices of the non-preshader vertex/pixel shader objects,
    /// in encounter order.
    shader_objects: Vec<usize>,
}

impl ParsedEffect {
    pub fn effect(&self) -> &Effect {
        &self.effect
    }

    pub fn into_effect(self) -> Effect {
        self.effect
    }

    /// Number of extracted (non-preshader) shaders.
    pub fn shader_count(&self) -> usize {
        self.shader_objects.len()
    }

    /// The `i`-th extracted shader, or `None` when `i` is out of range.
    pub fn shader(&self, i: usize) -> Option<&ParsedShader> {
        let object_index = *self.shader_objects.get(i)?;
        match self.effect.objects.get(object_index)? {
            EffectObject::Shader(obj) => obj.parsed(),
            _ => None,
        }
    }
}

/// Compiles an effect pool and collects its embedded shaders.
///
/// Checks the container signature, invokes the external effect compiler (which
/// calls back `shaders` once per embedded token blob, with `profile` threaded
/// through), then walks the object table in index order, skipping the
/// reserved index 0 and collecting every non-preshader vertex/pixel shader
/// object. Preshader-flagged objects are left for the effect reporter.
///
/// A compiled effect that carries diagnostics is still returned; its object
/// table is empty and the diagnostics surface through the effect reporter.
pub fn parse_effect(
    bytes: &[u8],
    profile: &str,
    effects: &dyn EffectCompiler,
    shaders: &dyn ShaderCompiler,
) -> Result<ParsedEffect, ExtractError> {
    if classify(bytes) != Classification::EffectPool {
        return Err(ExtractError::NotAnEffect);
    }

    let effect = effects.compile(bytes, profile, shaders);

    let mut shader_objects = Vec::new();
    for (index, object) in effect.objects_from_one() {
        let EffectObject::Shader(obj) = object else {
            continue;
        };
        if obj.ty.is_shader() && matches!(obj.content, ShaderObjectContent::Parsed(_)) {
            shader_objects.push(index);
        }
    }

    debug!(
        objects = effect.objects.len(),
        shaders = shader_objects.len(),
        profile,
        "compiled effect pool"
    );

    Ok(ParsedEffect {
        effect,
        shader_objects,
    })
}
