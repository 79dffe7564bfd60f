//! Diagnostic reporting for compiled Direct3D shaders and effects.
//!
//! Everything here renders *already-parsed* structures (parsed shaders,
//! preshader programs, and effect containers from `fxray-effect`) into
//! deterministic, human-readable text. Rendering is a single synchronous
//! depth-first pass over caller-owned data; nothing is mutated or retained.
//!
//! Malformed-but-present data (out-of-range tags, short payloads) renders as
//! marker text rather than failing: a report over hostile input is still a
//! report. The one fallible step is the external SPIR-V toolchain used for
//! `spirv`-profile output, whose failures surface as [`ReportError`].

#![forbid(unsafe_code)]

mod effect;
mod preshader;
mod shader;
mod spirv;
mod typeinfo;
mod value;
mod writer;

#[cfg(test)]
mod tests_fixtures;
#[cfg(test)]
mod tests_preshader;
#[cfg(test)]
mod tests_shader;

use tracing::debug;

use fxray_effect::Effect;
use fxray_shader::ParsedShader;

pub use crate::preshader::disassemble_preshader;
pub use crate::shader::ReportError;
pub use crate::spirv::{SpirvToolError, SpirvTools};

use crate::shader::ReportCtx;
use crate::writer::Report;

/// Renders shader and effect reports.
///
/// A `Reporter` carries no state beyond its collaborator hookups, so one
/// instance can serve any number of independent render calls.
#[derive(Default)]
pub struct Reporter<'a> {
    spirv: Option<&'a dyn SpirvTools>,
    spirv_patch_table_len: usize,
}

impl<'a> Reporter<'a> {
    pub fn new() -> Self {
        Self {
            spirv: None,
            spirv_patch_table_len: 0,
        }
    }

    /// Hooks up an external SPIR-V toolchain for `spirv`-profile output.
    ///
    /// `patch_table_len` is the size in bytes of the patch table the
    /// companion compiler appends after the spirv words; it is stripped
    /// before the words are handed to `tools`.
    pub fn with_spirv_tools(mut self, tools: &'a dyn SpirvTools, patch_table_len: usize) -> Self {
        self.spirv = Some(tools);
        self.spirv_patch_table_len = patch_table_len;
        self
    }

    /// Renders the full metadata report for one parsed shader.
    ///
    /// `source_name` is the file name used for diagnostics that carry none
    /// of their own. A shader with a non-empty error list renders only its
    /// error lines.
    pub fn shader_report(
        &self,
        source_name: &str,
        shader: &ParsedShader,
    ) -> Result<String, ReportError> {
        let ctx = ReportCtx {
            source_name,
            spirv: self.spirv,
            spirv_patch_table_len: self.spirv_patch_table_len,
        };
        let mut r = Report::new();
        shader::write_shader(&mut r, &ctx, shader, 0)?;
        let text = r.finish();
        debug!(bytes = text.len(), profile = %shader.profile, "rendered shader report");
        Ok(text)
    }

    /// Renders the structure report for one compiled effect: parameters and
    /// annotations, the technique/pass/state tree, then the object table
    /// (from index 1; index 0 is reserved).
    pub fn effect_report(&self, source_name: &str, effect: &Effect) -> Result<String, ReportError> {
        let ctx = ReportCtx {
            source_name,
            spirv: self.spirv,
            spirv_patch_table_len: self.spirv_patch_table_len,
        };
        let mut r = Report::new();
        effect::write_effect(&mut r, &ctx, effect, 0)?;
        let text = r.finish();
        debug!(
            bytes = text.len(),
            objects = effect.objects.len(),
            "rendered effect report"
        );
        Ok(text)
    }
}
