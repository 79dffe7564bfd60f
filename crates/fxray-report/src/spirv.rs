//! Collaborator boundary for an external SPIR-V disassembler/validator.

use thiserror::Error;

/// Diagnostics reported by the external SPIR-V toolchain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpirvToolError {
    #[error("spirv disassembly diagnostic: {0}")]
    Disassembly(String),
    #[error("spirv validation failure: {0}")]
    Validation(String),
}

/// External SPIR-V binary tooling.
///
/// The reporter hands over the shader's output words (with any trailing
/// patch table already stripped) and emits the returned text in place of the
/// raw binary. Failures propagate to the report's caller; they are not
/// fatal to the process.
pub trait SpirvTools {
    fn disassemble(&self, words: &[u32]) -> Result<String, SpirvToolError>;
    fn validate(&self, words: &[u32]) -> Result<(), SpirvToolError>;
}
