//! Per-shader metadata reporting.

use std::fmt::Write as _;

use thiserror::Error;

use fxray_shader::{Attribute, ConstantValue, ParseError, ParsedShader};

use crate::preshader::write_preshader;
use crate::spirv::{SpirvToolError, SpirvTools};
use crate::typeinfo::write_symbols;
use crate::writer::Report;

/// Failures while rendering a report.
///
/// Only the external SPIR-V toolchain can fail; everything else degrades to
/// marker text. A validation failure means the binary cannot be meaningfully
/// reported further, so the whole report is abandoned and the caller decides
/// what to do.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    #[error("spirv disassembly failed: {0}")]
    SpirvDisassembly(String),
    #[error("spirv validation failed: {0}")]
    SpirvValidation(String),
}

impl From<SpirvToolError> for ReportError {
    fn from(err: SpirvToolError) -> Self {
        match err {
            SpirvToolError::Disassembly(msg) => Self::SpirvDisassembly(msg),
            SpirvToolError::Validation(msg) => Self::SpirvValidation(msg),
        }
    }
}

/// Shared context for one report pass.
pub(crate) struct ReportCtx<'a> {
    /// Fallback file name for diagnostics that carry none.
    pub(crate) source_name: &'a str,
    pub(crate) spirv: Option<&'a dyn SpirvTools>,
    /// Length in bytes of the patch table the compiler appends to spirv
    /// output; stripped before disassembly.
    pub(crate) spirv_patch_table_len: usize,
}

pub(crate) fn write_errors(r: &mut Report, errors: &[ParseError], source_name: &str, indent: usize) {
    for err in errors {
        let file = err.filename.as_deref().unwrap_or(source_name);
        r.line(
            indent,
            &format!("{}:{}: ERROR: {}", file, err.position, err.message),
        );
    }
}

pub(crate) fn write_shader(
    r: &mut Report,
    ctx: &ReportCtx<'_>,
    pd: &ParsedShader,
    indent: usize,
) -> Result<(), ReportError> {
    // An error-bearing shader has no structural report.
    if !pd.errors.is_empty() {
        write_errors(r, &pd.errors, ctx.source_name, indent);
        return Ok(());
    }

    r.line(indent, &format!("PROFILE: {}", pd.profile));
    r.line(indent, &format!("SHADER TYPE: {}", pd.kind.name()));
    r.line(
        indent,
        &format!("VERSION: {}.{}", pd.major_ver, pd.minor_ver),
    );
    r.line(
        indent,
        &format!("INSTRUCTION COUNT: {}", pd.instruction_count),
    );
    r.line(indent, &format!("MAIN FUNCTION: {}", pd.mainfn));

    write_attributes(r, "INPUTS", &pd.inputs, indent);
    write_attributes(r, "OUTPUTS", &pd.outputs, indent);
    write_constants(r, pd, indent);
    write_uniforms(r, pd, indent);
    write_samplers(r, pd, indent);
    write_symbols(r, &pd.symbols, indent);

    if let Some(preshader) = &pd.preshader {
        write_preshader(r, preshader, indent);
    }

    write_output(r, ctx, pd, indent)?;

    r.blank();
    Ok(())
}

fn write_attributes(r: &mut Report, category: &str, attrs: &[Attribute], indent: usize) {
    if attrs.is_empty() {
        r.line(indent, &format!("{}: (none.)", category));
        return;
    }

    r.line(indent, &format!("{}:", category));
    for attr in attrs {
        let mut line = format!("    * {}", attr.usage.name());
        if attr.index != 0 {
            let _ = write!(line, "{}", attr.index);
        }
        if let Some(name) = &attr.name {
            let _ = write!(line, " (\"{}\")", name);
        }
        r.line(indent, &line);
    }
}

fn write_constants(r: &mut Report, pd: &ParsedShader, indent: usize) {
    if pd.constants.is_empty() {
        r.line(indent, "CONSTANTS: (none.)");
        return;
    }

    r.line(indent, "CONSTANTS:");
    for constant in &pd.constants {
        let rendered = match &constant.value {
            ConstantValue::Float([x, y, z, w]) => format!("{} {} {} {}", x, y, z, w),
            ConstantValue::Int([x, y, z, w]) => format!("{} {} {} {}", x, y, z, w),
            ConstantValue::Bool(v) => if *v { "true" } else { "false" }.to_owned(),
            ConstantValue::Unrecognized(_) => "???".to_owned(),
        };
        r.line(
            indent,
            &format!(
                "    * {}: {} ({})",
                constant.index,
                constant.value.kind().name(),
                rendered
            ),
        );
    }
}

fn write_uniforms(r: &mut Report, pd: &ParsedShader, indent: usize) {
    if pd.uniforms.is_empty() {
        r.line(indent, "UNIFORMS: (none.)");
        return;
    }

    r.line(indent, "UNIFORMS:");
    for uniform in &pd.uniforms {
        let mut line = format!("    * {}: ", uniform.index);
        if uniform.constant {
            line.push_str("const ");
        }
        if uniform.array_count > 0 {
            let _ = write!(line, "array[{}] ", uniform.array_count);
        }
        line.push_str(uniform.kind.name());
        if let Some(name) = &uniform.name {
            let _ = write!(line, " (\"{}\")", name);
        }
        r.line(indent, &line);
    }
}

fn write_samplers(r: &mut Report, pd: &ParsedShader, indent: usize) {
    if pd.samplers.is_empty() {
        r.line(indent, "SAMPLERS: (none.)");
        return;
    }

    r.line(indent, "SAMPLERS:");
    for sampler in &pd.samplers {
        let mut line = format!("    * {}: {}", sampler.index, sampler.kind.name());
        if let Some(name) = &sampler.name {
            let _ = write!(line, " (\"{}\")", name);
        }
        if sampler.texbem {
            line.push_str(" [TEXBEM]");
        }
        r.line(indent, &line);
    }
}

fn write_output(
    r: &mut Report,
    ctx: &ReportCtx<'_>,
    pd: &ParsedShader,
    indent: usize,
) -> Result<(), ReportError> {
    if pd.output.is_empty() {
        return Ok(());
    }

    let text = if pd.profile == "spirv" {
        match ctx.spirv {
            Some(tools) => spirv_output_text(tools, &pd.output, ctx.spirv_patch_table_len)?,
            // Without a toolchain the binary is dumped as-is, the same as
            // any other profile.
            None => String::from_utf8_lossy(&pd.output).into_owned(),
        }
    } else {
        String::from_utf8_lossy(&pd.output).into_owned()
    };

    r.line(indent, "OUTPUT:");
    r.block(indent + 1, &text);
    Ok(())
}

fn spirv_output_text(
    tools: &dyn SpirvTools,
    output: &[u8],
    patch_table_len: usize,
) -> Result<String, ReportError> {
    // The compiler appends a patch table after the spirv words; only the
    // words in front of it are the module.
    let binary_len = output.len().saturating_sub(patch_table_len);
    let words: Vec<u32> = output[..binary_len]
        .chunks_exact(4)
        .map(|chunk| u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect();

    let text = tools.disassemble(&words)?;
    tools.validate(&words)?;
    Ok(text)
}
