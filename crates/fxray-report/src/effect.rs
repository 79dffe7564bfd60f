//! Effect-level reporting: parameters, the technique/pass/state tree, and
//! the object table.

use fxray_effect::{Effect, EffectObject, ShaderObjectContent};

use crate::preshader::write_preshader;
use crate::shader::{write_errors, write_shader, ReportCtx, ReportError};
use crate::value::write_value;
use crate::writer::Report;

pub(crate) fn write_effect(
    r: &mut Report,
    ctx: &ReportCtx<'_>,
    effect: &Effect,
    indent: usize,
) -> Result<(), ReportError> {
    // A failed compilation replaces the structural report.
    if !effect.errors.is_empty() {
        write_errors(r, &effect.errors, ctx.source_name, indent);
        return Ok(());
    }

    for (i, param) in effect.params.iter().enumerate() {
        r.line(indent, &format!("PARAM #{}", i));
        write_value(r, &param.value, indent + 1);
        if !param.annotations.is_empty() {
            r.line(indent + 1, "ANNOTATIONS:");
        }
        for annotation in &param.annotations {
            write_value(r, annotation, indent + 2);
        }
    }
    r.blank();

    for (i, technique) in effect.techniques.iter().enumerate() {
        r.line(indent, &format!("TECHNIQUE #{} ('{}'):", i, technique.name));
        for (j, pass) in technique.passes.iter().enumerate() {
            r.line(indent + 1, &format!("PASS #{} ('{}'):", j, pass.name));
            for state in &pass.states {
                r.line(indent + 2, &format!("STATE {}:", state.ty));
                write_value(r, &state.value, indent + 3);
            }
        }
    }
    r.blank();

    // Object table; index 0 is reserved and skipped.
    for (i, object) in effect.objects_from_one() {
        match object {
            EffectObject::Shader(obj) => match &obj.content {
                ShaderObjectContent::Preshader(preshader) => {
                    let param_name = obj
                        .param_refs
                        .first()
                        .and_then(|&p| effect.params.get(p as usize))
                        .map(|param| param.value.name.as_str())
                        .unwrap_or("?");
                    r.line(
                        indent,
                        &format!(
                            "OBJECT #{}: PRESHADER, technique {}, pass {}, param {}",
                            i, obj.technique, obj.pass, param_name
                        ),
                    );
                    write_preshader(r, preshader, indent + 1);
                }
                ShaderObjectContent::Parsed(pd) => {
                    r.line(
                        indent,
                        &format!(
                            "OBJECT #{}: SHADER, technique {}, pass {}",
                            i, obj.technique, obj.pass
                        ),
                    );
                    write_shader(r, ctx, pd, indent + 1)?;
                }
            },
            EffectObject::String { value } => {
                r.line(indent, &format!("OBJECT #{}: STRING, '{}'", i, value));
            }
            EffectObject::SamplerMap { name, .. } => {
                r.line(indent, &format!("OBJECT #{}: MAPPING, '{}'", i, name));
            }
            EffectObject::Texture { .. } => {
                r.line(indent, &format!("OBJECT #{}: TEXTURE", i));
            }
            EffectObject::Empty | EffectObject::Unknown { .. } => {
                r.line(indent, &format!("UNKNOWN OBJECT: #{}", i));
            }
        }
    }

    Ok(())
}
