//! Typed value rendering: parameter defaults, annotations, and state values.

use fxray_effect::{SamplerStateValue, Value, ValuePayload};
use fxray_shader::ParameterType;

use crate::writer::Report;

pub(crate) fn write_value(r: &mut Report, value: &Value, indent: usize) {
    r.line(
        indent,
        &format!("VALUE: {} -> {}", value.name, value.semantic),
    );
    r.line(
        indent + 1,
        &format!("CLASS: {}", value.ty.class.name().to_uppercase()),
    );
    r.line(
        indent + 1,
        &format!("TYPE: {}", value.ty.ty.name().to_uppercase()),
    );
    r.line(
        indent + 1,
        &format!(
            "ROWS/COLUMNS/ELEMENTS: {}, {}, {}",
            value.ty.rows, value.ty.columns, value.ty.elements
        ),
    );
    r.line(
        indent + 1,
        &format!("TOTAL VALUES: {}", value.payload.len()),
    );

    if value.ty.ty.is_sampler() {
        write_sampler_states(r, value, indent);
    } else {
        write_cells(r, value, indent);
    }
}

fn write_sampler_states(r: &mut Report, value: &Value, indent: usize) {
    r.line(indent + 1, "SAMPLER VALUES:");
    let ValuePayload::SamplerStates(states) = &value.payload else {
        r.line(indent + 2, "(numeric payload on a sampler-typed value?!)");
        return;
    };
    for state in states {
        // One value per state; MIPMAPLODBIAS is the only float-typed state.
        let rendered = match state.value {
            SamplerStateValue::Float(v) => format!("{:.2}", v),
            SamplerStateValue::Int(v) => format!("{}", v),
        };
        r.line(
            indent + 2,
            &format!("TYPE: {} -> {}", state.kind.name(), rendered),
        );
    }
}

fn write_cells(r: &mut Report, value: &Value, indent: usize) {
    r.line(
        indent + 1,
        &format!("{} VALUES:", value.ty.ty.name().to_uppercase()),
    );

    let rows = value.ty.rows as usize;
    let columns = value.ty.columns as usize;
    // The container stores at least one element block even for a declared
    // element count of zero.
    let element_blocks = (value.ty.elements as usize).max(1);

    for element in 0..element_blocks {
        for row in 0..rows {
            let mut line = String::new();
            for column in 0..columns {
                // Rows are always stored 4 cells wide; columns <= 4 selects
                // a sub-range.
                let offset = (element * rows * 4) + (row * 4) + column;
                if !line.is_empty() {
                    line.push(' ');
                }
                line.push_str(&render_cell(value, offset));
            }
            r.line(indent + 2, &line);
        }
    }
}

/// Formats one numeric cell by the value's declared type, falling back to a
/// marker when the payload is shorter than the declared shape or does not
/// match the declared type.
fn render_cell(value: &Value, offset: usize) -> String {
    let ty = value.ty.ty;

    // Sampler-typed values never reach the numeric dump; render loudly
    // instead of skipping if one somehow does.
    if ty.is_sampler() {
        return "SAMPLER?!".to_owned();
    }

    if ty == ParameterType::Float {
        return match &value.payload {
            ValuePayload::Float(cells) => match cells.get(offset) {
                Some(v) => format!("{:.2}", v),
                None => "?!".to_owned(),
            },
            _ => "?!".to_owned(),
        };
    }

    let ValuePayload::Int(cells) = &value.payload else {
        return "?!".to_owned();
    };
    let Some(v) = cells.get(offset) else {
        return "?!".to_owned();
    };
    match ty {
        // Raw bit patterns print as hex.
        ParameterType::Void | ParameterType::Unsupported => format!("{:X}", v),
        ParameterType::Unrecognized(_) => "?".to_owned(),
        _ => format!("{}", v),
    }
}
