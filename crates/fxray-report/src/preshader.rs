//! Preshader disassembly.
//!
//! Renders each instruction as `<mnemonic> <dest>, <src0>, ...`; the encoded
//! form stores the destination in the last operand slot, so it is printed
//! first and the remaining slots follow in storage order.

use std::fmt::Write as _;

use fxray_shader::{
    Preshader, PreshaderInstruction, PreshaderOpcode, PreshaderOperandKind,
};

use crate::typeinfo::write_symbols;
use crate::writer::Report;

const MASK: [char; 4] = ['x', 'y', 'z', 'w'];

/// Whether the operand in `slot` is rendered as a scalar broadcast.
///
/// This keeps the historical rule: scalar-class opcode AND slot 0. Slot 0 is
/// a *source* slot for multi-operand instructions (the destination lives in
/// the last slot), so the rule is suspect for those, but it is what the
/// format's tooling has always done and changing it would silently alter
/// every dump. Swap the body here if the rule is ever corrected.
pub(crate) fn scalar_replicated(opcode: PreshaderOpcode, slot: usize) -> bool {
    opcode.is_scalar_class() && slot == 0
}

/// Mask letter for a component index; indices past `w` have no defined
/// letter and render as an explicit marker.
fn mask_char(component: u32) -> char {
    MASK.get(component as usize).copied().unwrap_or('?')
}

fn fmt_literal(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{}", v),
        // Literal pool too short for the operand's span.
        None => "?".to_owned(),
    }
}

fn write_operand(out: &mut String, preshader: &Preshader, inst: &PreshaderInstruction, slot: usize) {
    let Some(operand) = inst.operands.get(slot) else {
        out.push_str("[missing operand]");
        return;
    };
    let elems = inst.element_count as usize;
    let scalar = scalar_replicated(inst.opcode, slot);

    match operand.kind {
        PreshaderOperandKind::Literal => {
            let start = operand.index as usize;
            out.push('(');
            for i in 0..elems {
                if i > 0 {
                    out.push_str(", ");
                }
                let value = if scalar {
                    preshader.literals.get(start).copied()
                } else {
                    preshader.literals.get(start + i).copied()
                };
                out.push_str(&fmt_literal(value));
            }
            out.push(')');
        }

        PreshaderOperandKind::Input | PreshaderOperandKind::Output | PreshaderOperandKind::Temp => {
            let base = operand.index / 4;
            let component = operand.index % 4;
            let regch = if operand.kind == PreshaderOperandKind::Temp {
                'r'
            } else {
                'c'
            };

            if !operand.array_registers.is_empty() {
                // Indirect addressing; the stack stores the outermost index
                // first: [5, 3] with base 1 renders as c5[c3[c1.x]].
                for areg in &operand.array_registers {
                    let _ = write!(out, "c{}[", areg);
                }
                let _ = write!(out, "{}{}.{}", regch, base, mask_char(component));
                for _ in &operand.array_registers {
                    out.push(']');
                }
                return;
            }

            let _ = write!(out, "{}{}", regch, base);
            if scalar {
                let _ = write!(out, ".{}", mask_char(component));
            } else if elems != 4 {
                out.push('.');
                for i in 0..elems {
                    out.push(mask_char(component + i as u32));
                }
            }
        }

        PreshaderOperandKind::Unknown(_) => {
            let _ = write!(out, "[???{{{}, {}}}???]", operand.kind.raw(), operand.index);
        }
    }
}

fn write_instruction(r: &mut Report, preshader: &Preshader, inst: &PreshaderInstruction, indent: usize) {
    let mut line = format!("    {}", inst.opcode.mnemonic());

    if let Some(last) = inst.operands.len().checked_sub(1) {
        line.push(' ');
        // Destination first, then the sources in storage order.
        write_operand(&mut line, preshader, inst, last);
        for slot in 0..last {
            line.push_str(", ");
            write_operand(&mut line, preshader, inst, slot);
        }
    }

    r.line(indent, &line);
}

pub(crate) fn write_preshader(r: &mut Report, preshader: &Preshader, indent: usize) {
    r.line(indent, "PRESHADER:");
    write_symbols(r, &preshader.symbols, indent + 1);
    for inst in &preshader.instructions {
        write_instruction(r, preshader, inst, indent);
    }
    r.blank();
}

/// Disassembles a whole preshader program to text.
pub fn disassemble_preshader(preshader: &Preshader) -> String {
    let mut r = Report::new();
    write_preshader(&mut r, preshader, 0);
    r.finish()
}
