//! Recursive symbol and type-info rendering.

use fxray_shader::{Symbol, TypeInfo};

use crate::writer::Report;

/// Hard cap on struct-member recursion. Nesting depth is data-controlled, so
/// the renderer refuses to recurse past this many levels and emits a marker
/// instead.
pub(crate) const MAX_TYPE_DEPTH: usize = 64;

pub(crate) fn write_typeinfo(r: &mut Report, info: &TypeInfo, indent: usize, depth: usize) {
    if depth >= MAX_TYPE_DEPTH {
        r.line(indent, "      (struct nesting too deep)");
        return;
    }

    r.line(indent, &format!("      symbol class {}", info.class.name()));
    r.line(indent, &format!("      symbol type {}", info.ty.name()));
    r.line(indent, &format!("      rows {}", info.rows));
    r.line(indent, &format!("      columns {}", info.columns));
    r.line(indent, &format!("      elements {}", info.elements));

    if !info.members.is_empty() {
        r.line(indent, "      MEMBERS:");
        for (i, member) in info.members.iter().enumerate() {
            r.line(indent + 1, &format!("      * {}: \"{}\"", i, member.name));
            write_typeinfo(r, &member.info, indent + 1, depth + 1);
        }
    }
}

pub(crate) fn write_symbols(r: &mut Report, symbols: &[Symbol], indent: usize) {
    if symbols.is_empty() {
        r.line(indent, "SYMBOLS: (none.)");
        return;
    }

    r.line(indent, "SYMBOLS:");
    for (i, sym) in symbols.iter().enumerate() {
        r.line(indent, &format!("    * {}: \"{}\"", i, sym.name));
        r.line(
            indent,
            &format!("      register set {}", sym.register_set.name()),
        );
        r.line(
            indent,
            &format!("      register index {}", sym.register_index),
        );
        r.line(
            indent,
            &format!("      register count {}", sym.register_count),
        );
        write_typeinfo(r, &sym.info, indent, 0);
    }
    r.blank();
}
