use pretty_assertions::assert_eq;

use fxray_shader::{PreshaderOpcode, PreshaderOperandKind};

use crate::disassemble_preshader;
use crate::preshader::scalar_replicated;
use crate::tests_fixtures::{indirect_operand, instruction, operand, preshader};

const HEADER: &str = "PRESHADER:\n    SYMBOLS: (none.)\n";

#[test]
fn scalar_op_broadcasts_its_slot_zero_literal() {
    // Scalar-class op: the slot-0 literal is replicated across the element
    // count instead of reading consecutive pool entries.
    let p = preshader(
        vec![1.0, 2.0, 3.0, 4.0],
        vec![instruction(
            PreshaderOpcode::MinScalar,
            3,
            vec![
                operand(PreshaderOperandKind::Literal, 0),
                operand(PreshaderOperandKind::Temp, 0),
            ],
        )],
    );
    assert_eq!(
        disassemble_preshader(&p),
        format!("{}    min r0.xyz, (1, 1, 1)\n\n", HEADER)
    );
}

#[test]
fn vector_op_reads_consecutive_literals() {
    let p = preshader(
        vec![1.0, 2.0, 3.0, 4.0],
        vec![instruction(
            PreshaderOpcode::Min,
            3,
            vec![
                operand(PreshaderOperandKind::Literal, 0),
                operand(PreshaderOperandKind::Temp, 0),
            ],
        )],
    );
    assert_eq!(
        disassemble_preshader(&p),
        format!("{}    min r0.xyz, (1, 2, 3)\n\n", HEADER)
    );
}

#[test]
fn register_operand_masks_from_base_component() {
    // index 9: register 2, component 1; two elements -> .yz
    let p = preshader(
        Vec::new(),
        vec![instruction(
            PreshaderOpcode::Mov,
            2,
            vec![operand(PreshaderOperandKind::Input, 9)],
        )],
    );
    assert_eq!(
        disassemble_preshader(&p),
        format!("{}    mov c2.yz\n\n", HEADER)
    );
}

#[test]
fn four_element_register_operand_has_no_mask() {
    let p = preshader(
        Vec::new(),
        vec![instruction(
            PreshaderOpcode::Mov,
            4,
            vec![
                operand(PreshaderOperandKind::Input, 0),
                operand(PreshaderOperandKind::Output, 8),
            ],
        )],
    );
    assert_eq!(
        disassemble_preshader(&p),
        format!("{}    mov c2, c0\n\n", HEADER)
    );
}

#[test]
fn indirect_addressing_nests_outermost_first() {
    // array_registers [5, 3] over base register 1 -> c5[c3[c1.x]]
    let p = preshader(
        Vec::new(),
        vec![instruction(
            PreshaderOpcode::Mov,
            1,
            vec![indirect_operand(PreshaderOperandKind::Input, 4, vec![5, 3])],
        )],
    );
    assert_eq!(
        disassemble_preshader(&p),
        format!("{}    mov c5[c3[c1.x]]\n\n", HEADER)
    );
}

#[test]
fn temp_registers_use_the_r_prefix() {
    let p = preshader(
        Vec::new(),
        vec![instruction(
            PreshaderOpcode::Add,
            4,
            vec![
                operand(PreshaderOperandKind::Input, 0),
                operand(PreshaderOperandKind::Input, 4),
                operand(PreshaderOperandKind::Temp, 8),
            ],
        )],
    );
    // Destination (last slot) first, then the sources in storage order.
    assert_eq!(
        disassemble_preshader(&p),
        format!("{}    add r2, c0, c1\n\n", HEADER)
    );
}

#[test]
fn mask_walk_past_w_renders_a_marker() {
    // Base component 3 with two elements would need a fifth mask letter;
    // there is none, and we refuse to wrap silently.
    let p = preshader(
        Vec::new(),
        vec![instruction(
            PreshaderOpcode::Mov,
            2,
            vec![operand(PreshaderOperandKind::Input, 3)],
        )],
    );
    assert_eq!(
        disassemble_preshader(&p),
        format!("{}    mov c0.w?\n\n", HEADER)
    );
}

#[test]
fn unrecognized_operand_kind_renders_a_marker() {
    let p = preshader(
        Vec::new(),
        vec![instruction(
            PreshaderOpcode::Mov,
            1,
            vec![operand(PreshaderOperandKind::Unknown(9), 7)],
        )],
    );
    assert_eq!(
        disassemble_preshader(&p),
        format!("{}    mov [???{{9, 7}}???]\n\n", HEADER)
    );
}

#[test]
fn operandless_instruction_renders_bare_mnemonic() {
    let p = preshader(
        Vec::new(),
        vec![instruction(PreshaderOpcode::Nop, 0, Vec::new())],
    );
    assert_eq!(disassemble_preshader(&p), format!("{}    nop\n\n", HEADER));
}

#[test]
fn literal_pool_underrun_renders_markers() {
    let p = preshader(
        vec![1.0],
        vec![instruction(
            PreshaderOpcode::Mov,
            3,
            vec![operand(PreshaderOperandKind::Literal, 0)],
        )],
    );
    assert_eq!(
        disassemble_preshader(&p),
        format!("{}    mov (1, ?, ?)\n\n", HEADER)
    );
}

#[test]
fn scalar_replication_rule_is_slot_zero_only() {
    // The historical rule keys on slot 0 even though the destination lives
    // in the last slot; for a two-operand scalar op the destination slot (1)
    // is therefore never treated as scalar. Kept for compatibility.
    assert!(scalar_replicated(PreshaderOpcode::MinScalar, 0));
    assert!(!scalar_replicated(PreshaderOpcode::MinScalar, 1));
    assert!(!scalar_replicated(PreshaderOpcode::Min, 0));
    // Unknown opcodes above the scalar threshold classify as scalar-class.
    assert!(scalar_replicated(PreshaderOpcode::Unknown(40), 0));
}

#[test]
fn scalar_register_destination_prints_single_component() {
    // A single-source scalar op: the slot-0 operand is the destination and
    // the rule applies to it, printing one component.
    let p = preshader(
        Vec::new(),
        vec![instruction(
            PreshaderOpcode::MaxScalar,
            3,
            vec![operand(PreshaderOperandKind::Temp, 5)],
        )],
    );
    assert_eq!(
        disassemble_preshader(&p),
        format!("{}    max r1.y\n\n", HEADER)
    );
}
