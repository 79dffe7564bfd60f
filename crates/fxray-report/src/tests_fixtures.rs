//! Builders for synthetic report inputs shared by the test modules.

use fxray_effect::{
    Effect, EffectParam, SamplerState, SamplerStateKind, SamplerStateValue, Value, ValuePayload,
};
use fxray_shader::{
    ParameterClass, ParameterType, ParsedShader, Preshader, PreshaderInstruction, PreshaderOpcode,
    PreshaderOperand, PreshaderOperandKind, RegisterSet, ShaderKind, StructMember, Symbol,
    TypeInfo,
};

pub(crate) fn type_info(
    class: ParameterClass,
    ty: ParameterType,
    rows: u32,
    columns: u32,
    elements: u32,
) -> TypeInfo {
    TypeInfo {
        class,
        ty,
        rows,
        columns,
        elements,
        members: Vec::new(),
    }
}

pub(crate) fn scalar_type(ty: ParameterType) -> TypeInfo {
    type_info(ParameterClass::Scalar, ty, 1, 1, 1)
}

/// A struct type nested `depth` levels deep, one member per level.
pub(crate) fn nested_struct(depth: usize) -> TypeInfo {
    let mut info = scalar_type(ParameterType::Float);
    for level in 0..depth {
        info = TypeInfo {
            class: ParameterClass::Struct,
            ty: ParameterType::Void,
            rows: 0,
            columns: 0,
            elements: 1,
            members: vec![StructMember {
                name: format!("m{}", level),
                info,
            }],
        };
    }
    info
}

pub(crate) fn symbol(name: &str, info: TypeInfo) -> Symbol {
    Symbol {
        name: name.to_owned(),
        register_set: RegisterSet::Float4,
        register_index: 0,
        register_count: 1,
        info,
    }
}

pub(crate) fn empty_shader(profile: &str) -> ParsedShader {
    ParsedShader {
        profile: profile.to_owned(),
        kind: ShaderKind::Pixel,
        major_ver: 2,
        minor_ver: 0,
        instruction_count: 0,
        mainfn: "main".to_owned(),
        inputs: Vec::new(),
        outputs: Vec::new(),
        constants: Vec::new(),
        uniforms: Vec::new(),
        samplers: Vec::new(),
        symbols: Vec::new(),
        preshader: None,
        errors: Vec::new(),
        output: Vec::new(),
    }
}

pub(crate) fn operand(kind: PreshaderOperandKind, index: u32) -> PreshaderOperand {
    PreshaderOperand {
        kind,
        index,
        array_registers: Vec::new(),
    }
}

pub(crate) fn indirect_operand(
    kind: PreshaderOperandKind,
    index: u32,
    array_registers: Vec<u32>,
) -> PreshaderOperand {
    PreshaderOperand {
        kind,
        index,
        array_registers,
    }
}

pub(crate) fn instruction(
    opcode: PreshaderOpcode,
    element_count: u32,
    operands: Vec<PreshaderOperand>,
) -> PreshaderInstruction {
    PreshaderInstruction {
        opcode,
        element_count,
        operands,
    }
}

pub(crate) fn preshader(
    literals: Vec<f64>,
    instructions: Vec<PreshaderInstruction>,
) -> Preshader {
    Preshader {
        literals,
        symbols: Vec::new(),
        instructions,
    }
}

pub(crate) fn value(name: &str, ty: TypeInfo, payload: ValuePayload) -> Value {
    Value {
        name: name.to_owned(),
        semantic: String::new(),
        ty,
        payload,
    }
}

pub(crate) fn param(name: &str, ty: TypeInfo, payload: ValuePayload) -> EffectParam {
    EffectParam {
        value: value(name, ty, payload),
        annotations: Vec::new(),
    }
}

pub(crate) fn sampler_value(name: &str, states: Vec<(SamplerStateKind, SamplerStateValue)>) -> Value {
    value(
        name,
        type_info(ParameterClass::Object, ParameterType::Sampler2D, 1, 1, 1),
        ValuePayload::SamplerStates(
            states
                .into_iter()
                .map(|(kind, value)| SamplerState { kind, value })
                .collect(),
        ),
    )
}

pub(crate) fn empty_effect() -> Effect {
    Effect {
        errors: Vec::new(),
        params: Vec::new(),
        techniques: Vec::new(),
        objects: Vec::new(),
    }
}
