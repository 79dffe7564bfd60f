//! The effect container model: typed parameters, the technique/pass/state
//! tree, and the object table.

use fxray_shader::{ParameterType, ParseError, ParsedShader, Preshader, TypeInfo};

/// Scalar payload of one sampler-state entry.
///
/// Exactly one state type (`MipMapLodBias`) carries a float; every other
/// state carries an int/enum value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SamplerStateValue {
    Float(f32),
    Int(i32),
}

/// A render-state tag attached to a sampler-typed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SamplerStateKind {
    Unknown0,
    Unknown1,
    Unknown2,
    Unknown3,
    Texture,
    AddressU,
    AddressV,
    AddressW,
    BorderColor,
    MagFilter,
    MinFilter,
    MipFilter,
    MipMapLodBias,
    MaxMipLevel,
    MaxAnisotropy,
    SrgbTexture,
    ElementIndex,
    DmapOffset,
    Unrecognized(u32),
}

impl SamplerStateKind {
    pub fn from_raw(raw: u32) -> Self {
        match raw {
            0 => Self::Unknown0,
            1 => Self::Unknown1,
            2 => Self::Unknown2,
            3 => Self::Unknown3,
            4 => Self::Texture,
            5 => Self::AddressU,
            6 => Self::AddressV,
            7 => Self::AddressW,
            8 => Self::BorderColor,
            9 => Self::MagFilter,
            10 => Self::MinFilter,
            11 => Self::MipFilter,
            12 => Self::MipMapLodBias,
            13 => Self::MaxMipLevel,
            14 => Self::MaxAnisotropy,
            15 => Self::SrgbTexture,
            16 => Self::ElementIndex,
            17 => Self::DmapOffset,
            other => Self::Unrecognized(other),
        }
    }

    pub fn raw(&self) -> u32 {
        match self {
            Self::Unknown0 => 0,
            Self::Unknown1 => 1,
            Self::Unknown2 => 2,
            Self::Unknown3 => 3,
            Self::Texture => 4,
            Self::AddressU => 5,
            Self::AddressV => 6,
            Self::AddressW => 7,
            Self::BorderColor => 8,
            Self::MagFilter => 9,
            Self::MinFilter => 10,
            Self::MipFilter => 11,
            Self::MipMapLodBias => 12,
            Self::MaxMipLevel => 13,
            Self::MaxAnisotropy => 14,
            Self::SrgbTexture => 15,
            Self::ElementIndex => 16,
            Self::DmapOffset => 17,
            Self::Unrecognized(raw) => *raw,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Unknown0 => "UNKNOWN0",
            Self::Unknown1 => "UNKNOWN1",
            Self::Unknown2 => "UNKNOWN2",
            Self::Unknown3 => "UNKNOWN3",
            Self::Texture => "TEXTURE",
            Self::AddressU => "ADDRESSU",
            Self::AddressV => "ADDRESSV",
            Self::AddressW => "ADDRESSW",
            Self::BorderColor => "BORDERCOLOR",
            Self::MagFilter => "MAGFILTER",
            Self::MinFilter => "MINFILTER",
            Self::MipFilter => "MIPFILTER",
            Self::MipMapLodBias => "MIPMAPLODBIAS",
            Self::MaxMipLevel => "MAXMIPLEVEL",
            Self::MaxAnisotropy => "MAXANISOTROPY",
            Self::SrgbTexture => "SRGBTEXTURE",
            Self::ElementIndex => "ELEMENTINDEX",
            Self::DmapOffset => "DMAPOFFSET",
            Self::Unrecognized(_) => "UNKNOWN",
        }
    }
}

/// One sampler-state entry of a sampler-typed value.
#[derive(Debug, Clone, PartialEq)]
pub struct SamplerState {
    pub kind: SamplerStateKind,
    pub value: SamplerStateValue,
}

/// The data behind a typed value.
///
/// Numeric payloads are laid out row-major, `elements * rows * 4` cells per
/// the container format, regardless of the declared column count; columns <= 4
/// select a sub-range within each 4-cell row.
#[derive(Debug, Clone, PartialEq)]
pub enum ValuePayload {
    Float(Vec<f32>),
    Int(Vec<i32>),
    SamplerStates(Vec<SamplerState>),
}

impl ValuePayload {
    /// Number of stored cells or sampler states.
    pub fn len(&self) -> usize {
        match self {
            Self::Float(v) => v.len(),
            Self::Int(v) => v.len(),
            Self::SamplerStates(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A typed value: a parameter default, an annotation, or a state value.
#[derive(Debug, Clone, PartialEq)]
pub struct Value {
    pub name: String,
    pub semantic: String,
    pub ty: TypeInfo,
    pub payload: ValuePayload,
}

/// A top-level effect parameter with its annotations.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectParam {
    pub value: Value,
    pub annotations: Vec<Value>,
}

/// One render state inside a pass.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectState {
    /// Raw state-type code from the container.
    pub ty: u32,
    pub value: Value,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EffectPass {
    pub name: String,
    pub states: Vec<EffectState>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EffectTechnique {
    pub name: String,
    pub passes: Vec<EffectPass>,
}

/// Payload of a shader-typed effect object: either an embedded preshader or a
/// fully parsed shader. The effect owns the parsed shader for its whole
/// lifetime; consumers borrow it.
#[derive(Debug, Clone, PartialEq)]
pub enum ShaderObjectContent {
    Preshader(Preshader),
    Parsed(ParsedShader),
}

/// A shader object in the effect object table.
#[derive(Debug, Clone, PartialEq)]
pub struct ShaderObject {
    /// `PixelShader` or `VertexShader`.
    pub ty: ParameterType,
    /// Owning technique index.
    pub technique: u32,
    /// Owning pass index within the technique.
    pub pass: u32,
    /// Indices into [`Effect::params`] of the parameters this shader reads.
    pub param_refs: Vec<u32>,
    pub content: ShaderObjectContent,
}

impl ShaderObject {
    pub fn is_preshader(&self) -> bool {
        matches!(self.content, ShaderObjectContent::Preshader(_))
    }

    pub fn parsed(&self) -> Option<&ParsedShader> {
        match &self.content {
            ShaderObjectContent::Parsed(pd) => Some(pd),
            ShaderObjectContent::Preshader(_) => None,
        }
    }
}

/// One entry of the effect object table, classified by its declared symbol
/// type.
#[derive(Debug, Clone, PartialEq)]
pub enum EffectObject {
    /// Index 0 of the object table is always this.
    Empty,
    Shader(ShaderObject),
    String { value: String },
    /// Sampler-typed object: a sampler-to-parameter mapping.
    SamplerMap { ty: ParameterType, name: String },
    /// Texture-typed object; carries no payload a report needs.
    Texture { ty: ParameterType },
    /// Any declared type outside the known families.
    Unknown { ty: ParameterType },
}

/// A compiled effect: parameters, techniques, and the object table.
///
/// A non-empty `errors` list means compilation failed and the structural
/// fields are meaningless.
#[derive(Debug, Clone, PartialEq)]
pub struct Effect {
    pub errors: Vec<ParseError>,
    pub params: Vec<EffectParam>,
    pub techniques: Vec<EffectTechnique>,
    /// Object table; index 0 is reserved and never populated.
    pub objects: Vec<EffectObject>,
}

impl Effect {
    /// An error-bearing placeholder effect.
    pub fn from_errors(errors: Vec<ParseError>) -> Self {
        Self {
            errors,
            params: Vec::new(),
            techniques: Vec::new(),
            objects: Vec::new(),
        }
    }

    /// Iterates the object table in index order, skipping the reserved
    /// index 0 entry.
    pub fn objects_from_one(&self) -> impl Iterator<Item = (usize, &EffectObject)> {
        self.objects.iter().enumerate().skip(1)
    }
}
