//! Symbol and type metadata attached to parsed shaders.
//!
//! Every enum in this module is decoded from tags found in compiled shader
//! data, so each one carries an `Unknown(raw)` variant instead of assuming
//! the tag is in range. `name()` always returns a printable string, even for
//! unrecognized tags.

/// Kind of a parsed shader program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderKind {
    Unknown,
    Pixel,
    Vertex,
    Geometry,
    Unrecognized(u32),
}

impl ShaderKind {
    pub fn from_raw(raw: u32) -> Self {
        match raw {
            0 => Self::Unknown,
            1 => Self::Pixel,
            2 => Self::Vertex,
            3 => Self::Geometry,
            other => Self::Unrecognized(other),
        }
    }

    pub fn raw(&self) -> u32 {
        match self {
            Self::Unknown => 0,
            Self::Pixel => 1,
            Self::Vertex => 2,
            Self::Geometry => 3,
            Self::Unrecognized(raw) => *raw,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Pixel => "pixel",
            Self::Vertex => "vertex",
            Self::Geometry => "geometry",
            Self::Unrecognized(_) => "(bogus value?)",
        }
    }
}

/// Declared usage of a shader input/output attribute.
///
/// `Unknown` is a real usage in the source data (raw value -1), distinct from
/// an out-of-range tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Usage {
    Unknown,
    Position,
    BlendWeight,
    BlendIndices,
    Normal,
    PointSize,
    TexCoord,
    Tangent,
    Binormal,
    TessFactor,
    PositionT,
    Color,
    Fog,
    Depth,
    Sample,
    Unrecognized(i32),
}

impl Usage {
    pub fn from_raw(raw: i32) -> Self {
        match raw {
            -1 => Self::Unknown,
            0 => Self::Position,
            1 => Self::BlendWeight,
            2 => Self::BlendIndices,
            3 => Self::Normal,
            4 => Self::PointSize,
            5 => Self::TexCoord,
            6 => Self::Tangent,
            7 => Self::Binormal,
            8 => Self::TessFactor,
            9 => Self::PositionT,
            10 => Self::Color,
            11 => Self::Fog,
            12 => Self::Depth,
            13 => Self::Sample,
            other => Self::Unrecognized(other),
        }
    }

    pub fn raw(&self) -> i32 {
        match self {
            Self::Unknown => -1,
            Self::Position => 0,
            Self::BlendWeight => 1,
            Self::BlendIndices => 2,
            Self::Normal => 3,
            Self::PointSize => 4,
            Self::TexCoord => 5,
            Self::Tangent => 6,
            Self::Binormal => 7,
            Self::TessFactor => 8,
            Self::PositionT => 9,
            Self::Color => 10,
            Self::Fog => 11,
            Self::Depth => 12,
            Self::Sample => 13,
            Self::Unrecognized(raw) => *raw,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Unknown => "<unknown>",
            Self::Position => "position",
            Self::BlendWeight => "blendweight",
            Self::BlendIndices => "blendindices",
            Self::Normal => "normal",
            Self::PointSize => "psize",
            Self::TexCoord => "texcoord",
            Self::Tangent => "tangent",
            Self::Binormal => "binormal",
            Self::TessFactor => "tessfactor",
            Self::PositionT => "positiont",
            Self::Color => "color",
            Self::Fog => "fog",
            Self::Depth => "depth",
            Self::Sample => "sample",
            Self::Unrecognized(_) => "<unknown>",
        }
    }
}

/// Register set a uniform-style value lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UniformKind {
    Float,
    Int,
    Bool,
    Unrecognized(i32),
}

impl UniformKind {
    pub fn from_raw(raw: i32) -> Self {
        match raw {
            0 => Self::Float,
            1 => Self::Int,
            2 => Self::Bool,
            other => Self::Unrecognized(other),
        }
    }

    pub fn raw(&self) -> i32 {
        match self {
            Self::Float => 0,
            Self::Int => 1,
            Self::Bool => 2,
            Self::Unrecognized(raw) => *raw,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Float => "float",
            Self::Int => "int",
            Self::Bool => "bool",
            Self::Unrecognized(_) => "unknown",
        }
    }
}

/// Dimensionality of a sampler register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SamplerKind {
    TwoD,
    Cube,
    Volume,
    Unrecognized(i32),
}

impl SamplerKind {
    pub fn from_raw(raw: i32) -> Self {
        match raw {
            0 => Self::TwoD,
            1 => Self::Cube,
            2 => Self::Volume,
            other => Self::Unrecognized(other),
        }
    }

    pub fn raw(&self) -> i32 {
        match self {
            Self::TwoD => 0,
            Self::Cube => 1,
            Self::Volume => 2,
            Self::Unrecognized(raw) => *raw,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::TwoD => "2d",
            Self::Cube => "cube",
            Self::Volume => "volume",
            Self::Unrecognized(_) => "unknown",
        }
    }
}

/// Register set a symbol is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegisterSet {
    Bool,
    Int4,
    Float4,
    Sampler,
    Unrecognized(u32),
}

impl RegisterSet {
    pub fn from_raw(raw: u32) -> Self {
        match raw {
            0 => Self::Bool,
            1 => Self::Int4,
            2 => Self::Float4,
            3 => Self::Sampler,
            other => Self::Unrecognized(other),
        }
    }

    pub fn raw(&self) -> u32 {
        match self {
            Self::Bool => 0,
            Self::Int4 => 1,
            Self::Float4 => 2,
            Self::Sampler => 3,
            Self::Unrecognized(raw) => *raw,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int4 => "int4",
            Self::Float4 => "float4",
            Self::Sampler => "sampler",
            Self::Unrecognized(_) => "unknown",
        }
    }
}

/// Shape class of a typed parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterClass {
    Scalar,
    Vector,
    MatrixRows,
    MatrixColumns,
    Object,
    Struct,
    Unrecognized(u32),
}

impl ParameterClass {
    pub fn from_raw(raw: u32) -> Self {
        match raw {
            0 => Self::Scalar,
            1 => Self::Vector,
            2 => Self::MatrixRows,
            3 => Self::MatrixColumns,
            4 => Self::Object,
            5 => Self::Struct,
            other => Self::Unrecognized(other),
        }
    }

    pub fn raw(&self) -> u32 {
        match self {
            Self::Scalar => 0,
            Self::Vector => 1,
            Self::MatrixRows => 2,
            Self::MatrixColumns => 3,
            Self::Object => 4,
            Self::Struct => 5,
            Self::Unrecognized(raw) => *raw,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Scalar => "scalar",
            Self::Vector => "vector",
            Self::MatrixRows => "row-major matrix",
            Self::MatrixColumns => "column-major matrix",
            Self::Object => "object",
            Self::Struct => "struct",
            Self::Unrecognized(_) => "unknown",
        }
    }
}

/// Base type of a typed parameter or effect object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterType {
    Void,
    Bool,
    Int,
    Float,
    String,
    Texture,
    Texture1D,
    Texture2D,
    Texture3D,
    TextureCube,
    Sampler,
    Sampler1D,
    Sampler2D,
    Sampler3D,
    SamplerCube,
    PixelShader,
    VertexShader,
    Unsupported,
    Unrecognized(u32),
}

impl ParameterType {
    pub fn from_raw(raw: u32) -> Self {
        match raw {
            0 => Self::Void,
            1 => Self::Bool,
            2 => Self::Int,
            3 => Self::Float,
            4 => Self::String,
            5 => Self::Texture,
            6 => Self::Texture1D,
            7 => Self::Texture2D,
            8 => Self::Texture3D,
            9 => Self::TextureCube,
            10 => Self::Sampler,
            11 => Self::Sampler1D,
            12 => Self::Sampler2D,
            13 => Self::Sampler3D,
            14 => Self::SamplerCube,
            15 => Self::PixelShader,
            16 => Self::VertexShader,
            17 => Self::Unsupported,
            other => Self::Unrecognized(other),
        }
    }

    #[deny(unreachable_patterns)]
    pub fn raw(&self) -> u32 {
        match self {
            Self::Void => 0,
            Self::Bool => 1,
            Self::Int => 2,
            Self::Float => 3,
            Self::String => 4,
            Self::Texture => 5,
            Self::Texture1D => 6,
            Self::Texture2D => 7,
            Self::Texture3D => 8,
            Self::TextureCube => 9,
            Self::Sampler => 10,
            Self::Sampler1D => 11,
            Self::Sampler2D => 12,
            Self::Sampler3D => 13,
            Self::SamplerCube => 14,
            Self::PixelShader => 15,
            Self::VertexShader => 16,
            Self::Unsupported => 17,
            Self::Unrecognized(raw) => *raw,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Void => "void",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::String => "string",
            Self::Texture => "texture",
            Self::Texture1D => "texture1d",
            Self::Texture2D => "texture2d",
            Self::Texture3D => "texture3d",
            Self::TextureCube => "texturecube",
            Self::Sampler => "sampler",
            Self::Sampler1D => "sampler1d",
            Self::Sampler2D => "sampler2d",
            Self::Sampler3D => "sampler3d",
            Self::SamplerCube => "samplercube",
            Self::PixelShader => "pixelshader",
            Self::VertexShader => "vertexshader",
            Self::Unsupported => "unsupported",
            Self::Unrecognized(_) => "unknown",
        }
    }

    /// True for the sampler family (any dimensionality).
    pub fn is_sampler(&self) -> bool {
        matches!(
            self,
            Self::Sampler
                | Self::Sampler1D
                | Self::Sampler2D
                | Self::Sampler3D
                | Self::SamplerCube
        )
    }

    /// True for the texture family (any dimensionality).
    pub fn is_texture(&self) -> bool {
        matches!(
            self,
            Self::Texture
                | Self::Texture1D
                | Self::Texture2D
                | Self::Texture3D
                | Self::TextureCube
        )
    }

    /// True for the shader object types found in effect object tables.
    pub fn is_shader(&self) -> bool {
        matches!(self, Self::PixelShader | Self::VertexShader)
    }
}

/// Recursive description of a symbol's type.
///
/// `members` is non-empty only for struct types; nesting depth is bounded
/// only by the source data, so renderers cap their recursion.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeInfo {
    pub class: ParameterClass,
    pub ty: ParameterType,
    pub rows: u32,
    pub columns: u32,
    pub elements: u32,
    pub members: Vec<StructMember>,
}

/// One named member of a struct-typed symbol.
#[derive(Debug, Clone, PartialEq)]
pub struct StructMember {
    pub name: String,
    pub info: TypeInfo,
}

/// A symbol-table entry of a parsed shader or preshader.
#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    pub name: String,
    pub register_set: RegisterSet,
    pub register_index: u32,
    pub register_count: u32,
    pub info: TypeInfo,
}
