use pretty_assertions::assert_eq;

use fxray_shader::{
    Attribute, Constant, ConstantValue, ParameterClass, ParameterType, ParseError, Sampler,
    SamplerKind, ShaderKind, Uniform, UniformKind, Usage,
};

use crate::tests_fixtures::{empty_shader, nested_struct, scalar_type, symbol, type_info};
use crate::{ReportError, Reporter, SpirvToolError, SpirvTools};

#[test]
fn error_shader_renders_only_error_lines() {
    let mut pd = empty_shader("glsl");
    pd.errors = vec![
        ParseError {
            filename: None,
            position: 12,
            message: "unexpected token".to_owned(),
        },
        ParseError {
            filename: Some("lighting.fx".to_owned()),
            position: -1,
            message: "truncated".to_owned(),
        },
    ];
    // Fields that would otherwise render.
    pd.instruction_count = 99;
    pd.symbols = vec![symbol("ignored", scalar_type(ParameterType::Float))];

    let text = Reporter::new().shader_report("input.fx", &pd).unwrap();
    assert_eq!(
        text,
        "input.fx:12: ERROR: unexpected token\n\
         lighting.fx:-1: ERROR: truncated\n"
    );
}

#[test]
fn full_shader_report_layout() {
    let mut pd = empty_shader("glsl");
    pd.kind = ShaderKind::Pixel;
    pd.major_ver = 2;
    pd.minor_ver = 0;
    pd.instruction_count = 5;
    pd.inputs = vec![Attribute {
        usage: Usage::TexCoord,
        index: 1,
        name: Some("uv".to_owned()),
    }];
    pd.outputs = vec![Attribute {
        usage: Usage::Color,
        index: 0,
        name: None,
    }];
    pd.constants = vec![Constant {
        index: 2,
        value: ConstantValue::Float([1.0, 2.5, 3.0, 4.0]),
    }];
    pd.uniforms = vec![Uniform {
        index: 0,
        kind: UniformKind::Float,
        array_count: 3,
        constant: true,
        name: Some("world".to_owned()),
    }];
    pd.samplers = vec![Sampler {
        index: 0,
        kind: SamplerKind::TwoD,
        name: Some("tex0".to_owned()),
        texbem: true,
    }];
    pd.symbols = vec![symbol(
        "world",
        type_info(ParameterClass::MatrixRows, ParameterType::Float, 3, 4, 1),
    )];
    pd.output = b"void main() {\n    gl_FragColor = c;\n}".to_vec();

    let text = Reporter::new().shader_report("input.fx", &pd).unwrap();
    assert_eq!(
        text,
        "PROFILE: glsl\n\
         SHADER TYPE: pixel\n\
         VERSION: 2.0\n\
         INSTRUCTION COUNT: 5\n\
         MAIN FUNCTION: main\n\
         INPUTS:\n\
         \x20   * texcoord1 (\"uv\")\n\
         OUTPUTS:\n\
         \x20   * color\n\
         CONSTANTS:\n\
         \x20   * 2: float (1 2.5 3 4)\n\
         UNIFORMS:\n\
         \x20   * 0: const array[3] float (\"world\")\n\
         SAMPLERS:\n\
         \x20   * 0: 2d (\"tex0\") [TEXBEM]\n\
         SYMBOLS:\n\
         \x20   * 0: \"world\"\n\
         \x20     register set float4\n\
         \x20     register index 0\n\
         \x20     register count 1\n\
         \x20     symbol class row-major matrix\n\
         \x20     symbol type float\n\
         \x20     rows 3\n\
         \x20     columns 4\n\
         \x20     elements 1\n\
         \n\
         OUTPUT:\n\
         \x20   void main() {\n\
         \x20       gl_FragColor = c;\n\
         \x20   }\n\
         \n"
    );
}

#[test]
fn empty_sections_render_none_markers() {
    let pd = empty_shader("glsl");
    let text = Reporter::new().shader_report("input.fx", &pd).unwrap();
    assert!(text.contains("INPUTS: (none.)"));
    assert!(text.contains("OUTPUTS: (none.)"));
    assert!(text.contains("CONSTANTS: (none.)"));
    assert!(text.contains("UNIFORMS: (none.)"));
    assert!(text.contains("SAMPLERS: (none.)"));
    assert!(text.contains("SYMBOLS: (none.)"));
    // No output payload, no OUTPUT section.
    assert!(!text.contains("OUTPUT:"));
}

#[test]
fn unrecognized_tags_render_markers() {
    let mut pd = empty_shader("glsl");
    pd.kind = ShaderKind::Unrecognized(7);
    pd.constants = vec![Constant {
        index: 0,
        value: ConstantValue::Unrecognized(9),
    }];
    pd.uniforms = vec![Uniform {
        index: 1,
        kind: UniformKind::Unrecognized(5),
        array_count: 0,
        constant: false,
        name: None,
    }];
    pd.samplers = vec![Sampler {
        index: 2,
        kind: SamplerKind::Unrecognized(8),
        name: None,
        texbem: false,
    }];

    let text = Reporter::new().shader_report("input.fx", &pd).unwrap();
    assert!(text.contains("SHADER TYPE: (bogus value?)"));
    assert!(text.contains("* 0: unknown (???)"));
    assert!(text.contains("* 1: unknown"));
    assert!(text.contains("* 2: unknown"));
}

#[test]
fn struct_members_recurse_and_depth_is_capped() {
    let mut pd = empty_shader("glsl");
    pd.symbols = vec![
        symbol("settings", nested_struct(3)),
        symbol("hostile", nested_struct(80)),
    ];

    let text = Reporter::new().shader_report("input.fx", &pd).unwrap();
    assert!(text.contains("MEMBERS:"));
    assert!(text.contains("* 0: \"m2\""));
    assert!(text.contains("* 0: \"m0\""));
    assert!(text.contains("(struct nesting too deep)"));
}

struct StubSpirv {
    text: &'static str,
    disassembly_error: Option<&'static str>,
    validation_error: Option<&'static str>,
}

impl StubSpirv {
    fn ok(text: &'static str) -> Self {
        Self {
            text,
            disassembly_error: None,
            validation_error: None,
        }
    }
}

impl SpirvTools for StubSpirv {
    fn disassemble(&self, words: &[u32]) -> Result<String, SpirvToolError> {
        if let Some(msg) = self.disassembly_error {
            return Err(SpirvToolError::Disassembly(msg.to_owned()));
        }
        Ok(format!("; {} words\n{}", words.len(), self.text))
    }

    fn validate(&self, _words: &[u32]) -> Result<(), SpirvToolError> {
        match self.validation_error {
            Some(msg) => Err(SpirvToolError::Validation(msg.to_owned())),
            None => Ok(()),
        }
    }
}

fn spirv_shader() -> fxray_shader::ParsedShader {
    let mut pd = empty_shader("spirv");
    // Two words of "binary" plus a 4-byte patch table.
    pd.output = [
        0x03022307u32.to_le_bytes(),
        5u32.to_le_bytes(),
        0xAAAA_AAAAu32.to_le_bytes(),
    ]
    .concat();
    pd
}

#[test]
fn spirv_output_is_disassembled_by_the_toolchain() {
    let tools = StubSpirv::ok("OpCapability Shader");
    let reporter = Reporter::new().with_spirv_tools(&tools, 4);
    let text = reporter.shader_report("input.fx", &spirv_shader()).unwrap();
    // The patch table is stripped, leaving two words.
    assert!(text.contains("OUTPUT:\n    ; 2 words\n    OpCapability Shader\n"));
}

#[test]
fn spirv_disassembly_failure_aborts_the_report() {
    let tools = StubSpirv {
        text: "",
        disassembly_error: Some("bad magic"),
        validation_error: None,
    };
    let reporter = Reporter::new().with_spirv_tools(&tools, 4);
    let err = reporter
        .shader_report("input.fx", &spirv_shader())
        .unwrap_err();
    assert_eq!(err, ReportError::SpirvDisassembly("bad magic".to_owned()));
}

#[test]
fn spirv_validation_failure_aborts_the_report() {
    let tools = StubSpirv {
        text: "ok",
        disassembly_error: None,
        validation_error: Some("unreachable block"),
    };
    let reporter = Reporter::new().with_spirv_tools(&tools, 4);
    let err = reporter
        .shader_report("input.fx", &spirv_shader())
        .unwrap_err();
    assert_eq!(
        err,
        ReportError::SpirvValidation("unreachable block".to_owned())
    );
}

#[test]
fn spirv_without_toolchain_falls_back_to_raw_dump() {
    let mut pd = empty_shader("spirv");
    pd.output = b"raw bytes".to_vec();
    let text = Reporter::new().shader_report("input.fx", &pd).unwrap();
    assert!(text.contains("OUTPUT:\n    raw bytes\n"));
}
