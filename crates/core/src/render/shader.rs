//! Shader compilation and linking helpers for WebGL2 / OpenGL.
//!
//! Two layers are provided. The `try_*` functions return a typed
//! [`ShaderError`] carrying the driver's info log. The plain functions
//! ([`compile_shader`], [`link_program`], [`compile_program`]) log that
//! error through `tracing` and return `None`, so callers only have to
//! check for the missing handle.
//!
//! In every failure path the partially created GL object is deleted
//! before returning.

use std::fmt;

use thiserror::Error;

/// A programmable pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    /// The GL enumerant passed to `createShader`.
    pub fn gl_type(self) -> u32 {
        match self {
            ShaderStage::Vertex => glow::VERTEX_SHADER,
            ShaderStage::Fragment => glow::FRAGMENT_SHADER,
        }
    }

    /// Maps a GL shader type back to a stage, if it is one we support.
    pub fn from_gl_type(ty: u32) -> Option<Self> {
        match ty {
            glow::VERTEX_SHADER => Some(ShaderStage::Vertex),
            glow::FRAGMENT_SHADER => Some(ShaderStage::Fragment),
            _ => None,
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}

/// Errors that can occur during shader compilation or program linking.
#[derive(Debug, Clone, Error)]
pub enum ShaderError {
    /// The context refused to allocate a shader or program name.
    #[error("failed to create {object}: {reason}")]
    Create {
        object: &'static str,
        reason: String,
    },
    /// A shader stage failed to compile.
    #[error("shader compile error ({stage}):\n{log}")]
    Compile {
        stage: ShaderStage,
        /// Line-numbered source followed by the driver's info log.
        log: String,
    },
    /// A program failed to link.
    #[error("program link error:\n{0}")]
    Link(String),
}

/// Formats a shader compilation error for human-readable debugging.
///
/// Prepends right-aligned line numbers to each line of `source`, then
/// appends the driver's error `log`. Both may be empty.
pub fn format_shader_error(source: &str, log: &str) -> String {
    let source_lines: Vec<&str> = source.lines().collect();

    let width = source_lines.len().max(1).to_string().len();

    let numbered: String = source_lines
        .iter()
        .enumerate()
        .map(|(i, line)| format!("{:>width$}: {line}", i + 1, width = width))
        .collect::<Vec<_>>()
        .join("\n");

    match (numbered.is_empty(), log.is_empty()) {
        (true, true) => String::new(),
        (true, false) => log.to_string(),
        (false, true) => numbered,
        (false, false) => format!("{numbered}\n\n{log}"),
    }
}

/// Compiles a single shader stage, returning the driver diagnostics on failure.
///
/// # Errors
///
/// Returns `ShaderError::Compile` if the GLSL fails to compile (the shader
/// object is deleted first), or `ShaderError::Create` if no shader name
/// could be allocated.
#[allow(unsafe_code)]
pub fn try_compile_shader(
    gl: &glow::Context,
    source: &str,
    stage: ShaderStage,
) -> Result<glow::Shader, ShaderError> {
    use glow::HasContext;

    // SAFETY: glow wraps raw GL calls as unsafe. The stage maps to a valid
    // shader type, and the shader is deleted on the failure path.
    let shader = unsafe {
        gl.create_shader(stage.gl_type())
            .map_err(|reason| ShaderError::Create {
                object: "shader",
                reason,
            })?
    };

    let compiled = unsafe {
        gl.shader_source(shader, source);
        gl.compile_shader(shader);
        gl.get_shader_compile_status(shader)
    };

    if compiled {
        return Ok(shader);
    }

    let info_log = unsafe { gl.get_shader_info_log(shader) };
    unsafe { gl.delete_shader(shader) };
    Err(ShaderError::Compile {
        stage,
        log: format_shader_error(source, &info_log),
    })
}

/// Attaches both shaders to a new program and links it.
///
/// The shaders are detached again after linking; the caller still owns
/// and must delete them.
///
/// # Errors
///
/// Returns `ShaderError::Link` if linking fails (the program is deleted
/// first), or `ShaderError::Create` if no program name could be allocated.
#[allow(unsafe_code)]
pub fn try_link_program(
    gl: &glow::Context,
    vertex: glow::Shader,
    fragment: glow::Shader,
) -> Result<glow::Program, ShaderError> {
    use glow::HasContext;

    // SAFETY: shader handles come from prior glow calls on the same context;
    // the program is deleted on the failure path.
    let program = unsafe {
        gl.create_program().map_err(|reason| ShaderError::Create {
            object: "program",
            reason,
        })?
    };

    let linked = unsafe {
        gl.attach_shader(program, vertex);
        gl.attach_shader(program, fragment);
        gl.link_program(program);
        gl.detach_shader(program, vertex);
        gl.detach_shader(program, fragment);
        gl.get_program_link_status(program)
    };

    if linked {
        return Ok(program);
    }

    let info_log = unsafe { gl.get_program_info_log(program) };
    unsafe { gl.delete_program(program) };
    Err(ShaderError::Link(info_log))
}

/// Compiles `source` for `stage`.
///
/// On failure the diagnostic is logged at error level and `None` is
/// returned; the shader object has already been released.
pub fn compile_shader(
    gl: &glow::Context,
    source: &str,
    stage: ShaderStage,
) -> Option<glow::Shader> {
    try_compile_shader(gl, source, stage)
        .inspect_err(|e| tracing::error!(%stage, "shader compilation error: {e}"))
        .ok()
}

/// Links a vertex and fragment shader into a program.
///
/// On failure the program info log is logged at error level and `None`
/// is returned; the program object has already been released.
pub fn link_program(
    gl: &glow::Context,
    vertex: glow::Shader,
    fragment: glow::Shader,
) -> Option<glow::Program> {
    try_link_program(gl, vertex, fragment)
        .inspect_err(|e| tracing::error!("program linking error: {e}"))
        .ok()
}

/// Compiles both stages and links them, deleting the intermediate shader
/// objects whatever the outcome.
#[allow(unsafe_code)]
pub fn compile_program(
    gl: &glow::Context,
    vertex_src: &str,
    fragment_src: &str,
) -> Option<glow::Program> {
    use glow::HasContext;

    let vert = compile_shader(gl, vertex_src, ShaderStage::Vertex)?;
    let Some(frag) = compile_shader(gl, fragment_src, ShaderStage::Fragment) else {
        // SAFETY: vert is a valid shader handle from compile_shader.
        unsafe { gl.delete_shader(vert) };
        return None;
    };

    let program = link_program(gl, vert, frag);

    // SAFETY: the linked program keeps its own reference to the binaries.
    unsafe {
        gl.delete_shader(vert);
        gl.delete_shader(frag);
    }

    program
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_shader_error_prepends_line_numbers() {
        let source = "#version 300 es\nvoid main() {\n}\n";
        let log = "ERROR: 0:2: syntax error";
        let formatted = format_shader_error(source, log);

        assert!(formatted.contains("1: #version 300 es"), "got:\n{formatted}");
        assert!(formatted.contains("2: void main() {"), "got:\n{formatted}");
        assert!(formatted.contains("3: }"), "got:\n{formatted}");
        assert!(formatted.ends_with(log), "got:\n{formatted}");
    }

    #[test]
    fn format_shader_error_handles_empty_inputs() {
        assert_eq!(format_shader_error("", "some error"), "some error");
        assert_eq!(format_shader_error("void main() {}", ""), "1: void main() {}");
        assert!(format_shader_error("", "").is_empty());
    }

    #[test]
    fn format_shader_error_right_aligns_line_numbers() {
        let source = (1..=12)
            .map(|i| format!("line {i}"))
            .collect::<Vec<_>>()
            .join("\n");
        let formatted = format_shader_error(&source, "err");
        let lines: Vec<&str> = formatted.lines().collect();

        assert!(lines[0].starts_with(" 1: "), "got: '{}'", lines[0]);
        assert!(lines[9].starts_with("10: "), "got: '{}'", lines[9]);
    }

    #[test]
    fn stage_maps_to_gl_enumerants() {
        assert_eq!(ShaderStage::Vertex.gl_type(), glow::VERTEX_SHADER);
        assert_eq!(ShaderStage::Fragment.gl_type(), glow::FRAGMENT_SHADER);
        for stage in [ShaderStage::Vertex, ShaderStage::Fragment] {
            assert_eq!(ShaderStage::from_gl_type(stage.gl_type()), Some(stage));
        }
        assert_eq!(ShaderStage::from_gl_type(glow::COMPUTE_SHADER), None);
    }

    #[test]
    fn stage_display_is_lowercase_name() {
        assert_eq!(ShaderStage::Vertex.to_string(), "vertex");
        assert_eq!(ShaderStage::Fragment.to_string(), "fragment");
    }

    #[test]
    fn compile_error_display_includes_stage_and_log() {
        let err = ShaderError::Compile {
            stage: ShaderStage::Fragment,
            log: "undeclared identifier".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("fragment"), "missing stage in: {msg}");
        assert!(msg.contains("undeclared identifier"), "missing log in: {msg}");
    }

    #[test]
    fn link_error_display_includes_log() {
        let msg = ShaderError::Link("varying mismatch".into()).to_string();
        assert!(msg.contains("varying mismatch"), "missing log in: {msg}");
    }

    #[test]
    fn create_error_names_object() {
        let err = ShaderError::Create {
            object: "program",
            reason: "context lost".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("program") && msg.contains("context lost"), "{msg}");
    }

    #[test]
    fn shader_error_implements_std_error() {
        fn assert_error<T: std::error::Error + Send + Sync>() {}
        assert_error::<ShaderError>();
    }
}
