//! Errors surfaced by the `webgl-kit` binary and the exit status each one
//! maps to. clap already exits with 2 on bad arguments, so ours start at 10:
//!
//! | code | meaning |
//! |------|---------|
//! | 10 | surface lookup or generation failed |
//! | 11 | the PNG could not be written |
//! | 12 | a `layout` flag was out of range |
//! | 13 | JSON output could not be produced |

use std::fmt;

use webgl_kit_core::KitError;

#[derive(Debug)]
pub enum CliError {
    Surface(KitError),
    Io(String),
    /// Rejected `layout` flag, with the flag name in the message.
    Input(String),
    Serialization(String),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Surface(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Surface(e) => write!(f, "{e}"),
            CliError::Io(msg) | CliError::Input(msg) | CliError::Serialization(msg) => {
                write!(f, "{msg}")
            }
        }
    }
}

/// `KitError::Io` comes from `write_png` and gets the I/O exit code; every
/// other core error is a surface problem.
impl From<KitError> for CliError {
    fn from(e: KitError) -> Self {
        match e {
            KitError::Io(msg) => CliError::Io(msg),
            other => CliError::Surface(other),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_variant_has_a_distinct_code_above_clap_range() {
        let codes = [
            CliError::Surface(KitError::InvalidDimensions).exit_code(),
            CliError::Io(String::new()).exit_code(),
            CliError::Input(String::new()).exit_code(),
            CliError::Serialization(String::new()).exit_code(),
        ];
        assert_eq!(codes, [10, 11, 12, 13]);
    }

    #[test]
    fn unknown_surface_keeps_requested_name() {
        let err = CliError::from(KitError::UnknownSurface("plaid".into()));
        assert!(matches!(err, CliError::Surface(_)));
        assert_eq!(err.to_string(), "unknown surface: plaid");
    }

    #[test]
    fn png_write_failure_maps_to_io() {
        let err = CliError::from(KitError::Io("permission denied".into()));
        assert!(matches!(err, CliError::Io(ref m) if m == "permission denied"));
        assert_eq!(err.exit_code(), 11);
    }

    #[test]
    fn bad_color_is_a_surface_error() {
        let err = CliError::from(KitError::InvalidColor("#zz".into()));
        assert_eq!(err.exit_code(), 10);
    }

    #[test]
    fn input_message_is_shown_verbatim() {
        let err = CliError::Input("--width must be a finite non-negative number, got -1".into());
        assert_eq!(
            err.to_string(),
            "--width must be a finite non-negative number, got -1"
        );
    }

    #[test]
    fn json_failure_maps_to_serialization() {
        let json_err = serde_json::from_str::<serde_json::Value>("[1,").unwrap_err();
        let err = CliError::from(json_err);
        assert!(matches!(err, CliError::Serialization(_)));
        assert_eq!(err.exit_code(), 13);
    }
}
