//! Structured CLI errors with meaningful exit codes.
//!
//! Exit code scheme:
//! - 0:  success
//! - 2:  clap arg parse error (automatic, before our code runs)
//! - 10: draw error (random source exhausted, malformed combination)
//! - 11: I/O error (saving or replaying a draw)
//! - 12: input error (set count out of range, bad stagger, malformed seed file,
//!   reveal delay the terminal cannot wait for)
//! - 13: serialization error

use lotto_draw_core::DrawError;
use std::fmt;

/// Errors produced by CLI operations, each mapped to a distinct exit code.
#[derive(Debug)]
pub enum CliError {
    /// A failure inside the draw engine itself.
    Draw(DrawError),
    /// Reading or writing a seed file failed.
    Io(String),
    /// The user asked for something the engine does not support.
    Input(String),
    /// JSON output could not be produced.
    Serialization(String),
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Draw(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Draw(e) => write!(f, "{e}"),
            CliError::Io(msg) | CliError::Input(msg) | CliError::Serialization(msg) => {
                write!(f, "{msg}")
            }
        }
    }
}

impl From<DrawError> for CliError {
    fn from(e: DrawError) -> Self {
        match e {
            DrawError::Io(msg) => CliError::Io(msg),
            e @ (DrawError::InvalidCount { .. }
            | DrawError::InvalidStagger { .. }
            | DrawError::InvalidSeedFile(_)) => CliError::Input(e.to_string()),
            other => CliError::Draw(other),
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
    fn draw_error_exit_code_is_10() {
        let err = CliError::Draw(DrawError::SourceExhausted {
            draws: 10_000,
            accepted: 1,
        });
        assert_eq!(err.exit_code(), 10);
    }

    #[test]
    fn io_error_exit_code_is_11() {
        assert_eq!(CliError::Io("disk full".into()).exit_code(), 11);
    }

    #[test]
    fn input_error_exit_code_is_12() {
        assert_eq!(CliError::Input("bad count".into()).exit_code(), 12);
    }

    #[test]
    fn serialization_error_exit_code_is_13() {
        assert_eq!(CliError::Serialization("json fail".into()).exit_code(), 13);
    }

    #[test]
    fn draw_io_routes_to_cli_io() {
        let cli_err = CliError::from(DrawError::Io("seed.json: not found".into()));
        assert_eq!(cli_err.exit_code(), 11);
        assert!(cli_err.to_string().contains("seed.json"));
    }

    #[test]
    fn invalid_count_routes_to_input() {
        let cli_err = CliError::from(DrawError::InvalidCount {
            count: 7,
            min: 1,
            max: 5,
        });
        assert_eq!(cli_err.exit_code(), 12);
        assert!(cli_err.to_string().contains('7'));
    }

    #[test]
    fn invalid_stagger_routes_to_input() {
        let cli_err = CliError::from(DrawError::InvalidStagger {
            name: "ball".into(),
            value: -2.0,
        });
        assert_eq!(cli_err.exit_code(), 12);
    }

    #[test]
    fn invalid_seed_file_routes_to_input() {
        let cli_err = CliError::from(DrawError::InvalidSeedFile("seed.json: EOF".into()));
        assert_eq!(cli_err.exit_code(), 12);
        assert!(cli_err.to_string().contains("seed.json"));
    }

    #[test]
    fn exhausted_source_stays_a_draw_error() {
        let cli_err = CliError::from(DrawError::SourceExhausted {
            draws: 10_000,
            accepted: 3,
        });
        assert_eq!(cli_err.exit_code(), 10);
    }

    #[test]
    fn serde_json_error_routes_to_serialization() {
        let bad_json = serde_json::from_str::<serde_json::Value>("{invalid");
        assert_eq!(CliError::from(bad_json.unwrap_err()).exit_code(), 13);
    }
}
