use std::process::ExitCode;

/// What a subcommand wants printed, and how the process should exit.
#[derive(Debug)]
pub(crate) struct CommandResult {
    pub exit_code: ExitCode,
    pub stderr: Option<String>,
    pub stdout: Option<String>,
}

impl CommandResult {
    pub fn failure(fmt_args: std::fmt::Arguments<'_>) -> Self {
        Self {
            exit_code: ExitCode::FAILURE,
            stderr: Some(fmt_args.to_string()),
            stdout: None,
        }
    }

    pub fn success(fmt_args: std::fmt::Arguments<'_>) -> Self {
        Self {
            exit_code: ExitCode::SUCCESS,
            stderr: None,
            stdout: Some(fmt_args.to_string()),
        }
    }

    /// Keep whatever was reported on stdout, but fail with `fmt_args` on
    /// stderr. Used when only some operations could be written.
    pub fn with_partial_failure(self, fmt_args: std::fmt::Arguments<'_>) -> Self {
        Self {
            exit_code: ExitCode::FAILURE,
            stderr: Some(fmt_args.to_string()),
            ..self
        }
    }
}
