use crate::output_utils;
use std::process::ExitCode;

#[derive(Debug)]
pub(crate) struct CommandResult {
    pub exit_code: ExitCode,
    pub stderr: Option<String>,
    pub stdout: Option<String>,
}

impl CommandResult {
    pub fn stderr(fmt_args: std::fmt::Arguments<'_>) -> Self {
        Self {
            exit_code: ExitCode::FAILURE,
            stderr: Some(format!("{fmt_args}")),
            stdout: None,
        }
    }

    pub fn stdout(fmt_args: std::fmt::Arguments<'_>) -> Self {
        Self {
            exit_code: ExitCode::SUCCESS,
            stderr: None,
            stdout: Some(format!("{fmt_args}")),
        }
    }

    /// Succeeds without printing anything.
    pub fn empty() -> Self {
        Self {
            exit_code: ExitCode::SUCCESS,
            stderr: None,
            stdout: None,
        }
    }

    /// Keeps the output but reports failure, e.g. when lint output lists
    /// errors.
    pub fn failed(mut self) -> Self {
        self.exit_code = ExitCode::FAILURE;
        self
    }

    pub fn from_error(err: &anyhow::Error) -> Self {
        Self::stderr(format_args!("{} {err:#}", output_utils::RED_X))
    }
}
