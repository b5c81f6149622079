use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): Command completed and every file and string was handled
/// - `Failure` (1): Command completed but some files or strings failed and were skipped or kept untranslated
/// - `Error` (2): Command failed before doing its work (configuration error, missing path, missing credential)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed without recovered failures.
    Success,
    /// Command completed with recovered failures.
    Failure,
    /// Command failed.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
