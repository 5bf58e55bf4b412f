use std::process::ExitCode;

/// Exit status for the validator.
///
/// - `Success` (0): scan completed, no blocking findings
/// - `Error` (1): usage or I/O failure (content root or localization source
///   missing); nothing was scanned
/// - `Findings` (2): blocking findings (missing `potential`) present; other
///   finding categories are informational and do not affect the status
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Error,
    Findings,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(1),
            ExitStatus::Findings => ExitCode::from(2),
        }
    }
}
