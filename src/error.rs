//! Exit code definitions.

/// Exit codes for the DupeFinder application.
///
/// - 0: Success (run completed, user-requested help/version, or user cancel)
/// - 1: General error (invalid scan root, unexpected failure)
/// - 2: Output error (invalid or unwritable output destination)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success: the run completed normally, duplicates found or not.
    Success = 0,
    /// General error: the scan could not be carried out.
    GeneralError = 1,
    /// Output error: the report destination could not be used.
    OutputError = 2,
}

impl ExitCode {
    /// Get the numeric exit code.
    #[must_use]
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Get the machine-readable code prefix.
    #[must_use]
    pub fn code_prefix(self) -> &'static str {
        match self {
            Self::Success => "DF000",
            Self::GeneralError => "DF001",
            Self::OutputError => "DF002",
        }
    }
}
