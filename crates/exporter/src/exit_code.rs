//! Process exit codes.
//!
//! Invariants:
//! - Configuration problems found before serving exit with 2.
//! - A listener that cannot bind exits with 3.

use openstack_exporter::ExporterError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Unhandled or generic failure.
    GeneralError = 1,
    /// Invalid flags, `.env` file or tracing setup.
    ConfigError = 2,
    /// The listen address could not be bound.
    BindError = 3,
}

impl ExitCode {
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ExporterError> for ExitCode {
    fn from(err: &ExporterError) -> Self {
        match err {
            ExporterError::InvalidTelemetryPath(_) => ExitCode::ConfigError,
            ExporterError::Bind { .. } => ExitCode::BindError,
            ExporterError::Serve(_) => ExitCode::GeneralError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        self.chain()
            .find_map(|cause| cause.downcast_ref::<ExporterError>())
            .map(ExitCode::from)
            .unwrap_or(ExitCode::GeneralError)
    }
}
