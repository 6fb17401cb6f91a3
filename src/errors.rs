use shiftbook_config::ConfigError;
use shiftbook_core::CoreError;
use thiserror::Error;

/// Unified error type for the ledger, storage and configuration layers.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Persistence error: {0}")]
    StorageError(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Errors that end the shell session.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] AppError),
    #[error("Invalid input: {0}")]
    Input(String),
    #[error("Command failed: {0}")]
    Command(String),
    #[error("Terminal error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Storage(message) | CoreError::Serde(message) => {
                AppError::StorageError(message)
            }
            CoreError::Io(err) => AppError::StorageError(err.to_string()),
            CoreError::Validation(message) => AppError::InvalidInput(message),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Io(io) => AppError::StorageError(io.to_string()),
            ConfigError::UnknownKey(_) | ConfigError::InvalidValue { .. } => {
                AppError::InvalidInput(err.to_string())
            }
            ConfigError::Serde(message) => AppError::ConfigError(message),
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        CliError::from(AppError::from(err))
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        CliError::from(AppError::from(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_become_invalid_input() {
        let err = AppError::from(CoreError::Validation("hours: required".into()));
        assert_eq!(err.to_string(), "Invalid input: hours: required");
    }

    #[test]
    fn config_parse_errors_keep_their_message() {
        let err = AppError::from(ConfigError::Serde("expected value".into()));
        assert!(matches!(err, AppError::ConfigError(message) if message == "expected value"));
    }
}
