use thiserror::Error;

/// Error type for the whole crate.
///
/// Two kinds only, mirroring how failures actually arise:
///
/// - [`SimError::Configuration`]: an unknown country/granularity/commodity
///   token, or timezone rule data that cannot resolve a unique UTC offset.
///   Always fatal to the call; the inputs are static so retrying changes
///   nothing.
/// - [`SimError::Validation`]: malformed user input (date strings, counts)
///   caught by the CLI layer before the core runs.
#[derive(Debug, Clone, Error)]
pub enum SimError {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("validation error: {0}")]
    Validation(String),
}

impl SimError {
    pub fn configuration(message: impl Into<String>) -> Self {
        SimError::Configuration(message.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        SimError::Validation(message.into())
    }

    /// Process exit code for the binary: bad user input is 2, bad or
    /// unresolvable configuration is 3.
    pub fn exit_code(&self) -> u8 {
        match self {
            SimError::Validation(_) => 2,
            SimError::Configuration(_) => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_distinguish_error_kinds() {
        assert_eq!(SimError::validation("bad date").exit_code(), 2);
        assert_eq!(SimError::configuration("bad zone").exit_code(), 3);
    }

    #[test]
    fn display_includes_kind_and_message() {
        let err = SimError::configuration("unsupported country code \"US\"");
        assert_eq!(
            err.to_string(),
            "configuration error: unsupported country code \"US\""
        );
    }
}
