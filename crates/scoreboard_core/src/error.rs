use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoreboardError {
    /// Malformed input, duplicate/missing ids, wrong roster size, wrong team
    #[error("{0}")]
    InvalidArgument(String),

    /// Operation not allowed in the match's current status
    #[error("{0}")]
    InvalidState(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl ScoreboardError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        ScoreboardError::InvalidArgument(msg.into())
    }

    pub fn invalid_state(msg: impl Into<String>) -> Self {
        ScoreboardError::InvalidState(msg.into())
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, ScoreboardError::InvalidArgument(_))
    }

    pub fn is_invalid_state(&self) -> bool {
        matches!(self, ScoreboardError::InvalidState(_))
    }
}

impl From<serde_json::Error> for ScoreboardError {
    fn from(err: serde_json::Error) -> Self {
        ScoreboardError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ScoreboardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_bare_message() {
        let err = ScoreboardError::invalid_argument("Player not found: Ghost");
        assert_eq!(err.to_string(), "Player not found: Ghost");
        assert!(err.is_invalid_argument());
        assert!(!err.is_invalid_state());
    }

    #[test]
    fn test_json_error_maps_to_config() {
        let err: ScoreboardError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, ScoreboardError::Config(_)));
    }
}
