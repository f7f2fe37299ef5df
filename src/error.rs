use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while loading or validating game tuning.
///
/// The simulation step itself never fails; everything fallible happens
/// before a session is constructed.
#[derive(Debug, Error)]
pub enum Error {
    /// A tuning value is out of range (non-positive size, paddle wider than the field, ...).
    #[error("invalid tuning: {0}")]
    InvalidTuning(String),

    /// Tuning JSON could not be parsed.
    #[error("tuning parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Tuning file could not be read.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_is_informative() {
        let e = Error::InvalidTuning("paddle.width must be > 0".to_string());
        let msg = format!("{e}");
        assert!(msg.contains("invalid tuning"));
        assert!(msg.contains("paddle.width"));
    }

    #[test]
    fn parse_error_converts() {
        let err: Error = serde_json::from_str::<u32>("not json").unwrap_err().into();
        assert!(matches!(err, Error::Parse(_)));
    }
}
