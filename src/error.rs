//! Errors

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Queue errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A construction parameter was out of range
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Tried to pop from a queue with no elements
    #[error("queue is empty")]
    EmptyQueue,

    /// Serde json error
    #[error("failed to deserialize config: {0}")]
    Config(#[from] serde_json::Error),
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(Error::EmptyQueue.to_string(), "queue is empty");
        let err = Error::InvalidArgument("grow factor must be greater than 1".into());
        assert_eq!(err.to_string(), "invalid argument: grow factor must be greater than 1");
    }

    #[test]
    fn from_serde_json() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Config(_)));
    }
}
