use thiserror::Error;

#[derive(Error, Debug)]
pub enum WardrobeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("{0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, WardrobeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_displays_message_only() {
        let err = WardrobeError::Api("dress is not a selectable category".into());
        assert_eq!(err.to_string(), "dress is not a selectable category");
    }
}
