use thiserror::Error;

#[derive(Error, Debug)]
pub enum TagscriptError {
    // Config errors
    #[error("CONFIG_PARSE_ERROR: {0}")]
    ConfigParseError(String),

    #[error("CONFIG_INVALID_VALUE: {field}: {reason}")]
    ConfigInvalidValue { field: String, reason: String },

    // IO errors
    #[error("IO_ERROR: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<toml::de::Error> for TagscriptError {
    fn from(err: toml::de::Error) -> Self {
        TagscriptError::ConfigParseError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, TagscriptError>;
