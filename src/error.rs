use std::fmt;

#[derive(Debug)]
pub enum EasyAuthError {
    /// Represents a base URL that cannot be parsed as an absolute URL
    InvalidUrl(url::ParseError),
    /// Represents a query parameter that cannot be written into a query string
    InvalidParameter(String),
    /// Represents missing environment variable errors
    MissingEnvVar(String),
}

impl std::error::Error for EasyAuthError {}

impl fmt::Display for EasyAuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EasyAuthError::InvalidUrl(e) => write!(f, "Invalid URL: {e}"),
            EasyAuthError::InvalidParameter(reason) => write!(f, "Invalid parameter: {reason}"),
            EasyAuthError::MissingEnvVar(var) => write!(
                f,
                "Missing required environment variable: {var}\n\
                 Please set it in your environment or .env file"
            ),
        }
    }
}

impl From<url::ParseError> for EasyAuthError {
    fn from(err: url::ParseError) -> Self {
        EasyAuthError::InvalidUrl(err)
    }
}

/// Helper type for Result with `EasyAuthError`
pub type Result<T> = std::result::Result<T, EasyAuthError>;
