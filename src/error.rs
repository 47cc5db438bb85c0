use std::fmt;

#[derive(Debug)]
pub enum BingMapsError {
    /// Zoom level outside of the accepted (0, 20] range
    ZoomOutOfRange(f64),
    /// The launcher program could not be spawned
    Io(std::io::Error),
    /// The launcher ran but reported a failure
    Launch(String),
    /// Represents missing environment variable errors
    MissingEnvVar(String),
}

impl std::error::Error for BingMapsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BingMapsError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl fmt::Display for BingMapsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BingMapsError::ZoomOutOfRange(level) => write!(
                f,
                "Zoom level {level} is out of range, it must be greater than 0 and at most 20"
            ),
            BingMapsError::Io(e) => write!(f, "I/O error: {e}"),
            BingMapsError::Launch(e) => write!(f, "Launch error: {e}"),
            BingMapsError::MissingEnvVar(var) => write!(
                f,
                "Missing required environment variable: {var}\n\
                 Please set it in your environment or .env file"
            ),
        }
    }
}

impl From<std::io::Error> for BingMapsError {
    fn from(err: std::io::Error) -> Self {
        BingMapsError::Io(err)
    }
}

/// Helper type for Result with `BingMapsError`
pub type Result<T> = std::result::Result<T, BingMapsError>;
