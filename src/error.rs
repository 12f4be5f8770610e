#[derive(Debug)]
pub enum Error {
    InvalidConfiguration(String),
    Platform(anyhow::Error),
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidConfiguration(reason) => write!(f, "Invalid configuration: {}", reason),
            Error::Platform(e) => write!(f, "Platform error: {}", e),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(e: anyhow::Error) -> Self {
        Error::Platform(e)
    }
}
