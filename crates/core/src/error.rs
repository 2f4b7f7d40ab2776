//! Core error types for the GMP client

#[derive(thiserror::Error, Debug)]
pub enum GmpError {
    /// A non-empty value did not name any known variant or alias
    #[error("Invalid argument {argument} for {function}")]
    InvalidArgument { argument: String, function: String },

    #[error("{function} requires a {argument} argument")]
    RequiredArgument { argument: String, function: String },

    /// The manager answered with a non-2xx status
    #[error("Response Error {status}. {message}")]
    Response { status: String, message: String },

    #[error("{0}")]
    Server(String),

    #[error("XML error: {0}")]
    Xml(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Gmp(String),
}

impl GmpError {
    pub fn invalid_argument(argument: impl Into<String>, function: impl Into<String>) -> Self {
        GmpError::InvalidArgument {
            argument: argument.into(),
            function: function.into(),
        }
    }

    pub fn required_argument(argument: impl Into<String>, function: impl Into<String>) -> Self {
        GmpError::RequiredArgument {
            argument: argument.into(),
            function: function.into(),
        }
    }

    /// Argument name carried by argument errors
    pub fn argument(&self) -> Option<&str> {
        match self {
            GmpError::InvalidArgument { argument, .. }
            | GmpError::RequiredArgument { argument, .. } => Some(argument),
            _ => None,
        }
    }

    /// Function name carried by argument errors
    pub fn function(&self) -> Option<&str> {
        match self {
            GmpError::InvalidArgument { function, .. }
            | GmpError::RequiredArgument { function, .. } => Some(function),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, GmpError>;
