use std::fmt;
use thiserror::Error as ThisError;

///
/// Error
///
/// Classified error for everything the engine itself can reject.
/// Collaborator failures never pass through here; they propagate unmodified.
///

#[derive(Debug, ThisError)]
#[error("{message}")]
pub struct Error {
    pub class: ErrorClass,
    pub message: String,
}

impl Error {
    pub fn new(class: ErrorClass, message: impl Into<String>) -> Self {
        Self {
            class,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn display_with_class(&self) -> String {
        format!("{}: {}", self.class, self.message)
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::new(ErrorClass::Config, err.to_string())
    }
}

impl From<RequestError> for Error {
    fn from(err: RequestError) -> Self {
        Self::new(ErrorClass::Request, err.to_string())
    }
}

impl From<SqlRenderError> for Error {
    fn from(err: SqlRenderError) -> Self {
        Self::new(ErrorClass::Sql, err.to_string())
    }
}

///
/// ErrorClass
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorClass {
    Config,
    Request,
    Sql,
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Config => "config",
            Self::Request => "request",
            Self::Sql => "sql",
        };

        write!(f, "{label}")
    }
}

///
/// RequestError
///
/// Caller-supplied navigation input that cannot be turned into a request.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[remain::sorted]
pub enum RequestError {
    #[error("invalid sort field name '{field}'")]
    InvalidFieldName { field: String },

    #[error("page size must be a positive integer, found {value}")]
    InvalidPageSize { value: i64 },

    #[error("unknown sort order '{token}', expected 'asc' or 'desc'")]
    InvalidSortOrder { token: String },
}

///
/// ConfigError
///

#[derive(Debug, ThisError)]
#[remain::sorted]
pub enum ConfigError {
    #[error("page_size {default} exceeds page_size_cap {max}")]
    DefaultExceedsMax { default: u32, max: u32 },

    #[error("request parameter name '{name}' is used more than once")]
    DuplicateParamName { name: String },

    #[error("request parameter name for '{setting}' is empty")]
    EmptyParamName { setting: &'static str },

    #[error("invalid field name '{field}' for setting '{setting}'")]
    InvalidFieldName { setting: &'static str, field: String },

    #[error("config parse failed: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("setting '{setting}' must be a positive integer")]
    ZeroPageSize { setting: &'static str },
}

///
/// SqlRenderError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum SqlRenderError {
    #[error("invalid SQL identifier '{name}'")]
    InvalidIdentifier { name: String },

    #[error("keyset anchor has no value for '{field}'; keyset columns must be NOT NULL")]
    NullAnchor { field: String },
}

///
/// TESTS
///
