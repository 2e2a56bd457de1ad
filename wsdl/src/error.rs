use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Error parsing XML input at position {position}")]
    XmlParseError {
        position: u64,
        #[source]
        source: quick_xml::Error,
    },

    #[error("Input ended inside <{0}>")]
    UnexpectedEof(String),

    #[error("Element nesting inside <{element}> exceeds the limit of {limit}")]
    DepthLimitExceeded { element: String, limit: usize },

    #[error("Expected <definitions> as root element, found <{0}>")]
    UnexpectedRootElement(String),

    #[error("Missing required attribute `{attribute}` on <{element}>")]
    MissingRequiredAttribute {
        element: &'static str,
        attribute: &'static str,
    },

    #[error("Unable to parse provided URL")]
    UrlParseError(#[from] url::ParseError),

    #[error("Unable to convert provided path")]
    PathConversionError(Option<std::io::Error>),

    #[error("Unable to open file")]
    FileOpenError(#[source] std::io::Error),

    #[error("Unable to get file from server")]
    ReqwestError(#[from] reqwest::Error),

    #[error("Unsupported URL scheme {0}")]
    UnsupportedScheme(String),
}

/// Coarse classification of [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed or truncated XML.
    Syntax,
    MissingRequiredAttribute,
    UnexpectedRoot,
    /// The document could not be located or read.
    Location,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::XmlParseError { .. }
            | Error::UnexpectedEof(_)
            | Error::DepthLimitExceeded { .. } => ErrorKind::Syntax,
            Error::MissingRequiredAttribute { .. } => ErrorKind::MissingRequiredAttribute,
            Error::UnexpectedRootElement(_) => ErrorKind::UnexpectedRoot,
            Error::UrlParseError(_)
            | Error::PathConversionError(_)
            | Error::FileOpenError(_)
            | Error::ReqwestError(_)
            | Error::UnsupportedScheme(_) => ErrorKind::Location,
        }
    }
}
