use std::fmt;
use crate::core::types::DocId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidId,
    InvalidWord,
    InvalidQueryWord,
    UnknownDocument,
    InvalidArgument,
    Internal,
}

#[derive(Debug)]
pub struct Error {
    pub kind: ErrorKind,
    pub context: String,
}

impl Error {
    pub fn new(kind: ErrorKind, context: String) -> Self {
        Error { kind, context }
    }

    pub fn invalid_id(id: DocId) -> Self {
        Error::new(ErrorKind::InvalidId, format!("document id {} is negative or already in use", id))
    }

    pub fn invalid_word(word: &str) -> Self {
        Error::new(ErrorKind::InvalidWord, format!("word {:?} contains a control character", word))
    }

    pub fn invalid_query_word(word: &str) -> Self {
        Error::new(ErrorKind::InvalidQueryWord, format!("query word {:?} is malformed", word))
    }

    pub fn unknown_document(id: DocId) -> Self {
        Error::new(ErrorKind::UnknownDocument, format!("document id {} is not indexed", id))
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.context)
    }
}

impl std::error::Error for Error {}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error {
            kind: ErrorKind::InvalidArgument,
            context: format!("config error: {}", err),
        }
    }
}

impl From<rayon::ThreadPoolBuildError> for Error {
    fn from(err: rayon::ThreadPoolBuildError) -> Self {
        Error {
            kind: ErrorKind::Internal,
            context: format!("worker pool error: {}", err),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_kind_and_context() {
        let err = Error::invalid_query_word("--cat");
        assert_eq!(err.kind(), ErrorKind::InvalidQueryWord);
        let text = err.to_string();
        assert!(text.starts_with("InvalidQueryWord"));
        assert!(text.contains("--cat"));
    }

    #[test]
    fn config_parse_errors_are_invalid_argument() {
        let err: Error = serde_json::from_str::<u32>("not json").unwrap_err().into();
        assert_eq!(err.kind, ErrorKind::InvalidArgument);
    }
}
