//! Type conversions for DispatchError

use super::types::DispatchError;

impl From<csv::Error> for DispatchError {
    fn from(err: csv::Error) -> Self {
        match err.position() {
            Some(pos) => DispatchError::Parsing(format!("line {}: {}", pos.line(), err)),
            None => DispatchError::Parsing(err.to_string()),
        }
    }
}

impl From<url::ParseError> for DispatchError {
    fn from(err: url::ParseError) -> Self {
        DispatchError::Config(format!("Invalid URL: {}", err))
    }
}
