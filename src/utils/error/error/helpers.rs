//! Helper functions for creating specific error types

use super::types::DispatchError;

/// Helper functions for creating specific errors
impl DispatchError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn fetch<S: Into<String>>(message: S) -> Self {
        Self::Fetch(message.into())
    }

    pub fn parsing<S: Into<String>>(message: S) -> Self {
        Self::Parsing(message.into())
    }

    pub fn send<S: Into<String>>(message: S) -> Self {
        Self::Send(message.into())
    }

    pub fn state<S: Into<String>>(message: S) -> Self {
        Self::State(message.into())
    }

    /// Whether this error should abort the whole run
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::Send(_))
    }
}
