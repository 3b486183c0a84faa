#![forbid(unsafe_code)]

use std::fmt;

use collab_runtime::config::ConfigError;

/// Errors surfaced to JavaScript callers of the frontend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebError {
    /// No `window` global (not running in a browser main thread).
    NoWindow,
    /// The window has no document.
    NoDocument,
    /// `mount` was called on an already mounted instance.
    AlreadyMounted,
    /// Options object rejected.
    Config(ConfigError),
    /// A DOM call threw.
    Js(String),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWindow => write!(f, "no window global"),
            Self::NoDocument => write!(f, "window has no document"),
            Self::AlreadyMounted => write!(f, "already mounted; call destroy() first"),
            Self::Config(err) => write!(f, "{err}"),
            Self::Js(msg) => write!(f, "DOM error: {msg}"),
        }
    }
}

impl std::error::Error for WebError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ConfigError> for WebError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_errors_keep_their_message() {
        let err = WebError::from(ConfigError::Parse("expected value".into()));
        assert_eq!(err.to_string(), "invalid options: expected value");
        assert!(std::error::Error::source(&err).is_some());
    }
}
