use std::{fmt::Display, str::FromStr};

use super::error::ScriptConfigError;

const ON_ERROR: &str = "on_error";

/// Options controlling how a [`crate::ScriptRunner`] executes the statements of a script.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScriptOptions {
    pub(crate) on_error: OnError,
    pub(crate) deny_empty: bool,
}

impl ScriptOptions {
    #[must_use]
    pub fn builder() -> ScriptOptionsBuilder {
        ScriptOptionsBuilder::default()
    }

    #[must_use]
    pub fn on_error(&self) -> OnError {
        self.on_error
    }

    #[must_use]
    pub fn deny_empty(&self) -> bool {
        self.deny_empty
    }
}

/// Builder for [`ScriptOptions`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptOptionsBuilder {
    on_error: OnError,
    deny_empty: bool,
}

impl ScriptOptionsBuilder {
    /// Consumes this builder and returns an instance of [`ScriptOptions`].
    #[must_use]
    pub fn build(self) -> ScriptOptions {
        ScriptOptions {
            on_error: self.on_error,
            deny_empty: self.deny_empty,
        }
    }

    #[must_use = "call build() to get script options"]
    pub fn on_error(mut self, on_error: OnError) -> Self {
        self.on_error = on_error;
        self
    }

    /// Makes scripts without any statement an error instead of a no-op.
    #[must_use = "call build() to get script options"]
    pub fn deny_empty(mut self, deny_empty: bool) -> Self {
        self.deny_empty = deny_empty;
        self
    }
}

/// What to do when a statement of a script fails to execute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OnError {
    /// Stop at the first failing statement and return its error.
    ///
    /// This is the default, as later statements of a migration usually depend on earlier ones.
    #[default]
    Abort,

    /// Execute every statement and collect the failures in the
    /// [`ScriptReport`](crate::ScriptReport).
    Continue,
}

impl OnError {
    const ABORT: &str = "abort";
    const CONTINUE: &str = "continue";
}

impl FromStr for OnError {
    type Err = ScriptConfigError;

    fn from_str(s: &str) -> Result<Self, ScriptConfigError> {
        Ok(match &*s.to_ascii_lowercase() {
            Self::ABORT => OnError::Abort,
            Self::CONTINUE => OnError::Continue,
            _ => Err(ScriptConfigError::InvalidParameter(ON_ERROR, s.to_owned()))?,
        })
    }
}

impl AsRef<str> for OnError {
    fn as_ref(&self) -> &str {
        match self {
            OnError::Abort => Self::ABORT,
            OnError::Continue => Self::CONTINUE,
        }
    }
}

impl Display for OnError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::{OnError, ScriptOptions};

    #[test]
    fn test_default_options() {
        let options = ScriptOptions::default();
        assert_eq!(options.on_error(), OnError::Abort);
        assert!(!options.deny_empty());
        assert_eq!(ScriptOptions::builder().build(), options);
    }

    #[test]
    fn test_builder() {
        let options = ScriptOptions::builder()
            .on_error(OnError::Continue)
            .deny_empty(true)
            .build();

        assert_eq!(options.on_error(), OnError::Continue);
        assert!(options.deny_empty());
    }

    #[test]
    fn test_on_error_parsing() {
        assert_eq!("abort".parse::<OnError>().unwrap(), OnError::Abort);
        assert_eq!("CONTINUE".parse::<OnError>().unwrap(), OnError::Continue);
        assert_eq!(OnError::Continue.to_string(), "continue");

        let err = "retry".parse::<OnError>().unwrap_err();
        assert_eq!(err.to_string(), "invalid value for on_error: retry");
    }
}
