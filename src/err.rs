use std::fmt::{self, Debug, Display};

pub use crate::fallback::ParseFallbackError;
pub use crate::rules::RuleParseError;

/// Any error surfaced while loading rules or serving them.
pub type Error = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Returned from `main` so a bad rule file prints as its message, not a debug dump.
pub struct DisplayError(Error);

impl Debug for DisplayError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl<T: Into<Error>> From<T> for DisplayError {
    fn from(display: T) -> Self {
        DisplayError(display.into())
    }
}
