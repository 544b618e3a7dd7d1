//! Error kinds for decorated errors

use strum_macros::{Display, IntoStaticStr};

/// The kind of error produced by the decorator.
///
/// Decoration only ever distinguishes between a normal decorated error and a
/// misuse of the decorator itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, Display)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A tag-prefixed error wrapping zero or one cause
    Decorated,

    /// The decorator was called with neither a cause nor a message
    InvalidCall,
}

impl ErrorKind {
    /// Returns the error kind as a static string
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }

    /// Check if this kind signals a misuse of the decorator
    pub fn is_invalid_call(&self) -> bool {
        matches!(self, ErrorKind::InvalidCall)
    }
}
