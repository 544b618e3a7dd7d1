//! The decorated Error type.

use crate::{CallerIdentity, ErrorKind};
use std::fmt;
use std::panic::Location;

/// A boxed cause carried by a decorated error.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// An error prefixed with a short caller tag, optionally wrapping a cause.
pub struct Error {
    kind: ErrorKind,
    tag: String,
    message: String,
    caller: Option<CallerIdentity>,
    location: Option<&'static Location<'static>>,
    source: Option<BoxError>,
}

impl Error {
    /// Create a new error with the given kind, runtime tag and message.
    pub fn new(kind: ErrorKind, tag: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            tag: tag.into(),
            message: message.into(),
            caller: None,
            location: None,
            source: None,
        }
    }

    /// Create the error returned when the decorator gets neither a cause nor a message.
    pub fn invalid_call(tag: impl Into<String>) -> Self {
        Self::new(
            ErrorKind::InvalidCall,
            tag,
            "A CALL TO `decorate` IS INVALID, `err` is None and `msg` is empty",
        )
    }

    /// Get the error kind.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Get the runtime tag, e.g. `"[hnd] "`; empty when no caller was known.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Get the error message, without the tag
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the caller that produced this error
    pub fn caller(&self) -> Option<&CallerIdentity> {
        self.caller.as_ref()
    }

    /// Get the source location of the decoration
    pub fn location(&self) -> Option<&'static Location<'static>> {
        self.location
    }

    /// Get the source error (if any).
    pub fn source_ref(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        self.source.as_ref().map(|e| e.as_ref())
    }

    /// Downcast the direct source error to a concrete type.
    pub fn downcast_source_ref<E>(&self) -> Option<&E>
    where
        E: std::error::Error + 'static,
    {
        self.source.as_ref()?.downcast_ref::<E>()
    }

    /// Take the source error out of this error, unchanged.
    pub fn into_source(self) -> Option<BoxError> {
        self.source
    }

    /// Take the source error out as a concrete type.
    ///
    /// Returns `Err(self)` when there is no source or it is of another type.
    pub fn downcast_source<E>(mut self) -> Result<E, Self>
    where
        E: std::error::Error + 'static,
    {
        match self.source.take().map(|source| source.downcast::<E>()) {
            Some(Ok(source)) => Ok(*source),
            Some(Err(source)) => {
                self.source = Some(source);
                Err(self)
            }
            None => Err(self),
        }
    }

    /// Iterate over this error and every error below it in the cause chain.
    pub fn chain(&self) -> Chain<'_> {
        Chain {
            next: Some(self as &(dyn std::error::Error + 'static)),
        }
    }

    /// Attach the caller identity
    pub fn with_caller(mut self, caller: CallerIdentity) -> Self {
        self.caller = Some(caller);
        self
    }

    /// Attach the source location of the decoration
    pub fn with_location(mut self, location: &'static Location<'static>) -> Self {
        self.location = Some(location);
        self
    }

    /// Set the source error.
    ///
    /// # Panics (debug only)
    /// Panics in debug mode if source was already set.
    pub fn set_source<E>(self, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        self.set_boxed_source(Box::new(source))
    }

    /// Set an already boxed source error.
    pub fn set_boxed_source(mut self, source: BoxError) -> Self {
        debug_assert!(self.source.is_none(), "source error already set");
        self.source = Some(source);
        self
    }
}

/// Iterator over a cause chain, see [`Error::chain`].
pub struct Chain<'a> {
    next: Option<&'a (dyn std::error::Error + 'static)>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn std::error::Error + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            let head = self.tag.trim_end();
            match &self.source {
                Some(source) if head.is_empty() => write!(f, "{}", source),
                Some(source) => write!(f, "{}: {}", head, source),
                None => write!(f, "{}", head),
            }
        } else {
            write!(f, "{}{}", self.tag, self.message)?;
            if let Some(source) = &self.source {
                write!(f, ": {}", source)?;
            }
            Ok(())
        }
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}{} ({})", self.tag, self.message, self.kind)?;

        if let Some(caller) = &self.caller {
            writeln!(f, "    Caller: {}", caller)?;
        }

        if let Some(location) = self.location {
            writeln!(f, "    Location: {}", location)?;
        }

        if let Some(source) = &self.source {
            writeln!(f)?;
            writeln!(f, "    Source: {:?}", source)?;
        }

        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}
