//! Error decoration.

use std::panic::Location;

use crate::shorten::{shorten_function, shorten_package};
use crate::{BoxError, CallerIdentity, Error, ErrorKind, TagConfig};

/// Builds runtime tags and wraps errors with them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Decorator {
    config: TagConfig,
}

impl Decorator {
    /// Decorator used by the `decorate!` macro.
    pub const DEFAULT: Decorator = Decorator::new(TagConfig::DEFAULT);

    /// Create a decorator for the given tag configuration.
    pub const fn new(config: TagConfig) -> Self {
        Self { config }
    }

    /// Get the tag configuration
    pub fn config(&self) -> &TagConfig {
        &self.config
    }

    /// Build the runtime tag for a caller, e.g. `"[hnd] "` or `"[hnd_of] "`.
    ///
    /// Returns an empty string when both identifiers are disabled.
    pub fn runtime_tag(&self, caller: &CallerIdentity) -> String {
        let mut parts = Vec::with_capacity(2);
        if self.config.include_package {
            parts.push(shorten_package(caller.package(), &self.config));
        }
        if self.config.include_function {
            parts.push(shorten_function(caller.function(), &self.config));
        }

        if parts.is_empty() {
            return String::new();
        }
        format!("[{}] ", parts.join("_"))
    }

    /// Wrap `cause` in a new error prefixed with the caller's runtime tag.
    ///
    /// - no caller: the message is used as-is, without a tag
    /// - no cause and an empty message: an `InvalidCall` error
    /// - otherwise: `"<tag><message>"` wrapping `cause` (which may be absent)
    #[track_caller]
    pub fn decorate(
        &self,
        cause: Option<BoxError>,
        caller: Option<&CallerIdentity>,
        message: impl Into<String>,
    ) -> Error {
        let message = message.into();
        let message_given = !message.is_empty();
        self.decorate_message(cause, caller, message_given, message)
    }

    /// Like `decorate`, with the invalid-call check based on `message_given`
    /// instead of the rendered message. A format string that renders empty
    /// still counts as a message.
    #[track_caller]
    pub fn decorate_message(
        &self,
        cause: Option<BoxError>,
        caller: Option<&CallerIdentity>,
        message_given: bool,
        message: String,
    ) -> Error {
        let location = Location::caller();
        let tag = caller.map(|c| self.runtime_tag(c)).unwrap_or_default();

        if cause.is_none() && !message_given {
            tracing::trace!(%location, "decorate called without cause or message");
            let err = Error::invalid_call(tag).with_location(location);
            return match caller {
                Some(caller) => err.with_caller(caller.clone()),
                None => err,
            };
        }

        let mut err = Error::new(ErrorKind::Decorated, tag, message).with_location(location);
        match caller {
            Some(caller) => {
                tracing::trace!(tag = err.tag(), %caller, "decorating error");
                err = err.with_caller(caller.clone());
            }
            None => {
                tracing::trace!(%location, "caller unknown, decorating without tag");
            }
        }

        if let Some(cause) = cause {
            err = err.set_boxed_source(cause);
        }
        err
    }
}

/// Decorate with the default configuration.
#[track_caller]
pub fn decorate(
    cause: Option<BoxError>,
    caller: Option<&CallerIdentity>,
    message: impl Into<String>,
) -> Error {
    Decorator::DEFAULT.decorate(cause, caller, message)
}

/// Decorate with the default configuration, `message_given` deciding the invalid-call check.
#[doc(hidden)]
#[track_caller]
pub fn decorate_formatted(
    cause: Option<BoxError>,
    caller: Option<&CallerIdentity>,
    message_given: bool,
    message: String,
) -> Error {
    Decorator::DEFAULT.decorate_message(cause, caller, message_given, message)
}

/// Box a concrete error as a decoration cause.
pub fn into_cause<E>(err: E) -> BoxError
where
    E: std::error::Error + Send + Sync + 'static,
{
    Box::new(err)
}

/// Decorate `Err` values of a `Result` in place.
pub trait ResultExt<T> {
    /// Wrap the error with the runtime tag of `caller` and `message`.
    fn decorate_err(
        self,
        caller: Option<&CallerIdentity>,
        message: impl Into<String>,
    ) -> crate::Result<T>;

    /// Like `decorate_err`, building the message only on error.
    fn decorate_err_with<F, M>(
        self,
        caller: Option<&CallerIdentity>,
        message: F,
    ) -> crate::Result<T>
    where
        F: FnOnce() -> M,
        M: Into<String>;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    #[track_caller]
    fn decorate_err(
        self,
        caller: Option<&CallerIdentity>,
        message: impl Into<String>,
    ) -> crate::Result<T> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(decorate(Some(into_cause(err)), caller, message)),
        }
    }

    #[track_caller]
    fn decorate_err_with<F, M>(
        self,
        caller: Option<&CallerIdentity>,
        message: F,
    ) -> crate::Result<T>
    where
        F: FnOnce() -> M,
        M: Into<String>,
    {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(decorate(Some(into_cause(err)), caller, message())),
        }
    }
}

/// Decorate an error with the runtime tag of the enclosing function.
///
/// ```rust
/// use std::io;
///
/// mod handlers {
///     use std::io;
///
///     pub fn open_config() -> errtag::Result<()> {
///         let err = io::Error::new(io::ErrorKind::NotFound, "no such file");
///         Err(errtag::decorate!(err, "open {}", "app.toml"))
///     }
/// }
///
/// let err = handlers::open_config().unwrap_err();
/// assert_eq!(err.to_string(), "[hnd] open app.toml: no such file");
/// assert!(err.downcast_source_ref::<io::Error>().is_some());
///
/// let standalone = errtag::decorate!(None, "limit {} exceeded", 3);
/// assert!(standalone.source_ref().is_none());
/// ```
#[macro_export]
macro_rules! decorate {
    (None) => {
        $crate::decorate(::core::option::Option::None, $crate::caller!().as_ref(), "")
    };
    (None, $fmt:literal $(, $($arg:tt)*)?) => {
        $crate::__private::decorate_formatted(
            ::core::option::Option::None,
            $crate::caller!().as_ref(),
            !$fmt.is_empty(),
            ::std::format!($fmt $(, $($arg)*)?),
        )
    };
    ($err:expr) => {
        $crate::decorate(
            ::core::option::Option::Some($crate::into_cause($err)),
            $crate::caller!().as_ref(),
            "",
        )
    };
    ($err:expr, $fmt:literal $(, $($arg:tt)*)?) => {
        $crate::__private::decorate_formatted(
            ::core::option::Option::Some($crate::into_cause($err)),
            $crate::caller!().as_ref(),
            !$fmt.is_empty(),
            ::std::format!($fmt $(, $($arg)*)?),
        )
    };
}
