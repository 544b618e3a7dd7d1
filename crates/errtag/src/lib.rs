//! # errtag
//!
//! Annotate errors with a compact caller tag before propagating them.
//!
//! ## Design Philosophy
//!
//! - **Decoration is additive**: the wrapped error is kept as the source,
//!   unchanged, and can be borrowed, downcast or taken back out
//! - **Tags are short**: `handlers::open_file` becomes `[hnd] `, see
//!   [`shorten_package`] and [`shorten_function`]
//! - **Caller identity is captured at the call site** by the [`decorate!`]
//!   and [`caller!`] macros; without one the message is used untagged
//!
//! ## Usage
//!
//! ```rust
//! use errtag::{Error, ErrorKind};
//!
//! mod storage {
//!     pub fn flush() -> errtag::Result<()> {
//!         let io_err = std::io::Error::other("disk full");
//!         Err(errtag::decorate!(io_err, "flush {} pages", 3))
//!     }
//! }
//!
//! let err: Error = storage::flush().unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::Decorated);
//! assert_eq!(err.to_string(), "[str] flush 3 pages: disk full");
//! ```
//!
//! ## Principles
//!
//! - Calling with neither a cause nor a message is a programmer error and
//!   yields an [`ErrorKind::InvalidCall`] error instead of a panic
//! - Tag layout is controlled by an explicit [`TagConfig`], never globals
//! - Decorating an already decorated error extends the chain by one

mod caller;
mod config;
mod decorate;
mod error;
mod kind;
mod shorten;

pub use caller::CallerIdentity;
pub use config::TagConfig;
pub use decorate::{Decorator, ResultExt, decorate, into_cause};
pub use error::{BoxError, Chain, Error};
pub use kind::ErrorKind;
pub use shorten::{shorten_function, shorten_package};

#[doc(hidden)]
pub mod __private {
    pub use crate::caller::type_name_of;
    pub use crate::decorate::decorate_formatted;
}

/// Result type alias using the decorated Error
pub type Result<T> = std::result::Result<T, Error>;
