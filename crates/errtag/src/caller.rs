//! Caller identity captured at the call site.

use std::fmt;

/// Name of the marker fn the `caller!` macro declares inside the calling function.
const MARKER: &str = "__errtag_marker";

const CLOSURE: &str = "{{closure}}";

/// The package and function that invoked the decorator.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CallerIdentity {
    package: String,
    function: String,
}

impl CallerIdentity {
    /// Create an identity from an already split package and function name.
    pub fn new(package: impl Into<String>, function: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            function: function.into(),
        }
    }

    /// Get the package (innermost module) of the caller
    pub fn package(&self) -> &str {
        &self.package
    }

    /// Get the function name of the caller
    pub fn function(&self) -> &str {
        &self.function
    }

    /// Parse a qualified name.
    ///
    /// Accepts Rust paths (`app::handlers::open_file`, where the package is the
    /// module that owns the function) and dot-delimited names
    /// (`handlers.OpenFile`, `github.com/acme/handlers.OpenFile`). Closure
    /// segments are skipped. Returns `None` when either part would be empty.
    pub fn parse(qualified: &str) -> Option<Self> {
        let qualified = qualified.trim();
        if qualified.contains("::") {
            let mut segments = qualified
                .rsplit("::")
                .filter(|s| *s != CLOSURE && *s != MARKER);
            let function = segments.next()?;
            let package = segments.next()?;
            return Self::checked(package, function);
        }

        let name = qualified.rsplit('/').next().unwrap_or(qualified);
        let (package, function) = name.split_once('.')?;
        let function = function.rsplit('.').next().unwrap_or(function);
        Self::checked(package, function)
    }

    /// Build the identity from `module_path!()` and the type name of a marker
    /// fn declared inside the calling function.
    #[doc(hidden)]
    pub fn from_marker(module_path: &str, marker_type_name: &str) -> Option<Self> {
        let package = module_path.rsplit("::").next()?;
        let function = marker_type_name
            .rsplit("::")
            .find(|s| *s != CLOSURE && *s != MARKER)?;
        Self::checked(package, function)
    }

    fn checked(package: &str, function: &str) -> Option<Self> {
        // Trait impls render as `<T as Trait>::method`; keep only the method.
        let function = function.trim_matches(|c| c == '<' || c == '>');
        if package.is_empty() || function.is_empty() {
            return None;
        }
        Some(Self::new(package, function))
    }
}

impl fmt::Display for CallerIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.package, self.function)
    }
}

/// Type name of any value, used by `caller!` on its marker fn.
#[doc(hidden)]
pub fn type_name_of<T>(_: T) -> &'static str {
    std::any::type_name::<T>()
}

/// Capture the identity of the enclosing function as `Option<CallerIdentity>`.
///
/// ```rust
/// mod handlers {
///     pub fn open_file() -> Option<errtag::CallerIdentity> {
///         errtag::caller!()
///     }
/// }
///
/// let caller = handlers::open_file().unwrap();
/// assert_eq!(caller.package(), "handlers");
/// assert_eq!(caller.function(), "open_file");
/// ```
#[macro_export]
macro_rules! caller {
    () => {{
        fn __errtag_marker() {}
        $crate::CallerIdentity::from_marker(
            ::core::module_path!(),
            $crate::__private::type_name_of(__errtag_marker),
        )
    }};
}
