//! Tag configuration.

/// Length bounds and inclusion switches used to build a runtime tag.
///
/// `TagConfig::DEFAULT` matches the behaviour of the `decorate!` macro:
/// package identifiers of 1..=3 characters, function identifiers of 1..=4
/// characters, and only the package identifier included in the tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TagConfig {
    /// Shortening of a package name only applies above this length.
    pub min_package_len: usize,
    /// Maximum number of characters kept from a package identifier.
    pub max_package_len: usize,
    /// Shortening of a function name only applies above this length.
    pub min_function_len: usize,
    /// Maximum number of characters kept from a function identifier.
    pub max_function_len: usize,
    /// Include the shortened package identifier in the tag.
    pub include_package: bool,
    /// Include the shortened function identifier in the tag.
    pub include_function: bool,
}

impl TagConfig {
    /// Package identifier only, 1..=3 and 1..=4 character bounds.
    pub const DEFAULT: TagConfig = TagConfig {
        min_package_len: 1,
        max_package_len: 3,
        min_function_len: 1,
        max_function_len: 4,
        include_package: true,
        include_function: false,
    };

    /// Create the default configuration.
    pub fn new() -> Self {
        Self::DEFAULT
    }

    /// Include or leave out the package identifier.
    pub fn with_package(mut self, include: bool) -> Self {
        self.include_package = include;
        self
    }

    /// Include or leave out the function identifier.
    pub fn with_function(mut self, include: bool) -> Self {
        self.include_function = include;
        self
    }

    /// Set the maximum package identifier length.
    pub fn with_max_package_len(mut self, len: usize) -> Self {
        self.max_package_len = len;
        self
    }

    /// Set the maximum function identifier length.
    pub fn with_max_function_len(mut self, len: usize) -> Self {
        self.max_function_len = len;
        self
    }

    /// True when the tag built from this configuration is always empty.
    pub fn is_silent(&self) -> bool {
        !self.include_package && !self.include_function
    }
}

impl Default for TagConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
