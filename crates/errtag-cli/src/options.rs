//! Command-line options mapped onto a tag configuration.

use clap::Args;
use errtag::TagConfig;

/// Options controlling how runtime tags are built.
#[derive(Args, Debug, Clone)]
pub struct TagOptions {
    /// Leave the shortened package identifier out of the tag.
    #[arg(long = "no-package")]
    pub no_package: bool,

    /// Add the shortened function identifier to the tag.
    #[arg(long = "include-function")]
    pub include_function: bool,

    /// Maximum length of the package identifier.
    #[arg(
        long = "max-package-len",
        value_name = "N",
        default_value_t = TagConfig::DEFAULT.max_package_len
    )]
    pub max_package_len: usize,

    /// Maximum length of the function identifier.
    #[arg(
        long = "max-function-len",
        value_name = "N",
        default_value_t = TagConfig::DEFAULT.max_function_len
    )]
    pub max_function_len: usize,
}

impl Default for TagOptions {
    fn default() -> Self {
        Self {
            no_package: false,
            include_function: false,
            max_package_len: TagConfig::DEFAULT.max_package_len,
            max_function_len: TagConfig::DEFAULT.max_function_len,
        }
    }
}

impl TagOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_include_function(mut self, include: bool) -> Self {
        self.include_function = include;
        self
    }

    pub fn with_no_package(mut self, no_package: bool) -> Self {
        self.no_package = no_package;
        self
    }

    pub fn to_config(&self) -> TagConfig {
        TagConfig::new()
            .with_package(!self.no_package)
            .with_function(self.include_function)
            .with_max_package_len(self.max_package_len)
            .with_max_function_len(self.max_function_len)
    }
}
