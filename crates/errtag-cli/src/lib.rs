//! errtag command-line interface.
//!
//! Prints the runtime tag the decorator would build for each qualified name,
//! which helps when picking a tag configuration.
pub mod options;

use std::io::Write;

use errtag::{CallerIdentity, Decorator};

pub use options::TagOptions;

/// Options for running errtag.
pub struct ErrtagOptions {
    pub names: Vec<String>,
    pub tag: TagOptions,
}

/// Write one `<name>\t<tag>` line per qualified name.
///
/// Names that cannot be parsed get an empty tag.
pub fn run_main<W: Write>(opts: &ErrtagOptions, out: &mut W) -> anyhow::Result<usize> {
    let decorator = Decorator::new(opts.tag.to_config());
    let mut unparsed = 0;

    for name in &opts.names {
        let tag = match CallerIdentity::parse(name) {
            Some(caller) => {
                tracing::debug!(%caller, "parsed qualified name");
                decorator.runtime_tag(&caller)
            }
            None => {
                tracing::warn!(name = name.as_str(), "cannot parse qualified name");
                unparsed += 1;
                String::new()
            }
        };
        writeln!(out, "{}\t{}", name, tag.trim_end())?;
    }

    tracing::info!(total = opts.names.len(), unparsed, "complete");
    Ok(unparsed)
}
