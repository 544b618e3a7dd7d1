use clap::Parser;

use errtag_cli::{ErrtagOptions, TagOptions, run_main};

#[derive(Parser, Debug)]
#[command(
    name = "errtag",
    about = "errtag: show the caller tag built for qualified function names",
    version
)]
pub struct Cli {
    /// Qualified names, e.g. `app::handlers::open_file` or `handlers.OpenFile`
    #[arg(value_name = "QUALIFIED", required = true, num_args = 1..)]
    names: Vec<String>,

    #[command(flatten)]
    tag: TagOptions,
}

pub fn run(args: Cli) -> anyhow::Result<()> {
    // Initialize tracing subscriber for logging
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    let opts = ErrtagOptions {
        names: args.names,
        tag: args.tag,
    };

    let stdout = std::io::stdout();
    let unparsed = run_main(&opts, &mut stdout.lock())?;
    if unparsed > 0 {
        eprintln!("{unparsed} name(s) could not be parsed");
    }
    Ok(())
}

pub fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    run(args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_parse_tag_flags() {
        let cli = Cli::try_parse_from([
            "errtag",
            "--max-package-len",
            "5",
            "--max-function-len",
            "2",
            "--no-package",
            "--include-function",
            "app::handlers::f",
        ])
        .unwrap();

        assert_eq!(cli.names, vec!["app::handlers::f".to_string()]);
        let config = cli.tag.to_config();
        assert_eq!(config.max_package_len, 5);
        assert_eq!(config.max_function_len, 2);
        assert!(!config.include_package);
        assert!(config.include_function);
    }

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from(["errtag", "main.Run", "app::db::query"]).unwrap();
        assert_eq!(cli.names.len(), 2);
        assert_eq!(cli.tag.to_config(), errtag::TagConfig::DEFAULT);
    }

    #[test]
    fn test_names_required() {
        let err = Cli::try_parse_from(["errtag"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);

        let err = Cli::try_parse_from(["errtag", "--include-function"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_invalid_length() {
        let err = Cli::try_parse_from(["errtag", "--max-package-len", "x", "main.Run"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }
}
