//! Command-line argument parsing for the `cr` binary.

use clap::Parser;

/// Command-line arguments for the contact register query front end.
///
/// Without `--query` the user picks a field from a menu and types a
/// pattern for it.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use contact_register_cli::cli_args::Args;
///
/// let args = Args::parse_from(["cr", "--query", "name=Bob"]);
/// assert_eq!(args.query.as_deref(), Some("name=Bob"));
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Directory holding the register's data.
    ///
    /// If not provided, defaults to `~/.contact-register`.
    #[arg(long, short = 'd')]
    pub data_dir: Option<String>,

    /// Query in the format `field=pattern[,field=pattern...]`.
    #[arg(long, short = 'q', conflicts_with = "last")]
    pub query: Option<String>,

    /// Show the last saved query instead of building a new one.
    #[arg(long, short = 'l', action)]
    pub last: bool,

    /// Show the parsed query without saving it as the last query.
    #[arg(long, short = 'n', action)]
    pub dry_run: bool,
}
