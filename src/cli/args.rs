//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};

/// Incremental Pocket bookmark retrieval for export pipelines.
#[derive(Parser, Debug)]
#[command(name = "pocketsync")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    // === Global flags ===
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, value_name = "LEVEL", global = true)]
    pub log_level: Option<String>,

    /// Emit JSON logs to stderr
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Verbose output (sets log level to debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch items updated since the cursor, print `{since, items}` JSON
    Fetch(FetchArgs),
}

/// Arguments for the `fetch` command.
#[derive(Parser, Debug)]
pub struct FetchArgs {
    /// Access token issued by the provider's authorization flow
    #[arg(
        long,
        env = "POCKETSYNC_ACCESS_TOKEN",
        value_name = "TOKEN",
        hide_env_values = true
    )]
    pub access_token: String,

    /// Cursor from the previous call; only items updated after it are fetched
    #[arg(long, value_name = "CURSOR")]
    pub since: Option<String>,

    /// Application consumer key (overrides POCKETSYNC_CONSUMER_KEY and config file)
    #[arg(long, value_name = "KEY")]
    pub consumer_key: Option<String>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_parses_with_token_only() {
        let cli = Cli::try_parse_from(["pocketsync", "fetch", "--access-token", "tok"]).unwrap();
        let Commands::Fetch(args) = cli.command;
        assert_eq!(args.access_token, "tok");
        assert!(args.since.is_none());
        assert!(args.consumer_key.is_none());
        assert!(!args.pretty);
    }

    #[test]
    fn fetch_parses_cursor_and_key() {
        let cli = Cli::try_parse_from([
            "pocketsync",
            "fetch",
            "--access-token",
            "tok",
            "--since",
            "2000",
            "--consumer-key",
            "ck",
            "--pretty",
        ])
        .unwrap();
        let Commands::Fetch(args) = cli.command;
        assert_eq!(args.since.as_deref(), Some("2000"));
        assert_eq!(args.consumer_key.as_deref(), Some("ck"));
        assert!(args.pretty);
    }

    #[test]
    fn global_flags_apply_after_subcommand() {
        let cli = Cli::try_parse_from([
            "pocketsync",
            "fetch",
            "--access-token",
            "tok",
            "--log-level",
            "debug",
            "--verbose",
        ])
        .unwrap();
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        assert!(cli.verbose);
    }
}
