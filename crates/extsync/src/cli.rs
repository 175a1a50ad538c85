//! CLI argument parsing with clap

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};

/// extsync - keep editor extensions aligned across VS Code forks
#[derive(Parser, Debug)]
#[command(name = "extsync")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to a config file (defaults to ~/.extsync/config.yaml)
    #[arg(short, long, global = true)]
    pub config: Option<Utf8PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Plan the actions that bring a target in line with a desired snapshot
    Plan(PlanArgs),

    /// Pick the newest release compatible with an engine version
    Resolve(ResolveArgs),

    /// Show configured markets and how to serve them
    Markets(MarketsArgs),
}

#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Installed snapshot (JSON or YAML list of {id, version, disabled})
    #[arg(long)]
    pub installed: Utf8PathBuf,

    /// Desired snapshot (JSON or YAML list of {extensionId, version, artifactRef, sourceDisabled})
    #[arg(long)]
    pub desired: Utf8PathBuf,

    /// Install extensions missing from the target
    #[arg(long)]
    pub install_missing: bool,

    /// Uninstall extensions absent from the desired snapshot
    #[arg(long)]
    pub sync_removals: bool,

    /// Mirror the source's enabled/disabled state
    #[arg(long)]
    pub sync_disabled: bool,

    /// Turn on every sync policy
    #[arg(short, long)]
    pub force: bool,

    /// Fail on the first malformed version instead of skipping that extension
    #[arg(long)]
    pub strict: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Marketplace gallery metadata (JSON)
    #[arg(long, conflicts_with = "candidates", required_unless_present = "candidates")]
    pub gallery: Option<Utf8PathBuf>,

    /// Candidate list (JSON or YAML list of {version, engineRange, artifactRef})
    #[arg(long)]
    pub candidates: Option<Utf8PathBuf>,

    /// Extension id used in messages
    #[arg(long)]
    pub id: Option<String>,

    /// Resolve against this engine version instead of configured markets
    #[arg(long, conflicts_with = "market")]
    pub engine: Option<String>,

    /// Market(s) to resolve for; repeatable, defaults to all
    #[arg(short, long)]
    pub market: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct MarketsArgs {
    /// Market(s) to show; repeatable, defaults to all
    #[arg(short, long)]
    pub market: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_plan_flags() {
        let cli = Cli::try_parse_from([
            "extsync",
            "-v",
            "plan",
            "--installed",
            "installed.json",
            "--desired",
            "desired.yaml",
            "--force",
            "--json",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 1);
        match cli.command {
            Commands::Plan(args) => {
                assert!(args.force);
                assert!(args.json);
                assert!(!args.strict);
                assert_eq!(args.desired.as_str(), "desired.yaml");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_resolve_needs_a_source() {
        assert!(Cli::try_parse_from(["extsync", "resolve", "--engine", "1.99.3"]).is_err());
        assert!(Cli::try_parse_from([
            "extsync",
            "resolve",
            "--gallery",
            "g.json",
            "--candidates",
            "c.json"
        ])
        .is_err());
    }

    #[test]
    fn test_resolve_engine_conflicts_with_market() {
        assert!(Cli::try_parse_from([
            "extsync",
            "resolve",
            "--gallery",
            "g.json",
            "--engine",
            "1.99.3",
            "--market",
            "cursor"
        ])
        .is_err());
    }
}
