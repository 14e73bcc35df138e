//! Command-line interface argument parsing and definitions
//!
//! This module defines the CLI structure using clap's derive API,
//! providing a type-safe and well-documented command interface.

use clap::{Parser, Subcommand, ValueEnum};
use pkgcheck_core::ResourceKind;
use pkgcheck_schemas::FieldPath;
use serde::{Deserialize, Serialize};
use std::io::IsTerminal;
use std::path::PathBuf;

/// pkgcheck - naming validation for package metadata manifests
///
/// Checks Package and PackageVersion manifests (YAML or JSON) against the
/// packaging naming rules and reports every violation found.
#[derive(Parser, Debug)]
#[command(
    name = "pkgcheck",
    version,
    author,
    about,
    long_about = None,
    propagate_version = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Enable verbose output (can be used multiple times for increased verbosity)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "PKGCHECK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format for results (defaults to the configured format)
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate Package and PackageVersion manifests
    Validate(ValidateArgs),

    /// Check whether a bare string is a fully qualified name
    CheckName(CheckNameArgs),

    /// Generate shell completions for the specified shell
    Completions(CompletionsArgs),
}

/// Arguments for the validate command
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Manifest files (YAML, possibly multi-document, or JSON)
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    /// Treat every document as this kind instead of reading its `kind` field
    #[arg(short, long, value_enum)]
    pub kind: Option<KindArg>,

    /// Stop after the first rejected document
    #[arg(long)]
    pub fail_fast: bool,

    /// Maximum number of errors to show per document (0 = unlimited)
    #[arg(long, value_name = "N")]
    pub max_errors: Option<usize>,

    /// Also print each accepted document
    #[arg(long)]
    pub detailed: bool,
}

/// Arguments for the check-name command
#[derive(Parser, Debug)]
pub struct CheckNameArgs {
    /// The candidate name
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Field path to report errors against
    #[arg(long, default_value = "metadata.name")]
    pub path: FieldPath,
}

/// Arguments for generating shell completions
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Resource kind override
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    /// Package resource
    Package,
    /// PackageVersion resource
    PackageVersion,
}

/// Output format options
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Human-readable formatted output
    #[default]
    Human,
    /// JSON output
    Json,
    /// YAML output
    Yaml,
    /// Pretty-printed JSON output
    JsonPretty,
}

/// Supported shells for completion generation
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    PowerShell,
    /// Elvish shell
    Elvish,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the effective verbosity level (considering quiet flag)
    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }

    /// Check if colored output should be used
    pub fn use_color(&self) -> bool {
        !self.no_color && std::io::stdout().is_terminal()
    }
}

impl From<KindArg> for ResourceKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Package => ResourceKind::Package,
            KindArg::PackageVersion => ResourceKind::PackageVersion,
        }
    }
}

impl Shell {
    /// Convert to clap_complete shell type
    pub fn to_clap_shell(self) -> clap_complete::Shell {
        match self {
            Shell::Bash => clap_complete::Shell::Bash,
            Shell::Zsh => clap_complete::Shell::Zsh,
            Shell::Fish => clap_complete::Shell::Fish,
            Shell::PowerShell => clap_complete::Shell::PowerShell,
            Shell::Elvish => clap_complete::Shell::Elvish,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbosity_level() {
        let cli = Cli {
            verbose: 2,
            quiet: false,
            config: None,
            output: None,
            no_color: false,
            command: Commands::CheckName(CheckNameArgs {
                name: "a.b.c".to_string(),
                path: FieldPath::new("metadata").child("name"),
            }),
        };
        assert_eq!(cli.verbosity_level(), 2);

        let quiet_cli = Cli {
            verbose: 2,
            quiet: true,
            ..cli
        };
        assert_eq!(quiet_cli.verbosity_level(), 0);
    }

    #[test]
    fn test_validate_args() {
        let cli = Cli::parse_from([
            "pkgcheck", "validate", "a.yaml", "b.json",
            "--kind", "package-version", "--fail-fast", "--max-errors", "3",
        ]);
        let Commands::Validate(args) = cli.command else {
            panic!("expected validate");
        };
        assert_eq!(args.files.len(), 2);
        assert_eq!(args.kind.map(ResourceKind::from), Some(ResourceKind::PackageVersion));
        assert!(args.fail_fast);
        assert_eq!(args.max_errors, Some(3));
    }

    #[test]
    fn test_check_name_path_parsing() {
        let cli = Cli::parse_from(["pkgcheck", "check-name", "a.b", "--path", "spec.packageName"]);
        let Commands::CheckName(args) = cli.command else {
            panic!("expected check-name");
        };
        assert_eq!(args.path, FieldPath::from_fields(["spec", "packageName"]));

        assert!(Cli::try_parse_from(["pkgcheck", "check-name", "a", "--path", "spec..x"]).is_err());
    }

    #[test]
    fn test_validate_requires_files() {
        assert!(Cli::try_parse_from(["pkgcheck", "validate"]).is_err());
    }

    #[test]
    fn test_output_format_flag() {
        let cli = Cli::parse_from(["pkgcheck", "-o", "json-pretty", "check-name", "a.b.c"]);
        assert_eq!(cli.output, Some(OutputFormat::JsonPretty));
    }
}
