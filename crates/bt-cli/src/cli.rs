//! Command-line argument parsing with clap.

use clap::{Args, Parser, Subcommand, ValueEnum};

use bt_api::ProjectAction;

/// btcli - manage panel projects from the command line.
#[derive(Parser, Debug, Clone)]
#[command(name = "btcli")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the panel API.
    #[arg(long = "bt-url")]
    pub bt_url: String,

    /// API key for the panel API.
    #[arg(long = "bt-key")]
    pub bt_key: String,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Validate the panel's TLS certificate.
    ///
    /// Off by default: panels commonly sit behind self-signed certificates,
    /// so any certificate is accepted unless this flag is given.
    #[arg(long)]
    pub verify_tls: bool,

    /// Request timeout in seconds.
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum Format {
    /// Plain message output.
    #[default]
    Text,
    /// JSON output for scripting.
    Json,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Generic project lifecycle commands.
    GoProject {
        /// Lifecycle subcommand to execute.
        #[command(subcommand)]
        command: ProjectCommands,
    },

    /// Node.js project lifecycle commands.
    Node {
        /// Lifecycle subcommand to execute.
        #[command(subcommand)]
        command: ProjectCommands,
    },
}

/// Lifecycle subcommands shared by both project kinds.
#[derive(Subcommand, Debug, Clone)]
pub enum ProjectCommands {
    /// Start a project.
    Start(ProjectArgs),

    /// Stop a project.
    Stop(ProjectArgs),

    /// Restart a project.
    Restart(ProjectArgs),
}

impl ProjectCommands {
    /// The project name the command targets.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Start(args) | Self::Stop(args) | Self::Restart(args) => &args.name,
        }
    }

    /// The lifecycle action the command maps to.
    #[must_use]
    pub const fn action(&self) -> ProjectAction {
        match self {
            Self::Start(_) => ProjectAction::Start,
            Self::Stop(_) => ProjectAction::Stop,
            Self::Restart(_) => ProjectAction::Restart,
        }
    }
}

/// Arguments shared by the lifecycle subcommands.
#[derive(Args, Debug, Clone)]
pub struct ProjectArgs {
    /// The name of the project.
    #[arg(long)]
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    const BASE: [&str; 5] = ["btcli", "--bt-url", "https://panel:8888", "--bt-key", "k"];

    fn parse(rest: &[&str]) -> Cli {
        Cli::parse_from(BASE.iter().copied().chain(rest.iter().copied()))
    }

    // Test that the CLI can be constructed and help works
    #[test]
    fn cli_help_does_not_panic() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_go_project_start() {
        let cli = parse(&["go-project", "start", "--name", "demo"]);
        assert_eq!(cli.bt_url, "https://panel:8888");
        assert_eq!(cli.bt_key, "k");
        match cli.command {
            Commands::GoProject { command } => {
                assert_eq!(command.name(), "demo");
                assert_eq!(command.action(), ProjectAction::Start);
            }
            Commands::Node { .. } => panic!("expected go-project command"),
        }
    }

    #[test]
    fn parse_go_project_stop_and_restart() {
        let cli = parse(&["go-project", "stop", "--name", "demo"]);
        match cli.command {
            Commands::GoProject { command } => assert_eq!(command.action(), ProjectAction::Stop),
            Commands::Node { .. } => panic!("expected go-project command"),
        }

        let cli = parse(&["go-project", "restart", "--name", "demo"]);
        match cli.command {
            Commands::GoProject { command } => {
                assert_eq!(command.action(), ProjectAction::Restart);
            }
            Commands::Node { .. } => panic!("expected go-project command"),
        }
    }

    #[test]
    fn parse_node_start() {
        let cli = parse(&["node", "start", "--name", "web"]);
        match cli.command {
            Commands::Node { command } => {
                assert_eq!(command.name(), "web");
                assert_eq!(command.action(), ProjectAction::Start);
            }
            Commands::GoProject { .. } => panic!("expected node command"),
        }
    }

    #[test]
    fn parse_node_stop_and_restart() {
        let cli = parse(&["node", "stop", "--name", "web"]);
        match cli.command {
            Commands::Node { command } => assert_eq!(command.action(), ProjectAction::Stop),
            Commands::GoProject { .. } => panic!("expected node command"),
        }

        let cli = parse(&["node", "restart", "--name", "web"]);
        match cli.command {
            Commands::Node { command } => assert_eq!(command.action(), ProjectAction::Restart),
            Commands::GoProject { .. } => panic!("expected node command"),
        }
    }

    #[test]
    fn bt_url_and_bt_key_are_required() {
        let result = Cli::try_parse_from(["btcli", "go-project", "start", "--name", "demo"]);
        assert!(result.is_err());

        let result = Cli::try_parse_from([
            "btcli", "--bt-url", "https://panel:8888", "go-project", "start", "--name", "demo",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn name_is_required() {
        let result = Cli::try_parse_from(BASE.iter().copied().chain(["go-project", "start"]));
        assert!(result.is_err());
    }

    #[test]
    fn format_defaults_to_text() {
        let cli = parse(&["go-project", "start", "--name", "demo"]);
        assert_eq!(cli.format, Format::Text);
    }

    #[test]
    fn format_flag_selects_json() {
        let cli = parse(&["--format", "json", "go-project", "start", "--name", "demo"]);
        assert_eq!(cli.format, Format::Json);
    }

    #[test]
    fn verify_tls_defaults_off() {
        let cli = parse(&["node", "start", "--name", "web"]);
        assert!(!cli.verify_tls);

        let cli = parse(&["--verify-tls", "node", "start", "--name", "web"]);
        assert!(cli.verify_tls);
    }

    #[test]
    fn timeout_defaults_to_30_seconds() {
        let cli = parse(&["node", "start", "--name", "web"]);
        assert_eq!(cli.timeout, 30);

        let cli = parse(&["--timeout", "5", "node", "start", "--name", "web"]);
        assert_eq!(cli.timeout, 5);
    }
}
