use clap::{ArgAction, Parser, Subcommand};
use dnsfilter_domain::CliOverrides;
use tracing::debug;

mod bootstrap;
mod commands;
mod di;
mod session;
mod view;

#[derive(Parser)]
#[command(name = "dns-settings")]
#[command(version)]
#[command(about = "View and edit the fallback DNS servers of the DNS filter")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS filter configuration store (dnsfilter.conf)
    #[arg(long, value_name = "FILE")]
    store: Option<String>,

    /// Directory holding the default dnsfilter.conf
    #[arg(long, value_name = "DIR")]
    defaults_dir: Option<String>,

    /// File keeping unsaved edits between invocations
    #[arg(long, value_name = "FILE")]
    state: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the editor mode, the manual flag and the servers
    Show,
    /// Switch to raw text editing and print the text
    Raw,
    /// Leave raw editing by parsing text from FILE ("-" for stdin) or the pending raw text
    List {
        #[arg(short, long, value_name = "FILE")]
        input: Option<String>,
    },
    /// Use the listed servers instead of automatically detected ones
    Manual {
        #[arg(action = ArgAction::Set)]
        enabled: bool,
    },
    /// Replace the servers with the factory defaults
    Reset,
    /// Save the servers to the configuration store
    Apply {
        #[arg(short, long, value_name = "FILE")]
        input: Option<String>,
    },
    /// Drop unsaved edits
    Discard,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        config_file: cli.store.clone(),
        defaults_dir: cli.defaults_dir.clone(),
        state_file: cli.state.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    debug!(
        store = %config.store.config_file,
        state = %config.store.state_file,
        "Starting DNS settings editor v{}",
        env!("CARGO_PKG_VERSION")
    );

    let repos = di::Repositories::new(&config);

    session::run(cli.command, &repos, &config.editor).await
}
