mod app;
mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands, PluginAction};

fn main() {
    let cli = Cli::parse();

    let level = if cli.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    // Logs go to stderr so local-mode stdout only carries the conversation
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Run { local } => commands::run::run(local),
        Commands::Diagnostic { json } => commands::diagnostic::run(json),
        Commands::Init => commands::init::run(),
        Commands::Version => commands::version::run(),
        Commands::Plugins { action } => match action {
            Some(PluginAction::List) | None => commands::plugins::run_list(),
            Some(PluginAction::Enable { name }) => commands::plugins::run_enable(&name),
            Some(PluginAction::Disable { name }) => commands::plugins::run_disable(&name),
        },
    };

    if let Err(e) = result {
        tracing::error!(error = %format!("{:#}", e), "parley failed");
        std::process::exit(1);
    }
}
