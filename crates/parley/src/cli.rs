use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "parley")]
#[command(version)]
#[command(about = "Voice-driven command dispatcher")]
pub struct Cli {
    /// Log at debug level
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start a conversation
    Run {
        /// Read commands from the terminal instead of the microphone
        #[arg(long)]
        local: bool,
    },

    /// Manage plugins
    Plugins {
        #[command(subcommand)]
        action: Option<PluginAction>,
    },

    /// Run diagnostic checks
    Diagnostic {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write a default profile
    Init,

    /// Print version information
    Version,
}

#[derive(Subcommand)]
pub enum PluginAction {
    /// List all plugins
    List,
    /// Enable a speech handler
    Enable { name: String },
    /// Disable a speech handler
    Disable { name: String },
}
