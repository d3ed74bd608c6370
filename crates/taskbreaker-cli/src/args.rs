use std::path::PathBuf;

use clap::{Parser, Subcommand};
use taskbreaker_core::params::DEFAULT_USER;

use crate::cli::{PrefsCommands, TaskCommands};

/// Break a task into a handful of scheduled subtasks
///
/// Plans come from a remote completion model when an API key is configured
/// and from a built-in template otherwise. Stored plans can be listed,
/// inspected and ticked off subtask by subtask, locally or through the MCP
/// server.
#[derive(Parser)]
#[command(version, about, name = "tb")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/taskbreaker/taskbreaker.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Path to a JSON config file. Defaults to
    /// $XDG_CONFIG_HOME/taskbreaker/config.json when present
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// User whose tasks and preferences are used
    #[arg(long, global = true, env = "TASKBREAKER_USER", default_value = DEFAULT_USER)]
    pub user: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
///
/// - `task`: generate, list, inspect, update and delete task plans
/// - `prefs`: show or change scheduling preferences
/// - `serve`: start the MCP server for AI assistant integration
#[derive(Subcommand)]
pub enum Commands {
    /// Manage task plans
    #[command(alias = "t")]
    Task {
        #[command(subcommand)]
        command: TaskCommands,
    },
    /// Manage scheduling preferences
    #[command(alias = "p")]
    Prefs {
        #[command(subcommand)]
        command: PrefsCommands,
    },
    /// Start the MCP server
    Serve,
}
