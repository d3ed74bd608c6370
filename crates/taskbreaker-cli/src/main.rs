//! Taskbreaker CLI Application
//!
//! Command-line interface and MCP server for breaking tasks into scheduled
//! subtasks.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use mcp::{run_stdio_server, TaskbreakerMcpServer};
use renderer::TerminalRenderer;
use taskbreaker_core::{Config, PlannerBuilder};
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        config,
        no_color,
        user,
        command,
    } = Args::parse();

    let config = Config::load(config.as_ref()).context("Failed to load configuration")?;

    let planner = PlannerBuilder::new()
        .with_database_path(database_file)
        .with_generator(config.generator())
        .build()
        .await
        .context("Failed to initialize planner")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Taskbreaker started");

    match command {
        Some(Task { command }) => {
            Cli::new(planner, renderer, user)
                .handle_task_command(command)
                .await
        }
        Some(Prefs { command }) => {
            Cli::new(planner, renderer, user)
                .handle_prefs_command(command)
                .await
        }
        Some(Serve) => {
            info!("Starting taskbreaker MCP server");
            run_stdio_server(TaskbreakerMcpServer::new(planner, &user))
                .await
                .context("MCP server failed")
        }
        None => Cli::new(planner, renderer, user).list_tasks().await,
    }
}
