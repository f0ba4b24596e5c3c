//! Jalon CLI application
//!
//! Command-line interface for the Jalon editorial project planning board.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use jalon_core::BoardBuilder;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        store_file,
        no_color,
        command,
    } = Args::parse();

    let board = BoardBuilder::new()
        .with_store_path(store_file)
        .build()
        .await
        .context("Failed to open the project board")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Jalon started");

    match command {
        Some(Stage { command }) => {
            Cli::new(board, renderer)
                .handle_stage_command(command)
                .await
        }
        Some(Task { command }) => Cli::new(board, renderer).handle_task_command(command).await,
        Some(Reminders) => Cli::new(board, renderer).show_reminders(),
        Some(Launch(args)) => Cli::new(board, renderer).set_launch(args).await,
        Some(Reset(args)) => Cli::new(board, renderer).reset_project(args).await,
        Some(Export(args)) => Cli::new(board, renderer).export(args),
        Some(Import(args)) => Cli::new(board, renderer).import(args).await,
        None => Cli::new(board, renderer).overview(),
    }
}
