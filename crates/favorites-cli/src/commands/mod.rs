//! CLI command definitions and dispatch.

pub mod plan;
pub mod query;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;

use crate::output::OutputFormat;
use favorites_core::config::AppConfig;
use favorites_core::error::AppError;
use favorites_core::types::Exam;
use favorites_engine::FavoritesView;

/// Favorites: inspect a folder snapshot and plan folder mutations
#[derive(Debug, Parser)]
#[command(name = "favorites", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Snapshot JSON file as returned by the favorites API
    #[arg(short, long)]
    pub snapshot: PathBuf,

    /// Exam the snapshot belongs to
    #[arg(short, long, default_value = "SUKO")]
    pub exam: Exam,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Read-only queries over the snapshot
    #[command(flatten)]
    Query(query::QueryCommand),
    /// Validate an action and print the request it would send
    Plan(plan::PlanArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(&self, config: &AppConfig) -> Result<(), AppError> {
        let view = self.load_view(config)?;

        match &self.command {
            Commands::Query(command) => query::execute(command, &view, self.format),
            Commands::Plan(args) => plan::execute(args, &view, self.format),
        }
    }

    /// Helper: read and validate the snapshot file
    fn load_view(&self, config: &AppConfig) -> Result<FavoritesView, AppError> {
        let json = std::fs::read_to_string(&self.snapshot)?;
        let view = FavoritesView::from_json(self.exam, &json, &config.engine)?;

        info!(
            exam = %self.exam,
            path = %self.snapshot.display(),
            favorites = view.index().favorite_count(),
            "Snapshot loaded"
        );

        Ok(view)
    }
}
