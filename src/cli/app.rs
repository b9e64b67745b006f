//! Main CLI application structure

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::output::{Output, OutputFormat};
use super::{init_cmd, person_cmd, report_cmd, validate_cmd};
use crate::storage::{Config, PersonStore};

#[derive(Parser)]
#[command(name = "ahnen")]
#[command(author, version, about = "Ahnentafel reports from a local family-tree file")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Tree file to read (falls back to config, then ./people.jsonl)
    #[arg(long, global = true, env = "AHNEN_TREE")]
    pub tree: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a starter tree file
    Init {
        /// Directory for the new tree file (defaults to current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Print the ahnentafel report for a person
    Report {
        /// Person key or name
        person: String,

        /// Ancestor generations to include (0 = just the person)
        #[arg(long, short = 'g')]
        generations: Option<u32>,
    },

    /// Show one person's record
    Show {
        /// Person key or name
        person: String,
    },

    /// List all records in the tree
    List,

    /// Check the tree for dangling parent links and cycles
    Validate,
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(cli.format, cli.verbose);
    let config = Config::load()?;

    let tree_path = cli
        .tree
        .or_else(|| config.default_tree.clone())
        .unwrap_or_else(|| PathBuf::from("people.jsonl"));
    output.verbose(&format!("Using tree file: {}", tree_path.display()));

    match cli.command {
        Commands::Init { path } => {
            output.verbose_ctx("init", &format!("Scaffolding tree in: {}", path.display()));
            init_cmd::run(&output, &path)?;
        }

        Commands::Report {
            person,
            generations,
        } => {
            let generations = generations.or(config.max_generations);
            output.verbose_ctx(
                "report",
                &format!("Person: '{}', generations: {:?}", person, generations),
            );
            report_cmd::run(&output, &PersonStore::new(tree_path), &person, generations)?;
        }

        Commands::Show { person } => {
            person_cmd::show(&output, &PersonStore::new(tree_path), &person)?;
        }

        Commands::List => {
            person_cmd::list(&output, &PersonStore::new(tree_path))?;
        }

        Commands::Validate => {
            validate_cmd::run(&output, &PersonStore::new(tree_path))?;
        }
    }

    Ok(())
}
