//! `cb init` -- initialize a corkboard workspace in the current directory.

use std::env;
use std::fs;

use anyhow::{Context, Result, bail};

use corkboard_config::corkboard_dir::{DB_FILE_NAME, ensure_corkboard_dir};
use corkboard_core::document::Document;
use corkboard_core::store::DocumentStore;
use corkboard_storage::sqlite::SqliteStore;

use crate::cli::InitArgs;
use crate::context::RuntimeContext;

/// Default gitignore content for the `.corkboard` directory.
const GITIGNORE_CONTENT: &str = "# Corkboard database files\n*.db\n*.db-journal\n*.db-wal\n*.db-shm\n";

/// Execute the `cb init` command.
pub fn run(ctx: &RuntimeContext, args: &InitArgs) -> Result<()> {
    let cwd = env::current_dir().context("failed to get current directory")?;

    let dir = cwd.join(".corkboard");
    let db_path = dir.join(DB_FILE_NAME);

    // Safety guard: check for existing data unless --force
    if !args.force && db_path.exists() {
        bail!(
            "Found existing database in {}\n\n\
            This workspace is already initialized.\n\n\
            To use the existing data:\n  \
            Just run cb commands normally (e.g., cb board list)\n\n\
            Or use --force to re-initialize (data loss warning).",
            dir.display()
        );
    }

    ensure_corkboard_dir(&cwd)
        .with_context(|| format!("failed to create directory: {}", dir.display()))?;

    let gitignore_path = dir.join(".gitignore");
    if !gitignore_path.exists() {
        fs::write(&gitignore_path, GITIGNORE_CONTENT)
            .with_context(|| format!("failed to create .gitignore: {}", gitignore_path.display()))?;
    }

    // Create the database with an empty document so the first load succeeds.
    let storage = SqliteStore::open(&db_path)
        .with_context(|| format!("failed to create database: {}", db_path.display()))?;
    storage
        .save(&Document::default())
        .context("failed to write initial document")?;

    if !ctx.quiet {
        println!();
        println!("corkboard initialized successfully!");
        println!();
        println!("  Database: {}", db_path.display());
        println!();
        println!("Run `cb board create \"My first board\"` to get started.");
        println!();
    }

    Ok(())
}
