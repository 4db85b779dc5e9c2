//! `cb export` / `cb import` -- whole-document snapshots.
//!
//! Export writes the persisted blob shape as pretty JSON; import replaces
//! the entire document with a snapshot's contents.

use std::fs::File;
use std::io::{self, BufReader, BufWriter};

use anyhow::{Context, Result};

use corkboard_core::snapshot::{read_snapshot, write_snapshot};

use crate::cli::{ExportArgs, ImportArgs};
use crate::context::RuntimeContext;
use crate::output::output_json;

/// Execute the `cb export` command.
pub fn run_export(ctx: &RuntimeContext, args: &ExportArgs) -> Result<()> {
    let store = ctx.open_store()?;
    let doc = store.document();

    match &args.file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            write_snapshot(&mut writer, doc)
                .with_context(|| format!("failed to write {}", path.display()))?;
            if !ctx.quiet && !ctx.json {
                println!(
                    "Exported {} board(s), {} card(s) to {}",
                    doc.boards.len(),
                    doc.card_count(),
                    path.display()
                );
            }
        }
        None => {
            let mut stdout = io::stdout().lock();
            write_snapshot(&mut stdout, doc).context("failed to write snapshot")?;
        }
    }
    Ok(())
}

/// Execute the `cb import` command.
pub fn run_import(ctx: &RuntimeContext, args: &ImportArgs) -> Result<()> {
    let file = File::open(&args.file)
        .with_context(|| format!("failed to open {}", args.file.display()))?;
    let doc = read_snapshot(BufReader::new(file))
        .with_context(|| format!("invalid snapshot: {}", args.file.display()))?;

    let boards = doc.boards.len();
    let cards = doc.card_count();

    let mut store = ctx.open_store()?;
    store.replace_document(doc);

    if ctx.json {
        output_json(&serde_json::json!({ "boards": boards, "cards": cards }));
    } else if !ctx.quiet {
        println!(
            "Imported {} board(s), {} card(s) from {}",
            boards,
            cards,
            args.file.display()
        );
    }
    Ok(())
}
