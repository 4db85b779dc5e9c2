//! `cb board` -- create, rename, delete, list, and select boards.

use anyhow::{Context, Result, bail};

use corkboard_core::store::OpStatus;
use corkboard_core::validation::validated_name;

use crate::cli::{BoardCommands, BoardCreateArgs, BoardDeleteArgs, BoardRenameArgs, BoardUseArgs};
use crate::context::RuntimeContext;
use crate::output::{BoardView, format_board_row, output_json, output_table};

/// Execute a `cb board` subcommand.
pub fn run(ctx: &RuntimeContext, command: &BoardCommands) -> Result<()> {
    match command {
        BoardCommands::Create(args) => run_create(ctx, args),
        BoardCommands::Rename(args) => run_rename(ctx, args),
        BoardCommands::Delete(args) => run_delete(ctx, args),
        BoardCommands::List => run_list(ctx),
        BoardCommands::Use(args) => run_use(ctx, args),
    }
}

fn run_create(ctx: &RuntimeContext, args: &BoardCreateArgs) -> Result<()> {
    let name = validated_name("board name", &args.name)?;

    let mut store = ctx.open_store()?;
    let board = store
        .create_board(name)
        .context("board was not created")?;
    let view = BoardView::from_board(board);

    if ctx.json {
        output_json(&view);
    } else if !ctx.quiet {
        println!("Created board {}: {}", view.id, view.name);
    }
    Ok(())
}

fn run_rename(ctx: &RuntimeContext, args: &BoardRenameArgs) -> Result<()> {
    let name = validated_name("board name", &args.name)?;

    let mut store = ctx.open_store()?;
    match store.rename_board(args.id, name) {
        OpStatus::Applied => {}
        OpStatus::NotFound => bail!("board {} not found", args.id),
        OpStatus::Rejected => bail!("board name must not be empty"),
    }

    if ctx.json {
        let board = store.board(args.id).context("board disappeared")?;
        output_json(&BoardView::from_board(board));
    } else if !ctx.quiet {
        println!("Renamed board {}: {}", args.id, name);
    }
    Ok(())
}

fn run_delete(ctx: &RuntimeContext, args: &BoardDeleteArgs) -> Result<()> {
    let mut store = ctx.open_store()?;

    let Some(board) = store.board(args.id) else {
        bail!("board {} not found", args.id);
    };
    if !args.force && !board.lists.is_empty() {
        bail!(
            "board {} (\"{}\") still has {} list(s). Use --force to delete it and everything on it.",
            args.id,
            board.name,
            board.lists.len()
        );
    }
    let name = board.name.clone();

    match store.delete_board(args.id) {
        OpStatus::Applied => {}
        _ => bail!("board {} not found", args.id),
    }

    // A deleted board cannot stay selected.
    let mut config = ctx.load_config()?;
    if config.active_board == Some(args.id) {
        config.active_board = None;
        ctx.save_config(&config)?;
    }

    if ctx.json {
        output_json(&serde_json::json!({ "deleted": args.id }));
    } else if !ctx.quiet {
        println!("Deleted board {}: {}", args.id, name);
    }
    Ok(())
}

fn run_list(ctx: &RuntimeContext) -> Result<()> {
    let store = ctx.open_store()?;
    let boards = &store.document().boards;

    if ctx.json {
        let views: Vec<BoardView> = boards.iter().map(BoardView::from_board).collect();
        output_json(&views);
        return Ok(());
    }

    if boards.is_empty() {
        if !ctx.quiet {
            println!("No boards yet. Run `cb board create <name>` to create one.");
        }
        return Ok(());
    }

    let rows: Vec<Vec<String>> = boards.iter().map(format_board_row).collect();
    output_table(&["ID", "NAME", "LISTS", "CARDS", "CREATED"], &rows);
    Ok(())
}

fn run_use(ctx: &RuntimeContext, args: &BoardUseArgs) -> Result<()> {
    let store = ctx.open_store()?;
    let Some(board) = store.board(args.id) else {
        bail!("board {} not found", args.id);
    };
    let name = board.name.clone();

    let mut config = ctx.load_config()?;
    config.active_board = Some(args.id);
    ctx.save_config(&config)?;

    if ctx.json {
        output_json(&serde_json::json!({ "activeBoard": args.id }));
    } else if !ctx.quiet {
        println!("Now using board {}: {}", args.id, name);
    }
    Ok(())
}
