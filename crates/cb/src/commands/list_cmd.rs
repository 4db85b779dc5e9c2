//! `cb list` -- add, rename, and delete lists on a board.

use anyhow::{Result, bail};

use corkboard_core::store::OpStatus;
use corkboard_core::validation::validated_name;

use crate::cli::{ListAddArgs, ListCommands, ListDeleteArgs, ListRenameArgs};
use crate::context::RuntimeContext;
use crate::output::{ListView, output_json};

/// Execute a `cb list` subcommand.
pub fn run(ctx: &RuntimeContext, command: &ListCommands) -> Result<()> {
    match command {
        ListCommands::Add(args) => run_add(ctx, args),
        ListCommands::Rename(args) => run_rename(ctx, args),
        ListCommands::Delete(args) => run_delete(ctx, args),
    }
}

fn run_add(ctx: &RuntimeContext, args: &ListAddArgs) -> Result<()> {
    let name = validated_name("list name", &args.name)?;
    let board_id = ctx.resolve_board(args.board)?;

    let mut store = ctx.open_store()?;
    let Some(list) = store.create_list(board_id, name) else {
        bail!("board {} not found", board_id);
    };
    let view = ListView::from_list(list);

    if ctx.json {
        output_json(&view);
    } else if !ctx.quiet {
        println!("Added list {} to board {}: {}", view.id, board_id, view.name);
    }
    Ok(())
}

fn run_rename(ctx: &RuntimeContext, args: &ListRenameArgs) -> Result<()> {
    let name = validated_name("list name", &args.name)?;
    let board_id = ctx.resolve_board(args.board)?;

    let mut store = ctx.open_store()?;
    match store.rename_list(board_id, args.id, name) {
        OpStatus::Applied => {}
        OpStatus::NotFound => bail!("list {} not found on board {}", args.id, board_id),
        OpStatus::Rejected => bail!("list name must not be empty"),
    }

    if ctx.json {
        let list = store
            .board(board_id)
            .and_then(|b| b.list(args.id))
            .map(ListView::from_list);
        output_json(&list);
    } else if !ctx.quiet {
        println!("Renamed list {}: {}", args.id, name);
    }
    Ok(())
}

fn run_delete(ctx: &RuntimeContext, args: &ListDeleteArgs) -> Result<()> {
    let board_id = ctx.resolve_board(args.board)?;

    let mut store = ctx.open_store()?;
    let Some(list) = store.board(board_id).and_then(|b| b.list(args.id)) else {
        bail!("list {} not found on board {}", args.id, board_id);
    };
    if !args.force && !list.cards.is_empty() {
        bail!(
            "list {} (\"{}\") still has {} card(s). Use --force to delete it and its cards.",
            args.id,
            list.name,
            list.cards.len()
        );
    }
    let name = list.name.clone();

    match store.delete_list(board_id, args.id) {
        OpStatus::Applied => {}
        _ => bail!("list {} not found on board {}", args.id, board_id),
    }

    if ctx.json {
        output_json(&serde_json::json!({ "deleted": args.id }));
    } else if !ctx.quiet {
        println!("Deleted list {}: {}", args.id, name);
    }
    Ok(())
}
