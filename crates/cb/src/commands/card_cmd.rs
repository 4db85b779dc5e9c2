//! `cb card` -- add, edit, delete, and move cards.
//!
//! `cb card move` is the CLI counterpart of the drag gesture: the same
//! `(card, source list, target list, before-card)` command a drop resolves
//! to.

use anyhow::{Result, bail};

use corkboard_core::ids::{BoardId, ListId};
use corkboard_core::store::{BoardStore, CardUpdate, DocumentStore, OpStatus};
use corkboard_core::validation::validated_name;

use crate::cli::{CardAddArgs, CardCommands, CardDeleteArgs, CardEditArgs, CardMoveArgs};
use crate::context::RuntimeContext;
use crate::output::{CardView, output_json};

/// Execute a `cb card` subcommand.
pub fn run(ctx: &RuntimeContext, command: &CardCommands) -> Result<()> {
    match command {
        CardCommands::Add(args) => run_add(ctx, args),
        CardCommands::Edit(args) => run_edit(ctx, args),
        CardCommands::Delete(args) => run_delete(ctx, args),
        CardCommands::Move(args) => run_move(ctx, args),
    }
}

fn run_add(ctx: &RuntimeContext, args: &CardAddArgs) -> Result<()> {
    let title = validated_name("card title", &args.title)?;
    let board_id = ctx.resolve_board(args.board)?;
    let description = args.description.as_deref().unwrap_or("");

    let mut store = ctx.open_store()?;
    let Some(card) = store.create_card(board_id, args.list, title, description) else {
        bail!("list {} not found on board {}", args.list, board_id);
    };
    let view = CardView::from_card(card);

    if ctx.json {
        output_json(&view);
    } else if !ctx.quiet {
        println!("Added card {} to list {}: {}", view.id, args.list, view.title);
    }
    Ok(())
}

fn run_edit(ctx: &RuntimeContext, args: &CardEditArgs) -> Result<()> {
    if args.title.is_none() && args.description.is_none() {
        bail!("nothing to update: pass --title and/or --description");
    }
    if let Some(ref title) = args.title {
        validated_name("card title", title)?;
    }
    let board_id = ctx.resolve_board(args.board)?;

    let update = CardUpdate {
        title: args.title.clone(),
        description: args.description.clone(),
    };

    let mut store = ctx.open_store()?;
    match store.update_card(board_id, args.list, args.id, &update) {
        OpStatus::Applied => {}
        OpStatus::NotFound => bail!("card {} not found in list {}", args.id, args.list),
        OpStatus::Rejected => bail!("card title must not be empty"),
    }

    if ctx.json {
        let card = store
            .board(board_id)
            .and_then(|b| b.list(args.list))
            .and_then(|l| l.card(args.id))
            .map(CardView::from_card);
        output_json(&card);
    } else if !ctx.quiet {
        println!("Updated card {}", args.id);
    }
    Ok(())
}

fn run_delete(ctx: &RuntimeContext, args: &CardDeleteArgs) -> Result<()> {
    let board_id = ctx.resolve_board(args.board)?;

    let mut store = ctx.open_store()?;
    let Some(card) = store
        .board(board_id)
        .and_then(|b| b.list(args.list))
        .and_then(|l| l.card(args.id))
    else {
        bail!("card {} not found in list {}", args.id, args.list);
    };
    let title = card.title.clone();

    match store.delete_card(board_id, args.list, args.id) {
        OpStatus::Applied => {}
        _ => bail!("card {} not found in list {}", args.id, args.list),
    }

    if ctx.json {
        output_json(&serde_json::json!({ "deleted": args.id }));
    } else if !ctx.quiet {
        println!("Deleted card {}: {}", args.id, title);
    }
    Ok(())
}

fn run_move(ctx: &RuntimeContext, args: &CardMoveArgs) -> Result<()> {
    let board_id = ctx.resolve_board(args.board)?;

    let mut store = ctx.open_store()?;
    match store.move_card(board_id, args.from, args.to, args.id, args.before) {
        OpStatus::Applied => {}
        OpStatus::NotFound => bail!("{}", diagnose_move(&store, board_id, args)),
        OpStatus::Rejected => bail!("move was rejected"),
    }

    if ctx.json {
        let card = store
            .board(board_id)
            .and_then(|b| b.list(args.to))
            .and_then(|l| l.card(args.id))
            .map(CardView::from_card);
        output_json(&card);
    } else if !ctx.quiet {
        if args.from == args.to {
            println!("Reordered card {} within list {}", args.id, args.to);
        } else {
            println!("Moved card {} from list {} to list {}", args.id, args.from, args.to);
        }
    }
    Ok(())
}

/// Pinpoints which reference made a move a no-op, for the error message.
fn diagnose_move<S: DocumentStore>(
    store: &BoardStore<S>,
    board_id: BoardId,
    args: &CardMoveArgs,
) -> String {
    let Some(board) = store.board(board_id) else {
        return format!("board {} not found", board_id);
    };
    let missing_list = |id: ListId| format!("list {} not found on board {}", id, board_id);
    let Some(source) = board.list(args.from) else {
        return missing_list(args.from);
    };
    if board.list(args.to).is_none() {
        return missing_list(args.to);
    }
    if source.card(args.id).is_none() {
        return format!("card {} not found in list {}", args.id, args.from);
    }
    format!("card {} could not be moved", args.id)
}
