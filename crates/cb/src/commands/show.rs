//! `cb show` -- render a board as columns.

use anyhow::{Result, bail};

use corkboard_ui::render::render_board;
use corkboard_ui::terminal::terminal_width;

use crate::cli::ShowArgs;
use crate::context::RuntimeContext;
use crate::output::output_json;

/// Execute the `cb show` command.
pub fn run(ctx: &RuntimeContext, args: &ShowArgs) -> Result<()> {
    let board_id = ctx.resolve_board(args.board)?;

    let store = ctx.open_store()?;
    let Some(board) = store.board(board_id) else {
        bail!("board {} not found", board_id);
    };

    if ctx.json {
        // The full nested scope: lists in order, cards in order.
        output_json(board);
        return Ok(());
    }

    print!("{}", render_board(board, terminal_width()));
    Ok(())
}
