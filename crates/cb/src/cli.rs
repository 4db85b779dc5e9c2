//! Clap CLI definitions for the `cb` command.
//!
//! The command tree mirrors the user intents of the board surface: every
//! modal and drag gesture of a kanban UI has a subcommand counterpart here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use corkboard_core::ids::{BoardId, CardId, ListId};

/// cb -- local kanban boards in the terminal.
///
/// Boards hold ordered lists, lists hold ordered cards. Everything lives in
/// a local database; nothing leaves your machine.
#[derive(Parser, Debug)]
#[command(
    name = "cb",
    about = "Local kanban board manager",
    long_about = "Boards hold ordered lists, lists hold ordered cards. Everything lives in a local database; nothing leaves your machine.",
    version,
    propagate_version = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Global flags available to all subcommands.
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Data directory (default: auto-discover .corkboard/).
    #[arg(long, global = true)]
    pub dir: Option<PathBuf>,

    /// Output in JSON format.
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose/debug output.
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output (errors only).
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,
}

/// All available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a corkboard workspace in the current directory.
    Init(InitArgs),

    /// Manage boards.
    #[command(subcommand)]
    Board(BoardCommands),

    /// Manage lists on a board.
    #[command(subcommand)]
    List(ListCommands),

    /// Manage cards.
    #[command(subcommand)]
    Card(CardCommands),

    /// Render a board as columns.
    Show(ShowArgs),

    /// Export the whole document as a JSON snapshot.
    Export(ExportArgs),

    /// Import a JSON snapshot, replacing all current data.
    Import(ImportArgs),

    /// Generate shell completions.
    Completion(CompletionArgs),

    /// Show version information.
    Version,
}

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Re-initialize even if a database already exists (data loss warning).
    #[arg(long)]
    pub force: bool,
}

#[derive(Subcommand, Debug)]
pub enum BoardCommands {
    /// Create a new board.
    #[command(alias = "new")]
    Create(BoardCreateArgs),

    /// Rename a board.
    Rename(BoardRenameArgs),

    /// Delete a board and everything on it.
    Delete(BoardDeleteArgs),

    /// List all boards.
    #[command(alias = "ls")]
    List,

    /// Select the board targeted when --board is not given.
    Use(BoardUseArgs),
}

#[derive(Args, Debug)]
pub struct BoardCreateArgs {
    /// Board name.
    pub name: String,
}

#[derive(Args, Debug)]
pub struct BoardRenameArgs {
    /// Board id.
    pub id: BoardId,
    /// New name.
    pub name: String,
}

#[derive(Args, Debug)]
pub struct BoardDeleteArgs {
    /// Board id.
    pub id: BoardId,
    /// Delete even when the board still has lists.
    #[arg(long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct BoardUseArgs {
    /// Board id.
    pub id: BoardId,
}

#[derive(Subcommand, Debug)]
pub enum ListCommands {
    /// Add a list to a board.
    #[command(alias = "create")]
    Add(ListAddArgs),

    /// Rename a list.
    Rename(ListRenameArgs),

    /// Delete a list and all its cards.
    Delete(ListDeleteArgs),
}

#[derive(Args, Debug)]
pub struct ListAddArgs {
    /// List name.
    pub name: String,
    /// Board to add to (default: the active board).
    #[arg(long)]
    pub board: Option<BoardId>,
}

#[derive(Args, Debug)]
pub struct ListRenameArgs {
    /// List id.
    pub id: ListId,
    /// New name.
    pub name: String,
    /// Board the list is on (default: the active board).
    #[arg(long)]
    pub board: Option<BoardId>,
}

#[derive(Args, Debug)]
pub struct ListDeleteArgs {
    /// List id.
    pub id: ListId,
    /// Board the list is on (default: the active board).
    #[arg(long)]
    pub board: Option<BoardId>,
    /// Delete even when the list still has cards.
    #[arg(long)]
    pub force: bool,
}

#[derive(Subcommand, Debug)]
pub enum CardCommands {
    /// Add a card to a list.
    #[command(alias = "create")]
    Add(CardAddArgs),

    /// Edit a card's title and/or description.
    Edit(CardEditArgs),

    /// Delete a card.
    Delete(CardDeleteArgs),

    /// Move a card between lists or within its list.
    #[command(alias = "mv")]
    Move(CardMoveArgs),
}

#[derive(Args, Debug)]
pub struct CardAddArgs {
    /// Card title.
    pub title: String,
    /// List to add to.
    #[arg(long)]
    pub list: ListId,
    /// Card description.
    #[arg(short = 'd', long)]
    pub description: Option<String>,
    /// Board the list is on (default: the active board).
    #[arg(long)]
    pub board: Option<BoardId>,
}

#[derive(Args, Debug)]
pub struct CardEditArgs {
    /// Card id.
    pub id: CardId,
    /// List the card is in.
    #[arg(long)]
    pub list: ListId,
    /// New title.
    #[arg(long)]
    pub title: Option<String>,
    /// New description (pass an empty string to clear).
    #[arg(short = 'd', long)]
    pub description: Option<String>,
    /// Board the list is on (default: the active board).
    #[arg(long)]
    pub board: Option<BoardId>,
}

#[derive(Args, Debug)]
pub struct CardDeleteArgs {
    /// Card id.
    pub id: CardId,
    /// List the card is in.
    #[arg(long)]
    pub list: ListId,
    /// Board the list is on (default: the active board).
    #[arg(long)]
    pub board: Option<BoardId>,
}

#[derive(Args, Debug)]
pub struct CardMoveArgs {
    /// Card id.
    pub id: CardId,
    /// Source list.
    #[arg(long)]
    pub from: ListId,
    /// Target list (may equal the source for a reorder).
    #[arg(long)]
    pub to: ListId,
    /// Insert immediately before this card; omit to append at the end.
    #[arg(long)]
    pub before: Option<CardId>,
    /// Board the lists are on (default: the active board).
    #[arg(long)]
    pub board: Option<BoardId>,
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Board to render (default: the active board).
    pub board: Option<BoardId>,
}

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output file (default: stdout).
    pub file: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct ImportArgs {
    /// Snapshot file to import.
    pub file: PathBuf,
}

#[derive(Args, Debug)]
pub struct CompletionArgs {
    /// Target shell.
    #[arg(value_enum)]
    pub shell: Shell,
}
