//! Command handlers for the `cb` CLI.

pub mod board_cmd;
pub mod card_cmd;
pub mod completion;
pub mod init;
pub mod list_cmd;
pub mod show;
pub mod snapshot_cmd;
pub mod version;
