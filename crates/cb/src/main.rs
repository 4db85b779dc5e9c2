//! `cb` -- local kanban board manager CLI.
//!
//! This is the entry point. It parses CLI arguments with clap, resolves the
//! runtime context, and dispatches to command handlers.

mod cli;
mod commands;
mod context;
mod output;

use std::sync::atomic::{AtomicBool, Ordering};

use clap::Parser;

use cli::{Cli, Commands};
use context::RuntimeContext;

/// Tracks whether a Ctrl+C has already been received.
static CTRLC_RECEIVED: AtomicBool = AtomicBool::new(false);

fn main() {
    // Install signal handlers for graceful shutdown.
    // First Ctrl+C: exit cleanly. Second: force exit.
    let _ = ctrlc::set_handler(|| {
        if CTRLC_RECEIVED.swap(true, Ordering::SeqCst) {
            std::process::exit(1);
        }
        std::process::exit(0);
    });

    let cli = Cli::parse();

    let ctx = RuntimeContext::from_global_args(&cli.global);

    // Set up logging based on verbosity
    if ctx.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("cb=debug,corkboard_core=debug,corkboard_storage=debug")
            .with_writer(std::io::stderr)
            .init();
    }

    let result = match cli.command {
        Some(Commands::Init(args)) => commands::init::run(&ctx, &args),
        Some(Commands::Board(args)) => commands::board_cmd::run(&ctx, &args),
        Some(Commands::List(args)) => commands::list_cmd::run(&ctx, &args),
        Some(Commands::Card(args)) => commands::card_cmd::run(&ctx, &args),
        Some(Commands::Show(args)) => commands::show::run(&ctx, &args),
        Some(Commands::Export(args)) => commands::snapshot_cmd::run_export(&ctx, &args),
        Some(Commands::Import(args)) => commands::snapshot_cmd::run_import(&ctx, &args),
        Some(Commands::Completion(args)) => commands::completion::run(&ctx, &args),
        Some(Commands::Version) => commands::version::run(&ctx),
        None => {
            // No subcommand -- print help
            use clap::CommandFactory;
            Cli::command().print_help().ok();
            println!();
            Ok(())
        }
    };

    // Handle errors: print message and exit with code 1
    if let Err(e) = result {
        if cli.global.json {
            let err_json = serde_json::json!({
                "error": format!("{:#}", e),
            });
            if let Ok(s) = serde_json::to_string_pretty(&err_json) {
                eprintln!("{}", s);
            }
        } else {
            eprintln!("Error: {:#}", e);
        }
        std::process::exit(1);
    }
}
