//! `cb version` -- show version information.

use anyhow::Result;

use crate::context::RuntimeContext;
use crate::output::output_json;

/// Execute the `cb version` command.
pub fn run(ctx: &RuntimeContext) -> Result<()> {
    if ctx.json {
        output_json(&serde_json::json!({
            "version": env!("CARGO_PKG_VERSION"),
        }));
    } else {
        println!("cb version {}", env!("CARGO_PKG_VERSION"));
    }
    Ok(())
}
