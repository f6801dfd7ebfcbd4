//! Activity log CLI command

use crate::audit::ActivityLogger;
use crate::error::ClarasResult;

/// Handle `log`
pub fn handle_log_command(logger: &ActivityLogger, limit: usize) -> ClarasResult<()> {
    let entries = logger.read_recent(limit)?;

    if entries.is_empty() {
        println!("No activity recorded yet.");
        return Ok(());
    }

    for entry in entries {
        println!("{}", entry.format_human_readable());
    }
    Ok(())
}
