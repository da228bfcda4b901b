use colored::Colorize;
use roomstash::api::{CmdMessage, CmdResult, MessageLevel};
use std::io::{self, Write};

pub(super) fn write_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content.dimmed())?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
            MessageLevel::Error => writeln!(out, "{}", message.content.red())?,
        }
    }
    Ok(())
}

/// Messages first, then one line per hit, then counts when there is data.
pub(super) fn write_result<W: Write>(out: &mut W, result: &CmdResult) -> io::Result<()> {
    write_messages(out, &result.messages)?;
    for location in &result.matches {
        writeln!(out, "{}", location)?;
    }
    if let Some(stats) = result.stats.filter(|s| !s.is_empty()) {
        writeln!(out, "{}", stats)?;
    }
    Ok(())
}
