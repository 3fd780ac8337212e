use addrbook::api::{CmdMessage, CmdResult, MessageLevel};
use addrbook::model::Record;
use colored::Colorize;
use std::io::{self, Write};

pub fn write_result<W: Write>(out: &mut W, result: &CmdResult) -> io::Result<()> {
    write_records(out, &result.listed_records)?;

    let total = result.pages.len();
    for (i, page) in result.pages.iter().enumerate() {
        if total > 1 {
            writeln!(out, "{}", format!("-- page {} of {} --", i + 1, total).dimmed())?;
        }
        write_records(out, page)?;
    }

    write_messages(out, &result.messages)
}

fn write_records<W: Write>(out: &mut W, records: &[Record]) -> io::Result<()> {
    for record in records {
        match record.birthday() {
            Some(birthday) => writeln!(
                out,
                "{} {}",
                record,
                format!("(birthday {})", birthday).dimmed()
            )?,
            None => writeln!(out, "{}", record)?,
        }
    }
    Ok(())
}

fn write_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content)?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
            MessageLevel::Error => writeln!(out, "{}", message.content.red())?,
        }
    }
    Ok(())
}
