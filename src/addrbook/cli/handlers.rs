use super::parser::{self, CommandKind, Parsed, COMMANDS};
use addrbook::api::{AddressBookApi, CmdMessage, CmdResult};
use addrbook::config::BookConfig;
use addrbook::error::{BookError, ErrorKind, Result};
use addrbook::store::BookStore;
use tracing::{debug, warn};

const TIP: &str = "Tip: Enter input in format {command space value}";

pub enum Outcome {
    Continue(CmdResult),
    Exit,
}

/// Runs one input line. Errors never escape: they become messages.
pub fn handle<S: BookStore>(
    api: &mut AddressBookApi<S>,
    config: &BookConfig,
    line: &str,
) -> Outcome {
    match parser::parse(line) {
        Parsed::Empty => Outcome::Continue(CmdResult::default()),
        Parsed::Unknown(token) => {
            debug!(%token, "unknown command");
            Outcome::Continue(
                CmdResult::default().with_message(CmdMessage::warning("Unknown command. Try again.")),
            )
        }
        Parsed::Command { kind, args } => {
            debug!(?kind, ?args, "dispatching");
            match dispatch(api, config, kind, &args) {
                Ok(outcome) => outcome,
                Err(err) => Outcome::Continue(explain(kind, &err)),
            }
        }
    }
}

fn dispatch<S: BookStore>(
    api: &mut AddressBookApi<S>,
    config: &BookConfig,
    kind: CommandKind,
    args: &[String],
) -> Result<Outcome> {
    let result = match kind {
        CommandKind::Exit => return Ok(Outcome::Exit),
        CommandKind::Hello => {
            CmdResult::default().with_message(CmdMessage::info("How can I help you?"))
        }
        CommandKind::Help => help(),
        CommandKind::Add => api.add_contact(
            arg(args, 0, "name")?,
            arg(args, 1, "phone")?,
            args.get(2).map(String::as_str),
        )?,
        CommandKind::Change => {
            let name = arg(args, 0, "name")?;
            match args.len() {
                0 | 1 => return Err(BookError::MissingArgument("phone")),
                2 => api.change_phone(name, None, &args[1])?,
                _ => api.change_phone(name, Some(args[1].as_str()), &args[2])?,
            }
        }
        CommandKind::Phone => api.phone(arg(args, 0, "name")?)?,
        CommandKind::Remove => api.remove_phone(arg(args, 0, "name")?, arg(args, 1, "phone")?)?,
        CommandKind::Delete => api.delete_contact(arg(args, 0, "name")?)?,
        CommandKind::Birthday => {
            let name = arg(args, 0, "name")?;
            match args.get(1) {
                Some(date) => api.set_birthday(name, date)?,
                None => api.show_birthday(name)?,
            }
        }
        CommandKind::Days => api.days_to_birthday(arg(args, 0, "name")?)?,
        CommandKind::Search => api.search(arg(args, 0, "query")?)?,
        CommandKind::ShowAll => api.show_all(config.page_size)?,
        CommandKind::Save => api.save()?,
    };
    Ok(Outcome::Continue(result))
}

fn arg<'a>(args: &'a [String], index: usize, what: &'static str) -> Result<&'a str> {
    args.get(index)
        .map(String::as_str)
        .ok_or(BookError::MissingArgument(what))
}

/// Turns an error into the tip shown to the user.
fn explain(kind: CommandKind, err: &BookError) -> CmdResult {
    let mut result = CmdResult::default();
    match err.kind() {
        ErrorKind::MissingArgument => {
            result.add_message(CmdMessage::warning(format!("Not enough params. {}", TIP)));
            result.add_message(CmdMessage::info(format!(
                "Usage: {}",
                parser::usage(kind)
            )));
        }
        ErrorKind::Lookup => {
            result.add_message(CmdMessage::warning(format!("{}. Try again. {}", err, TIP)));
        }
        ErrorKind::Validation => {
            result.add_message(CmdMessage::warning(format!("Value error: {}. {}", err, TIP)));
        }
        ErrorKind::Store => {
            warn!(error = %err, "store operation failed");
            result.add_message(CmdMessage::error(format!("Store error: {}", err)));
        }
    }
    result
}

fn help() -> CmdResult {
    let mut result = CmdResult::default();
    let mut seen = Vec::new();
    for spec in COMMANDS {
        if seen.contains(&spec.kind) {
            continue;
        }
        seen.push(spec.kind);
        result.add_message(CmdMessage::info(format!(
            "{:<40}{}",
            spec.usage, spec.about
        )));
    }
    result
}
