//! Input tokenizing and command lookup.
//!
//! A line is split on whitespace. The command is found by exact lookup of the
//! first token, then any remaining keyword tokens (`show all`, `good bye`) must
//! follow verbatim. Whatever is left are the arguments.

use once_cell::sync::Lazy;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Hello,
    Add,
    Change,
    Phone,
    Remove,
    Delete,
    Birthday,
    Days,
    Search,
    ShowAll,
    Save,
    Help,
    Exit,
}

pub struct CommandSpec {
    pub keyword: &'static [&'static str],
    pub kind: CommandKind,
    pub usage: &'static str,
    pub about: &'static str,
}

pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        keyword: &["hello"],
        kind: CommandKind::Hello,
        usage: "hello",
        about: "Say hello",
    },
    CommandSpec {
        keyword: &["add"],
        kind: CommandKind::Add,
        usage: "add <name> <phone> [birthday]",
        about: "Add a contact, or another phone to an existing one",
    },
    CommandSpec {
        keyword: &["change"],
        kind: CommandKind::Change,
        usage: "change <name> [old-phone] <new-phone>",
        about: "Replace a phone",
    },
    CommandSpec {
        keyword: &["phone"],
        kind: CommandKind::Phone,
        usage: "phone <name>",
        about: "Show a contact's phones",
    },
    CommandSpec {
        keyword: &["remove"],
        kind: CommandKind::Remove,
        usage: "remove <name> <phone>",
        about: "Remove one phone from a contact",
    },
    CommandSpec {
        keyword: &["delete"],
        kind: CommandKind::Delete,
        usage: "delete <name>",
        about: "Delete a contact",
    },
    CommandSpec {
        keyword: &["birthday"],
        kind: CommandKind::Birthday,
        usage: "birthday <name> [YYYY-MM-DD]",
        about: "Show or set a birthday",
    },
    CommandSpec {
        keyword: &["days"],
        kind: CommandKind::Days,
        usage: "days <name>",
        about: "Days until a contact's next birthday",
    },
    CommandSpec {
        keyword: &["search"],
        kind: CommandKind::Search,
        usage: "search <query>",
        about: "Find contacts by name or phone digits",
    },
    CommandSpec {
        keyword: &["show", "all"],
        kind: CommandKind::ShowAll,
        usage: "show all",
        about: "List every contact",
    },
    CommandSpec {
        keyword: &["save"],
        kind: CommandKind::Save,
        usage: "save",
        about: "Write the address book to disk",
    },
    CommandSpec {
        keyword: &["help"],
        kind: CommandKind::Help,
        usage: "help",
        about: "List commands",
    },
    CommandSpec {
        keyword: &["good", "bye"],
        kind: CommandKind::Exit,
        usage: "good bye | close | exit",
        about: "Leave",
    },
    CommandSpec {
        keyword: &["close"],
        kind: CommandKind::Exit,
        usage: "close",
        about: "Leave",
    },
    CommandSpec {
        keyword: &["exit"],
        kind: CommandKind::Exit,
        usage: "exit",
        about: "Leave",
    },
];

/// First keyword token -> specs starting with it, longest keyword first.
static BY_FIRST_TOKEN: Lazy<HashMap<&'static str, Vec<&'static CommandSpec>>> = Lazy::new(|| {
    let mut index: HashMap<&'static str, Vec<&'static CommandSpec>> = HashMap::new();
    for spec in COMMANDS {
        index.entry(spec.keyword[0]).or_default().push(spec);
    }
    for specs in index.values_mut() {
        specs.sort_by(|a, b| b.keyword.len().cmp(&a.keyword.len()));
    }
    index
});

#[derive(Debug, PartialEq, Eq)]
pub enum Parsed {
    Empty,
    Unknown(String),
    Command {
        kind: CommandKind,
        args: Vec<String>,
    },
}

pub fn parse(line: &str) -> Parsed {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some(first) = tokens.first() else {
        return Parsed::Empty;
    };

    let matched = BY_FIRST_TOKEN.get(*first).and_then(|specs| {
        specs.iter().find(|spec| {
            tokens.len() >= spec.keyword.len() && tokens[..spec.keyword.len()] == *spec.keyword
        })
    });

    match matched {
        Some(spec) => Parsed::Command {
            kind: spec.kind,
            args: tokens[spec.keyword.len()..]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        },
        None => Parsed::Unknown(first.to_string()),
    }
}

/// Usage line for the first spec of `kind`.
pub fn usage(kind: CommandKind) -> &'static str {
    COMMANDS
        .iter()
        .find(|spec| spec.kind == kind)
        .map(|spec| spec.usage)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(line: &str) -> (CommandKind, Vec<String>) {
        match parse(line) {
            Parsed::Command { kind, args } => (kind, args),
            other => panic!("expected a command for {line:?}, got {other:?}"),
        }
    }

    #[test]
    fn splits_command_and_arguments() {
        let (kind, args) = command("add alice 0123456789");
        assert_eq!(kind, CommandKind::Add);
        assert_eq!(args, ["alice", "0123456789"]);
    }

    #[test]
    fn collapses_extra_whitespace() {
        let (kind, args) = command("   phone    alice  ");
        assert_eq!(kind, CommandKind::Phone);
        assert_eq!(args, ["alice"]);
    }

    #[test]
    fn two_token_keywords() {
        assert_eq!(command("show all").0, CommandKind::ShowAll);
        assert_eq!(command("good bye").0, CommandKind::Exit);
        assert_eq!(command("close").0, CommandKind::Exit);
        assert_eq!(command("exit").0, CommandKind::Exit);
    }

    #[test]
    fn partial_two_token_keyword_is_unknown() {
        assert_eq!(parse("show"), Parsed::Unknown("show".into()));
        assert_eq!(parse("show everything"), Parsed::Unknown("show".into()));
        assert_eq!(parse("good night"), Parsed::Unknown("good".into()));
    }

    #[test]
    fn no_prefix_matching() {
        assert_eq!(parse("added alice"), Parsed::Unknown("added".into()));
        assert_eq!(parse("phones alice"), Parsed::Unknown("phones".into()));
        assert_eq!(parse("exitnow"), Parsed::Unknown("exitnow".into()));
    }

    #[test]
    fn trailing_tokens_become_arguments() {
        let (kind, args) = command("exit now");
        assert_eq!(kind, CommandKind::Exit);
        assert_eq!(args, ["now"]);
    }

    #[test]
    fn blank_input() {
        assert_eq!(parse(""), Parsed::Empty);
        assert_eq!(parse("  \t "), Parsed::Empty);
    }

    #[test]
    fn every_kind_has_usage() {
        for spec in COMMANDS {
            assert!(!usage(spec.kind).is_empty());
        }
    }
}
