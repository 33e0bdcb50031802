//! # Parser
//!
//! Turns one line of user input into a [`Command`]. The first word picks the
//! command from a fixed keyword table (case-insensitively); the rest of the
//! line is handed to that command's argument parser.
//!
//! - An unknown keyword is [`ParseError::UnknownCommand`].
//! - Arguments that do not fit the command's grammar are
//!   [`ParseError::InvalidFormat`], carrying the command's usage.
//! - Well-formed arguments holding a bad value (an email without `@`, a
//!   group of 0) are validation errors naming the field.
//!
//! Parsing never touches the model.

pub mod tokenizer;
pub mod util;

use crate::commands::{
    add, bookmark, clear, customise, delete, edit, find, help, history, list, select, sort, undo,
    view, Command, EditFields, FindField, ListTarget,
};
use crate::config::FontSize;
use crate::error::{AppError, ParseError, Result};
use crate::listing::ListingUnit;
use crate::model::{
    Address, ClassType, Code, Email, Group, Lesson, Location, Name, Person, Phone, TimeSlot,
};
use once_cell::sync::Lazy;
use std::collections::BTreeMap;
use tokenizer::{tokenize, ArgumentMultimap, Prefix};
use tracing::debug;
use util::{expect_no_args, parse_index, parse_switch, parse_tags, parse_tags_for_edit};

pub const EXIT_USAGE: &str = "exit: Exits the program.\nExample: exit";

type ArgParser = fn(&str) -> Result<Command>;

struct CommandEntry {
    usage: &'static str,
    parse: ArgParser,
}

static COMMANDS: Lazy<BTreeMap<&'static str, CommandEntry>> = Lazy::new(|| {
    let entries: [(&'static str, &'static str, ArgParser); 16] = [
        ("add", add::USAGE, parse_add),
        ("bookmark", bookmark::USAGE, parse_bookmark),
        ("clear", clear::USAGE, parse_clear),
        ("customise", customise::USAGE, parse_customise),
        ("delete", delete::USAGE, parse_delete),
        ("edit", edit::USAGE, parse_edit),
        ("exit", EXIT_USAGE, parse_exit),
        ("find", find::USAGE, parse_find),
        ("help", help::USAGE, parse_help),
        ("history", history::USAGE, parse_history),
        ("list", list::USAGE, parse_list),
        ("redo", undo::REDO_USAGE, parse_redo),
        ("select", select::USAGE, parse_select),
        ("sort", sort::USAGE, parse_sort),
        ("undo", undo::USAGE, parse_undo),
        ("view", view::USAGE, parse_view),
    ];
    entries
        .into_iter()
        .map(|(keyword, usage, parse)| (keyword, CommandEntry { usage, parse }))
        .collect()
});

/// Every command keyword, alphabetically.
pub fn keywords() -> impl Iterator<Item = &'static str> {
    COMMANDS.keys().copied()
}

/// Usage text of `keyword`, if it names a command.
pub fn usage_of(keyword: &str) -> Option<&'static str> {
    COMMANDS
        .get(keyword.to_ascii_lowercase().as_str())
        .map(|entry| entry.usage)
}

pub fn parse_command(line: &str) -> Result<Command> {
    let line = line.trim();
    let (keyword, args) = match line.split_once(char::is_whitespace) {
        Some((keyword, args)) => (keyword, args),
        None => (line, ""),
    };
    if keyword.is_empty() {
        return Err(ParseError::InvalidFormat { usage: help::USAGE }.into());
    }

    let keyword = keyword.to_ascii_lowercase();
    let entry = COMMANDS
        .get(keyword.as_str())
        .ok_or_else(|| ParseError::UnknownCommand(keyword.clone()))?;
    let command = (entry.parse)(args)?;
    debug!(%keyword, ?command, "parsed");
    Ok(command)
}

fn invalid(usage: &'static str) -> AppError {
    ParseError::InvalidFormat { usage }.into()
}

/// The value of a prefix that `all_of` already confirmed.
fn required<'a>(
    map: &'a ArgumentMultimap,
    prefix: Prefix,
    usage: &'static str,
) -> Result<&'a str> {
    map.value(prefix).ok_or_else(|| invalid(usage))
}

fn parse_delete(args: &str) -> Result<Command> {
    Ok(Command::Delete(parse_index(args, delete::USAGE)?))
}

fn parse_view(args: &str) -> Result<Command> {
    Ok(Command::View(parse_index(args, view::USAGE)?))
}

fn parse_select(args: &str) -> Result<Command> {
    Ok(Command::Select(parse_index(args, select::USAGE)?))
}

fn parse_bookmark(args: &str) -> Result<Command> {
    Ok(Command::Bookmark(parse_index(args, bookmark::USAGE)?))
}

fn parse_clear(args: &str) -> Result<Command> {
    expect_no_args(args, clear::USAGE).map(|_| Command::Clear)
}

fn parse_exit(args: &str) -> Result<Command> {
    expect_no_args(args, EXIT_USAGE).map(|_| Command::Exit)
}

fn parse_history(args: &str) -> Result<Command> {
    expect_no_args(args, history::USAGE).map(|_| Command::History)
}

fn parse_sort(args: &str) -> Result<Command> {
    expect_no_args(args, sort::USAGE).map(|_| Command::Sort)
}

fn parse_undo(args: &str) -> Result<Command> {
    expect_no_args(args, undo::USAGE).map(|_| Command::Undo)
}

fn parse_redo(args: &str) -> Result<Command> {
    expect_no_args(args, undo::REDO_USAGE).map(|_| Command::Redo)
}

fn parse_add(args: &str) -> Result<Command> {
    let all: Vec<Prefix> = [Prefix::PERSON, Prefix::LESSON].concat();
    let map = tokenize(args, &all);
    if !map.preamble().is_empty() {
        return Err(invalid(add::USAGE));
    }

    if map.contains(Prefix::Code) {
        if map.any_of(Prefix::PERSON) || !map.all_of(Prefix::LESSON) {
            return Err(invalid(add::USAGE));
        }
        let lesson = Lesson::new(
            Code::parse(required(&map, Prefix::Code, add::USAGE)?)?,
            required(&map, Prefix::ClassType, add::USAGE)?.parse::<ClassType>()?,
            Location::new(required(&map, Prefix::Location, add::USAGE)?)?,
            required(&map, Prefix::Group, add::USAGE)?.parse::<Group>()?,
            required(&map, Prefix::TimeSlot, add::USAGE)?.parse::<TimeSlot>()?,
        );
        return Ok(Command::AddLesson(lesson));
    }

    let mandatory = [Prefix::Name, Prefix::Phone, Prefix::Email, Prefix::Address];
    if map.any_of(Prefix::LESSON) || !map.all_of(&mandatory) {
        return Err(invalid(add::USAGE));
    }
    let person = Person::new(
        Name::new(required(&map, Prefix::Name, add::USAGE)?)?,
        Phone::new(required(&map, Prefix::Phone, add::USAGE)?)?,
        Email::new(required(&map, Prefix::Email, add::USAGE)?)?,
        Address::new(required(&map, Prefix::Address, add::USAGE)?)?,
        parse_tags(map.all_values(Prefix::Tag))?,
    );
    Ok(Command::AddPerson(person))
}

fn parse_edit(args: &str) -> Result<Command> {
    let all: Vec<Prefix> = [Prefix::PERSON, Prefix::LESSON].concat();
    let map = tokenize(args, &all);
    let index = parse_index(map.preamble(), edit::USAGE)?;

    let fields = EditFields {
        name: map.value(Prefix::Name).map(Name::new).transpose()?,
        phone: map.value(Prefix::Phone).map(Phone::new).transpose()?,
        email: map.value(Prefix::Email).map(Email::new).transpose()?,
        address: map.value(Prefix::Address).map(Address::new).transpose()?,
        tags: parse_tags_for_edit(map.all_values(Prefix::Tag))?,
        code: map.value(Prefix::Code).map(Code::parse).transpose()?,
        class_type: map
            .value(Prefix::ClassType)
            .map(str::parse::<ClassType>)
            .transpose()?,
        location: map.value(Prefix::Location).map(Location::new).transpose()?,
        group: map.value(Prefix::Group).map(str::parse::<Group>).transpose()?,
        time_slot: map
            .value(Prefix::TimeSlot)
            .map(str::parse::<TimeSlot>)
            .transpose()?,
    };
    if fields.is_empty() {
        return Err(invalid(edit::USAGE));
    }
    Ok(Command::Edit { index, fields })
}

fn parse_find(args: &str) -> Result<Command> {
    let mut words = args.split_whitespace();
    let first = words.next().ok_or_else(|| invalid(find::USAGE))?;

    let field = match first.to_ascii_lowercase().as_str() {
        "name" => Some(FindField::Name),
        "phone" => Some(FindField::Phone),
        "email" => Some(FindField::Email),
        "address" => Some(FindField::Address),
        "module" => Some(FindField::Module),
        _ => None,
    };
    let keywords: Vec<String> = match field {
        Some(_) => words.map(str::to_string).collect(),
        None => args.split_whitespace().map(str::to_string).collect(),
    };
    Ok(Command::Find {
        field: field.unwrap_or(FindField::Name),
        keywords,
    })
}

fn parse_list(args: &str) -> Result<Command> {
    let words: Vec<&str> = args.split_whitespace().collect();
    let target = match words.as_slice() {
        [] => ListTarget::Unit(ListingUnit::Person),
        [word] if word.eq_ignore_ascii_case("marked") => ListTarget::Marked,
        [word] => ListTarget::Unit(word.parse().map_err(|_| invalid(list::USAGE))?),
        _ => return Err(invalid(list::USAGE)),
    };
    Ok(Command::List(target))
}

fn parse_customise(args: &str) -> Result<Command> {
    let map = tokenize(args, Prefix::PREFERENCES);
    if !map.preamble().is_empty() || !map.any_of(Prefix::PREFERENCES) {
        return Err(invalid(customise::USAGE));
    }
    Ok(Command::Customise {
        font_size: map
            .value(Prefix::FontSize)
            .map(str::parse::<FontSize>)
            .transpose()?,
        highlight: map.value(Prefix::Highlight).map(parse_switch).transpose()?,
    })
}

fn parse_help(args: &str) -> Result<Command> {
    let words: Vec<&str> = args.split_whitespace().collect();
    match words.as_slice() {
        [] => Ok(Command::Help(None)),
        [word] => COMMANDS
            .get_key_value(word.to_ascii_lowercase().as_str())
            .map(|(keyword, _)| Command::Help(Some(*keyword)))
            .ok_or_else(|| invalid(help::USAGE)),
        _ => Err(invalid(help::USAGE)),
    }
}
