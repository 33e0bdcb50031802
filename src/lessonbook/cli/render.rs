//! Terminal output: command messages and the active list.
//!
//! Row text is built as plain strings so it can be tested; styling is applied
//! only when printing.

use super::styles::{HEADING, INDEX, KEYWORD, SELECTED};
use colored::Colorize;
use lessonbook::api::{CmdMessage, MessageLevel};
use lessonbook::index::DisplayIndex;
use lessonbook::listing::ListingUnit;
use lessonbook::model::{Lesson, Person};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;

/// How the active list should be shown, as changed by UI updates.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    pub sorted: bool,
    pub selected: Option<DisplayIndex>,
    pub highlight: bool,
}

/// One rendered row, keeping the index the row has in the model's list so
/// commands typed after a sort still address the right record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub index: usize,
    pub text: String,
}

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
        }
    }
}

pub fn print_error(error: &lessonbook::error::AppError) {
    eprintln!("{}", error.to_string().red());
}

pub fn person_rows(persons: &[Person], sorted: bool) -> Vec<Row> {
    let mut indexed: Vec<(usize, &Person)> =
        persons.iter().enumerate().map(|(i, p)| (i + 1, p)).collect();
    if sorted {
        indexed.sort_by_key(|(_, p)| p.name.as_str().to_lowercase());
    }
    indexed
        .into_iter()
        .map(|(index, person)| Row {
            index,
            text: person_line(person),
        })
        .collect()
}

pub fn lesson_rows(lessons: &[Lesson], sorted: bool) -> Vec<Row> {
    let mut indexed: Vec<(usize, &Lesson)> =
        lessons.iter().enumerate().map(|(i, l)| (i + 1, l)).collect();
    if sorted {
        indexed.sort_by(|(_, a), (_, b)| {
            a.code
                .cmp(&b.code)
                .then_with(|| a.location.cmp(&b.location))
        });
    }
    indexed
        .into_iter()
        .map(|(index, lesson)| Row {
            index,
            text: lesson_line(lesson),
        })
        .collect()
}

fn person_line(person: &Person) -> String {
    let tags: String = person.tags.iter().map(|t| format!("[{}]", t)).collect();
    let line = format!(
        "{}  {}  {}  {}",
        person.name, person.phone, person.email, person.address
    );
    if tags.is_empty() {
        line
    } else {
        format!("{}  {}", line, tags)
    }
}

fn lesson_line(lesson: &Lesson) -> String {
    format!(
        "{} {} G{}  {}  {}",
        lesson.code, lesson.class_type, lesson.group, lesson.location, lesson.time_slot
    )
}

pub fn print_list(unit: ListingUnit, rows: &[Row], state: &ViewState) {
    let unit_name = unit.to_string();
    let unit_display = if state.highlight {
        KEYWORD.apply_to(unit_name).to_string()
    } else {
        unit_name
    };
    println!("{} {}", HEADING.apply_to("Listing:"), unit_display);

    if rows.is_empty() {
        println!("  Nothing to show.");
        return;
    }

    for row in rows {
        let idx = format!("{:>3}. ", row.index);
        let available = LINE_WIDTH.saturating_sub(idx.width());
        let text = truncate_to_width(&row.text, available);
        let is_selected = state.selected.map(|s| s.one_based()) == Some(row.index);
        if is_selected {
            println!("{}{}", INDEX.apply_to(idx), SELECTED.apply_to(text));
        } else {
            println!("{}{}", INDEX.apply_to(idx), text);
        }
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}
