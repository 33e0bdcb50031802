use crate::commands::{CmdMessage, CmdResult};
use crate::parser;

pub const USAGE: &str = "help: Shows the available commands, or how to use one of them.\n\
Parameters: [KEYWORD]\n\
Example: help add";

pub fn run(keyword: Option<&'static str>) -> CmdResult {
    let text = match keyword.and_then(parser::usage_of) {
        Some(usage) => usage.to_string(),
        None => format!(
            "Available commands: {}\nType `help KEYWORD` to see how a command is used.",
            parser::keywords().collect::<Vec<_>>().join(", ")
        ),
    };
    CmdResult::default().with_message(CmdMessage::info(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;

    #[test]
    fn overview_names_every_keyword() {
        let result = run(None);
        let text = &result.messages[0].content;
        for keyword in ["add", "bookmark", "customise", "list", "undo", "view"] {
            assert!(text.contains(keyword), "missing {keyword}");
        }
    }

    #[test]
    fn keyword_shows_its_usage() {
        assert_eq!(run(Some("add")).messages[0].content, add::USAGE);
    }
}
