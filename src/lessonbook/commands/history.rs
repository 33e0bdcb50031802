use crate::commands::{CmdMessage, CmdResult};

pub const USAGE: &str = "history: Lists the commands entered so far, most recent first.\n\
Example: history";

pub const MESSAGE_NO_HISTORY: &str = "You have not yet entered any commands.";

/// `entered` is in the order the commands were typed.
pub fn run(entered: &[String]) -> CmdResult {
    let text = if entered.is_empty() {
        MESSAGE_NO_HISTORY.to_string()
    } else {
        let lines: Vec<&str> = entered.iter().rev().map(String::as_str).collect();
        format!(
            "Entered commands (from most recent to earliest):\n{}",
            lines.join("\n")
        )
    };
    CmdResult::default().with_message(CmdMessage::info(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_most_recent_first() {
        let entered = vec!["list".to_string(), "view 1".to_string()];
        assert_eq!(
            run(&entered).messages[0].content,
            "Entered commands (from most recent to earliest):\nview 1\nlist"
        );
    }

    #[test]
    fn empty_history() {
        assert_eq!(run(&[]).messages[0].content, MESSAGE_NO_HISTORY);
    }
}
