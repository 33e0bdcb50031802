use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "lessonbook",
    bin_name = "lessonbook",
    version,
    about = "Address book and lesson timetable for the terminal",
    long_about = "Keeps persons and lessons in one book. Give a command to run it once, \
                  e.g. `lessonbook list module`, or start without one for an interactive session."
)]
pub struct Cli {
    /// Directory holding addressbook.json and preferences.json
    #[arg(long, env = "LESSONBOOK_HOME", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// A command line to run once instead of starting a session
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "COMMAND")]
    pub command: Vec<String>,
}

impl Cli {
    /// The trailing words as one command line, if any were given.
    pub fn one_shot(&self) -> Option<String> {
        if self.command.is_empty() {
            None
        } else {
            Some(self.command.join(" "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn trailing_words_form_one_command() {
        let cli = Cli::try_parse_from([
            "lessonbook",
            "--data-dir",
            "/tmp/book",
            "add",
            "n/John",
            "p/123",
        ])
        .unwrap();
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/book")));
        assert_eq!(cli.one_shot().as_deref(), Some("add n/John p/123"));
    }

    #[test]
    fn no_words_means_interactive() {
        let cli = Cli::try_parse_from(["lessonbook", "-v"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.one_shot(), None);
    }
}
