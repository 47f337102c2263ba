use import_core::{Msg, WizardStep};
use thiserror::Error;

pub const HELP: &str = "\
commands:
  url <row> <text>    set the external URL of a row (then leaves the field)
  name <row> <text>   set the file name of a row
  extid <row> <text>  set the external id of a row
  add                 append a blank row
  rm <row>            delete a row
  next                continue to the next step
  back                return to the previous step
  show                print the current step again
  help                print this help
  quit                exit";

/// One line of console input. Row numbers are 1-based as displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    EditUrl { index: usize, value: String },
    EditName { index: usize, value: String },
    EditExternalId { index: usize, value: String },
    Add,
    Remove { index: usize },
    Next,
    Back,
    Show,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command {0:?}; type `help` for a list")]
    Unknown(String),
    #[error("`{0}` needs a row number")]
    MissingRow(&'static str),
    #[error("{0:?} is not a row number")]
    BadRow(String),
}

pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = split_word(line);

    let command = match word {
        "url" => {
            let (index, value) = row_and_text("url", rest)?;
            Command::EditUrl { index, value }
        }
        "name" => {
            let (index, value) = row_and_text("name", rest)?;
            Command::EditName { index, value }
        }
        "extid" => {
            let (index, value) = row_and_text("extid", rest)?;
            Command::EditExternalId { index, value }
        }
        "add" => Command::Add,
        "rm" => {
            let (index, _) = row_and_text("rm", rest)?;
            Command::Remove { index }
        }
        "next" => Command::Next,
        "back" => Command::Back,
        "show" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}

impl Command {
    /// Messages this command produces while `step` is active.
    pub fn into_msgs(self, step: WizardStep) -> Vec<Msg> {
        match self {
            // Entering a URL on the console is typing followed by leaving the field.
            Command::EditUrl { index, value } => vec![
                Msg::UrlEdited { index, value },
                Msg::UrlBlurred { index },
            ],
            Command::EditName { index, value } => vec![Msg::NameEdited { index, value }],
            Command::EditExternalId { index, value } => {
                vec![Msg::ExternalIdEdited { index, value }]
            }
            Command::Add => vec![Msg::AddRowClicked],
            Command::Remove { index } => vec![Msg::RemoveRowClicked { index }],
            Command::Next => match step {
                WizardStep::CollectSources => vec![Msg::NextClicked],
                _ => vec![Msg::StepForward],
            },
            Command::Back => vec![Msg::StepBack],
            Command::Show | Command::Help | Command::Quit => Vec::new(),
        }
    }
}

fn split_word(input: &str) -> (&str, &str) {
    match input.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start()),
        None => (input, ""),
    }
}

fn row_and_text(command: &'static str, rest: &str) -> Result<(usize, String), CommandError> {
    let (row, text) = split_word(rest);
    if row.is_empty() {
        return Err(CommandError::MissingRow(command));
    }
    let index = row
        .parse::<usize>()
        .ok()
        .and_then(|row| row.checked_sub(1))
        .ok_or_else(|| CommandError::BadRow(row.to_string()))?;
    Ok((index, text.to_string()))
}
