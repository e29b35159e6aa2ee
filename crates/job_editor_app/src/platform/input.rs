//! Parsing of typed editor commands.

use job_editor_core::{ChangeParseError, DraftChange, JobEditorSection, JobField};
use thiserror::Error;

pub const HELP: &str = "\
Commands:
  set <field> <value>   change a field (lists: separate items with \\n)
  clear <field>         empty a field
  section <name>        open basic | location | salary | content
  width <cols>          resize the viewport
  go <row>              jump to an error from the summary
  draft                 save as draft
  submit                publish, or save changes to an existing job
  show                  redraw the editor
  help                  this text
  quit                  leave the editor";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Edit(DraftChange),
    Section(JobEditorSection),
    Width(u16),
    /// 1-based row of the error summary.
    Go(usize),
    Draft,
    Submit,
    Show,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("unknown command `{0}` (try `help`)")]
    UnknownCommand(String),
    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),
    #[error("unknown section `{0}`")]
    UnknownSection(String),
    #[error("`{0}` is not a valid number")]
    NotANumber(String),
    #[error(transparent)]
    Change(#[from] ChangeParseError),
}

/// Parses one input line. Blank lines yield `None`.
pub fn parse_command(line: &str) -> Result<Option<Command>, InputError> {
    let line = line.trim_end_matches(['\r', '\n']);
    let trimmed = line.trim_start();
    if trimmed.trim().is_empty() {
        return Ok(None);
    }
    let (verb, rest) = split_word(trimmed);

    let command = match verb.to_ascii_lowercase().as_str() {
        "set" => {
            let (field, value) = split_word(rest);
            if field.is_empty() {
                return Err(InputError::MissingArgument("set"));
            }
            let field: JobField = field.parse()?;
            Command::Edit(DraftChange::parse(field, value)?)
        }
        "clear" => {
            let field = required(rest, "clear")?;
            Command::Edit(DraftChange::cleared(field.parse()?))
        }
        "section" | "tab" => {
            let name = required(rest, "section")?;
            let section = JobEditorSection::parse(name)
                .ok_or_else(|| InputError::UnknownSection(name.to_string()))?;
            Command::Section(section)
        }
        "width" => Command::Width(number(required(rest, "width")?)?),
        "go" => Command::Go(number(required(rest, "go")?)?),
        "draft" => Command::Draft,
        "submit" | "publish" => Command::Submit,
        "show" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => return Err(InputError::UnknownCommand(verb.to_string())),
    };
    Ok(Some(command))
}

/// First whitespace-delimited word, and the rest with one separator removed.
fn split_word(text: &str) -> (&str, &str) {
    let text = text.trim_start();
    match text.find(char::is_whitespace) {
        Some(at) => {
            let rest = &text[at..];
            let mut chars = rest.chars();
            chars.next();
            (&text[..at], chars.as_str())
        }
        None => (text, ""),
    }
}

fn required<'a>(rest: &'a str, command: &'static str) -> Result<&'a str, InputError> {
    let arg = rest.trim();
    if arg.is_empty() {
        Err(InputError::MissingArgument(command))
    } else {
        Ok(arg)
    }
}

fn number<T: std::str::FromStr>(text: &str) -> Result<T, InputError> {
    text.parse()
        .map_err(|_| InputError::NotANumber(text.to_string()))
}
