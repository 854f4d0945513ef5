//! Line commands typed on stdin, mapped onto reader input events.

use pacer_core::input::InputEvent;
use thiserror::Error;

pub const HELP: &str = "\
commands:
  <enter> | p            play / pause
  wpm <n>                set words per minute
  + | -                  step words per minute
  reset                  clear progress, keep sections
  clear                  drop every section
  edit <i> <text>        replace section text (\\n splits)
  paste <i> <at> <text>  insert text at char offset
  split <i> <offset>     split at the word boundary at or after offset
  click <i> <col> <row>  split where the listing shows column/row
  merge <i>              fold section into the previous one
  help | quit";

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Event(InputEvent),
    Help,
    Quit,
}

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum CommandError {
    #[error("unknown command `{0}` (try `help`)")]
    Unknown(String),
    #[error("`{command}` expects {expected}")]
    Usage {
        command: &'static str,
        expected: &'static str,
    },
    #[error("`{0}` is not a valid number")]
    BadNumber(String),
}

pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let line = line.trim_start().trim_end_matches(['\r', '\n']);
    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim_start()),
        None => (line, ""),
    };

    let event = match head {
        "" | "p" | "play" | "pause" => InputEvent::TogglePlay,
        "wpm" => InputEvent::SetWpm(rest.into()),
        "+" | "faster" => InputEvent::WpmUp,
        "-" | "slower" => InputEvent::WpmDown,
        "reset" => InputEvent::Reset,
        "clear" => InputEvent::Clear,
        "edit" => {
            let (section, text) = take_number(rest, "edit", "<i> <text>")?;
            InputEvent::Edit {
                section,
                text: unescape(text),
            }
        }
        "paste" => {
            let (section, rest) = take_number(rest, "paste", "<i> <at> <text>")?;
            let (at, payload) = take_number(rest, "paste", "<i> <at> <text>")?;
            InputEvent::Paste {
                section,
                at,
                payload: unescape(payload),
            }
        }
        "split" => {
            let (section, rest) = take_number(rest, "split", "<i> <offset>")?;
            let (offset, _) = take_number(rest, "split", "<i> <offset>")?;
            InputEvent::SplitAt { section, offset }
        }
        "click" => {
            let (section, rest) = take_number(rest, "click", "<i> <col> <row>")?;
            let (x, rest) = take_number(rest, "click", "<i> <col> <row>")?;
            let (y, _) = take_number(rest, "click", "<i> <col> <row>")?;
            InputEvent::PointerSplit { section, x, y }
        }
        "merge" => {
            let (section, _) = take_number(rest, "merge", "<i>")?;
            InputEvent::MergeUp { section }
        }
        "help" | "?" => return Ok(Command::Help),
        "q" | "quit" | "exit" => return Ok(Command::Quit),
        other => return Err(CommandError::Unknown(other.into())),
    };
    Ok(Command::Event(event))
}

fn take_number<'a, T: core::str::FromStr>(
    input: &'a str,
    command: &'static str,
    expected: &'static str,
) -> Result<(T, &'a str), CommandError> {
    let input = input.trim_start();
    let (token, rest) = input
        .split_once(char::is_whitespace)
        .unwrap_or((input, ""));
    if token.is_empty() {
        return Err(CommandError::Usage { command, expected });
    }
    let value = token
        .parse()
        .map_err(|_| CommandError::BadNumber(token.into()))?;
    Ok((value, rest))
}

/// `\n` becomes a newline and `\\` a backslash; anything else is kept.
fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
