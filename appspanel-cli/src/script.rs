//! Interaction scripts.
//!
//! One command per line; blank lines and `#` comments are ignored.
//!
//! ```text
//! check users_select_0     # tick a checkbox
//! uncheck users_select_0
//! click users_delete_1     # click any element
//! answer users yes         # answer a pending confirmation
//! reset users              # forget the cached row count
//! unload                   # leave the page
//! ```

use appspanel_lib::strategy::Answer;
use log::debug;

use crate::error::{CliError, Result, ScriptError};
use crate::session::Session;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Check(String),
    Uncheck(String),
    Click(String),
    Answer { table: String, answer: Answer },
    Reset(String),
    Unload,
}

impl Command {
    /// Parse one line. Returns `Ok(None)` for blank and comment lines.
    pub fn parse(line: &str) -> Result<Option<Self>, String> {
        let line = line.split_once('#').map_or(line, |(code, _)| code);
        let words: Vec<&str> = line.split_whitespace().collect();

        let command = match words.as_slice() {
            [] => return Ok(None),
            ["check", id] => Command::Check(id.to_string()),
            ["uncheck", id] => Command::Uncheck(id.to_string()),
            ["click", id] => Command::Click(id.to_string()),
            ["answer", table, answer] => Command::Answer {
                table: table.to_string(),
                answer: answer.parse()?,
            },
            ["reset", table] => Command::Reset(table.to_string()),
            ["unload"] => Command::Unload,
            [name, ..] => return Err(format!("unknown or malformed command '{name}'")),
        };
        Ok(Some(command))
    }

    /// Apply the command. Returns how many handlers or items it affected.
    pub fn apply(&self, session: &mut Session) -> Result<usize> {
        match self {
            Command::Check(id) => Ok(session.page_mut().set_checked(id, true)?),
            Command::Uncheck(id) => Ok(session.page_mut().set_checked(id, false)?),
            Command::Click(id) => Ok(session.page_mut().click(id)?),
            Command::Answer { table, answer } => session.answer(table, *answer),
            Command::Reset(table) => session.reset(table).map(|()| 0),
            Command::Unload => session.unload(),
        }
    }
}

/// Parse a whole script. Line numbers start at 1.
pub fn parse(script: &str) -> Result<Vec<(usize, Command)>, ScriptError> {
    let mut commands = Vec::new();
    for (i, line) in script.lines().enumerate() {
        let line_no = i + 1;
        if let Some(command) = Command::parse(line).map_err(|msg| ScriptError::new(line_no, msg))? {
            commands.push((line_no, command));
        }
    }
    Ok(commands)
}

/// Run `script` against `session`, stopping at the first failing line.
pub fn run(session: &mut Session, script: &str) -> Result<()> {
    for (line, command) in parse(script)? {
        let affected = command.apply(session).map_err(|e| match e {
            CliError::Script(e) => CliError::Script(e),
            other => CliError::Script(ScriptError::new(line, other.to_string())),
        })?;
        debug!("line {line}: {command:?} -> {affected}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            Command::parse("check users_select_0").unwrap(),
            Some(Command::Check("users_select_0".into()))
        );
        assert_eq!(
            Command::parse("  answer users Y  ").unwrap(),
            Some(Command::Answer {
                table: "users".into(),
                answer: Answer::Yes
            })
        );
        assert_eq!(Command::parse("unload").unwrap(), Some(Command::Unload));
    }

    #[test]
    fn test_blank_and_comments() {
        assert_eq!(Command::parse("").unwrap(), None);
        assert_eq!(Command::parse("   # nothing").unwrap(), None);
        assert_eq!(
            Command::parse("click users_row_0 # details").unwrap(),
            Some(Command::Click("users_row_0".into()))
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(Command::parse("check").is_err());
        assert!(Command::parse("answer users maybe").is_err());
        assert!(Command::parse("frobnicate x").is_err());
    }

    #[test]
    fn test_script_error_has_line() {
        let err = parse("check a\n\nbogus\n").unwrap_err();
        assert_eq!(err.line, 3);
    }
}
