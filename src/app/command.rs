use std::path::PathBuf;
use thiserror::Error;

/// Fits on one display line.
pub const HELP: &str = "open <path>|camera|capture|classify|reset|quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Upload(PathBuf),
    OpenCamera,
    Capture,
    Classify,
    Reset,
    Status,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("'{0}' needs a file path")]
    MissingPath(String),

    #[error("Unknown command '{0}'. Type 'help'.")]
    Unknown(String),
}

pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let command = match verb.to_lowercase().as_str() {
        "open" | "upload" => {
            if rest.is_empty() {
                return Err(CommandError::MissingPath(verb.to_string()));
            }
            Command::Upload(PathBuf::from(unquote(rest)))
        }
        "camera" => Command::OpenCamera,
        "capture" | "snap" => Command::Capture,
        "classify" => Command::Classify,
        "reset" | "clear" => Command::Reset,
        "status" => Command::Status,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => return Err(CommandError::Unknown(verb.to_string())),
    };

    Ok(Some(command))
}

fn unquote(text: &str) -> &str {
    text.strip_prefix('"')
        .and_then(|t| t.strip_suffix('"'))
        .unwrap_or(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands() {
        assert_eq!(parse_command("camera"), Ok(Some(Command::OpenCamera)));
        assert_eq!(parse_command("  CAPTURE "), Ok(Some(Command::Capture)));
        assert_eq!(parse_command("classify"), Ok(Some(Command::Classify)));
        assert_eq!(parse_command("reset"), Ok(Some(Command::Reset)));
        assert_eq!(parse_command("quit"), Ok(Some(Command::Quit)));
        assert_eq!(parse_command(""), Ok(None));
    }

    #[test]
    fn parses_paths_with_spaces_and_quotes() {
        assert_eq!(
            parse_command("open photos/me and you.jpg"),
            Ok(Some(Command::Upload(PathBuf::from("photos/me and you.jpg"))))
        );
        assert_eq!(
            parse_command("upload \"a b.png\""),
            Ok(Some(Command::Upload(PathBuf::from("a b.png"))))
        );
    }

    #[test]
    fn help_fits_on_the_display() {
        assert!(HELP.chars().count() <= crate::device_display::interface::DISPLAY_WIDTH);
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(
            parse_command("open"),
            Err(CommandError::MissingPath("open".to_string()))
        );
        assert_eq!(
            parse_command("dance now"),
            Err(CommandError::Unknown("dance".to_string()))
        );
    }
}
