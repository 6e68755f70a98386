//! Command handlers module for the MI5 terminal.
//!
//! This module defines handler functions for terminal commands, covering
//! directory navigation, file inspection, and the file move that drives the
//! mission.

use log::{debug, info};

use crate::error::StorageError;
use crate::mission;
use crate::navigate::change_directory;
use crate::protocol::responses::HELP;
use crate::protocol::{Command, CommandResult, CommandStatus, OutputLine, parse_command};
use crate::session::Session;
use crate::storage::operations::{list_directory, move_file, read_file};

/// Parses a raw input line and executes it against the session.
pub fn execute_line(session: &mut Session, raw: &str) -> CommandResult {
    let command = parse_command(raw);
    handle_command(session, &command)
}

/// Dispatches a parsed command to its corresponding handler.
///
/// # Arguments
///
/// * `session` - Mutable reference to the player session the command runs in.
/// * `command` - Reference to the parsed command enum.
///
/// # Returns
///
/// * `CommandResult` - Result of the command execution, including status and output lines.
pub fn handle_command(session: &mut Session, command: &Command) -> CommandResult {
    match command {
        Command::Empty => CommandResult::silent(),
        Command::Ls => handle_cmd_ls(session),
        Command::Pwd => handle_cmd_pwd(session),
        Command::Help => handle_cmd_help(),
        Command::Clear => handle_cmd_clear(),
        Command::Exit => handle_cmd_exit(),
        Command::Cd(target) => handle_cmd_cd(session, target.as_deref()),
        Command::Cat(target) => handle_cmd_cat(session, target.as_deref()),
        Command::Mv(source, dest) => handle_cmd_mv(session, source.as_deref(), dest.as_deref()),
        Command::Unknown(cmd) => handle_cmd_unknown(cmd),
    }
}

/// Handles the `ls` command: lists the current directory on one line.
fn handle_cmd_ls(session: &Session) -> CommandResult {
    match list_directory(session.fs(), session.current_path()) {
        Ok(result) if result.entries.is_empty() => CommandResult::silent(),
        Ok(result) => CommandResult::success(vec![OutputLine::data(result.entries.join("  "))]),
        Err(e) => CommandResult::failure(e.to_string(), format!("ls: {}", e)),
    }
}

fn handle_cmd_pwd(session: &Session) -> CommandResult {
    CommandResult::success(vec![OutputLine::data(session.current_path())])
}

fn handle_cmd_help() -> CommandResult {
    CommandResult::success(vec![OutputLine::info(HELP)])
}

fn handle_cmd_clear() -> CommandResult {
    CommandResult {
        status: CommandStatus::Clear,
        lines: Vec::new(),
    }
}

fn handle_cmd_exit() -> CommandResult {
    CommandResult {
        status: CommandStatus::CloseConnection,
        lines: vec![OutputLine::info("Connection terminated.")],
    }
}

/// Handles the `cd` command: changes the session's working directory.
///
/// Without a target this is a no-op. On failure the working directory is kept.
fn handle_cmd_cd(session: &mut Session, target: Option<&str>) -> CommandResult {
    let Some(target) = target else {
        return CommandResult::silent();
    };

    match change_directory(session.fs(), session.current_path(), target) {
        Ok(new_path) => {
            debug!("Changed directory {} -> {}", session.current_path(), new_path);
            session.set_current_path(new_path);
            CommandResult::silent()
        }
        Err(e) => {
            CommandResult::failure(e.to_string(), format!("cd: {}: No such directory", target))
        }
    }
}

/// Handles the `cat` command: prints a file's content.
fn handle_cmd_cat(session: &Session, target: Option<&str>) -> CommandResult {
    let Some(target) = target else {
        return CommandResult::failure("Missing filename", "Usage: cat [filename]");
    };

    match read_file(session.fs(), session.current_path(), target) {
        Ok(result) => CommandResult::success(vec![OutputLine::data(result.content)]),
        Err(e) => CommandResult::failure(e.to_string(), format!("cat: {}: No such file", target)),
    }
}

/// Handles the `mv` command: moves a file into a directory and checks the mission.
fn handle_cmd_mv(session: &mut Session, source: Option<&str>, dest: Option<&str>) -> CommandResult {
    let (Some(source), Some(dest)) = (source, dest) else {
        return CommandResult::failure(
            "Missing arguments",
            "Usage: mv [file] [destination_dir]",
        );
    };

    let current_path = session.current_path().to_string();
    let result = match move_file(session.fs_mut(), &current_path, source, dest) {
        Ok(result) => result,
        Err(e) => {
            let message = match &e {
                StorageError::NotFound(_) => {
                    format!("mv: cannot stat '{}': No such file", source)
                }
                StorageError::NotADirectory(_) => {
                    format!("mv: target '{}' is not a directory", dest)
                }
                StorageError::IsADirectory(_) => {
                    format!("mv: cannot move '{}': Is a directory", source)
                }
                StorageError::SamePath(path) => {
                    format!("mv: '{}' and '{}' are the same file", source, path)
                }
                StorageError::AlreadyExists(path) => {
                    format!("mv: cannot move '{}': '{}' already exists", source, path)
                }
                other => format!("mv: {}", other),
            };
            return CommandResult::failure(e.to_string(), message);
        }
    };

    let mut lines = vec![OutputLine::success(format!(
        "Moved {} to {}",
        result.file_name, result.dest_dir
    ))];

    if !session.is_decrypted() && mission::is_decrypted(session.fs()) {
        session.set_decrypted(true);
        info!("Mission completed");
        lines.push(OutputLine::success(""));
        lines.push(OutputLine::success(mission::DECRYPTED_BANNER));
        lines.push(OutputLine::success(mission::DECRYPTED_MESSAGE));
    }

    CommandResult::success(lines)
}

/// Handles unknown or unsupported commands: returns error line.
fn handle_cmd_unknown(cmd: &str) -> CommandResult {
    CommandResult::failure("Unknown command", format!("Command not found: {}", cmd))
}
