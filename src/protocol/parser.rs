//! Command parsing
//!
//! Turns a raw input line into a [`Command`].

use crate::protocol::Command;

/// Parses a raw line into the `Command` enum.
///
/// The command word is case-insensitive; arguments keep their case and any
/// arguments beyond the ones a command takes are ignored.
pub fn parse_command(raw: &str) -> Command {
    let mut parts = raw.split_whitespace();
    let cmd = match parts.next() {
        Some(word) => word.to_ascii_lowercase(),
        None => return Command::Empty,
    };
    let mut arg = || parts.next().map(str::to_string);

    match cmd.as_str() {
        "ls" => Command::Ls,
        "pwd" => Command::Pwd,
        "help" => Command::Help,
        "clear" => Command::Clear,
        "exit" | "quit" | "logout" => Command::Exit,
        "cd" => Command::Cd(arg()),
        "cat" => Command::Cat(arg()),
        "mv" => {
            let source = arg();
            let dest = arg();
            Command::Mv(source, dest)
        }
        _ => Command::Unknown(cmd),
    }
}
