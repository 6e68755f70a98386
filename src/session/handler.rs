//! Session input loop
//!
//! Reads bounded command lines from a stream, runs them against a [`Session`],
//! and writes the rendered output back.

use log::info;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::config::ServerConfig;
use crate::middleware::logging::log_command;
use crate::protocol::responses::{CLEAR_SCREEN, GREETING, format_prompt, render_line, render_lines};
use crate::protocol::{Command, CommandStatus, OutputLine, parse_command, handle_command};
use crate::session::Session;

/// Per-session presentation and input limits.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub color: bool,
    pub greeting: bool,
    pub max_command_length: usize,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            color: true,
            greeting: true,
            max_command_length: 512,
        }
    }
}

impl From<&ServerConfig> for SessionOptions {
    fn from(config: &ServerConfig) -> Self {
        Self {
            color: config.color,
            greeting: config.greeting,
            max_command_length: config.max_command_length,
        }
    }
}

/// Drives one terminal session over a line-oriented stream.
///
/// - Writes the greeting and a prompt, then reads one command per line.
/// - Dispatches commands against a fresh [`Session`].
/// - Stops on end of input or an `exit` command.
///
/// Returns the number of non-blank commands executed.
pub async fn run_session<R, W>(
    mut reader: R,
    mut writer: W,
    options: &SessionOptions,
    peer: &str,
) -> std::io::Result<u64>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut session = Session::new();
    let mut buffer = Vec::with_capacity(options.max_command_length.min(4096));
    let mut executed = 0u64;

    if options.greeting {
        let greeting = render_line(&OutputLine::info(GREETING), options.color);
        writer.write_all(greeting.as_bytes()).await?;
    }
    write_prompt(&mut writer, &session, options).await?;

    loop {
        let line = match read_bounded_line(&mut reader, &mut buffer, options.max_command_length).await? {
            LineRead::Closed => {
                info!("Input closed by {}", peer);
                break;
            }
            LineRead::TooLong => {
                let message = render_line(&OutputLine::error("Command too long"), options.color);
                writer.write_all(message.as_bytes()).await?;
                write_prompt(&mut writer, &session, options).await?;
                continue;
            }
            LineRead::Line(line) => line,
        };

        let trimmed = line.trim_end_matches(['\r', '\n']);
        let command = parse_command(trimmed);
        if command != Command::Empty {
            log_command(peer, trimmed);
            executed += 1;
        }

        let result = handle_command(&mut session, &command);
        match result.status {
            CommandStatus::Clear => {
                writer.write_all(CLEAR_SCREEN.as_bytes()).await?;
            }
            CommandStatus::CloseConnection => {
                let output = render_lines(&result.lines, options.color);
                writer.write_all(output.as_bytes()).await?;
                writer.flush().await?;
                info!("{} requested to exit", peer);
                break;
            }
            CommandStatus::Success | CommandStatus::Failure(_) => {
                let output = render_lines(&result.lines, options.color);
                writer.write_all(output.as_bytes()).await?;
            }
        }

        write_prompt(&mut writer, &session, options).await?;
    }

    Ok(executed)
}

/// Outcome of reading one input line.
#[derive(Debug, PartialEq, Eq)]
enum LineRead {
    Line(String),
    TooLong,
    Closed,
}

/// Reads one `\n`-terminated line, holding at most `limit` bytes in memory.
///
/// The rest of an over-long line is consumed and discarded. Invalid UTF-8 is
/// decoded lossily so a bad byte can only fail the command it belongs to.
async fn read_bounded_line<R>(
    reader: &mut R,
    buffer: &mut Vec<u8>,
    limit: usize,
) -> std::io::Result<LineRead>
where
    R: AsyncBufRead + Unpin,
{
    buffer.clear();
    let mut total = 0usize;
    let mut saw_input = false;

    loop {
        let available = reader.fill_buf().await?;
        if available.is_empty() {
            break;
        }
        saw_input = true;

        let (chunk, done) = match available.iter().position(|&b| b == b'\n') {
            Some(idx) => (&available[..=idx], true),
            None => (available, false),
        };

        let room = (limit + 1).saturating_sub(buffer.len());
        buffer.extend_from_slice(&chunk[..chunk.len().min(room)]);
        total += chunk.len();

        let consumed = chunk.len();
        reader.consume(consumed);
        if done {
            break;
        }
    }

    if !saw_input {
        Ok(LineRead::Closed)
    } else if total > limit {
        Ok(LineRead::TooLong)
    } else {
        Ok(LineRead::Line(String::from_utf8_lossy(buffer).into_owned()))
    }
}

async fn write_prompt<W>(writer: &mut W, session: &Session, options: &SessionOptions) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let prompt = format_prompt(session.current_path(), options.color);
    writer.write_all(prompt.as_bytes()).await?;
    writer.flush().await
}
