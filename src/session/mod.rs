//! Interactive session loop.
//!
//! Reads one line at a time, hands it to the [`Dispatcher`] and writes the
//! reply. Each command runs to completion before the next line is read, so
//! the address book is only ever touched by one command at a time.

use crate::commands::dispatcher::FAREWELL;
use crate::commands::{Dispatcher, Reply};
use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::info;

/// Banner printed when the session starts.
pub const WELCOME: &str = "Welcome to the assistant bot!";

/// Run the interactive session until `close`/`exit` or end of input.
///
/// # Arguments
/// * `reader` - Source of command lines (stdin in the binary)
/// * `writer` - Destination for prompts and replies (stdout in the binary)
/// * `dispatcher` - Owns the address book for the whole session
/// * `prompt` - Written before every line is read
///
/// # Returns
/// An error only if reading or writing fails
pub async fn run_session<R, W>(
    mut reader: R,
    mut writer: W,
    dispatcher: &mut Dispatcher,
    prompt: &str,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    write_line(&mut writer, WELCOME).await?;
    info!("Session started");

    let mut buf = Vec::new();
    loop {
        writer.write_all(prompt.as_bytes()).await?;
        writer.flush().await?;

        let Some(line) = read_line(&mut reader, &mut buf).await? else {
            info!("Input closed, ending session");
            write_line(&mut writer, FAREWELL).await?;
            break;
        };

        match dispatcher.handle_line(&line) {
            None => continue,
            Some(Reply::Text(text)) => write_line(&mut writer, &text).await?,
            Some(Reply::Exit(text)) => {
                write_line(&mut writer, &text).await?;
                break;
            }
        }
    }

    let summary = dispatcher.metrics().summary();
    info!(
        commands = summary.commands_total,
        unknown = summary.unknown_commands_total,
        invalid_format = summary.invalid_format_total,
        not_found = summary.not_found_total,
        not_enough_args = summary.not_enough_args_total,
        avg_us = summary.command_duration_avg_us,
        contacts = dispatcher.address_book().len(),
        "Session finished"
    );

    Ok(())
}

/// Read one line, or `None` at end of input.
///
/// Bytes that are not valid UTF-8 become U+FFFD instead of failing the read,
/// so a garbled line is answered like any other unknown command. The line
/// terminator (`\n` or `\r\n`) is stripped.
async fn read_line<R>(reader: &mut R, buf: &mut Vec<u8>) -> Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
{
    buf.clear();
    if reader.read_until(b'\n', buf).await? == 0 {
        return Ok(None);
    }

    let text = String::from_utf8_lossy(buf);
    let line = text.strip_suffix('\n').unwrap_or(text.as_ref());
    let line = line.strip_suffix('\r').unwrap_or(line);
    Ok(Some(line.to_string()))
}

async fn write_line<W>(writer: &mut W, text: &str) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    writer.write_all(text.as_bytes()).await?;
    writer.write_all(b"\n").await?;
    writer.flush().await?;
    Ok(())
}
