//! The interactive desk session.
//!
//! Reads one [`Command`] per line, turns it into a client call, then asks the
//! desk for a fresh view and redraws it. Numbers typed by the user (option 2,
//! line 1) are resolved against the view that was on screen when they typed.

use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, warn};

use super::command::{Command, HELP};
use crate::clients::DeskClient;
use crate::desk_actor::{DeskError, KeyPress};
use crate::view::DeskView;

// Move cursor to top-left and clear screen
const CLEAR_SCREEN: &str = "\x1B[H\x1B[0J";

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Terminal I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Desk(#[from] DeskError),

    #[error("Cannot encode view: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy)]
pub struct SessionOptions {
    /// Prefix every redraw with the ANSI clear-screen sequence.
    pub clear_screen: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self { clear_screen: true }
    }
}

/// Runs the session until `quit` or end of input.
pub async fn run_session<R, W>(
    client: &DeskClient,
    input: R,
    output: &mut W,
    options: SessionOptions,
) -> Result<(), SessionError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    info!("Session started");
    let mut lines = input.lines();
    let mut view = client.view().await?;
    draw(output, &view, options, None).await?;

    while let Some(line) = lines.next_line().await? {
        let notice = match Command::parse(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => Some(HELP.to_string()),
            Ok(Command::Json) => {
                let json = serde_json::to_string_pretty(&view)?;
                output.write_all(json.as_bytes()).await?;
                output.write_all(b"\n> ").await?;
                output.flush().await?;
                continue;
            }
            Ok(command) => {
                debug!(%command, "Command");
                execute(client, &view, command).await?
            }
            Err(e) => {
                warn!(error = %e, "Rejected input");
                Some(e.to_string())
            }
        };

        view = client.view().await?;
        draw(output, &view, options, notice.as_deref()).await?;
    }

    output.write_all(b"\n").await?;
    output.flush().await?;
    info!("Session ended");
    Ok(())
}

/// Performs one command. Returns a notice to show under the screen, if any.
async fn execute(
    client: &DeskClient,
    view: &DeskView,
    command: Command,
) -> Result<Option<String>, DeskError> {
    match command {
        Command::Name(text) => {
            client.update_name_draft(text).await?;
        }
        Command::Enter => {
            client.press_name_key(KeyPress::Enter).await?;
        }
        Command::Set => {
            client.confirm_name().await?;
        }
        Command::Select(None) => {
            client.select_item(None).await?;
        }
        Command::Select(Some(n)) => match view.option_key(n) {
            Some(key) => {
                client.select_item(Some(key.clone())).await?;
            }
            None => return Ok(Some(format!("There is no item {}", n))),
        },
        Command::Qty(text) => {
            client.set_quantity(&text).await?;
        }
        Command::Add => {
            if !view.add_enabled {
                return Ok(Some("Add to Order is disabled until an item is selected".into()));
            }
            client.add_to_order().await?;
        }
        Command::Remove(n) => match view.line_id(n) {
            Some(id) => {
                client.remove_line(id).await?;
            }
            None => return Ok(Some(format!("There is no order line {}", n))),
        },
        Command::Show | Command::Json | Command::Help | Command::Quit => {}
    }
    Ok(None)
}

async fn draw<W>(
    output: &mut W,
    view: &DeskView,
    options: SessionOptions,
    notice: Option<&str>,
) -> Result<(), std::io::Error>
where
    W: AsyncWrite + Unpin,
{
    let mut screen = String::new();
    if options.clear_screen {
        screen.push_str(CLEAR_SCREEN);
    }
    screen.push_str(&view.to_string());
    if let Some(notice) = notice {
        screen.push('\n');
        screen.push_str(notice);
        screen.push('\n');
    }
    screen.push_str("\n> ");

    output.write_all(screen.as_bytes()).await?;
    output.flush().await
}
