use std::sync::Arc;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

use crate::{
    adapters::terminal::{
        commands::{ConsoleCommand, HELP_TEXT},
        view::{render, render_json},
    },
    infra::config::OutputFormat,
    use_cases::waitlist::{FetchOutcome, WaitlistController},
};

/// Interactive loop: mounts the controller, re-renders on every state change
/// and turns input lines into fetch triggers until `quit` or end of input.
///
/// Fetches run as their own tasks, so a refresh typed while one is in flight
/// starts a second request; the controller keeps whichever was issued last.
pub async fn run_console<R, W>(
    controller: Arc<WaitlistController>,
    input: R,
    mut output: W,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut updates = controller.subscribe();
    let mut lines = input.lines();

    tokio::spawn({
        let controller = controller.clone();
        async move {
            controller.mount().await;
        }
    });

    info!("Waitlist console started");

    loop {
        tokio::select! {
            // Pending frames go out before the next command is handled.
            biased;

            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let frame = render(&updates.borrow_and_update());
                write_frame(&mut output, &frame).await?;
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    debug!("Input closed");
                    break;
                };

                let Ok(command) = line.parse::<ConsoleCommand>();
                match command {
                    ConsoleCommand::Quit => break,
                    command if command.triggers_fetch() => {
                        debug!(?command, "Refetch requested");
                        let controller = controller.clone();
                        tokio::spawn(async move {
                            controller.fetch_waitlist().await;
                        });
                    }
                    ConsoleCommand::Help => write_frame(&mut output, HELP_TEXT).await?,
                    ConsoleCommand::Unknown(raw) => {
                        let hint = format!("Unknown command `{raw}`. {HELP_TEXT}");
                        write_frame(&mut output, &hint).await?;
                    }
                    _ => {}
                }
            }
        }
    }

    info!("Waitlist console stopped");
    Ok(())
}

/// Mounts, prints the settled state once and reports whether the fetch worked.
pub async fn run_once<W>(
    controller: &WaitlistController,
    format: OutputFormat,
    mut output: W,
) -> anyhow::Result<bool>
where
    W: AsyncWrite + Unpin,
{
    let outcome = controller.mount().await;
    let state = controller.state();

    let frame = match format {
        OutputFormat::Text => render(&state),
        OutputFormat::Json => render_json(&state)?,
    };
    write_frame(&mut output, &frame).await?;

    Ok(matches!(outcome, Some(FetchOutcome::Loaded { .. })))
}

async fn write_frame<W>(output: &mut W, frame: &str) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    output.write_all(frame.as_bytes()).await?;
    if !frame.ends_with('\n') {
        output.write_all(b"\n").await?;
    }
    output.flush().await
}
