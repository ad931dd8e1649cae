//! Calc command - Drive the calculator from the terminal

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use std::time::{Duration, Instant};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use calcnote::calculator::{keys, Dispatcher, DisplayFrame};

/// Execute the calc command
///
/// With a key sequence, it is dispatched once and the final frame printed.
/// Without, an interactive loop reads key lines from stdin.
pub fn execute(key_sequence: Option<&str>, error_delay: Duration) -> Result<()> {
    let mut dispatcher = Dispatcher::new(error_delay);

    if let Some(sequence) = key_sequence {
        let frame = run_sequence(&mut dispatcher, sequence, Instant::now());
        println!("{}", render(frame));
        return Ok(());
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("Failed to start event loop")?;

    runtime.block_on(interactive(dispatcher))
}

/// Dispatch every key in `sequence` and return the resulting frame
pub fn run_sequence<'a>(
    dispatcher: &'a mut Dispatcher,
    sequence: &str,
    now: Instant,
) -> &'a DisplayFrame {
    for command in keys::parse_line(sequence) {
        dispatcher.dispatch(command, now);
    }
    dispatcher.frame()
}

async fn interactive(dispatcher: Dispatcher) -> Result<()> {
    println!(
        "{}",
        "Type digits and + - * / = (or Enter, Backspace, Escape, c). 'quit' to exit.".dimmed()
    );
    println!("{}", render(dispatcher.frame()));

    run_loop(dispatcher, BufReader::new(tokio::io::stdin()), |frame| {
        println!("{}", render(frame))
    })
    .await
}

/// Read key lines from `input` until EOF or `quit`, emitting every new frame.
///
/// Time is read from tokio's clock so the error auto-clear follows the runtime.
async fn run_loop<R>(
    mut dispatcher: Dispatcher,
    input: R,
    mut emit: impl FnMut(&DisplayFrame),
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let now = || tokio::time::Instant::now().into_std();
    let mut lines = input.lines();

    loop {
        let deadline = dispatcher.deadline();
        let wake_at = deadline
            .map(tokio::time::Instant::from_std)
            .unwrap_or_else(tokio::time::Instant::now);

        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read input")? else {
                    break;
                };
                let line = line.trim();
                if matches!(line, "quit" | "exit") {
                    break;
                }
                if line.is_empty() {
                    continue;
                }

                emit(run_sequence(&mut dispatcher, line, now()));
            }

            _ = tokio::time::sleep_until(wake_at), if deadline.is_some() => {
                if let Some(frame) = dispatcher.tick(now()) {
                    emit(frame);
                }
            }
        }
    }

    Ok(())
}

/// Render a frame as two terminal lines
pub fn render(frame: &DisplayFrame) -> String {
    let current = if frame.is_error {
        frame.current.red().bold().to_string()
    } else {
        frame.current.bold().to_string()
    };

    format!("{}\n{}", frame.previous.dimmed(), current)
}
