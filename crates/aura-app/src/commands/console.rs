//! Terminal front end for the nexus [`Console`].

use std::io::{self, Write};

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::warn;

use super::{drive, shutdown_signal, AppContext};
use crate::console::{Console, ConsoleEvent, PROMPT};

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Execute one input line, printing console output as it is produced.
pub async fn execute_line<W: Write>(console: &Console, line: &str, out: &mut W) -> io::Result<()> {
    let mut rx = console.subscribe();
    let result = drive(console.execute(line), &mut rx, |event| match event {
        ConsoleEvent::Line(line) => {
            writeln!(out, "{line}")?;
            out.flush()
        }
        ConsoleEvent::Cleared => write!(out, "{CLEAR_SCREEN}"),
    })
    .await?;

    if let Err(e) = result {
        warn!("console rejected input: {e}");
        writeln!(out, "! {e}")?;
    }
    Ok(())
}

/// Read console commands from stdin until EOF or shutdown.
pub async fn run(ctx: &AppContext) -> aura_common::Result<()> {
    let mut out = io::stdout();
    let console = Console::new();
    for line in console.history() {
        writeln!(out, "{line}")?;
    }

    let mut shutdown = ctx.events.subscribe();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        write!(out, "{PROMPT} ")?;
        out.flush()?;
        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = shutdown_signal(&mut shutdown) => None,
        };
        let Some(line) = line else { break };
        execute_line(&console, &line, &mut out).await?;
    }
    writeln!(out)?;
    Ok(())
}
