//! Prints the simulated metrics on every tick.

use std::io::{self, Write};

use aura_common::Event;
use aura_config::schema::MetricsConfig;
use tokio::sync::broadcast;

use super::shutdown_signal;
use crate::metrics;

/// Print the initial reading, then one line per tick until `ticks` updates
/// have been printed or shutdown is signalled.
pub async fn run<W: Write>(
    config: &MetricsConfig,
    ticks: Option<u32>,
    mut shutdown: broadcast::Receiver<Event>,
    out: &mut W,
) -> io::Result<()> {
    let ticker = metrics::start(config);
    let mut rx = ticker.subscribe();
    writeln!(out, "{}", rx.borrow_and_update().render())?;

    let mut printed = 0u32;
    while ticks.map_or(true, |limit| printed < limit) {
        tokio::select! {
            changed = rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let line = rx.borrow_and_update().render();
                writeln!(out, "{line}")?;
                out.flush()?;
                printed += 1;
            }
            _ = shutdown_signal(&mut shutdown) => break,
        }
    }
    ticker.stop();
    Ok(())
}
