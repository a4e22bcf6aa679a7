//! Prints the rolling thought log whenever it changes.

use std::io::{self, Write};

use aura_common::Event;
use aura_config::schema::ThoughtsConfig;
use tokio::sync::broadcast;

use super::shutdown_signal;
use crate::thoughts::{self, ThoughtLog};

fn print_log<W: Write>(log: &ThoughtLog, out: &mut W) -> io::Result<()> {
    writeln!(out, "[thoughts {}/{}]", log.len(), log.capacity())?;
    for thought in log.entries() {
        writeln!(out, "  \"{thought}\"")?;
    }
    out.flush()
}

/// Print the seeded log, then the whole log after each of `count` updates.
pub async fn run<W: Write>(
    config: &ThoughtsConfig,
    count: Option<u32>,
    mut shutdown: broadcast::Receiver<Event>,
    out: &mut W,
) -> io::Result<()> {
    let ticker = thoughts::start(config);
    let mut rx = ticker.subscribe();
    print_log(&rx.borrow_and_update(), out)?;

    let mut printed = 0u32;
    while count.map_or(true, |limit| printed < limit) {
        tokio::select! {
            changed = rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let log = rx.borrow_and_update().clone();
                print_log(&log, out)?;
                printed += 1;
            }
            _ = shutdown_signal(&mut shutdown) => break,
        }
    }
    ticker.stop();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use aura_common::EventBus;

    #[tokio::test(start_paused = true)]
    async fn prints_seed_then_updates() {
        let bus: EventBus = EventBus::new(4);
        let mut out = Vec::new();
        run(&ThoughtsConfig::default(), Some(3), bus.subscribe(), &mut out)
            .await
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        let headers: Vec<_> = text.lines().filter(|l| l.starts_with("[thoughts")).collect();
        assert_eq!(
            headers,
            vec!["[thoughts 3/5]", "[thoughts 4/5]", "[thoughts 5/5]", "[thoughts 5/5]"]
        );
    }
}
