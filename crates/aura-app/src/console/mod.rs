//! Nexus command console: canned commands over a line history.
//!
//! Commands append their echo and response to the history and publish each
//! new line on the console's event bus. Scans reveal their lines one at a
//! time and hold the console busy until they finish.

mod command;


pub use command::{echo, ConsoleCommand, BANNER, PROMPT};

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use aura_common::{AuraError, EventBus};
use tokio::sync::broadcast;
use tracing::debug;

use command::{SCAN_INTRO, SCAN_STEPS};

/// Delay between revealed scan lines.
pub const SCAN_STEP: Duration = Duration::from_millis(600);

const EVENT_CAPACITY: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleEvent {
    Line(String),
    Cleared,
}

pub struct Console {
    history: Mutex<Vec<String>>,
    busy: AtomicBool,
    scan_step: Duration,
    events: EventBus<ConsoleEvent>,
}

impl Console {
    pub fn new() -> Self {
        Self {
            history: Mutex::new(BANNER.iter().map(|l| l.to_string()).collect()),
            busy: AtomicBool::new(false),
            scan_step: SCAN_STEP,
            events: EventBus::new(EVENT_CAPACITY),
        }
    }

    pub fn history(&self) -> Vec<String> {
        self.lock_history().clone()
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ConsoleEvent> {
        self.events.subscribe()
    }

    /// Run one line of input. Blank input is ignored; input while a scan is
    /// running is rejected.
    pub async fn execute(&self, input: &str) -> aura_common::Result<()> {
        let Some(command) = ConsoleCommand::parse(input) else {
            return Ok(());
        };
        let _guard = ScanGuard::acquire(&self.busy)?;
        debug!(?command, "console command");

        match command {
            ConsoleCommand::Clear => {
                self.lock_history().clear();
                self.events.publish(ConsoleEvent::Cleared);
            }
            ConsoleCommand::Scan => {
                self.push_lines(std::iter::once(echo(input)));
                self.push_lines(SCAN_INTRO.iter().map(|l| l.to_string()));
                for step in SCAN_STEPS {
                    tokio::time::sleep(self.scan_step).await;
                    self.push_lines(std::iter::once(step.to_string()));
                }
            }
            other => {
                self.push_lines(std::iter::once(echo(input)).chain(other.response()));
            }
        }
        Ok(())
    }

    fn push_lines(&self, lines: impl IntoIterator<Item = String>) {
        for line in lines {
            self.lock_history().push(line.clone());
            self.events.publish(ConsoleEvent::Line(line));
        }
    }

    fn lock_history(&self) -> MutexGuard<'_, Vec<String>> {
        self.history.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

/// Holds the console busy for one command; released on drop.
struct ScanGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> ScanGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> aura_common::Result<Self> {
        flag.compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .map_err(|_| AuraError::Console("scan in progress".into()))?;
        Ok(Self { flag })
    }
}

impl Drop for ScanGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
