//! Subcommand runners and the state they share.

pub mod chat;
pub mod config;
pub mod console;
pub mod dashboard;
pub mod thoughts;

use std::future::Future;
use std::io;
use std::path::PathBuf;

use aura_common::{Event, EventBus};
use aura_config::AuraConfig;
use tokio::sync::broadcast::{self, error::RecvError};
use tracing::debug;

/// Everything a subcommand needs from startup.
pub struct AppContext {
    pub config: AuraConfig,
    pub config_path: PathBuf,
    pub events: EventBus,
    /// Play the boot animation before interactive commands.
    pub boot: bool,
}

/// Resolve once `Shutdown` is published or the bus is closed.
pub async fn shutdown_signal(rx: &mut broadcast::Receiver<Event>) {
    loop {
        match rx.recv().await {
            Ok(Event::Shutdown) | Err(RecvError::Closed) => return,
            Ok(_) | Err(RecvError::Lagged(_)) => continue,
        }
    }
}

/// Await `fut` while rendering events from `rx` as they arrive, then render
/// whatever was published before the future finished.
pub(crate) async fn drive<F, E>(
    fut: F,
    rx: &mut broadcast::Receiver<E>,
    mut render: impl FnMut(E) -> io::Result<()>,
) -> io::Result<F::Output>
where
    F: Future,
    E: Clone,
{
    tokio::pin!(fut);
    let output = loop {
        tokio::select! {
            output = &mut fut => break output,
            event = rx.recv() => match event {
                Ok(event) => render(event)?,
                Err(RecvError::Lagged(skipped)) => debug!(skipped, "renderer lagged"),
                Err(RecvError::Closed) => break (&mut fut).await,
            },
        }
    };
    while let Ok(event) = rx.try_recv() {
        render(event)?;
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn shutdown_signal_skips_other_events() {
        let bus: EventBus = EventBus::new(8);
        let mut rx = bus.subscribe();
        bus.publish(Event::ConfigSaved);
        bus.publish(Event::Notification("hola".into()));
        bus.publish(Event::Shutdown);
        shutdown_signal(&mut rx).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn drive_renders_events_published_by_the_future() {
        let bus: EventBus<u32> = EventBus::new(8);
        let mut rx = bus.subscribe();
        let mut seen = Vec::new();

        let output = drive(
            async {
                bus.publish(1);
                tokio::task::yield_now().await;
                bus.publish(2);
                "done"
            },
            &mut rx,
            |n| {
                seen.push(n);
                Ok(())
            },
        )
        .await
        .unwrap();

        assert_eq!(output, "done");
        assert_eq!(seen, vec![1, 2]);
    }
}
