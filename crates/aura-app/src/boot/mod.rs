//! Boot sequence manager.
//!
//! Controls the startup phases: the paced boot log, the settle delay,
//! and transition to the ready state.

mod sequence;
mod types;

pub use sequence::BootSequence;
pub use types::{BootPhase, BOOT_LOG};

use std::io::Write;

/// Play the boot log to `out`, one line per step, then wait out the settle
/// delay. Returns immediately if the sequence already starts ready.
pub async fn play<W: Write>(boot: &mut BootSequence, out: &mut W) -> std::io::Result<()> {
    let mut printed = boot.lines().len();
    let mut elapsed = std::time::Duration::ZERO;

    while !boot.is_ready() {
        let step = if printed < BOOT_LOG.len() {
            boot.step_interval()
        } else {
            boot.settle_delay()
        };
        tokio::time::sleep(step).await;
        elapsed += step;
        boot.update_at(elapsed);

        for line in &boot.lines()[printed..] {
            writeln!(out, "[{:>3.0}%] {line}", boot.progress() * 100.0)?;
        }
        printed = boot.lines().len();
        out.flush()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn default_config() -> aura_config::schema::AuraConfig {
        aura_config::schema::AuraConfig::default()
    }

    fn animated() -> BootSequence {
        let mut config = default_config();
        config.startup.boot_animation.enabled = true;
        config.startup.fast_start.enabled = false;
        BootSequence::new(&config)
    }

    #[test]
    fn fast_start_skips_to_ready() {
        let mut config = default_config();
        config.startup.fast_start.enabled = true;
        let boot = BootSequence::new(&config);
        assert!(boot.is_ready());
        assert_eq!(boot.phase(), BootPhase::Ready);
    }

    #[test]
    fn animation_disabled_skips_to_ready() {
        let mut config = default_config();
        config.startup.boot_animation.enabled = false;
        let boot = BootSequence::new(&config);
        assert!(boot.is_ready());
        assert!((boot.progress() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn skip_transitions_to_ready() {
        let mut boot = animated();
        assert_eq!(boot.phase(), BootPhase::Splash);

        boot.skip();
        assert!(boot.is_ready());
        assert_eq!(boot.lines().len(), BOOT_LOG.len());
    }

    #[test]
    fn progress_starts_at_zero() {
        let boot = animated();
        assert_eq!(boot.progress(), 0.0);
        assert!(boot.lines().is_empty());
    }

    #[test]
    fn one_line_per_step_interval() {
        let mut boot = animated();
        boot.update_at(Duration::from_millis(399));
        assert!(boot.lines().is_empty());

        boot.update_at(Duration::from_millis(400));
        assert_eq!(boot.lines(), &BOOT_LOG[..1]);

        boot.update_at(Duration::from_millis(1250));
        assert_eq!(boot.lines().len(), 3);
        assert!((boot.progress() - 3.0 / 9.0).abs() < 1e-9);
        assert_eq!(boot.phase(), BootPhase::Splash);
    }

    #[test]
    fn settles_before_ready() {
        let mut boot = animated();
        boot.update_at(Duration::from_millis(3600));
        assert_eq!(boot.lines().len(), 9);
        assert_eq!(boot.phase(), BootPhase::Initializing);

        boot.update_at(Duration::from_millis(4599));
        assert_eq!(boot.phase(), BootPhase::Initializing);

        boot.update_at(Duration::from_millis(4600));
        assert!(boot.is_ready());
        assert_eq!(boot.ready_after(), Duration::from_millis(4600));
    }

    #[test]
    fn last_line_welcomes_administrator() {
        assert_eq!(BOOT_LOG.len(), 9);
        assert_eq!(BOOT_LOG[8], "Welcome, Administrator.");
    }

    #[tokio::test(start_paused = true)]
    async fn play_prints_every_line_and_finishes_ready() {
        let mut boot = animated();
        let mut out = Vec::new();
        play(&mut boot, &mut out).await.unwrap();

        assert!(boot.is_ready());
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 9);
        assert!(text.lines().next().unwrap().contains("Initializing AuraOS Kernel"));
        assert!(text.lines().last().unwrap().starts_with("[100%]"));
    }

    #[tokio::test]
    async fn play_is_silent_when_already_ready() {
        let mut config = default_config();
        config.startup.fast_start.enabled = true;
        let mut boot = BootSequence::new(&config);
        let mut out = Vec::new();
        play(&mut boot, &mut out).await.unwrap();
        assert!(out.is_empty());
    }
}
