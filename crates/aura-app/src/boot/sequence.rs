//! Boot sequence timing and phase transitions.

use std::time::Duration;

use aura_config::schema::AuraConfig;

use super::types::{BootPhase, BOOT_LOG};

/// Manages the boot sequence timing and phase transitions.
pub struct BootSequence {
    phase: BootPhase,
    shown: usize,
    step_interval: Duration,
    settle_delay: Duration,
}

impl BootSequence {
    /// Create a new boot sequence. If boot animation is disabled or fast_start
    /// is enabled in config, skips directly to [`BootPhase::Ready`].
    pub fn new(config: &AuraConfig) -> Self {
        let animation = &config.startup.boot_animation;
        let skip = !animation.enabled || config.startup.fast_start.enabled;

        Self {
            phase: if skip {
                BootPhase::Ready
            } else {
                BootPhase::Splash
            },
            shown: if skip { BOOT_LOG.len() } else { 0 },
            step_interval: Duration::from_millis(u64::from(animation.step_interval_ms)),
            settle_delay: Duration::from_millis(u64::from(animation.settle_delay_ms)),
        }
    }

    /// Skip the remaining animation immediately.
    pub fn skip(&mut self) {
        if self.phase != BootPhase::Ready {
            self.shown = BOOT_LOG.len();
            self.phase = BootPhase::Ready;
        }
    }

    /// Advance the boot sequence to `elapsed` since it started.
    ///
    /// Line `k` (1-based) appears at `k * step_interval`; the sequence is
    /// ready `settle_delay` after the last line.
    pub fn update_at(&mut self, elapsed: Duration) {
        if self.phase == BootPhase::Ready {
            return;
        }

        let steps = if self.step_interval.is_zero() {
            BOOT_LOG.len()
        } else {
            (elapsed.as_millis() / self.step_interval.as_millis()) as usize
        };
        self.shown = self.shown.max(steps.min(BOOT_LOG.len()));

        if self.shown == BOOT_LOG.len() {
            self.phase = if elapsed >= self.ready_after() {
                BootPhase::Ready
            } else {
                BootPhase::Initializing
            };
        }
    }

    /// Total time from start to [`BootPhase::Ready`].
    pub fn ready_after(&self) -> Duration {
        self.step_interval * BOOT_LOG.len() as u32 + self.settle_delay
    }

    pub fn step_interval(&self) -> Duration {
        self.step_interval
    }

    pub fn settle_delay(&self) -> Duration {
        self.settle_delay
    }

    /// Current phase.
    pub fn phase(&self) -> BootPhase {
        self.phase
    }

    /// Whether the boot sequence is complete.
    pub fn is_ready(&self) -> bool {
        self.phase == BootPhase::Ready
    }

    /// Boot log lines revealed so far.
    pub fn lines(&self) -> &'static [&'static str] {
        &BOOT_LOG[..self.shown]
    }

    /// Fraction of boot log lines revealed (0.0 to 1.0).
    pub fn progress(&self) -> f64 {
        self.shown as f64 / BOOT_LOG.len() as f64
    }
}
