//! Simulated system metrics: bounded random walks for CPU and RAM.

use std::ops::RangeInclusive;
use std::time::Duration;

use aura_config::schema::MetricsConfig;
use rand::Rng;

pub const CPU_BOUNDS: RangeInclusive<f64> = 5.0..=95.0;
pub const RAM_BOUNDS: RangeInclusive<f64> = 30.0..=85.0;
const CPU_JITTER: f64 = 3.0;
const RAM_JITTER: f64 = 1.0;

/// One reading of the simulated device.
#[derive(Debug, Clone, PartialEq)]
pub struct SystemMetrics {
    /// Percent.
    pub cpu: f64,
    /// Percent.
    pub ram: f64,
    /// Percent; never changes.
    pub disk: f64,
    pub uptime: String,
}

impl SystemMetrics {
    pub fn initial(config: &MetricsConfig) -> Self {
        Self {
            cpu: config.initial_cpu,
            ram: config.initial_ram,
            disk: config.disk,
            uptime: format_uptime(Duration::ZERO),
        }
    }

    /// Advance one tick: jitter CPU by up to ±3 and RAM by up to ±1, clamped
    /// to their bounds, and refresh uptime from `elapsed`.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R, elapsed: Duration) {
        self.cpu = walk(self.cpu, rng.gen_range(-CPU_JITTER..=CPU_JITTER), &CPU_BOUNDS);
        self.ram = walk(self.ram, rng.gen_range(-RAM_JITTER..=RAM_JITTER), &RAM_BOUNDS);
        self.uptime = format_uptime(elapsed);
    }

    /// Single-line dashboard rendering.
    pub fn render(&self) -> String {
        format!(
            "CPU {:>5.1}% | RAM {:>5.1}% | DISK {:>5.1}% | UPTIME {}",
            self.cpu, self.ram, self.disk, self.uptime
        )
    }
}

fn walk(value: f64, delta: f64, bounds: &RangeInclusive<f64>) -> f64 {
    (value + delta).clamp(*bounds.start(), *bounds.end())
}

/// `"{h}h {m}m {s}s"`; hours are not wrapped into days.
pub fn format_uptime(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
}
