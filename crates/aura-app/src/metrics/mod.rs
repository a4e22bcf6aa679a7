//! Simulated device metrics published on a fixed tick.

mod simulator;

pub use simulator::{format_uptime, SystemMetrics, CPU_BOUNDS, RAM_BOUNDS};

use std::time::Duration;

use aura_config::schema::MetricsConfig;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::time::Instant;

use crate::ticker::Ticker;

/// Start the metrics random walk. Dropping the returned ticker stops it.
pub fn start(config: &MetricsConfig) -> Ticker<SystemMetrics> {
    let started = Instant::now();
    let mut rng = StdRng::from_entropy();
    Ticker::spawn(
        "metrics",
        SystemMetrics::initial(config),
        Duration::from_millis(u64::from(config.tick_interval_ms)),
        move |metrics| metrics.step(&mut rng, started.elapsed()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_values_follow_config() {
        let metrics = SystemMetrics::initial(&MetricsConfig::default());
        assert_eq!(metrics.cpu, 18.0);
        assert_eq!(metrics.ram, 45.0);
        assert_eq!(metrics.disk, 32.0);
        assert_eq!(metrics.uptime, "0h 0m 0s");
    }

    #[test]
    fn walk_stays_within_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut metrics = SystemMetrics::initial(&MetricsConfig::default());
        for i in 0..5_000 {
            let before = metrics.clone();
            metrics.step(&mut rng, Duration::from_secs(i));
            assert!(CPU_BOUNDS.contains(&metrics.cpu));
            assert!(RAM_BOUNDS.contains(&metrics.ram));
            assert!((metrics.cpu - before.cpu).abs() <= 3.0 + 1e-9);
            assert!((metrics.ram - before.ram).abs() <= 1.0 + 1e-9);
            assert_eq!(metrics.disk, 32.0);
        }
    }

    #[test]
    fn out_of_bounds_start_is_pulled_in() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut metrics = SystemMetrics {
            cpu: 120.0,
            ram: 0.0,
            disk: 32.0,
            uptime: String::new(),
        };
        metrics.step(&mut rng, Duration::ZERO);
        assert_eq!(metrics.cpu, 95.0);
        assert_eq!(metrics.ram, 30.0);
    }

    #[test]
    fn uptime_format() {
        assert_eq!(format_uptime(Duration::from_secs(59)), "0h 0m 59s");
        assert_eq!(format_uptime(Duration::from_secs(3_723)), "1h 2m 3s");
        assert_eq!(format_uptime(Duration::from_secs(90_000)), "25h 0m 0s");
    }

    #[test]
    fn render_includes_all_fields() {
        let line = SystemMetrics::initial(&MetricsConfig::default()).render();
        assert!(line.contains("CPU  18.0%"));
        assert!(line.contains("RAM  45.0%"));
        assert!(line.contains("DISK  32.0%"));
        assert!(line.ends_with("UPTIME 0h 0m 0s"));
    }

    #[tokio::test(start_paused = true)]
    async fn ticker_publishes_uptime() {
        let ticker = start(&MetricsConfig::default());
        let mut rx = ticker.subscribe();
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().uptime, "0h 0m 2s");
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().uptime, "0h 0m 4s");
        ticker.stop();
    }
}
