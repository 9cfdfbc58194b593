//! Timer primitives for animated components.

#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

/// Suspend the current task for `ms` milliseconds.
pub async fn sleep_ms(ms: u64) {
    #[cfg(target_arch = "wasm32")]
    {
        let ms = u32::try_from(ms).unwrap_or(u32::MAX);
        gloo_timers::future::TimeoutFuture::new(ms).await;
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }
}

/// Fixed-rate tick source with a fractional interval.
///
/// Deadlines are accumulated from the start, so whole-millisecond waits add
/// up to `n * interval` instead of drifting (33, 34, 33, ... for 33.3 ms).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ticker {
    interval_ms: f64,
    ticks: u64,
    scheduled_ms: u64,
}

impl Ticker {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms: interval_ms.max(0.0),
            ticks: 0,
            scheduled_ms: 0,
        }
    }

    /// Wait before the next tick, advancing the schedule.
    pub fn next_wait_ms(&mut self) -> u64 {
        self.ticks += 1;
        let deadline = (self.ticks as f64 * self.interval_ms).round() as u64;
        let wait = deadline.saturating_sub(self.scheduled_ms);
        self.scheduled_ms = deadline;
        wait
    }

    pub async fn tick(&mut self) {
        let wait = self.next_wait_ms();
        sleep_ms(wait).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn waits_sum_to_total_duration() {
        let mut ticker = Ticker::new(2000.0 / 60.0);
        let waits: Vec<u64> = (0..60).map(|_| ticker.next_wait_ms()).collect();
        assert_eq!(waits.iter().sum::<u64>(), 2000);
        assert!(waits.iter().all(|w| (33..=34).contains(w)));
    }

    #[test]
    fn whole_intervals_are_exact() {
        let mut ticker = Ticker::new(50.0);
        assert_eq!(ticker.next_wait_ms(), 50);
        assert_eq!(ticker.next_wait_ms(), 50);
    }
}
