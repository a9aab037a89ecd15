//! Countdown Engine
//!
//! Live `HH:MM:SS` until the next UTC midnight, when the current challenge
//! closes and a new one opens. The boundary is recomputed from wall-clock time
//! on every tick; the countdown value itself is never decremented, so the
//! display self-corrects after suspension, drift, or missed ticks.

use chrono::{DateTime, Duration, TimeZone, Utc};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Next UTC day boundary strictly after `now`.
pub fn next_utc_midnight(now: DateTime<Utc>) -> DateTime<Utc> {
    let midnight = now
        .date_naive()
        .succ_opt()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .expect("tomorrow is a representable date");
    Utc.from_utc_datetime(&midnight)
}

/// Time remaining until the next challenge reset. Always in (0, 24h].
pub fn remaining_until_reset(now: DateTime<Utc>) -> Duration {
    next_utc_midnight(now) - now
}

/// Zero-padded `HH:MM:SS`. Whole seconds only; remaining is always < 24h so
/// hours never need truncation.
pub fn format_remaining(remaining: Duration) -> String {
    let secs = remaining.num_seconds().max(0);
    format!("{:02}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
}

/// One-shot formatted remaining time as of the current wall clock.
pub fn current_display() -> String {
    format_remaining(remaining_until_reset(Utc::now()))
}

/// Per-second republisher of the remaining time. Independent of session and
/// challenge state. The timer task is aborted on drop; a live timer outliving
/// its owner is a resource leak.
#[derive(Debug)]
pub struct Countdown {
    rx: watch::Receiver<String>,
    task: JoinHandle<()>,
}

impl Countdown {
    pub fn start() -> Self {
        let (tx, rx) = watch::channel(current_display());
        let task = tokio::spawn(async move {
            let mut tick = tokio::time::interval(std::time::Duration::from_secs(1));
            tick.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // First tick fires immediately; the channel already holds a value.
            tick.tick().await;
            loop {
                tick.tick().await;
                if tx.send(current_display()).is_err() {
                    break;
                }
            }
        });
        Self { rx, task }
    }

    /// Latest published value.
    pub fn current(&self) -> String {
        self.rx.borrow().clone()
    }

    /// Receiver for awaiting updates (`changed().await`).
    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.rx.clone()
    }
}

impl Drop for Countdown {
    fn drop(&mut self) {
        self.task.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32, ms: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap() + Duration::milliseconds(ms as i64)
    }

    #[test]
    fn test_next_midnight_is_start_of_tomorrow() {
        let now = at(2024, 1, 1, 15, 30, 0, 0);
        let midnight = next_utc_midnight(now);
        assert_eq!(midnight, Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_rollover_across_utc_boundary() {
        // Mid-second instants, as a real tick observes them.
        let t = at(2024, 1, 1, 23, 59, 58, 500);
        assert_eq!(format_remaining(remaining_until_reset(t)), "00:00:01");

        let t = t + Duration::seconds(1);
        assert_eq!(format_remaining(remaining_until_reset(t)), "00:00:00");

        // One more second crosses the boundary; the next day's full window
        // opens rather than the counter going negative.
        let t = t + Duration::seconds(1);
        assert_eq!(format_remaining(remaining_until_reset(t)), "23:59:59");
    }

    #[test]
    fn test_exact_midnight_reports_full_day() {
        let t = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
        assert_eq!(format_remaining(remaining_until_reset(t)), "24:00:00");
    }

    #[test]
    fn test_month_and_year_rollover() {
        let t = at(2024, 2, 29, 12, 0, 0, 0); // leap day
        assert_eq!(
            next_utc_midnight(t),
            Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap()
        );

        let t = at(2024, 12, 31, 23, 0, 0, 0);
        assert_eq!(
            next_utc_midnight(t),
            Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_format_zero_pads() {
        assert_eq!(format_remaining(Duration::seconds(5)), "00:00:05");
        assert_eq!(format_remaining(Duration::seconds(3 * 3600 + 7 * 60 + 9)), "03:07:09");
        assert_eq!(format_remaining(Duration::seconds(-3)), "00:00:00");
    }

    #[tokio::test]
    async fn test_countdown_publishes_and_stops_on_drop() {
        let countdown = Countdown::start();
        let value = countdown.current();
        assert_eq!(value.len(), 8);
        assert_eq!(value.matches(':').count(), 2);

        let rx = countdown.subscribe();
        drop(countdown);
        // Sender side aborted with the task; receivers observe closure.
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
        assert!(rx.has_changed().is_err() || !rx.has_changed().unwrap());
    }
}
