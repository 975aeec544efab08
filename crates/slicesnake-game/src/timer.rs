//! Time-gated tick scheduling with an adjustable interval.
//!
//! Ticks are driven by elapsed monotonic time, not by frame count: a frame may
//! run zero or one tick depending on how long ago the last one fired.

use std::time::Duration;

/// Tick interval bounds and step sizes, all in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeedSettings {
    /// Interval after every reset.
    pub initial_ms: u64,
    /// Fastest allowed interval.
    pub min_ms: u64,
    /// Slowest allowed interval.
    pub max_ms: u64,
    /// Interval reduction per food eaten.
    pub eat_step_ms: u64,
    /// Interval change per manual speed request.
    pub manual_step_ms: u64,
}

impl Default for SpeedSettings {
    fn default() -> Self {
        Self {
            initial_ms: 360,
            min_ms: 80,
            max_ms: 1200,
            eat_step_ms: 1,
            manual_step_ms: 20,
        }
    }
}

/// Manual speed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeedChange {
    /// Shorter interval.
    Faster,
    /// Longer interval.
    Slower,
}

/// Tracks the current tick interval and when the last tick fired.
#[derive(Debug, Clone)]
pub struct TickTimer {
    settings: SpeedSettings,
    interval_ms: u64,
    last_tick: Duration,
}

impl TickTimer {
    pub fn new(settings: SpeedSettings, now: Duration) -> Self {
        Self {
            settings,
            interval_ms: settings.initial_ms,
            last_tick: now,
        }
    }

    /// Current interval between ticks in milliseconds.
    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    pub fn settings(&self) -> SpeedSettings {
        self.settings
    }

    /// Restore the initial interval and restart the gate at `now`.
    pub fn reset(&mut self, now: Duration) {
        self.interval_ms = self.settings.initial_ms;
        self.last_tick = now;
    }

    /// If a full interval has elapsed since the last tick, consume it and return `true`.
    pub fn try_fire(&mut self, now: Duration) -> bool {
        let elapsed = now.saturating_sub(self.last_tick);
        if elapsed < Duration::from_millis(self.interval_ms) {
            return false;
        }
        self.last_tick = now;
        true
    }

    /// Speed up after eating, floored at the minimum interval.
    pub fn on_food_eaten(&mut self) {
        self.interval_ms = self
            .interval_ms
            .saturating_sub(self.settings.eat_step_ms)
            .max(self.settings.min_ms);
    }

    /// Apply a manual speed change within `[min_ms, max_ms]`.
    pub fn adjust(&mut self, change: SpeedChange) {
        let step = self.settings.manual_step_ms;
        self.interval_ms = match change {
            SpeedChange::Faster => self.interval_ms.saturating_sub(step).max(self.settings.min_ms),
            SpeedChange::Slower => self.interval_ms.saturating_add(step).min(self.settings.max_ms),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn test_fires_only_after_full_interval() {
        let mut t = TickTimer::new(SpeedSettings::default(), ms(1000));
        assert!(!t.try_fire(ms(1000)));
        assert!(!t.try_fire(ms(1359)));
        assert!(t.try_fire(ms(1360)));
        // The gate restarts from the firing time, not the scheduled time.
        assert!(!t.try_fire(ms(1700)));
        assert!(t.try_fire(ms(1720)));
    }

    #[test]
    fn test_clock_going_backwards_does_not_fire() {
        let mut t = TickTimer::new(SpeedSettings::default(), ms(5000));
        assert!(!t.try_fire(ms(10)));
    }

    #[test]
    fn test_eating_floors_at_minimum() {
        let settings = SpeedSettings {
            initial_ms: 82,
            eat_step_ms: 5,
            ..SpeedSettings::default()
        };
        let mut t = TickTimer::new(settings, Duration::ZERO);
        t.on_food_eaten();
        assert_eq!(t.interval_ms(), 80);
        t.on_food_eaten();
        assert_eq!(t.interval_ms(), 80);
    }

    #[test]
    fn test_manual_adjust_clamps() {
        let mut t = TickTimer::new(SpeedSettings::default(), Duration::ZERO);
        t.adjust(SpeedChange::Faster);
        assert_eq!(t.interval_ms(), 340);
        for _ in 0..100 {
            t.adjust(SpeedChange::Faster);
        }
        assert_eq!(t.interval_ms(), 80);
        for _ in 0..100 {
            t.adjust(SpeedChange::Slower);
        }
        assert_eq!(t.interval_ms(), 1200);
    }

    #[test]
    fn test_huge_manual_step_saturates() {
        let settings = SpeedSettings {
            manual_step_ms: u64::MAX,
            ..SpeedSettings::default()
        };
        let mut t = TickTimer::new(settings, Duration::ZERO);
        t.adjust(SpeedChange::Slower);
        assert_eq!(t.interval_ms(), 1200);
        t.adjust(SpeedChange::Slower);
        assert_eq!(t.interval_ms(), 1200);
        t.adjust(SpeedChange::Faster);
        assert_eq!(t.interval_ms(), 80);
    }

    #[test]
    fn test_reset_restores_initial() {
        let mut t = TickTimer::new(SpeedSettings::default(), Duration::ZERO);
        t.adjust(SpeedChange::Slower);
        t.reset(ms(50));
        assert_eq!(t.interval_ms(), 360);
        assert!(!t.try_fire(ms(400)));
        assert!(t.try_fire(ms(410)));
    }
}
