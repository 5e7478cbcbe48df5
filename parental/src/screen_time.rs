use chrono::{DateTime, Local, NaiveDate, Timelike};

use super::settings::ParentalSettings;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlaybackGate {
    /// Playback may start. `remaining_minutes` is `None` when no daily
    /// limit is configured.
    Allowed { remaining_minutes: Option<u32> },
    DailyLimitReached,
    Bedtime,
}

/// Tracks watched minutes for the current calendar day and answers whether
/// playback may start. The counter rolls over on the first call that sees a
/// new date; the clock is always passed in.
#[derive(Clone, Debug)]
pub struct ScreenTimeTracker {
    usage_date: NaiveDate,
    minutes_watched: u32,
}

impl ScreenTimeTracker {
    pub fn new(now: DateTime<Local>) -> Self {
        Self {
            usage_date: now.date_naive(),
            minutes_watched: 0,
        }
    }

    pub fn record_playback(&mut self, now: DateTime<Local>, minutes: u32) {
        self.roll_over(now);
        self.minutes_watched = self.minutes_watched.saturating_add(minutes);
    }

    pub fn minutes_watched(&self, now: DateTime<Local>) -> u32 {
        if now.date_naive() != self.usage_date {
            return 0;
        }
        self.minutes_watched
    }

    /// Policy decision for starting (or continuing) playback. Bedtime wins
    /// over remaining minutes.
    pub fn check(&self, settings: &ParentalSettings, now: DateTime<Local>) -> PlaybackGate {
        if settings.bedtime_enabled && in_bedtime_window(settings, now.hour()) {
            return PlaybackGate::Bedtime;
        }

        if settings.daily_limit_minutes == 0 {
            return PlaybackGate::Allowed {
                remaining_minutes: None,
            };
        }

        let watched = self.minutes_watched(now);
        if watched >= settings.daily_limit_minutes {
            return PlaybackGate::DailyLimitReached;
        }

        PlaybackGate::Allowed {
            remaining_minutes: Some(settings.daily_limit_minutes - watched),
        }
    }

    fn roll_over(&mut self, now: DateTime<Local>) {
        let today = now.date_naive();
        if today != self.usage_date {
            self.usage_date = today;
            self.minutes_watched = 0;
        }
    }
}

fn in_bedtime_window(settings: &ParentalSettings, hour: u32) -> bool {
    let start = settings.bedtime_start_hour;
    let end = settings.bedtime_end_hour;
    if start < end {
        (start..end).contains(&hour)
    } else {
        hour >= start || hour < end
    }
}
