use chrono::{DateTime, Duration, Local, NaiveTime, TimeZone, Timelike};

/// Daily refresh slot announced in every report.
///
/// Nothing is refreshed automatically; the schedule only answers whether the
/// slot is now and when it comes around next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoUpdateSchedule {
    hour: u32,
    minute: u32,
}

impl Default for AutoUpdateSchedule {
    fn default() -> Self {
        Self { hour: 7, minute: 0 }
    }
}

impl AutoUpdateSchedule {
    /// Returns `None` for an hour above 23 or a minute above 59
    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(Self { hour, minute })
        } else {
            None
        }
    }

    /// Report header annotation, e.g. `每天 07:00`
    pub fn annotation(&self) -> String {
        format!("每天 {:02}:{:02}", self.hour, self.minute)
    }

    /// True for the whole minute the slot falls in
    pub fn is_due<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> bool {
        now.hour() == self.hour && now.minute() == self.minute
    }

    /// Next slot strictly after the current minute
    pub fn next_run(&self, now: &DateTime<Local>) -> DateTime<Local> {
        let slot = NaiveTime::from_hms_opt(self.hour, self.minute, 0).unwrap_or(NaiveTime::MIN);
        let mut day = now.date_naive();
        if now.time() >= slot {
            day += Duration::days(1);
        }
        // Skip forward over a slot swallowed by a DST gap
        loop {
            if let Some(next) = Local.from_local_datetime(&day.and_time(slot)).earliest() {
                return next;
            }
            day += Duration::days(1);
        }
    }
}
