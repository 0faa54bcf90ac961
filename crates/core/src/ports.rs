use crate::domain::{Report, SourceFile};
use chrono::{DateTime, Local};
use std::error::Error;
use std::path::Path;

pub type Result<T> = std::result::Result<T, Box<dyn Error>>;

/// Where subscription files come from
pub trait SubscriptionSource {
    // Rejects anything that is not a .txt file before reading it
    fn read(&self, path: &Path) -> Result<SourceFile>;
}

/// Trait for delivering a finished report
/// Returns a human readable description of where the report ended up
pub trait ReportSink {
    fn deliver(&self, report: &Report) -> Result<String>;
}

/// Persists the time of the last successful extraction
pub trait TimestampStore {
    fn load(&self) -> Result<Option<String>>;
    fn save(&self, timestamp: &str) -> Result<()>;
}

pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Clock frozen at a single instant, for tests and reproducible output
pub struct FixedClock(pub DateTime<Local>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}
