pub mod cli;

use std::collections::HashSet;

use chrono::{Datelike, NaiveDateTime, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

pub use cli::CliConfig;

/// The weekday/time window used to classify work as inside or outside
/// business hours. Parameterized rather than hard-coded so the policy is
/// testable on its own; the default is Mon-Fri 09:00-17:00.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessHours {
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub days: HashSet<Weekday>,
}

impl Default for BusinessHours {
    fn default() -> Self {
        Self {
            start: NaiveTime::from_hms_opt(9, 0, 0).expect("09:00 is a valid time"),
            end: NaiveTime::from_hms_opt(17, 0, 0).expect("17:00 is a valid time"),
            days: HashSet::from([
                Weekday::Mon,
                Weekday::Tue,
                Weekday::Wed,
                Weekday::Thu,
                Weekday::Fri,
            ]),
        }
    }
}

impl BusinessHours {
    /// Whether the timestamp falls inside the window. The end boundary is
    /// exclusive: work at exactly `end` is outside business hours.
    pub fn contains(&self, timestamp: NaiveDateTime) -> bool {
        self.days.contains(&timestamp.weekday())
            && timestamp.time() >= self.start
            && timestamp.time() < self.end
    }
}
