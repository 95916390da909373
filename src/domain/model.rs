use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::ids::IdGenerator;
use crate::utils::error::{Result, StoreError};

const DEFAULT_DESCRIPTION: &str = "truck maintenance";

/// One unit of completed work. Fields are private and there are no setters:
/// a WorkOrder never changes after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkOrder {
    id: u64,
    productive_hours: Decimal,
    description: String,
    timestamp: NaiveDateTime,
}

impl WorkOrder {
    /// Build a work order with the default description. The id is drawn from
    /// `ids` exactly once; `productive_hours` must be non-negative.
    pub fn new(
        ids: &IdGenerator,
        productive_hours: Decimal,
        timestamp: NaiveDateTime,
    ) -> Result<Self> {
        Self::with_description(ids, productive_hours, timestamp, DEFAULT_DESCRIPTION)
    }

    pub fn with_description(
        ids: &IdGenerator,
        productive_hours: Decimal,
        timestamp: NaiveDateTime,
        description: impl Into<String>,
    ) -> Result<Self> {
        if productive_hours < Decimal::ZERO {
            return Err(StoreError::NegativeHours {
                value: productive_hours,
            });
        }
        Ok(Self {
            id: ids.next_id(),
            productive_hours,
            description: description.into(),
            timestamp,
        })
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn productive_hours(&self) -> Decimal {
        self.productive_hours
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }
}
