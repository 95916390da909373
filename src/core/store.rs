use std::collections::{HashMap, HashSet};

use chrono::{Datelike, Weekday};
use rust_decimal::Decimal;

use crate::config::BusinessHours;
use crate::domain::model::WorkOrder;
use crate::utils::error::{Result, StoreError};

/// In-memory collection of work orders, populated once and queried read-only.
/// Every operation is a pure function over the resident orders; none of them
/// mutate the store or the records.
#[derive(Debug)]
pub struct WorkOrderStore {
    orders: Vec<WorkOrder>,
}

impl WorkOrderStore {
    pub fn new(orders: Vec<WorkOrder>) -> Self {
        Self { orders }
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn orders(&self) -> &[WorkOrder] {
        &self.orders
    }

    /// Exact decimal sum of productive hours across every order. A total over
    /// zero orders has no identity value here, so an empty store is an error
    /// rather than a silent zero.
    pub fn total_productive_hours(&self) -> Result<Decimal> {
        if self.orders.is_empty() {
            return Err(StoreError::EmptyCollection {
                operation: "total_productive_hours",
            });
        }
        Ok(self
            .orders
            .iter()
            .fold(Decimal::ZERO, |acc, order| acc + order.productive_hours()))
    }

    /// Ids of orders whose calendar date falls on Saturday or Sunday, in
    /// ascending id order. No matches is a valid empty result.
    pub fn weekend_order_ids(&self) -> Vec<u64> {
        let mut ids: Vec<u64> = self
            .orders
            .iter()
            .filter(|order| {
                matches!(order.timestamp().weekday(), Weekday::Sat | Weekday::Sun)
            })
            .map(WorkOrder::id)
            .collect();
        ids.sort_unstable();
        ids
    }

    /// Sum of productive hours for orders outside the given business window.
    /// A filtered sum, so no qualifying orders yields zero rather than an
    /// error.
    pub fn outside_business_hours(&self, window: &BusinessHours) -> Decimal {
        self.orders
            .iter()
            .filter(|order| !window.contains(order.timestamp()))
            .fold(Decimal::ZERO, |acc, order| acc + order.productive_hours())
    }

    /// Unique productive-hours values, collapsed by value equality (2.00 and
    /// 2 are one value).
    pub fn distinct_productive_hours(&self) -> HashSet<Decimal> {
        self.orders
            .iter()
            .map(WorkOrder::productive_hours)
            .collect()
    }

    /// All orders, most recent first. Equal timestamps are ordered by
    /// ascending id so the result is a deterministic total order.
    pub fn orders_by_most_recent(&self) -> Vec<&WorkOrder> {
        let mut sorted: Vec<&WorkOrder> = self.orders.iter().collect();
        sorted.sort_by(|a, b| {
            b.timestamp()
                .cmp(&a.timestamp())
                .then_with(|| a.id().cmp(&b.id()))
        });
        sorted
    }

    /// Lookup from id to order, one entry per order. Ids are unique by
    /// construction; if that invariant has been violated this fails loudly
    /// instead of dropping an entry and masking the bug.
    pub fn id_index(&self) -> Result<HashMap<u64, &WorkOrder>> {
        let mut index = HashMap::with_capacity(self.orders.len());
        for order in &self.orders {
            if index.insert(order.id(), order).is_some() {
                tracing::error!(id = order.id(), "duplicate work order id in store");
                return Err(StoreError::DuplicateId { id: order.id() });
            }
        }
        Ok(index)
    }
}
