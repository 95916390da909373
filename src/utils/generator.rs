use chrono::{NaiveDate, NaiveDateTime};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;

use crate::core::ids::IdGenerator;
use crate::domain::model::WorkOrder;
use crate::utils::error::Result;

/// Productive-hours fixture values, in hundredths of an hour. Cycled when
/// more orders are requested than there are values.
const FIXTURE_HOURS_CENTS: [i64; 25] = [
    133, 243, 166, 11, 175, 345, 125, 101, 275, 200, 333, 200, 410, 125, 50, 125, 30, 125, 0,
    1450, 125, 250, 200, 150, 100,
];

/// Generate `count` work orders with fixture hour values and random
/// June-2022 timestamps. The rng is seeded explicitly so a given seed always
/// produces the same dataset.
pub fn sample_orders(ids: &IdGenerator, seed: u64, count: usize) -> Result<Vec<WorkOrder>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|i| {
            let hours = Decimal::new(FIXTURE_HOURS_CENTS[i % FIXTURE_HOURS_CENTS.len()], 2);
            WorkOrder::new(ids, hours, random_june_timestamp(&mut rng))
        })
        .collect()
}

fn random_june_timestamp(rng: &mut StdRng) -> NaiveDateTime {
    let day = rng.gen_range(1..30);
    let hour = rng.gen_range(0..24);
    let minute = rng.gen_range(0..60);
    NaiveDate::from_ymd_opt(2022, 6, day)
        .expect("June day in 1..=29")
        .and_hms_opt(hour, minute, 0)
        .expect("hour in 0..24, minute in 0..60")
}
