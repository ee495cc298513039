use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;

use super::ExpenseStore;
use crate::error::{Result, ValidationError};
use crate::models::{Category, ExpenseInput};

/// Oldest first, so that after seeding the newest ends up at the front.
const SAMPLE_LEDGER: &[(i32, u32, u32, Category, &str, i64, u32)] = &[
    (2024, 1, 13, Category::Shopping, "New winter jacket", 12999, 2),
    (2024, 1, 14, Category::Travel, "Gas for weekend trip", 6250, 2),
    (2024, 1, 15, Category::Food, "Lunch at Italian restaurant", 4599, 2),
];

impl ExpenseStore {
    /// A store seeded with a small demo ledger from January 2024.
    pub fn with_sample_data(now: DateTime<Utc>) -> Result<Self> {
        let mut store = Self::new();
        for &(y, m, d, category, description, units, scale) in SAMPLE_LEDGER {
            let date = NaiveDate::from_ymd_opt(y, m, d)
                .ok_or_else(|| ValidationError::InvalidDate(format!("{y}-{m:02}-{d:02}")))?;
            let amount = Decimal::new(units, scale);
            store.add(ExpenseInput::new(date, category, description, amount), now)?;
        }
        Ok(store)
    }
}
