use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use std::str::FromStr;

use super::Category;
use crate::error::ValidationError;

/// Identifier issued by the store. Never reused within one store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ExpenseId(u64);

impl ExpenseId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl std::fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ExpenseId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// Largest amount a single expense may carry: one trillion currency units.
///
/// Totals stay far inside `Decimal`'s range for any ledger that fits in memory.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0xD4A5_1000, 0xE8, 0, false, 0);

/// A single tracked spending event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expense {
    pub id: ExpenseId,
    /// When the money was spent, as entered by the user.
    pub date: NaiveDate,
    pub category: Category,
    pub description: String,
    pub amount: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Expense {
    /// The mutable part of the record, e.g. to prefill an edit form.
    pub fn to_input(&self) -> ExpenseInput {
        ExpenseInput {
            date: self.date,
            category: self.category,
            description: self.description.clone(),
            amount: self.amount,
        }
    }
}

/// User-supplied fields for creating or updating an [`Expense`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseInput {
    pub date: NaiveDate,
    pub category: Category,
    pub description: String,
    pub amount: Decimal,
}

impl ExpenseInput {
    pub fn new(
        date: NaiveDate,
        category: Category,
        description: impl Into<String>,
        amount: Decimal,
    ) -> Self {
        Self {
            date,
            category,
            description: description.into(),
            amount,
        }
    }

    /// Build an input from raw text fields, then validate it.
    ///
    /// `date` must be `YYYY-MM-DD`; `category` is matched as in [`Category::from_str`].
    pub fn parse(
        date: &str,
        category: &str,
        description: &str,
        amount: &str,
    ) -> Result<Self, ValidationError> {
        let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
            .map_err(|_| ValidationError::InvalidDate(date.trim().to_string()))?;
        let category = Category::from_str(category)?;
        let amount = Decimal::from_str(amount.trim())
            .map_err(|_| ValidationError::InvalidAmount(amount.trim().to_string()))?;

        let input = Self::new(date, category, description, amount);
        input.validate()?;
        Ok(input)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.description.trim().is_empty() {
            return Err(ValidationError::EmptyDescription);
        }
        if self.amount <= Decimal::ZERO {
            return Err(ValidationError::NonPositiveAmount(self.amount));
        }
        if self.amount > MAX_AMOUNT {
            return Err(ValidationError::AmountTooLarge(self.amount));
        }
        Ok(())
    }
}
