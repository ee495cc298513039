use rust_decimal::Decimal;

use super::Category;

/// Spending for one category within a set of expenses. Derived, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySummary {
    pub category: Category,
    pub total: Decimal,
    pub count: usize,
    /// Share of the grand total in `[0, 100]`, unrounded.
    pub percentage: Decimal,
}

impl CategorySummary {
    pub fn rounded_percentage(&self, dp: u32) -> Decimal {
        self.percentage.round_dp(dp)
    }
}
