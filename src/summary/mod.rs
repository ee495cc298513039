//! Aggregations over a snapshot of expenses.
//!
//! Every function here is pure and recomputes from its input; nothing is cached between
//! calls.

use chrono::Datelike;
use rust_decimal::Decimal;

use crate::models::{Category, CategorySummary, Expense};

/// Sum of all amounts. Zero for no expenses.
pub fn total<'a, I>(expenses: I) -> Decimal
where
    I: IntoIterator<Item = &'a Expense>,
{
    expenses.into_iter().map(|e| e.amount).sum()
}

/// Per-category totals, counts and share of the grand total.
///
/// Categories without spending are left out. The result is sorted by total, highest
/// first; categories with equal totals stay in [`Category::all`] order.
pub fn category_summary<'a, I>(expenses: I) -> Vec<CategorySummary>
where
    I: IntoIterator<Item = &'a Expense>,
{
    let mut slots = [(Decimal::ZERO, 0usize); Category::COUNT];
    for expense in expenses {
        let slot = &mut slots[expense.category.index()];
        slot.0 += expense.amount;
        slot.1 += 1;
    }

    let grand_total: Decimal = slots.iter().map(|(t, _)| *t).sum();

    let mut summaries: Vec<CategorySummary> = Category::all()
        .iter()
        .zip(slots)
        .filter(|(_, (total, _))| *total > Decimal::ZERO)
        .map(|(&category, (total, count))| CategorySummary {
            category,
            total,
            count,
            // Divide first: the share is at most 1, so scaling it never overflows.
            percentage: if grand_total > Decimal::ZERO {
                total / grand_total * Decimal::ONE_HUNDRED
            } else {
                Decimal::ZERO
            },
        })
        .collect();

    // sort_by is stable, which gives the tie-break.
    summaries.sort_by(|a, b| b.total.cmp(&a.total));
    summaries
}

/// Expenses dated in the same calendar month and year as `reference`, in store order.
pub fn filter_by_month<'a, D>(expenses: &'a [Expense], reference: &D) -> Vec<&'a Expense>
where
    D: Datelike,
{
    expenses
        .iter()
        .filter(|e| e.date.year() == reference.year() && e.date.month() == reference.month())
        .collect()
}

/// Everything the dashboard shows, derived from one snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overview {
    pub total: Decimal,
    pub month_total: Decimal,
    pub record_count: usize,
    pub month_count: usize,
    /// Breakdown across all records, not just the selected month.
    pub categories: Vec<CategorySummary>,
}

impl Overview {
    pub fn compute<D: Datelike>(expenses: &[Expense], reference: &D) -> Self {
        let this_month = filter_by_month(expenses, reference);
        Self {
            total: total(expenses),
            month_total: total(this_month.iter().copied()),
            record_count: expenses.len(),
            month_count: this_month.len(),
            categories: category_summary(expenses),
        }
    }
}
