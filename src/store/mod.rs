use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::models::{Expense, ExpenseId, ExpenseInput};

mod sample;

/// Owns the expense records for one session.
///
/// Records are kept most-recent-first: `add` inserts at the front and neither `update` nor
/// `delete` reorders the rest. The caller supplies the current time to every mutation.
#[derive(Debug, Default)]
pub struct ExpenseStore {
    expenses: Vec<Expense>,
    next_id: u64,
}

impl ExpenseStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate `input` and insert it as the newest record.
    pub fn add(&mut self, input: ExpenseInput, now: DateTime<Utc>) -> Result<&Expense> {
        if let Err(e) = input.validate() {
            debug!("Rejected new expense: {e}");
            return Err(e.into());
        }

        self.next_id += 1;
        let expense = Expense {
            id: ExpenseId::new(self.next_id),
            date: input.date,
            category: input.category,
            description: input.description.trim().to_string(),
            amount: input.amount,
            created_at: now,
            updated_at: now,
        };
        info!(
            id = %expense.id,
            category = expense.category.as_str(),
            amount = %expense.amount,
            "Added expense"
        );

        self.expenses.insert(0, expense);
        Ok(&self.expenses[0])
    }

    /// Replace the editable fields of the record with `id`.
    ///
    /// `id`, `created_at` and the record's position are kept. `updated_at` never moves
    /// backwards, even if `now` is earlier than the last change.
    pub fn update(
        &mut self,
        id: ExpenseId,
        input: ExpenseInput,
        now: DateTime<Utc>,
    ) -> Result<&Expense> {
        if let Err(e) = input.validate() {
            debug!(%id, "Rejected expense update: {e}");
            return Err(e.into());
        }

        let Some(expense) = self.expenses.iter_mut().find(|e| e.id == id) else {
            debug!(%id, "Update for unknown expense");
            return Err(Error::NotFound(id));
        };

        expense.date = input.date;
        expense.category = input.category;
        expense.description = input.description.trim().to_string();
        expense.amount = input.amount;
        expense.updated_at = now.max(expense.updated_at);
        info!(%id, "Updated expense");

        Ok(expense)
    }

    /// Remove the record with `id` and hand it back.
    pub fn delete(&mut self, id: ExpenseId) -> Result<Expense> {
        let Some(pos) = self.expenses.iter().position(|e| e.id == id) else {
            debug!(%id, "Delete for unknown expense");
            return Err(Error::NotFound(id));
        };
        let removed = self.expenses.remove(pos);
        info!(%id, "Deleted expense");
        Ok(removed)
    }

    pub fn get(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    /// Snapshot of all records, most recent first.
    pub fn list(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}

#[cfg(test)]
mod tests;
