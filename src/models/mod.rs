mod category;
mod category_summary;
mod expense;

pub use category::Category;
pub use category_summary::CategorySummary;
pub use expense::{Expense, ExpenseId, ExpenseInput, MAX_AMOUNT};

#[cfg(test)]
mod tests;
