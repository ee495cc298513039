use chrono::NaiveDate;

use expensetui::{Category, Expense, ExpenseId, ExpenseInput, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FormField {
    Date,
    Category,
    Description,
    Amount,
}

impl FormField {
    pub(crate) fn all() -> &'static [FormField] {
        &[
            Self::Date,
            Self::Category,
            Self::Description,
            Self::Amount,
        ]
    }

    pub(crate) fn label(&self) -> &'static str {
        match self {
            Self::Date => "Date",
            Self::Category => "Category",
            Self::Description => "Description",
            Self::Amount => "Amount",
        }
    }

    fn position(&self) -> usize {
        Self::all().iter().position(|f| f == self).unwrap_or(0)
    }
}

/// Text-entry state for the add/edit screen.
///
/// Fields are kept as typed so a half-entered amount or date survives until submit; only
/// [`ExpenseForm::to_input`] interprets them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ExpenseForm {
    pub(crate) date: String,
    pub(crate) category: Category,
    pub(crate) description: String,
    pub(crate) amount: String,
    pub(crate) focus: FormField,
    /// Set while editing an existing record.
    pub(crate) editing: Option<ExpenseId>,
}

impl ExpenseForm {
    pub(crate) fn new(today: NaiveDate) -> Self {
        Self {
            date: today.format("%Y-%m-%d").to_string(),
            category: Category::default(),
            description: String::new(),
            amount: String::new(),
            focus: FormField::Date,
            editing: None,
        }
    }

    pub(crate) fn from_expense(expense: &Expense) -> Self {
        Self {
            date: expense.date.format("%Y-%m-%d").to_string(),
            category: expense.category,
            description: expense.description.clone(),
            amount: expense.amount.to_string(),
            focus: FormField::Description,
            editing: Some(expense.id),
        }
    }

    pub(crate) fn reset(&mut self, today: NaiveDate) {
        *self = Self::new(today);
    }

    pub(crate) fn focus_next(&mut self) {
        let all = FormField::all();
        self.focus = all[(self.focus.position() + 1) % all.len()];
    }

    pub(crate) fn focus_prev(&mut self) {
        let all = FormField::all();
        self.focus = all[(self.focus.position() + all.len() - 1) % all.len()];
    }

    pub(crate) fn cycle_category(&mut self, forward: bool) {
        self.category = if forward {
            self.category.next()
        } else {
            self.category.prev()
        };
    }

    /// Type a character into the focused field. On the category field `+`/`-` cycle.
    pub(crate) fn push_char(&mut self, c: char) {
        match self.focus {
            FormField::Date => {
                if c.is_ascii_digit() || c == '-' {
                    self.date.push(c);
                }
            }
            FormField::Category => match c {
                '+' | '=' | 'l' => self.cycle_category(true),
                '-' | 'h' => self.cycle_category(false),
                _ => {}
            },
            FormField::Description => self.description.push(c),
            FormField::Amount => {
                if c.is_ascii_digit() || c == '.' {
                    self.amount.push(c);
                }
            }
        }
    }

    pub(crate) fn backspace(&mut self) {
        match self.focus {
            FormField::Date => {
                self.date.pop();
            }
            FormField::Category => {}
            FormField::Description => {
                self.description.pop();
            }
            FormField::Amount => {
                self.amount.pop();
            }
        }
    }

    /// Text shown for `field`.
    pub(crate) fn value(&self, field: FormField) -> String {
        match field {
            FormField::Date => self.date.clone(),
            FormField::Category => self.category.label().to_string(),
            FormField::Description => self.description.clone(),
            FormField::Amount => self.amount.clone(),
        }
    }

    pub(crate) fn to_input(&self) -> Result<ExpenseInput, ValidationError> {
        ExpenseInput::parse(
            &self.date,
            self.category.as_str(),
            &self.description,
            &self.amount,
        )
    }
}

#[cfg(test)]
#[path = "form_tests.rs"]
mod tests;
