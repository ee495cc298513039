use chrono::{DateTime, Datelike, Local, Months, NaiveDate, Utc};
use tracing::debug;

use expensetui::{Error, Expense, ExpenseId, ExpenseStore, Overview};

use super::form::ExpenseForm;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Dashboard,
    Expenses,
    Form,
}

impl Screen {
    pub(crate) fn all() -> &'static [Screen] {
        &[Self::Dashboard, Self::Expenses, Self::Form]
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dashboard => write!(f, "Overview"),
            Self::Expenses => write!(f, "Expenses"),
            Self::Form => write!(f, "Add / Edit"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Command,
    Form,
    Confirm,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Command => write!(f, "COMMAND"),
            Self::Form => write!(f, "FORM"),
            Self::Confirm => write!(f, "CONFIRM"),
        }
    }
}

/// Pending action that requires user confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PendingAction {
    DeleteExpense { id: ExpenseId, description: String },
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) screen: Screen,
    pub(crate) input_mode: InputMode,
    pub(crate) command_input: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,
    pub(crate) currency: String,

    store: ExpenseStore,
    clock: fn() -> DateTime<Utc>,
    /// Default date for new expenses.
    pub(crate) today: NaiveDate,
    /// Any day in the month shown as "This Month"; normalised to the 1st.
    pub(crate) month: NaiveDate,

    // Dashboard
    pub(crate) overview: Overview,

    // Expenses
    pub(crate) expense_index: usize,
    pub(crate) expense_scroll: usize,

    // Add / Edit
    pub(crate) form: ExpenseForm,

    // Confirmation
    pub(crate) pending_action: Option<PendingAction>,
    pub(crate) confirm_message: String,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new(store: ExpenseStore, currency: impl Into<String>) -> Self {
        Self::with_clock(store, currency, Utc::now, Local::now().date_naive())
    }

    /// Build an app whose mutations are stamped by `clock` and whose form starts at `today`.
    pub(crate) fn with_clock(
        store: ExpenseStore,
        currency: impl Into<String>,
        clock: fn() -> DateTime<Utc>,
        today: NaiveDate,
    ) -> Self {
        let mut app = Self {
            running: true,
            screen: Screen::Dashboard,
            input_mode: InputMode::Normal,
            command_input: String::new(),
            status_message: String::new(),
            show_help: false,
            currency: currency.into(),

            store,
            clock,
            today,
            month: first_of_month(today),

            overview: Overview::compute(&[], &today),

            expense_index: 0,
            expense_scroll: 0,

            form: ExpenseForm::new(today),

            pending_action: None,
            confirm_message: String::new(),

            visible_rows: 20,
        };
        app.refresh();
        app
    }

    pub(crate) fn expenses(&self) -> &[Expense] {
        self.store.list()
    }

    pub(crate) fn selected_expense(&self) -> Option<&Expense> {
        self.store.list().get(self.expense_index)
    }

    /// Recompute derived views after any change to the store or the selected month.
    pub(crate) fn refresh(&mut self) {
        self.overview = Overview::compute(self.store.list(), &self.month);
        let len = self.store.len();
        if self.expense_index >= len {
            self.expense_index = len.saturating_sub(1);
        }
        if self.expense_scroll > self.expense_index {
            self.expense_scroll = self.expense_index;
        }
    }

    /// Add or update, depending on whether the form is editing an existing record.
    pub(crate) fn submit_form(&mut self) {
        let input = match self.form.to_input() {
            Ok(input) => input,
            Err(e) => {
                debug!("Form rejected: {e}");
                self.set_status(format!("Error: {e}"));
                return;
            }
        };
        let now = (self.clock)();

        match self.form.editing {
            Some(id) => match self.store.update(id, input, now) {
                Ok(expense) => {
                    let msg = format!("Expense updated: {}", expense.description);
                    self.form.reset(self.today);
                    self.input_mode = InputMode::Normal;
                    self.screen = Screen::Expenses;
                    self.set_status(msg);
                }
                Err(e) => self.report(e),
            },
            None => match self.store.add(input, now) {
                Ok(expense) => {
                    let msg = format!("Expense added: {}", expense.description);
                    self.form.reset(self.today);
                    self.expense_index = 0;
                    self.expense_scroll = 0;
                    self.set_status(msg);
                }
                Err(e) => self.report(e),
            },
        }
        self.refresh();
    }

    /// Load the selected expense into the form and switch to it.
    pub(crate) fn begin_edit_selected(&mut self) {
        match self.selected_expense() {
            Some(expense) => self.begin_edit(expense.id),
            None => self.set_status("No expense selected"),
        }
    }

    pub(crate) fn begin_edit(&mut self, id: ExpenseId) {
        let Some(expense) = self.store.get(id) else {
            self.report(Error::NotFound(id));
            return;
        };
        self.form = ExpenseForm::from_expense(expense);
        self.screen = Screen::Form;
        self.input_mode = InputMode::Form;
        self.set_status(format!("Editing expense #{id}"));
    }

    pub(crate) fn cancel_edit(&mut self) {
        self.form.reset(self.today);
        self.input_mode = InputMode::Normal;
        self.screen = Screen::Expenses;
        self.set_status("Edit cancelled");
    }

    /// Open a blank form for a new expense.
    pub(crate) fn begin_add(&mut self) {
        if self.form.editing.is_some() {
            self.form.reset(self.today);
        }
        self.screen = Screen::Form;
        self.input_mode = InputMode::Form;
    }

    /// Ask for confirmation before deleting the selected expense.
    pub(crate) fn request_delete_selected(&mut self) {
        let Some(expense) = self.selected_expense() else {
            self.set_status("No expense selected");
            return;
        };
        let id = expense.id;
        let description = expense.description.clone();
        self.confirm_message = format!("Delete '{description}'?");
        self.pending_action = Some(PendingAction::DeleteExpense { id, description });
        self.input_mode = InputMode::Confirm;
    }

    pub(crate) fn delete_expense(&mut self, id: ExpenseId) {
        match self.store.delete(id) {
            Ok(removed) => {
                if self.form.editing == Some(id) {
                    self.form.reset(self.today);
                }
                self.set_status(format!("Expense deleted: {}", removed.description));
            }
            Err(e) => self.report(e),
        }
        self.refresh();
    }

    pub(crate) fn add_expense(&mut self, input: expensetui::ExpenseInput) {
        let now = (self.clock)();
        match self.store.add(input, now) {
            Ok(expense) => {
                let msg = format!("Expense added: {}", expense.description);
                self.set_status(msg);
            }
            Err(e) => self.report(e),
        }
        self.refresh();
    }

    pub(crate) fn set_month(&mut self, any_day: NaiveDate) {
        self.month = first_of_month(any_day);
        self.refresh();
        self.set_status(format!("Showing {}", self.month.format("%B %Y")));
    }

    /// Move the selected month forwards or backwards.
    pub(crate) fn shift_month(&mut self, delta: i32) {
        let months = Months::new(delta.unsigned_abs());
        let shifted = if delta >= 0 {
            self.month.checked_add_months(months)
        } else {
            self.month.checked_sub_months(months)
        };
        match shifted {
            Some(month) => self.set_month(month),
            None => self.set_status("Month out of range"),
        }
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }

    fn report(&mut self, err: Error) {
        debug!("Store rejected change: {err}");
        self.set_status(format!("Error: {err}"));
    }
}

fn first_of_month(day: NaiveDate) -> NaiveDate {
    day.with_day(1).unwrap_or(day)
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
