use std::collections::HashMap;
use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use expensetui::{ExpenseId, ExpenseInput, ValidationError};

use super::app::{App, InputMode, Screen};

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App),
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

const ADD_HELP: &str = "Add expense (e.g. :add 2024-01-15 food 45.99 Lunch)";

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit ExpenseTUI", cmd_quit, r);
    register_command!("quit", "Quit ExpenseTUI", cmd_quit, r);
    register_command!("d", "Go to Overview", cmd_dashboard, r);
    register_command!("dashboard", "Go to Overview", cmd_dashboard, r);
    register_command!("e", "Go to Expenses", cmd_expenses, r);
    register_command!("expenses", "Go to Expenses", cmd_expenses, r);
    register_command!("n", "Open the add form", cmd_new, r);
    register_command!("new", "Open the add form", cmd_new, r);
    register_command!("add", ADD_HELP, cmd_add, r);
    register_command!("a", ADD_HELP, cmd_add, r);
    register_command!("edit", "Edit selected expense, or by ID (:edit 3)", cmd_edit, r);
    register_command!("delete", "Delete selected expense", cmd_delete, r);
    register_command!("del", "Delete selected expense", cmd_delete, r);
    register_command!("month", "Set month (e.g. :month 2024-01)", cmd_month, r);
    register_command!("m", "Set month (e.g. :month 2024-01)", cmd_month, r);
    register_command!("next-month", "Go to next month", cmd_next_month, r);
    register_command!("prev-month", "Go to previous month", cmd_prev_month, r);
    register_command!("help", "Show available commands", cmd_help, r);
    register_command!("h", "Show available commands", cmd_help, r);

    r
});

pub(crate) fn handle_command(input: &str, app: &mut App) {
    let trimmed = input.trim();
    let mut parts = trimmed.splitn(2, ' ');
    let cmd_name = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        debug!(command = cmd_name, "Running command");
        (cmd.run)(args, app);
    } else {
        let suggestion = find_closest(cmd_name);
        app.set_status(format!(
            "Unknown command: :{cmd_name}. Did you mean :{suggestion}?"
        ));
    }
}

/// `(name, description)` for each distinct command, listed under its longest alias.
pub(crate) fn help_entries() -> Vec<(&'static str, &'static str)> {
    let mut by_description: HashMap<&'static str, &'static str> = HashMap::new();
    for (&name, cmd) in COMMANDS.iter() {
        let shown = by_description.entry(cmd.description).or_insert(name);
        if name.len() > shown.len() {
            *shown = name;
        }
    }
    let mut entries: Vec<_> = by_description
        .into_iter()
        .map(|(description, name)| (name, description))
        .collect();
    entries.sort_unstable();
    entries
}

fn find_closest(input: &str) -> String {
    COMMANDS
        .keys()
        .filter(|k| k.len() > 1) // skip single-letter aliases for suggestions
        .min_by_key(|k| (levenshtein(input, k), **k))
        .unwrap_or(&"help")
        .to_string()
}

fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Parse `<date> <category> <amount> <description…>`.
pub(crate) fn parse_add_args(args: &str) -> Result<ExpenseInput, AddArgsError> {
    let parts: Vec<&str> = args.split_whitespace().collect();
    if parts.len() < 4 {
        return Err(AddArgsError::Usage);
    }
    let description = parts[3..].join(" ");
    ExpenseInput::parse(parts[0], parts[1], &description, parts[2]).map_err(AddArgsError::Invalid)
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum AddArgsError {
    Usage,
    Invalid(ValidationError),
}

/// Accepts `YYYY-MM`, or a bare month number (`1`, `01`) within `current_year`.
pub(crate) fn parse_month(args: &str, current_year: i32) -> Option<NaiveDate> {
    let args = args.trim();
    let text = if args.len() <= 2 {
        format!("{current_year}-{args:0>2}-01")
    } else {
        format!("{args}-01")
    };
    NaiveDate::parse_from_str(&text, "%Y-%m-%d").ok()
}

// ── Command implementations ──────────────────────────────────

fn cmd_quit(_args: &str, app: &mut App) {
    app.running = false;
}

fn cmd_dashboard(_args: &str, app: &mut App) {
    app.screen = Screen::Dashboard;
}

fn cmd_expenses(_args: &str, app: &mut App) {
    app.screen = Screen::Expenses;
}

fn cmd_new(_args: &str, app: &mut App) {
    app.begin_add();
}

fn cmd_add(args: &str, app: &mut App) {
    match parse_add_args(args) {
        Ok(input) => app.add_expense(input),
        Err(AddArgsError::Usage) => app.set_status(
            "Usage: :add <date> <category> <amount> <description>. Example: :add 2024-01-15 food 45.99 Lunch",
        ),
        Err(AddArgsError::Invalid(e)) => app.set_status(format!("Error: {e}")),
    }
}

fn cmd_edit(args: &str, app: &mut App) {
    if !args.is_empty() {
        match args.trim_start_matches('#').parse::<ExpenseId>() {
            Ok(id) => app.begin_edit(id),
            Err(_) => app.set_status(format!("Invalid expense ID: {args}")),
        }
        return;
    }
    if app.screen != Screen::Expenses {
        app.set_status("Navigate to Expenses and select one first");
        return;
    }
    app.begin_edit_selected();
}

fn cmd_delete(_args: &str, app: &mut App) {
    if app.screen != Screen::Expenses {
        app.set_status("Navigate to Expenses and select one first");
        return;
    }
    app.request_delete_selected();
}

fn cmd_month(args: &str, app: &mut App) {
    if args.is_empty() {
        app.set_month(app.today);
        return;
    }
    match parse_month(args, app.month.year()) {
        Some(month) => app.set_month(month),
        None => app.set_status("Invalid month format. Use YYYY-MM (e.g. 2024-01)"),
    }
}

fn cmd_next_month(_args: &str, app: &mut App) {
    app.shift_month(1);
}

fn cmd_prev_month(_args: &str, app: &mut App) {
    app.shift_month(-1);
}

fn cmd_help(_args: &str, app: &mut App) {
    app.show_help = true;
    app.input_mode = InputMode::Normal;
}
