use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tracing::{debug, error, info};

use expensetui::ExpenseStore;

use crate::config::Settings;
use crate::ui::app::{App, InputMode, PendingAction, Screen};
use crate::ui::commands;
use crate::ui::form::FormField;
use crate::ui::util::{scroll_down, scroll_to_bottom, scroll_to_top, scroll_up};

pub(crate) fn as_tui(store: ExpenseStore, settings: &Settings) -> Result<()> {
    let mut app = App::new(store, settings.currency.clone());

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    match &result {
        Ok(()) => info!(records = app.expenses().len(), "Session ended"),
        Err(e) => {
            error!("Session failed: {e:?}");
            eprintln!("Error: {e:?}");
        }
    }

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while app.running {
        terminal.draw(|f| {
            // tab bar, status bar, command bar, two borders and a table header
            let content_height = f.area().height.saturating_sub(6) as usize;
            app.visible_rows = content_height.max(1);
            crate::ui::render::render(f, app);
        })?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if app.show_help {
                app.show_help = false;
                continue;
            }
            match app.input_mode {
                InputMode::Normal => handle_normal_input(key, app),
                InputMode::Command => handle_command_input(key, app),
                InputMode::Form => handle_form_input(key, app),
                InputMode::Confirm => handle_confirm_input(key, app),
            }
        }
    }
    Ok(())
}

// ── Input handlers ───────────────────────────────────────────

fn handle_normal_input(key: event::KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('q') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.running = false;
        }
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            for _ in 0..app.visible_rows / 2 {
                handle_move_down(app);
            }
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            for _ in 0..app.visible_rows / 2 {
                handle_move_up(app);
            }
        }
        KeyCode::Char(':') => {
            app.input_mode = InputMode::Command;
            app.command_input.clear();
        }
        KeyCode::Char('?') => {
            app.show_help = true;
        }
        KeyCode::Char('1') => app.screen = Screen::Dashboard,
        KeyCode::Char('2') => app.screen = Screen::Expenses,
        KeyCode::Char('3') => app.begin_add(),
        KeyCode::Tab => cycle_screen(app, true),
        KeyCode::BackTab => cycle_screen(app, false),
        KeyCode::Char('j') | KeyCode::Down => handle_move_down(app),
        KeyCode::Char('k') | KeyCode::Up => handle_move_up(app),
        KeyCode::Char('g') if app.screen == Screen::Expenses => {
            scroll_to_top(&mut app.expense_index, &mut app.expense_scroll);
        }
        KeyCode::Char('G') if app.screen == Screen::Expenses => {
            let len = app.expenses().len();
            scroll_to_bottom(
                &mut app.expense_index,
                &mut app.expense_scroll,
                len,
                app.visible_rows,
            );
        }
        KeyCode::Char('H') => app.shift_month(-1),
        KeyCode::Char('L') => app.shift_month(1),
        KeyCode::Char('n') | KeyCode::Char('a') => app.begin_add(),
        KeyCode::Char('e') | KeyCode::Enter if app.screen == Screen::Expenses => {
            app.begin_edit_selected();
        }
        KeyCode::Char('D') if app.screen == Screen::Expenses => {
            app.request_delete_selected();
        }
        KeyCode::Char('i') | KeyCode::Enter if app.screen == Screen::Form => {
            app.input_mode = InputMode::Form;
        }
        KeyCode::Esc => {
            app.status_message.clear();
        }
        _ => {}
    }
}

fn handle_command_input(key: event::KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Enter => {
            let input = app.command_input.clone();
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
            commands::handle_command(&input, app);
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
        }
        KeyCode::Backspace => {
            app.command_input.pop();
            if app.command_input.is_empty() {
                app.input_mode = InputMode::Normal;
            }
        }
        KeyCode::Char(c) => {
            app.command_input.push(c);
        }
        _ => {}
    }
}

fn handle_form_input(key: event::KeyEvent, app: &mut App) {
    if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.running = false;
        return;
    }
    let on_category = app.form.focus == FormField::Category;
    match key.code {
        KeyCode::Enter => app.submit_form(),
        KeyCode::Esc => {
            if app.form.editing.is_some() {
                app.cancel_edit();
            } else {
                app.input_mode = InputMode::Normal;
            }
        }
        KeyCode::Tab | KeyCode::Down => app.form.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.form.focus_prev(),
        KeyCode::Right if on_category => app.form.cycle_category(true),
        KeyCode::Left if on_category => app.form.cycle_category(false),
        KeyCode::Backspace => app.form.backspace(),
        KeyCode::Char(c) => app.form.push_char(c),
        _ => {}
    }
}

fn handle_confirm_input(key: event::KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            if let Some(action) = app.pending_action.take() {
                match action {
                    PendingAction::DeleteExpense { id, description } => {
                        debug!(%id, %description, "Delete confirmed");
                        app.delete_expense(id);
                    }
                }
            }
            app.input_mode = InputMode::Normal;
            app.confirm_message.clear();
        }
        _ => {
            // Any other key = cancel
            app.pending_action = None;
            app.input_mode = InputMode::Normal;
            app.confirm_message.clear();
            app.set_status("Cancelled");
        }
    }
}

// ── Navigation helpers ───────────────────────────────────────

fn cycle_screen(app: &mut App, forward: bool) {
    let screens = Screen::all();
    let idx = screens.iter().position(|s| *s == app.screen).unwrap_or(0);
    let next = if forward {
        (idx + 1) % screens.len()
    } else {
        (idx + screens.len() - 1) % screens.len()
    };
    match screens[next] {
        Screen::Form => app.begin_add(),
        screen => app.screen = screen,
    }
}

fn handle_move_down(app: &mut App) {
    if app.screen == Screen::Expenses {
        let len = app.expenses().len();
        scroll_down(
            &mut app.expense_index,
            &mut app.expense_scroll,
            len,
            app.visible_rows,
        );
    }
}

fn handle_move_up(app: &mut App) {
    if app.screen == Screen::Expenses {
        scroll_up(&mut app.expense_index, &mut app.expense_scroll);
    }
}
