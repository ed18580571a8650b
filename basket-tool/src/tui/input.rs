use basket_core::ViewMode;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::{BasketApp, Focus};

pub fn handle_event(app: &mut BasketApp, event: Event) {
    if let Event::Key(key) = event {
        if key.kind == KeyEventKind::Press {
            handle_key(app, key);
        }
    }
}

fn handle_key(app: &mut BasketApp, key: KeyEvent) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    match (app.list.view(), app.focus) {
        (ViewMode::Archived, _) => handle_archived_key(app, key),
        (ViewMode::Active, Focus::List) => handle_list_key(app, key),
        (ViewMode::Active, Focus::Form) => handle_form_key(app, key),
    }
}

fn handle_archived_key(app: &mut BasketApp, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        KeyCode::Char('v') => app.toggle_view(),
        KeyCode::Up | KeyCode::Char('k') => app.select_up(),
        KeyCode::Down | KeyCode::Char('j') => app.select_down(),
        _ => {}
    }
}

fn handle_list_key(app: &mut BasketApp, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        KeyCode::Char('v') => app.toggle_view(),
        KeyCode::Up | KeyCode::Char('k') => app.select_up(),
        KeyCode::Down | KeyCode::Char('j') => app.select_down(),
        KeyCode::Char('e') | KeyCode::Enter => app.begin_edit_selected(),
        KeyCode::Char('a') => app.archive_selected(),
        KeyCode::Tab => app.focus_form(),
        _ => {}
    }
}

fn handle_form_key(app: &mut BasketApp, key: KeyEvent) {
    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) => app.cancel(),
        (KeyCode::Enter, _) => app.submit(),
        (KeyCode::Tab | KeyCode::Down, _) => app.next_field(),
        (KeyCode::BackTab | KeyCode::Up, _) => app.prev_field(),
        (KeyCode::Left, _) => app.input_step(false),
        (KeyCode::Right, _) => app.input_step(true),
        (KeyCode::Backspace, _) => app.input_backspace(),
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => app.input_char(c),
        _ => {}
    }
}
