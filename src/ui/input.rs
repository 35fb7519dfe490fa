use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::{App, View};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match app.view() {
        View::Catalog => handle_catalog_key(app, key),
        View::Gallery => handle_gallery_key(app, key),
    }
}

fn handle_catalog_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
        KeyCode::Enter => app.open_selected(),
        KeyCode::Char('n') => app.next_page(),
        KeyCode::Char('p') => app.prev_page(),
        KeyCode::Char('c') => app.cycle_category(),
        KeyCode::Char('r') => app.request_products(),
        _ => {}
    }
}

fn handle_gallery_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => app.close_gallery(),
        KeyCode::Left => app.gallery_retreat(),
        KeyCode::Right => app.gallery_advance(),
        KeyCode::Char(ch) if ch.is_ascii_digit() => {
            // Dots are numbered from 1 on screen.
            let index = ch.to_digit(10).unwrap_or(0) as usize;
            if index > 0 {
                app.gallery_jump(index - 1);
            }
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char(ch)
}
