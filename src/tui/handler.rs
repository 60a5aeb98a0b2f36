//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the
//! current screen.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Route};
use super::event::Event;
use super::views::register::RegisterField;
use crate::models::TransactionType;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick | Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return Ok(());
    }

    // The register form takes every key, including digits and 'q'
    if app.route == Route::Register {
        return handle_register_key(app, key);
    }

    handle_normal_key(app, key)
}

/// Handle keys on the dashboard and summary screens
fn handle_normal_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.quit();
            return Ok(());
        }
        KeyCode::Char(c @ '1'..='9') => {
            if let Some(route) = Route::from_digit(c) {
                app.clear_status();
                app.switch_route(route);
            }
            return Ok(());
        }
        KeyCode::Tab => {
            app.clear_status();
            app.switch_route(app.route.next());
            return Ok(());
        }
        KeyCode::BackTab => {
            app.clear_status();
            app.switch_route(app.route.prev());
            return Ok(());
        }
        KeyCode::Char('r') => {
            app.focus();
            return Ok(());
        }
        _ => {}
    }

    match app.route {
        Route::Dashboard => match key.code {
            KeyCode::Char('j') | KeyCode::Down => app.move_down(),
            KeyCode::Char('k') | KeyCode::Up => app.move_up(),
            _ => {}
        },
        Route::Resume => match key.code {
            KeyCode::Char('h') | KeyCode::Left => app.prev_month(),
            KeyCode::Char('l') | KeyCode::Right => app.next_month(),
            _ => {}
        },
        Route::Register => {}
    }

    Ok(())
}

/// Handle keys on the register screen
fn handle_register_key(app: &mut App, key: KeyEvent) -> Result<()> {
    let form = &mut app.register_form;

    if form.is_picking_category() {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => form.picker_up(),
            KeyCode::Down | KeyCode::Char('j') => form.picker_down(),
            KeyCode::Enter => form.confirm_category(),
            KeyCode::Esc => form.close_category_picker(),
            _ => {}
        }
        return Ok(());
    }

    match key.code {
        KeyCode::Esc => {
            app.switch_route(Route::Dashboard);
            return Ok(());
        }
        KeyCode::Tab => {
            form.next_field();
            return Ok(());
        }
        KeyCode::BackTab => {
            form.prev_field();
            return Ok(());
        }
        KeyCode::Enter => {
            if form.focused_field == RegisterField::Category {
                form.open_category_picker();
            } else {
                app.submit_register();
            }
            return Ok(());
        }
        _ => {}
    }

    match form.focused_field {
        RegisterField::Name | RegisterField::Amount => {
            if let Some(input) = form.focused_input_mut() {
                match key.code {
                    KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        input.clear()
                    }
                    KeyCode::Char(c) => input.insert(c),
                    KeyCode::Backspace => input.backspace(),
                    KeyCode::Delete => input.delete(),
                    KeyCode::Left => input.move_left(),
                    KeyCode::Right => input.move_right(),
                    KeyCode::Home => input.move_start(),
                    KeyCode::End => input.move_end(),
                    _ => {}
                }
            }
        }
        RegisterField::Type => match key.code {
            KeyCode::Left | KeyCode::Char('i') => form.select_kind(TransactionType::Positive),
            KeyCode::Right | KeyCode::Char('o') => form.select_kind(TransactionType::Negative),
            KeyCode::Char(' ') => form.toggle_kind(),
            _ => {}
        },
        RegisterField::Category => {
            if key.code == KeyCode::Char(' ') {
                form.open_category_picker();
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::Settings;
    use crate::storage::Storage;

    fn press(app: &mut App, code: KeyCode) {
        handle_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE))).unwrap();
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_number_keys_switch_routes() {
        let storage = Storage::in_memory();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);

        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.route, Route::Resume);
        assert!(app.resume.is_some());

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.route, Route::Register);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.route, Route::Dashboard);
    }

    #[test]
    fn test_quit_keys() {
        let storage = Storage::in_memory();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);

        let mut app = App::new(&storage, &settings);
        app.switch_route(Route::Register);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        assert_eq!(app.register_form.name.value(), "q");

        handle_event(
            &mut app,
            Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        )
        .unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn test_month_keys() {
        let storage = Storage::in_memory();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);
        app.switch_route(Route::Resume);
        let start = app.selected_month;

        press(&mut app, KeyCode::Left);
        assert_eq!(app.selected_month, start.prev());
        press(&mut app, KeyCode::Char('l'));
        press(&mut app, KeyCode::Char('l'));
        assert_eq!(app.selected_month, start.next());
    }

    #[test]
    fn test_register_flow_with_keys() {
        let storage = Storage::in_memory();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);
        press(&mut app, KeyCode::Char('3'));

        type_text(&mut app, "Pizza");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "59,90");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.register_form.category.map(|c| c.key), Some("food"));

        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.route, Route::Dashboard);
        let stored = storage.transactions.get_all().unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].name, "Pizza");
        assert_eq!(stored[0].amount.cents(), 5990);
        assert_eq!(stored[0].kind, TransactionType::Negative);
        assert_eq!(stored[0].category, "food");
    }

    #[test]
    fn test_ctrl_u_clears_focused_input() {
        let storage = Storage::in_memory();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);
        app.switch_route(Route::Register);

        type_text(&mut app, "Rent");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "1200");
        handle_event(
            &mut app,
            Event::Key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL)),
        )
        .unwrap();

        assert_eq!(app.register_form.amount.value(), "");
        assert_eq!(app.register_form.name.value(), "Rent");

        type_text(&mut app, "900");
        assert_eq!(app.register_form.amount.value(), "900");
    }

    #[test]
    fn test_register_missing_type_keeps_form() {
        let storage = Storage::in_memory();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);
        app.switch_route(Route::Register);

        type_text(&mut app, "Rent");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "1200");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.route, Route::Register);
        assert_eq!(
            app.register_form.error.as_deref(),
            Some("Select the transaction type")
        );
        assert_eq!(app.register_form.name.value(), "Rent");
        assert_eq!(storage.transactions.count().unwrap(), 0);
    }
}
