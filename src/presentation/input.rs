use crate::application::{App, AppMode};
use crate::infrastructure::SystemClipboard;
use crossterm::event::{KeyCode, KeyModifiers};
use std::time::Instant;

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key_event(app: &mut App, key: KeyCode, _modifiers: KeyModifiers) {
        match app.mode {
            AppMode::Normal => Self::handle_normal_mode(app, key),
            AppMode::EnteringRetailer => Self::handle_entry_mode(app, key),
            AppMode::Help => Self::handle_help_mode(app, key),
        }
    }

    fn handle_normal_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Up | KeyCode::Char('k') => {
                app.status_message = None;
                app.select_previous_retailer();
            }
            KeyCode::Down | KeyCode::Char('j') => {
                app.status_message = None;
                app.select_next_retailer();
            }
            KeyCode::Enter => {
                app.generate_selected();
            }
            KeyCode::Char('e') | KeyCode::Char('i') => {
                app.start_retailer_entry();
            }
            KeyCode::Char('c') => {
                Self::copy_generated_code(app);
            }
            KeyCode::F(1) | KeyCode::Char('?') => {
                app.mode = AppMode::Help;
                app.help_scroll = 0;
            }
            KeyCode::Char('q') => {
                // Will be handled by main loop
            }
            _ => {}
        }
    }

    /// Copies the generated code and arms the confirmation label.
    ///
    /// Does nothing unless a result is on screen. A clipboard failure
    /// becomes a status message and nothing more.
    fn copy_generated_code(app: &mut App) {
        let Some(code) = app.workflow.result().map(|result| result.code.clone()) else {
            return;
        };
        if let Err(error) = SystemClipboard::copy_text(&code) {
            app.status_message = Some(format!("Clipboard unavailable: {}", error));
        }
        app.mark_copied(Instant::now());
    }

    fn handle_entry_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Enter => {
                app.submit_retailer_entry();
            }
            KeyCode::Esc => {
                app.cancel_retailer_entry();
            }
            KeyCode::Backspace => {
                if app.cursor_position > 0 {
                    app.input.remove(app.cursor_position - 1);
                    app.cursor_position -= 1;
                }
            }
            KeyCode::Delete => {
                if app.cursor_position < app.input.len() {
                    app.input.remove(app.cursor_position);
                }
            }
            KeyCode::Left => {
                if app.cursor_position > 0 {
                    app.cursor_position -= 1;
                }
            }
            KeyCode::Right => {
                if app.cursor_position < app.input.len() {
                    app.cursor_position += 1;
                }
            }
            KeyCode::Home => {
                app.cursor_position = 0;
            }
            KeyCode::End => {
                app.cursor_position = app.input.len();
            }
            KeyCode::Char(c) => {
                app.input.insert(app.cursor_position, c);
                app.cursor_position += 1;
            }
            _ => {}
        }
    }

    fn handle_help_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') | KeyCode::Char('q') => {
                app.mode = AppMode::Normal;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if app.help_scroll > 0 {
                    app.help_scroll -= 1;
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                app.help_scroll += 1;
            }
            KeyCode::PageUp => {
                app.help_scroll = app.help_scroll.saturating_sub(5);
            }
            KeyCode::PageDown => {
                app.help_scroll += 5;
            }
            KeyCode::Home => {
                app.help_scroll = 0;
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Retailer, WorkflowState};

    fn retailer(name: &str) -> Retailer {
        Retailer::parse(name).unwrap()
    }

    #[test]
    fn test_entry_key_binding() {
        let mut app = App::default();

        // Initially in normal mode
        assert!(matches!(app.mode, AppMode::Normal));

        // Simulate 'e' key press
        InputHandler::handle_key_event(&mut app, KeyCode::Char('e'), KeyModifiers::NONE);

        // Should switch to free-text entry mode
        assert!(matches!(app.mode, AppMode::EnteringRetailer));
    }

    #[test]
    fn test_typing_and_submitting_retailer() {
        let mut app = App::default();
        app.start_retailer_entry();

        for c in "Macys".chars() {
            InputHandler::handle_key_event(&mut app, KeyCode::Char(c), KeyModifiers::NONE);
        }
        assert_eq!(app.input, "Macys");

        // Test backspace
        InputHandler::handle_key_event(&mut app, KeyCode::Backspace, KeyModifiers::NONE);
        assert_eq!(app.input, "Macy");

        InputHandler::handle_key_event(&mut app, KeyCode::Char('s'), KeyModifiers::NONE);
        InputHandler::handle_key_event(&mut app, KeyCode::Enter, KeyModifiers::NONE);

        assert_eq!(app.workflow, WorkflowState::Pending(retailer("Macys")));
        assert!(matches!(app.mode, AppMode::Normal));
    }

    #[test]
    fn test_blank_entry_enter_is_inert() {
        let mut app = App::default();
        app.start_retailer_entry();

        InputHandler::handle_key_event(&mut app, KeyCode::Enter, KeyModifiers::NONE);

        assert_eq!(app.workflow, WorkflowState::Idle);
        assert!(matches!(app.mode, AppMode::EnteringRetailer));
    }

    #[test]
    fn test_escape_cancels_entry() {
        let mut app = App::default();
        app.start_retailer_entry();
        InputHandler::handle_key_event(&mut app, KeyCode::Char('x'), KeyModifiers::NONE);

        InputHandler::handle_key_event(&mut app, KeyCode::Esc, KeyModifiers::NONE);

        assert!(matches!(app.mode, AppMode::Normal));
        assert!(app.input.is_empty());
        assert_eq!(app.workflow, WorkflowState::Idle);
    }

    #[test]
    fn test_catalog_enter_generates_for_highlight() {
        let mut app = App::default();

        InputHandler::handle_key_event(&mut app, KeyCode::Down, KeyModifiers::NONE);
        InputHandler::handle_key_event(&mut app, KeyCode::Enter, KeyModifiers::NONE);

        assert_eq!(app.workflow, WorkflowState::Pending(retailer("Walmart")));
    }

    #[test]
    fn test_generate_keys_bounce_off_pending() {
        let mut app = App::default();
        app.start_generation(retailer("Amazon"));

        // Catalog enter is inert while a request is outstanding
        InputHandler::handle_key_event(&mut app, KeyCode::Down, KeyModifiers::NONE);
        InputHandler::handle_key_event(&mut app, KeyCode::Enter, KeyModifiers::NONE);

        assert_eq!(app.workflow, WorkflowState::Pending(retailer("Amazon")));
    }

    #[test]
    fn test_help_key_binding() {
        let mut app = App::default();

        InputHandler::handle_key_event(&mut app, KeyCode::Char('?'), KeyModifiers::NONE);
        assert!(matches!(app.mode, AppMode::Help));

        InputHandler::handle_key_event(&mut app, KeyCode::Char('q'), KeyModifiers::NONE);
        assert!(matches!(app.mode, AppMode::Normal));
    }

    #[test]
    fn test_help_scrolling() {
        let mut app = App::default();
        app.mode = AppMode::Help;

        InputHandler::handle_key_event(&mut app, KeyCode::Down, KeyModifiers::NONE);
        InputHandler::handle_key_event(&mut app, KeyCode::PageDown, KeyModifiers::NONE);
        assert_eq!(app.help_scroll, 6);

        InputHandler::handle_key_event(&mut app, KeyCode::Home, KeyModifiers::NONE);
        assert_eq!(app.help_scroll, 0);
    }
}
