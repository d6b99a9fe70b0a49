use crate::application::{App, AppMode};
use crossterm::event::{KeyCode, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key_event(app: &mut App, key: KeyCode, _modifiers: KeyModifiers) {
        match app.mode {
            AppMode::Browse => Self::handle_browse_mode(app, key),
            AppMode::AddCard => Self::handle_add_card_mode(app, key),
        }
    }

    fn handle_browse_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Left | KeyCode::Char('h') => {
                app.previous_card();
            }
            KeyCode::Right | KeyCode::Char('l') => {
                app.next_card();
            }
            KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Char('f') => {
                app.flip_card();
            }
            KeyCode::Char('a') => {
                app.open_add_form();
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                app.delete_current_card();
            }
            KeyCode::Char('q') => {
                // Will be handled by main loop
            }
            _ => {}
        }
    }

    fn handle_add_card_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Enter => {
                app.submit_add_card();
            }
            KeyCode::Esc => {
                app.close_add_form();
            }
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Down | KeyCode::Up => {
                app.switch_draft_field();
            }
            KeyCode::Backspace => {
                if app.cursor_position > 0 {
                    let position = prev_char_boundary(app.active_draft(), app.cursor_position);
                    app.active_draft_mut().remove(position);
                    app.cursor_position = position;
                }
            }
            KeyCode::Delete => {
                if app.cursor_position < app.active_draft().len() {
                    let position = app.cursor_position;
                    app.active_draft_mut().remove(position);
                }
            }
            KeyCode::Left => {
                if app.cursor_position > 0 {
                    app.cursor_position = prev_char_boundary(app.active_draft(), app.cursor_position);
                }
            }
            KeyCode::Right => {
                if app.cursor_position < app.active_draft().len() {
                    app.cursor_position = next_char_boundary(app.active_draft(), app.cursor_position);
                }
            }
            KeyCode::Home => {
                app.cursor_position = 0;
            }
            KeyCode::End => {
                app.cursor_position = app.active_draft().len();
            }
            KeyCode::Char(c) => {
                let position = app.cursor_position;
                app.active_draft_mut().insert(position, c);
                app.cursor_position += c.len_utf8();
            }
            _ => {}
        }
    }
}

/// Start of the character preceding `position`. The cursor always
/// sits on a char boundary, so stepping back one full character keeps
/// `String::insert`/`remove` safe for multi-byte text.
fn prev_char_boundary(text: &str, position: usize) -> usize {
    text[..position]
        .chars()
        .next_back()
        .map(|c| position - c.len_utf8())
        .unwrap_or(0)
}

/// End of the character starting at `position`.
fn next_char_boundary(text: &str, position: usize) -> usize {
    text[position..]
        .chars()
        .next()
        .map(|c| position + c.len_utf8())
        .unwrap_or(position)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{App, AppMode, DraftField};

    fn press(app: &mut App, key: KeyCode) {
        InputHandler::handle_key_event(app, key, KeyModifiers::NONE);
    }

    #[test]
    fn test_navigation_key_bindings() {
        let mut app = App::default();

        press(&mut app, KeyCode::Right);
        assert_eq!(app.current_index, 1);

        press(&mut app, KeyCode::Char('l'));
        assert_eq!(app.current_index, 2);

        press(&mut app, KeyCode::Left);
        assert_eq!(app.current_index, 1);

        press(&mut app, KeyCode::Char('h'));
        assert_eq!(app.current_index, 0);
    }

    #[test]
    fn test_flip_key_bindings() {
        let mut app = App::default();

        press(&mut app, KeyCode::Char(' '));
        assert!(app.flipped);

        press(&mut app, KeyCode::Char('f'));
        assert!(!app.flipped);

        press(&mut app, KeyCode::Enter);
        assert!(app.flipped);
    }

    #[test]
    fn test_add_form_key_binding() {
        let mut app = App::default();

        press(&mut app, KeyCode::Char('a'));

        assert!(matches!(app.mode, AppMode::AddCard));
        assert_eq!(app.active_field, DraftField::Question);
    }

    #[test]
    fn test_delete_key_binding() {
        let mut app = App::default();

        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.deck.len(), 4);

        press(&mut app, KeyCode::Delete);
        assert_eq!(app.deck.len(), 3);
    }

    #[test]
    fn test_quit_key_leaves_state_alone() {
        let mut app = App::default();

        press(&mut app, KeyCode::Char('q'));

        assert!(matches!(app.mode, AppMode::Browse));
        assert_eq!(app.current_index, 0);
        assert_eq!(app.deck.len(), 5);
    }

    #[test]
    fn test_typing_into_drafts() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('a'));

        for c in "Hi?".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.draft_question, "Hi?");

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.active_field, DraftField::Answer);

        for c in "Yes".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.draft_answer, "Yes");
    }

    #[test]
    fn test_draft_editing_keys() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('a'));
        for c in "abcd".chars() {
            press(&mut app, KeyCode::Char(c));
        }

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.draft_question, "abc");

        press(&mut app, KeyCode::Home);
        press(&mut app, KeyCode::Delete);
        assert_eq!(app.draft_question, "bc");

        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.draft_question, "bxc");

        press(&mut app, KeyCode::End);
        press(&mut app, KeyCode::Char('!'));
        assert_eq!(app.draft_question, "bxc!");
    }

    #[test]
    fn test_typing_multibyte_characters() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('a'));

        for c in "café!".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.draft_question, "café!");
        assert_eq!(app.cursor_position, "café!".len());

        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.draft_question, "caf");
    }

    #[test]
    fn test_cursor_editing_with_multibyte_characters() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('a'));
        for c in "née".chars() {
            press(&mut app, KeyCode::Char(c));
        }

        press(&mut app, KeyCode::Home);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Delete); // removes the é
        assert_eq!(app.draft_question, "ne");

        press(&mut app, KeyCode::Char('é'));
        assert_eq!(app.draft_question, "née");

        press(&mut app, KeyCode::Left); // back over the é
        press(&mut app, KeyCode::Backspace); // removes the n
        assert_eq!(app.draft_question, "ée");
        assert_eq!(app.cursor_position, 0);
    }

    #[test]
    fn test_escape_cancels_form_and_clears_drafts() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Char('x'));

        press(&mut app, KeyCode::Esc);

        assert!(matches!(app.mode, AppMode::Browse));
        assert!(app.draft_question.is_empty());
    }

    #[test]
    fn test_enter_submits_form() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Char('q'));
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('a'));

        press(&mut app, KeyCode::Enter);

        assert!(matches!(app.mode, AppMode::Browse));
        assert_eq!(app.deck.len(), 6);
    }

    #[test]
    fn test_enter_with_blank_drafts_keeps_form_open() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('a'));

        press(&mut app, KeyCode::Enter);

        assert!(matches!(app.mode, AppMode::AddCard));
        assert_eq!(app.deck.len(), 5);
    }
}
