// ABOUTME: Keyboard input handling for the TUI — translates key events into actions.
// ABOUTME: Handles tab switching, scrolling, quick-action keys, and line editing.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::chat::QuickAction;
use crate::tui::state::{Tab, TuiState};

/// The result of processing a key event.
#[derive(Debug, PartialEq)]
pub enum InputResult {
    /// No action needed.
    None,
    /// User submitted a message.
    Send(String),
    /// User triggered a quick action.
    QuickAction(QuickAction),
    /// User wants to quit.
    Quit,
}

/// Function key bound to each quick action, in bar order.
pub fn quick_action_key(action: QuickAction) -> KeyCode {
    match action {
        QuickAction::Shelter => KeyCode::F(1),
        QuickAction::Food => KeyCode::F(2),
        QuickAction::Healthcare => KeyCode::F(3),
        QuickAction::Map => KeyCode::F(4),
    }
}

/// Process a key event against the current TUI state and return the resulting action.
///
/// While `sending` is true the input line is read-only; quick actions are
/// still reported and left for the session to reject.
pub fn handle_key(state: &mut TuiState, key: KeyEvent, sending: bool) -> InputResult {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return InputResult::Quit;
    }

    match key.code {
        KeyCode::Tab => {
            state.select_tab(state.tab.next());
            return InputResult::None;
        }
        KeyCode::BackTab => {
            state.select_tab(state.tab.prev());
            return InputResult::None;
        }
        KeyCode::Esc => return InputResult::Quit,
        _ => {}
    }

    if handle_scroll_key(state, key.code) {
        return InputResult::None;
    }

    if state.tab != Tab::Chat {
        return InputResult::None;
    }

    if let Some(action) = QuickAction::ALL
        .into_iter()
        .find(|a| quick_action_key(*a) == key.code)
    {
        state.scroll_offset = 0;
        return InputResult::QuickAction(action);
    }

    if sending {
        return InputResult::None;
    }

    match key.code {
        KeyCode::Enter => {
            if let Some(text) = state.submit_input() {
                InputResult::Send(text)
            } else {
                InputResult::None
            }
        }
        KeyCode::Char(c) => {
            state.insert_char_at_cursor(c);
            InputResult::None
        }
        KeyCode::Backspace => {
            state.backspace_char();
            InputResult::None
        }
        KeyCode::Delete => {
            state.delete_char_at_cursor();
            InputResult::None
        }
        KeyCode::Left => {
            state.move_cursor_left();
            InputResult::None
        }
        KeyCode::Right => {
            state.move_cursor_right();
            InputResult::None
        }
        KeyCode::Home => {
            state.move_cursor_home();
            InputResult::None
        }
        KeyCode::End => {
            state.move_cursor_end();
            InputResult::None
        }
        _ => InputResult::None,
    }
}

fn handle_scroll_key(state: &mut TuiState, key: KeyCode) -> bool {
    match key {
        KeyCode::PageUp => state.scroll_up(10),
        KeyCode::PageDown => state.scroll_down(10),
        KeyCode::Up => state.scroll_up(1),
        KeyCode::Down => state.scroll_down(1),
        _ => return false,
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn new_state() -> TuiState {
        TuiState::new("http://localhost:8000/chat".to_string())
    }

    #[test]
    fn typing_appends_to_input() {
        let mut state = new_state();
        let result = handle_key(&mut state, make_key(KeyCode::Char('h')), false);
        assert_eq!(result, InputResult::None);
        assert_eq!(state.input, "h");
        assert_eq!(state.cursor_pos, 1);

        handle_key(&mut state, make_key(KeyCode::Char('i')), false);
        assert_eq!(state.input, "hi");
        assert_eq!(state.cursor_pos, 2);
    }

    #[test]
    fn enter_submits_input() {
        let mut state = new_state();
        state.input = "I need shelter".to_string();
        state.cursor_pos = 14;
        let result = handle_key(&mut state, make_key(KeyCode::Enter), false);
        assert_eq!(result, InputResult::Send("I need shelter".to_string()));
        assert_eq!(state.input, "");
        assert_eq!(state.cursor_pos, 0);
    }

    #[test]
    fn enter_on_blank_does_nothing() {
        let mut state = new_state();
        state.input = "   ".to_string();
        let result = handle_key(&mut state, make_key(KeyCode::Enter), false);
        assert_eq!(result, InputResult::None);
    }

    #[test]
    fn sending_makes_input_read_only() {
        let mut state = new_state();
        state.input = "draft".to_string();
        state.cursor_pos = 5;
        assert_eq!(
            handle_key(&mut state, make_key(KeyCode::Char('x')), true),
            InputResult::None
        );
        assert_eq!(
            handle_key(&mut state, make_key(KeyCode::Enter), true),
            InputResult::None
        );
        assert_eq!(state.input, "draft");
    }

    #[test]
    fn sending_still_allows_scroll_keys() {
        let mut state = new_state();
        state.scroll_offset = 2;
        handle_key(&mut state, make_key(KeyCode::Up), true);
        assert_eq!(state.scroll_offset, 3);
        handle_key(&mut state, make_key(KeyCode::Down), true);
        assert_eq!(state.scroll_offset, 2);
        handle_key(&mut state, make_key(KeyCode::PageUp), true);
        assert_eq!(state.scroll_offset, 12);
    }

    #[test]
    fn function_keys_trigger_quick_actions() {
        let mut state = new_state();
        assert_eq!(
            handle_key(&mut state, make_key(KeyCode::F(1)), false),
            InputResult::QuickAction(QuickAction::Shelter)
        );
        assert_eq!(
            handle_key(&mut state, make_key(KeyCode::F(2)), false),
            InputResult::QuickAction(QuickAction::Food)
        );
        assert_eq!(
            handle_key(&mut state, make_key(KeyCode::F(4)), true),
            InputResult::QuickAction(QuickAction::Map)
        );
    }

    #[test]
    fn tab_cycles_views() {
        let mut state = new_state();
        handle_key(&mut state, make_key(KeyCode::Tab), false);
        assert_eq!(state.tab, Tab::Resources);
        handle_key(&mut state, make_key(KeyCode::Tab), false);
        assert_eq!(state.tab, Tab::Emergency);
        handle_key(&mut state, make_key(KeyCode::BackTab), false);
        assert_eq!(state.tab, Tab::Resources);
    }

    #[test]
    fn directory_tabs_ignore_typing_and_quick_actions() {
        let mut state = new_state();
        state.select_tab(Tab::Emergency);
        assert_eq!(
            handle_key(&mut state, make_key(KeyCode::Char('a')), false),
            InputResult::None
        );
        assert_eq!(
            handle_key(&mut state, make_key(KeyCode::F(1)), false),
            InputResult::None
        );
        assert_eq!(state.input, "");

        handle_key(&mut state, make_key(KeyCode::Down), false);
        assert_eq!(state.directory_scroll, 1);
    }

    #[test]
    fn ctrl_c_and_esc_quit() {
        let mut state = new_state();
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key(&mut state, key, true), InputResult::Quit);
        assert_eq!(
            handle_key(&mut state, make_key(KeyCode::Esc), false),
            InputResult::Quit
        );
    }

    #[test]
    fn unicode_editing_through_key_events() {
        let mut state = new_state();
        handle_key(&mut state, make_key(KeyCode::Char('🙂')), false);
        handle_key(&mut state, make_key(KeyCode::Char('é')), false);
        assert_eq!(state.input, "🙂é");
        assert_eq!(state.cursor_pos, 2);

        handle_key(&mut state, make_key(KeyCode::Left), false);
        handle_key(&mut state, make_key(KeyCode::Delete), false);
        assert_eq!(state.input, "🙂");
        assert_eq!(state.cursor_pos, 1);

        handle_key(&mut state, make_key(KeyCode::Backspace), false);
        assert_eq!(state.input, "");
        assert_eq!(state.cursor_pos, 0);
    }
}
