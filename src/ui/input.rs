use crate::ui::app::{App, Focus};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::SystemTime;

/// Action to take after processing a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// No further action needed (handled internally).
    None,
    /// Start a transformation call.
    Generate,
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> InputAction {
    if key.kind != KeyEventKind::Press {
        return InputAction::None;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return InputAction::None;
    }
    if is_ctrl_char(key, 'g') {
        return InputAction::Generate;
    }
    if is_ctrl_char(key, 'x') {
        app.clear_source();
        return InputAction::None;
    }
    if is_ctrl_char(key, 'd') {
        app.download(SystemTime::now());
        return InputAction::None;
    }

    match key.code {
        KeyCode::Tab | KeyCode::BackTab => app.cycle_focus(),
        KeyCode::Esc => app.dismiss(),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Enter => match app.focus() {
            Focus::Path => app.submit_path(),
            Focus::Presets => app.choose_preset_at_cursor(),
            Focus::Custom => return InputAction::Generate,
        },
        KeyCode::Up if app.focus() == Focus::Presets => app.move_preset_cursor(-1),
        KeyCode::Down if app.focus() == Focus::Presets => app.move_preset_cursor(1),
        KeyCode::Char(ch) if app.focus() == Focus::Presets => {
            if let Some(digit) = ch.to_digit(10) {
                if digit > 0 {
                    app.choose_preset(digit as usize - 1);
                }
            }
        }
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            let mut buf = [0u8; 4];
            app.insert_text(ch.encode_utf8(&mut buf));
        }
        _ => {}
    }
    InputAction::None
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
    }

    fn app() -> App {
        App::new(std::env::temp_dir(), false, "m")
    }

    #[test]
    fn ctrl_g_requests_generate() {
        let mut app = app();
        assert_eq!(handle_key(&mut app, ctrl('g')), InputAction::Generate);
    }

    #[test]
    fn ctrl_q_quits() {
        let mut app = app();
        handle_key(&mut app, ctrl('q'));
        assert!(app.should_quit());
    }

    #[test]
    fn digits_pick_presets_when_list_focused() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Tab));
        handle_key(&mut app, press(KeyCode::Char('3')));
        assert_eq!(app.studio().state().style.preset_index(), 2);
        assert_eq!(app.preset_cursor(), 2);
    }

    #[test]
    fn arrows_then_enter_pick_preset() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Tab));
        handle_key(&mut app, press(KeyCode::Down));
        handle_key(&mut app, press(KeyCode::Enter));
        assert_eq!(app.studio().state().style.preset_index(), 1);
    }

    #[test]
    fn chars_go_to_path_field() {
        let mut app = app();
        for ch in "a.png".chars() {
            handle_key(&mut app, press(KeyCode::Char(ch)));
        }
        assert_eq!(app.path_input(), "a.png");
    }

    #[test]
    fn enter_in_custom_field_generates() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Tab));
        handle_key(&mut app, press(KeyCode::Tab));
        assert_eq!(handle_key(&mut app, press(KeyCode::Enter)), InputAction::Generate);
    }
}
