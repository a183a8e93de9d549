use crate::ui::app::{App, PageKind};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Rows moved by PgUp/PgDn in the output panel.
const OUTPUT_PAGE_ROWS: i32 = 5;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    app.clear_notice();

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if is_ctrl_char(key, 'a') {
        app.toggle_page(PageKind::About);
        return;
    }

    if is_ctrl_char(key, 't') {
        app.toggle_page(PageKind::Guide);
        return;
    }

    // Pages are read-only; only Esc gets past them.
    if app.open_page().is_some() {
        if key.code == KeyCode::Esc {
            app.close_page();
        }
        return;
    }

    if is_ctrl_char(key, 'y') {
        app.copy_result();
        return;
    }

    if is_ctrl_char(key, 'j') || (key.code == KeyCode::Enter && key.modifiers.contains(KeyModifiers::ALT)) {
        app.push_char('\n');
        return;
    }

    match key.code {
        KeyCode::Enter => app.generate(),
        KeyCode::Up => app.scroll_output(-1),
        KeyCode::Down => app.scroll_output(1),
        KeyCode::PageUp => app.scroll_output(-OUTPUT_PAGE_ROWS),
        KeyCode::PageDown => app.scroll_output(OUTPUT_PAGE_ROWS),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Tab => app.push_char('\t'),
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            app.push_char(c);
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char(c) if c.eq_ignore_ascii_case(&ch))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::{ClipboardError, ClipboardWriter};
    use crate::flow::{ApologyFlow, FlowSettings, RequestState};
    use crate::provider::NOT_CONFIGURED_MESSAGE;
    use std::sync::mpsc;
    use std::sync::Arc;

    struct NullClipboard;

    impl ClipboardWriter for NullClipboard {
        fn write_text(&self, _text: &str) -> Result<(), ClipboardError> {
            Ok(())
        }
    }

    fn app() -> App {
        let flow = ApologyFlow::new(None, Arc::new(NullClipboard), FlowSettings::default());
        let (tx, _rx) = mpsc::channel();
        App::new(flow, tx)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn typing_edits_description() {
        let mut app = app();
        for c in "hi!".chars() {
            handle_key(&mut app, press(KeyCode::Char(c)));
        }
        handle_key(&mut app, press(KeyCode::Backspace));
        handle_key(&mut app, ctrl('j'));
        assert_eq!(app.flow().description(), "hi\n");
    }

    #[test]
    fn enter_with_blank_input_is_inert() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Char(' ')));
        handle_key(&mut app, press(KeyCode::Enter));
        assert_eq!(app.state(), &RequestState::Idle);
    }

    #[test]
    fn enter_without_api_key_shows_configuration_error() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Char('x')));
        handle_key(&mut app, press(KeyCode::Enter));
        assert_eq!(app.state().error(), Some(NOT_CONFIGURED_MESSAGE));
    }

    #[test]
    fn page_toggles_and_blocks_typing() {
        let mut app = app();
        handle_key(&mut app, ctrl('a'));
        assert_eq!(app.open_page(), Some(PageKind::About));

        handle_key(&mut app, press(KeyCode::Char('x')));
        assert_eq!(app.flow().description(), "");

        handle_key(&mut app, ctrl('t'));
        assert_eq!(app.open_page(), Some(PageKind::Guide));

        handle_key(&mut app, press(KeyCode::Esc));
        assert_eq!(app.open_page(), None);
    }

    #[test]
    fn ctrl_q_quits() {
        let mut app = app();
        handle_key(&mut app, ctrl('q'));
        assert!(app.should_quit());
    }

    #[test]
    fn paste_normalizes_line_endings() {
        let mut app = app();
        app.push_str("line one\r\nline two\r");
        assert_eq!(app.flow().description(), "line one\nline two\n");
    }
}
