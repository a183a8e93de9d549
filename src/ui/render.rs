use crate::flow::RequestState;
use crate::pages::Page;
use crate::ui::app::{App, Focus};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{body_regions, centered_rect, layout_regions};
use crate::ui::theme::{
    ACCENT, GLOBAL_BORDER, HEADER_TEXT, PLACEHOLDER_TEXT, POPUP_BORDER, STATUS_ERROR, STATUS_OK,
};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

/// Spinner animation frames.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const PLACEHOLDER: &str = "Describe the situation and what you're apologizing for...";

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let flow = app.flow();

    frame.render_widget(Header::new().widget(flow.model(), flow.state()), header);

    let (input, trigger, output) = body_regions(body);
    render_input(frame, input, app);
    render_trigger(frame, trigger, app);
    render_output(frame, output, app);

    frame.render_widget(
        Footer::new().widget(footer, flow.ack().is_copied(), app.notice()),
        footer,
    );

    if let Some(kind) = app.open_page() {
        render_page(frame, body, kind.page());
    }
}

fn render_input(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let description = app.flow().description();
    let focused = app.focus() == Focus::Form;

    let mut lines: Vec<Line> = if description.is_empty() {
        vec![Line::from(Span::styled(
            PLACEHOLDER,
            Style::default().fg(PLACEHOLDER_TEXT),
        ))]
    } else {
        description
            .split('\n')
            .map(|line| Line::from(Span::styled(line.to_string(), Style::default().fg(HEADER_TEXT))))
            .collect()
    };

    // Caret at the end of the text.
    if focused && !description.is_empty() {
        if let Some(last) = lines.last_mut() {
            last.push_span(Span::styled("▏", Style::default().fg(ACCENT)));
        }
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });

    // Keep the tail visible once the wrapped text outgrows the field.
    let rows = paragraph.line_count(area.width.saturating_sub(2));
    let skip = rows_to_u16(rows).saturating_sub(area.height.saturating_sub(2));

    let border = if focused { ACCENT } else { GLOBAL_BORDER };
    let widget = paragraph.scroll((skip, 0)).block(
        Block::default()
            .title(" Describe the situation ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border)),
    );
    frame.render_widget(widget, area);
}

fn rows_to_u16(rows: usize) -> u16 {
    u16::try_from(rows).unwrap_or(u16::MAX)
}

fn render_trigger(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let flow = app.flow();
    let line = if flow.state().is_pending() {
        let spinner = SPINNER_FRAMES[(app.spinner_tick() as usize) % SPINNER_FRAMES.len()];
        Line::from(vec![
            Span::styled(format!(" {} ", spinner), Style::default().fg(ACCENT)),
            Span::styled("Creating Magic...", Style::default().fg(HEADER_TEXT)),
        ])
    } else if flow.can_submit() {
        Line::from(vec![
            Span::styled(
                " [ Enter ] ",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("Generate Apology", Style::default().fg(HEADER_TEXT)),
        ])
    } else {
        Line::from(Span::styled(
            " [ Enter ] Generate Apology",
            Style::default().fg(PLACEHOLDER_TEXT),
        ))
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn render_output(frame: &mut Frame<'_>, area: Rect, app: &App) {
    if area.height == 0 {
        return;
    }
    let state = app.flow().state();
    let copied = app.flow().ack().is_copied();

    let (title, border, lines) = match state {
        RequestState::Idle => (
            String::new(),
            GLOBAL_BORDER,
            vec![
                Line::from(""),
                Line::from(Span::styled(
                    "Generate sincere, heartfelt apologies in seconds.",
                    Style::default().fg(HEADER_TEXT),
                )),
                Line::from(Span::styled(
                    "Ctrl+T shows tips for effective apologies.",
                    Style::default().fg(PLACEHOLDER_TEXT),
                )),
            ],
        ),
        RequestState::Pending => (
            String::new(),
            GLOBAL_BORDER,
            vec![Line::from(Span::styled(
                "Waiting for the provider...",
                Style::default().fg(PLACEHOLDER_TEXT),
            ))],
        ),
        RequestState::Succeeded { result } => {
            let title = if copied {
                " Your Apology  ✓ Copied! ".to_string()
            } else {
                " Your Apology  (Ctrl+Y: Copy) ".to_string()
            };
            let border = if copied { STATUS_OK } else { ACCENT };
            let lines = result
                .lines()
                .map(|line| Line::from(Span::styled(line.to_string(), Style::default().fg(HEADER_TEXT))))
                .collect();
            (title, border, lines)
        }
        RequestState::Failed { error } => (
            " Error ".to_string(),
            STATUS_ERROR,
            vec![Line::from(Span::styled(
                error.clone(),
                Style::default().fg(STATUS_ERROR),
            ))],
        ),
    };

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    let rows = rows_to_u16(paragraph.line_count(area.width.saturating_sub(2)));
    let max_scroll = rows.saturating_sub(area.height.saturating_sub(2));
    app.set_output_scroll_limit(max_scroll);

    let title = if max_scroll > 0 {
        format!("{}(PgUp/PgDn: Scroll) ", title)
    } else {
        title
    };

    let widget = paragraph.scroll((app.output_scroll(), 0)).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border)),
    );
    frame.render_widget(widget, area);
}

fn render_page(frame: &mut Frame<'_>, body: Rect, page: &Page) {
    let area = centered_rect(80, 90, body);
    let mut lines = vec![
        Line::from(Span::styled(
            page.tagline,
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::ITALIC),
        )),
    ];
    for section in page.sections {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            section.heading,
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )));
        lines.extend(
            section
                .lines
                .iter()
                .map(|line| Line::from(Span::styled(*line, Style::default().fg(HEADER_TEXT)))),
        );
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Esc: Close",
        Style::default().fg(PLACEHOLDER_TEXT),
    )));

    frame.render_widget(Clear, area);
    let popup = Block::default()
        .title(Span::styled(
            format!(" {} ", page.title),
            Style::default().fg(ACCENT),
        ))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    let widget = Paragraph::new(lines).wrap(Wrap { trim: false }).block(popup);
    frame.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::{ClipboardError, ClipboardWriter};
    use crate::flow::{ApologyFlow, FlowSettings};
    use crate::provider::{GenerationError, TextGenerator};
    use crate::ui::input::handle_key;
    use async_trait::async_trait;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::sync::mpsc;
    use std::sync::Arc;

    struct NullClipboard;

    impl ClipboardWriter for NullClipboard {
        fn write_text(&self, _text: &str) -> Result<(), ClipboardError> {
            Ok(())
        }
    }

    struct EchoGenerator;

    #[async_trait]
    impl TextGenerator for EchoGenerator {
        fn name(&self) -> &'static str {
            "echo"
        }

        async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
            Ok(prompt.to_string())
        }
    }

    fn long_apology() -> String {
        let words: Vec<String> = (0..400).map(|i| format!("w{}", i)).collect();
        format!("{}\n\nSincerely, ENDMARK", words.join(" "))
    }

    /// App whose output panel shows `result`.
    fn app_with_result(result: String) -> App {
        let flow = ApologyFlow::new(
            Some(Arc::new(EchoGenerator)),
            Arc::new(NullClipboard),
            FlowSettings::default(),
        );
        let (tx, _rx) = mpsc::channel();
        let mut app = App::new(flow, tx);
        app.push_str("I missed the meeting");
        app.generate();
        app.on_generation_finished(Ok(result));
        app
    }

    fn press(app: &mut App, code: KeyCode, times: usize) {
        for _ in 0..times {
            handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
        }
    }

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    fn app() -> App {
        let flow = ApologyFlow::new(None, Arc::new(NullClipboard), FlowSettings::default());
        let (tx, _rx) = mpsc::channel();
        App::new(flow, tx)
    }

    #[test]
    fn idle_screen_shows_placeholder_and_missing_key() {
        let text = screen_text(&app());
        assert!(text.contains("Describe the situation"));
        assert!(text.contains("no API key"));
    }

    #[test]
    fn failed_state_shows_error_panel() {
        let mut app = app();
        app.push_str("I broke the vase");
        app.generate();
        let text = screen_text(&app);
        assert!(text.contains("API key not configured"));
    }

    #[test]
    fn about_page_renders_over_form() {
        let mut app = app();
        app.toggle_page(crate::ui::app::PageKind::About);
        let text = screen_text(&app);
        assert!(text.contains("Our Mission"));
    }

    #[tokio::test]
    async fn long_result_can_be_scrolled_to_its_end() {
        let mut app = app_with_result(long_apology());

        let first = screen_text(&app);
        assert!(first.contains("w0 "));
        assert!(!first.contains("ENDMARK"));
        assert!(first.contains("PgUp/PgDn: Scroll"));

        press(&mut app, KeyCode::PageDown, 100);
        let end = screen_text(&app);
        assert!(end.contains("ENDMARK"));
        assert!(!end.contains("w0 "));

        // Scrolling past the end is clamped, so one page up moves right away.
        press(&mut app, KeyCode::PageUp, 1);
        assert!(!screen_text(&app).contains("ENDMARK"));
    }

    #[tokio::test]
    async fn new_submission_resets_output_scroll() {
        let mut app = app_with_result(long_apology());
        screen_text(&app);
        press(&mut app, KeyCode::Down, 3);
        assert_eq!(app.output_scroll(), 3);

        app.generate();
        assert_eq!(app.output_scroll(), 0);
    }

    #[test]
    fn wrapped_description_keeps_its_tail_visible() {
        let mut app = app();
        app.push_str(&format!("{}TAILMARK", "sorry ".repeat(200)));
        let text = screen_text(&app);
        assert!(text.contains("TAILMARK"));
    }
}
