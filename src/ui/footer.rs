use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR, STATUS_OK};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HINTS: &str =
    " Enter: Generate │ Ctrl+J: Newline │ Ctrl+Y: Copy │ Ctrl+T: Guide │ Ctrl+A: About │ Ctrl+Q: Quit";

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    /// `notice` replaces the key hints; `copied` shows the copy confirmation.
    pub fn widget(&self, area: Rect, copied: bool, notice: Option<&str>) -> Paragraph<'static> {
        let version = format!("v{} ", VERSION);
        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let (left, left_style) = match (notice, copied) {
            (Some(notice), _) => (format!(" {}", notice), Style::default().fg(STATUS_ERROR)),
            (None, true) => (" ✓ Copied!".to_string(), Style::default().fg(STATUS_OK)),
            (None, false) => (HINTS.to_string(), text_style),
        };

        // Calculate padding using char count, not byte count (for Unicode)
        let left_width = left.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(left_width)
            .saturating_sub(version_width);

        let line = Line::from(vec![
            Span::styled(left, left_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
