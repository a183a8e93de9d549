use crate::flow::RequestState;
use crate::ui::theme::{
    ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_OK, STATUS_PENDING,
};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, model: Option<&str>, state: &RequestState) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let (model_label, model_style) = match model {
            Some(model) => (model.to_string(), text_style),
            None => ("no API key".to_string(), Style::default().fg(STATUS_ERROR)),
        };
        let status_color = match state {
            RequestState::Idle => HEADER_SEPARATOR,
            RequestState::Pending => STATUS_PENDING,
            RequestState::Succeeded { .. } => STATUS_OK,
            RequestState::Failed { .. } => STATUS_ERROR,
        };

        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(
                "AI Apology Generator",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(model_label, model_style),
            Span::styled("  │  ", separator_style),
            Span::styled("● ", Style::default().fg(status_color)),
            Span::styled(state.label(), text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
